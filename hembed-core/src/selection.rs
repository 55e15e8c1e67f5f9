//! Hierarchical heading selection
//!
//! Selecting a heading disables every heading nested below it, up to the next
//! heading at the same or a shallower level. State transitions are pure:
//! [`SelectionState::apply`] takes the current state and an event and returns
//! the next state, so the rules can be tested without any rendering.
//!
//! Headings are identified by their index in document order, so two headings
//! with the same text are selected independently.

use std::collections::BTreeSet;

use crate::heading::Heading;

/// A user action on the heading list
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SelectionEvent {
    /// Flip the checkbox of the heading at this index
    Toggle(usize),
    /// Reset, then select every top-level heading in document order
    SelectAllTopLevel,
    /// Reset all selections and disabled flags
    ClearAll,
}

/// Selected and disabled headings
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SelectionState {
    /// Selected indices, in the order they were selected
    selected: Vec<usize>,
    disabled: BTreeSet<usize>,
}

impl SelectionState {
    /// Create an empty selection
    pub fn new() -> Self {
        Self::default()
    }

    /// Compute the state that follows `event`
    pub fn apply(mut self, headings: &[Heading], event: SelectionEvent) -> Self {
        match event {
            SelectionEvent::Toggle(index) => {
                if index >= headings.len() || self.is_disabled(index) {
                    return self;
                }
                if self.is_selected(index) {
                    self.toggle_off(headings, index);
                } else {
                    self.toggle_on(headings, index);
                }
            }
            SelectionEvent::SelectAllTopLevel => {
                self.clear();
                for (index, heading) in headings.iter().enumerate() {
                    if heading.top {
                        self.toggle_on(headings, index);
                    }
                }
            }
            SelectionEvent::ClearAll => self.clear(),
        }
        self
    }

    pub fn is_selected(&self, index: usize) -> bool {
        self.selected.contains(&index)
    }

    pub fn is_disabled(&self, index: usize) -> bool {
        self.disabled.contains(&index)
    }

    /// Selected indices in selection order
    pub fn selected(&self) -> &[usize] {
        &self.selected
    }

    pub fn disabled(&self) -> &BTreeSet<usize> {
        &self.disabled
    }

    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    fn toggle_on(&mut self, headings: &[Heading], index: usize) {
        if !self.is_selected(index) {
            self.selected.push(index);
        }
        for child in descendants(headings, index) {
            self.disabled.insert(child);
            self.selected.retain(|&i| i != child);
        }
    }

    fn toggle_off(&mut self, headings: &[Heading], index: usize) {
        self.selected.retain(|&i| i != index);
        for child in descendants(headings, index) {
            self.disabled.remove(&child);
        }
    }

    fn clear(&mut self) {
        self.selected.clear();
        self.disabled.clear();
    }
}

/// Indices of the headings nested under `index`: the run of following
/// headings with a strictly greater level.
fn descendants(headings: &[Heading], index: usize) -> impl Iterator<Item = usize> + '_ {
    let level = headings[index].level;
    headings[index + 1..]
        .iter()
        .take_while(move |h| h.level > level)
        .enumerate()
        .map(move |(offset, _)| index + 1 + offset)
}

/// A selection bound to the heading list of one note
#[derive(Clone, Debug)]
pub struct HeadingSelector {
    headings: Vec<Heading>,
    state: SelectionState,
}

impl HeadingSelector {
    pub fn new(headings: Vec<Heading>) -> Self {
        Self {
            headings,
            state: SelectionState::new(),
        }
    }

    /// Apply an event to the current selection
    pub fn dispatch(&mut self, event: SelectionEvent) {
        let state = std::mem::take(&mut self.state);
        self.state = state.apply(&self.headings, event);
    }

    pub fn toggle(&mut self, index: usize) {
        self.dispatch(SelectionEvent::Toggle(index));
    }

    pub fn select_all_top_level(&mut self) {
        self.dispatch(SelectionEvent::SelectAllTopLevel);
    }

    pub fn clear(&mut self) {
        self.dispatch(SelectionEvent::ClearAll);
    }

    pub fn headings(&self) -> &[Heading] {
        &self.headings
    }

    pub fn state(&self) -> &SelectionState {
        &self.state
    }

    /// Index of the first heading whose text matches exactly
    pub fn find(&self, text: &str) -> Option<usize> {
        self.headings.iter().position(|h| h.text == text)
    }

    /// Texts of the selected headings, in selection order
    pub fn selected_texts(&self) -> Vec<String> {
        self.state
            .selected()
            .iter()
            .map(|&i| self.headings[i].text.clone())
            .collect()
    }

    /// Consume the selector, yielding the selected heading texts
    pub fn finish(self) -> Vec<String> {
        self.selected_texts()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::heading::parse_headings;

    fn selector(text: &str) -> HeadingSelector {
        HeadingSelector::new(parse_headings(text))
    }

    fn disabled(sel: &HeadingSelector) -> Vec<usize> {
        sel.state().disabled().iter().copied().collect()
    }

    #[test]
    fn test_toggle_disables_children() {
        let mut sel = selector("# A\n## B\n## C\n# D\n");
        sel.toggle(0);

        assert_eq!(sel.state().selected(), &[0]);
        assert_eq!(disabled(&sel), vec![1, 2]);
        assert!(!sel.state().is_disabled(3));
        assert_eq!(sel.selected_texts(), vec!["A".to_string()]);
    }

    #[test]
    fn test_toggle_off_does_not_reselect_children() {
        let mut sel = selector("# A\n## B\n### C\n## D\n# E\n");
        sel.toggle(3);
        sel.toggle(0);
        assert_eq!(sel.state().selected(), &[0]);

        sel.toggle(0);
        assert!(sel.state().is_empty());
        assert!(sel.state().disabled().is_empty());
    }

    #[test]
    fn test_toggle_on_then_off_is_identity_from_empty() {
        let text = "# A\n## B\n### C\n## D\n# E\n## F\n";
        let headings = parse_headings(text);

        for index in 0..headings.len() {
            let start = SelectionState::new();
            let next = start
                .clone()
                .apply(&headings, SelectionEvent::Toggle(index))
                .apply(&headings, SelectionEvent::Toggle(index));
            assert_eq!(next, start, "heading {index}");
        }
    }

    #[test]
    fn test_cascade_stops_at_same_level() {
        let mut sel = selector("## A\n### B\n#### C\n### D\n## E\n### F\n");
        sel.toggle(1);

        assert_eq!(disabled(&sel), vec![2]);
        assert!(!sel.state().is_disabled(3));
        assert!(!sel.state().is_disabled(5));
    }

    #[test]
    fn test_cascade_deselects_selected_children() {
        let mut sel = selector("# A\n## B\n## C\n# D\n");
        sel.toggle(1);
        sel.toggle(3);
        sel.toggle(0);

        assert_eq!(sel.state().selected(), &[3, 0]);
        assert!(!sel.state().is_selected(1));
        assert_eq!(disabled(&sel), vec![1, 2]);
    }

    #[test]
    fn test_toggle_disabled_is_ignored() {
        let mut sel = selector("# A\n## B\n");
        sel.toggle(0);
        let before = sel.state().clone();

        sel.toggle(1);
        assert_eq!(sel.state(), &before);
    }

    #[test]
    fn test_toggle_out_of_range_is_ignored() {
        let mut sel = selector("# A\n");
        sel.toggle(7);
        assert!(sel.state().is_empty());
    }

    #[test]
    fn test_last_heading_has_no_descendants() {
        let mut sel = selector("# A\n## B\n");
        sel.toggle(1);
        assert_eq!(sel.state().selected(), &[1]);
        assert!(sel.state().disabled().is_empty());
    }

    #[test]
    fn test_select_all_top_level() {
        let mut sel = selector("### Intro\n## Part\n### Detail\n# Title\n## Tail\n");
        sel.toggle(2);
        sel.select_all_top_level();

        assert_eq!(sel.state().selected(), &[0, 1, 3]);
        assert_eq!(disabled(&sel), vec![2, 4]);
    }

    #[test]
    fn test_select_all_matches_sequential_toggles() {
        let text = "## a\n# b\n### c\n## d\n# e\n###### f\n";
        let headings = parse_headings(text);

        let bulk = SelectionState::new().apply(&headings, SelectionEvent::SelectAllTopLevel);
        let sequential = headings
            .iter()
            .enumerate()
            .filter(|(_, h)| h.top)
            .fold(SelectionState::new(), |state, (i, _)| {
                state.apply(&headings, SelectionEvent::Toggle(i))
            });

        assert_eq!(bulk, sequential);
    }

    #[test]
    fn test_clear_all() {
        let mut sel = selector("# A\n## B\n# C\n");
        sel.select_all_top_level();
        sel.clear();

        assert!(sel.state().is_empty());
        assert!(sel.state().disabled().is_empty());
    }

    #[test]
    fn test_duplicate_texts_are_independent() {
        let mut sel = selector("# Notes\n## Summary\n# Other\n## Summary\n");
        sel.toggle(3);

        assert_eq!(sel.state().selected(), &[3]);
        assert!(!sel.state().is_selected(1));
        assert_eq!(sel.find("Summary"), Some(1));
    }

    #[test]
    fn test_selected_texts_in_selection_order() {
        let mut sel = selector("# A\n# B\n# C\n");
        sel.toggle(2);
        sel.toggle(0);
        sel.toggle(1);

        assert_eq!(sel.finish(), vec!["C", "A", "B"]);
    }

    #[test]
    fn test_selected_and_disabled_never_overlap() {
        let text = "# A\n## B\n### C\n## D\n# E\n### F\n## G\n";
        let mut sel = selector(text);
        for index in [2, 1, 0, 5, 4, 0, 6, 3, 1] {
            sel.toggle(index);
            for &i in sel.state().selected() {
                assert!(!sel.state().is_disabled(i));
            }
        }
    }
}

//! Heading extraction from Markdown notes

/// A heading in a markdown note
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Heading {
    pub level: u8,
    pub text: String,
    /// True when no earlier heading had a smaller level
    pub top: bool,
    pub line: usize,
}

/// Extract ATX headings from markdown text, in document order
pub fn parse_headings(text: &str) -> Vec<Heading> {
    let mut headings = Vec::new();
    let mut min_level = u8::MAX;

    for (line_idx, line) in text.lines().enumerate() {
        let Some((level, rest)) = parse_atx_heading(line) else {
            continue;
        };

        let top = level <= min_level;
        if top {
            min_level = level;
        }

        headings.push(Heading {
            level,
            text: rest.trim().to_string(),
            top,
            line: line_idx,
        });
    }

    log::debug!("parsed {} headings", headings.len());
    headings
}

/// Parse an ATX heading line, returning the level and the raw remainder.
///
/// The hashes must start at column 0 and be followed by at least one
/// whitespace character plus at least one more character.
fn parse_atx_heading(line: &str) -> Option<(u8, &str)> {
    let hash_count = line.bytes().take_while(|&b| b == b'#').count();
    if hash_count == 0 || hash_count > 6 {
        return None;
    }

    let rest = &line[hash_count..];
    let mut chars = rest.chars();
    match (chars.next(), chars.next()) {
        (Some(sep), Some(_)) if sep.is_whitespace() => Some((hash_count as u8, rest)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn summary(headings: &[Heading]) -> Vec<(u8, &str, bool)> {
        headings
            .iter()
            .map(|h| (h.level, h.text.as_str(), h.top))
            .collect()
    }

    #[test]
    fn test_parse_headings_empty() {
        assert!(parse_headings("").is_empty());
    }

    #[test]
    fn test_no_heading_lines() {
        let text = "Just text\nNot a #heading\n\n- list item\n";
        assert!(parse_headings(text).is_empty());
    }

    #[test]
    fn test_sibling_sections() {
        let text = "# A\n## B\n## C\n# D\n";
        let headings = parse_headings(text);

        assert_eq!(
            summary(&headings),
            vec![
                (1, "A", true),
                (2, "B", false),
                (2, "C", false),
                (1, "D", true),
            ]
        );
        assert_eq!(headings[3].line, 3);
    }

    #[test]
    fn test_all_levels() {
        let text = "# H1\n## H2\n### H3\n#### H4\n##### H5\n###### H6\n";
        let headings = parse_headings(text);

        assert_eq!(headings.len(), 6);
        for (i, heading) in headings.iter().enumerate() {
            assert_eq!(heading.level, (i + 1) as u8);
        }
    }

    #[test]
    fn test_seven_hashes_not_heading() {
        assert!(parse_headings("####### Not a heading\n").is_empty());
    }

    #[test]
    fn test_requires_whitespace_after_hashes() {
        assert!(parse_headings("#tag\n##also-not\n").is_empty());
    }

    #[test]
    fn test_leading_whitespace_not_heading() {
        assert!(parse_headings("  # Indented\n").is_empty());
    }

    #[test]
    fn test_text_is_trimmed() {
        let headings = parse_headings("##\t  Spaced out   \n");
        assert_eq!(headings.len(), 1);
        assert_eq!(headings[0].level, 2);
        assert_eq!(headings[0].text, "Spaced out");
    }

    #[test]
    fn test_whitespace_only_heading_has_empty_text() {
        let headings = parse_headings("#  \n# \n#\n");
        assert_eq!(headings.len(), 1);
        assert_eq!(headings[0].text, "");
        assert_eq!(headings[0].line, 0);
    }

    #[test]
    fn test_crlf_line_endings() {
        let headings = parse_headings("# One\r\n## Two\r\n");
        assert_eq!(summary(&headings), vec![(1, "One", true), (2, "Two", false)]);
    }

    #[test]
    fn test_top_tracks_running_minimum() {
        // A deeper heading before any shallower one is still top.
        let text = "### Intro\n## Part\n### Detail\n## Part 2\n# Title\n## Tail\n";
        let headings = parse_headings(text);

        assert_eq!(
            summary(&headings),
            vec![
                (3, "Intro", true),
                (2, "Part", true),
                (3, "Detail", false),
                (2, "Part 2", true),
                (1, "Title", true),
                (2, "Tail", false),
            ]
        );
    }

    #[test]
    fn test_top_headings_never_exceed_prior_minimum() {
        let text = "## a\n# b\n### c\n## d\n# e\n###### f\n";
        let headings = parse_headings(text);

        for (j, heading) in headings.iter().enumerate() {
            let min_before = headings[..j].iter().map(|h| h.level).min().unwrap_or(u8::MAX);
            assert_eq!(heading.top, heading.level <= min_before);
        }
    }

    #[test]
    fn test_unicode_text() {
        let headings = parse_headings("# Заголовок\n## Ünïcødé ✓\n");
        assert_eq!(headings[0].text, "Заголовок");
        assert_eq!(headings[1].text, "Ünïcødé ✓");
    }
}

//! Embed link formatting

/// Format an embed link pointing at a heading of another note
pub fn embed_link(basename: &str, heading: &str) -> String {
    format!("![[{basename}#{heading}]]")
}

/// Format one embed line per heading, newline-joined, with a trailing newline
pub fn format_embeds<S: AsRef<str>>(basename: &str, headings: &[S]) -> String {
    let mut out = headings
        .iter()
        .map(|h| embed_link(basename, h.as_ref()))
        .collect::<Vec<_>>()
        .join("\n");
    out.push('\n');
    out
}

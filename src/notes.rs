// ABOUTME: Speaker-note extraction for Slideas pages
// ABOUTME: Collects `^` lines into a fenced Reveal.js notes block

use crate::line::LineKind;

/// Build the notes block for a page, or an empty string when the page has no notes.
/// Note markers inside code blocks are content, not notes.
pub fn extract_notes(page: &str) -> String {
    let mut in_code = false;
    let mut entries = Vec::new();

    for line in page.lines() {
        match LineKind::classify(line) {
            LineKind::Fence => in_code = !in_code,
            LineKind::Note(text) if !in_code => entries.push(text),
            _ => {}
        }
    }

    format_notes(&entries)
}

/// Wrap note entries in a notes block; no entries yields an empty string.
pub fn format_notes(entries: &[&str]) -> String {
    if entries.is_empty() {
        return String::new();
    }
    let mut parts = Vec::with_capacity(entries.len() + 2);
    parts.push("::: {.notes}");
    parts.extend_from_slice(entries);
    parts.push(":::");
    format!("{}\n", parts.join("\n\n"))
}

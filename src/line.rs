// ABOUTME: Line classifier for the Slideas dialect
// ABOUTME: Tags every raw line with the kind of construct it starts

/// Delimiter that opens and closes a verbatim code block.
pub const FENCE: &str = "```";

/// Prefix of a speaker-note line.
pub const NOTE_MARKER: char = '^';

/// Directive that switches the rest of a page into a two-column layout.
pub const SPLIT_DIRECTIVE: &str = "Layout: Split";

/// Prefix shared by every layout directive.
pub const LAYOUT_PREFIX: &str = "Layout:";

/// Separates the columns of a split layout.
pub const COLUMN_SEPARATOR: &str = "+++";

/// The closed set of line kinds the page processor dispatches on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind<'a> {
    /// `#`..`######` followed by a space (or nothing).
    Heading { level: usize, text: &'a str },
    /// Opens or closes a code block, depending on position.
    Fence,
    /// Speaker note, with the marker and one following space removed.
    Note(&'a str),
    /// `Layout: Split`.
    SplitDirective,
    /// Any other `Layout:` directive. Dropped from output.
    LayoutDirective,
    /// `+++`.
    ColumnSeparator,
    Plain,
}

impl<'a> LineKind<'a> {
    pub fn classify(line: &'a str) -> Self {
        if line.starts_with(FENCE) {
            return LineKind::Fence;
        }
        if let Some(rest) = line.strip_prefix(NOTE_MARKER) {
            return LineKind::Note(rest.strip_prefix(' ').unwrap_or(rest));
        }
        if line.trim_end() == SPLIT_DIRECTIVE {
            return LineKind::SplitDirective;
        }
        if line.starts_with(LAYOUT_PREFIX) {
            return LineKind::LayoutDirective;
        }
        if line.trim_end() == COLUMN_SEPARATOR {
            return LineKind::ColumnSeparator;
        }
        if let Some((level, text)) = parse_heading(line) {
            return LineKind::Heading { level, text };
        }
        LineKind::Plain
    }
}

fn parse_heading(line: &str) -> Option<(usize, &str)> {
    let level = line.bytes().take_while(|&b| b == b'#').count();
    if level == 0 || level > 6 {
        return None;
    }
    let rest = &line[level..];
    if rest.is_empty() {
        return Some((level, ""));
    }
    rest.strip_prefix(' ').map(|text| (level, text.trim()))
}

/// Render a heading at the given level.
pub fn heading(level: usize, text: &str) -> String {
    format!("{} {}", "#".repeat(level), text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_headings() {
        assert_eq!(
            LineKind::classify("## Title"),
            LineKind::Heading { level: 2, text: "Title" }
        );
        assert_eq!(
            LineKind::classify("### Sub  "),
            LineKind::Heading { level: 3, text: "Sub" }
        );
        assert_eq!(LineKind::classify("#hashtag"), LineKind::Plain);
        assert_eq!(LineKind::classify("####### too deep"), LineKind::Plain);
    }

    #[test]
    fn test_classify_directives() {
        assert_eq!(LineKind::classify("Layout: Split"), LineKind::SplitDirective);
        assert_eq!(LineKind::classify("Layout: Title"), LineKind::LayoutDirective);
        assert_eq!(LineKind::classify("+++"), LineKind::ColumnSeparator);
        assert_eq!(LineKind::classify("```python"), LineKind::Fence);
    }

    #[test]
    fn test_classify_notes_strip_one_space() {
        assert_eq!(LineKind::classify("^ A note"), LineKind::Note("A note"));
        assert_eq!(LineKind::classify("^tight"), LineKind::Note("tight"));
        assert_eq!(LineKind::classify("^  indented"), LineKind::Note(" indented"));
    }
}

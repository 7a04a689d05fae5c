// ABOUTME: Page processor for Slideas decks
// ABOUTME: Walks one page's classified lines and assembles the Reveal.js slide text

use crate::errors::{Result, SlideasError};
use crate::header::HeaderNormalizer;
use crate::layout;
use crate::line::LineKind;
use crate::notes;

/// Marks a slide boundary in the output.
pub const PAGE_BREAK: &str = "---";

/// A processed page, before it is rendered to text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page {
    pub title: Option<String>,
    pub body: Vec<String>,
    pub notes: String,
}

impl Page {
    /// Convert one page of dialect text. `page_index` is the 0-based position
    /// among content pages and is only used for error reporting here.
    pub fn parse(text: &str, page_index: usize) -> Result<Self> {
        let lines: Vec<&str> = text.lines().collect();
        let mut headers = HeaderNormalizer::new();
        let mut body: Vec<String> = Vec::new();
        let mut pos = 0;

        while pos < lines.len() {
            let rest = &lines[pos..];
            let line = rest[0];

            let consumed = match LineKind::classify(line) {
                LineKind::Fence => {
                    let n = code_block_extent(rest).ok_or_else(|| {
                        SlideasError::UnterminatedFence {
                            page: page_index,
                            line: pos + 1,
                        }
                    })?;
                    body.extend(rest[..n].iter().map(|l| l.to_string()));
                    n
                }
                LineKind::SplitDirective => {
                    let after = &rest[1..];
                    if let Some(offset) = second_split_directive(after) {
                        return Err(SlideasError::MultipleSplitLayouts {
                            page: page_index,
                            line: pos + 2 + offset,
                        });
                    }
                    let n = layout::split_extent(after);
                    if let Some(offset) = unclosed_fence(&after[..n]) {
                        return Err(SlideasError::UnterminatedFence {
                            page: page_index,
                            line: pos + 2 + offset,
                        });
                    }
                    let columns = layout::format_split(&after[..n]);
                    body.extend(columns.lines().map(str::to_string));
                    // The split block owns the rest of the page.
                    break;
                }
                LineKind::Note(_) | LineKind::LayoutDirective => 1,
                LineKind::Heading { level, text } => {
                    if let Some(out) = headers.visit(line, level, text) {
                        body.push(out);
                    }
                    1
                }
                LineKind::ColumnSeparator | LineKind::Plain => {
                    body.push(line.to_string());
                    1
                }
            };
            pos += consumed;
        }

        Ok(Page {
            title: headers.finish(body.len()),
            body,
            notes: notes::extract_notes(text),
        })
    }

    /// Render the slide. The first content page leaves its title to the
    /// deck's title slide.
    pub fn render(&self, page_index: usize) -> String {
        let mut lines: Vec<&str> = Vec::with_capacity(self.body.len() + 1);
        match &self.title {
            None => lines.push(PAGE_BREAK),
            Some(title) if page_index > 0 => lines.push(title),
            Some(_) => {}
        }
        lines.extend(self.body.iter().map(String::as_str));

        let mut output = lines.join("\n");
        output.push('\n');
        if !self.notes.is_empty() {
            output.push('\n');
            output.push_str(&self.notes);
        }
        output.push('\n');
        output.push_str(PAGE_BREAK);
        output.push('\n');
        output
    }
}

/// Convert one page of dialect text into slide text.
pub fn process_page(text: &str, page_index: usize) -> Result<String> {
    Ok(Page::parse(text, page_index)?.render(page_index))
}

/// Lines consumed by the code block opening at `lines[0]`, both fences included.
/// `None` when the block is never closed.
pub fn code_block_extent(lines: &[&str]) -> Option<usize> {
    lines
        .iter()
        .skip(1)
        .position(|line| LineKind::classify(line) == LineKind::Fence)
        .map(|close| close + 2)
}

/// Offset of the first code block that is opened but never closed.
fn unclosed_fence(lines: &[&str]) -> Option<usize> {
    let mut pos = 0;
    while pos < lines.len() {
        if LineKind::classify(lines[pos]) != LineKind::Fence {
            pos += 1;
            continue;
        }
        match code_block_extent(&lines[pos..]) {
            Some(n) => pos += n,
            None => return Some(pos),
        }
    }
    None
}

/// Offset of another split directive outside code blocks, if any.
fn second_split_directive(lines: &[&str]) -> Option<usize> {
    let mut in_code = false;
    for (i, line) in lines.iter().enumerate() {
        match LineKind::classify(line) {
            LineKind::Fence => in_code = !in_code,
            LineKind::SplitDirective if !in_code => return Some(i),
            _ => {}
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_title_body_and_notes() {
        let page = Page::parse("# Title\nSome body\n^ A note\n", 1).unwrap();
        assert_eq!(page.title.as_deref(), Some("# Title"));
        assert_eq!(page.body, vec!["Some body".to_string()]);
        assert_eq!(page.notes, "::: {.notes}\n\nA note\n\n:::\n");
        assert_eq!(
            page.render(1),
            "# Title\nSome body\n\n::: {.notes}\n\nA note\n\n:::\n\n---\n"
        );
    }

    #[test]
    fn test_first_page_drops_title() {
        let page = Page::parse("## Welcome\nHello", 0).unwrap();
        assert_eq!(page.render(0), "Hello\n\n---\n");
        assert_eq!(page.render(3), "## Welcome\nHello\n\n---\n");
    }

    #[test]
    fn test_untitled_page_gets_break() {
        let page = Page::parse("Just text", 2).unwrap();
        assert_eq!(page.title, None);
        assert_eq!(page.render(2), "---\nJust text\n\n---\n");
    }

    #[test]
    fn test_promoted_title() {
        let page = Page::parse("### Sub\ntext", 1).unwrap();
        assert_eq!(page.title.as_deref(), Some("## Sub"));
    }

    #[test]
    fn test_code_block_is_verbatim() {
        let text = "## Code\n```python\n# not a heading\n^ not a note\nLayout: Split\n+++\n```\nafter";
        let page = Page::parse(text, 1).unwrap();
        assert_eq!(
            page.body,
            vec![
                "```python",
                "# not a heading",
                "^ not a note",
                "Layout: Split",
                "+++",
                "```",
                "after"
            ]
        );
        assert_eq!(page.notes, "");
        assert_eq!(page.title.as_deref(), Some("## Code"));
    }

    #[test]
    fn test_unterminated_fence_is_an_error() {
        let err = Page::parse("## Code\ntext\n```rust\nfn main() {}", 4).unwrap_err();
        match err {
            SlideasError::UnterminatedFence { page, line } => {
                assert_eq!(page, 4);
                assert_eq!(line, 3);
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_directives_and_notes_suppressed() {
        let page = Page::parse("Layout: Title\n## Heading\nbody\n^ spoken", 1).unwrap();
        assert_eq!(page.body, vec!["body".to_string()]);
    }

    #[test]
    fn test_split_without_note_closes_container() {
        let page = Page::parse("Layout: Split\nLeft text\n+++\nRight text\n", 1).unwrap();
        assert_eq!(
            page.body,
            vec![
                ":::: {.columns}",
                "::: {.column width=\"50%\"}",
                "Left text",
                ":::",
                "::: {.column width=\"50%\"}",
                "Right text",
                ":::",
                "::::"
            ]
        );
    }

    #[test]
    fn test_split_stops_at_note_and_consumes_page() {
        let text = "## Compare\nLayout: Split\nA\n+++\nB\n^ talk about both\nignored";
        let page = Page::parse(text, 1).unwrap();
        assert_eq!(page.title.as_deref(), Some("## Compare"));
        assert!(page.body.contains(&"A".to_string()));
        assert!(page.body.contains(&"B".to_string()));
        assert!(!page.body.contains(&"ignored".to_string()));
        assert_eq!(page.notes, "::: {.notes}\n\ntalk about both\n\n:::\n");
    }

    #[test]
    fn test_second_split_is_an_error() {
        let err = Page::parse("Layout: Split\nA\nLayout: Split\nB", 0).unwrap_err();
        assert!(matches!(
            err,
            SlideasError::MultipleSplitLayouts { page: 0, line: 3 }
        ));
    }

    #[test]
    fn test_code_inside_split_is_verbatim() {
        let text = "## Cmp\nLayout: Split\n```python\n^ not a note\nx = 1\n```\n+++\nRight\n";
        let page = Page::parse(text, 1).unwrap();
        assert_eq!(
            page.body,
            vec![
                ":::: {.columns}",
                "::: {.column width=\"50%\"}",
                "```python",
                "^ not a note",
                "x = 1",
                "```",
                ":::",
                "::: {.column width=\"50%\"}",
                "Right",
                ":::",
                "::::"
            ]
        );
        assert_eq!(page.notes, "");
    }

    #[test]
    fn test_unterminated_fence_inside_split_is_an_error() {
        let err = Page::parse("## Cmp\nLayout: Split\n```\nopen\n+++\nB\n", 1).unwrap_err();
        assert!(matches!(
            err,
            SlideasError::UnterminatedFence { page: 1, line: 3 }
        ));
    }

    #[test]
    fn test_unclosed_fence_offsets() {
        assert_eq!(unclosed_fence(&["a", "```", "b", "```", "c"]), None);
        assert_eq!(unclosed_fence(&["```", "b", "```", "```", "d"]), Some(3));
    }

    #[test]
    fn test_long_body_shrinks_title() {
        let mut text = String::from("## Long");
        for i in 0..11 {
            text.push_str(&format!("\nline {}", i));
        }
        let page = Page::parse(&text, 1).unwrap();
        assert_eq!(page.title.as_deref(), Some("## Long {.smaller}"));
    }

    #[test]
    fn test_code_block_extent() {
        assert_eq!(code_block_extent(&["```", "x", "```", "y"]), Some(3));
        assert_eq!(code_block_extent(&["```", "```"]), Some(2));
        assert_eq!(code_block_extent(&["```", "x"]), None);
    }
}

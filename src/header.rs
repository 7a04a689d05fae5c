// ABOUTME: Heading normalisation for converted pages
// ABOUTME: Picks the page title and folds remaining headings into the slide body

use crate::line::heading;

/// Heading text that always renders in small type.
pub const RESOURCES_HEADING: &str = "Resources";

/// Style marker for smaller text.
pub const SMALLER: &str = "{.smaller}";

/// Bodies longer than this get a smaller-text title.
pub const MAX_BODY_LINES: usize = 10;

/// Tracks the title of one page while its headings are visited in order.
#[derive(Debug, Default)]
pub struct HeaderNormalizer {
    title: Option<String>,
}

impl HeaderNormalizer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Visit a heading. Returns the line to append to the body, if any;
    /// `None` means the heading became the page title.
    pub fn visit(&mut self, raw: &str, level: usize, text: &str) -> Option<String> {
        let line = match (self.title.is_some(), level) {
            (false, 1 | 2) => {
                self.title = Some(annotate(raw.trim_end().to_string(), text));
                return None;
            }
            (false, 3) => {
                self.title = Some(annotate(heading(2, text), text));
                return None;
            }
            // Reveal.js has no subtitles, so later top-level headings drop into the body.
            (true, 1 | 2) => heading(3, text),
            _ => raw.trim_end().to_string(),
        };
        Some(annotate(line, text))
    }

    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    /// Title line as it should be emitted above a body of `body_lines` lines.
    pub fn finish(self, body_lines: usize) -> Option<String> {
        self.title.map(|title| {
            if body_lines > MAX_BODY_LINES && !title.ends_with(SMALLER) {
                format!("{} {}", title, SMALLER)
            } else {
                title
            }
        })
    }
}

fn annotate(line: String, text: &str) -> String {
    if text == RESOURCES_HEADING {
        format!("{} {}", line, SMALLER)
    } else {
        line
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_level_two_is_title() {
        let mut headers = HeaderNormalizer::new();
        assert_eq!(headers.visit("## Intro", 2, "Intro"), None);
        assert_eq!(headers.title(), Some("## Intro"));
    }

    #[test]
    fn test_level_one_title_is_verbatim() {
        let mut headers = HeaderNormalizer::new();
        assert_eq!(headers.visit("# Title", 1, "Title"), None);
        assert_eq!(headers.title(), Some("# Title"));
    }

    #[test]
    fn test_level_three_promoted_without_title() {
        let mut headers = HeaderNormalizer::new();
        assert_eq!(headers.visit("### Sub", 3, "Sub"), None);
        assert_eq!(headers.title(), Some("## Sub"));
    }

    #[test]
    fn test_later_level_two_demoted() {
        let mut headers = HeaderNormalizer::new();
        headers.visit("## Title", 2, "Title");
        assert_eq!(headers.visit("## Second", 2, "Second"), Some("### Second".to_string()));
        assert_eq!(headers.visit("### Third", 3, "Third"), Some("### Third".to_string()));
        assert_eq!(headers.title(), Some("## Title"));
    }

    #[test]
    fn test_deep_heading_before_title_passes_through() {
        let mut headers = HeaderNormalizer::new();
        assert_eq!(headers.visit("#### Deep", 4, "Deep"), Some("#### Deep".to_string()));
        assert_eq!(headers.title(), None);
    }

    #[test]
    fn test_resources_annotated() {
        let mut headers = HeaderNormalizer::new();
        headers.visit("## Resources", 2, "Resources");
        assert_eq!(headers.title(), Some("## Resources {.smaller}"));
        assert_eq!(
            headers.visit("### Resources", 3, "Resources"),
            Some("### Resources {.smaller}".to_string())
        );
        assert_eq!(headers.finish(20), Some("## Resources {.smaller}".to_string()));
    }

    #[test]
    fn test_long_body_shrinks_title() {
        let mut headers = HeaderNormalizer::new();
        headers.visit("## Busy", 2, "Busy");
        assert_eq!(headers.finish(11), Some("## Busy {.smaller}".to_string()));

        let mut headers = HeaderNormalizer::new();
        headers.visit("## Calm", 2, "Calm");
        assert_eq!(headers.finish(10), Some("## Calm".to_string()));
    }
}

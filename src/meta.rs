// ABOUTME: Front-matter handling for Slideas decks
// ABOUTME: Turns the colon-delimited header block into a Reveal.js front-matter block

use log::debug;

/// Keys that only mean something to the Slideas app.
pub const RESERVED_KEYS: [&str; 3] = ["Theme", "Size", "Palette"];

const FORMAT_KEY: &str = "slide-format";
const FORMAT_VALUE: &str = "revealjs";

/// Ordered presentation metadata. `slide-format: revealjs` is always the first entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Metadata {
    entries: Vec<(String, String)>,
}

impl Metadata {
    /// Parse a front-matter block. Lines without a colon are skipped.
    pub fn parse(text: &str) -> Self {
        let mut meta = Metadata {
            entries: vec![(FORMAT_KEY.to_string(), FORMAT_VALUE.to_string())],
        };

        for line in text.lines() {
            let Some((key, value)) = line.split_once(':') else {
                if !line.trim().is_empty() {
                    debug!("Skipping front-matter line without a key: {:?}", line);
                }
                continue;
            };
            let key = key.trim();
            if key.is_empty() || RESERVED_KEYS.contains(&key) {
                continue;
            }
            meta.insert(key.to_lowercase(), value.trim().to_string());
        }

        meta
    }

    fn insert(&mut self, key: String, value: String) {
        // The output format is fixed.
        if key == FORMAT_KEY {
            return;
        }
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((key, value)),
        }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn entries(&self) -> &[(String, String)] {
        &self.entries
    }

    /// Render the front-matter block, closing separator included.
    pub fn render(&self, theme: &str) -> String {
        let mut output = format!("---\nformat:\n  revealjs:\n    theme: {}\n", theme);
        for (key, value) in &self.entries {
            output.push_str(&format!("{}: {}\n", key, value));
        }
        output.push_str("---\n");
        output
    }
}

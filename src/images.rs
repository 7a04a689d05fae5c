// ABOUTME: Image markup cleanup for converted decks
// ABOUTME: Strips Slideas sizing and placement keywords from image references

use regex::Regex;
use std::borrow::Cow;
use std::sync::LazyLock;

// `![inline 50%](x.png)`, `![fit, left](x.png)`, ... but not `![A caption](x.png)`.
static IMAGE_PARAMS_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"!\[\s*(?:(?:inline|fit|left|right|filtered|\d+(?:\.\d+)?%)[\s,]*)+\]\(")
        .expect("image parameter pattern is valid")
});

/// Rewrite image references carrying only sizing keywords to bare `![](`.
pub fn clean_image_params(text: &str) -> Cow<'_, str> {
    IMAGE_PARAMS_REGEX.replace_all(text, "![](")
}

//! Placeholder storage for rendered code blocks.

use regex::Regex;
use std::sync::LazyLock;

/// Delimits placeholder indices. Input NULs are replaced before rendering,
/// so this byte never occurs in document text.
const MARKER: char = '\0';

/// Matches a stashed block placeholder and captures its index.
static PLACEHOLDER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\x00(\d+)\x00").expect("placeholder pattern is valid"));

/// Holds rendered fenced code blocks while the remaining passes run.
///
/// The fenced code pass swaps every block for an opaque placeholder so
/// later passes cannot treat code as markdown. Placeholders carry no
/// markdown syntax and no newlines, which keeps headers, lists, bold,
/// links and paragraph splitting from touching them.
#[derive(Debug, Default, Clone)]
pub struct CodeStash {
    blocks: Vec<String>,
}

impl CodeStash {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores rendered HTML and returns the placeholder standing in for it.
    pub fn stash(&mut self, html: String) -> String {
        let index = self.blocks.len();
        self.blocks.push(html);
        format!("{MARKER}{index}{MARKER}")
    }

    /// Replaces every placeholder in `text` with its stored HTML.
    ///
    /// Unknown indices are dropped rather than left as control characters
    /// in the output.
    pub fn restore(&self, text: &str) -> String {
        if self.blocks.is_empty() {
            return text.to_string();
        }

        PLACEHOLDER_RE
            .replace_all(text, |caps: &regex::Captures<'_>| {
                caps[1]
                    .parse::<usize>()
                    .ok()
                    .and_then(|index| self.blocks.get(index))
                    .cloned()
                    .unwrap_or_default()
            })
            .into_owned()
    }

    /// Returns true when `text` opens with a placeholder.
    pub fn starts_with_placeholder(text: &str) -> bool {
        text.starts_with(MARKER)
    }

    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stash_returns_distinct_placeholders() {
        // Arrange
        let mut stash = CodeStash::new();

        // Act
        let first = stash.stash("<pre>a</pre>".to_string());
        let second = stash.stash("<pre>b</pre>".to_string());

        // Assert
        assert_ne!(first, second, "Each block should get its own placeholder");
        assert_eq!(stash.len(), 2);
        assert!(!first.contains('\n'), "Placeholder must stay on one line");
    }

    #[test]
    fn test_restore_replaces_placeholders_in_place() {
        // Arrange
        let mut stash = CodeStash::new();
        let first = stash.stash("<pre>a</pre>".to_string());
        let second = stash.stash("<pre>b</pre>".to_string());
        let text = format!("{first}\n<p>between</p>\n{second}");

        // Act
        let restored = stash.restore(&text);

        // Assert
        assert_eq!(restored, "<pre>a</pre>\n<p>between</p>\n<pre>b</pre>");
    }

    #[test]
    fn test_restore_without_blocks_is_identity() {
        // Arrange
        let stash = CodeStash::new();

        // Act
        let restored = stash.restore("<p>plain</p>");

        // Assert
        assert!(stash.is_empty());
        assert_eq!(restored, "<p>plain</p>");
    }

    #[test]
    fn test_restore_drops_unknown_index() {
        // Arrange
        let mut stash = CodeStash::new();
        stash.stash("<pre>a</pre>".to_string());

        // Act
        let restored = stash.restore("x\u{0}7\u{0}y");

        // Assert
        assert_eq!(restored, "xy");
    }

    #[test]
    fn test_starts_with_placeholder() {
        // Arrange
        let mut stash = CodeStash::new();
        let placeholder = stash.stash(String::new());

        // Act & Assert
        assert!(CodeStash::starts_with_placeholder(&placeholder));
        assert!(!CodeStash::starts_with_placeholder("<pre>"));
    }
}

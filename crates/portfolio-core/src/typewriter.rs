//! Character-by-character text reveal for the intro page.

use std::time::Duration;

/// Delay between revealed characters
pub const TYPE_INTERVAL: Duration = Duration::from_millis(80);

/// Reveals a text one character at a time.
///
/// Prefixes always end on a `char` boundary, so multi-byte text (Hangul,
/// emoji, typographic quotes) is never cut mid-character.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Typewriter {
    text: String,
    /// Byte length of the revealed prefix
    cursor: usize,
}

impl Typewriter {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            cursor: 0,
        }
    }

    /// Reveal one more character. Returns the visible prefix, or `None`
    /// once the whole text is shown.
    pub fn advance(&mut self) -> Option<&str> {
        let next = self.text[self.cursor..].chars().next()?;
        self.cursor += next.len_utf8();
        Some(&self.text[..self.cursor])
    }

    /// Currently revealed prefix
    pub fn visible(&self) -> &str {
        &self.text[..self.cursor]
    }

    pub fn is_complete(&self) -> bool {
        self.cursor == self.text.len()
    }

    /// Number of ticks needed to reveal the whole text
    pub fn total_steps(&self) -> usize {
        self.text.chars().count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reveals_one_char_per_step() {
        let mut tw = Typewriter::new("abc");
        assert_eq!(tw.visible(), "");
        assert_eq!(tw.advance(), Some("a"));
        assert_eq!(tw.advance(), Some("ab"));
        assert_eq!(tw.advance(), Some("abc"));
        assert!(tw.is_complete());
        assert_eq!(tw.advance(), None);
        assert_eq!(tw.visible(), "abc");
    }

    #[test]
    fn multibyte_text_is_not_split() {
        let mut tw = Typewriter::new("“문제”");
        assert_eq!(tw.total_steps(), 4);
        assert_eq!(tw.advance(), Some("“"));
        assert_eq!(tw.advance(), Some("“문"));
        assert_eq!(tw.advance(), Some("“문제"));
        assert_eq!(tw.advance(), Some("“문제”"));
        assert_eq!(tw.advance(), None);
    }

    #[test]
    fn empty_text_is_complete() {
        let mut tw = Typewriter::new("");
        assert!(tw.is_complete());
        assert_eq!(tw.advance(), None);
    }
}

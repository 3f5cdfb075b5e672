/// The text the user typed, capped at [`InputText::MAX_CHARS`] characters.
///
/// Anything past the cap is dropped, the way a text field with a maximum length
/// refuses further keystrokes. Any Unicode content is a legal payload.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct InputText(String);

impl InputText {
    pub const MAX_CHARS: usize = 500;

    pub fn new(text: &str) -> Self {
        match text.char_indices().nth(Self::MAX_CHARS) {
            Some((cut, _)) => InputText(text[..cut].to_string()),
            None => InputText(text.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_empty() {
        assert_eq!(InputText::default().as_str(), "");
    }

    #[test]
    fn test_truncates_to_max_chars() {
        let long = "x".repeat(InputText::MAX_CHARS + 20);
        let text = InputText::new(&long);
        assert_eq!(text.as_str().chars().count(), InputText::MAX_CHARS);
    }

    #[test]
    fn test_truncates_on_char_boundary() {
        let long = "二维码".repeat(200);
        let text = InputText::new(&long);
        assert_eq!(text.as_str().chars().count(), InputText::MAX_CHARS);
        // 500 = 166 * 3 + 2
        assert!(text.as_str().ends_with("二维"));
    }

    #[test]
    fn test_short_text_untouched() {
        assert_eq!(InputText::new("https://example.com").as_str(), "https://example.com");
    }
}

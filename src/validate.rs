use crate::error::{GenerateError, Result};

/// Rejects text that is empty once surrounding whitespace is trimmed.
pub fn validate(text: &str) -> Result<()> {
    if text.trim().is_empty() {
        return Err(GenerateError::EmptyInput);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_blank() {
        assert_eq!(validate(""), Err(GenerateError::EmptyInput));
        assert_eq!(validate("   "), Err(GenerateError::EmptyInput));
        assert_eq!(validate("\t\n \u{3000}"), Err(GenerateError::EmptyInput));
    }

    #[test]
    fn test_accepts_text_with_padding() {
        assert_eq!(validate("  hi  "), Ok(()));
        assert_eq!(validate("0"), Ok(()));
    }
}

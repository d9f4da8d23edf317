use crate::error::{AppError, Result};

/// Monotonic counter handing out decimal-string identifiers, starting at 1.
///
/// Values are never reused, even after the entity that held them is deleted.
#[derive(Debug)]
pub struct Sequence {
    next: u64,
}

impl Sequence {
    pub fn new() -> Self {
        Self { next: 1 }
    }

    pub fn next_id(&mut self) -> String {
        let id = self.next;
        self.next += 1;
        id.to_string()
    }
}

impl Default for Sequence {
    fn default() -> Self {
        Self::new()
    }
}

/// Parses an identifier taken from a query string or path segment.
///
/// Ids are compared in their canonical decimal form, so `"007"` addresses
/// the entity stored as `"7"`.
pub fn parse_id(raw: Option<&str>, what: &str) -> Result<String> {
    raw.map(str::trim)
        .and_then(|s| s.parse::<u64>().ok())
        .map(|id| id.to_string())
        .ok_or_else(|| AppError::validation(format!("Invalid {} ID", what)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sequence_starts_at_one_and_increments() {
        let mut seq = Sequence::new();
        assert_eq!(seq.next_id(), "1");
        assert_eq!(seq.next_id(), "2");
        assert_eq!(seq.next_id(), "3");
    }

    #[test]
    fn parse_id_normalises_leading_zeros() {
        assert_eq!(parse_id(Some("007"), "playlist").unwrap(), "7");
        assert_eq!(parse_id(Some("12"), "song").unwrap(), "12");
    }

    #[test]
    fn parse_id_rejects_missing_and_non_numeric() {
        assert!(matches!(
            parse_id(None, "playlist"),
            Err(AppError::Validation(msg)) if msg == "Invalid playlist ID"
        ));
        assert!(parse_id(Some(""), "song").is_err());
        assert!(parse_id(Some("abc"), "song").is_err());
        assert!(parse_id(Some("-1"), "song").is_err());
    }
}

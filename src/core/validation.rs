//! Pure validation logic for shell input
//!
//! These functions turn raw input lines into typed values without performing
//! any I/O, so they can be tested in isolation.

use super::member::MemberId;
use crate::error::{Result, UmsError};

/// Parses an integer identifier field. Surrounding whitespace is ignored.
pub fn parse_member_id(field: &str, input: &str) -> Result<MemberId> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(UmsError::invalid_input(
            field,
            input,
            "A value is required. Please enter a whole number.",
        ));
    }

    trimmed.parse::<MemberId>().map_err(|e| {
        let reason = match e.kind() {
            std::num::IntErrorKind::PosOverflow | std::num::IntErrorKind::NegOverflow => format!(
                "Number is out of range ({} to {}).",
                MemberId::MIN,
                MemberId::MAX
            ),
            _ => "Please enter a whole number.".to_string(),
        };
        UmsError::invalid_input(field, input, reason)
    })
}

/// Strips a trailing `\n` or `\r\n` without touching other whitespace
pub fn strip_line_ending(line: &str) -> &str {
    let line = line.strip_suffix('\n').unwrap_or(line);
    line.strip_suffix('\r').unwrap_or(line)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_member_id_accepts_integers() {
        assert_eq!(parse_member_id("ID", "42").unwrap(), 42);
        assert_eq!(parse_member_id("ID", "  7 ").unwrap(), 7);
        assert_eq!(parse_member_id("ID", "-3").unwrap(), -3);
        assert_eq!(parse_member_id("ID", "+9").unwrap(), 9);
    }

    #[test]
    fn test_parse_member_id_rejects_text() {
        let err = parse_member_id("Student ID", "abc").unwrap_err();
        assert!(err.is_recoverable());
        assert!(err.to_string().contains("Invalid Student ID"));
        assert!(err.to_string().contains("whole number"));
    }

    #[test]
    fn test_parse_member_id_rejects_empty() {
        assert!(parse_member_id("ID", "").is_err());
        assert!(parse_member_id("ID", "   ").is_err());
    }

    #[test]
    fn test_parse_member_id_reports_overflow() {
        let err = parse_member_id("ID", "99999999999").unwrap_err();
        assert!(err.to_string().contains("out of range"));
    }

    #[test]
    fn test_strip_line_ending() {
        assert_eq!(strip_line_ending("1\n"), "1");
        assert_eq!(strip_line_ending("1\r\n"), "1");
        assert_eq!(strip_line_ending(" 1 \n"), " 1 ");
        assert_eq!(strip_line_ending("1"), "1");
    }
}

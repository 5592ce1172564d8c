//! Validation Rules
//!
//! Pure, synchronous field checks run before any network call. A violation
//! yields one human-readable message; the caller keeps the form open and
//! issues no request.

use crate::models::Part;

/// Lowest part number accepted by the store
pub const PART_ID_MIN: u32 = 1;
/// Highest part number accepted by the store
pub const PART_ID_MAX: u32 = 99999;
/// Maximum part name length after trimming
pub const PART_NAME_MAX_LEN: usize = 50;

/// Parse the part number field of the create form
pub fn parse_part_id(text: &str) -> Result<u32, String> {
    let text = text.trim();
    if text.is_empty() {
        return Err("Enter a part number.".to_string());
    }
    let id: u32 = text
        .parse()
        .map_err(|_| "The part number must be a whole number.".to_string())?;
    if !(PART_ID_MIN..=PART_ID_MAX).contains(&id) {
        return Err(format!(
            "The part number must be between {PART_ID_MIN} and {PART_ID_MAX}."
        ));
    }
    Ok(id)
}

/// Parse the part name field; returns the trimmed name
pub fn parse_part_name(text: &str) -> Result<String, String> {
    let name = text.trim();
    if name.is_empty() {
        return Err("Enter a part name.".to_string());
    }
    if name.chars().count() > PART_NAME_MAX_LEN {
        return Err(format!(
            "The part name must be at most {PART_NAME_MAX_LEN} characters."
        ));
    }
    Ok(name.to_string())
}

/// Validate the create form and build the new record
pub fn validate_create(id_text: &str, name_text: &str) -> Result<Part, String> {
    let id = parse_part_id(id_text)?;
    let name = parse_part_name(name_text)?;
    Ok(Part { id, name })
}

/// Validate the edit form; only the name is mutable
pub fn validate_edit(name_text: &str) -> Result<String, String> {
    parse_part_name(name_text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_part_id_accepts_bounds() {
        assert_eq!(parse_part_id("1"), Ok(1));
        assert_eq!(parse_part_id("99999"), Ok(99999));
        assert_eq!(parse_part_id(" 10 "), Ok(10));
    }

    #[test]
    fn test_part_id_rejects_empty() {
        assert!(parse_part_id("").is_err());
        assert!(parse_part_id("   ").is_err());
    }

    #[test]
    fn test_part_id_rejects_non_numeric() {
        assert!(parse_part_id("abc").is_err());
        assert!(parse_part_id("10a").is_err());
        assert!(parse_part_id("-5").is_err());
    }

    #[test]
    fn test_part_id_rejects_out_of_range() {
        assert!(parse_part_id("0").is_err());
        assert!(parse_part_id("100000").is_err());
    }

    #[test]
    fn test_part_name_trims_and_accepts() {
        assert_eq!(parse_part_name("  Bolt  "), Ok("Bolt".to_string()));
        let max = "x".repeat(50);
        assert_eq!(parse_part_name(&max), Ok(max.clone()));
    }

    #[test]
    fn test_part_name_rejects_blank_and_too_long() {
        assert!(parse_part_name("").is_err());
        assert!(parse_part_name("   ").is_err());
        assert!(parse_part_name(&"x".repeat(51)).is_err());
    }

    #[test]
    fn test_validate_create_builds_part() {
        let part = validate_create("10", " Bolt ").unwrap();
        assert_eq!(part, Part { id: 10, name: "Bolt".to_string() });
    }

    #[test]
    fn test_validate_create_reports_first_violation() {
        assert!(validate_create("", "Bolt").is_err());
        assert!(validate_create("10", "  ").is_err());
    }
}

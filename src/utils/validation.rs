use crate::utils::error::{Result, UsernameError};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

/// Parses a keyboard answer that must be a whole number of at least 1.
pub fn parse_positive_int(input: &str) -> Result<usize> {
    let trimmed = input.trim();
    let value: i64 = trimmed.parse().map_err(|_| UsernameError::InvalidNumber {
        input: trimmed.to_string(),
    })?;

    if value < 1 {
        return Err(UsernameError::NotPositive { value });
    }

    usize::try_from(value).map_err(|_| UsernameError::InvalidNumber {
        input: trimmed.to_string(),
    })
}

/// A blank answer means "no minimum".
pub fn parse_min_length(input: &str) -> Result<Option<usize>> {
    if input.trim().is_empty() {
        return Ok(None);
    }
    parse_positive_int(input).map(Some)
}

pub fn parse_yes_no(input: &str) -> bool {
    input.trim().eq_ignore_ascii_case("y")
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(UsernameError::ValidationError {
            field: field_name.to_string(),
            message: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(UsernameError::ValidationError {
            field: field_name.to_string(),
            message: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

pub fn validate_positive_number(field_name: &str, value: usize, min_value: usize) -> Result<()> {
    if value < min_value {
        return Err(UsernameError::ValidationError {
            field: field_name.to_string(),
            message: format!("Value must be at least {}, got {}", min_value, value),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_positive_int() {
        assert_eq!(parse_positive_int("5").unwrap(), 5);
        assert_eq!(parse_positive_int("  12 \n").unwrap(), 12);
        assert!(matches!(
            parse_positive_int("abc"),
            Err(UsernameError::InvalidNumber { .. })
        ));
        assert!(matches!(
            parse_positive_int("2.5"),
            Err(UsernameError::InvalidNumber { .. })
        ));
        assert!(matches!(
            parse_positive_int("0"),
            Err(UsernameError::NotPositive { value: 0 })
        ));
        assert!(matches!(
            parse_positive_int("-3"),
            Err(UsernameError::NotPositive { value: -3 })
        ));
    }

    #[test]
    fn test_parse_min_length() {
        assert_eq!(parse_min_length("").unwrap(), None);
        assert_eq!(parse_min_length("   ").unwrap(), None);
        assert_eq!(parse_min_length("15").unwrap(), Some(15));
        assert!(parse_min_length("0").is_err());
        assert!(parse_min_length("long").is_err());
    }

    #[test]
    fn test_parse_yes_no() {
        assert!(parse_yes_no("y"));
        assert!(parse_yes_no("Y\n"));
        assert!(!parse_yes_no("yes"));
        assert!(!parse_yes_no("n"));
        assert!(!parse_yes_no(""));
    }

    #[test]
    fn test_validate_path() {
        assert!(validate_path("output_path", "usernames.txt").is_ok());
        assert!(validate_path("output_path", "").is_err());
        assert!(validate_path("output_path", "bad\0name").is_err());
    }

    #[test]
    fn test_validate_positive_number() {
        assert!(validate_positive_number("min_length", 5, 1).is_ok());
        assert!(validate_positive_number("min_length", 0, 1).is_err());
    }
}

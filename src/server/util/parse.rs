use crate::server::error::{internal::InternalError, AppError};

/// Parses a u64 value from String
///
/// # Arguments
/// - `value` - The String to attempt to parse into `u64`
///
/// # Returns
/// - `Ok(u64)` - Successfully parsed String to `u64`
/// - `Err(AppError::InternalErr(ParseStringId))` - Failed to parse
///   the string as a u64
pub fn parse_u64_from_string(value: String) -> Result<u64, AppError> {
    let result = value
        .parse::<u64>()
        .map_err(|e| InternalError::ParseStringId { value, source: e })?;

    Ok(result)
}

/// Checks that a string looks like a Discord snowflake: 17 to 19 ASCII digits.
pub fn is_valid_snowflake(value: &str) -> bool {
    (17..=19).contains(&value.len()) && value.bytes().all(|b| b.is_ascii_digit())
}

/// Parses a hex colour into a Discord embed colour.
///
/// Accepts an optional leading `#` followed by 3, 4, 6 or 8 hex digits. Short forms are
/// expanded (`#0af` -> `#00aaff`) and alpha channels (4 and 8 digit forms) are dropped,
/// since Discord embeds only carry RGB.
///
/// # Returns
/// - `Some(u32)` - RGB value in `0xRRGGBB` form
/// - `None` - Input is not a hex colour
pub fn parse_hex_colour(value: &str) -> Option<u32> {
    let digits = value.strip_prefix('#').unwrap_or(value);
    if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }

    let rgb = match digits.len() {
        3 | 4 => digits[..3].chars().flat_map(|c| [c, c]).collect::<String>(),
        6 | 8 => digits[..6].to_string(),
        _ => return None,
    };

    u32::from_str_radix(&rgb, 16).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_numeric_string() {
        assert_eq!(parse_u64_from_string("42".to_string()).unwrap(), 42);
    }

    #[test]
    fn fails_on_non_numeric_string() {
        let result = parse_u64_from_string("forty-two".to_string());
        assert!(matches!(
            result,
            Err(AppError::InternalErr(InternalError::ParseStringId { .. }))
        ));
    }

    #[test]
    fn accepts_snowflakes_of_17_to_19_digits() {
        assert!(is_valid_snowflake("12345678901234567"));
        assert!(is_valid_snowflake("123456789012345678"));
        assert!(is_valid_snowflake("1234567890123456789"));
    }

    #[test]
    fn rejects_malformed_snowflakes() {
        assert!(!is_valid_snowflake(""));
        assert!(!is_valid_snowflake("1234567890123456"));
        assert!(!is_valid_snowflake("12345678901234567890"));
        assert!(!is_valid_snowflake("12345678901234567a"));
        assert!(!is_valid_snowflake(" 123456789012345678"));
    }

    #[test]
    fn parses_six_digit_colour() {
        assert_eq!(parse_hex_colour("#0099ff"), Some(0x0099ff));
        assert_eq!(parse_hex_colour("5865F2"), Some(0x5865f2));
    }

    #[test]
    fn expands_short_colour() {
        assert_eq!(parse_hex_colour("#0af"), Some(0x00aaff));
        assert_eq!(parse_hex_colour("#0af8"), Some(0x00aaff));
    }

    #[test]
    fn drops_alpha_channel() {
        assert_eq!(parse_hex_colour("#ff000080"), Some(0xff0000));
    }

    #[test]
    fn rejects_invalid_colours() {
        assert_eq!(parse_hex_colour("#12345"), None);
        assert_eq!(parse_hex_colour("#gggggg"), None);
        assert_eq!(parse_hex_colour("blue"), None);
        assert_eq!(parse_hex_colour(""), None);
        assert_eq!(parse_hex_colour("#"), None);
    }
}

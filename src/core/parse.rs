//! Configuration text parsing and validation.
//!
//! A configuration is one or more whitespace-separated base-10 integers,
//! one per pile, in pile order. It is valid iff every value is positive and
//! the values sum to exactly `CARD_TOTAL`.
//!
//! ```
//! use bulgarian_solitaire::core::{is_valid_config_text, parse_config};
//!
//! assert!(is_valid_config_text("20 20 5"));
//! assert!(!is_valid_config_text("20 20 4"));
//! assert_eq!(parse_config(" 40  5 ").unwrap(), vec![40, 5]);
//! ```

use super::config::CARD_TOTAL;
use super::error::ConfigError;

/// Parse configuration text into pile sizes.
///
/// Checks run token by token, so the first malformed or non-positive token
/// is reported. The total is checked only once every token was accepted.
pub fn parse_config(text: &str) -> Result<Vec<u32>, ConfigError> {
    let mut piles = Vec::new();

    for (index, token) in text.split_whitespace().enumerate() {
        let value: i64 = token.parse().map_err(|_| ConfigError::MalformedToken {
            index,
            token: token.to_string(),
        })?;
        if value <= 0 {
            return Err(ConfigError::NonPositivePile { index, value });
        }
        // A positive value that does not fit a pile can never sum to the total.
        let size = u32::try_from(value).map_err(|_| ConfigError::wrong_total(value as u64))?;
        piles.push(size);
    }

    validate_piles(&piles)?;
    Ok(piles)
}

/// Returns true iff `text` describes a valid board.
#[must_use]
pub fn is_valid_config_text(text: &str) -> bool {
    parse_config(text).is_ok()
}

/// Check already-numeric pile sizes against the board invariants.
pub(crate) fn validate_piles(piles: &[u32]) -> Result<(), ConfigError> {
    if piles.is_empty() {
        return Err(ConfigError::Empty);
    }

    let mut sum: u64 = 0;
    for (index, &size) in piles.iter().enumerate() {
        if size == 0 {
            return Err(ConfigError::NonPositivePile { index, value: 0 });
        }
        sum += u64::from(size);
    }

    if sum != u64::from(CARD_TOTAL) {
        return Err(ConfigError::wrong_total(sum));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid() {
        assert_eq!(parse_config("45").unwrap(), vec![45]);
        assert_eq!(
            parse_config("1 2 3 4 5 6 7 8 9").unwrap(),
            vec![1, 2, 3, 4, 5, 6, 7, 8, 9]
        );
        assert_eq!(parse_config("\t30   15\n").unwrap(), vec![30, 15]);
    }

    #[test]
    fn test_parse_empty() {
        assert_eq!(parse_config(""), Err(ConfigError::Empty));
        assert_eq!(parse_config("   "), Err(ConfigError::Empty));
    }

    #[test]
    fn test_parse_malformed() {
        assert_eq!(
            parse_config("40 5x"),
            Err(ConfigError::MalformedToken {
                index: 1,
                token: "5x".to_string()
            })
        );
        assert!(matches!(
            parse_config("40 5 abc"),
            Err(ConfigError::MalformedToken { index: 2, .. })
        ));
        assert!(matches!(
            parse_config("4.5 40.5"),
            Err(ConfigError::MalformedToken { index: 0, .. })
        ));
        assert!(matches!(
            parse_config("99999999999999999999999 1"),
            Err(ConfigError::MalformedToken { index: 0, .. })
        ));
    }

    #[test]
    fn test_parse_non_positive() {
        assert_eq!(
            parse_config("45 0"),
            Err(ConfigError::NonPositivePile { index: 1, value: 0 })
        );
        assert_eq!(
            parse_config("50 -5"),
            Err(ConfigError::NonPositivePile { index: 1, value: -5 })
        );
    }

    #[test]
    fn test_parse_wrong_total() {
        assert_eq!(parse_config("44"), Err(ConfigError::wrong_total(44)));
        assert_eq!(parse_config("40 6"), Err(ConfigError::wrong_total(46)));
        assert_eq!(
            parse_config("5000000000"),
            Err(ConfigError::wrong_total(5_000_000_000))
        );
    }

    #[test]
    fn test_is_valid_config_text() {
        assert!(is_valid_config_text("45"));
        assert!(is_valid_config_text("9 8 7 6 5 4 3 2 1"));
        assert!(!is_valid_config_text(""));
        assert!(!is_valid_config_text("1 2 3"));
        assert!(!is_valid_config_text("45 junk"));
    }

    #[test]
    fn test_validate_piles() {
        assert!(validate_piles(&[45]).is_ok());
        assert_eq!(validate_piles(&[]), Err(ConfigError::Empty));
        assert_eq!(
            validate_piles(&[45, 0]),
            Err(ConfigError::NonPositivePile { index: 1, value: 0 })
        );
        assert_eq!(validate_piles(&[44]), Err(ConfigError::wrong_total(44)));
    }
}

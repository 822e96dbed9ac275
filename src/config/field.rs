//! ConfigField trait for dynamic get/set access to config sections.
//!
//! This module provides a trait-based abstraction for accessing config
//! fields by name, enabling the `termfx config` CLI commands.

use std::str::FromStr;

/// Error type for config field operations.
#[derive(Debug, thiserror::Error)]
pub enum FieldError {
    /// The specified config key is not recognised.
    #[error("Unknown config key: {0}")]
    UnknownKey(String),

    /// The value provided is invalid for the specified key.
    #[error("Invalid value for {key}: expected {expected}")]
    InvalidValue {
        /// The config key that was being set.
        key: String,
        /// Description of the expected value format.
        expected: String,
    },

    /// The config path format is invalid.
    #[error("Invalid path format: {0}")]
    InvalidPath(String),
}

/// Trait for config sections that support dynamic get/set access.
///
/// Each section implements this to expose its fields by name for
/// `termfx config get/set`.
pub trait ConfigField {
    /// Get a field value by name, returning serialised string.
    ///
    /// Returns `None` if the key is not recognised.
    fn get_field(&self, key: &str) -> Option<String>;

    /// Set a field value by name from string input.
    ///
    /// Returns an error if the key is not recognised or the value is invalid.
    fn set_field(&mut self, key: &str, value: &str) -> Result<(), FieldError>;

    /// List all field names in this section.
    fn field_names() -> &'static [&'static str]
    where
        Self: Sized;
}

/// Split a dot-notation path into section and field.
///
/// # Examples
///
/// ```ignore
/// split_path("progress.width") // Ok(("progress", "width"))
/// split_path("invalid")        // Err(InvalidPath)
/// ```
pub fn split_path(path: &str) -> Result<(&str, &str), FieldError> {
    path.split_once('.')
        .ok_or_else(|| FieldError::InvalidPath(format!("{path} (expected section.field)")))
}

/// Parse a boolean from various string representations.
pub fn parse_bool(value: &str) -> Result<bool, FieldError> {
    match value.to_lowercase().as_str() {
        "true" | "yes" | "1" | "on" => Ok(true),
        "false" | "no" | "0" | "off" => Ok(false),
        _ => Err(FieldError::InvalidValue {
            key: "bool".into(),
            expected: "true/false, yes/no, 1/0, on/off".into(),
        }),
    }
}

/// Parse an integer greater than zero.
pub fn parse_positive<T>(key: &str, value: &str) -> Result<T, FieldError>
where
    T: FromStr + PartialOrd + Default,
{
    value
        .trim()
        .parse::<T>()
        .ok()
        .filter(|n| *n > T::default())
        .ok_or_else(|| FieldError::InvalidValue {
            key: key.into(),
            expected: "positive integer".into(),
        })
}

/// Parse exactly one character.
pub fn parse_char(key: &str, value: &str) -> Result<char, FieldError> {
    let mut chars = value.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Ok(c),
        _ => Err(FieldError::InvalidValue {
            key: key.into(),
            expected: "a single character".into(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_path_valid() {
        let (section, field) = split_path("progress.width").unwrap();
        assert_eq!(section, "progress");
        assert_eq!(field, "width");
    }

    #[test]
    fn test_split_path_invalid() {
        let result = split_path("invalid");
        assert!(matches!(result.unwrap_err(), FieldError::InvalidPath(_)));
    }

    #[test]
    fn test_parse_bool_true_variants() {
        assert!(parse_bool("true").unwrap());
        assert!(parse_bool("TRUE").unwrap());
        assert!(parse_bool("yes").unwrap());
        assert!(parse_bool("1").unwrap());
        assert!(parse_bool("on").unwrap());
    }

    #[test]
    fn test_parse_bool_false_variants() {
        assert!(!parse_bool("false").unwrap());
        assert!(!parse_bool("No").unwrap());
        assert!(!parse_bool("0").unwrap());
        assert!(!parse_bool("off").unwrap());
    }

    #[test]
    fn test_parse_bool_invalid() {
        assert!(parse_bool("maybe").is_err());
    }

    #[test]
    fn test_parse_positive() {
        assert_eq!(parse_positive::<usize>("w", "12").unwrap(), 12);
        assert_eq!(parse_positive::<u64>("w", " 7 ").unwrap(), 7);
        assert!(parse_positive::<usize>("w", "0").is_err());
        assert!(parse_positive::<usize>("w", "-3").is_err());
        assert!(parse_positive::<u64>("w", "fast").is_err());
    }

    #[test]
    fn test_parse_char() {
        assert_eq!(parse_char("c", "#").unwrap(), '#');
        assert_eq!(parse_char("c", "█").unwrap(), '█');
        assert!(parse_char("c", "").is_err());
        assert!(parse_char("c", "ab").is_err());
    }

    #[test]
    fn test_field_error_display() {
        let err = FieldError::UnknownKey("foo.bar".into());
        assert_eq!(err.to_string(), "Unknown config key: foo.bar");

        let err = FieldError::InvalidValue {
            key: "progress.width".into(),
            expected: "positive integer".into(),
        };
        assert_eq!(
            err.to_string(),
            "Invalid value for progress.width: expected positive integer"
        );
    }
}

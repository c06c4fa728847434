//! Input validation and sanitization
//!
//! Checks applied at the command surface before storage is touched. These
//! guard against obviously malformed input; required-field presence is
//! still the storage layer's job (NOT NULL constraints surface verbatim).

use std::sync::OnceLock;

use regex::Regex;

use crate::error::{FarmError, Result};

/// Ear-tag numbers: letters, digits, dashes and underscores
fn tag_number_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^[A-Za-z0-9_-]+$").expect("hard-coded pattern"))
}

/// Validation utilities for input sanitization and edge case handling
#[derive(Debug, Copy, Clone)]
pub struct InputValidator;

impl InputValidator {
    /// Validate a display name (animal, type or transaction name)
    pub fn validate_name(name: &str) -> Result<()> {
        if name.trim().is_empty() {
            return Err(FarmError::InvalidInput {
                field: "name",
                reason: "must not be empty".to_string(),
            });
        }

        if name.len() > 100 {
            return Err(FarmError::InvalidInput {
                field: "name",
                reason: "too long (max 100 characters)".to_string(),
            });
        }

        if name.contains('\0') || name.contains('\r') || name.contains('\n') {
            return Err(FarmError::InvalidInput {
                field: "name",
                reason: "contains invalid characters".to_string(),
            });
        }

        Ok(())
    }

    /// Validate an ear-tag or collar number
    pub fn validate_tag_number(tag: &str) -> Result<()> {
        if tag.len() > 50 {
            return Err(FarmError::InvalidInput {
                field: "tag_number",
                reason: "too long (max 50 characters)".to_string(),
            });
        }

        if !tag_number_pattern().is_match(tag) {
            return Err(FarmError::InvalidInput {
                field: "tag_number",
                reason: "must contain only letters, digits, dashes and underscores".to_string(),
            });
        }

        Ok(())
    }

    /// Validate a monetary or yield amount
    pub fn validate_amount(field: &'static str, amount: f64) -> Result<()> {
        if !amount.is_finite() {
            return Err(FarmError::InvalidInput {
                field,
                reason: "must be a finite number".to_string(),
            });
        }

        if amount < 0.0 {
            return Err(FarmError::InvalidInput {
                field,
                reason: "must not be negative".to_string(),
            });
        }

        Ok(())
    }

    /// Validate a measurement that must be positive when present
    pub fn validate_measurement(field: &'static str, value: f64) -> Result<()> {
        if !value.is_finite() || value <= 0.0 {
            return Err(FarmError::InvalidInput {
                field,
                reason: "must be a positive number".to_string(),
            });
        }

        Ok(())
    }

    /// Validate a stored filename key
    pub fn validate_filename(filename: &str) -> Result<()> {
        if filename.trim().is_empty() {
            return Err(FarmError::InvalidInput {
                field: "filename",
                reason: "must not be empty".to_string(),
            });
        }

        if filename.contains('\0') || filename.contains("..") {
            return Err(FarmError::InvalidInput {
                field: "filename",
                reason: "contains invalid characters".to_string(),
            });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn name_rules() {
        assert!(InputValidator::validate_name("Bessie").is_ok());
        assert!(InputValidator::validate_name("  ").is_err());
        assert!(InputValidator::validate_name("a\nb").is_err());
        assert!(InputValidator::validate_name(&"x".repeat(101)).is_err());
    }

    #[test]
    fn tag_number_rules() {
        assert!(InputValidator::validate_tag_number("DE-1234").is_ok());
        assert!(InputValidator::validate_tag_number("tag 17").is_err());
        assert!(InputValidator::validate_tag_number("").is_err());
    }

    #[test]
    fn amount_rules() {
        assert!(InputValidator::validate_amount("amount", 0.0).is_ok());
        assert!(InputValidator::validate_amount("amount", 99.5).is_ok());
        assert!(InputValidator::validate_amount("amount", -1.0).is_err());
        assert!(InputValidator::validate_amount("amount", f64::NAN).is_err());
    }

    #[test]
    fn filename_rules() {
        assert!(InputValidator::validate_filename("passport.pdf").is_ok());
        assert!(InputValidator::validate_filename("../etc/passwd").is_err());
        assert!(InputValidator::validate_filename("").is_err());
    }
}

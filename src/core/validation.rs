//! Field validation rules shared by the entity types
//!
//! Every validator returns `Ok(())` or a [`ValidationError`] naming the
//! offending field. Entities call these before storing a value, so a failed
//! check never mutates anything.

use thiserror::Error;

/// Minimum number of digits in a phone number
pub const PHONE_MIN_DIGITS: usize = 7;

/// Maximum number of digits in a phone number (E.164)
pub const PHONE_MAX_DIGITS: usize = 15;

/// Accepted tax identifier lengths
pub const TAX_ID_LENGTHS: [usize; 2] = [9, 13];

/// A field value rejected by a validation rule
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("{field} cannot be empty")]
    Required { field: &'static str },

    #[error("{field} must be a single line")]
    MultiLine { field: &'static str },

    #[error("{field} must be a finite number (got {value})")]
    NotFinite { field: &'static str, value: f64 },

    #[error("{field} must be positive (got {value})")]
    NotPositive { field: &'static str, value: f64 },

    #[error("{field} cannot be negative (got {value})")]
    Negative { field: &'static str, value: f64 },

    #[error("Quantity must be positive (got {0})")]
    InvalidQuantity(i64),

    #[error("Quantity cannot exceed {max} (got {value})")]
    QuantityOverflow { value: i64, max: u32 },

    #[error("Order must contain at least one item")]
    NoItems,

    #[error("Tax ID {reason}")]
    InvalidTaxId { reason: &'static str },

    #[error("Phone number {reason}")]
    InvalidPhone { reason: &'static str },
}

/// Require a non-empty, single-line text value
pub fn require_text(field: &'static str, value: &str) -> Result<(), ValidationError> {
    if value.is_empty() {
        return Err(ValidationError::Required { field });
    }
    if value.contains(['\n', '\r']) {
        return Err(ValidationError::MultiLine { field });
    }
    Ok(())
}

/// Require a finite number (rejects NaN and infinities)
pub fn require_finite(field: &'static str, value: f64) -> Result<(), ValidationError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(ValidationError::NotFinite { field, value })
    }
}

/// Require a finite, strictly positive number
pub fn require_positive(field: &'static str, value: f64) -> Result<(), ValidationError> {
    require_finite(field, value)?;
    if value > 0.0 {
        Ok(())
    } else {
        Err(ValidationError::NotPositive { field, value })
    }
}

/// Require a finite number >= 0
pub fn require_non_negative(field: &'static str, value: f64) -> Result<(), ValidationError> {
    require_finite(field, value)?;
    if value >= 0.0 {
        Ok(())
    } else {
        Err(ValidationError::Negative { field, value })
    }
}

/// Require an order quantity greater than zero
pub fn require_quantity(quantity: i64) -> Result<u32, ValidationError> {
    if quantity <= 0 {
        return Err(ValidationError::InvalidQuantity(quantity));
    }
    u32::try_from(quantity).map_err(|_| ValidationError::QuantityOverflow {
        value: quantity,
        max: u32::MAX,
    })
}

/// Validate a tax identifier (BULSTAT): 9 or 13 ASCII digits
pub fn validate_tax_id(tax_id: &str) -> Result<(), ValidationError> {
    if tax_id.is_empty() {
        return Err(ValidationError::InvalidTaxId {
            reason: "cannot be empty",
        });
    }
    if !tax_id.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ValidationError::InvalidTaxId {
            reason: "must contain only digits",
        });
    }
    if !TAX_ID_LENGTHS.contains(&tax_id.len()) {
        return Err(ValidationError::InvalidTaxId {
            reason: "must be 9 or 13 digits",
        });
    }
    Ok(())
}

/// Validate a phone number
///
/// Digits are counted left to right. A `+` is only allowed as the first
/// character; `-`, `(`, `)`, `.` and space may appear anywhere. The number
/// must contain between 7 and 15 digits.
pub fn validate_phone(phone: &str) -> Result<(), ValidationError> {
    if phone.is_empty() {
        return Err(ValidationError::InvalidPhone {
            reason: "cannot be empty",
        });
    }

    let mut digit_count = 0usize;
    for (i, c) in phone.chars().enumerate() {
        match c {
            '0'..='9' => digit_count += 1,
            '+' if i == 0 => {}
            '+' => {
                return Err(ValidationError::InvalidPhone {
                    reason: "can only have '+' at the start",
                })
            }
            '-' | ' ' | '(' | ')' | '.' => {}
            _ => {
                return Err(ValidationError::InvalidPhone {
                    reason: "contains invalid characters",
                })
            }
        }
    }

    if digit_count < PHONE_MIN_DIGITS {
        return Err(ValidationError::InvalidPhone {
            reason: "must contain at least 7 digits",
        });
    }
    if digit_count > PHONE_MAX_DIGITS {
        return Err(ValidationError::InvalidPhone {
            reason: "cannot contain more than 15 digits",
        });
    }
    if digit_count == 0 {
        return Err(ValidationError::InvalidPhone {
            reason: "must contain at least one digit",
        });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tax_id_lengths() {
        assert!(validate_tax_id("123456789").is_ok());
        assert!(validate_tax_id("1234567890123").is_ok());
        assert!(validate_tax_id("12345678").is_err());
        assert!(validate_tax_id("1234567890").is_err());
    }

    #[test]
    fn test_tax_id_rejects_non_digits() {
        assert_eq!(
            validate_tax_id("abcdefghi"),
            Err(ValidationError::InvalidTaxId {
                reason: "must contain only digits"
            })
        );
        assert!(validate_tax_id("12345678 ").is_err());
        assert!(validate_tax_id("").is_err());
    }

    #[test]
    fn test_phone_accepts_formatted_numbers() {
        assert!(validate_phone("+359-88-123-4567").is_ok());
        assert!(validate_phone("(02) 987.6543").is_ok());
        assert!(validate_phone("1234567").is_ok());
        assert!(validate_phone("123456789012345").is_ok());
    }

    #[test]
    fn test_phone_digit_bounds() {
        assert_eq!(
            validate_phone("123"),
            Err(ValidationError::InvalidPhone {
                reason: "must contain at least 7 digits"
            })
        );
        assert_eq!(
            validate_phone("12-34-56-78-90-12-34-56"),
            Err(ValidationError::InvalidPhone {
                reason: "cannot contain more than 15 digits"
            })
        );
    }

    #[test]
    fn test_phone_character_rules() {
        assert_eq!(
            validate_phone("12a3456789"),
            Err(ValidationError::InvalidPhone {
                reason: "contains invalid characters"
            })
        );
        assert_eq!(
            validate_phone("359+881234567"),
            Err(ValidationError::InvalidPhone {
                reason: "can only have '+' at the start"
            })
        );
        assert!(validate_phone("").is_err());
        assert!(validate_phone("+--()..").is_err());
    }

    #[test]
    fn test_require_text() {
        assert!(require_text("Name", "Acme").is_ok());
        assert_eq!(
            require_text("Name", ""),
            Err(ValidationError::Required { field: "Name" })
        );
        assert_eq!(
            require_text("Name", "two\nlines"),
            Err(ValidationError::MultiLine { field: "Name" })
        );
    }

    #[test]
    fn test_numeric_rules_reject_non_finite() {
        assert!(require_positive("Thickness", f64::NAN).is_err());
        assert!(require_non_negative("Price", f64::NAN).is_err());
        assert!(matches!(
            require_positive("Thickness", f64::INFINITY),
            Err(ValidationError::NotFinite { field: "Thickness", .. })
        ));
        assert!(matches!(
            require_non_negative("Price", f64::INFINITY),
            Err(ValidationError::NotFinite { field: "Price", .. })
        ));
        assert!(require_finite("Diopter", f64::NEG_INFINITY).is_err());
        assert!(require_finite("Diopter", -12.5).is_ok());
        assert!(require_positive("Thickness", 0.0).is_err());
        assert!(require_non_negative("Price", 0.0).is_ok());
    }

    #[test]
    fn test_require_quantity() {
        assert_eq!(require_quantity(3), Ok(3));
        assert_eq!(require_quantity(0), Err(ValidationError::InvalidQuantity(0)));
        assert_eq!(
            require_quantity(-2),
            Err(ValidationError::InvalidQuantity(-2))
        );
        assert_eq!(
            require_quantity(i64::from(u32::MAX) + 1),
            Err(ValidationError::QuantityOverflow {
                value: 4_294_967_296,
                max: u32::MAX
            })
        );
    }
}

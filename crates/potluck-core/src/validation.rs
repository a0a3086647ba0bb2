//! Input validation for participant submissions.
//!
//! Empty required fields are not errors: callers treat them as "nothing to
//! do". Only values that are present but unusable produce a
//! [`ValidationError`].

/// Error type for validation failures.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum ValidationError {
    #[error("quantity must be zero or more (got {0})")]
    NegativeQuantity(f64),

    #[error("quantity must be a finite number")]
    NonFiniteQuantity,
}

/// Returns the trimmed value, or `None` when it is blank.
pub fn required(value: &str) -> Option<&str> {
    let trimmed = value.trim();
    if trimmed.is_empty() { None } else { Some(trimmed) }
}

/// Returns the trimmed value of an optional field, treating blank as absent.
pub fn optional(value: Option<&str>) -> Option<String> {
    value.and_then(required).map(str::to_owned)
}

/// Checks an ingredient quantity.
pub fn quantity(value: f64) -> Result<f64, ValidationError> {
    if !value.is_finite() {
        return Err(ValidationError::NonFiniteQuantity);
    }
    if value < 0.0 {
        return Err(ValidationError::NegativeQuantity(value));
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn required_trims_and_rejects_blank() {
        assert_eq!(required("  Chili "), Some("Chili"));
        assert_eq!(required(""), None);
        assert_eq!(required("   "), None);
    }

    #[test]
    fn optional_blank_is_none() {
        assert_eq!(optional(Some(" ")), None);
        assert_eq!(optional(None), None);
        assert_eq!(
            optional(Some(" https://example.org/chili ")).as_deref(),
            Some("https://example.org/chili")
        );
    }

    #[test]
    fn quantity_rules() {
        assert_eq!(quantity(0.0), Ok(0.0));
        assert_eq!(quantity(2.5), Ok(2.5));
        assert_eq!(quantity(-0.1), Err(ValidationError::NegativeQuantity(-0.1)));
        assert_eq!(quantity(f64::NAN), Err(ValidationError::NonFiniteQuantity));
        assert_eq!(quantity(f64::INFINITY), Err(ValidationError::NonFiniteQuantity));
    }
}

use once_cell::sync::Lazy;

/// A check applied to a single field value.
pub trait FieldValidator<T: ?Sized> {
    /// Returns `Err` with a short description when the value is rejected.
    fn validate(&self, value: &T) -> Result<(), String>;

    /// Convenience wrapper around [`FieldValidator::validate`].
    fn is_valid(&self, value: &T) -> bool {
        self.validate(value).is_ok()
    }
}

/// Rejects empty and whitespace-only strings.
#[derive(Debug, Clone, Copy, Default)]
pub struct NonBlankValidator;

impl FieldValidator<str> for NonBlankValidator {
    fn validate(&self, value: &str) -> Result<(), String> {
        if value.trim().is_empty() {
            return Err("Value must not be blank".to_string());
        }
        Ok(())
    }
}

/// `local@domain.tld` shape: each part is one or more characters that are
/// neither whitespace nor `@`.
static EMAIL_SHAPE: Lazy<regex::Regex> = Lazy::new(|| {
    #[allow(clippy::expect_used)]
    regex::Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$")
        .expect("EMAIL_SHAPE pattern is valid and well-formed")
});

/// Loose email shape check. No deliverability or TLD checks.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmailShapeValidator;

impl FieldValidator<str> for EmailShapeValidator {
    fn validate(&self, value: &str) -> Result<(), String> {
        if !EMAIL_SHAPE.is_match(value) {
            return Err("Invalid email format".to_string());
        }
        Ok(())
    }
}

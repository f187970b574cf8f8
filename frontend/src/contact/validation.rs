use once_cell::sync::Lazy;
use regex::Regex;

static EMAIL_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid email pattern"));
static PHONE_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\+?[1-9]\d{0,15}$").expect("valid phone pattern"));
static PHONE_SEPARATORS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[\s\-()]").expect("valid separator pattern"));

pub const MAX_ATTACHMENT_BYTES: f64 = 10.0 * 1024.0 * 1024.0;

#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldError {
    #[error("This field is required")]
    Required,
    #[error("Please enter a valid email address")]
    InvalidEmail,
    #[error("Please enter a valid phone number")]
    InvalidPhone,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Email,
    Tel,
}

/// Required check first, then the type-specific pattern on any non-empty value.
pub fn validate_field(kind: FieldKind, required: bool, value: &str) -> Result<(), FieldError> {
    let value = value.trim();
    if value.is_empty() {
        return if required { Err(FieldError::Required) } else { Ok(()) };
    }
    match kind {
        FieldKind::Email if !is_valid_email(value) => Err(FieldError::InvalidEmail),
        FieldKind::Tel if !is_valid_phone(value) => Err(FieldError::InvalidPhone),
        _ => Ok(()),
    }
}

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_PATTERN.is_match(email)
}

pub fn is_valid_phone(phone: &str) -> bool {
    PHONE_PATTERN.is_match(&PHONE_SEPARATORS.replace_all(phone, ""))
}

#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum AttachmentError {
    #[error("File size must be less than 10MB")]
    TooLarge,
}

pub fn check_attachment(size_bytes: f64) -> Result<(), AttachmentError> {
    if size_bytes > MAX_ATTACHMENT_BYTES {
        Err(AttachmentError::TooLarge)
    } else {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn required_fields_reject_whitespace() {
        assert_eq!(
            validate_field(FieldKind::Text, true, "   "),
            Err(FieldError::Required)
        );
        assert_eq!(validate_field(FieldKind::Text, false, ""), Ok(()));
        assert_eq!(validate_field(FieldKind::Text, true, "Ada"), Ok(()));
    }

    #[test]
    fn email_shape() {
        assert!(is_valid_email("user@example.com"));
        assert!(is_valid_email("first.last+tag@sub.domain.io"));
        assert!(!is_valid_email("user@example"));
        assert!(!is_valid_email("user example@x.com"));
        assert!(!is_valid_email("@example.com"));
        assert_eq!(
            validate_field(FieldKind::Email, true, "nope"),
            Err(FieldError::InvalidEmail)
        );
    }

    #[test]
    fn phone_digits_with_separators() {
        assert!(is_valid_phone("+91 70442 16968"));
        assert!(is_valid_phone("(555) 123-4567"));
        assert!(!is_valid_phone("0123456"));
        assert!(!is_valid_phone("12345678901234567"));
        assert!(!is_valid_phone("call me"));
        assert_eq!(validate_field(FieldKind::Tel, false, ""), Ok(()));
        assert_eq!(
            validate_field(FieldKind::Tel, false, "abc"),
            Err(FieldError::InvalidPhone)
        );
    }

    #[test]
    fn attachment_limit_is_ten_megabytes() {
        assert_eq!(check_attachment(MAX_ATTACHMENT_BYTES), Ok(()));
        assert_eq!(
            check_attachment(MAX_ATTACHMENT_BYTES + 1.0),
            Err(AttachmentError::TooLarge)
        );
    }
}

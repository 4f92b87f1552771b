use regex::Regex;
use std::sync::LazyLock;

use super::{ValidationError, ValidationOutcome};

/// Longest address accepted, in characters.
pub const EMAIL_MAX_LENGTH: usize = 254;

static EMAIL_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid regex"));

/// Loose shape check: one `@`, something on each side, a dot in the domain.
///
/// An empty value passes; pair with `validate_required` when the field is
/// mandatory. The length limit is only checked once the shape is right.
pub fn validate_email(email: &str) -> ValidationOutcome {
    if email.is_empty() {
        return None;
    }

    if !EMAIL_PATTERN.is_match(email) {
        return ValidationError::EmailFormat.outcome();
    }

    if email.chars().count() > EMAIL_MAX_LENGTH {
        return ValidationError::EmailTooLong.outcome();
    }

    None
}

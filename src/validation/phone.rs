use super::{ValidationError, ValidationOutcome};

/// Check a Japanese domestic phone number.
///
/// Hyphens, parentheses and whitespace are ignored. What remains must be 10
/// or 11 ASCII digits starting with `0`. An empty value passes.
pub fn validate_phone_number(phone_number: &str) -> ValidationOutcome {
    if phone_number.is_empty() {
        return None;
    }

    let digits: String = phone_number
        .chars()
        .filter(|c| !matches!(c, '-' | '(' | ')') && !c.is_whitespace())
        .collect();

    // Separators alone leave nothing to count as a number.
    if digits.is_empty() || !digits.chars().all(|c| c.is_ascii_digit()) {
        return ValidationError::PhoneNotNumeric.outcome();
    }

    if digits.len() != 10 && digits.len() != 11 {
        return ValidationError::PhoneLength.outcome();
    }

    if !digits.starts_with('0') {
        return ValidationError::PhoneLeadingZero.outcome();
    }

    None
}

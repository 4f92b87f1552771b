use anyhow::{Result, bail};
use serde::{Deserialize, Serialize};

use super::{ValidationError, ValidationOutcome};

/// Strength rules for [`validate_password`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PasswordPolicy {
    #[serde(default = "default_min_length")]
    pub min_length: usize,
    #[serde(default = "default_max_length")]
    pub max_length: usize,
    #[serde(default = "default_true")]
    pub require_mixed_case: bool,
    #[serde(default = "default_true")]
    pub require_number: bool,
}

fn default_min_length() -> usize {
    8
}
fn default_max_length() -> usize {
    100
}
fn default_true() -> bool {
    true
}

impl Default for PasswordPolicy {
    fn default() -> Self {
        Self {
            min_length: default_min_length(),
            max_length: default_max_length(),
            require_mixed_case: true,
            require_number: true,
        }
    }
}

impl PasswordPolicy {
    /// Reject policies that no password could satisfy.
    pub fn check(&self) -> Result<()> {
        if self.min_length < 1 {
            bail!("password min_length must be at least 1");
        }
        if self.max_length < self.min_length {
            bail!(
                "password max_length ({}) must not be below min_length ({})",
                self.max_length,
                self.min_length
            );
        }
        Ok(())
    }
}

/// Check a password against `policy`.
///
/// Rules run in order (min length, max length, mixed case, digit) and only
/// the first failure is reported. An empty value passes.
pub fn validate_password(password: &str, policy: &PasswordPolicy) -> ValidationOutcome {
    if password.is_empty() {
        return None;
    }

    let length = password.chars().count();
    if length < policy.min_length {
        return ValidationError::PasswordTooShort(policy.min_length).outcome();
    }
    if length > policy.max_length {
        return ValidationError::PasswordTooLong(policy.max_length).outcome();
    }

    if policy.require_mixed_case {
        let has_lower = password.chars().any(|c| c.is_ascii_lowercase());
        let has_upper = password.chars().any(|c| c.is_ascii_uppercase());
        if !has_lower || !has_upper {
            return ValidationError::PasswordMixedCase.outcome();
        }
    }

    if policy.require_number && !password.chars().any(|c| c.is_ascii_digit()) {
        return ValidationError::PasswordNumber.outcome();
    }

    None
}

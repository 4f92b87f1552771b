//! Form field validators.
//!
//! Every validator returns a [`ValidationOutcome`]: `None` when the value is
//! acceptable, otherwise the message to show next to the field. Invalid input
//! is never an `Err`; only the rendered message reaches the caller.

pub mod email;
pub mod error;
pub mod password;
pub mod phone;
pub mod required;

use tracing::trace;

pub use email::{EMAIL_MAX_LENGTH, validate_email};
pub use error::ValidationError;
pub use password::{PasswordPolicy, validate_password};
pub use phone::validate_phone_number;
pub use required::{DEFAULT_FIELD_NAME, Presence, validate_required};

/// `None` when valid, otherwise a user-facing message.
pub type ValidationOutcome = Option<String>;

/// A deferred check, run by [`validate`].
pub type Validator<'a> = &'a dyn Fn() -> ValidationOutcome;

/// Run checks in order and return the first failure.
///
/// Checks after the first failure are never invoked.
pub fn validate(checks: &[Validator<'_>]) -> ValidationOutcome {
    for (index, check) in checks.iter().enumerate() {
        if let Some(message) = check() {
            trace!(index = index, total = checks.len(), "Validation chain stopped");
            return Some(message);
        }
    }
    None
}

/// Chain validator calls lazily:
///
/// ```
/// use formcheck::validation::{validate_email, validate_required};
///
/// let email = "";
/// let error = formcheck::validate!(
///     validate_required(email, Some("メールアドレス")),
///     validate_email(email),
/// );
/// assert_eq!(error.as_deref(), Some("メールアドレスは必須です"));
/// ```
#[macro_export]
macro_rules! validate {
    ($($check:expr),* $(,)?) => {
        $crate::validation::validate(&[
            $(&(|| $check) as &dyn Fn() -> $crate::validation::ValidationOutcome),*
        ])
    };
}

use serde_json::Value;

use super::{ValidationError, ValidationOutcome};

/// Field name used in the message when the caller does not supply one.
pub const DEFAULT_FIELD_NAME: &str = "項目";

/// Whether a form value counts as "not filled in".
///
/// Only absent values, blank strings and empty lists are missing. Zero,
/// `false` and empty objects are present.
pub trait Presence {
    fn is_missing(&self) -> bool;
}

impl Presence for str {
    fn is_missing(&self) -> bool {
        self.trim().is_empty()
    }
}

impl Presence for String {
    fn is_missing(&self) -> bool {
        self.as_str().is_missing()
    }
}

impl<T: Presence + ?Sized> Presence for &T {
    fn is_missing(&self) -> bool {
        (**self).is_missing()
    }
}

impl<T: Presence> Presence for Option<T> {
    fn is_missing(&self) -> bool {
        match self {
            Some(value) => value.is_missing(),
            None => true,
        }
    }
}

impl<T> Presence for [T] {
    fn is_missing(&self) -> bool {
        self.is_empty()
    }
}

impl<T, const N: usize> Presence for [T; N] {
    fn is_missing(&self) -> bool {
        N == 0
    }
}

impl<T> Presence for Vec<T> {
    fn is_missing(&self) -> bool {
        self.is_empty()
    }
}

impl Presence for Value {
    fn is_missing(&self) -> bool {
        match self {
            Value::Null => true,
            Value::String(s) => s.is_missing(),
            Value::Array(items) => items.is_empty(),
            Value::Bool(_) | Value::Number(_) | Value::Object(_) => false,
        }
    }
}

macro_rules! always_present {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Presence for $ty {
                fn is_missing(&self) -> bool {
                    false
                }
            }
        )*
    };
}

always_present!(
    bool, char, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64,
);

/// Check that a value was filled in.
///
/// `field_name` goes into the message; `None` falls back to
/// [`DEFAULT_FIELD_NAME`].
pub fn validate_required<T: Presence + ?Sized>(
    value: &T,
    field_name: Option<&str>,
) -> ValidationOutcome {
    if !value.is_missing() {
        return None;
    }

    ValidationError::Required {
        field: field_name.unwrap_or(DEFAULT_FIELD_NAME).to_string(),
    }
    .outcome()
}

use thiserror::Error;

/// Every way a field can fail validation.
///
/// The `Display` text is what forms show to the user, so it is part of the
/// public contract and must not drift.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("{field}は必須です")]
    Required { field: String },

    #[error("メールアドレスの形式が正しくありません")]
    EmailFormat,
    #[error("メールアドレスが長すぎます")]
    EmailTooLong,

    #[error("パスワードは{0}文字以上で入力してください")]
    PasswordTooShort(usize),
    #[error("パスワードは{0}文字以内で入力してください")]
    PasswordTooLong(usize),
    #[error("パスワードは大文字と小文字を両方含めてください")]
    PasswordMixedCase,
    #[error("パスワードは数字を含めてください")]
    PasswordNumber,

    #[error("電話番号は数字で入力してください")]
    PhoneNotNumeric,
    #[error("電話番号は10桁または11桁で入力してください")]
    PhoneLength,
    #[error("電話番号は0から始まる番号を入力してください")]
    PhoneLeadingZero,
}

impl ValidationError {
    /// Render as a validator outcome.
    pub fn outcome(self) -> Option<String> {
        Some(self.to_string())
    }
}

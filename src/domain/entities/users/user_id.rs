use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::core::errors::{AppError, AppResult};

/// 사용자 식별자
///
/// 경로 파라미터로 들어온 문자열은 핸들러 경계에서 [`UserId::parse`]로 검증됩니다.
/// 허용 형식: 1-64자의 영문, 숫자, `-`, `_`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(String);

impl UserId {
    pub const MAX_LEN: usize = 64;

    /// 새 ID 발급 (UUID v4)
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn parse(raw: &str) -> AppResult<Self> {
        let valid = !raw.is_empty()
            && raw.len() <= Self::MAX_LEN
            && raw.chars().all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');

        if !valid {
            return Err(AppError::ValidationError(format!(
                "유효하지 않은 사용자 ID 형식입니다: {:?}",
                raw
            )));
        }

        Ok(Self(raw.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_accepts_plain_tokens() {
        assert_eq!(UserId::parse("123").unwrap().as_str(), "123");
        assert_eq!(UserId::parse("does-not-exist").unwrap().as_str(), "does-not-exist");
        assert_eq!(UserId::parse("user_42").unwrap().to_string(), "user_42");
    }

    #[test]
    fn test_parse_rejects_malformed_ids() {
        for raw in ["", "has space", "slash/inside", "ünïcode", "a.b"] {
            assert!(
                matches!(UserId::parse(raw), Err(AppError::ValidationError(_))),
                "{:?} should be rejected",
                raw
            );
        }

        let too_long = "x".repeat(UserId::MAX_LEN + 1);
        assert!(UserId::parse(&too_long).is_err());
        assert!(UserId::parse(&"x".repeat(UserId::MAX_LEN)).is_ok());
    }

    #[test]
    fn test_generated_ids_are_parseable_and_unique() {
        let a = UserId::generate();
        let b = UserId::generate();

        assert_ne!(a, b);
        assert_eq!(UserId::parse(a.as_str()).unwrap(), a);
    }
}

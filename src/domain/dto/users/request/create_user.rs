//! # 사용자 생성/수정 요청 DTO
//!
//! `POST /users`와 `PUT /users/{id}` 요청 본문으로 사용되는 입력 구조체입니다.
//! 역직렬화는 핸들러의 `decode_body`가, 검증은 서비스 계층이 담당합니다.
//!
//! ## 검증 규칙
//!
//! ### 이름 (`name`)
//! - 필수 필드, 앞뒤 공백 제거
//! - 길이: 1-100자 (유니코드 문자 단위)
//!
//! ### 이메일 (`email`)
//! - 선택 필드, 앞뒤 공백 제거 후 빈 문자열이면 없음으로 처리
//! - 값이 있으면 이메일 형식이어야 함
//!
//! ## 요청 예시
//!
//! ```json
//! { "name": "Ann", "email": "ann@example.com" }
//! ```

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::utils::string_utils::{deserialize_optional_string, deserialize_trimmed_string};

/// 사용자 생성/수정 입력
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct CreateUser {
    #[serde(deserialize_with = "deserialize_trimmed_string")]
    #[validate(length(min = 1, max = 100, message = "이름은 1-100자 사이여야 합니다"))]
    pub name: String,

    #[serde(default, deserialize_with = "deserialize_optional_string")]
    #[validate(email(message = "유효한 이메일 주소를 입력해주세요"))]
    pub email: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_trims_fields() {
        let input: CreateUser =
            serde_json::from_str(r#"{"name":"  Ann ","email":"  "}"#).unwrap();

        assert_eq!(input.name, "Ann");
        assert_eq!(input.email, None);
        assert!(input.validate().is_ok());
    }

    #[test]
    fn test_email_is_optional() {
        let input: CreateUser = serde_json::from_str(r#"{"name":"Ann"}"#).unwrap();

        assert_eq!(input.email, None);
        assert!(input.validate().is_ok());
    }

    #[test]
    fn test_missing_name_fails_to_deserialize() {
        assert!(serde_json::from_str::<CreateUser>(r#"{"email":"a@b.io"}"#).is_err());
    }

    #[test]
    fn test_validation_rules() {
        let blank = CreateUser { name: String::new(), email: None };
        assert!(blank.validate().unwrap_err().field_errors().contains_key("name"));

        let long = CreateUser { name: "가".repeat(101), email: None };
        assert!(long.validate().is_err());

        let bad_email = CreateUser {
            name: "Ann".to_string(),
            email: Some("not-an-email".to_string()),
        };
        assert!(bad_email.validate().unwrap_err().field_errors().contains_key("email"));
    }
}

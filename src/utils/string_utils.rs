//! # 문자열 유틸리티
//!
//! 요청 본문 역직렬화에 쓰이는 문자열 정리 함수들입니다.

use serde::Deserialize;

/// 선택적 문자열 필드 정리
///
/// 앞뒤 공백을 제거하고, 결과가 빈 문자열이면 `None`을 반환합니다.
///
/// # 예제
/// ```rust,ignore
/// use crate::utils::string_utils::clean_optional_string;
///
/// assert_eq!(clean_optional_string(Some("  ann@example.com ".to_string())), Some("ann@example.com".to_string()));
/// assert_eq!(clean_optional_string(Some("   ".to_string())), None);
/// assert_eq!(clean_optional_string(None), None);
/// ```
pub fn clean_optional_string(value: Option<String>) -> Option<String> {
    value.and_then(|s| {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        }
    })
}

/// Serde 역직렬화 헬퍼: 선택적 문자열을 정리합니다.
///
/// `null`, 빈 문자열, 공백만 있는 문자열은 모두 `None`이 됩니다.
/// 필드가 아예 없을 수 있다면 `#[serde(default)]`와 함께 사용합니다.
///
/// # 예제
/// ```rust,ignore
/// #[derive(Deserialize)]
/// struct CreateUser {
///     #[serde(default, deserialize_with = "deserialize_optional_string")]
///     email: Option<String>,
/// }
/// ```
pub fn deserialize_optional_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    Ok(clean_optional_string(opt))
}

/// Serde 역직렬화 헬퍼: 필수 문자열의 앞뒤 공백을 제거합니다.
///
/// 빈 문자열 여부는 검사하지 않습니다 (검증 계층의 몫).
pub fn deserialize_trimmed_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let value = String::deserialize(deserializer)?;
    Ok(value.trim().to_string())
}

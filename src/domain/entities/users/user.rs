use chrono::{DateTime, SubsecRound, Utc};
use serde::{Deserialize, Serialize};

use super::user_id::UserId;

/// 사용자 엔티티
///
/// 저장소에 보관되고 API 응답으로 그대로 직렬화되는 사용자 표현입니다.
/// 서비스 계층만 생성하고 수정합니다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    /// 사용자 고유 ID
    pub id: String,
    /// 이름
    pub name: String,
    /// 이메일 (선택)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// 생성 시간
    pub date_created: DateTime<Utc>,
    /// 수정 시간
    pub date_modified: DateTime<Utc>,
}

/// 현재 시각 (밀리초 단위로 절삭)
///
/// MongoDB 날짜 타입의 정밀도에 맞춰, 저장 전후 값이 같도록 합니다.
fn now_millis() -> DateTime<Utc> {
    Utc::now().trunc_subsecs(3)
}

impl User {
    /// 새 ID를 발급하여 사용자를 생성합니다.
    pub fn new(name: String, email: Option<String>) -> Self {
        let now = now_millis();

        Self {
            id: UserId::generate().into_string(),
            name,
            email,
            date_created: now,
            date_modified: now,
        }
    }

    /// 이름과 이메일을 교체하고 수정 시간을 갱신합니다.
    ///
    /// ID와 생성 시간은 유지됩니다.
    pub fn apply_changes(&mut self, name: String, email: Option<String>) {
        self.name = name;
        self.email = email;
        self.date_modified = now_millis();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_user_has_generated_id_and_equal_timestamps() {
        let user = User::new("Ann".to_string(), None);

        assert!(UserId::parse(&user.id).is_ok());
        assert_eq!(user.date_created, user.date_modified);
    }

    #[test]
    fn test_timestamps_have_millisecond_precision() {
        let user = User::new("Ann".to_string(), None);

        assert_eq!(user.date_created.timestamp_subsec_nanos() % 1_000_000, 0);
    }

    #[test]
    fn test_apply_changes_keeps_identity() {
        let mut user = User::new("Ann".to_string(), None);
        let original = user.clone();

        user.apply_changes("Ann2".to_string(), Some("ann@example.com".to_string()));

        assert_eq!(user.id, original.id);
        assert_eq!(user.date_created, original.date_created);
        assert!(user.date_modified >= original.date_modified);
        assert_eq!(user.name, "Ann2");
        assert_eq!(user.email.as_deref(), Some("ann@example.com"));
    }

    #[test]
    fn test_serialization_omits_missing_email() {
        let user = User::new("Ann".to_string(), None);
        let json = serde_json::to_value(&user).unwrap();

        assert_eq!(json["name"], "Ann");
        assert!(json.get("email").is_none());
        assert!(json["id"].is_string());
    }
}

use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime as ChronoDateTime, Utc};
use futures_util::TryStreamExt;
use mongodb::bson::{doc, DateTime};
use mongodb::options::IndexOptions;
use mongodb::{Collection, IndexModel};
use serde::{Deserialize, Serialize};

use super::UserRepository;
use crate::core::errors::{AppError, AppResult};
use crate::db::Database;
use crate::domain::entities::users::{User, UserId};

/// `users` 컬렉션에 저장되는 문서
///
/// 날짜는 BSON 날짜 타입으로 저장하여 `date_created` 정렬이 시각 순서를 따르게 합니다.
/// MongoDB가 부여하는 `_id`는 역직렬화 시 무시됩니다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
struct UserDocument {
    id: String,
    name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    email: Option<String>,
    date_created: DateTime,
    date_modified: DateTime,
}

fn to_bson_date(value: &ChronoDateTime<Utc>) -> DateTime {
    DateTime::from_millis(value.timestamp_millis())
}

fn from_bson_date(value: DateTime) -> AppResult<ChronoDateTime<Utc>> {
    ChronoDateTime::<Utc>::from_timestamp_millis(value.timestamp_millis())
        .ok_or_else(|| AppError::DatabaseError(format!("표현할 수 없는 날짜 값: {}", value)))
}

impl From<&User> for UserDocument {
    fn from(user: &User) -> Self {
        Self {
            id: user.id.clone(),
            name: user.name.clone(),
            email: user.email.clone(),
            date_created: to_bson_date(&user.date_created),
            date_modified: to_bson_date(&user.date_modified),
        }
    }
}

impl UserDocument {
    fn into_user(self) -> AppResult<User> {
        Ok(User {
            id: self.id,
            name: self.name,
            email: self.email,
            date_created: from_bson_date(self.date_created)?,
            date_modified: from_bson_date(self.date_modified)?,
        })
    }
}

/// MongoDB 기반 사용자 저장소
///
/// `users` 컬렉션의 `id` 필드로 문서를 식별합니다.
pub struct MongoUserRepository {
    db: Arc<Database>,
}

impl MongoUserRepository {
    pub const COLLECTION: &'static str = "users";

    /// 저장소를 만들고 인덱스를 보장합니다.
    pub async fn new(db: Arc<Database>) -> AppResult<Self> {
        let repo = Self { db };
        repo.create_indexes().await?;

        log::info!(
            "MongoUserRepository 초기화 완료: {}.{}",
            repo.db.database_name(),
            Self::COLLECTION
        );
        Ok(repo)
    }

    fn collection(&self) -> Collection<UserDocument> {
        self.db.collection::<UserDocument>(Self::COLLECTION)
    }

    pub async fn create_indexes(&self) -> AppResult<()> {
        // ID 유니크 인덱스
        let id_index = IndexModel::builder()
            .keys(doc! { "id": 1 })
            .options(IndexOptions::builder()
                .unique(true)
                .name("id_unique".to_string())
                .build())
            .build();

        // 생성일 인덱스 (목록 정렬용)
        let created_index = IndexModel::builder()
            .keys(doc! { "date_created": 1 })
            .options(IndexOptions::builder()
                .name("date_created_asc".to_string())
                .build())
            .build();

        self.collection()
            .create_indexes([id_index, created_index])
            .await?;

        Ok(())
    }
}

#[async_trait]
impl UserRepository for MongoUserRepository {
    fn backend_name(&self) -> &'static str {
        "mongodb"
    }

    async fn list(&self) -> AppResult<Vec<User>> {
        let cursor = self.collection()
            .find(doc! {})
            .sort(doc! { "date_created": 1, "id": 1 })
            .await?;

        let docs: Vec<UserDocument> = cursor.try_collect().await?;
        docs.into_iter().map(UserDocument::into_user).collect()
    }

    async fn find_by_id(&self, id: &UserId) -> AppResult<Option<User>> {
        self.collection()
            .find_one(doc! { "id": id.as_str() })
            .await?
            .map(UserDocument::into_user)
            .transpose()
    }

    async fn insert(&self, user: &User) -> AppResult<()> {
        self.collection().insert_one(UserDocument::from(user)).await?;
        Ok(())
    }

    async fn update(&self, user: &User) -> AppResult<bool> {
        let result = self.collection()
            .update_one(
                doc! { "id": user.id.as_str() },
                doc! { "$set": {
                    "name": user.name.as_str(),
                    "email": user.email.as_deref(),
                    "date_modified": to_bson_date(&user.date_modified),
                }},
            )
            .await?;

        Ok(result.matched_count > 0)
    }

    async fn delete(&self, id: &UserId) -> AppResult<bool> {
        let result = self.collection()
            .delete_one(doc! { "id": id.as_str() })
            .await?;

        Ok(result.deleted_count > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_document_stores_bson_dates() {
        let mut user = User::new("Ann".to_string(), Some("ann@example.com".to_string()));
        user.date_created = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();

        let doc = UserDocument::from(&user);
        let raw = mongodb::bson::to_document(&doc).unwrap();

        assert!(raw.get_datetime("date_created").is_ok());
        assert!(raw.get_datetime("date_modified").is_ok());
        assert_eq!(doc.into_user().unwrap(), user);
    }

    #[test]
    fn test_bson_dates_order_by_instant() {
        let whole = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        let half = whole + chrono::Duration::milliseconds(500);

        // RFC 3339 문자열로는 "...00Z" > "...00.500Z"
        assert!(serde_json::to_string(&whole).unwrap() > serde_json::to_string(&half).unwrap());
        assert!(to_bson_date(&whole) < to_bson_date(&half));
    }

    #[test]
    fn test_missing_email_is_not_stored() {
        let user = User::new("Ann".to_string(), None);
        let raw = mongodb::bson::to_document(&UserDocument::from(&user)).unwrap();

        assert!(!raw.contains_key("email"));
    }
}

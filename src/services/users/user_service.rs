use std::future::Future;
use std::sync::Arc;
use std::time::{Duration, Instant};

use actix_web::rt::time::timeout;
use validator::Validate;

use crate::core::context::RequestValues;
use crate::core::errors::{AppError, AppResult};
use crate::domain::dto::users::request::CreateUser;
use crate::domain::entities::users::{User, UserId};
use crate::repositories::users::UserRepository;

/// 사용자 비즈니스 로직
///
/// 요청마다 [`RequestValues`]로부터 만들어지며, 모든 로그에 trace id를 붙입니다.
/// 저장소 호출 하나하나는 요청 타임아웃으로 제한됩니다.
pub struct UserService {
    trace_id: String,
    repo: Arc<dyn UserRepository>,
    timeout: Duration,
}

impl UserService {
    pub fn new(trace_id: impl Into<String>, repo: Arc<dyn UserRepository>, timeout: Duration) -> Self {
        Self {
            trace_id: trace_id.into(),
            repo,
            timeout,
        }
    }

    pub fn for_request(values: &RequestValues) -> Self {
        Self::new(values.trace_id.clone(), values.db.clone(), values.timeout)
    }

    /// 저장소 호출을 타임아웃으로 감쌉니다.
    async fn bounded<T, F>(&self, operation: &str, fut: F) -> AppResult<T>
    where
        F: Future<Output = AppResult<T>>,
    {
        let started = Instant::now();

        match timeout(self.timeout, fut).await {
            Ok(result) => {
                log::debug!(
                    "[{}] {} took {:?} ({})",
                    self.trace_id,
                    operation,
                    started.elapsed(),
                    self.repo.backend_name()
                );
                result
            }
            Err(_) => {
                log::warn!("[{}] {} 시간 초과 ({:?})", self.trace_id, operation, self.timeout);
                Err(AppError::InternalError(format!(
                    "저장소 응답 시간이 초과되었습니다: {}",
                    operation
                )))
            }
        }
    }

    fn not_found(id: &UserId) -> AppError {
        AppError::NotFound(format!("사용자를 찾을 수 없습니다: {}", id))
    }

    pub async fn list(&self) -> AppResult<Vec<User>> {
        let users = self.bounded("user.list", self.repo.list()).await?;

        log::info!("[{}] 사용자 목록 조회: {}명", self.trace_id, users.len());
        Ok(users)
    }

    pub async fn retrieve(&self, id: &UserId) -> AppResult<User> {
        self.bounded("user.find_by_id", self.repo.find_by_id(id))
            .await?
            .ok_or_else(|| Self::not_found(id))
    }

    pub async fn create(&self, input: CreateUser) -> AppResult<User> {
        input.validate()?;

        let user = User::new(input.name, input.email);
        self.bounded("user.insert", self.repo.insert(&user)).await?;

        log::info!("[{}] 사용자 생성: {}", self.trace_id, user.id);
        Ok(user)
    }

    /// 이름과 이메일을 교체합니다. 존재하지 않는 사용자는 만들지 않습니다.
    pub async fn update(&self, id: &UserId, input: CreateUser) -> AppResult<()> {
        input.validate()?;

        let mut user = self.retrieve(id).await?;
        user.apply_changes(input.name, input.email);

        // 조회와 교체 사이에 삭제된 경우
        if !self.bounded("user.update", self.repo.update(&user)).await? {
            return Err(Self::not_found(id));
        }

        log::info!("[{}] 사용자 수정: {}", self.trace_id, id);
        Ok(())
    }

    pub async fn delete(&self, id: &UserId) -> AppResult<()> {
        if !self.bounded("user.delete", self.repo.delete(id)).await? {
            return Err(Self::not_found(id));
        }

        log::info!("[{}] 사용자 삭제: {}", self.trace_id, id);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repositories::users::MemoryUserRepository;
    use async_trait::async_trait;

    fn service() -> UserService {
        UserService::new("test-trace", Arc::new(MemoryUserRepository::new()), Duration::from_secs(5))
    }

    fn input(name: &str) -> CreateUser {
        CreateUser { name: name.to_string(), email: None }
    }

    #[actix_web::test]
    async fn test_create_then_retrieve() {
        let service = service();

        let created = service.create(input("Ann")).await.unwrap();
        let id = UserId::parse(&created.id).unwrap();

        assert_eq!(service.retrieve(&id).await.unwrap(), created);
        assert_eq!(service.list().await.unwrap(), vec![created]);
    }

    #[actix_web::test]
    async fn test_create_rejects_invalid_input_without_storing() {
        let service = service();

        let result = service
            .create(CreateUser { name: String::new(), email: Some("bad".to_string()) })
            .await;

        let err = result.unwrap_err();
        assert!(matches!(err, AppError::InvalidFields(_)));
        assert_eq!(err.field_errors().len(), 2);
        assert!(service.list().await.unwrap().is_empty());
    }

    #[actix_web::test]
    async fn test_update_missing_user_is_not_found_and_creates_nothing() {
        let service = service();
        let id = UserId::parse("ghost").unwrap();

        assert!(matches!(service.update(&id, input("Ann")).await, Err(AppError::NotFound(_))));
        assert!(service.list().await.unwrap().is_empty());
    }

    #[actix_web::test]
    async fn test_update_replaces_fields() {
        let service = service();
        let created = service.create(input("Ann")).await.unwrap();
        let id = UserId::parse(&created.id).unwrap();

        service
            .update(&id, CreateUser { name: "Ann2".to_string(), email: Some("ann@example.com".to_string()) })
            .await
            .unwrap();

        let updated = service.retrieve(&id).await.unwrap();
        assert_eq!(updated.name, "Ann2");
        assert_eq!(updated.email.as_deref(), Some("ann@example.com"));
        assert_eq!(updated.date_created, created.date_created);
    }

    #[actix_web::test]
    async fn test_delete_twice_is_not_found() {
        let service = service();
        let created = service.create(input("Ann")).await.unwrap();
        let id = UserId::parse(&created.id).unwrap();

        service.delete(&id).await.unwrap();
        assert!(matches!(service.delete(&id).await, Err(AppError::NotFound(_))));
        assert!(matches!(service.retrieve(&id).await, Err(AppError::NotFound(_))));
    }

    struct StalledRepository;

    #[async_trait]
    impl UserRepository for StalledRepository {
        fn backend_name(&self) -> &'static str {
            "stalled"
        }

        async fn list(&self) -> AppResult<Vec<User>> {
            actix_web::rt::time::sleep(Duration::from_secs(60)).await;
            Ok(Vec::new())
        }

        async fn find_by_id(&self, _id: &UserId) -> AppResult<Option<User>> {
            Ok(None)
        }

        async fn insert(&self, _user: &User) -> AppResult<()> {
            Ok(())
        }

        async fn update(&self, _user: &User) -> AppResult<bool> {
            Ok(false)
        }

        async fn delete(&self, _id: &UserId) -> AppResult<bool> {
            Ok(false)
        }
    }

    #[actix_web::test]
    async fn test_slow_store_call_times_out() {
        let service = UserService::new("slow", Arc::new(StalledRepository), Duration::from_millis(20));

        match service.list().await {
            Err(AppError::InternalError(msg)) => assert!(msg.contains("user.list")),
            other => panic!("expected timeout, got {:?}", other.map(|u| u.len())),
        }
    }
}

use std::collections::HashMap;
use std::sync::RwLock;

use async_trait::async_trait;

use super::UserRepository;
use crate::core::errors::{AppError, AppResult, ErrorContext};
use crate::domain::entities::users::{User, UserId};

/// 프로세스 메모리 기반 사용자 저장소
///
/// 재시작하면 데이터가 사라집니다. 로컬 개발과 테스트용입니다.
#[derive(Default)]
pub struct MemoryUserRepository {
    users: RwLock<HashMap<String, User>>,
}

impl MemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserRepository for MemoryUserRepository {
    fn backend_name(&self) -> &'static str {
        "memory"
    }

    async fn list(&self) -> AppResult<Vec<User>> {
        let users = self.users.read().context("사용자 저장소 잠금 실패")?;

        let mut list: Vec<User> = users.values().cloned().collect();
        list.sort_by(|a, b| {
            a.date_created
                .cmp(&b.date_created)
                .then_with(|| a.id.cmp(&b.id))
        });
        Ok(list)
    }

    async fn find_by_id(&self, id: &UserId) -> AppResult<Option<User>> {
        let users = self.users.read().context("사용자 저장소 잠금 실패")?;
        Ok(users.get(id.as_str()).cloned())
    }

    async fn insert(&self, user: &User) -> AppResult<()> {
        let mut users = self.users.write().context("사용자 저장소 잠금 실패")?;

        if users.contains_key(&user.id) {
            return Err(AppError::InternalError(format!("중복된 사용자 ID: {}", user.id)));
        }

        users.insert(user.id.clone(), user.clone());
        Ok(())
    }

    async fn update(&self, user: &User) -> AppResult<bool> {
        let mut users = self.users.write().context("사용자 저장소 잠금 실패")?;

        match users.get_mut(&user.id) {
            Some(existing) => {
                *existing = user.clone();
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn delete(&self, id: &UserId) -> AppResult<bool> {
        let mut users = self.users.write().context("사용자 저장소 잠금 실패")?;
        Ok(users.remove(id.as_str()).is_some())
    }
}

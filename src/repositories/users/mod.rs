//! # User Repositories
//!
//! 사용자 저장소 추상화와 구현체들입니다.
//!
//! - [`MongoUserRepository`] - MongoDB `users` 컬렉션 (운영 환경)
//! - [`MemoryUserRepository`] - 프로세스 내 맵 (`STORE_BACKEND=memory`, 테스트)
//!
//! 서비스 계층은 `Arc<dyn UserRepository>`만 알고 있으므로
//! 저장소 교체가 핸들러와 서비스 코드에 영향을 주지 않습니다.

use async_trait::async_trait;

use crate::core::errors::AppResult;
use crate::domain::entities::users::{User, UserId};

pub mod memory_user_repo;
pub mod user_repo;

pub use memory_user_repo::MemoryUserRepository;
pub use user_repo::MongoUserRepository;

/// 사용자 데이터 접근 계약
///
/// 동시 요청 간 일관성은 구현체가 책임집니다.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// 저장소 이름 (헬스체크, 로그용)
    fn backend_name(&self) -> &'static str;

    /// 모든 사용자를 생성 시간 순으로 반환
    async fn list(&self) -> AppResult<Vec<User>>;

    async fn find_by_id(&self, id: &UserId) -> AppResult<Option<User>>;

    async fn insert(&self, user: &User) -> AppResult<()>;

    /// ID가 같은 사용자를 교체합니다. 대상이 없으면 `false`.
    async fn update(&self, user: &User) -> AppResult<bool>;

    /// 삭제되었으면 `true`, 대상이 없으면 `false`.
    async fn delete(&self, id: &UserId) -> AppResult<bool>;
}

//! 데이터 액세스 계층을 담당하는 리포지토리 모듈
//!
//! 저장소는 트레이트 객체(`Arc<dyn UserRepository>`)로 요청마다 전달됩니다.
//! 어떤 구현을 쓸지는 `STORE_BACKEND` 설정으로 기동 시 결정됩니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use crate::repositories::users::{MemoryUserRepository, UserRepository};
//!
//! let repo: Arc<dyn UserRepository> = Arc::new(MemoryUserRepository::new());
//! let users = repo.list().await?;
//! ```

pub mod users;

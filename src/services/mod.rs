//! 비즈니스 로직을 담당하는 서비스 계층 모듈
//!
//! 입력 검증과 저장소 호출을 담당하며, HTTP에 대해서는 알지 못합니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::services::users::UserService;
//!
//! let service = UserService::for_request(&values);
//! let users = service.list().await?;
//! ```

pub mod users;

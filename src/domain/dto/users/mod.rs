//! # User DTOs
//!
//! 사용자 API의 요청 데이터 구조입니다.
//! 응답은 [`crate::domain::entities::users::User`]를 그대로 직렬화하므로
//! 별도의 응답 DTO가 없습니다.

pub mod request;

pub use request::*;

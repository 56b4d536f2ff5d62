//! # Domain Layer Module
//!
//! 사용자 리소스의 도메인 타입을 정의합니다.
//!
//! ## 모듈 구성
//!
//! ### [`entities`] - 핵심 도메인 엔티티
//! - **User**: 저장되고 응답으로 반환되는 사용자 표현
//! - **UserId**: 경로 파라미터 경계에서 검증되는 식별자
//!
//! ### [`dto`] - 데이터 전송 객체
//! - **CreateUser**: 생성/수정 요청 본문
//!
//! ## 계층 관계
//!
//! ```text
//! Handlers ──▶ dto::CreateUser ──▶ Services ──▶ entities::User ──▶ Repositories
//! ```

pub mod entities;
pub mod dto;

pub use dto::users::request::CreateUser;
pub use entities::users::{User, UserId};

//! # Domain Entities Module
//!
//! 저장소에 보관되는 핵심 엔티티들입니다.
//! 엔티티는 MongoDB 문서와 API 응답 양쪽에 같은 serde 표현으로 사용됩니다.
//!
//! ```text
//! Domain Layer
//! ├── entities/     ← 이 모듈 (User, UserId)
//! └── dto/          ← 요청 데이터 (CreateUser)
//! ```

pub mod users;

pub use users::*;

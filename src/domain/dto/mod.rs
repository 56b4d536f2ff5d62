//! # Data Transfer Objects
//!
//! HTTP 요청 본문과 매핑되는 구조체들입니다.
//! 모든 입력 DTO는 `serde`로 역직렬화되고 `validator`로 검증됩니다.

pub mod users;

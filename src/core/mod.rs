//! # Core Module
//!
//! 모든 핸들러가 공유하는 요청-응답 매핑 기반 요소들입니다.
//!
//! ## 모듈 구성
//!
//! ### [`context`] - 요청 단위 값
//! - **AppState**: 저장소 핸들과 요청 타임아웃을 담은 전역 상태
//! - **TraceId**: 요청 추적 ID (미들웨어가 request extensions에 저장)
//! - **RequestValues**: 핸들러 인자로 주입되는 읽기 전용 값 묶음
//!
//! ### [`errors`] - 통합 에러 처리
//! - **AppError**: 400 / 404 / 500으로 분류되는 애플리케이션 에러
//! - **ErrorContext**: 외부 에러에 문맥을 붙이는 확장 트레이트
//!
//! ### [`response`] - 중앙 응답기
//! - **respond / respond_error**: 성공/실패 응답 작성
//! - **read_payload / decode_body**: 크기 제한 본문 읽기, JSON 역직렬화
//!
//! ## 요청 처리 흐름
//!
//! ```text
//! RequestValues ─▶ (decode_body) ─▶ (UserId::parse) ─▶ UserService
//!                                                          │
//!                                   ┌──────────────────────┴───────┐
//!                                   ▼                              ▼
//!                               respond()                   respond_error()
//! ```

pub mod context;
pub mod errors;
pub mod response;

pub use context::*;
pub use errors::*;
pub use response::*;

//! 미들웨어 모듈
//!
//! 요청 처리 파이프라인에서 사용되는 횡단 관심사 미들웨어들을 제공합니다.
//!
//! # 제공 미들웨어
//!
//! ### 1. 추적 미들웨어 (TraceMiddleware)
//! - 요청마다 trace id 부여 (클라이언트 `X-Trace-Id` 재사용 또는 UUID 발급)
//! - trace id를 request extension에 저장 → `RequestValues` 추출기가 사용
//! - 응답 헤더에 `X-Trace-Id` 추가
//!
//! # 사용 방법
//!
//! ```rust,ignore
//! use actix_web::App;
//! use crate::middlewares::TraceMiddleware;
//!
//! App::new()
//!     .wrap(TraceMiddleware::new())
//!     .configure(configure_all_routes)
//! ```

pub mod trace_middleware;
mod trace_inner;

// 미들웨어 재export
pub use trace_middleware::{TraceMiddleware, TRACE_ID_HEADER};

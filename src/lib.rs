//! 사용자 API 서비스
//!
//! 사용자 리소스에 대한 목록/조회/생성/수정/삭제 HTTP API를 제공합니다.
//! 핸들러는 요청을 도메인 입력으로 바꾸고 서비스에 위임한 뒤,
//! 결과를 공통 응답기([`core::respond`], [`core::respond_error`])로 돌려줍니다.
//!
//! # Features
//!
//! - **사용자 CRUD**: `/users` 아래 다섯 개의 엔드포인트
//! - **요청 추적**: 모든 요청/응답/로그에 `X-Trace-Id`
//! - **명시적 요청 값**: 전역 레지스트리 없이 추출기로 주입되는 [`core::RequestValues`]
//! - **저장소 교체**: MongoDB 또는 메모리 저장소 (`STORE_BACKEND`)
//! - **타임아웃**: 저장소 호출마다 요청 타임아웃 적용
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │   HTTP Routes   │ ← REST API 엔드포인트
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Handlers     │ ← 요청 디코딩, 응답 작성
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Services     │ ← 검증, 비즈니스 로직
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │  Repositories   │ ← 데이터 액세스
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │ MongoDB / Memory│ ← 저장소
//! └─────────────────┘
//! ```
//!
//! # Examples
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use user_api_service::core::AppState;
//! use user_api_service::middlewares::TraceMiddleware;
//! use user_api_service::repositories::users::MemoryUserRepository;
//! use user_api_service::routes::configure_all_routes;
//!
//! let state = web::Data::new(AppState::new(
//!     Arc::new(MemoryUserRepository::new()),
//!     Duration::from_secs(5),
//! ));
//!
//! App::new()
//!     .wrap(TraceMiddleware::new())
//!     .app_data(state)
//!     .configure(configure_all_routes);
//! ```

pub mod core;
pub mod config;
pub mod db;
pub mod domain;
pub mod repositories;
pub mod services;
pub mod utils;
pub mod routes;
pub mod handlers;
pub mod middlewares;

//! # Request-scoped Values
//!
//! 요청마다 핸들러에 전달되는 공유 값들입니다.
//! 전역 레지스트리에서 찾아오는 대신, actix-web 추출기([`FromRequest`])를 통해
//! 각 핸들러의 인자로 명시적으로 주입됩니다.
//!
//! ```text
//! TraceMiddleware ──▶ extensions: TraceId
//! App::app_data   ──▶ Data<AppState> { db, request_timeout }
//!                          │
//!                          ▼
//!                 RequestValues { trace_id, db, timeout }  ← 핸들러 인자
//! ```

use std::future::{ready, Ready};
use std::sync::Arc;
use std::time::Duration;

use actix_web::dev::Payload;
use actix_web::{web, FromRequest, HttpMessage, HttpRequest};
use uuid::Uuid;

use crate::core::errors::AppError;
use crate::repositories::users::UserRepository;

/// 애플리케이션 전역 상태
///
/// 서버 시작 시 한 번 만들어져 `web::Data`로 모든 워커에 공유됩니다.
pub struct AppState {
    /// 데이터 저장소 핸들
    pub db: Arc<dyn UserRepository>,
    /// 저장소 호출 하나에 허용되는 최대 시간
    pub request_timeout: Duration,
}

impl AppState {
    pub fn new(db: Arc<dyn UserRepository>, request_timeout: Duration) -> Self {
        Self { db, request_timeout }
    }
}

/// 요청 추적 ID
///
/// [`crate::middlewares::TraceMiddleware`]가 request extensions에 저장합니다.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TraceId(pub String);

impl TraceId {
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }
}

/// 핸들러가 요청마다 받는 값 묶음 (읽기 전용)
#[derive(Clone)]
pub struct RequestValues {
    pub trace_id: String,
    pub db: Arc<dyn UserRepository>,
    pub timeout: Duration,
}

impl RequestValues {
    fn extract(req: &HttpRequest) -> Result<Self, AppError> {
        let trace_id = req
            .extensions()
            .get::<TraceId>()
            .cloned()
            .unwrap_or_else(|| {
                let generated = TraceId::generate();
                log::debug!("[{}] 추적 미들웨어 없이 요청 처리, 새 trace id 발급", generated.0);
                generated
            })
            .0;

        let state = req
            .app_data::<web::Data<AppState>>()
            .ok_or_else(|| AppError::InternalError("애플리케이션 상태가 등록되지 않았습니다".to_string()))?;

        Ok(Self {
            trace_id,
            db: state.db.clone(),
            timeout: state.request_timeout,
        })
    }
}

impl FromRequest for RequestValues {
    type Error = AppError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        ready(Self::extract(req))
    }
}

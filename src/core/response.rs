//! # Centralized Responders
//!
//! 모든 핸들러가 공유하는 응답 작성 함수들입니다.
//! 핸들러는 서비스 결과를 해석하지 않고 아래 함수에 그대로 넘깁니다.
//!
//! - [`respond`] - 성공 값을 JSON으로 직렬화하여 지정된 상태 코드로 응답
//! - [`respond_error`] - 에러를 분류하여 trace id가 포함된 에러 본문으로 응답
//! - [`read_payload`] - 크기 제한을 지켜 요청 본문을 읽음
//! - [`decode_body`] - 요청 본문을 타입이 지정된 입력 구조체로 역직렬화
//!
//! ## 에러 응답 형식
//!
//! ```json
//! {
//!   "error": "Validation error: name: 이름은 1-100자 사이여야 합니다",
//!   "trace_id": "6f1c0c8e-3b8a-4f57-9d7e-0c6f3a9b2e11",
//!   "fields": [
//!     { "field": "name", "message": "이름은 1-100자 사이여야 합니다" }
//!   ]
//! }
//! ```

use actix_web::http::StatusCode;
use actix_web::{web, HttpResponse, ResponseError};
use futures_util::StreamExt;
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::core::errors::{AppError, AppResult, FieldError};

/// 에러 응답 본문
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
    pub trace_id: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub fields: Vec<FieldError>,
}

/// 성공 응답을 작성합니다.
///
/// `204 No Content`인 경우 값은 무시되고 본문 없이 응답합니다.
/// 직렬화에 실패하면 [`respond_error`]로 500 응답을 돌려줍니다.
pub fn respond<T>(trace_id: &str, data: &T, status: StatusCode) -> HttpResponse
where
    T: Serialize + ?Sized,
{
    if status == StatusCode::NO_CONTENT {
        log::debug!("[{}] 응답 {}", trace_id, status.as_u16());
        return HttpResponse::build(status).finish();
    }

    match serde_json::to_vec(data) {
        Ok(body) => {
            log::debug!("[{}] 응답 {} ({} bytes)", trace_id, status.as_u16(), body.len());
            HttpResponse::build(status)
                .content_type("application/json")
                .body(body)
        }
        Err(e) => respond_error(
            trace_id,
            AppError::InternalError(format!("응답 직렬화 실패: {}", e)),
        ),
    }
}

/// 에러 응답을 작성합니다.
///
/// 상태 코드는 [`AppError`]의 분류를 따르며, 본문에는 항상 trace id가 포함됩니다.
pub fn respond_error(trace_id: &str, err: AppError) -> HttpResponse {
    let status = err.status_code();

    if err.is_client_error() {
        log::warn!("[{}] 요청 실패 {}: {}", trace_id, status.as_u16(), err);
    } else {
        log::error!("[{}] 요청 실패 {}: {}", trace_id, status.as_u16(), err);
    }

    HttpResponse::build(status).json(ErrorBody {
        error: err.to_string(),
        trace_id: trace_id.to_string(),
        fields: err.field_errors(),
    })
}

/// 결과에 따라 [`respond`] 또는 [`respond_error`]를 호출합니다.
pub fn reply<T: Serialize>(trace_id: &str, result: AppResult<T>, status: StatusCode) -> HttpResponse {
    match result {
        Ok(data) => respond(trace_id, &data, status),
        Err(err) => respond_error(trace_id, err),
    }
}

/// 요청 본문 최대 크기 (256 KiB)
pub const MAX_BODY_BYTES: usize = 256 * 1024;

/// 요청 본문을 [`MAX_BODY_BYTES`]까지 읽습니다.
///
/// `web::Bytes` 추출기는 한도를 넘으면 핸들러 밖에서 413을 돌려주므로,
/// 초과와 읽기 실패를 `ValidationError`(400)로 바꿔 공통 에러 응답을 타게 합니다.
pub async fn read_payload(mut payload: web::Payload) -> AppResult<web::BytesMut> {
    let mut body = web::BytesMut::new();

    while let Some(chunk) = payload.next().await {
        let chunk = chunk
            .map_err(|e| AppError::ValidationError(format!("요청 본문을 읽을 수 없습니다: {}", e)))?;

        if body.len() + chunk.len() > MAX_BODY_BYTES {
            return Err(AppError::ValidationError(format!(
                "요청 본문이 너무 큽니다 (최대 {} bytes)",
                MAX_BODY_BYTES
            )));
        }
        body.extend_from_slice(&chunk);
    }

    Ok(body)
}

/// 요청 본문(JSON)을 입력 구조체로 역직렬화합니다.
///
/// 형식이 잘못된 본문은 `ValidationError`(400)가 됩니다.
/// 필드 값 검증은 서비스 계층의 몫입니다.
pub fn decode_body<T: DeserializeOwned>(body: &[u8]) -> AppResult<T> {
    if body.is_empty() {
        return Err(AppError::ValidationError("요청 본문이 비어 있습니다".to_string()));
    }

    serde_json::from_slice(body)
        .map_err(|e| AppError::ValidationError(format!("요청 본문을 해석할 수 없습니다: {}", e)))
}

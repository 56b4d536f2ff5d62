//! # Application Error Handling System
//!
//! 사용자 API 서비스의 통합 에러 타입입니다.
//! 핸들러는 에러를 해석하지 않고 그대로 응답기([`crate::core::response`])에 넘기며,
//! 상태 코드 분류는 이 모듈에서 한 곳에서만 이루어집니다.
//!
//! ## 에러 분류
//!
//! | 분류 | 변형 | HTTP 상태 |
//! |------|------|-----------|
//! | 클라이언트 입력 오류 | `ValidationError`, `InvalidFields` | 400 Bad Request |
//! | 리소스 없음 | `NotFound` | 404 Not Found |
//! | 내부 오류 | `DatabaseError`, `InternalError` | 500 Internal Server Error |
//!
//! ## 사용 패턴
//!
//! ```rust,ignore
//! use crate::core::errors::{AppError, AppResult};
//!
//! async fn retrieve(&self, id: &UserId) -> AppResult<User> {
//!     self.repo
//!         .find_by_id(id)
//!         .await?
//!         .ok_or_else(|| AppError::NotFound(format!("사용자를 찾을 수 없습니다: {}", id)))
//! }
//! ```
//!
//! 외부 라이브러리 에러는 [`ErrorContext`]로 문맥을 붙여 `InternalError`로 감쌀 수 있습니다.

use actix_web::http::StatusCode;
use serde::Serialize;
use thiserror::Error;
use validator::ValidationErrors;

#[derive(Error, Debug)]
pub enum AppError {
    /// 잘못된 요청 본문, 잘못된 ID 형식 등
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// 필드 단위 검증 실패 (validator 크레이트)
    #[error("Validation error: {0}")]
    InvalidFields(#[from] ValidationErrors),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Internal server error: {0}")]
    InternalError(String),
}

impl From<mongodb::error::Error> for AppError {
    fn from(err: mongodb::error::Error) -> Self {
        AppError::DatabaseError(err.to_string())
    }
}

/// 필드 검증 실패 항목
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

impl AppError {
    /// 클라이언트 입력 문제로 분류되는 에러인지 확인
    pub fn is_client_error(&self) -> bool {
        self.status().is_client_error()
    }

    fn status(&self) -> StatusCode {
        match self {
            AppError::ValidationError(_) | AppError::InvalidFields(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::DatabaseError(_) | AppError::InternalError(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// 필드별 검증 실패 목록을 필드 이름순으로 반환합니다.
    ///
    /// 필드 검증 에러가 아니면 빈 목록입니다.
    pub fn field_errors(&self) -> Vec<FieldError> {
        let AppError::InvalidFields(errors) = self else {
            return Vec::new();
        };

        let mut fields: Vec<FieldError> = errors
            .field_errors()
            .into_iter()
            .flat_map(|(field, errs)| {
                let field = field.to_string();
                errs.iter().map(move |err| FieldError {
                    field: field.clone(),
                    message: err
                        .message
                        .as_ref()
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| err.code.to_string()),
                })
            })
            .collect();

        fields.sort_by(|a, b| a.field.cmp(&b.field).then_with(|| a.message.cmp(&b.message)));
        fields
    }
}

impl actix_web::ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        self.status()
    }

    fn error_response(&self) -> actix_web::HttpResponse {
        // trace id가 없는 경로(추출기 실패 등)에서만 사용됩니다.
        actix_web::HttpResponse::build(self.status_code())
            .json(serde_json::json!({
                "error": self.to_string()
            }))
    }
}

pub type AppResult<T> = Result<T, AppError>;

/// 외부 에러에 문맥 메시지를 붙여 `InternalError`로 변환합니다.
pub trait ErrorContext<T> {
    fn context(self, msg: &str) -> AppResult<T>;
}

impl<T, E> ErrorContext<T> for Result<T, E>
where
    E: std::fmt::Display,
{
    fn context(self, msg: &str) -> AppResult<T> {
        self.map_err(|e| AppError::InternalError(format!("{}: {}", msg, e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::ResponseError;
    use validator::Validate;

    #[derive(Validate)]
    struct SignupForm {
        #[validate(length(min = 1, message = "비어 있을 수 없습니다"))]
        name: String,
        #[validate(email)]
        email: String,
    }

    #[test]
    fn test_validation_error_response() {
        let error = AppError::ValidationError("Malformed body".to_string());
        let response = error.error_response();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert!(error.is_client_error());
    }

    #[test]
    fn test_invalid_fields_maps_to_bad_request() {
        let form = SignupForm { name: String::new(), email: "nope".to_string() };
        let error = AppError::from(form.validate().unwrap_err());

        assert_eq!(error.status_code(), StatusCode::BAD_REQUEST);

        let fields = error.field_errors();
        assert_eq!(fields.len(), 2);
        assert_eq!(fields[0].field, "email");
        assert_eq!(fields[0].message, "email");
        assert_eq!(fields[1].field, "name");
        assert_eq!(fields[1].message, "비어 있을 수 없습니다");
    }

    #[test]
    fn test_not_found_error_response() {
        let error = AppError::NotFound("User not found".to_string());
        let response = error.error_response();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert!(error.is_client_error());
        assert!(error.field_errors().is_empty());
    }

    #[test]
    fn test_internal_error_response() {
        let error = AppError::InternalError("Something went wrong".to_string());
        assert_eq!(error.error_response().status(), StatusCode::INTERNAL_SERVER_ERROR);

        let error = AppError::DatabaseError("connection reset".to_string());
        assert_eq!(error.error_response().status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert!(!error.is_client_error());
    }

    #[test]
    fn test_error_context_trait() {
        let result: Result<(), &str> = Err("original error");
        let app_result = result.context("Additional context");

        if let Err(AppError::InternalError(msg)) = app_result {
            assert!(msg.contains("Additional context"));
            assert!(msg.contains("original error"));
        } else {
            panic!("Expected InternalError");
        }
    }
}

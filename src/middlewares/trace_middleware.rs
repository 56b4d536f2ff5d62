//! 요청 추적 미들웨어
//!
//! 모든 요청에 trace id를 부여하고 응답 헤더로 돌려줍니다.

use std::future::{ready, Ready};
use std::rc::Rc;

use actix_web::{
    dev::{Service, ServiceRequest, ServiceResponse, Transform},
    Error, Result,
};

use crate::middlewares::trace_inner::TraceMiddlewareService;

/// trace id 요청/응답 헤더 이름
pub const TRACE_ID_HEADER: &str = "x-trace-id";

/// 클라이언트가 보낸 trace id의 최대 길이
pub const MAX_TRACE_ID_LEN: usize = 64;

/// 요청 추적 미들웨어
///
/// - 요청에 `X-Trace-Id` 헤더가 있고 형식이 올바르면 그 값을 사용
/// - 없거나 올바르지 않으면 UUID v4를 새로 발급
/// - [`crate::core::TraceId`]를 request extensions에 저장
/// - 응답에 `X-Trace-Id` 헤더 추가
#[derive(Default)]
pub struct TraceMiddleware;

impl TraceMiddleware {
    pub fn new() -> Self {
        Self
    }
}

/// 헤더로 들어온 trace id를 그대로 써도 되는지 확인
pub fn is_acceptable_trace_id(value: &str) -> bool {
    !value.is_empty()
        && value.len() <= MAX_TRACE_ID_LEN
        && value
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.'))
}

/// ActixWeb Transform trait 구현
impl<S, B> Transform<S, ServiceRequest> for TraceMiddleware
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Transform = TraceMiddlewareService<S>;
    type InitError = ();
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(TraceMiddlewareService {
            service: Rc::new(service),
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::TraceId;
    use actix_web::test::{call_service, init_service, read_body, TestRequest};
    use actix_web::{web, App, HttpMessage, HttpRequest, HttpResponse};

    async fn echo_trace(req: HttpRequest) -> HttpResponse {
        let trace = req
            .extensions()
            .get::<TraceId>()
            .map(|t| t.0.clone())
            .unwrap_or_default();
        HttpResponse::Ok().body(trace)
    }

    #[test]
    fn test_acceptable_trace_ids() {
        assert!(is_acceptable_trace_id("abc-123_x.y"));
        assert!(!is_acceptable_trace_id(""));
        assert!(!is_acceptable_trace_id("has space"));
        assert!(!is_acceptable_trace_id(&"a".repeat(MAX_TRACE_ID_LEN + 1)));
    }

    #[actix_web::test]
    async fn test_generates_trace_id_and_sets_header() {
        let app = init_service(
            App::new()
                .wrap(TraceMiddleware::new())
                .route("/", web::get().to(echo_trace)),
        )
        .await;

        let res = call_service(&app, TestRequest::get().uri("/").to_request()).await;

        let header = res
            .headers()
            .get(TRACE_ID_HEADER)
            .unwrap()
            .to_str()
            .unwrap()
            .to_string();
        assert!(uuid::Uuid::parse_str(&header).is_ok());

        let body = read_body(res).await;
        assert_eq!(body, header.as_bytes());
    }

    #[actix_web::test]
    async fn test_reuses_valid_client_trace_id() {
        let app = init_service(
            App::new()
                .wrap(TraceMiddleware::new())
                .route("/", web::get().to(echo_trace)),
        )
        .await;

        let req = TestRequest::get()
            .uri("/")
            .insert_header((TRACE_ID_HEADER, "client-trace-1"))
            .to_request();
        let res = call_service(&app, req).await;

        assert_eq!(res.headers().get(TRACE_ID_HEADER).unwrap(), "client-trace-1");
        assert_eq!(read_body(res).await, "client-trace-1".as_bytes());
    }

    #[actix_web::test]
    async fn test_replaces_malformed_client_trace_id() {
        let app = init_service(
            App::new()
                .wrap(TraceMiddleware::new())
                .route("/", web::get().to(echo_trace)),
        )
        .await;

        let req = TestRequest::get()
            .uri("/")
            .insert_header((TRACE_ID_HEADER, "bad trace id!"))
            .to_request();
        let res = call_service(&app, req).await;

        let header = res.headers().get(TRACE_ID_HEADER).unwrap().to_str().unwrap();
        assert_ne!(header, "bad trace id!");
        assert!(uuid::Uuid::parse_str(header).is_ok());
    }
}

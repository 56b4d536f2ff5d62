//! API 라우트 설정 모듈
//!
//! 사용자 리소스 엔드포인트와 헬스체크 엔드포인트를 등록합니다.
//!
//! # Routes
//!
//! | Method | Path             | Handler                          | 성공 상태 |
//! |--------|------------------|----------------------------------|-----------|
//! | GET    | `/health`        | [`health_check`]                 | 200       |
//! | GET    | `/users`         | [`handlers::users::list_users`]    | 200       |
//! | GET    | `/users/{id}`    | [`handlers::users::retrieve_user`] | 200       |
//! | POST   | `/users`         | [`handlers::users::create_user`]   | 201       |
//! | PUT    | `/users/{id}`    | [`handlers::users::update_user`]   | 204       |
//! | DELETE | `/users/{id}`    | [`handlers::users::delete_user`]   | 200       |
//!
//! # Examples
//!
//! ```rust,ignore
//! use actix_web::App;
//!
//! let app = App::new().configure(configure_all_routes);
//! ```

use actix_web::{web, HttpResponse};
use serde_json::json;

use crate::core::AppState;
use crate::handlers;

/// 모든 라우트를 설정합니다
///
/// # Arguments
///
/// * `cfg` - Actix-web 서비스 설정 객체
pub fn configure_all_routes(cfg: &mut web::ServiceConfig) {
    // Health check endpoint
    cfg.service(health_check);

    configure_user_routes(cfg);
}

/// 사용자 관련 라우트를 설정합니다
///
/// # Examples
///
/// ```bash
/// curl -X POST http://localhost:8080/users \
///   -H "Content-Type: application/json" \
///   -d '{"name":"Ann","email":"ann@example.com"}'
///
/// curl http://localhost:8080/users/3f6c2a4e-...
///
/// curl -X PUT http://localhost:8080/users/3f6c2a4e-... \
///   -H "Content-Type: application/json" \
///   -d '{"name":"Ann Lee"}'
/// ```
fn configure_user_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/users")
            .service(handlers::users::list_users)
            .service(handlers::users::create_user)
            .service(handlers::users::retrieve_user)
            .service(handlers::users::update_user)
            .service(handlers::users::delete_user),
    );
}

/// 서비스 상태를 확인하는 헬스체크 엔드포인트
///
/// 로드밸런서나 모니터링 시스템에서 서비스 상태를 확인하는 데 사용됩니다.
/// 저장소 연결 상태를 검사하지는 않습니다.
///
/// Response:
/// ```json
/// {
///   "status": "healthy",
///   "service": "user_api_service",
///   "version": "0.1.0",
///   "timestamp": "2026-01-01T00:00:00+00:00",
///   "store": "mongodb"
/// }
/// ```
#[actix_web::get("/health")]
async fn health_check(state: Option<web::Data<AppState>>) -> HttpResponse {
    let store = state
        .map(|s| s.db.backend_name())
        .unwrap_or("unconfigured");

    HttpResponse::Ok().json(json!({
        "status": "healthy",
        "service": "user_api_service",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "store": store,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repositories::users::MemoryUserRepository;
    use actix_web::test::{call_service, init_service, read_body_json, TestRequest};
    use actix_web::App;
    use serde_json::Value;
    use std::sync::Arc;
    use std::time::Duration;

    #[actix_web::test]
    async fn test_health_reports_store_backend() {
        let state = web::Data::new(AppState::new(
            Arc::new(MemoryUserRepository::new()),
            Duration::from_secs(5),
        ));
        let app = init_service(App::new().app_data(state).configure(configure_all_routes)).await;

        let res = call_service(&app, TestRequest::get().uri("/health").to_request()).await;
        assert!(res.status().is_success());

        let body: Value = read_body_json(res).await;
        assert_eq!(body["status"], "healthy");
        assert_eq!(body["store"], "memory");
    }

    #[actix_web::test]
    async fn test_health_without_state() {
        let app = init_service(App::new().configure(configure_all_routes)).await;

        let res = call_service(&app, TestRequest::get().uri("/health").to_request()).await;
        let body: Value = read_body_json(res).await;
        assert_eq!(body["store"], "unconfigured");
    }
}

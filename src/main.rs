//! 사용자 API 서비스 메인 애플리케이션
//!
//! Actix-web 기반의 HTTP 서버를 구동합니다.
//! 설정된 저장소(MongoDB 또는 메모리)를 연결하고 사용자 REST API를 제공합니다.

use std::io;
use std::sync::Arc;

use actix_cors::Cors;
use actix_governor::{Governor, GovernorConfigBuilder};
use actix_web::http::header::{self, HeaderName};
use actix_web::{middleware, web, App, HttpServer};
use dotenv::dotenv;
use env_logger::Env;
use log::{error, info};
use user_api_service::config::{DatabaseConfig, Environment, RateLimitConfig, ServerConfig, StoreBackend};
use user_api_service::core::AppState;
use user_api_service::db::Database;
use user_api_service::middlewares::{TraceMiddleware, TRACE_ID_HEADER};
use user_api_service::repositories::users::{MemoryUserRepository, MongoUserRepository, UserRepository};
use user_api_service::routes::configure_all_routes;
use user_api_service::utils::display_terminal::print_startup_summary;

#[actix_web::main]
async fn main() -> io::Result<()> {
    // 환경 설정 및 로깅 초기화
    load_env_file();
    init_logging();

    info!("🚀 사용자 API 서비스 시작중...");

    let repository = initialize_store().await?;
    let state = web::Data::new(AppState::new(repository, ServerConfig::request_timeout()));

    info!("✅ 저장소 초기화 완료: {}", state.db.backend_name());

    start_http_server(state).await
}

/// HTTP 서버를 구성하고 실행합니다
///
/// 미들웨어 순서 (바깥 → 안쪽):
/// `NormalizePath` → `Logger` → `Cors` → `TraceMiddleware` → `Governor` → 라우트
///
/// # Errors
///
/// * `std::io::Error` - Rate Limiting 설정 오류, 포트 바인딩 실패 또는 서버 실행 오류
async fn start_http_server(state: web::Data<AppState>) -> io::Result<()> {
    let bind_address = ServerConfig::bind_address();
    let workers = ServerConfig::workers();

    print_startup_summary(
        &bind_address,
        state.db.backend_name(),
        state.request_timeout.as_secs(),
        workers,
    );

    info!("🌐 서버가 http://{} 에서 실행중입니다", bind_address);
    info!("📍 Health check: http://{}/health", bind_address);
    info!("📍 Users API: http://{}/users", bind_address);

    // Rate Limiting 설정
    let rate_limit_config = RateLimitConfig::load();
    let governor_conf = GovernorConfigBuilder::default()
        .requests_per_second(rate_limit_config.per_second)
        .burst_size(rate_limit_config.burst_size)
        .use_headers()
        .finish()
        .ok_or_else(|| io::Error::new(io::ErrorKind::InvalidInput, "잘못된 Rate Limiting 설정"))?;

    info!(
        "🛡️ Rate Limiting 활성화: 초당 {}요청, 버스트 {}개",
        rate_limit_config.per_second,
        rate_limit_config.burst_size
    );

    HttpServer::new(move || {
        App::new()
            .wrap(Governor::new(&governor_conf))
            .wrap(TraceMiddleware::new())
            .wrap(configure_cors())
            .wrap(middleware::Logger::new(
                r#"%a "%r" %s %b %T trace=%{x-trace-id}o"#,
            ))
            .wrap(middleware::NormalizePath::trim())
            .app_data(state.clone())
            .configure(configure_all_routes)
    })
    .bind(bind_address)?
    .workers(workers)
    .run()
    .await
}

/// 환경별 설정 파일을 로드합니다
///
/// # Environment Variables
///
/// * `PROFILE=dev` - .env.dev 파일 로드 (기본값)
/// * `PROFILE=prod` - .env.prod 파일 로드
/// * 기타 - 기본 .env 파일 로드
fn load_env_file() {
    let profile = std::env::var("PROFILE").unwrap_or_else(|_| "dev".to_string());

    // 로거 초기화 전이므로 결과는 stderr로 직접 출력
    let loaded = match profile.as_str() {
        "prod" => dotenv::from_filename(".env.prod").map(|_| ".env.prod"),
        "dev" => dotenv::from_filename(".env.dev").map(|_| ".env.dev"),
        _ => dotenv().map(|_| ".env"),
    };

    match loaded {
        Ok(file) => eprintln!("[{}] {} 파일 로드 됨", profile, file),
        Err(e) => eprintln!("[{}] 환경 파일 로드 실패: {}", profile, e),
    }
}

/// 로깅 시스템을 초기화합니다
///
/// `RUST_LOG`가 없으면 `ENVIRONMENT`별 기본 필터를 사용합니다.
///
/// ```bash
/// RUST_LOG=user_api_service::services=debug cargo run
/// ```
fn init_logging() {
    let environment = Environment::current();
    env_logger::init_from_env(Env::default().default_filter_or(environment.default_log_filter()));
    info!("실행 환경: {:?}", environment);
}

/// `STORE_BACKEND` 설정에 맞는 사용자 저장소를 만듭니다
///
/// # Errors
///
/// * MongoDB 연결 또는 인덱스 생성 실패 시 `std::io::Error`
async fn initialize_store() -> io::Result<Arc<dyn UserRepository>> {
    match DatabaseConfig::backend() {
        StoreBackend::MongoDb => {
            info!("📡 데이터베이스 연결 중...");

            let database = Database::new().await.map_err(|e| {
                error!("데이터베이스 연결 실패: {}", e);
                io::Error::other(e.to_string())
            })?;

            let repository = MongoUserRepository::new(Arc::new(database))
                .await
                .map_err(|e| {
                    error!("사용자 저장소 초기화 실패: {}", e);
                    io::Error::other(e.to_string())
                })?;

            info!("✅ MongoDB 연결 성공");
            Ok(Arc::new(repository))
        }
        StoreBackend::Memory => {
            info!("🧪 메모리 저장소 사용 (재시작 시 데이터가 사라집니다)");
            Ok(Arc::new(MemoryUserRepository::new()))
        }
    }
}

/// CORS 설정을 구성합니다
///
/// 로컬 프론트엔드 개발 서버를 허용하고, 클라이언트가 `X-Trace-Id`를
/// 보내고 읽을 수 있도록 합니다.
fn configure_cors() -> Cors {
    let trace_header = HeaderName::from_static(TRACE_ID_HEADER);

    Cors::default()
        // 허용할 Origin 설정
        .allowed_origin("http://localhost:3000")
        .allowed_origin("http://127.0.0.1:3000")
        .allowed_origin("http://localhost:8080")
        .allowed_origin("http://127.0.0.1:8080")

        .allowed_methods(vec!["GET", "POST", "PUT", "DELETE", "OPTIONS"])
        .allowed_headers(vec![
            header::ACCEPT,
            header::CONTENT_TYPE,
            trace_header.clone(),
        ])
        .expose_headers(vec![trace_header])

        // Preflight 요청 캐시 시간 (초)
        .max_age(3600)
}

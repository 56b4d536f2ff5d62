//! 데이터 및 서버 설정 관리 모듈
//!
//! 실행 환경, 서버 바인딩, 저장소, 요청 제한 관련 설정을 환경 변수에서 읽습니다.
//! 파싱할 수 없는 값은 에러 로그를 남기고 기본값을 사용합니다.

use std::env;
use std::fmt;
use std::str::FromStr;
use std::time::Duration;

/// 애플리케이션 실행 환경
#[derive(Debug, Clone, PartialEq)]
pub enum Environment {
    /// 개발 환경
    Development,
    /// 테스트 환경
    Test,
    /// 스테이징 환경
    Staging,
    /// 프로덕션 환경
    Production,
}

impl Environment {
    /// 현재 실행 환경을 감지합니다.
    ///
    /// `ENVIRONMENT` 환경 변수를 확인하며, 설정되지 않은 경우 `Production`을 기본값으로 사용합니다.
    pub fn current() -> Self {
        Self::from_name(&env::var("ENVIRONMENT").unwrap_or_else(|_| "production".to_string()))
    }

    /// 문자열에서 Environment를 생성합니다 (대소문자 무관).
    ///
    /// 알 수 없는 값인 경우 `Production`을 반환합니다.
    pub fn from_name(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "development" | "dev" => Environment::Development,
            "test" | "testing" => Environment::Test,
            "staging" | "stage" => Environment::Staging,
            _ => Environment::Production,
        }
    }

    /// 환경별 기본 로그 필터
    pub fn default_log_filter(&self) -> &'static str {
        match self {
            Environment::Development | Environment::Test => "debug,actix_web=info,mongodb=info",
            Environment::Staging | Environment::Production => "info,actix_web=info",
        }
    }
}

/// 환경 변수를 읽어 파싱하고, 실패하면 기본값을 사용합니다.
fn env_or<T>(key: &str, default: T) -> T
where
    T: FromStr + fmt::Display,
    T::Err: fmt::Display,
{
    match env::var(key) {
        Ok(raw) => raw.trim().parse::<T>().unwrap_or_else(|e| {
            log::error!("{} 파싱 실패: {}. 기본값 {} 사용", key, e, default);
            default
        }),
        Err(_) => default,
    }
}

/// 서버 바인딩 설정
pub struct ServerConfig;

impl ServerConfig {
    /// 서버가 바인딩할 포트. 기본값: 8080 (`PORT`)
    pub fn port() -> u16 {
        env_or("PORT", 8080)
    }

    /// 서버가 바인딩할 호스트 주소. 기본값: "0.0.0.0" (`HOST`)
    pub fn host() -> String {
        env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string())
    }

    pub fn bind_address() -> String {
        format!("{}:{}", Self::host(), Self::port())
    }

    /// 워커 스레드 수. 기본값: 4 (`WORKERS`), 최소 1
    pub fn workers() -> usize {
        env_or("WORKERS", 4usize).max(1)
    }

    /// 저장소 호출 하나에 허용되는 시간. 기본값: 30초 (`REQUEST_TIMEOUT_SECS`)
    ///
    /// 0은 허용되지 않으며 기본값으로 대체됩니다.
    pub fn request_timeout() -> Duration {
        match env_or("REQUEST_TIMEOUT_SECS", 30u64) {
            0 => {
                log::error!("REQUEST_TIMEOUT_SECS는 0일 수 없습니다. 기본값 30 사용");
                Duration::from_secs(30)
            }
            secs => Duration::from_secs(secs),
        }
    }
}

/// 사용자 저장소 종류
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreBackend {
    MongoDb,
    Memory,
}

impl FromStr for StoreBackend {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "mongodb" | "mongo" => Ok(StoreBackend::MongoDb),
            "memory" | "in-memory" | "inmemory" => Ok(StoreBackend::Memory),
            other => Err(format!("알 수 없는 저장소 종류: {}", other)),
        }
    }
}

impl fmt::Display for StoreBackend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreBackend::MongoDb => f.write_str("mongodb"),
            StoreBackend::Memory => f.write_str("memory"),
        }
    }
}

/// 데이터베이스 연결 설정
pub struct DatabaseConfig;

impl DatabaseConfig {
    /// 저장소 종류. 기본값: mongodb (`STORE_BACKEND`)
    pub fn backend() -> StoreBackend {
        env_or("STORE_BACKEND", StoreBackend::MongoDb)
    }

    /// MongoDB 연결 URI. 기본값: "mongodb://localhost:27017" (`MONGODB_URI`)
    pub fn uri() -> String {
        env::var("MONGODB_URI").unwrap_or_else(|_| "mongodb://localhost:27017".to_string())
    }

    /// 데이터베이스 이름. 기본값: "users_api_dev" (`DATABASE_NAME`)
    pub fn name() -> String {
        env::var("DATABASE_NAME").unwrap_or_else(|_| "users_api_dev".to_string())
    }
}

/// Rate Limiting 설정
#[derive(Debug, Clone, PartialEq)]
pub struct RateLimitConfig {
    pub per_second: u64,
    pub burst_size: u32,
}

impl RateLimitConfig {
    /// `RATE_LIMIT_PER_SECOND` (기본 100), `RATE_LIMIT_BURST_SIZE` (기본 200)
    pub fn load() -> Self {
        let config = Self {
            per_second: env_or("RATE_LIMIT_PER_SECOND", 100u64).max(1),
            burst_size: env_or("RATE_LIMIT_BURST_SIZE", 200u32).max(1),
        };

        log::info!("Rate Limiting 설정 로드됨: {:?}", config);
        config
    }
}

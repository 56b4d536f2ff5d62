//! # Configuration Module
//!
//! 서비스 설정을 환경 변수 기반으로 중앙에서 관리하는 모듈입니다.
//! `.env.dev` / `.env.prod` / `.env` 파일은 `main`에서 `PROFILE`에 따라 먼저 로드됩니다.
//!
//! ## 모듈 구성
//!
//! - [`data_config`] - 실행 환경, 서버, 저장소, Rate Limiting 설정
//!
//! ## 환경 변수 설정 가이드
//!
//! ```bash
//! # 실행 환경 (development, test, staging, production)
//! export ENVIRONMENT="development"
//!
//! # 서버 설정
//! export HOST="0.0.0.0"
//! export PORT="8080"
//! export WORKERS="4"
//! export REQUEST_TIMEOUT_SECS="30"
//!
//! # 저장소 설정 (mongodb | memory)
//! export STORE_BACKEND="mongodb"
//! export MONGODB_URI="mongodb://localhost:27017"
//! export DATABASE_NAME="users_api_dev"
//!
//! # Rate Limiting
//! export RATE_LIMIT_PER_SECOND="100"
//! export RATE_LIMIT_BURST_SIZE="200"
//! ```

pub mod data_config;

pub use data_config::*;

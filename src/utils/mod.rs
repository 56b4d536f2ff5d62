//! 공통 유틸리티 함수 모듈
//!
//! 요청 본문 문자열 정리와 기동 시 터미널 출력 기능을 제공합니다.
//!
//! # Modules
//!
//! - [`string_utils`] - serde 역직렬화용 문자열 정리 헬퍼
//! - [`display_terminal`] - 터미널 출력 포맷팅 함수들

pub mod string_utils;
pub mod display_terminal;

//! # HTTP Request Handlers Module
//!
//! HTTP 요청을 처리하는 핸들러 함수들을 정의하는 모듈입니다.
//!
//! ## 아키텍처 위치
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//!   Client (Browser, Mobile App, API Client)
//! └─────────────────────┬───────────────────────┘
//!                       │ HTTP Request/Response
//! ┌─────────────────────▼───────────────────────┐
//!   Handlers (이 모듈) - 요청 ↔ 응답 변환           ← Web Layer
//! ├─────────────────────────────────────────────┤
//!   Services - 검증, 비즈니스 로직                  ← Service Layer
//! ├─────────────────────────────────────────────┤
//!   Repositories - MongoDB / 메모리 저장소          ← Repository Layer
//! └─────────────────────────────────────────────┘
//! ```
//!
//! ## 핸들러 작성 규칙
//!
//! - 요청 단위 값은 [`crate::core::RequestValues`] 추출기로 받습니다.
//! - 본문은 `web::Payload`로 받아 [`crate::core::read_payload`]로 읽고
//!   [`crate::core::decode_body`]로 역직렬화합니다. 크기 초과와 역직렬화 실패도
//!   trace id가 담긴 공통 에러 응답(400)으로 돌려줍니다.
//! - 에러는 해석하지 않고 [`crate::core::respond_error`]에 그대로 넘깁니다.
//!
//! ## 모듈 구성
//!
//! - **`users`**: 사용자 CRUD 엔드포인트
//!   - 목록 조회 (`GET /users`)
//!   - 단건 조회 (`GET /users/{id}`)
//!   - 생성 (`POST /users`)
//!   - 수정 (`PUT /users/{id}`)
//!   - 삭제 (`DELETE /users/{id}`)

pub mod users;

//! # User Management HTTP Handlers
//!
//! 사용자 리소스의 CRUD 엔드포인트 핸들러입니다.
//! 모든 핸들러는 같은 순서로 동작합니다.
//!
//! 1. [`RequestValues`]로 trace id와 저장소 핸들을 받음
//! 2. (필요 시) 요청 본문을 [`CreateUser`]로 역직렬화
//! 3. (필요 시) 경로 파라미터를 [`UserId`]로 파싱
//! 4. [`UserService`] 호출
//! 5. 실패하면 [`respond_error`], 성공하면 [`respond`]
//!
//! 첫 번째 에러에서 즉시 종료하며, 부분 결과는 반환하지 않습니다.
//! 에러 분류(400/404/500)는 핸들러가 아니라 응답기가 합니다.
//!
//! ## 엔드포인트
//!
//! | 메서드 | 경로 | 본문 | 성공 | 실패 |
//! |--------|------|------|------|------|
//! | `GET` | `/users` | - | 200 + 배열 | 500 |
//! | `GET` | `/users/{id}` | - | 200 + 객체 | 400, 404, 500 |
//! | `POST` | `/users` | `CreateUser` | 201 + 객체 | 400, 500 |
//! | `PUT` | `/users/{id}` | `CreateUser` | 204 | 400, 404, 500 |
//! | `DELETE` | `/users/{id}` | - | 200 + 삭제된 객체 | 400, 404, 500 |

use actix_web::http::StatusCode;
use actix_web::{delete, get, post, put, web, HttpResponse};

use crate::core::context::RequestValues;
use crate::core::errors::AppError;
use crate::core::response::{decode_body, read_payload, reply, respond, respond_error};
use crate::domain::dto::users::request::CreateUser;
use crate::domain::entities::users::UserId;
use crate::services::users::UserService;

/// 요청 본문을 크기 제한 안에서 읽어 [`CreateUser`]로 역직렬화합니다.
async fn decode_input(payload: web::Payload) -> Result<CreateUser, AppError> {
    let body = read_payload(payload).await?;
    decode_body(&body)
}

/// 사용자 목록 조회 핸들러
///
/// # 엔드포인트
///
/// `GET /users`
///
/// # 응답
///
/// ## 성공 (200 OK)
/// ```json
/// [
///   {
///     "id": "0d5f1c2e-7a0b-4a53-9c55-3c4f3b1a9e10",
///     "name": "Ann",
///     "date_created": "2024-01-01T00:00:00Z",
///     "date_modified": "2024-01-01T00:00:00Z"
///   }
/// ]
/// ```
///
/// 사용자가 없으면 빈 배열을 반환합니다.
#[get("")]
pub async fn list_users(values: RequestValues) -> HttpResponse {
    let result = UserService::for_request(&values).list().await;

    reply(&values.trace_id, result, StatusCode::OK)
}

/// 사용자 조회 핸들러
///
/// # 엔드포인트
///
/// `GET /users/{user_id}`
///
/// # 경로 파라미터
///
/// - `user_id`: 1-64자의 영문, 숫자, `-`, `_`
///
/// # 응답
///
/// ## 성공 (200 OK)
/// ```json
/// {
///   "id": "0d5f1c2e-7a0b-4a53-9c55-3c4f3b1a9e10",
///   "name": "Ann",
///   "email": "ann@example.com",
///   "date_created": "2024-01-01T00:00:00Z",
///   "date_modified": "2024-01-01T08:00:00Z"
/// }
/// ```
///
/// ## 실패 사례
///
/// ### 사용자 없음 (404 Not Found)
/// ```json
/// {
///   "error": "Not found: 사용자를 찾을 수 없습니다: does-not-exist",
///   "trace_id": "6f1c0c8e-3b8a-4f57-9d7e-0c6f3a9b2e11"
/// }
/// ```
///
/// ### 잘못된 ID 형식 (400 Bad Request)
///
/// # 사용 예제
///
/// ```bash
/// curl http://localhost:8080/users/0d5f1c2e-7a0b-4a53-9c55-3c4f3b1a9e10
/// ```
#[get("/{user_id}")]
pub async fn retrieve_user(values: RequestValues, user_id: web::Path<String>) -> HttpResponse {
    let id = match UserId::parse(&user_id) {
        Ok(id) => id,
        Err(err) => return respond_error(&values.trace_id, err),
    };

    let result = UserService::for_request(&values).retrieve(&id).await;

    reply(&values.trace_id, result, StatusCode::OK)
}

/// 사용자 생성 핸들러
///
/// # 엔드포인트
///
/// `POST /users`
///
/// # 요청 본문
///
/// ```json
/// { "name": "Ann", "email": "ann@example.com" }
/// ```
///
/// # 응답
///
/// ## 성공 (201 Created)
///
/// 생성된 사용자 (서버가 발급한 `id` 포함)
///
/// ## 실패 사례
///
/// ### 본문 형식 오류 (400 Bad Request)
///
/// JSON이 아니거나 `name`이 없는 경우, 또는 본문이 256 KiB를 넘는 경우.
/// 서비스는 호출되지 않습니다.
///
/// ### 검증 실패 (400 Bad Request)
/// ```json
/// {
///   "error": "Validation error: email: 유효한 이메일 주소를 입력해주세요",
///   "trace_id": "6f1c0c8e-3b8a-4f57-9d7e-0c6f3a9b2e11",
///   "fields": [
///     { "field": "email", "message": "유효한 이메일 주소를 입력해주세요" }
///   ]
/// }
/// ```
///
/// # 사용 예제
///
/// ```bash
/// curl -X POST http://localhost:8080/users \
///   -H "Content-Type: application/json" \
///   -d '{"name":"Ann"}'
/// ```
#[post("")]
pub async fn create_user(values: RequestValues, payload: web::Payload) -> HttpResponse {
    let input: CreateUser = match decode_input(payload).await {
        Ok(input) => input,
        Err(err) => return respond_error(&values.trace_id, err),
    };

    let result = UserService::for_request(&values).create(input).await;

    reply(&values.trace_id, result, StatusCode::CREATED)
}

/// 사용자 수정 핸들러
///
/// 이름과 이메일을 요청 본문 값으로 교체합니다.
/// 존재하지 않는 ID는 404이며, 새 사용자를 만들지 않습니다.
///
/// # 엔드포인트
///
/// `PUT /users/{user_id}`
///
/// # 응답
///
/// ## 성공 (204 No Content)
/// ```bash,ignore
/// HTTP/1.1 204 No Content
/// ```
///
/// # 사용 예제
///
/// ```bash
/// curl -X PUT http://localhost:8080/users/123 \
///   -H "Content-Type: application/json" \
///   -d '{"name":"Ann2"}'
/// ```
#[put("/{user_id}")]
pub async fn update_user(
    values: RequestValues,
    user_id: web::Path<String>,
    payload: web::Payload,
) -> HttpResponse {
    let input: CreateUser = match decode_input(payload).await {
        Ok(input) => input,
        Err(err) => return respond_error(&values.trace_id, err),
    };

    let id = match UserId::parse(&user_id) {
        Ok(id) => id,
        Err(err) => return respond_error(&values.trace_id, err),
    };

    match UserService::for_request(&values).update(&id, input).await {
        Ok(()) => respond(&values.trace_id, &(), StatusCode::NO_CONTENT),
        Err(err) => respond_error(&values.trace_id, err),
    }
}

/// 사용자 삭제 핸들러
///
/// 삭제 전에 사용자를 조회하여, 삭제된 사용자를 응답 본문으로 돌려줍니다.
/// 조회에 실패하면 삭제를 시도하지 않습니다.
///
/// 조회와 삭제는 하나의 트랜잭션이 아닙니다. 그 사이에 다른 요청이 같은 사용자를
/// 삭제하면 이 요청은 404로 끝납니다.
///
/// # 엔드포인트
///
/// `DELETE /users/{user_id}`
///
/// # 응답
///
/// ## 성공 (200 OK)
///
/// 삭제된 사용자 객체
///
/// # 사용 예제
///
/// ```bash
/// curl -X DELETE http://localhost:8080/users/0d5f1c2e-7a0b-4a53-9c55-3c4f3b1a9e10
/// ```
#[delete("/{user_id}")]
pub async fn delete_user(values: RequestValues, user_id: web::Path<String>) -> HttpResponse {
    let result = async {
        let id = UserId::parse(&user_id)?;
        let service = UserService::for_request(&values);

        let user = service.retrieve(&id).await?;
        service.delete(&id).await?;

        Ok::<_, AppError>(user)
    }
    .await;

    reply(&values.trace_id, result, StatusCode::OK)
}

//! 사용자 요청 DTO

pub mod create_user;

pub use create_user::CreateUser;

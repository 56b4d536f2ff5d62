//! Users Entity Module

pub mod user;
pub mod user_id;

pub use user::User;
pub use user_id::UserId;

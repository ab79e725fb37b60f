//! HTTP 미들웨어 모듈
//!
//! - [`AuthMiddleware`] - Bearer 토큰 검증 게이트 (`optional` / `required`)

pub mod auth_middleware;
mod auth_inner;

pub use auth_middleware::{AuthMiddleware, AuthMode};

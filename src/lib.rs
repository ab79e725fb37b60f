//! 소셜 로그인 인증 서비스 백엔드
//!
//! Apple, Kakao 소셜 로그인으로 신원을 확인하고 자체 JWT 세션 토큰을 발급하는
//! Rust 기반 인증 서비스입니다.
//!
//! # Features
//!
//! - **Sign in with Apple**: ES256 client secret 서명, JWKS 기반 ID 토큰 검증
//! - **Kakao 로그인**: 토큰 교환 후 사용자 정보 조회
//! - **JWT 세션**: HS256 액세스/리프레시 토큰 발급 및 인바운드 검증
//! - **회원 자동 가입**: 이메일 기준 조회 후 없으면 가입 (MongoDB 또는 인메모리)
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │   HTTP Routes   │ ← REST API 엔드포인트 + 인증 게이트
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Handlers     │ ← 요청/응답 처리
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐     ┌──────────────────┐
//! │   AuthService   │ ──▶ │ ProviderRegistry │ ──▶ Apple / Kakao
//! └─────────────────┘     └──────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │  Repositories   │ ← 회원 저장소
//! └─────────────────┘
//! ```
//!
//! # Examples
//!
//! ```rust,ignore
//! use social_auth_backend::core::{AppConfig, AppContext};
//!
//! let context = AppContext::build(AppConfig::from_env()?).await?;
//! let result = context.auth_service.handle_login("apple", code).await?;
//! ```

pub mod core;
pub mod config;
pub mod db;
pub mod domain;
pub mod repositories;
pub mod services;
pub mod routes;
pub mod handlers;
pub mod errors;
pub mod middlewares;

#[cfg(test)]
mod test_fixtures;

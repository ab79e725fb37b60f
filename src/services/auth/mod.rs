//! 인증 서비스 모듈
//!
//! 소셜 로그인 어댑터와 세션 토큰 발급을 담당합니다.
//!
//! # Features
//!
//! - Apple: ES256 client secret 서명, 토큰 교환, JWKS 기반 ID 토큰 검증
//! - Kakao: 토큰 교환 후 사용자 정보 조회
//! - HS256 액세스/리프레시 토큰 발급 및 검증
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::services::auth::AuthService;
//!
//! let result = auth_service.handle_login("kakao", code).await?;
//! println!("{}", result.tokens.access_token);
//! ```

pub mod provider;
pub mod token_service;
pub mod jwks_resolver;
pub mod apple_auth_service;
pub mod kakao_auth_service;
pub mod auth_service;

pub use provider::OAuthProvider;
pub use token_service::TokenService;
pub use jwks_resolver::JwksResolver;
pub use apple_auth_service::AppleAuthService;
pub use kakao_auth_service::KakaoAuthService;
pub use auth_service::{AuthService, LoginResult};

//! # Data Transfer Objects
//!
//! HTTP 요청/응답 계약을 정의합니다. Spring 의 `@RequestBody`/`@ResponseBody`
//! 객체와 같은 역할이며, 입력 검증은 `validator` 로 수행합니다.
//!
//! ## 구성
//!
//! - [`auth`] - 소셜 로그인 콜백 요청, 로그인/회원 응답
//!
//! ## 검증 흐름
//!
//! ```text
//! JSON 본문 / 쿼리 ──▶ OAuthCallbackRequest::resolve ──▶ validate()
//!                                                   └─▶ AppError::ValidationError (400)
//! ```

pub mod auth;

pub use auth::*;

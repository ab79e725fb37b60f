//! 비즈니스 로직을 담당하는 서비스 계층 모듈
//!
//! 모든 서비스는 기동 시 [`AppContext`](crate::core::context::AppContext)에서
//! 한 번 생성되어 `Arc`로 공유됩니다.
//!
//! - [`auth`] - 소셜 로그인 어댑터, 세션 토큰, 로그인 오케스트레이션
//! - [`members`] - 회원 조회 및 자동 가입

pub mod auth;
pub mod members;

//! # Domain Models
//!
//! 엔티티가 아닌 도메인 값 객체와 외부 프로토콜 모델입니다.
//!
//! - [`auth`] - 인증된 요청 주체와 extractor
//! - [`oauth`] - 프로바이더 프로토콜 모델과 정규화된 신원 정보
//! - [`token`] - 세션 토큰 클레임과 토큰 쌍

pub mod auth;
pub mod oauth;
pub mod token;

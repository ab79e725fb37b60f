//! # OAuth Models
//!
//! 외부 인증 프로바이더와 주고받는 프로토콜 모델입니다.
//! 이 타입들은 HTTP 경계에서만 사용되고, 서비스 계층 밖으로는
//! 정규화된 [`ProviderIdentity`]만 전달됩니다.
//!
//! ## 구성
//!
//! | 모듈 | 내용 |
//! |------|------|
//! | [`identity`] | 프로바이더 공통 신원 정보 |
//! | [`apple`] | Apple 토큰 응답, client secret, ID 토큰 클레임 |
//! | [`kakao`] | Kakao 토큰/사용자 정보 응답 |
//! | [`jwk`] | JWKS 공개 키 세트 |

pub mod apple;
pub mod identity;
pub mod jwk;
pub mod kakao;

pub use identity::ProviderIdentity;
pub use jwk::{Jwk, JwkSet};

//! 에러 타입 모듈
//!
//! [`errors::AppError`]와 프로바이더/토큰 검증 세부 에러를 제공합니다.

pub mod errors;

pub use errors::*;

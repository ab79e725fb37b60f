//! 회원 서비스 모듈
//!
//! 프로바이더 신원 정보로 회원을 찾거나 가입시키는 로직을 제공합니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::services::members::MemberService;
//!
//! let member_service = MemberService::new(repository);
//! let member = member_service.find_or_register(&identity).await?;
//! ```

pub mod member_service;

pub use member_service::*;

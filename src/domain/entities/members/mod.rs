//! Members Entity Module
//!
//! 소셜 로그인으로 가입한 회원 엔티티를 정의합니다.
//! 이메일이 회원을 유일하게 식별하며, 프로바이더별 병합 로직은 없습니다.
//!
//! # 사용 예제
//!
//! ```rust,ignore
//! use crate::domain::entities::members::Member;
//!
//! let member = Member::from_identity(&identity);
//! let saved = repository.save(member).await?;
//! println!("회원 ID: {:?}", saved.id_string());
//! ```

pub mod member;

pub use member::*;

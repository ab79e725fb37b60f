//! 회원 저장소
//!
//! [`MemberRepository`] 계약과 MongoDB / 인메모리 구현을 제공합니다.

pub mod member_repo;

pub use member_repo::*;

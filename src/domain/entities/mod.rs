//! # Entities Module
//!
//! 영속 가능한 도메인 엔티티를 모아둔 모듈입니다.
//! Spring JPA의 `@Entity`와 같은 역할을 하며, MongoDB 문서로 직렬화됩니다.
//!
//! ## 구성
//!
//! - [`members`] - 소셜 로그인 회원
//!
//! ## 설계 규칙
//!
//! - `id`는 `Option<ObjectId>`: 저장 전 `None`, 저장 후 `Some`
//! - 시간 필드는 `bson::DateTime`
//! - 엔티티 생성은 팩토리 메서드(`Member::from_identity`)로만 수행

pub mod members;

pub use members::*;

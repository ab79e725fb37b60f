//! # Domain Layer Module
//!
//! 도메인 계층을 구성하는 핵심 모듈로, 소셜 로그인 흐름에서 오가는
//! 엔티티, 값 객체, 요청/응답 계약을 담당합니다.
//!
//! ## 아키텍처 개요
//!
//! ```text
//! Domain Layer (이 모듈)
//! ├── Entities      - 회원 (MongoDB 문서)
//! ├── DTOs          - 콜백 요청, 로그인 응답
//! └── Models        - 프로바이더 프로토콜 모델, 정규화된 신원, 세션 토큰 클레임
//!      │
//!      ▼
//! Application Layer (Services)
//!      │
//!      ▼
//! Infrastructure Layer (Repositories, DB)
//! ```
//!
//! ## Spring Framework와의 비교
//!
//! | Spring | 이 시스템 | 역할 |
//! |--------|-----------|------|
//! | `@Entity` | `entities` 모듈 | 회원 |
//! | `@RequestBody` / `@ResponseBody` | `dto` 모듈 | API 계약 정의 |
//! | `OAuth2User` | `models::oauth::ProviderIdentity` | 정규화된 외부 신원 |
//! | `Authentication` principal | `models::auth::AuthenticatedUser` | 요청 주체 |
//!
//! ## 데이터 흐름
//!
//! ```text
//! 인가 코드 ──▶ 프로바이더 어댑터 ──▶ ProviderIdentity
//!                                        │
//!                                        ▼
//!                         Member::from_identity (최초 로그인)
//!                                        │
//!                                        ▼
//!                         SessionClaims ──▶ TokenPair ──▶ LoginResponse
//! ```
//!
//! `ProviderIdentity`는 로그인 시도마다 새로 만들어지는 불변 값이며
//! 저장되지 않습니다. 저장되는 것은 `Member` 뿐입니다.

pub mod entities;
pub mod dto;
pub mod models;

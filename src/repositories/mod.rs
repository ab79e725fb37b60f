//! 데이터 액세스 계층을 담당하는 리포지토리 모듈
//!
//! 저장소는 trait 객체(`Arc<dyn MemberRepository>`)로 서비스에 주입됩니다.
//! `MEMBER_STORE` 설정에 따라 MongoDB 또는 인메모리 구현이 선택됩니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::repositories::members::{MemberRepository, MongoMemberRepository};
//!
//! let repository = MongoMemberRepository::new(&database);
//! repository.create_indexes().await?;
//! let member = repository.find_by_email("user@example.com").await?;
//! ```

pub mod members;

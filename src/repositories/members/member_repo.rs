//! 회원 저장소 구현
//!
//! 로그인 흐름이 필요로 하는 계약은 두 가지뿐입니다.
//!
//! * `find_by_email(email) -> Option<Member>`
//! * `save(member) -> Member`
//!
//! 이메일은 유니크합니다. 같은 이메일로 두 번 저장하면 `ConflictError`이며,
//! 동시 가입 경합은 [`MemberService`](crate::services::members::MemberService)가 처리합니다.

use std::collections::HashMap;
use std::sync::RwLock;

use async_trait::async_trait;
use mongodb::bson::{doc, oid::ObjectId};
use mongodb::error::{ErrorKind, WriteFailure};
use mongodb::options::IndexOptions;
use mongodb::{Collection, IndexModel};

use crate::db::Database;
use crate::domain::entities::members::Member;
use crate::errors::errors::{AppError, AppResult};

const MEMBER_COLLECTION: &str = "members";
const DUPLICATE_KEY_CODE: i32 = 11000;

/// 회원 저장소 계약
#[async_trait]
pub trait MemberRepository: Send + Sync {
    async fn find_by_email(&self, email: &str) -> AppResult<Option<Member>>;

    /// 새 회원을 저장하고 ID 가 채워진 회원을 반환합니다.
    ///
    /// # Errors
    ///
    /// * `AppError::ConflictError` - 같은 이메일의 회원이 이미 있음
    /// * `AppError::DatabaseError` - 저장소 오류
    async fn save(&self, member: Member) -> AppResult<Member>;
}

/// MongoDB `members` 컬렉션 기반 저장소
pub struct MongoMemberRepository {
    collection: Collection<Member>,
}

impl MongoMemberRepository {
    pub fn new(database: &Database) -> Self {
        Self {
            collection: database.get_database().collection::<Member>(MEMBER_COLLECTION),
        }
    }

    /// 이메일 유니크 인덱스를 생성합니다. 이미 있으면 아무 일도 하지 않습니다.
    pub async fn create_indexes(&self) -> AppResult<()> {
        let email_index = IndexModel::builder()
            .keys(doc! { "email": 1 })
            .options(
                IndexOptions::builder()
                    .unique(true)
                    .name("email_unique".to_string())
                    .build(),
            )
            .build();

        self.collection
            .create_index(email_index)
            .await
            .map_err(|e| AppError::DatabaseError(format!("members 인덱스 생성 실패: {}", e)))?;

        log::info!("✅ members 컬렉션 인덱스 준비 완료");
        Ok(())
    }
}

fn is_duplicate_key(error: &mongodb::error::Error) -> bool {
    matches!(
        error.kind.as_ref(),
        ErrorKind::Write(WriteFailure::WriteError(write_error)) if write_error.code == DUPLICATE_KEY_CODE
    )
}

#[async_trait]
impl MemberRepository for MongoMemberRepository {
    async fn find_by_email(&self, email: &str) -> AppResult<Option<Member>> {
        self.collection
            .find_one(doc! { "email": email })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    async fn save(&self, mut member: Member) -> AppResult<Member> {
        let result = self.collection.insert_one(&member).await.map_err(|e| {
            if is_duplicate_key(&e) {
                AppError::ConflictError(format!("이미 가입된 이메일입니다: {}", member.email))
            } else {
                AppError::DatabaseError(e.to_string())
            }
        })?;

        member.id = result.inserted_id.as_object_id();
        Ok(member)
    }
}

/// 프로세스 메모리 기반 저장소 (`MEMBER_STORE=memory`, 테스트)
#[derive(Default)]
pub struct InMemoryMemberRepository {
    members: RwLock<HashMap<String, Member>>,
}

impl InMemoryMemberRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.members.read().map(|m| m.len()).unwrap_or_default()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[async_trait]
impl MemberRepository for InMemoryMemberRepository {
    async fn find_by_email(&self, email: &str) -> AppResult<Option<Member>> {
        let members = self
            .members
            .read()
            .map_err(|e| AppError::InternalError(format!("회원 저장소 잠금 실패: {}", e)))?;
        Ok(members.get(email).cloned())
    }

    async fn save(&self, mut member: Member) -> AppResult<Member> {
        let mut members = self
            .members
            .write()
            .map_err(|e| AppError::InternalError(format!("회원 저장소 잠금 실패: {}", e)))?;

        if members.contains_key(&member.email) {
            return Err(AppError::ConflictError(format!("이미 가입된 이메일입니다: {}", member.email)));
        }

        member.id.get_or_insert_with(ObjectId::new);
        members.insert(member.email.clone(), member.clone());
        Ok(member)
    }
}

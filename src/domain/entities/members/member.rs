//! 회원 엔티티
//!
//! MongoDB `members` 컬렉션에 저장되는 회원 문서입니다.

use mongodb::bson::{oid::ObjectId, DateTime};
use serde::{Deserialize, Serialize};

use crate::config::AuthProvider;
use crate::domain::models::oauth::ProviderIdentity;

/// 신규 회원에게 부여되는 기본 역할
pub const DEFAULT_MEMBER_ROLE: &str = "user";

/// 회원 엔티티
///
/// 첫 로그인 시 [`ProviderIdentity`]로부터 생성되고, 이후에는 이메일로 조회됩니다.
///
/// # 필드
///
/// * `id` - MongoDB ObjectId, 저장 전에는 `None`
/// * `email` - 회원 식별 이메일 (유니크)
/// * `provider` - 최초 가입 프로바이더
/// * `external_id` - 프로바이더가 발급한 사용자 식별자 (Apple `sub`, Kakao `id`)
/// * `nickname`, `profile_image_url` - 프로바이더가 제공한 경우에만 존재
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Member {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,

    pub email: String,

    pub provider: AuthProvider,

    pub external_id: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub nickname: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile_image_url: Option<String>,

    #[serde(default)]
    pub roles: Vec<String>,

    pub created_at: DateTime,
}

impl Member {
    /// 프로바이더 신원 정보로 아직 저장되지 않은 회원을 생성합니다.
    pub fn from_identity(identity: &ProviderIdentity) -> Self {
        Self {
            id: None,
            email: identity.email.clone(),
            provider: identity.provider,
            external_id: identity.external_id.clone(),
            nickname: identity.nickname.clone(),
            profile_image_url: identity.profile_image.clone(),
            roles: vec![DEFAULT_MEMBER_ROLE.to_string()],
            created_at: DateTime::now(),
        }
    }

    /// ObjectId를 16진수 문자열로 반환합니다.
    pub fn id_string(&self) -> Option<String> {
        self.id.as_ref().map(|id| id.to_hex())
    }

    /// 세션 토큰의 subject. 회원 이메일을 사용합니다.
    pub fn subject(&self) -> &str {
        &self.email
    }
}

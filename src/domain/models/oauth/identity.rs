//! 프로바이더 공통 신원 정보

use serde::{Deserialize, Serialize};

use crate::config::AuthProvider;

/// 프로바이더 어댑터가 인증 코드 교환 후 만들어내는 정규화된 신원 정보
///
/// 로그인 시도마다 한 번 생성되며 그대로 저장되지 않습니다.
/// 회원 조회/가입 단계([`MemberService::find_or_register`])에서 소비됩니다.
///
/// `nickname`/`profile_image`는 Kakao 처럼 프로필을 제공하는 프로바이더에서만
/// 채워지고, Apple 은 항상 `None`입니다.
///
/// [`MemberService::find_or_register`]: crate::services::members::MemberService::find_or_register
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProviderIdentity {
    pub external_id: String,
    pub email: String,
    pub provider: AuthProvider,
    pub nickname: Option<String>,
    pub profile_image: Option<String>,
}

impl ProviderIdentity {
    /// 프로필 정보가 없는 신원 정보를 생성합니다.
    pub fn new(external_id: impl Into<String>, email: impl Into<String>, provider: AuthProvider) -> Self {
        Self {
            external_id: external_id.into(),
            email: email.into(),
            provider,
            nickname: None,
            profile_image: None,
        }
    }
}

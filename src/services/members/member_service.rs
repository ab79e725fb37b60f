//! 회원 조회/가입 서비스

use std::sync::Arc;

use crate::domain::entities::members::Member;
use crate::domain::models::oauth::ProviderIdentity;
use crate::errors::errors::{AppError, AppResult};
use crate::repositories::members::MemberRepository;

/// 회원 서비스
pub struct MemberService {
    repository: Arc<dyn MemberRepository>,
}

impl MemberService {
    pub fn new(repository: Arc<dyn MemberRepository>) -> Self {
        Self { repository }
    }

    /// 이메일로 회원을 찾고, 없으면 새로 가입시킵니다.
    ///
    /// 같은 신원 정보로 여러 번 호출해도 항상 같은 회원을 반환합니다.
    /// 동시 요청이 먼저 가입시킨 경우(`ConflictError`) 다시 조회해 그 회원을 반환합니다.
    ///
    /// # Errors
    ///
    /// * `AppError::DatabaseError` - 저장소 오류
    pub async fn find_or_register(&self, identity: &ProviderIdentity) -> AppResult<Member> {
        if let Some(member) = self.repository.find_by_email(&identity.email).await? {
            log::debug!("기존 회원 로그인: provider={}", identity.provider);
            return Ok(member);
        }

        match self.repository.save(Member::from_identity(identity)).await {
            Ok(member) => {
                log::info!(
                    "🆕 신규 회원 가입: provider={}, id={}",
                    identity.provider,
                    member.id_string().unwrap_or_default()
                );
                Ok(member)
            }
            Err(AppError::ConflictError(_)) => self
                .repository
                .find_by_email(&identity.email)
                .await?
                .ok_or_else(|| AppError::InternalError("가입 경합 후 회원을 찾을 수 없습니다".to_string())),
            Err(e) => Err(e),
        }
    }
}

//! 로그인/회원 응답 DTO

use serde::Serialize;

use crate::config::AuthProvider;
use crate::domain::entities::members::Member;
use crate::domain::models::auth::AuthenticatedUser;
use crate::domain::models::token::TokenPair;

/// 응답에 노출되는 회원 요약
#[derive(Debug, Clone, Serialize)]
pub struct MemberSummary {
    pub id: Option<String>,
    pub email: String,
    pub provider: AuthProvider,
}

impl From<&Member> for MemberSummary {
    fn from(member: &Member) -> Self {
        Self {
            id: member.id_string(),
            email: member.email.clone(),
            provider: member.provider,
        }
    }
}

/// 로그인 성공 응답
#[derive(Debug, Clone, Serialize)]
pub struct LoginResponse {
    pub member: MemberSummary,
    pub access_token: String,
    pub refresh_token: String,
    pub token_type: &'static str,
    pub expires_in: i64,
}

impl LoginResponse {
    pub fn new(member: &Member, tokens: TokenPair) -> Self {
        Self {
            member: MemberSummary::from(member),
            access_token: tokens.access_token,
            refresh_token: tokens.refresh_token,
            token_type: "Bearer",
            expires_in: tokens.expires_in,
        }
    }
}

/// `GET /api/members/me` 응답
#[derive(Debug, Clone, Serialize)]
pub struct CurrentMemberResponse {
    pub subject: String,
    pub roles: Vec<String>,
}

impl From<AuthenticatedUser> for CurrentMemberResponse {
    fn from(user: AuthenticatedUser) -> Self {
        Self { subject: user.subject, roles: user.roles }
    }
}

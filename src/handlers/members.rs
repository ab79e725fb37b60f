//! Member HTTP Handlers
//!
//! 인증된 회원 정보 조회 엔드포인트입니다. `AuthMiddleware::required`로
//! 보호된 스코프에 등록됩니다.
use actix_web::{get, HttpResponse};

use crate::domain::dto::CurrentMemberResponse;
use crate::domain::models::auth::AuthenticatedUser;
use crate::errors::errors::AppError;

/// 현재 로그인한 회원의 토큰 주체와 역할을 반환합니다.
///
/// # Endpoint
/// `GET /api/members/me`
#[get("/me")]
pub async fn get_current_member(user: AuthenticatedUser) -> Result<HttpResponse, AppError> {
    Ok(HttpResponse::Ok().json(CurrentMemberResponse::from(user)))
}

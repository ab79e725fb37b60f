//! # HTTP Request Handlers Module
//!
//! HTTP 요청을 처리하는 핸들러 함수들입니다. Spring MVC 의 Controller 와 같은
//! 역할을 하며, 비즈니스 로직은 모두 서비스 계층에 위임합니다.
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//!   Handlers (이 모듈) - HTTP 엔드포인트 처리       ← Web Layer
//! ├─────────────────────────────────────────────┤
//!   Services - 로그인 오케스트레이션, 토큰 발급     ← Service Layer
//! ├─────────────────────────────────────────────┤
//!   Repositories - 회원 저장소                   ← Repository Layer
//! └─────────────────────────────────────────────┘
//! ```
//!
//! 핸들러는 `Result<HttpResponse, AppError>`를 반환하고, 에러는
//! `AppError::error_response()`가 `{"error", "message"}` JSON 으로 변환합니다.
//! 서비스는 `web::Data<T>`로 주입됩니다.
//!
//! ## 모듈 구성
//!
//! - **`auth`**: `POST /api/auth/{provider}/callback`
//! - **`members`**: `GET /api/members/me` (인증 필요)

pub mod auth;
pub mod members;

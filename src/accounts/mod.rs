/// 계정 관련 공통 기능 (경매, 네트워크 앱에서 공유)
/// 1. 회원 가입 / 로그인 / 로그아웃
/// 2. 세션 쿠키 기반 사용자 추출
pub mod commands;
pub mod handlers;
pub mod model;
pub mod password;
pub mod queries;
pub mod session;

use crate::database::DatabaseManager;
use axum::routing::get;
use axum::Router;
use std::sync::Arc;

/// 계정 라우터 (`/login`, `/logout`, `/register`)
pub fn routes() -> Router<Arc<DatabaseManager>> {
    Router::new()
        .route(
            "/login",
            get(handlers::handle_login_form).post(handlers::handle_login),
        )
        .route("/logout", get(handlers::handle_logout))
        .route(
            "/register",
            get(handlers::handle_register_form).post(handlers::handle_register),
        )
}

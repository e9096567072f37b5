/// 소셜 네트워크 앱
/// 게시글, 팔로우, 좋아요
pub mod commands;
pub mod handlers;
pub mod model;
pub mod queries;
pub mod query;

use crate::accounts;
use crate::database::DatabaseManager;
use axum::routing::get;
use axum::Router;
use std::sync::Arc;

/// 네트워크 앱 라우터
pub fn router(db_manager: Arc<DatabaseManager>) -> Router {
    Router::new()
        // API
        .route(
            "/profile/:username/follow",
            get(handlers::handle_get_follow).put(handlers::handle_put_follow),
        )
        .route(
            "/posts/edit/:id",
            get(handlers::handle_get_edit).post(handlers::handle_post_edit),
        )
        .route(
            "/posts/like/:id",
            get(handlers::handle_get_like).put(handlers::handle_put_like),
        )
        // 페이지
        .route("/", get(handlers::handle_index))
        .route(
            "/new",
            get(handlers::handle_new_post_form).post(handlers::handle_new_post),
        )
        .route("/profile/:username", get(handlers::handle_profile))
        .route("/following", get(handlers::handle_following))
        .merge(accounts::routes())
        .with_state(db_manager)
}

/// 경매 앱
/// 상품 등록, 입찰, 마감, 댓글, 관심 목록
pub mod commands;
pub mod handlers;
pub mod model;
pub mod money;
pub mod queries;
pub mod query;

use crate::accounts;
use crate::database::DatabaseManager;
use axum::routing::get;
use axum::Router;
use std::sync::Arc;

/// 경매 앱 라우터
pub fn router(db_manager: Arc<DatabaseManager>) -> Router {
    Router::new()
        .route("/", get(handlers::handle_index))
        .route(
            "/create",
            get(handlers::handle_create_form).post(handlers::handle_create),
        )
        .route(
            "/listing/:id",
            get(handlers::handle_get_listing).post(handlers::handle_post_listing),
        )
        .route("/profile", get(handlers::handle_profile))
        .route(
            "/watchlist",
            get(handlers::handle_get_watchlist).post(handlers::handle_post_watchlist),
        )
        .route(
            "/comment/:id",
            get(handlers::handle_get_comment).post(handlers::handle_post_comment),
        )
        .merge(accounts::routes())
        .with_state(db_manager)
}

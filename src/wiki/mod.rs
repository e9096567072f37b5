/// 위키 앱
/// 마크다운 파일 기반 백과사전
pub mod handlers;
pub mod markdown;
pub mod store;

use axum::routing::get;
use axum::Router;
use std::sync::Arc;
use store::EntryStore;

/// 위키 앱 라우터
pub fn router(store: Arc<EntryStore>) -> Router {
    Router::new()
        .route("/", get(handlers::handle_index))
        .route("/wiki/:title", get(handlers::handle_contents))
        .route("/search", get(handlers::handle_search))
        .route(
            "/create",
            get(handlers::handle_create_form).post(handlers::handle_create),
        )
        .route(
            "/edit/:title",
            get(handlers::handle_edit_form).post(handlers::handle_edit),
        )
        .route("/random", get(handlers::handle_random))
        .with_state(store)
}

// region:    --- Imports
use super::commands;
use super::model::{EditPostBody, NewPostForm, PostSummary};
use super::query;
use crate::accounts::model::User;
use crate::accounts::session::{CurrentUser, MaybeUser};
use crate::database::DatabaseManager;
use crate::error::{AppError, AppResult};
use axum::body::Bytes;
use axum::extract::{Path, State};
use axum::response::Redirect;
use axum::{Form, Json};
use serde_json::json;
use std::sync::Arc;
use tracing::info;

// endregion: --- Imports

async fn find_profile(db_manager: &DatabaseManager, username: &str) -> AppResult<User> {
    query::get_user_by_username(db_manager, username)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("User '{username}' does not exist.")))
}

// region:    --- Page Handlers

/// 전체 게시글
pub async fn handle_index(
    State(db_manager): State<Arc<DatabaseManager>>,
) -> AppResult<Json<serde_json::Value>> {
    let posts = query::get_all_posts(&db_manager).await?;
    Ok(Json(json!({ "posts": posts })))
}

/// 새 게시글 폼
pub async fn handle_new_post_form(CurrentUser(_): CurrentUser) -> Json<serde_json::Value> {
    Json(json!({ "message": null }))
}

/// 새 게시글 작성
pub async fn handle_new_post(
    State(db_manager): State<Arc<DatabaseManager>>,
    CurrentUser(user): CurrentUser,
    Form(form): Form<NewPostForm>,
) -> AppResult<Redirect> {
    commands::create_post(&db_manager, &user, form).await?;
    Ok(Redirect::to("/"))
}

/// 사용자 프로필
pub async fn handle_profile(
    State(db_manager): State<Arc<DatabaseManager>>,
    Path(username): Path<String>,
) -> AppResult<Json<serde_json::Value>> {
    info!("{:<12} --> 프로필 조회: {}", "Handler", username);
    let profile = find_profile(&db_manager, &username).await?;
    let posts = query::get_user_posts(&db_manager, profile.id).await?;
    Ok(Json(json!({ "profile": profile, "posts": posts })))
}

/// 팔로우 중인 사용자들의 게시글
pub async fn handle_following(
    State(db_manager): State<Arc<DatabaseManager>>,
    CurrentUser(user): CurrentUser,
) -> AppResult<Json<serde_json::Value>> {
    let posts = query::get_following_posts(&db_manager, user.id).await?;
    Ok(Json(json!({ "posts": posts })))
}

// endregion: --- Page Handlers

// region:    --- API Handlers

/// 팔로잉/팔로워 목록과 팔로우 여부
pub async fn handle_get_follow(
    State(db_manager): State<Arc<DatabaseManager>>,
    MaybeUser(user): MaybeUser,
    Path(username): Path<String>,
) -> AppResult<Json<serde_json::Value>> {
    let profile = find_profile(&db_manager, &username).await?;
    let following = query::get_following_ids(&db_manager, profile.id).await?;
    let followers = query::get_follower_ids(&db_manager, profile.id).await?;

    match user {
        Some(user) if user.id != profile.id => {
            let is_following = query::is_following(&db_manager, user.id, profile.id).await?;
            Ok(Json(json!({
                "following": following,
                "followers": followers,
                "is_following": is_following,
                "user_logged_in": true,
            })))
        }
        _ => Ok(Json(json!({
            "following": following,
            "followers": followers,
            "user_logged_in": false,
        }))),
    }
}

/// 팔로우 토글
pub async fn handle_put_follow(
    State(db_manager): State<Arc<DatabaseManager>>,
    MaybeUser(user): MaybeUser,
    Path(username): Path<String>,
) -> AppResult<Json<serde_json::Value>> {
    let user =
        user.ok_or_else(|| AppError::Forbidden("You must log in to follow a user!".into()))?;
    let profile = find_profile(&db_manager, &username).await?;
    let is_following = commands::toggle_follow(&db_manager, &user, &profile).await?;
    Ok(Json(json!({ "is_following": is_following })))
}

/// 수정 폼 채우기용 게시글 조회 (작성자만)
pub async fn handle_get_edit(
    State(db_manager): State<Arc<DatabaseManager>>,
    MaybeUser(user): MaybeUser,
    Path(post_id): Path<i64>,
) -> AppResult<Json<PostSummary>> {
    let post = query::get_post(&db_manager, post_id)
        .await?
        .ok_or_else(|| AppError::NotFound(commands::POST_NOT_FOUND.into()))?;
    match user {
        Some(user) if user.id == post.user_id => Ok(Json(PostSummary::from(&post))),
        _ => Err(AppError::Forbidden(commands::NOT_AUTHORISED.into())),
    }
}

/// 게시글 수정
///
/// 페이지 스크립트는 Content-Type 없이 JSON 을 보내므로 본문을 직접 파싱한다.
pub async fn handle_post_edit(
    State(db_manager): State<Arc<DatabaseManager>>,
    MaybeUser(user): MaybeUser,
    Path(post_id): Path<i64>,
    body: Bytes,
) -> AppResult<Json<serde_json::Value>> {
    let user = user.ok_or_else(|| AppError::Forbidden(commands::NOT_AUTHORISED.into()))?;
    let body: EditPostBody = serde_json::from_slice(&body)
        .map_err(|e| AppError::BadRequest(format!("Malformed payload: {e}")))?;
    let post = commands::edit_post(&db_manager, &user, post_id, body).await?;
    Ok(Json(json!({
        "success": true,
        "post": PostSummary::from(&post),
    })))
}

/// 좋아요 수, 좋아요 여부, 좋아요 누른 사용자
pub async fn handle_get_like(
    State(db_manager): State<Arc<DatabaseManager>>,
    MaybeUser(user): MaybeUser,
    Path(post_id): Path<i64>,
) -> AppResult<Json<serde_json::Value>> {
    query::get_post(&db_manager, post_id)
        .await?
        .ok_or_else(|| AppError::NotFound(commands::POST_NOT_FOUND.into()))?;
    let liked_by = query::get_liked_by(&db_manager, post_id).await?;
    let is_liked = user.is_some_and(|u| liked_by.contains(&u.username));
    Ok(Json(json!({
        "like_count": liked_by.len(),
        "is_liked": is_liked,
        "liked_by": liked_by,
    })))
}

/// 좋아요 토글
pub async fn handle_put_like(
    State(db_manager): State<Arc<DatabaseManager>>,
    MaybeUser(user): MaybeUser,
    Path(post_id): Path<i64>,
) -> AppResult<Json<serde_json::Value>> {
    let user = user.ok_or_else(|| AppError::Forbidden("You must log in to like a post!".into()))?;
    let (post_liked, like_count) = commands::toggle_like(&db_manager, &user, post_id).await?;
    Ok(Json(json!({ "post_liked": post_liked, "like_count": like_count })))
}

// endregion: --- API Handlers

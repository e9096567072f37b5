/// 네트워크 관련 커맨드 처리
/// 1. 게시글 작성
/// 2. 게시글 수정
/// 3. 팔로우 토글
/// 4. 좋아요 토글
// region:    --- Imports
use super::model::{EditPostBody, NewPostForm, Post, POST_TITLE_MAX_LEN};
use super::queries;
use super::query;
use crate::accounts::model::User;
use crate::database::DatabaseManager;
use crate::error::{AppError, AppResult};
use chrono::Utc;
use tracing::info;

// endregion: --- Imports

pub const FIELDS_EMPTY: &str = "Fields cannot be empty!";
pub const POST_NOT_FOUND: &str = "Post does not exist.";
pub const NOT_AUTHORISED: &str = "You are not authorised for this action.";

fn post_not_found() -> AppError {
    AppError::NotFound(POST_NOT_FOUND.into())
}

/// 제목/내용 검증 (공백만 있는 값은 비어있는 것으로 본다)
fn validate_post(title: &str, contents: &str) -> Result<(String, String), &'static str> {
    let title = title.trim();
    if title.is_empty() || contents.trim().is_empty() {
        return Err(FIELDS_EMPTY);
    }
    if title.chars().count() > POST_TITLE_MAX_LEN {
        return Err("Title must be at most 128 characters.");
    }
    Ok((title.to_string(), contents.to_string()))
}

// region:    --- Commands
/// 1. 게시글 작성
pub async fn create_post(
    db_manager: &DatabaseManager,
    user: &User,
    form: NewPostForm,
) -> AppResult<i64> {
    let (title, contents) =
        validate_post(&form.title, &form.contents).map_err(|e| AppError::Invalid(e.into()))?;
    let user_id = user.id;
    let now = Utc::now();

    let post_id = db_manager
        .transaction(move |tx| {
            Box::pin(async move {
                sqlx::query_scalar::<_, i64>(queries::INSERT_POST)
                    .bind(user_id)
                    .bind(&title)
                    .bind(&contents)
                    .bind(now)
                    .fetch_one(&mut **tx)
                    .await
            })
        })
        .await?;

    info!("{:<12} --> 게시글 작성 id: {}", "Command", post_id);
    Ok(post_id)
}

/// 2. 게시글 수정 (작성자만)
pub async fn edit_post(
    db_manager: &DatabaseManager,
    user: &User,
    post_id: i64,
    body: EditPostBody,
) -> AppResult<Post> {
    let post = query::get_post(db_manager, post_id)
        .await?
        .ok_or_else(post_not_found)?;
    if post.user_id != user.id {
        return Err(AppError::Forbidden(NOT_AUTHORISED.into()));
    }

    let (title, contents) =
        validate_post(&body.title, &body.contents).map_err(|e| AppError::BadRequest(e.into()))?;

    sqlx::query(queries::UPDATE_POST)
        .bind(&title)
        .bind(&contents)
        .bind(Utc::now())
        .bind(post_id)
        .bind(user.id)
        .execute(db_manager.pool())
        .await?;

    info!("{:<12} --> 게시글 수정 id: {}", "Command", post_id);
    query::get_post(db_manager, post_id)
        .await?
        .ok_or_else(post_not_found)
}

/// 3. 팔로우 토글 (있으면 삭제, 없으면 생성) → 토글 후 팔로우 여부
pub async fn toggle_follow(
    db_manager: &DatabaseManager,
    user: &User,
    profile: &User,
) -> AppResult<bool> {
    if user.id == profile.id {
        return Err(AppError::BadRequest("You cannot follow yourself.".into()));
    }

    let mut tx = db_manager.pool().begin().await?;

    let removed = sqlx::query(queries::DELETE_FOLLOW)
        .bind(user.id)
        .bind(profile.id)
        .execute(&mut *tx)
        .await?
        .rows_affected()
        > 0;

    if !removed {
        sqlx::query(queries::INSERT_FOLLOW)
            .bind(user.id)
            .bind(profile.id)
            .execute(&mut *tx)
            .await?;
    }

    tx.commit().await?;
    info!(
        "{:<12} --> {} -> {} 팔로우: {}",
        "Command", user.username, profile.username, !removed
    );
    Ok(!removed)
}

/// 4. 좋아요 토글 → (토글 후 좋아요 여부, 좋아요 수)
pub async fn toggle_like(
    db_manager: &DatabaseManager,
    user: &User,
    post_id: i64,
) -> AppResult<(bool, i64)> {
    query::get_post(db_manager, post_id)
        .await?
        .ok_or_else(post_not_found)?;

    let mut tx = db_manager.pool().begin().await?;

    let removed = sqlx::query(queries::DELETE_LIKE)
        .bind(post_id)
        .bind(user.id)
        .execute(&mut *tx)
        .await?
        .rows_affected()
        > 0;

    if !removed {
        sqlx::query(queries::INSERT_LIKE)
            .bind(post_id)
            .bind(user.id)
            .bind(Utc::now())
            .execute(&mut *tx)
            .await?;
    }

    let like_count = sqlx::query_scalar::<_, i64>(queries::COUNT_LIKES)
        .bind(post_id)
        .fetch_one(&mut *tx)
        .await?;

    tx.commit().await?;
    info!(
        "{:<12} --> 좋아요 post: {}, liked: {}, count: {}",
        "Command", post_id, !removed, like_count
    );
    Ok((!removed, like_count))
}

// endregion: --- Commands

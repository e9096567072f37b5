// region:    --- Imports
use super::model::Post;
use super::queries;
use crate::accounts::model::User;
use crate::accounts::queries as account_queries;
use crate::database::DatabaseManager;
use sqlx::Error as SqlxError;
use tracing::info;

// endregion: --- Imports

// region:    --- Query Handlers

/// 전체 게시글 조회 (최신순)
pub async fn get_all_posts(db_manager: &DatabaseManager) -> Result<Vec<Post>, SqlxError> {
    info!("{:<12} --> 전체 게시글 조회", "Query");
    sqlx::query_as::<_, Post>(queries::GET_ALL_POSTS)
        .fetch_all(db_manager.pool())
        .await
}

/// 게시글 조회
pub async fn get_post(
    db_manager: &DatabaseManager,
    post_id: i64,
) -> Result<Option<Post>, SqlxError> {
    info!("{:<12} --> 게시글 조회 id: {}", "Query", post_id);
    sqlx::query_as::<_, Post>(queries::GET_POST)
        .bind(post_id)
        .fetch_optional(db_manager.pool())
        .await
}

/// 사용자 게시글 조회
pub async fn get_user_posts(
    db_manager: &DatabaseManager,
    user_id: i64,
) -> Result<Vec<Post>, SqlxError> {
    sqlx::query_as::<_, Post>(queries::GET_USER_POSTS)
        .bind(user_id)
        .fetch_all(db_manager.pool())
        .await
}

/// 팔로우 중인 사용자들의 게시글 조회
pub async fn get_following_posts(
    db_manager: &DatabaseManager,
    user_id: i64,
) -> Result<Vec<Post>, SqlxError> {
    info!("{:<12} --> 팔로잉 게시글 조회 user: {}", "Query", user_id);
    sqlx::query_as::<_, Post>(queries::GET_FOLLOWING_POSTS)
        .bind(user_id)
        .fetch_all(db_manager.pool())
        .await
}

/// 이름으로 사용자 조회
pub async fn get_user_by_username(
    db_manager: &DatabaseManager,
    username: &str,
) -> Result<Option<User>, SqlxError> {
    sqlx::query_as::<_, User>(account_queries::GET_USER_BY_USERNAME)
        .bind(username)
        .fetch_optional(db_manager.pool())
        .await
}

/// `profile` 이 팔로우 중인 사용자 id
pub async fn get_following_ids(
    db_manager: &DatabaseManager,
    profile_id: i64,
) -> Result<Vec<i64>, SqlxError> {
    sqlx::query_scalar::<_, i64>(queries::GET_FOLLOWING_IDS)
        .bind(profile_id)
        .fetch_all(db_manager.pool())
        .await
}

/// `profile` 을 팔로우 중인 사용자 id
pub async fn get_follower_ids(
    db_manager: &DatabaseManager,
    profile_id: i64,
) -> Result<Vec<i64>, SqlxError> {
    sqlx::query_scalar::<_, i64>(queries::GET_FOLLOWER_IDS)
        .bind(profile_id)
        .fetch_all(db_manager.pool())
        .await
}

/// 팔로우 여부
pub async fn is_following(
    db_manager: &DatabaseManager,
    user_id: i64,
    profile_id: i64,
) -> Result<bool, SqlxError> {
    sqlx::query_scalar::<_, bool>(queries::IS_FOLLOWING)
        .bind(user_id)
        .bind(profile_id)
        .fetch_one(db_manager.pool())
        .await
}

/// 좋아요 누른 사용자 이름
pub async fn get_liked_by(
    db_manager: &DatabaseManager,
    post_id: i64,
) -> Result<Vec<String>, SqlxError> {
    sqlx::query_scalar::<_, String>(queries::GET_LIKED_BY)
        .bind(post_id)
        .fetch_all(db_manager.pool())
        .await
}

// endregion: --- Query Handlers

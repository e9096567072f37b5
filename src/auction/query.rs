// region:    --- Imports
use super::model::{Bid, Comment, Listing};
use super::queries;
use crate::database::DatabaseManager;
use sqlx::Error as SqlxError;
use tracing::info;

// endregion: --- Imports

// region:    --- Query Handlers

/// 진행 중인 상품 조회
pub async fn get_active_listings(db_manager: &DatabaseManager) -> Result<Vec<Listing>, SqlxError> {
    info!("{:<12} --> 진행 중인 상품 조회", "Query");
    sqlx::query_as::<_, Listing>(queries::GET_ACTIVE_LISTINGS)
        .fetch_all(db_manager.pool())
        .await
}

/// 상품 조회
pub async fn get_listing(
    db_manager: &DatabaseManager,
    listing_id: i64,
) -> Result<Option<Listing>, SqlxError> {
    info!("{:<12} --> 상품 조회 id: {}", "Query", listing_id);
    sqlx::query_as::<_, Listing>(queries::GET_LISTING)
        .bind(listing_id)
        .fetch_optional(db_manager.pool())
        .await
}

/// 상품 입찰 이력 조회
pub async fn get_listing_bids(
    db_manager: &DatabaseManager,
    listing_id: i64,
) -> Result<Vec<Bid>, SqlxError> {
    info!("{:<12} --> 입찰 이력 조회 id: {}", "Query", listing_id);
    sqlx::query_as::<_, Bid>(queries::GET_LISTING_BIDS)
        .bind(listing_id)
        .fetch_all(db_manager.pool())
        .await
}

/// 상품 댓글 조회
pub async fn get_listing_comments(
    db_manager: &DatabaseManager,
    listing_id: i64,
) -> Result<Vec<Comment>, SqlxError> {
    sqlx::query_as::<_, Comment>(queries::GET_LISTING_COMMENTS)
        .bind(listing_id)
        .fetch_all(db_manager.pool())
        .await
}

/// 관심 등록 여부
pub async fn is_watching(
    db_manager: &DatabaseManager,
    user_id: i64,
    listing_id: i64,
) -> Result<bool, SqlxError> {
    sqlx::query_scalar::<_, bool>(queries::IS_WATCHING)
        .bind(user_id)
        .bind(listing_id)
        .fetch_one(db_manager.pool())
        .await
}

/// 사용자 기준 상품 목록 조회 (관심/낙찰/최고입찰/등록)
async fn get_user_listings(
    db_manager: &DatabaseManager,
    sql: &'static str,
    user_id: i64,
) -> Result<Vec<Listing>, SqlxError> {
    sqlx::query_as::<_, Listing>(sql)
        .bind(user_id)
        .fetch_all(db_manager.pool())
        .await
}

/// 관심 목록 조회
pub async fn get_watchlist(
    db_manager: &DatabaseManager,
    user_id: i64,
) -> Result<Vec<Listing>, SqlxError> {
    info!("{:<12} --> 관심 목록 조회 user: {}", "Query", user_id);
    get_user_listings(db_manager, queries::GET_WATCHLIST, user_id).await
}

/// 낙찰 받은 상품 조회
pub async fn get_won_listings(
    db_manager: &DatabaseManager,
    user_id: i64,
) -> Result<Vec<Listing>, SqlxError> {
    get_user_listings(db_manager, queries::GET_WON_LISTINGS, user_id).await
}

/// 최고 입찰 중인 상품 조회
pub async fn get_leading_listings(
    db_manager: &DatabaseManager,
    user_id: i64,
) -> Result<Vec<Listing>, SqlxError> {
    get_user_listings(db_manager, queries::GET_LEADING_LISTINGS, user_id).await
}

/// 등록한 상품 조회
pub async fn get_created_listings(
    db_manager: &DatabaseManager,
    user_id: i64,
) -> Result<Vec<Listing>, SqlxError> {
    get_user_listings(db_manager, queries::GET_CREATED_LISTINGS, user_id).await
}

/// 사용자 입찰 이력 조회
pub async fn get_user_bids(
    db_manager: &DatabaseManager,
    user_id: i64,
) -> Result<Vec<Bid>, SqlxError> {
    sqlx::query_as::<_, Bid>(queries::GET_USER_BIDS)
        .bind(user_id)
        .fetch_all(db_manager.pool())
        .await
}

// endregion: --- Query Handlers

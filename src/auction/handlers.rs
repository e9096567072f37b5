// region:    --- Imports
use super::commands;
use super::model::{
    CommentForm, CreateListingForm, ListingActionForm, WatchlistForm, CATEGORIES,
};
use super::query;
use crate::accounts::session::{CurrentUser, MaybeUser};
use crate::database::DatabaseManager;
use crate::error::{AppError, AppResult};
use axum::extract::{Path, State};
use axum::response::{IntoResponse, Redirect, Response};
use axum::{Form, Json};
use serde_json::json;
use std::sync::Arc;
use tracing::info;

// endregion: --- Imports

// region:    --- Query Handlers

/// 진행 중인 상품 목록
pub async fn handle_index(
    State(db_manager): State<Arc<DatabaseManager>>,
) -> AppResult<Json<serde_json::Value>> {
    info!("{:<12} --> 진행 중인 상품 목록", "Handler");
    let active_listings = query::get_active_listings(&db_manager).await?;
    Ok(Json(json!({ "active_listings": active_listings })))
}

/// 상품 상세
pub async fn handle_get_listing(
    State(db_manager): State<Arc<DatabaseManager>>,
    MaybeUser(user): MaybeUser,
    Path(listing_id): Path<i64>,
) -> AppResult<Json<serde_json::Value>> {
    info!("{:<12} --> 상품 상세 id: {}", "Handler", listing_id);
    let listing = query::get_listing(&db_manager, listing_id)
        .await?
        .ok_or_else(|| AppError::NotFound(commands::LISTING_NOT_FOUND.into()))?;
    let bids = query::get_listing_bids(&db_manager, listing_id).await?;
    let comments = query::get_listing_comments(&db_manager, listing_id).await?;

    let user_id = user.as_ref().map(|u| u.id);
    let is_watching = match user_id {
        Some(id) => query::is_watching(&db_manager, id, listing_id).await?,
        None => false,
    };
    let is_creator = user_id == Some(listing.creator_id);
    let is_winner = listing.is_closed && user_id.is_some() && listing.winner_id == user_id;
    let min_bid = listing.current_price;

    Ok(Json(json!({
        "listing": listing,
        "bids": bids,
        "comments": comments,
        "is_creator": is_creator,
        "is_watching": is_watching,
        "is_winner": is_winner,
        "min_bid": min_bid,
    })))
}

/// 관심 목록
pub async fn handle_get_watchlist(
    State(db_manager): State<Arc<DatabaseManager>>,
    CurrentUser(user): CurrentUser,
) -> AppResult<Json<serde_json::Value>> {
    let watchlist = query::get_watchlist(&db_manager, user.id).await?;
    Ok(Json(json!({ "watchlist": watchlist })))
}

/// 사용자 프로필 (낙찰, 최고 입찰, 등록 상품, 입찰 이력)
pub async fn handle_profile(
    State(db_manager): State<Arc<DatabaseManager>>,
    CurrentUser(user): CurrentUser,
) -> AppResult<Json<serde_json::Value>> {
    info!("{:<12} --> 프로필 조회: {}", "Handler", user.username);
    let wins = query::get_won_listings(&db_manager, user.id).await?;
    let leading = query::get_leading_listings(&db_manager, user.id).await?;
    let created = query::get_created_listings(&db_manager, user.id).await?;
    let bids = query::get_user_bids(&db_manager, user.id).await?;
    Ok(Json(json!({
        "user": user,
        "wins": wins,
        "leading_bids": leading,
        "created_listings": created,
        "bids": bids,
    })))
}

/// 상품 등록 폼
pub async fn handle_create_form(CurrentUser(_): CurrentUser) -> Json<serde_json::Value> {
    let categories: Vec<_> = CATEGORIES
        .iter()
        .map(|(value, label)| json!({ "value": value, "label": label }))
        .collect();
    Json(json!({ "categories": categories }))
}

// endregion: --- Query Handlers

// region:    --- Command Handlers

/// 상품 등록
pub async fn handle_create(
    State(db_manager): State<Arc<DatabaseManager>>,
    CurrentUser(user): CurrentUser,
    Form(form): Form<CreateListingForm>,
) -> AppResult<Redirect> {
    commands::create_listing(&db_manager, &user, form).await?;
    Ok(Redirect::to("/"))
}

/// 상품 페이지 POST: 작성자는 마감, 그 외 사용자는 입찰
pub async fn handle_post_listing(
    State(db_manager): State<Arc<DatabaseManager>>,
    MaybeUser(user): MaybeUser,
    Path(listing_id): Path<i64>,
    Form(form): Form<ListingActionForm>,
) -> AppResult<Redirect> {
    let user = user.ok_or(AppError::LoginRequired)?;
    let listing = query::get_listing(&db_manager, listing_id)
        .await?
        .ok_or_else(|| AppError::NotFound(commands::LISTING_NOT_FOUND.into()))?;

    if listing.creator_id == user.id {
        commands::close_listing(&db_manager, &user, listing_id).await?;
    } else {
        commands::place_bid(&db_manager, &user, listing_id, &form.price).await?;
    }
    Ok(Redirect::to("/"))
}

/// 댓글 작성 (결과와 무관하게 상품 페이지로)
pub async fn handle_post_comment(
    State(db_manager): State<Arc<DatabaseManager>>,
    CurrentUser(user): CurrentUser,
    Path(listing_id): Path<i64>,
    Form(form): Form<CommentForm>,
) -> AppResult<Redirect> {
    commands::add_comment(&db_manager, &user, listing_id, form).await?;
    Ok(Redirect::to(&format!("/listing/{listing_id}")))
}

/// 폼 외의 댓글 요청은 홈으로
pub async fn handle_get_comment() -> Response {
    Redirect::to("/").into_response()
}

/// 관심 목록 추가/제거
pub async fn handle_post_watchlist(
    State(db_manager): State<Arc<DatabaseManager>>,
    CurrentUser(user): CurrentUser,
    Form(form): Form<WatchlistForm>,
) -> AppResult<Redirect> {
    commands::update_watchlist(&db_manager, &user, &form).await?;
    Ok(Redirect::to(&format!("/listing/{}", form.listing_id)))
}

// endregion: --- Command Handlers

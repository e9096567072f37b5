/// 경매 관련 커맨드 처리
/// 1. 상품 등록
/// 2. 입찰
/// 3. 경매 마감
/// 4. 댓글
/// 5. 관심 목록
// region:    --- Imports
use super::model::{
    CommentForm, CreateListingForm, Listing, WatchlistForm, CATEGORIES, COMMENT_MAX_LEN,
    DESCRIPTION_MAX_LEN, TITLE_MAX_LEN,
};
use super::money::{Money, MoneyError};
use super::queries;
use super::query;
use crate::accounts::model::User;
use crate::database::DatabaseManager;
use crate::error::{AppError, AppResult};
use chrono::Utc;
use tracing::{info, warn};

// endregion: --- Imports

pub const BID_TOO_LOW: &str = "Enter a bid higher than the current price.";
pub const LISTING_CLOSED: &str = "This listing is closed.";
pub const LISTING_NOT_FOUND: &str = "Listing not found.";

fn listing_not_found() -> AppError {
    AppError::NotFound(LISTING_NOT_FOUND.into())
}

/// 조건부 갱신에 실패한 입찰의 에러 (다시 읽은 상품 상태 기준)
fn stale_bid_error(listing: Option<&Listing>) -> AppError {
    match listing {
        None => listing_not_found(),
        Some(listing) if listing.is_closed => AppError::Invalid(LISTING_CLOSED.into()),
        Some(_) => AppError::Invalid(BID_TOO_LOW.into()),
    }
}

// region:    --- Validation
/// 검증된 상품 등록 입력
#[derive(Debug)]
pub struct NewListing {
    pub title: String,
    pub description: String,
    pub starting_bid: Money,
    pub image_url: String,
    pub category: String,
}

fn required(value: &str, field: &str, max_len: usize) -> AppResult<String> {
    let value = value.trim();
    if value.is_empty() {
        return Err(AppError::Invalid(format!("{field} cannot be empty.")));
    }
    if value.chars().count() > max_len {
        return Err(AppError::Invalid(format!(
            "{field} must be at most {max_len} characters."
        )));
    }
    Ok(value.to_string())
}

/// 상품 등록 폼 검증
pub fn validate_listing(form: CreateListingForm) -> AppResult<NewListing> {
    let title = required(&form.title, "Title", TITLE_MAX_LEN)?;
    let description = required(&form.description, "Description", DESCRIPTION_MAX_LEN)?;
    let starting_bid: Money = form
        .starting_bid
        .parse()
        .map_err(|e: MoneyError| AppError::Invalid(e.to_string()))?;

    let image_url = form.image_url.trim().to_string();
    let valid_scheme = image_url.starts_with("http://") || image_url.starts_with("https://");
    if !image_url.is_empty() && (!valid_scheme || image_url.contains(char::is_whitespace)) {
        return Err(AppError::Invalid("Enter a valid URL.".into()));
    }

    let category = form.category.trim().to_string();
    if !CATEGORIES.iter().any(|(value, _)| *value == category) {
        return Err(AppError::Invalid("Select a valid category.".into()));
    }

    Ok(NewListing {
        title,
        description,
        starting_bid,
        image_url,
        category,
    })
}
// endregion: --- Validation

// region:    --- Commands
/// 1. 상품 등록 (current_price = starting_bid)
pub async fn create_listing(
    db_manager: &DatabaseManager,
    creator: &User,
    form: CreateListingForm,
) -> AppResult<i64> {
    info!("{:<12} --> 상품 등록 요청: {:?}", "Command", form);
    let listing = validate_listing(form)?;
    let creator_id = creator.id;
    let now = Utc::now();

    let listing_id = db_manager
        .transaction(move |tx| {
            Box::pin(async move {
                sqlx::query_scalar::<_, i64>(queries::INSERT_LISTING)
                    .bind(creator_id)
                    .bind(&listing.title)
                    .bind(&listing.description)
                    .bind(listing.starting_bid)
                    .bind(&listing.image_url)
                    .bind(&listing.category)
                    .bind(now)
                    .fetch_one(&mut **tx)
                    .await
            })
        })
        .await?;

    info!("{:<12} --> 상품 등록 완료 id: {}", "Command", listing_id);
    Ok(listing_id)
}

/// 2. 입찰
///
/// 가격 비교와 갱신은 하나의 조건부 UPDATE 로 처리되어, 같은 가격을 읽은
/// 동시 입찰 중 하나만 반영된다.
pub async fn place_bid(
    db_manager: &DatabaseManager,
    bidder: &User,
    listing_id: i64,
    price: &str,
) -> AppResult<Money> {
    info!(
        "{:<12} --> 입찰 요청 listing: {}, bidder: {}, price: {}",
        "Command", listing_id, bidder.username, price
    );
    let price: Money = price
        .parse()
        .map_err(|e: MoneyError| AppError::Invalid(e.to_string()))?;

    let listing = query::get_listing(db_manager, listing_id)
        .await?
        .ok_or_else(listing_not_found)?;

    if listing.creator_id == bidder.id {
        return Err(AppError::Forbidden(
            "You cannot bid on your own listing.".into(),
        ));
    }
    if listing.is_closed {
        return Err(AppError::Invalid(LISTING_CLOSED.into()));
    }
    if price <= listing.current_price {
        warn!(
            "{:<12} --> 입찰 금액이 현재 가격보다 낮음: {} <= {}",
            "Command", price, listing.current_price
        );
        return Err(AppError::Invalid(BID_TOO_LOW.into()));
    }

    // 트랜잭션 시작
    let mut tx = db_manager.pool().begin().await?;
    let now = Utc::now();

    let raised = sqlx::query_scalar::<_, Money>(queries::RAISE_CURRENT_PRICE)
        .bind(price)
        .bind(bidder.id)
        .bind(now)
        .bind(listing_id)
        .fetch_optional(&mut *tx)
        .await?;

    let Some(current_price) = raised else {
        tx.rollback().await?;
        // 사전 조회 이후 다른 입찰이 반영됐거나 경매가 마감됨
        let listing = query::get_listing(db_manager, listing_id).await?;
        warn!(
            "{:<12} --> 입찰 실패: 조건부 갱신 불일치 listing: {}",
            "Command", listing_id
        );
        return Err(stale_bid_error(listing.as_ref()));
    };

    sqlx::query(queries::INSERT_BID)
        .bind(bidder.id)
        .bind(listing_id)
        .bind(price)
        .bind(now)
        .execute(&mut *tx)
        .await?;

    tx.commit().await?;
    info!("{:<12} --> 입찰 성공: 현재 가격 {}", "Command", current_price);
    Ok(current_price)
}

/// 3. 경매 마감 (작성자만, 되돌릴 수 없음)
pub async fn close_listing(
    db_manager: &DatabaseManager,
    user: &User,
    listing_id: i64,
) -> AppResult<()> {
    info!("{:<12} --> 경매 마감 요청 id: {}", "Command", listing_id);
    let listing = query::get_listing(db_manager, listing_id)
        .await?
        .ok_or_else(listing_not_found)?;

    if listing.creator_id != user.id {
        return Err(AppError::Forbidden(
            "Only the creator can close this listing.".into(),
        ));
    }

    let mut tx = db_manager.pool().begin().await?;

    let closed = sqlx::query_scalar::<_, i64>(queries::CLOSE_LISTING)
        .bind(Utc::now())
        .bind(listing_id)
        .bind(user.id)
        .fetch_optional(&mut *tx)
        .await?;

    if closed.is_none() {
        tx.rollback().await?;
        return Err(AppError::Invalid("This listing is already closed.".into()));
    }

    sqlx::query(queries::CLEAR_WATCHERS)
        .bind(listing_id)
        .execute(&mut *tx)
        .await?;

    tx.commit().await?;
    info!(
        "{:<12} --> 경매 마감 완료 id: {}, winner: {:?}",
        "Command", listing_id, listing.current_bidder_id
    );
    Ok(())
}

/// 4. 댓글 (유효하지 않은 댓글은 무시하고 false)
pub async fn add_comment(
    db_manager: &DatabaseManager,
    user: &User,
    listing_id: i64,
    form: CommentForm,
) -> AppResult<bool> {
    query::get_listing(db_manager, listing_id)
        .await?
        .ok_or_else(listing_not_found)?;

    let comment = form.comment.trim();
    if comment.is_empty() || comment.chars().count() > COMMENT_MAX_LEN {
        warn!("{:<12} --> 유효하지 않은 댓글 무시", "Command");
        return Ok(false);
    }

    sqlx::query(queries::INSERT_COMMENT)
        .bind(user.id)
        .bind(listing_id)
        .bind(comment)
        .bind(Utc::now())
        .execute(db_manager.pool())
        .await?;
    Ok(true)
}

/// 5. 관심 목록 추가/제거
pub async fn update_watchlist(
    db_manager: &DatabaseManager,
    user: &User,
    form: &WatchlistForm,
) -> AppResult<()> {
    let listing = query::get_listing(db_manager, form.listing_id)
        .await?
        .ok_or_else(listing_not_found)?;

    let sql = match form.watchlist.as_str() {
        "add" if listing.is_closed => return Err(AppError::Invalid(LISTING_CLOSED.into())),
        "add" => queries::ADD_WATCHER,
        "remove" => queries::REMOVE_WATCHER,
        _ => return Err(AppError::Invalid("Unknown watchlist action.".into())),
    };

    sqlx::query(sql)
        .bind(user.id)
        .bind(listing.id)
        .execute(db_manager.pool())
        .await?;
    info!(
        "{:<12} --> 관심 목록 {} listing: {}",
        "Command", form.watchlist, listing.id
    );
    Ok(())
}

// endregion: --- Commands

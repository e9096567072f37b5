use super::money::Money;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// 카테고리 (값, 라벨)
pub const CATEGORIES: [(&str, &str); 6] = [
    ("fashion", "Fashion"),
    ("toys", "Toys and Games"),
    ("home_appliances", "Home Appliances"),
    ("electronics", "Electronics"),
    ("food", "Food"),
    ("others", "Others"),
];

pub const TITLE_MAX_LEN: usize = 32;
pub const DESCRIPTION_MAX_LEN: usize = 128;
pub const COMMENT_MAX_LEN: usize = 200;

// 경매 상품 모델
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct Listing {
    pub id: i64,
    pub creator_id: i64,
    pub creator: String,
    pub title: String,
    pub description: String,
    pub starting_bid: Money,
    pub current_price: Money,
    pub current_bidder_id: Option<i64>,
    pub is_closed: bool,
    pub winner_id: Option<i64>,
    pub image_url: String,
    pub category: String,
    pub created: DateTime<Utc>,
    pub updated: DateTime<Utc>,
}

// 입찰 모델
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct Bid {
    pub id: i64,
    pub bidder_id: i64,
    pub bidder: String,
    pub listing_id: i64,
    pub price: Money,
    pub created: DateTime<Utc>,
}

// 댓글 모델
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct Comment {
    pub id: i64,
    pub commentor_id: i64,
    pub commentor: String,
    pub listing_id: i64,
    pub comment: String,
    pub created: DateTime<Utc>,
}

// 상품 등록 폼
#[derive(Debug, Deserialize)]
pub struct CreateListingForm {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub starting_bid: String,
    #[serde(default)]
    pub image_url: String,
    #[serde(default)]
    pub category: String,
}

// 상품 페이지 POST 폼 (작성자는 마감, 그 외는 입찰)
#[derive(Debug, Default, Deserialize)]
pub struct ListingActionForm {
    #[serde(default)]
    pub price: String,
}

// 댓글 폼
#[derive(Debug, Deserialize)]
pub struct CommentForm {
    #[serde(default)]
    pub comment: String,
}

// 관심 목록 폼
#[derive(Debug, Deserialize)]
pub struct WatchlistForm {
    pub listing_id: i64,
    #[serde(default)]
    pub watchlist: String,
}

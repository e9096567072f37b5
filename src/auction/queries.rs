/// 진행 중인 상품 조회
pub const GET_ACTIVE_LISTINGS: &str = r#"
    SELECT l.id, l.creator_id, u.username AS creator, l.title, l.description, l.starting_bid,
           l.current_price, l.current_bidder_id, l.is_closed, l.winner_id, l.image_url,
           l.category, l.created, l.updated
    FROM listings l
    JOIN users u ON u.id = l.creator_id
    WHERE l.is_closed = 0
    ORDER BY l.id DESC
"#;

/// 상품 조회
pub const GET_LISTING: &str = r#"
    SELECT l.id, l.creator_id, u.username AS creator, l.title, l.description, l.starting_bid,
           l.current_price, l.current_bidder_id, l.is_closed, l.winner_id, l.image_url,
           l.category, l.created, l.updated
    FROM listings l
    JOIN users u ON u.id = l.creator_id
    WHERE l.id = ?1
"#;

/// 관심 목록 조회
pub const GET_WATCHLIST: &str = r#"
    SELECT l.id, l.creator_id, u.username AS creator, l.title, l.description, l.starting_bid,
           l.current_price, l.current_bidder_id, l.is_closed, l.winner_id, l.image_url,
           l.category, l.created, l.updated
    FROM watchers w
    JOIN listings l ON l.id = w.listing_id
    JOIN users u ON u.id = l.creator_id
    WHERE w.user_id = ?1
    ORDER BY l.id DESC
"#;

/// 낙찰 받은 상품 조회
pub const GET_WON_LISTINGS: &str = r#"
    SELECT l.id, l.creator_id, u.username AS creator, l.title, l.description, l.starting_bid,
           l.current_price, l.current_bidder_id, l.is_closed, l.winner_id, l.image_url,
           l.category, l.created, l.updated
    FROM listings l
    JOIN users u ON u.id = l.creator_id
    WHERE l.winner_id = ?1
    ORDER BY l.id DESC
"#;

/// 최고 입찰 중인 상품 조회
pub const GET_LEADING_LISTINGS: &str = r#"
    SELECT l.id, l.creator_id, u.username AS creator, l.title, l.description, l.starting_bid,
           l.current_price, l.current_bidder_id, l.is_closed, l.winner_id, l.image_url,
           l.category, l.created, l.updated
    FROM listings l
    JOIN users u ON u.id = l.creator_id
    WHERE l.current_bidder_id = ?1
    ORDER BY l.id DESC
"#;

/// 등록한 상품 조회
pub const GET_CREATED_LISTINGS: &str = r#"
    SELECT l.id, l.creator_id, u.username AS creator, l.title, l.description, l.starting_bid,
           l.current_price, l.current_bidder_id, l.is_closed, l.winner_id, l.image_url,
           l.category, l.created, l.updated
    FROM listings l
    JOIN users u ON u.id = l.creator_id
    WHERE l.creator_id = ?1
    ORDER BY l.id DESC
"#;

/// 상품 입찰 이력 조회
pub const GET_LISTING_BIDS: &str = r#"
    SELECT b.id, b.bidder_id, u.username AS bidder, b.listing_id, b.price, b.created
    FROM bids b
    JOIN users u ON u.id = b.bidder_id
    WHERE b.listing_id = ?1
    ORDER BY b.id DESC
"#;

/// 사용자 입찰 이력 조회
pub const GET_USER_BIDS: &str = r#"
    SELECT b.id, b.bidder_id, u.username AS bidder, b.listing_id, b.price, b.created
    FROM bids b
    JOIN users u ON u.id = b.bidder_id
    WHERE b.bidder_id = ?1
    ORDER BY b.id DESC
"#;

/// 상품 댓글 조회
pub const GET_LISTING_COMMENTS: &str = r#"
    SELECT c.id, c.commentor_id, u.username AS commentor, c.listing_id, c.comment, c.created
    FROM comments c
    JOIN users u ON u.id = c.commentor_id
    WHERE c.listing_id = ?1
    ORDER BY c.id ASC
"#;

/// 관심 등록 여부 조회
pub const IS_WATCHING: &str =
    "SELECT EXISTS (SELECT 1 FROM watchers WHERE user_id = ?1 AND listing_id = ?2)";

/// 상품 등록
pub const INSERT_LISTING: &str = r#"
    INSERT INTO listings (creator_id, title, description, starting_bid, current_price,
                          image_url, category, created, updated)
    VALUES (?1, ?2, ?3, ?4, ?4, ?5, ?6, ?7, ?7)
    RETURNING id
"#;

/// 현재 가격보다 높을 때만 가격 갱신
pub const RAISE_CURRENT_PRICE: &str = r#"
    UPDATE listings
    SET current_price = ?1, current_bidder_id = ?2, updated = ?3
    WHERE id = ?4 AND is_closed = 0 AND creator_id != ?2 AND current_price < ?1
    RETURNING current_price
"#;

/// 입찰 기록 추가
pub const INSERT_BID: &str =
    "INSERT INTO bids (bidder_id, listing_id, price, created) VALUES (?1, ?2, ?3, ?4)";

/// 경매 마감 (winner <- current_bidder)
pub const CLOSE_LISTING: &str = r#"
    UPDATE listings
    SET is_closed = 1, winner_id = current_bidder_id, current_bidder_id = NULL, updated = ?1
    WHERE id = ?2 AND creator_id = ?3 AND is_closed = 0
    RETURNING id
"#;

/// 마감된 상품을 관심 목록에서 제거
pub const CLEAR_WATCHERS: &str = "DELETE FROM watchers WHERE listing_id = ?1";

/// 관심 목록 추가
pub const ADD_WATCHER: &str =
    "INSERT INTO watchers (user_id, listing_id) VALUES (?1, ?2) ON CONFLICT DO NOTHING";

/// 관심 목록 제거
pub const REMOVE_WATCHER: &str = "DELETE FROM watchers WHERE user_id = ?1 AND listing_id = ?2";

/// 댓글 추가
pub const INSERT_COMMENT: &str =
    "INSERT INTO comments (commentor_id, listing_id, comment, created) VALUES (?1, ?2, ?3, ?4)";

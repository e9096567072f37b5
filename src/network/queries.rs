/// 전체 게시글 조회
pub const GET_ALL_POSTS: &str = r#"
    SELECT p.id, p.user_id, u.username, p.title, p.contents, p.created, p.modified
    FROM posts p
    JOIN users u ON u.id = p.user_id
    ORDER BY p.id DESC
"#;

/// 게시글 조회
pub const GET_POST: &str = r#"
    SELECT p.id, p.user_id, u.username, p.title, p.contents, p.created, p.modified
    FROM posts p
    JOIN users u ON u.id = p.user_id
    WHERE p.id = ?1
"#;

/// 사용자 게시글 조회
pub const GET_USER_POSTS: &str = r#"
    SELECT p.id, p.user_id, u.username, p.title, p.contents, p.created, p.modified
    FROM posts p
    JOIN users u ON u.id = p.user_id
    WHERE p.user_id = ?1
    ORDER BY p.id DESC
"#;

/// 팔로우 중인 사용자들의 게시글 조회
pub const GET_FOLLOWING_POSTS: &str = r#"
    SELECT p.id, p.user_id, u.username, p.title, p.contents, p.created, p.modified
    FROM posts p
    JOIN users u ON u.id = p.user_id
    WHERE p.user_id IN (SELECT profile_id FROM follows WHERE user_id = ?1)
    ORDER BY p.id DESC
"#;

/// 게시글 작성
pub const INSERT_POST: &str = r#"
    INSERT INTO posts (user_id, title, contents, created, modified)
    VALUES (?1, ?2, ?3, ?4, ?4)
    RETURNING id
"#;

/// 게시글 수정
pub const UPDATE_POST: &str =
    "UPDATE posts SET title = ?1, contents = ?2, modified = ?3 WHERE id = ?4 AND user_id = ?5";

/// 팔로우 중인 사용자 id
pub const GET_FOLLOWING_IDS: &str =
    "SELECT profile_id FROM follows WHERE user_id = ?1 ORDER BY rowid";

/// 팔로워 id
pub const GET_FOLLOWER_IDS: &str =
    "SELECT user_id FROM follows WHERE profile_id = ?1 ORDER BY rowid";

/// 팔로우 여부
pub const IS_FOLLOWING: &str =
    "SELECT EXISTS (SELECT 1 FROM follows WHERE user_id = ?1 AND profile_id = ?2)";

/// 언팔로우
pub const DELETE_FOLLOW: &str = "DELETE FROM follows WHERE user_id = ?1 AND profile_id = ?2";

/// 팔로우
pub const INSERT_FOLLOW: &str =
    "INSERT INTO follows (user_id, profile_id) VALUES (?1, ?2) ON CONFLICT DO NOTHING";

/// 좋아요 누른 사용자 이름
pub const GET_LIKED_BY: &str = r#"
    SELECT u.username
    FROM likes l
    JOIN users u ON u.id = l.user_id
    WHERE l.post_id = ?1
    ORDER BY l.rowid
"#;

/// 좋아요 취소
pub const DELETE_LIKE: &str = "DELETE FROM likes WHERE post_id = ?1 AND user_id = ?2";

/// 좋아요
pub const INSERT_LIKE: &str =
    "INSERT INTO likes (post_id, user_id, created) VALUES (?1, ?2, ?3) ON CONFLICT DO NOTHING";

/// 좋아요 수
pub const COUNT_LIKES: &str = "SELECT COUNT(*) FROM likes WHERE post_id = ?1";

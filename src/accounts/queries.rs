/// 사용자 생성
pub const INSERT_USER: &str = r#"
    INSERT INTO users (username, email, password_hash, date_joined)
    VALUES (?1, ?2, ?3, ?4)
    RETURNING id, username, email, password_hash, date_joined
"#;

/// 이름으로 사용자 조회
pub const GET_USER_BY_USERNAME: &str =
    "SELECT id, username, email, password_hash, date_joined FROM users WHERE username = ?1";

/// 세션 토큰으로 사용자 조회
pub const GET_USER_BY_SESSION: &str = r#"
    SELECT u.id, u.username, u.email, u.password_hash, u.date_joined
    FROM users u
    JOIN sessions s ON s.user_id = u.id
    WHERE s.token = ?1 AND julianday(s.created) > julianday(?2)
"#;

/// 세션 생성
pub const INSERT_SESSION: &str =
    "INSERT INTO sessions (token, user_id, created) VALUES (?1, ?2, ?3)";

/// 세션 삭제
pub const DELETE_SESSION: &str = "DELETE FROM sessions WHERE token = ?1";

/// 만료된 세션 정리
pub const DELETE_EXPIRED_SESSIONS: &str =
    "DELETE FROM sessions WHERE julianday(created) <= julianday(?1)";

// region:    --- Imports
use super::model::User;
use super::queries;
use crate::database::DatabaseManager;
use crate::error::AppError;
use async_trait::async_trait;
use axum::extract::{FromRef, FromRequestParts};
use axum::http::header::COOKIE;
use axum::http::request::Parts;
use axum::http::HeaderMap;
use chrono::{DateTime, Duration, Utc};
use std::sync::Arc;
use tracing::debug;

// endregion: --- Imports

/// 세션 쿠키 이름
pub const SESSION_COOKIE: &str = "sessionid";

/// 세션 유효 기간 (2주)
pub const SESSION_MAX_AGE_DAYS: i64 = 14;

/// 이 시각 이전에 만든 세션은 만료
pub fn session_cutoff(now: DateTime<Utc>) -> DateTime<Utc> {
    now - Duration::days(SESSION_MAX_AGE_DAYS)
}

/// 로그인 응답에 붙일 쿠키
pub fn session_cookie(token: &str) -> String {
    let max_age = Duration::days(SESSION_MAX_AGE_DAYS).num_seconds();
    format!("{SESSION_COOKIE}={token}; Path=/; HttpOnly; SameSite=Lax; Max-Age={max_age}")
}

/// 로그아웃 응답에 붙일 만료 쿠키
pub fn expired_cookie() -> String {
    format!("{SESSION_COOKIE}=; Path=/; HttpOnly; SameSite=Lax; Max-Age=0")
}

/// 요청 헤더에서 세션 토큰 추출
pub fn session_token(headers: &HeaderMap) -> Option<String> {
    headers
        .get_all(COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(|value| value.split(';'))
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(name, value)| *name == SESSION_COOKIE && !value.is_empty())
        .map(|(_, value)| value.to_string())
}

async fn load_user(parts: &Parts, db: &DatabaseManager) -> Result<Option<User>, AppError> {
    let Some(token) = session_token(&parts.headers) else {
        return Ok(None);
    };
    let user = sqlx::query_as::<_, User>(queries::GET_USER_BY_SESSION)
        .bind(&token)
        .bind(session_cutoff(Utc::now()))
        .fetch_optional(db.pool())
        .await?;
    if user.is_none() {
        debug!("{:<12} --> 알 수 없는 세션 토큰", "Session");
    }
    Ok(user)
}

// region:    --- Extractors
/// 로그인한 사용자 (없으면 `/login` 으로 리다이렉트)
pub struct CurrentUser(pub User);

/// 로그인 여부와 무관한 사용자
pub struct MaybeUser(pub Option<User>);

#[async_trait]
impl<S> FromRequestParts<S> for CurrentUser
where
    Arc<DatabaseManager>: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let db = Arc::<DatabaseManager>::from_ref(state);
        load_user(parts, &db)
            .await?
            .map(CurrentUser)
            .ok_or(AppError::LoginRequired)
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for MaybeUser
where
    Arc<DatabaseManager>: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let db = Arc::<DatabaseManager>::from_ref(state);
        Ok(MaybeUser(load_user(parts, &db).await?))
    }
}
// endregion: --- Extractors

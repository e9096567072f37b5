/// 계정 관련 커맨드 처리
/// 1. 회원 가입
/// 2. 로그인 (세션 생성)
/// 3. 로그아웃 (세션 삭제)
// region:    --- Imports
use super::model::{LoginForm, RegisterForm, User};
use super::password::{hash_password, verify_password};
use super::queries;
use super::session::session_cutoff;
use crate::database::DatabaseManager;
use crate::error::{AppError, AppResult};
use chrono::Utc;
use tracing::{info, warn};
use uuid::Uuid;

// endregion: --- Imports

// region:    --- Commands
/// 1. 회원 가입
pub async fn register(db_manager: &DatabaseManager, form: RegisterForm) -> AppResult<User> {
    info!("{:<12} --> 회원 가입 요청: {}", "Command", form.username);

    if form.username.trim().is_empty() {
        return Err(AppError::Invalid("Username cannot be empty.".into()));
    }
    if form.email.trim().is_empty() {
        return Err(AppError::Invalid("Email cannot be empty.".into()));
    }
    if form.password.is_empty() || form.confirmation.is_empty() {
        return Err(AppError::Invalid("Password cannot be empty.".into()));
    }
    if form.password != form.confirmation {
        return Err(AppError::Invalid("Passwords must match.".into()));
    }

    let password_hash = hash_password(&form.password);
    let result = sqlx::query_as::<_, User>(queries::INSERT_USER)
        .bind(form.username.trim())
        .bind(form.email.trim())
        .bind(&password_hash)
        .bind(Utc::now())
        .fetch_one(db_manager.pool())
        .await;

    match result {
        Ok(user) => Ok(user),
        Err(sqlx::Error::Database(e)) if e.is_unique_violation() => {
            warn!("{:<12} --> 중복된 사용자 이름: {}", "Command", form.username);
            Err(AppError::Conflict("Username already taken.".into()))
        }
        Err(e) => Err(e.into()),
    }
}

/// 아이디/비밀번호 확인
pub async fn authenticate(db_manager: &DatabaseManager, form: &LoginForm) -> AppResult<User> {
    let user = sqlx::query_as::<_, User>(queries::GET_USER_BY_USERNAME)
        .bind(form.username.trim())
        .fetch_optional(db_manager.pool())
        .await?;

    match user {
        Some(user) if verify_password(&form.password, &user.password_hash) => Ok(user),
        _ => {
            warn!("{:<12} --> 로그인 실패: {}", "Command", form.username);
            Err(AppError::Invalid("Invalid username and/or password.".into()))
        }
    }
}

/// 2. 로그인 (세션 토큰 발급, 만료된 세션 정리)
pub async fn login(db_manager: &DatabaseManager, user: &User) -> AppResult<String> {
    let now = Utc::now();
    let expired = sqlx::query(queries::DELETE_EXPIRED_SESSIONS)
        .bind(session_cutoff(now))
        .execute(db_manager.pool())
        .await?
        .rows_affected();
    if expired > 0 {
        info!("{:<12} --> 만료된 세션 {}개 정리", "Command", expired);
    }

    let token = Uuid::new_v4().simple().to_string();
    sqlx::query(queries::INSERT_SESSION)
        .bind(&token)
        .bind(user.id)
        .bind(now)
        .execute(db_manager.pool())
        .await?;
    info!("{:<12} --> 로그인: {}", "Command", user.username);
    Ok(token)
}

/// 3. 로그아웃
pub async fn logout(db_manager: &DatabaseManager, token: &str) -> AppResult<()> {
    sqlx::query(queries::DELETE_SESSION)
        .bind(token)
        .execute(db_manager.pool())
        .await?;
    Ok(())
}

// endregion: --- Commands

#[cfg(test)]
mod tests {
    use super::*;
    use crate::accounts::session::SESSION_MAX_AGE_DAYS;
    use crate::database::NETWORK_SCHEMA;

    async fn setup() -> DatabaseManager {
        let db = DatabaseManager::connect("sqlite::memory:", 1).await.unwrap();
        db.initialize_database(NETWORK_SCHEMA).await.unwrap();
        db
    }

    fn form(username: &str, password: &str, confirmation: &str) -> RegisterForm {
        RegisterForm {
            username: username.into(),
            email: format!("{username}@example.com"),
            password: password.into(),
            confirmation: confirmation.into(),
        }
    }

    #[tokio::test]
    async fn register_then_authenticate() {
        let db = setup().await;
        let user = register(&db, form("alice", "pw", "pw")).await.unwrap();
        assert_eq!(user.username, "alice");

        let login_form = LoginForm {
            username: "alice".into(),
            password: "pw".into(),
        };
        assert_eq!(authenticate(&db, &login_form).await.unwrap().id, user.id);

        let wrong = LoginForm {
            username: "alice".into(),
            password: "nope".into(),
        };
        assert!(matches!(
            authenticate(&db, &wrong).await,
            Err(AppError::Invalid(_))
        ));
    }

    #[tokio::test]
    async fn login_trims_username_like_registration() {
        let db = setup().await;
        let user = register(&db, form(" bob ", "pw", "pw")).await.unwrap();
        assert_eq!(user.username, "bob");

        for username in [" bob ", "bob"] {
            let login_form = LoginForm {
                username: username.into(),
                password: "pw".into(),
            };
            assert_eq!(authenticate(&db, &login_form).await.unwrap().id, user.id);
        }
    }

    #[tokio::test]
    async fn register_rejects_bad_input() {
        let db = setup().await;
        let err = register(&db, form("bob", "a", "b")).await.unwrap_err();
        assert_eq!(err.to_string(), "Passwords must match.");

        let err = register(&db, form("", "a", "a")).await.unwrap_err();
        assert_eq!(err.to_string(), "Username cannot be empty.");

        register(&db, form("bob", "a", "a")).await.unwrap();
        let err = register(&db, form("bob", "a", "a")).await.unwrap_err();
        assert!(matches!(err, AppError::Conflict(_)));
    }

    #[tokio::test]
    async fn logout_removes_session() {
        let db = setup().await;
        let user = register(&db, form("carol", "pw", "pw")).await.unwrap();
        let token = login(&db, &user).await.unwrap();
        logout(&db, &token).await.unwrap();

        assert!(session_user(&db, &token).await.is_none());
    }

    async fn session_user(db: &DatabaseManager, token: &str) -> Option<User> {
        sqlx::query_as::<_, User>(queries::GET_USER_BY_SESSION)
            .bind(token)
            .bind(session_cutoff(Utc::now()))
            .fetch_optional(db.pool())
            .await
            .unwrap()
    }

    #[tokio::test]
    async fn old_sessions_expire_and_are_purged_on_login() {
        let db = setup().await;
        let user = register(&db, form("dave", "pw", "pw")).await.unwrap();
        let stale = Utc::now() - chrono::Duration::days(SESSION_MAX_AGE_DAYS + 1);
        sqlx::query(queries::INSERT_SESSION)
            .bind("stale-token")
            .bind(user.id)
            .bind(stale)
            .execute(db.pool())
            .await
            .unwrap();
        assert!(session_user(&db, "stale-token").await.is_none());

        let token = login(&db, &user).await.unwrap();
        assert_eq!(session_user(&db, &token).await.unwrap().id, user.id);

        let remaining: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM sessions")
            .fetch_one(db.pool())
            .await
            .unwrap();
        assert_eq!(remaining, 1);
    }
}

// region:    --- Imports
use super::commands;
use super::model::{LoginForm, RegisterForm};
use super::session::{expired_cookie, session_cookie, session_token, MaybeUser};
use crate::database::DatabaseManager;
use crate::error::AppResult;
use axum::extract::State;
use axum::http::header::SET_COOKIE;
use axum::http::HeaderMap;
use axum::response::{IntoResponse, Redirect, Response};
use axum::{Form, Json};
use serde_json::json;
use std::sync::Arc;
use tracing::info;

// endregion: --- Imports

/// 로그인 폼 (이미 로그인 했다면 홈으로)
pub async fn handle_login_form(MaybeUser(user): MaybeUser) -> Response {
    match user {
        Some(_) => Redirect::to("/").into_response(),
        None => Json(json!({ "message": null })).into_response(),
    }
}

/// 로그인 처리
pub async fn handle_login(
    State(db_manager): State<Arc<DatabaseManager>>,
    Form(form): Form<LoginForm>,
) -> AppResult<Response> {
    info!("{:<12} --> 로그인 요청: {}", "Handler", form.username);
    let user = commands::authenticate(&db_manager, &form).await?;
    let token = commands::login(&db_manager, &user).await?;
    Ok(([(SET_COOKIE, session_cookie(&token))], Redirect::to("/")).into_response())
}

/// 로그아웃 처리
pub async fn handle_logout(
    State(db_manager): State<Arc<DatabaseManager>>,
    headers: HeaderMap,
) -> AppResult<Response> {
    if let Some(token) = session_token(&headers) {
        commands::logout(&db_manager, &token).await?;
    }
    Ok(([(SET_COOKIE, expired_cookie())], Redirect::to("/")).into_response())
}

/// 회원 가입 폼
pub async fn handle_register_form(MaybeUser(user): MaybeUser) -> Response {
    match user {
        Some(_) => Redirect::to("/").into_response(),
        None => Json(json!({ "message": null })).into_response(),
    }
}

/// 회원 가입 후 바로 로그인
pub async fn handle_register(
    State(db_manager): State<Arc<DatabaseManager>>,
    Form(form): Form<RegisterForm>,
) -> AppResult<Response> {
    let user = commands::register(&db_manager, form).await?;
    let token = commands::login(&db_manager, &user).await?;
    Ok(([(SET_COOKIE, session_cookie(&token))], Redirect::to("/")).into_response())
}

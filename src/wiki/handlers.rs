// region:    --- Imports
use super::markdown;
use super::store::{is_valid_title, EntryStore, TITLE_MAX_LEN};
use crate::error::{AppError, AppResult};
use axum::extract::{Path, Query, State};
use axum::response::{IntoResponse, Redirect, Response};
use axum::{Form, Json};
use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};
use rand::seq::SliceRandom;
use serde::Deserialize;
use serde_json::json;
use std::sync::Arc;
use tracing::info;

// endregion: --- Imports

/// 경로 세그먼트로 쓸 때 인코딩할 문자
const PATH_SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}');

/// 문서 페이지 URL
pub fn entry_url(title: &str) -> String {
    format!("/wiki/{}", utf8_percent_encode(title, PATH_SEGMENT))
}

fn not_found(title: &str) -> AppError {
    AppError::NotFound(format!("{title} is not found in encyclopedia."))
}

// region:    --- Forms
#[derive(Debug, Deserialize)]
pub struct SearchParams {
    #[serde(default)]
    pub q: String,
}

#[derive(Debug, Deserialize)]
pub struct NewPageForm {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub contents: String,
}

#[derive(Debug, Deserialize)]
pub struct EditForm {
    #[serde(default)]
    pub contents: String,
}
// endregion: --- Forms

// region:    --- Handlers

/// 문서 목록
pub async fn handle_index(
    State(store): State<Arc<EntryStore>>,
) -> AppResult<Json<serde_json::Value>> {
    let entries = store.list_entries().await?;
    Ok(Json(json!({ "entries": entries })))
}

/// 문서 내용 (HTML)
pub async fn handle_contents(
    State(store): State<Arc<EntryStore>>,
    Path(title): Path<String>,
) -> AppResult<Json<serde_json::Value>> {
    info!("{:<12} --> 문서 조회: {}", "Handler", title);
    let contents = store
        .get_entry(&title)
        .await?
        .ok_or_else(|| not_found(&title))?;
    Ok(Json(json!({
        "title": title,
        "contents": markdown::render(&contents),
    })))
}

/// 검색: 제목이 정확히 일치하면 해당 문서로, 아니면 부분 일치 목록
pub async fn handle_search(
    State(store): State<Arc<EntryStore>>,
    Query(params): Query<SearchParams>,
) -> AppResult<Response> {
    let q = params.q.trim();
    info!("{:<12} --> 문서 검색: {}", "Handler", q);
    if store.get_entry(q).await?.is_some() {
        return Ok(Redirect::to(&entry_url(q)).into_response());
    }
    let results = store.search(q).await?;
    Ok(Json(json!({ "query": q, "results": results })).into_response())
}

/// 새 문서 폼
pub async fn handle_create_form() -> Json<serde_json::Value> {
    Json(json!({ "title": "", "contents": "", "title_max_len": TITLE_MAX_LEN }))
}

/// 새 문서 작성 (제목 중복은 대소문자 무시)
pub async fn handle_create(
    State(store): State<Arc<EntryStore>>,
    Form(form): Form<NewPageForm>,
) -> AppResult<Redirect> {
    let title = form.title.trim();
    if title.is_empty() {
        return Err(AppError::Invalid("Title cannot be empty.".into()));
    }
    if form.contents.trim().is_empty() {
        return Err(AppError::Invalid("Contents cannot be empty.".into()));
    }
    if !is_valid_title(title) {
        return Err(AppError::Invalid(format!(
            "Title must be at most {TITLE_MAX_LEN} characters \
             and cannot contain '/' or '\\' or start with '.'."
        )));
    }
    if let Some(existing) = store.find_case_insensitive(title).await? {
        return Err(AppError::Conflict(format!(
            "Entry already exists with title: {existing}"
        )));
    }

    store.save_entry(title, &form.contents).await?;
    Ok(Redirect::to(&entry_url(title)))
}

/// 수정 폼 (기존 마크다운으로 채움)
pub async fn handle_edit_form(
    State(store): State<Arc<EntryStore>>,
    Path(title): Path<String>,
) -> AppResult<Json<serde_json::Value>> {
    let contents = store
        .get_entry(&title)
        .await?
        .ok_or_else(|| not_found(&title))?;
    Ok(Json(json!({ "title": title, "contents": contents })))
}

/// 문서 수정 (통째로 덮어쓰기)
pub async fn handle_edit(
    State(store): State<Arc<EntryStore>>,
    Path(title): Path<String>,
    Form(form): Form<EditForm>,
) -> AppResult<Redirect> {
    if store.get_entry(&title).await?.is_none() {
        return Err(not_found(&title));
    }
    if form.contents.trim().is_empty() {
        return Err(AppError::Invalid("Contents cannot be empty.".into()));
    }
    store.save_entry(&title, &form.contents).await?;
    Ok(Redirect::to(&entry_url(&title)))
}

/// 임의의 문서로 이동
pub async fn handle_random(State(store): State<Arc<EntryStore>>) -> AppResult<Redirect> {
    let entries = store.list_entries().await?;
    let page = entries
        .choose(&mut rand::thread_rng())
        .ok_or_else(|| AppError::NotFound("No entries in encyclopedia.".into()))?;
    Ok(Redirect::to(&entry_url(page)))
}

// endregion: --- Handlers

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entry_url_encodes_unsafe_characters() {
        assert_eq!(entry_url("Python"), "/wiki/Python");
        assert_eq!(entry_url("Rust lang"), "/wiki/Rust%20lang");
        assert_eq!(entry_url("C#"), "/wiki/C%23");
        assert_eq!(entry_url("한글"), "/wiki/%ED%95%9C%EA%B8%80");
    }
}

mod common;

use common::{client, get_json, location, spawn_app, TestApp};
use reqwest::{Client, StatusCode};
use serde_json::{json, Value};
use webapps::config::AppKind;

async fn create_page(
    client: &Client,
    app: &TestApp,
    title: &str,
    contents: &str,
) -> reqwest::Response {
    client
        .post(app.url("/create"))
        .form(&[("title", title), ("contents", contents)])
        .send()
        .await
        .expect("Failed to send request")
}

/// 문서 작성 후 조회
#[tokio::test]
async fn test_create_and_view() {
    let app = spawn_app(AppKind::Wiki).await;
    let client = client();

    let response = create_page(&client, &app, "Python", "# Python\n\nA *language*.").await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/wiki/Python");

    let page: Value = get_json(&client, &app.url("/wiki/Python")).await;
    assert_eq!(page["title"], "Python");
    assert_eq!(page["contents"], "<h1>Python</h1>\n<p>A <em>language</em>.</p>\n");

    let index: Value = get_json(&client, &app.url("/")).await;
    assert_eq!(index, json!({ "entries": ["Python"] }));

    // 제목은 정확히 일치해야 한다
    let response = client.get(app.url("/wiki/python")).send().await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["error"], "python is not found in encyclopedia.");
}

/// 대소문자만 다른 제목도 중복
#[tokio::test]
async fn test_duplicate_title() {
    let app = spawn_app(AppKind::Wiki).await;
    let client = client();
    create_page(&client, &app, "CSS", "# CSS").await;

    let response = create_page(&client, &app, "css", "# css").await;
    assert_eq!(response.status(), StatusCode::CONFLICT);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["message"], "Entry already exists with title: CSS");

    for (title, contents) in [("", "x"), ("Empty", ""), ("../etc", "x")] {
        let response = create_page(&client, &app, title, contents).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}

/// 정확히 일치하면 이동, 아니면 부분 일치 목록
#[tokio::test]
async fn test_search() {
    let app = spawn_app(AppKind::Wiki).await;
    let client = client();
    for title in ["Python", "CSS", "Django"] {
        create_page(&client, &app, title, "x").await;
    }

    let response = client.get(app.url("/search?q=Python")).send().await.unwrap();
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/wiki/Python");

    let results: Value = get_json(&client, &app.url("/search?q=py")).await;
    assert_eq!(results, json!({ "query": "py", "results": ["Python"] }));

    let results: Value = get_json(&client, &app.url("/search?q=zzz")).await;
    assert_eq!(results["results"], json!([]));
}

/// 문서 수정은 통째로 덮어쓴다
#[tokio::test]
async fn test_edit() {
    let app = spawn_app(AppKind::Wiki).await;
    let client = client();
    create_page(&client, &app, "Git", "# Git").await;

    let form: Value = get_json(&client, &app.url("/edit/Git")).await;
    assert_eq!(form["contents"], "# Git");

    let response = client
        .post(app.url("/edit/Git"))
        .form(&[("contents", "Version control.")])
        .send()
        .await
        .unwrap();
    assert_eq!(location(&response), "/wiki/Git");

    let page: Value = get_json(&client, &app.url("/wiki/Git")).await;
    assert_eq!(page["contents"], "<p>Version control.</p>\n");

    let response = client.get(app.url("/edit/Missing")).send().await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let response = client
        .post(app.url("/edit/Missing"))
        .form(&[("contents", "x")])
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

/// 임의 문서
#[tokio::test]
async fn test_random() {
    let app = spawn_app(AppKind::Wiki).await;
    let client = client();

    let response = client.get(app.url("/random")).send().await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    create_page(&client, &app, "HTML", "# HTML").await;
    let response = client.get(app.url("/random")).send().await.unwrap();
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/wiki/HTML");
}

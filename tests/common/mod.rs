#![allow(dead_code)]

use reqwest::redirect::Policy;
use reqwest::{Client, Response};
use std::path::PathBuf;
use tempfile::TempDir;
use tokio::net::TcpListener;
use webapps::build_app;
use webapps::config::{AppKind, Config};

/// 테스트 서버 (임시 디렉터리는 서버와 수명을 같이 한다)
pub struct TestApp {
    pub base_url: String,
    _entries: Option<TempDir>,
}

impl TestApp {
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

/// 트레이싱 초기화 (여러 번 호출해도 된다)
fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .without_time()
        .with_target(false)
        .with_test_writer()
        .try_init();
}

/// 임의 포트에 앱을 띄운다
///
/// 데이터베이스 앱은 메모리 DB, 위키는 임시 디렉터리를 쓴다.
pub async fn spawn_app(app: AppKind) -> TestApp {
    init_tracing();
    let entries = tempfile::tempdir().expect("임시 디렉터리 생성 실패");
    let config = Config {
        app,
        port: 0,
        database_url: "sqlite::memory:".to_string(),
        max_connections: 1,
        entries_dir: PathBuf::from(entries.path()),
    };
    let router = build_app(&config).await.expect("앱 초기화 실패");

    let listener = TcpListener::bind("127.0.0.1:0").await.expect("바인드 실패");
    let addr = listener.local_addr().expect("주소 조회 실패");
    tokio::spawn(async move {
        axum::serve(listener, router.into_make_service())
            .await
            .expect("서버 실행 실패");
    });

    TestApp {
        base_url: format!("http://{addr}"),
        _entries: Some(entries),
    }
}

/// 쿠키를 유지하고 리다이렉트는 따라가지 않는 클라이언트
pub fn client() -> Client {
    Client::builder()
        .cookie_store(true)
        .redirect(Policy::none())
        .build()
        .expect("클라이언트 생성 실패")
}

/// 회원 가입 (가입 후 바로 로그인 상태)
pub async fn register(client: &Client, app: &TestApp, username: &str) -> Response {
    let email = format!("{username}@example.com");
    client
        .post(app.url("/register"))
        .form(&[
            ("username", username),
            ("email", email.as_str()),
            ("password", "secret"),
            ("confirmation", "secret"),
        ])
        .send()
        .await
        .expect("Failed to send request")
}

pub fn location(response: &Response) -> &str {
    response
        .headers()
        .get(reqwest::header::LOCATION)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
}

/// GET 후 JSON 본문
pub async fn get_json(client: &Client, url: &str) -> serde_json::Value {
    client
        .get(url)
        .send()
        .await
        .expect("Failed to send request")
        .json()
        .await
        .expect("JSON 응답이 아님")
}

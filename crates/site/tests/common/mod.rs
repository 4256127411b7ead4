#![allow(dead_code)]

use std::path::Path;

use axum::body::Body;
use axum::http::{Method, Request};
use axum::response::Response;
use axum::Router;
use http_body_util::BodyExt;
use tempfile::TempDir;
use tower::ServiceExt;

use cisl_site::config::SiteConfig;
use cisl_site::router::build_app;
use cisl_site::state::AppState;

/// Build a test `SiteConfig` serving `root` with local data.
pub fn test_config(root: &Path) -> SiteConfig {
    SiteConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        site_root: root.to_path_buf(),
        data_path: "data".to_string(),
        data_base_url: None,
        request_timeout_secs: 30,
        fetch_timeout_secs: 10,
    }
}

/// Build the full application router over a site root.
pub fn build_test_app(root: &Path) -> Router {
    let state = AppState::from_config(test_config(root)).expect("local state never fails");
    build_app(state)
}

/// A temporary site directory with pages and data files.
pub struct TestSite {
    pub dir: TempDir,
}

impl TestSite {
    pub fn new() -> Self {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir(dir.path().join("data")).unwrap();
        Self { dir }
    }

    pub fn page(self, name: &str, html: &str) -> Self {
        let path = self.dir.path().join(name);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).unwrap();
        }
        std::fs::write(path, html).unwrap();
        self
    }

    pub fn data(self, name: &str, json: &str) -> Self {
        std::fs::write(self.dir.path().join("data").join(name), json).unwrap();
        self
    }

    pub fn app(&self) -> Router {
        build_test_app(self.dir.path())
    }
}

/// Send a GET request to the app.
pub async fn get(app: Router, uri: &str) -> Response {
    send(app, Method::GET, uri).await
}

pub async fn send(app: Router, method: Method, uri: &str) -> Response {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    app.oneshot(request).await.unwrap()
}

/// Collect a response body into a string.
pub async fn body_text(response: Response) -> String {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(bytes.to_vec()).unwrap()
}

/// Collect a response body and parse it as JSON.
pub async fn body_json(response: Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

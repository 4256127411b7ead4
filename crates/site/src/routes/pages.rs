//! Page serving with server-side content loading.
//!
//! Recognized pages (see [`PageRoute`]) are read from the site root, run
//! through [`dispatch`], and returned as HTML. Everything else falls through
//! to a plain static file service.

use std::path::{Path, PathBuf};

use axum::extract::{Request, State};
use axum::http::Method;
use axum::response::{Html, IntoResponse, Response};
use tower::ServiceExt;
use tower_http::services::ServeDir;

use cisl_core::routes::{PageRoute, DEFAULT_PAGE};
use cisl_loader::{dispatch, HtmlDocument};

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// Fallback handler for every path not matched by another route.
pub async fn serve_page(State(state): State<AppState>, request: Request) -> Response {
    let path = request.uri().path().to_string();

    if PageRoute::from_path(&path).is_some() {
        if request.method() != Method::GET && request.method() != Method::HEAD {
            return AppError::MethodNotAllowed.into_response();
        }
        return match render_page(&state, &path).await {
            Ok(html) => Html(html).into_response(),
            Err(e) => e.into_response(),
        };
    }

    match ServeDir::new(&state.config.site_root).oneshot(request).await {
        Ok(response) => response.into_response(),
        Err(never) => match never {},
    }
}

/// Read the page file behind `path` and fill in its content sections.
async fn render_page(state: &AppState, path: &str) -> AppResult<String> {
    let file = resolve_page_file(&state.config.site_root, path)
        .ok_or_else(|| AppError::NotFound(path.to_string()))?;

    let source = match tokio::fs::read_to_string(&file).await {
        Ok(source) => source,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            return Err(AppError::NotFound(path.to_string()));
        }
        Err(e) => return Err(e.into()),
    };

    let mut document = HtmlDocument::new(source);
    dispatch(&state.loader, &mut document, path).await;
    Ok(document.into_html())
}

/// Map a URL path onto a file under `root`.
///
/// Returns `None` for paths that try to leave the root. A path ending in
/// `/` maps to that directory's default page.
pub fn resolve_page_file(root: &Path, path: &str) -> Option<PathBuf> {
    let mut file = root.to_path_buf();
    for segment in path.split('/').filter(|s| !s.is_empty()) {
        if segment == ".." || segment == "." || segment.contains('\\') {
            return None;
        }
        file.push(segment);
    }

    if path.is_empty() || path.ends_with('/') {
        file.push(DEFAULT_PAGE);
    }
    Some(file)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

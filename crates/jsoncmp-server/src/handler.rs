use std::io::ErrorKind;
use std::path::Path;

use axum::extract::State;
use axum::response::{Html, Json};
use serde_json::{json, Value};

use jsoncmp_diff::parse_document;

use crate::api::{CompareRequest, CompareResponse, HealthResponse};
use crate::error::{ServerError, ServerResult};
use crate::server::AppState;

pub async fn greeting_handler() -> &'static str {
    "Hello"
}

/// Compare the two configured documents and render the result as HTML.
pub async fn compare_page_handler(State(state): State<AppState>) -> ServerResult<Html<String>> {
    let left = read_document(&state.config.left_document).await?;
    let right = read_document(&state.config.right_document).await?;
    let report = state.differ.compare(&left, &right)?;
    Ok(Html(render_page(&report.messages())))
}

/// Compare the two documents carried in the request body.
pub async fn compare_handler(
    State(state): State<AppState>,
    Json(request): Json<CompareRequest>,
) -> ServerResult<Json<CompareResponse>> {
    let report = state.differ.compare(&request.left, &request.right)?;
    Ok(Json(report.into()))
}

/// Health check handler.
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::default())
}

/// Info handler.
pub async fn info_handler(State(state): State<AppState>) -> Json<Value> {
    Json(json!({
        "name": "jsoncmp-server",
        "version": env!("CARGO_PKG_VERSION"),
        "max_depth": state.config.diff.max_depth,
    }))
}

async fn read_document(path: &Path) -> ServerResult<Value> {
    let bytes = tokio::fs::read(path).await.map_err(|e| match e.kind() {
        ErrorKind::NotFound => ServerError::DocumentNotFound(path.to_path_buf()),
        _ => ServerError::Io(e),
    })?;
    Ok(parse_document(&bytes)?)
}

fn render_page(items: &[String]) -> String {
    let mut page = String::from(
        "<!DOCTYPE html>\n<html>\n<head><meta charset=\"utf-8\"><title>JSON comparison</title></head>\n<body>\n<h1>JSON comparison</h1>\n",
    );
    if items.is_empty() {
        page.push_str("<p>No differences found.</p>\n");
    } else {
        page.push_str("<ul>\n");
        for item in items {
            page.push_str("<li>");
            page.push_str(&escape_html(item));
            page.push_str("</li>\n");
        }
        page.push_str("</ul>\n");
    }
    page.push_str("</body>\n</html>\n");
    page
}

fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

//! Request and response bodies of the HTTP API.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use jsoncmp_diff::{DiffReport, Difference};

/// HTTP endpoint paths.
pub mod endpoints {
    pub const GREETING: &str = "/compare";
    pub const COMPARE_PAGE: &str = "/compare/json";
    pub const COMPARE: &str = "/v1/compare";
    pub const HEALTH: &str = "/v1/health";
    pub const INFO: &str = "/v1/info";
}

/// Body of `POST /v1/compare`.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CompareRequest {
    pub left: Value,
    pub right: Value,
}

/// Result of a comparison as returned to API clients.
#[derive(Clone, Debug, Serialize)]
pub struct CompareResponse {
    pub identical: bool,
    pub count: usize,
    pub differences: Vec<Difference>,
}

impl From<DiffReport> for CompareResponse {
    fn from(report: DiffReport) -> Self {
        Self {
            identical: report.is_empty(),
            count: report.len(),
            differences: report.differences,
        }
    }
}

/// Health check response.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

impl Default for HealthResponse {
    fn default() -> Self {
        Self {
            status: "ok".into(),
            version: env!("CARGO_PKG_VERSION").into(),
        }
    }
}

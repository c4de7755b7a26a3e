//! Health check endpoint.

use rocket::{Route, serde::json::Json};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::built_info;

#[derive(Debug, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct HealthStatus {
    pub status: String,
    pub version: String,
    pub built: String,
    pub git_commit: Option<String>,
}

/// Health Status endpoint.
///
/// - **URL:** `/status`
/// - **Method:** `GET`
/// - **Purpose:** Reports that the service is up, with build metadata
///
/// # Response
///
/// **Success (HTTP 200 OK):**
/// ```json
/// {
///   "status": "running",
///   "version": "0.1.0",
///   "built": "Fri, 15 Aug 2025 18:13:43 +0000",
///   "git_commit": null
/// }
/// ```
#[rocket::get("/status")]
pub fn health_status() -> Json<HealthStatus> {
    Json(HealthStatus {
        status: "running".to_string(),
        version: built_info::PKG_VERSION.to_string(),
        built: built_info::BUILT_TIME_UTC.to_string(),
        git_commit: built_info::GIT_COMMIT_HASH.map(str::to_string),
    })
}

pub fn routes() -> Vec<Route> {
    routes![health_status]
}

pub mod contact_form;
pub mod deleted;
pub mod status;

use rocket::Route;
use rocket::http::Status;
use rocket::response::status::Custom;
use rocket::serde::json::Json;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Error body returned by every handler in this API.
#[derive(Debug, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ErrorResponse {
    pub error: String,
}

/// Success body for operations that act on a single record.
#[derive(Debug, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct MessageResponse {
    pub message: String,
    pub id: i32,
}

/// Error half of a handler result: a status code plus a JSON message.
pub type ApiError = Custom<Json<ErrorResponse>>;

pub fn api_error(status: Status, message: impl Into<String>) -> ApiError {
    Custom(status, Json(ErrorResponse { error: message.into() }))
}

pub fn message(id: i32, message: impl Into<String>) -> Json<MessageResponse> {
    Json(MessageResponse { message: message.into(), id })
}

pub fn routes() -> Vec<Route> {
    let mut routes = Vec::new();
    routes.extend(contact_form::routes());
    routes.extend(deleted::routes());
    routes.extend(status::routes());
    routes
}

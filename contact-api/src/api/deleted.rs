//! API endpoints for soft-deleted contact forms: restore, inspection and purge.

use rocket::Route;
use rocket::http::Status;
use rocket::serde::json::Json;

use super::{ApiError, MessageResponse, api_error, message};
use crate::error::StoreError;
use crate::models::DeletedContactForm;
use crate::orm::DbConn;
use crate::orm::deleted_contact_form::{
    get_all_deleted_contact_forms, get_deleted_contact_form, purge_deleted_contact_form,
};
use crate::orm::soft_delete::restore_contact_form;

const NOT_FOUND_DELETED: &str = "Post was not found in deleted records";

/// Restore Post endpoint.
///
/// - **URL:** `/restore/<post_id>`
/// - **Method:** `POST`
/// - **Purpose:** Moves a soft-deleted record back to the active records under its original id
///
/// # Response
///
/// **Success (HTTP 200 OK):**
/// ```json
/// { "message": "Post restored successfully!", "id": 1 }
/// ```
///
/// **Failure (HTTP 404 Not Found):** nothing was deleted under this id
///
/// **Failure (HTTP 409 Conflict):** a record created after the deletion now
/// holds the same email. Neither table is changed.
#[post("/restore/<post_id>")]
pub async fn restore_post(db: DbConn, post_id: i32) -> Result<Json<MessageResponse>, ApiError> {
    match db.run(move |conn| restore_contact_form(conn, post_id)).await {
        Ok(form) => Ok(message(form.id, "Post restored successfully!")),
        Err(StoreError::NotFound(_)) => Err(api_error(Status::NotFound, NOT_FOUND_DELETED)),
        Err(StoreError::Conflict(reason)) => {
            warn!("Refusing to restore post {}: {}", post_id, reason);
            Err(api_error(
                Status::Conflict,
                "An active post already uses this email or id",
            ))
        }
        Err(e) => {
            error!("Error restoring post with id {}: {}", post_id, e);
            Err(api_error(
                Status::InternalServerError,
                "An error occurred while restoring the post",
            ))
        }
    }
}

/// Lists every soft-deleted record, ordered by id.
#[get("/deleted")]
pub async fn list_deleted_posts(db: DbConn) -> Result<Json<Vec<DeletedContactForm>>, ApiError> {
    db.run(|conn| get_all_deleted_contact_forms(conn))
        .await
        .map(Json)
        .map_err(|e| {
            error!("Error listing deleted posts: {}", e);
            api_error(
                Status::InternalServerError,
                "An error occurred while listing deleted posts",
            )
        })
}

/// Read Deleted Post endpoint.
///
/// - **URL:** `/deleted/<post_id>`
/// - **Method:** `GET`
/// - **Purpose:** Retrieves a soft-deleted record together with its `deleted_at` timestamp
#[get("/deleted/<post_id>")]
pub async fn read_deleted_post(
    db: DbConn,
    post_id: i32,
) -> Result<Json<DeletedContactForm>, ApiError> {
    match db.run(move |conn| get_deleted_contact_form(conn, post_id)).await {
        Ok(archived) => Ok(Json(archived)),
        Err(StoreError::NotFound(_)) => Err(api_error(Status::NotFound, NOT_FOUND_DELETED)),
        Err(e) => {
            error!("Error reading deleted post with id {}: {}", post_id, e);
            Err(api_error(
                Status::InternalServerError,
                "An error occurred while reading the deleted post",
            ))
        }
    }
}

/// Purge Post endpoint.
///
/// - **URL:** `/deleted/<post_id>`
/// - **Method:** `DELETE`
/// - **Purpose:** Permanently removes a soft-deleted record
///
/// **Warning**: This cannot be undone. Active records are never touched.
#[delete("/deleted/<post_id>")]
pub async fn purge_post(db: DbConn, post_id: i32) -> Result<Json<MessageResponse>, ApiError> {
    match db.run(move |conn| purge_deleted_contact_form(conn, post_id)).await {
        Ok(archived) => {
            info!("Purged deleted post {}", archived.id);
            Ok(message(archived.id, "Post permanently deleted"))
        }
        Err(StoreError::NotFound(_)) => Err(api_error(Status::NotFound, NOT_FOUND_DELETED)),
        Err(e) => {
            error!("Error purging post with id {}: {}", post_id, e);
            Err(api_error(
                Status::InternalServerError,
                "An error occurred while purging the post",
            ))
        }
    }
}

pub fn routes() -> Vec<Route> {
    routes![restore_post, list_deleted_posts, read_deleted_post, purge_post]
}

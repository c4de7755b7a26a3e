//! API endpoints for contact form submissions.
//!
//! Submissions are accepted as HTML form posts (what the contact page sends)
//! and as JSON. Both encodings share one handler body per operation; only the
//! data guard differs.

use rocket::Route;
use rocket::form::Form;
use rocket::http::Status;
use rocket::response::status;
use rocket::serde::json::Json;

use super::{ApiError, MessageResponse, api_error, message};
use crate::error::StoreError;
use crate::logged_json::LoggedJson;
use crate::models::{ContactForm, ContactFormChanges, ContactFormChangesForm, ContactFormInput};
use crate::orm::DbConn;
use crate::orm::contact_form::{
    get_all_contact_forms, get_contact_form, insert_contact_form, update_contact_form,
};
use crate::orm::soft_delete::soft_delete_contact_form;

const NOT_FOUND: &str = "Post was not found";
const EMAIL_TAKEN: &str = "Email already registered";

async fn submit(
    db: DbConn,
    input: ContactFormInput,
) -> Result<status::Created<Json<MessageResponse>>, ApiError> {
    input
        .validate()
        .map_err(|msg| api_error(Status::UnprocessableEntity, msg))?;

    match db.run(move |conn| insert_contact_form(conn, input.into())).await {
        Ok(form) => Ok(status::Created::new(format!("/posts/{}", form.id))
            .body(message(form.id, "Form submitted successfully!"))),
        Err(StoreError::Conflict(_)) => Err(api_error(Status::BadRequest, EMAIL_TAKEN)),
        Err(e) => {
            error!("Error submitting form: {}", e);
            Err(api_error(
                Status::InternalServerError,
                "An error occurred while submitting the form",
            ))
        }
    }
}

async fn update(
    db: DbConn,
    form_id: i32,
    changes: ContactFormChanges,
    success: &'static str,
) -> Result<Json<MessageResponse>, ApiError> {
    changes
        .validate()
        .map_err(|msg| api_error(Status::UnprocessableEntity, msg))?;

    match db.run(move |conn| update_contact_form(conn, form_id, &changes)).await {
        Ok(form) => Ok(message(form.id, success)),
        Err(StoreError::NotFound(_)) => Err(api_error(Status::NotFound, NOT_FOUND)),
        Err(StoreError::Conflict(_)) => Err(api_error(Status::Conflict, EMAIL_TAKEN)),
        Err(e) => {
            error!("Error updating post with id {}: {}", form_id, e);
            Err(api_error(
                Status::InternalServerError,
                "An error occurred while updating the post",
            ))
        }
    }
}

/// Submit endpoint.
///
/// - **URL:** `/submit`
/// - **Method:** `POST`
/// - **Content-Type:** `application/x-www-form-urlencoded`
/// - **Purpose:** Creates a new contact form record
///
/// Required fields are `fullname`, `email` and `gender`; `newsletter`
/// defaults to `false` and `comment` to an empty string.
///
/// # Response
///
/// **Success (HTTP 201 Created):** `Location: /posts/<id>`
/// ```json
/// { "message": "Form submitted successfully!", "id": 1 }
/// ```
///
/// **Failure (HTTP 400 Bad Request):** the email is already registered
///
/// **Failure (HTTP 422 Unprocessable Entity):** a required field is missing,
/// blank, or a field is longer than its column allows
#[post("/submit", format = "form", data = "<form>")]
pub async fn submit_form(
    db: DbConn,
    form: Form<ContactFormInput>,
) -> Result<status::Created<Json<MessageResponse>>, ApiError> {
    submit(db, form.into_inner()).await
}

/// JSON variant of [`submit_form`].
#[post("/submit", format = "json", data = "<body>")]
pub async fn submit_json(
    db: DbConn,
    body: LoggedJson<ContactFormInput>,
) -> Result<status::Created<Json<MessageResponse>>, ApiError> {
    submit(db, body.into_inner()).await
}

/// List Posts endpoint.
///
/// - **URL:** `/posts`
/// - **Method:** `GET`
/// - **Purpose:** Retrieves all active records, ordered by id
#[get("/posts")]
pub async fn list_posts(db: DbConn) -> Result<Json<Vec<ContactForm>>, ApiError> {
    db.run(|conn| get_all_contact_forms(conn))
        .await
        .map(Json)
        .map_err(|e| {
            error!("Error listing posts: {}", e);
            api_error(
                Status::InternalServerError,
                "An error occurred while listing posts",
            )
        })
}

/// Read Post endpoint.
///
/// - **URL:** `/posts/<post_id>`
/// - **Method:** `GET`
/// - **Purpose:** Retrieves one active record
///
/// # Response
///
/// **Success (HTTP 200 OK):**
/// ```json
/// {
///   "id": 1,
///   "fullname": "Ada Lovelace",
///   "email": "ada@example.com",
///   "gender": "female",
///   "newsletter": true,
///   "comment": ""
/// }
/// ```
///
/// **Failure (HTTP 404 Not Found):** no active record with this id; deleted
/// records are only visible under `/deleted/<post_id>`
#[get("/posts/<post_id>")]
pub async fn read_post(db: DbConn, post_id: i32) -> Result<Json<ContactForm>, ApiError> {
    match db.run(move |conn| get_contact_form(conn, post_id)).await {
        Ok(form) => Ok(Json(form)),
        Err(StoreError::NotFound(_)) => Err(api_error(Status::NotFound, NOT_FOUND)),
        Err(e) => {
            error!("Error reading post with id {}: {}", post_id, e);
            Err(api_error(
                Status::InternalServerError,
                "An error occurred while reading the post",
            ))
        }
    }
}

/// Delete Post endpoint.
///
/// - **URL:** `/posts/<post_id>`
/// - **Method:** `DELETE`
/// - **Purpose:** Soft-deletes a record by moving it to the deleted records
///
/// The record keeps its id and can be brought back with `POST /restore/<post_id>`.
///
/// # Response
///
/// **Success (HTTP 200 OK):**
/// ```json
/// { "message": "Post deleted successfully", "id": 1 }
/// ```
///
/// **Failure (HTTP 404 Not Found):** no active record with this id
///
/// **Failure (HTTP 500 Internal Server Error):** the move failed and was rolled back
#[delete("/posts/<post_id>")]
pub async fn delete_post(db: DbConn, post_id: i32) -> Result<Json<MessageResponse>, ApiError> {
    match db.run(move |conn| soft_delete_contact_form(conn, post_id)).await {
        Ok(archived) => Ok(message(archived.id, "Post deleted successfully")),
        Err(StoreError::NotFound(_)) => Err(api_error(Status::NotFound, NOT_FOUND)),
        Err(e) => {
            error!("Error deleting post with id {}: {}", post_id, e);
            Err(api_error(
                Status::InternalServerError,
                "An error occurred while deleting the post",
            ))
        }
    }
}

/// Full Update endpoint.
///
/// - **URL:** `/posts/<post_id>`
/// - **Method:** `PUT`
/// - **Purpose:** Replaces every field of an active record
///
/// Takes the same fields as `/submit`. Omitted optional fields are reset to
/// their defaults.
///
/// **Failure (HTTP 404 Not Found):** no active record with this id
///
/// **Failure (HTTP 409 Conflict):** the email belongs to another active record
#[put("/posts/<post_id>", format = "form", data = "<form>")]
pub async fn update_post_form(
    db: DbConn,
    post_id: i32,
    form: Form<ContactFormInput>,
) -> Result<Json<MessageResponse>, ApiError> {
    let input = form.into_inner();
    input
        .validate()
        .map_err(|msg| api_error(Status::UnprocessableEntity, msg))?;
    update(db, post_id, input.into(), "Post updated successfully").await
}

#[put("/posts/<post_id>", format = "json", data = "<body>")]
pub async fn update_post_json(
    db: DbConn,
    post_id: i32,
    body: LoggedJson<ContactFormInput>,
) -> Result<Json<MessageResponse>, ApiError> {
    let input = body.into_inner();
    input
        .validate()
        .map_err(|msg| api_error(Status::UnprocessableEntity, msg))?;
    update(db, post_id, input.into(), "Post updated successfully").await
}

/// Partial Update endpoint.
///
/// - **URL:** `/posts/<post_id>`
/// - **Method:** `PATCH`
/// - **Purpose:** Updates only the supplied fields of an active record
///
/// Any subset of `fullname`, `email`, `gender`, `newsletter` and `comment`
/// may be sent; the rest keep their stored values.
#[patch("/posts/<post_id>", format = "form", data = "<form>")]
pub async fn patch_post_form(
    db: DbConn,
    post_id: i32,
    form: Form<ContactFormChangesForm>,
) -> Result<Json<MessageResponse>, ApiError> {
    update(db, post_id, form.into_inner().into(), "Post partially updated successfully").await
}

#[patch("/posts/<post_id>", format = "json", data = "<body>")]
pub async fn patch_post_json(
    db: DbConn,
    post_id: i32,
    body: LoggedJson<ContactFormChanges>,
) -> Result<Json<MessageResponse>, ApiError> {
    update(db, post_id, body.into_inner(), "Post partially updated successfully").await
}

pub fn routes() -> Vec<Route> {
    routes![
        submit_form,
        submit_json,
        list_posts,
        read_post,
        delete_post,
        update_post_form,
        update_post_json,
        patch_post_form,
        patch_post_json
    ]
}

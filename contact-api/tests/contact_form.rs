use rocket::http::{ContentType, Status};
use rocket::local::asynchronous::Client;
use serde_json::json;

use contact_api::api::status::HealthStatus;
use contact_api::api::{ErrorResponse, MessageResponse};
use contact_api::models::ContactForm;
use contact_api::orm::testing::test_rocket;

async fn client() -> Client {
    Client::tracked(test_rocket())
        .await
        .expect("valid rocket instance")
}

/// Posts an url-encoded form to /submit and returns the new record's id.
async fn submit_form(client: &Client, body: &str) -> i32 {
    let response = client
        .post("/submit")
        .header(ContentType::Form)
        .body(body)
        .dispatch()
        .await;
    assert_eq!(response.status(), Status::Created);
    let created: MessageResponse = response.into_json().await.expect("valid JSON response");
    created.id
}

async fn read_post(client: &Client, id: i32) -> ContactForm {
    let response = client.get(format!("/posts/{}", id)).dispatch().await;
    assert_eq!(response.status(), Status::Ok);
    response.into_json().await.expect("valid contact form JSON")
}

#[rocket::async_test]
async fn test_submit_form_and_read_back() {
    let client = client().await;

    let response = client
        .post("/submit")
        .header(ContentType::Form)
        .body("fullname=Ada%20Lovelace&email=ada%40example.com&gender=female")
        .dispatch()
        .await;
    assert_eq!(response.status(), Status::Created);

    let location = response
        .headers()
        .get_one("Location")
        .expect("Location header should be set")
        .to_string();
    let created: MessageResponse = response.into_json().await.expect("valid JSON response");
    assert_eq!(created.message, "Form submitted successfully!");
    assert_eq!(location, format!("/posts/{}", created.id));

    let post = read_post(&client, created.id).await;
    assert_eq!(post.id, created.id);
    assert_eq!(post.fullname, "Ada Lovelace");
    assert_eq!(post.email, "ada@example.com");
    assert_eq!(post.gender, "female");
    assert!(!post.newsletter, "newsletter defaults to false");
    assert_eq!(post.comment, "", "comment defaults to empty");
}

#[rocket::async_test]
async fn test_submit_json() {
    let client = client().await;

    let response = client
        .post("/submit")
        .json(&json!({
            "fullname": "Grace Hopper",
            "email": "grace@example.com",
            "gender": "female",
            "newsletter": true,
            "comment": "Compilers!"
        }))
        .dispatch()
        .await;
    assert_eq!(response.status(), Status::Created);
    let created: MessageResponse = response.into_json().await.expect("valid JSON response");

    let post = read_post(&client, created.id).await;
    assert!(post.newsletter);
    assert_eq!(post.comment, "Compilers!");
}

#[rocket::async_test]
async fn test_submit_duplicate_email_is_rejected() {
    let client = client().await;
    submit_form(&client, "fullname=A&email=a%40x.com&gender=f").await;

    let response = client
        .post("/submit")
        .header(ContentType::Form)
        .body("fullname=B&email=a%40x.com&gender=m")
        .dispatch()
        .await;
    assert_eq!(response.status(), Status::BadRequest);
    let err: ErrorResponse = response.into_json().await.expect("valid error JSON");
    assert_eq!(err.error, "Email already registered");

    let response = client.get("/posts").dispatch().await;
    let posts: Vec<ContactForm> = response.into_json().await.expect("valid list JSON");
    assert_eq!(posts.len(), 1);
    assert_eq!(posts[0].fullname, "A");
}

#[rocket::async_test]
async fn test_submit_missing_required_field() {
    let client = client().await;

    let response = client
        .post("/submit")
        .header(ContentType::Form)
        .body("fullname=A&email=a%40x.com")
        .dispatch()
        .await;
    assert_eq!(response.status(), Status::UnprocessableEntity);

    let response = client
        .post("/submit")
        .json(&json!({ "fullname": "A", "gender": "f" }))
        .dispatch()
        .await;
    assert_eq!(response.status(), Status::UnprocessableEntity);
}

#[rocket::async_test]
async fn test_submit_invalid_fields() {
    let client = client().await;

    let response = client
        .post("/submit")
        .header(ContentType::Form)
        .body("fullname=%20%20&email=a%40x.com&gender=f")
        .dispatch()
        .await;
    assert_eq!(response.status(), Status::UnprocessableEntity);
    let err: ErrorResponse = response.into_json().await.expect("valid error JSON");
    assert_eq!(err.error, "Field 'fullname' is required");

    let long_comment = "x".repeat(501);
    let response = client
        .post("/submit")
        .json(&json!({
            "fullname": "A",
            "email": "a@x.com",
            "gender": "f",
            "comment": long_comment
        }))
        .dispatch()
        .await;
    assert_eq!(response.status(), Status::UnprocessableEntity);

    let response = client.get("/posts").dispatch().await;
    let posts: Vec<ContactForm> = response.into_json().await.expect("valid list JSON");
    assert!(posts.is_empty());
}

#[rocket::async_test]
async fn test_read_missing_post() {
    let client = client().await;

    let response = client.get("/posts/999").dispatch().await;
    assert_eq!(response.status(), Status::NotFound);
    let err: ErrorResponse = response.into_json().await.expect("valid error JSON");
    assert_eq!(err.error, "Post was not found");
}

#[rocket::async_test]
async fn test_full_update_replaces_every_field() {
    let client = client().await;
    let id = submit_form(
        &client,
        "fullname=A&email=a%40x.com&gender=f&newsletter=true&comment=first",
    )
    .await;

    let response = client
        .put(format!("/posts/{}", id))
        .header(ContentType::Form)
        .body("fullname=B&email=b%40x.com&gender=m")
        .dispatch()
        .await;
    assert_eq!(response.status(), Status::Ok);
    let body: MessageResponse = response.into_json().await.expect("valid JSON response");
    assert_eq!(body.message, "Post updated successfully");

    let post = read_post(&client, id).await;
    assert_eq!(post.fullname, "B");
    assert_eq!(post.email, "b@x.com");
    assert_eq!(post.gender, "m");
    assert!(!post.newsletter);
    assert_eq!(post.comment, "");
}

#[rocket::async_test]
async fn test_full_update_requires_fields() {
    let client = client().await;
    let id = submit_form(&client, "fullname=A&email=a%40x.com&gender=f").await;

    let response = client
        .put(format!("/posts/{}", id))
        .json(&json!({ "fullname": "B" }))
        .dispatch()
        .await;
    assert_eq!(response.status(), Status::UnprocessableEntity);
    assert_eq!(read_post(&client, id).await.fullname, "A");
}

#[rocket::async_test]
async fn test_partial_update_changes_only_supplied_fields() {
    let client = client().await;
    let id = submit_form(
        &client,
        "fullname=A&email=a%40x.com&gender=f&newsletter=true&comment=first",
    )
    .await;

    let response = client
        .patch(format!("/posts/{}", id))
        .header(ContentType::Form)
        .body("comment=second")
        .dispatch()
        .await;
    assert_eq!(response.status(), Status::Ok);
    let body: MessageResponse = response.into_json().await.expect("valid JSON response");
    assert_eq!(body.message, "Post partially updated successfully");

    let post = read_post(&client, id).await;
    assert_eq!(post.comment, "second");
    assert_eq!(post.fullname, "A");
    assert_eq!(post.email, "a@x.com");
    assert_eq!(post.gender, "f");
    assert!(post.newsletter);

    let response = client
        .patch(format!("/posts/{}", id))
        .json(&json!({ "newsletter": false }))
        .dispatch()
        .await;
    assert_eq!(response.status(), Status::Ok);

    let post = read_post(&client, id).await;
    assert!(!post.newsletter);
    assert_eq!(post.comment, "second");
}

#[rocket::async_test]
async fn test_partial_update_rejects_malformed_newsletter() {
    let client = client().await;
    let id = submit_form(&client, "fullname=A&email=a%40x.com&gender=f&newsletter=true").await;

    let response = client
        .patch(format!("/posts/{}", id))
        .header(ContentType::Form)
        .body("newsletter=maybe")
        .dispatch()
        .await;
    assert_eq!(response.status(), Status::UnprocessableEntity);

    let response = client
        .patch(format!("/posts/{}", id))
        .json(&json!({ "newsletter": "maybe" }))
        .dispatch()
        .await;
    assert_eq!(response.status(), Status::UnprocessableEntity);

    // A malformed value next to a valid one rejects the whole form
    let response = client
        .patch(format!("/posts/{}", id))
        .header(ContentType::Form)
        .body("comment=changed&newsletter=maybe")
        .dispatch()
        .await;
    assert_eq!(response.status(), Status::UnprocessableEntity);

    let post = read_post(&client, id).await;
    assert!(post.newsletter);
    assert_eq!(post.comment, "");
}

#[rocket::async_test]
async fn test_update_missing_post() {
    let client = client().await;

    let response = client
        .put("/posts/404")
        .header(ContentType::Form)
        .body("fullname=A&email=a%40x.com&gender=f")
        .dispatch()
        .await;
    assert_eq!(response.status(), Status::NotFound);

    let response = client
        .patch("/posts/404")
        .json(&json!({ "comment": "hello" }))
        .dispatch()
        .await;
    assert_eq!(response.status(), Status::NotFound);
}

#[rocket::async_test]
async fn test_update_to_registered_email_conflicts() {
    let client = client().await;
    submit_form(&client, "fullname=A&email=a%40x.com&gender=f").await;
    let id = submit_form(&client, "fullname=B&email=b%40x.com&gender=m").await;

    let response = client
        .patch(format!("/posts/{}", id))
        .json(&json!({ "email": "a@x.com" }))
        .dispatch()
        .await;
    assert_eq!(response.status(), Status::Conflict);
    assert_eq!(read_post(&client, id).await.email, "b@x.com");
}

#[rocket::async_test]
async fn test_list_posts_in_id_order() {
    let client = client().await;
    let first = submit_form(&client, "fullname=A&email=a%40x.com&gender=f").await;
    let second = submit_form(&client, "fullname=B&email=b%40x.com&gender=m").await;

    let response = client.get("/posts").dispatch().await;
    assert_eq!(response.status(), Status::Ok);
    let posts: Vec<ContactForm> = response.into_json().await.expect("valid list JSON");
    let ids: Vec<i32> = posts.iter().map(|p| p.id).collect();
    assert_eq!(ids, vec![first, second]);
}

#[rocket::async_test]
async fn test_health_status() {
    let client = client().await;

    let response = client.get("/status").dispatch().await;
    assert_eq!(response.status(), Status::Ok);
    let status: HealthStatus = response.into_json().await.expect("valid status JSON");
    assert_eq!(status.status, "running");
    assert_eq!(status.version, env!("CARGO_PKG_VERSION"));
}

#[rocket::async_test]
async fn test_unknown_route_uses_json_catcher() {
    let client = client().await;

    let response = client.get("/nowhere").dispatch().await;
    assert_eq!(response.status(), Status::NotFound);
    let body: serde_json::Value = response.into_json().await.expect("valid JSON");
    assert_eq!(body["status"], 404);
    assert_eq!(body["path"], "/nowhere");
}

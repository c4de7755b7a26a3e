#[macro_use]
extern crate rocket;

use rocket::figment::value::Map;
use rocket::figment::{
    Figment,
    providers::{Env, Format, Toml},
};
use rocket::fs::{FileServer, Options};
use rocket::request::Request;
use rocket::serde::json::{Json, Value, json};
use rocket::{Build, Rocket};

pub mod api;
pub mod error;
pub mod logged_json;
pub mod models;
pub mod orm;
pub use orm::DbConn;
pub mod schema;

#[cfg(test)]
mod generate_types;

pub mod built_info {
    include!(concat!(env!("OUT_DIR"), "/built.rs"));
}

#[catch(400)]
fn bad_request(req: &Request) -> Json<Value> {
    Json(json!({
        "error": "Bad Request",
        "path": req.uri().path().to_string(),
        "status": 400
    }))
}

#[catch(404)]
fn not_found(req: &Request) -> Json<Value> {
    Json(json!({
        "error": "Not Found",
        "path": req.uri().path().to_string(),
        "status": 404
    }))
}

#[catch(422)]
fn unprocessable_entity(req: &Request) -> Json<Value> {
    Json(json!({
        "error": "Unprocessable Entity",
        "path": req.uri().path().to_string(),
        "status": 422
    }))
}

#[catch(500)]
fn internal_server_error(req: &Request) -> Json<Value> {
    Json(json!({
        "error": "Internal Server Error",
        "path": req.uri().path().to_string(),
        "status": 500
    }))
}

#[catch(default)]
fn default_catcher(status: rocket::http::Status, req: &Request) -> Json<Value> {
    Json(json!({
        "error": status.reason().unwrap_or("Unknown Error"),
        "path": req.uri().path().to_string(),
        "status": status.code
    }))
}

pub fn mount_routes(rocket: Rocket<Build>) -> Rocket<Build> {
    rocket.mount("/", api::routes())
}

pub fn register_catchers(rocket: Rocket<Build>) -> Rocket<Build> {
    rocket.register(
        "/",
        catchers![
            bad_request,
            not_found,
            unprocessable_entity,
            internal_server_error,
            default_catcher
        ],
    )
}

fn log_rocket_info(rocket: &Rocket<Build>) {
    let figment = rocket.figment();

    if let Ok(address) = figment.extract_inner::<String>("address") {
        info!("Rocket is running at: {}", address);
    }

    if let Ok(port) = figment.extract_inner::<u16>("port") {
        info!("Rocket is listening on port: {}", port);
    }

    match figment.extract_inner::<Map<String, Value>>("databases.sqlite_db") {
        Ok(db_config) => {
            if let Some(Value::String(url)) = db_config.get("url") {
                info!("Database URL: {}", url);
            } else {
                warn!("Database URL not found in configuration");
            }
        }
        Err(e) => {
            warn!("Failed to extract database configuration: {}", e);
        }
    }
}

/// Builds the production Rocket instance.
///
/// Configuration is layered: Rocket defaults, then `Rocket.toml`, then
/// `ROCKET_*` environment variables. `DATABASE_URL` (read from the
/// environment or a `.env` file) overrides `databases.sqlite_db.url`.
/// Tests use `orm::testing::test_rocket` instead.
pub fn rocket() -> Rocket<Build> {
    dotenvy::dotenv().ok();

    let mut figment = Figment::from(rocket::Config::default())
        .merge(Toml::file("Rocket.toml").nested())
        .merge(Env::prefixed("ROCKET_").global());
    if let Ok(database_url) = std::env::var("DATABASE_URL") {
        figment = figment.merge(("databases.sqlite_db.url", database_url));
    }

    let rocket = rocket::custom(figment)
        .attach(DbConn::fairing())
        .attach(orm::set_journal_mode_fairing())
        .attach(orm::run_migrations_fairing());

    log_rocket_info(&rocket);

    let static_dir =
        std::env::var("CONTACT_STATIC_DIR").unwrap_or_else(|_| "static".to_string());
    register_catchers(mount_routes(rocket)).mount(
        "/",
        FileServer::new(static_dir, Options::Index | Options::Missing).rank(10),
    )
}

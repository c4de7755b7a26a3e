//! JSON data guard that logs each accepted request body.
//!
//! `LoggedJson<T>` parses exactly like Rocket's `Json<T>` and then writes the
//! method, path and re-serialized payload to the Rocket log. Parse failures
//! are passed through untouched so the 400/422 catchers still answer them.

use rocket::serde::json::Json;
use rocket::{
    Data, Request,
    data::{self, FromData},
};
use serde::{Deserialize, Serialize};

pub struct LoggedJson<T>(pub T);

impl<T> LoggedJson<T> {
    /// Extract the inner value
    pub fn into_inner(self) -> T {
        self.0
    }
}

impl<T> std::ops::Deref for LoggedJson<T> {
    type Target = T;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<T: std::fmt::Debug> std::fmt::Debug for LoggedJson<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

#[rocket::async_trait]
impl<'r, T: Deserialize<'r> + Serialize> FromData<'r> for LoggedJson<T> {
    type Error = rocket::serde::json::Error<'r>;

    async fn from_data(req: &'r Request<'_>, data: Data<'r>) -> data::Outcome<'r, Self> {
        match Json::<T>::from_data(req, data).await {
            data::Outcome::Success(json_data) => {
                let body = serde_json::to_string(&json_data.0)
                    .unwrap_or_else(|_| "<failed to serialize>".to_string());
                info!(
                    "Request body: {} {} | {}",
                    req.method().as_str(),
                    req.uri().path(),
                    body
                );
                data::Outcome::Success(LoggedJson(json_data.into_inner()))
            }
            data::Outcome::Error(e) => data::Outcome::Error(e),
            data::Outcome::Forward(f) => data::Outcome::Forward(f),
        }
    }
}

use diesel::prelude::*;
use rocket::form::Strict;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::schema::contact_forms;

pub const MAX_FULLNAME_LEN: usize = 100;
pub const MAX_EMAIL_LEN: usize = 100;
pub const MAX_GENDER_LEN: usize = 10;
pub const MAX_COMMENT_LEN: usize = 500;

/// An active contact form submission.
#[derive(
    Debug, Clone, PartialEq, Queryable, Selectable, Identifiable, Insertable, Serialize, Deserialize, TS,
)]
#[diesel(table_name = contact_forms)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
#[ts(export)]
pub struct ContactForm {
    pub id: i32,
    pub fullname: String,
    pub email: String, // Unique among active records
    pub gender: String,
    pub newsletter: bool,
    pub comment: String,
}

#[derive(Insertable, Debug, Clone)]
#[diesel(table_name = contact_forms)]
pub struct NewContactForm {
    pub fullname: String,
    pub email: String,
    pub gender: String,
    pub newsletter: bool,
    pub comment: String,
}

/// Submission and full-update payload. Accepted both as an HTML form and as JSON.
#[derive(Debug, Clone, FromForm, Deserialize, Serialize, TS)]
#[ts(export)]
pub struct ContactFormInput {
    pub fullname: String,
    pub email: String,
    pub gender: String,
    #[field(default = false)]
    #[serde(default)]
    pub newsletter: bool,
    #[field(default = String::new())]
    #[serde(default)]
    pub comment: String,
}

/// Field-by-field changes to an active record. `None` leaves the column
/// untouched, so the same changeset serves full and partial updates.
#[derive(Debug, Clone, Default, PartialEq, AsChangeset, Deserialize, Serialize, TS)]
#[diesel(table_name = contact_forms)]
#[ts(export)]
pub struct ContactFormChanges {
    pub fullname: Option<String>,
    pub email: Option<String>,
    pub gender: Option<String>,
    pub newsletter: Option<bool>,
    pub comment: Option<String>,
}

/// Form-encoded body of a partial update.
///
/// A plain `Option<bool>` form field turns an unparseable value into `None`;
/// `Strict` makes a present but malformed `newsletter` fail the form instead.
#[derive(Debug, FromForm)]
pub struct ContactFormChangesForm {
    pub fullname: Option<String>,
    pub email: Option<String>,
    pub gender: Option<String>,
    pub newsletter: Option<Strict<bool>>,
    pub comment: Option<String>,
}

impl From<ContactFormChangesForm> for ContactFormChanges {
    fn from(form: ContactFormChangesForm) -> Self {
        ContactFormChanges {
            fullname: form.fullname,
            email: form.email,
            gender: form.gender,
            newsletter: form.newsletter.map(Strict::into_inner),
            comment: form.comment,
        }
    }
}

fn check_required(field: &str, value: &str, max_len: usize) -> Result<(), String> {
    if value.trim().is_empty() {
        return Err(format!("Field '{}' is required", field));
    }
    check_len(field, value, max_len)
}

fn check_len(field: &str, value: &str, max_len: usize) -> Result<(), String> {
    if value.chars().count() > max_len {
        return Err(format!(
            "Field '{}' must be at most {} characters",
            field, max_len
        ));
    }
    Ok(())
}

impl ContactFormInput {
    /// Checks required fields are present and every field fits its column.
    pub fn validate(&self) -> Result<(), String> {
        check_required("fullname", &self.fullname, MAX_FULLNAME_LEN)?;
        check_required("email", &self.email, MAX_EMAIL_LEN)?;
        check_required("gender", &self.gender, MAX_GENDER_LEN)?;
        check_len("comment", &self.comment, MAX_COMMENT_LEN)
    }
}

impl From<ContactFormInput> for NewContactForm {
    fn from(input: ContactFormInput) -> Self {
        NewContactForm {
            fullname: input.fullname,
            email: input.email,
            gender: input.gender,
            newsletter: input.newsletter,
            comment: input.comment,
        }
    }
}

/// A full update replaces every column, including the optional ones.
impl From<ContactFormInput> for ContactFormChanges {
    fn from(input: ContactFormInput) -> Self {
        ContactFormChanges {
            fullname: Some(input.fullname),
            email: Some(input.email),
            gender: Some(input.gender),
            newsletter: Some(input.newsletter),
            comment: Some(input.comment),
        }
    }
}

impl ContactFormChanges {
    pub fn is_empty(&self) -> bool {
        self.fullname.is_none()
            && self.email.is_none()
            && self.gender.is_none()
            && self.newsletter.is_none()
            && self.comment.is_none()
    }

    /// Supplied required fields may not be blank; supplied fields must fit their column.
    pub fn validate(&self) -> Result<(), String> {
        if let Some(fullname) = &self.fullname {
            check_required("fullname", fullname, MAX_FULLNAME_LEN)?;
        }
        if let Some(email) = &self.email {
            check_required("email", email, MAX_EMAIL_LEN)?;
        }
        if let Some(gender) = &self.gender {
            check_required("gender", gender, MAX_GENDER_LEN)?;
        }
        if let Some(comment) = &self.comment {
            check_len("comment", comment, MAX_COMMENT_LEN)?;
        }
        Ok(())
    }
}

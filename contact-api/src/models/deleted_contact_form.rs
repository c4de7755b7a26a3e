use chrono::NaiveDateTime;
use diesel::prelude::*;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::models::ContactForm;

/// A soft-deleted contact form. `id` is the id the record had while active.
#[derive(Debug, Clone, PartialEq, Queryable, Selectable, Insertable, Serialize, Deserialize, TS)]
#[diesel(table_name = crate::schema::deleted_contact_forms)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
#[ts(export)]
pub struct DeletedContactForm {
    pub id: i32,
    pub fullname: String,
    pub email: String,
    pub gender: String,
    pub newsletter: bool,
    pub comment: String,
    #[ts(type = "string")]
    pub deleted_at: NaiveDateTime,
}

impl DeletedContactForm {
    /// Archives an active record, stamping it with the deletion time.
    pub fn archive(form: ContactForm, deleted_at: NaiveDateTime) -> Self {
        DeletedContactForm {
            id: form.id,
            fullname: form.fullname,
            email: form.email,
            gender: form.gender,
            newsletter: form.newsletter,
            comment: form.comment,
            deleted_at,
        }
    }

    /// The active record this archive restores to, under the same id.
    pub fn into_active(self) -> ContactForm {
        ContactForm {
            id: self.id,
            fullname: self.fullname,
            email: self.email,
            gender: self.gender,
            newsletter: self.newsletter,
            comment: self.comment,
        }
    }
}

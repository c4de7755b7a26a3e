use diesel::QueryableByName;
use diesel::prelude::*;
use diesel::sql_types::BigInt;

use crate::error::{StoreError, StoreResult};
use crate::models::{ContactForm, ContactFormChanges, NewContactForm};

#[derive(QueryableByName)]
struct LastInsertRowId {
    #[diesel(sql_type = BigInt)]
    last_insert_rowid: i64,
}

fn email_taken(email: &str) -> String {
    format!("email '{}' is already registered", email)
}

/// Try to find an active contact form by id.
/// Returns Ok(Some(ContactForm)) if found, Ok(None) if not, Err on DB error.
pub fn find_contact_form(
    conn: &mut SqliteConnection,
    form_id: i32,
) -> Result<Option<ContactForm>, diesel::result::Error> {
    use crate::schema::contact_forms::dsl::*;
    contact_forms
        .filter(id.eq(form_id))
        .first::<ContactForm>(conn)
        .optional()
}

/// Returns the active contact form with the given id, or `NotFound`.
pub fn get_contact_form(conn: &mut SqliteConnection, form_id: i32) -> StoreResult<ContactForm> {
    find_contact_form(conn, form_id)?
        .ok_or_else(|| StoreError::NotFound(format!("contact form {}", form_id)))
}

/// Try to find an active contact form by email (exact match).
pub fn get_contact_form_by_email(
    conn: &mut SqliteConnection,
    form_email: &str,
) -> Result<Option<ContactForm>, diesel::result::Error> {
    use crate::schema::contact_forms::dsl::*;
    contact_forms
        .filter(email.eq(form_email))
        .first::<ContactForm>(conn)
        .optional()
}

/// Returns all active contact forms in ascending order by id.
pub fn get_all_contact_forms(
    conn: &mut SqliteConnection,
) -> Result<Vec<ContactForm>, diesel::result::Error> {
    use crate::schema::contact_forms::dsl::*;
    contact_forms.order(id.asc()).load::<ContactForm>(conn)
}

/// Insert a new contact form.
///
/// Fails with `Conflict` if an active record already uses the email. The
/// check and the insert share one immediate transaction, and the UNIQUE
/// column constraint backs it up.
pub fn insert_contact_form(
    conn: &mut SqliteConnection,
    new_form: NewContactForm,
) -> StoreResult<ContactForm> {
    use crate::schema::contact_forms::dsl::*;

    conn.immediate_transaction(|conn| {
        if get_contact_form_by_email(conn, &new_form.email)?.is_some() {
            return Err(StoreError::Conflict(email_taken(&new_form.email)));
        }

        diesel::insert_into(contact_forms)
            .values(&new_form)
            .execute(conn)
            .map_err(|e| StoreError::from_write(e, email_taken(&new_form.email)))?;

        let last_id = diesel::sql_query("SELECT last_insert_rowid() as last_insert_rowid")
            .get_result::<LastInsertRowId>(conn)?
            .last_insert_rowid;

        let last_id = i32::try_from(last_id)
            .map_err(|e| diesel::result::Error::DeserializationError(Box::new(e)))?;

        let form = contact_forms
            .filter(id.eq(last_id))
            .first::<ContactForm>(conn)?;
        Ok(form)
    })
}

/// Applies `changes` to an active contact form and returns the updated row.
///
/// Only the `Some` fields are written. Fails with `NotFound` if the record is
/// not active and with `Conflict` if the new email belongs to another active
/// record. An empty changeset returns the record unchanged.
pub fn update_contact_form(
    conn: &mut SqliteConnection,
    form_id: i32,
    changes: &ContactFormChanges,
) -> StoreResult<ContactForm> {
    use crate::schema::contact_forms::dsl::*;

    conn.immediate_transaction(|conn| {
        let current = get_contact_form(conn, form_id)?;
        if changes.is_empty() {
            return Ok(current);
        }

        if let Some(new_email) = &changes.email {
            let taken = contact_forms
                .filter(email.eq(new_email))
                .filter(id.ne(form_id))
                .select(id)
                .first::<i32>(conn)
                .optional()?;
            if taken.is_some() {
                return Err(StoreError::Conflict(email_taken(new_email)));
            }
        }

        diesel::update(contact_forms.filter(id.eq(form_id)))
            .set(changes)
            .execute(conn)
            .map_err(|e| {
                StoreError::from_write(e, email_taken(changes.email.as_deref().unwrap_or_default()))
            })?;

        get_contact_form(conn, form_id)
    })
}

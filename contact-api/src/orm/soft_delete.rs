//! Moves contact forms between the active and the deleted table.
//!
//! Each move is a single `BEGIN IMMEDIATE` transaction covering the read, the
//! insert into the target table and the removal from the source table. Any
//! error returned inside the transaction rolls all of it back, so a record is
//! always observed in exactly one of the two tables.

use chrono::Utc;
use diesel::prelude::*;

use crate::error::{StoreError, StoreResult};
use crate::models::{ContactForm, DeletedContactForm};
use crate::orm::contact_form::{find_contact_form, get_contact_form, get_contact_form_by_email};
use crate::orm::deleted_contact_form::{find_deleted_contact_form, get_deleted_contact_form};
use crate::schema::{contact_forms, deleted_contact_forms};

/// Soft-deletes an active contact form.
///
/// The record is copied into `deleted_contact_forms` under the same id,
/// stamped with the current UTC time, and removed from `contact_forms`.
///
/// # Returns
/// * `Ok(DeletedContactForm)` - The archived record
/// * `Err(StoreError::NotFound)` - No active record with this id
/// * `Err(StoreError::Transient)` - Database error; nothing was moved
pub fn soft_delete_contact_form(
    conn: &mut SqliteConnection,
    form_id: i32,
) -> StoreResult<DeletedContactForm> {
    conn.immediate_transaction(|conn| {
        let form = get_contact_form(conn, form_id)?;

        // A leftover archive under this id means an earlier move was only half
        // applied. The active row is authoritative.
        if let Some(stale) = find_deleted_contact_form(conn, form_id)? {
            warn!(
                "Replacing stale deleted record {} (deleted_at {}) while deleting the active one",
                stale.id, stale.deleted_at
            );
            diesel::delete(deleted_contact_forms::table.filter(deleted_contact_forms::id.eq(form_id)))
                .execute(conn)?;
        }

        let archived = DeletedContactForm::archive(form, Utc::now().naive_utc());
        diesel::insert_into(deleted_contact_forms::table)
            .values(&archived)
            .execute(conn)?;

        diesel::delete(contact_forms::table.filter(contact_forms::id.eq(form_id))).execute(conn)?;

        info!("Soft-deleted contact form {}", form_id);
        Ok(archived)
    })
}

/// Restores a soft-deleted contact form to the active table under its
/// original id.
///
/// # Returns
/// * `Ok(ContactForm)` - The re-activated record
/// * `Err(StoreError::NotFound)` - Nothing archived under this id
/// * `Err(StoreError::Conflict)` - An active record already holds the email or the id
/// * `Err(StoreError::Transient)` - Database error; nothing was moved
pub fn restore_contact_form(conn: &mut SqliteConnection, form_id: i32) -> StoreResult<ContactForm> {
    conn.immediate_transaction(|conn| {
        let archived = get_deleted_contact_form(conn, form_id)?;

        if let Some(existing) = get_contact_form_by_email(conn, &archived.email)? {
            return Err(StoreError::Conflict(format!(
                "email '{}' is already registered by active contact form {}",
                archived.email, existing.id
            )));
        }
        if find_contact_form(conn, form_id)?.is_some() {
            return Err(StoreError::Conflict(format!(
                "id {} is already in use by an active contact form",
                form_id
            )));
        }

        let restored = archived.into_active();
        diesel::insert_into(contact_forms::table)
            .values(&restored)
            .execute(conn)
            .map_err(|e| {
                StoreError::from_write(e, format!("email '{}' is already registered", restored.email))
            })?;

        diesel::delete(
            deleted_contact_forms::table.filter(deleted_contact_forms::id.eq(form_id)),
        )
        .execute(conn)?;

        info!("Restored contact form {}", form_id);
        Ok(restored)
    })
}

use diesel::prelude::*;

use crate::error::{StoreError, StoreResult};
use crate::models::DeletedContactForm;

/// Try to find a soft-deleted contact form by the id it had while active.
pub fn find_deleted_contact_form(
    conn: &mut SqliteConnection,
    form_id: i32,
) -> Result<Option<DeletedContactForm>, diesel::result::Error> {
    use crate::schema::deleted_contact_forms::dsl::*;
    deleted_contact_forms
        .filter(id.eq(form_id))
        .select(DeletedContactForm::as_select())
        .first(conn)
        .optional()
}

/// Returns the soft-deleted contact form with the given id, or `NotFound`.
pub fn get_deleted_contact_form(
    conn: &mut SqliteConnection,
    form_id: i32,
) -> StoreResult<DeletedContactForm> {
    find_deleted_contact_form(conn, form_id)?.ok_or_else(|| {
        StoreError::NotFound(format!("contact form {} in deleted records", form_id))
    })
}

/// Returns all soft-deleted contact forms in ascending order by id.
pub fn get_all_deleted_contact_forms(
    conn: &mut SqliteConnection,
) -> Result<Vec<DeletedContactForm>, diesel::result::Error> {
    use crate::schema::deleted_contact_forms::dsl::*;
    deleted_contact_forms
        .order(id.asc())
        .select(DeletedContactForm::as_select())
        .load(conn)
}

/// Permanently removes a soft-deleted contact form.
/// Returns the purged record, or `NotFound` if nothing was archived under the id.
pub fn purge_deleted_contact_form(
    conn: &mut SqliteConnection,
    form_id: i32,
) -> StoreResult<DeletedContactForm> {
    use crate::schema::deleted_contact_forms::dsl::*;

    conn.immediate_transaction(|conn| {
        let archived = get_deleted_contact_form(conn, form_id)?;
        diesel::delete(deleted_contact_forms.filter(id.eq(form_id))).execute(conn)?;
        Ok(archived)
    })
}

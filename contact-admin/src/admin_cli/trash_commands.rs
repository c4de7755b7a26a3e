use clap::Subcommand;
use contact_api::{
    models::DeletedContactForm,
    orm::{
        deleted_contact_form::{
            get_all_deleted_contact_forms, get_deleted_contact_form, purge_deleted_contact_form,
        },
        soft_delete::restore_contact_form,
    },
};
use diesel::sqlite::SqliteConnection;

use super::utils::{confirm, search_filter};

#[derive(Subcommand)]
pub enum TrashAction {
    #[command(about = "List deleted contact forms, optionally filtered by name or email")]
    Ls {
        #[arg(help = "Search term (regex by default, use -F for fixed string)")]
        search_term: Option<String>,
        #[arg(
            short = 'F',
            long = "fixed-string",
            help = "Treat search term as fixed string instead of regex"
        )]
        fixed_string: bool,
    },
    #[command(about = "Restore a deleted contact form under its original ID")]
    Restore {
        #[arg(help = "Contact form ID")]
        id: i32,
    },
    #[command(about = "Permanently remove a deleted contact form")]
    Purge {
        #[arg(help = "Contact form ID")]
        id: i32,
        #[arg(short = 'y', long = "yes", help = "Skip confirmation prompt")]
        yes: bool,
    },
}

pub fn handle_trash_command_with_conn(
    conn: &mut SqliteConnection,
    action: TrashAction,
) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        TrashAction::Ls { search_term, fixed_string } => {
            trash_ls_impl(conn, search_term, fixed_string)?;
        }
        TrashAction::Restore { id } => {
            trash_restore_impl(conn, id)?;
        }
        TrashAction::Purge { id, yes } => {
            trash_purge_impl(conn, id, yes)?;
        }
    }
    Ok(())
}

pub fn matching_deleted_contact_forms(
    conn: &mut SqliteConnection,
    search_term: Option<&str>,
    fixed_string: bool,
) -> Result<Vec<DeletedContactForm>, Box<dyn std::error::Error>> {
    let filter = search_filter(search_term, fixed_string)?;
    let archived = get_all_deleted_contact_forms(conn)?;
    Ok(match filter {
        Some(filter) => archived
            .into_iter()
            .filter(|form| filter.matches(&form.fullname, &form.email))
            .collect(),
        None => archived,
    })
}

pub fn trash_ls_impl(
    conn: &mut SqliteConnection,
    search_term: Option<String>,
    fixed_string: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let archived = matching_deleted_contact_forms(conn, search_term.as_deref(), fixed_string)?;

    if archived.is_empty() {
        println!("No deleted contact forms found.");
    } else {
        println!("Deleted contact forms:");
        for form in archived {
            println!(
                "  ID: {}, Name: {}, Email: {}, Deleted: {}",
                form.id,
                form.fullname,
                form.email,
                form.deleted_at.format("%Y-%m-%d %H:%M:%S")
            );
        }
    }

    Ok(())
}

pub fn trash_restore_impl(
    conn: &mut SqliteConnection,
    form_id: i32,
) -> Result<(), Box<dyn std::error::Error>> {
    let restored = restore_contact_form(conn, form_id)?;

    println!("Contact form restored successfully!");
    println!("ID: {}", restored.id);
    println!("Name: {}", restored.fullname);
    println!("Email: {}", restored.email);

    Ok(())
}

pub fn trash_purge_impl(
    conn: &mut SqliteConnection,
    form_id: i32,
    yes: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let archived = get_deleted_contact_form(conn, form_id)?;

    if !yes {
        println!(
            "  ID: {}, Name: {}, Email: {}, Deleted: {}",
            archived.id, archived.fullname, archived.email, archived.deleted_at
        );
        if !confirm("Permanently delete this contact form? This cannot be undone.")? {
            println!("Operation cancelled.");
            return Ok(());
        }
    }

    let purged = purge_deleted_contact_form(conn, form_id)?;
    println!("Permanently deleted contact form: {} (ID: {})", purged.fullname, purged.id);

    Ok(())
}

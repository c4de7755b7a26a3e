use clap::Subcommand;
use contact_api::{
    models::ContactForm,
    orm::{
        contact_form::{get_all_contact_forms, get_contact_form},
        soft_delete::soft_delete_contact_form,
    },
};
use diesel::sqlite::SqliteConnection;

use super::utils::search_filter;

#[derive(Subcommand)]
pub enum ContactAction {
    #[command(about = "List active contact forms, optionally filtered by name or email")]
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
    #[command(about = "Show one active contact form")]
    Show {
        #[arg(help = "Contact form ID")]
        id: i32,
    },
    #[command(about = "Move a contact form to the deleted records")]
    Rm {
        #[arg(help = "Contact form ID")]
        id: i32,
    },
}

pub fn handle_contact_command_with_conn(
    conn: &mut SqliteConnection,
    action: ContactAction,
) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        ContactAction::Ls { search_term, fixed_string } => {
            contact_ls_impl(conn, search_term, fixed_string)?;
        }
        ContactAction::Show { id } => {
            contact_show_impl(conn, id)?;
        }
        ContactAction::Rm { id } => {
            contact_rm_impl(conn, id)?;
        }
    }
    Ok(())
}

/// Returns the active contact forms matching the optional search term.
pub fn matching_contact_forms(
    conn: &mut SqliteConnection,
    search_term: Option<&str>,
    fixed_string: bool,
) -> Result<Vec<ContactForm>, Box<dyn std::error::Error>> {
    let filter = search_filter(search_term, fixed_string)?;
    let forms = get_all_contact_forms(conn)?;
    Ok(match filter {
        Some(filter) => forms
            .into_iter()
            .filter(|form| filter.matches(&form.fullname, &form.email))
            .collect(),
        None => forms,
    })
}

pub fn contact_ls_impl(
    conn: &mut SqliteConnection,
    search_term: Option<String>,
    fixed_string: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let forms = matching_contact_forms(conn, search_term.as_deref(), fixed_string)?;

    if forms.is_empty() {
        println!("No contact forms found.");
    } else {
        println!("Contact forms:");
        for form in forms {
            println!(
                "  ID: {}, Name: {}, Email: {}, Newsletter: {}",
                form.id,
                form.fullname,
                form.email,
                if form.newsletter { "yes" } else { "no" }
            );
        }
    }

    Ok(())
}

pub fn contact_show_impl(
    conn: &mut SqliteConnection,
    form_id: i32,
) -> Result<(), Box<dyn std::error::Error>> {
    let form = get_contact_form(conn, form_id)?;

    println!("ID: {}", form.id);
    println!("Name: {}", form.fullname);
    println!("Email: {}", form.email);
    println!("Gender: {}", form.gender);
    println!("Newsletter: {}", if form.newsletter { "yes" } else { "no" });
    println!("Comment: {}", form.comment);

    Ok(())
}

pub fn contact_rm_impl(
    conn: &mut SqliteConnection,
    form_id: i32,
) -> Result<(), Box<dyn std::error::Error>> {
    let archived = soft_delete_contact_form(conn, form_id)?;

    println!(
        "Deleted contact form: {} (ID: {}) at {}",
        archived.fullname, archived.id, archived.deleted_at
    );
    println!("Use `contact-admin trash restore {}` to undo.", archived.id);

    Ok(())
}

use std::io::{self, Write};

use contact_api::orm::run_pending_migrations;
use diesel::{prelude::*, sqlite::SqliteConnection};
use dotenvy::dotenv;
use regex::Regex;

/// Opens the database named by `DATABASE_URL` (environment or `.env`) and
/// brings its schema up to date.
pub fn establish_connection() -> Result<SqliteConnection, Box<dyn std::error::Error>> {
    dotenv().ok();
    let database_url =
        std::env::var("DATABASE_URL").map_err(|_| "DATABASE_URL must be set")?;
    let mut conn = SqliteConnection::establish(&database_url)?;
    run_pending_migrations(&mut conn);
    Ok(conn)
}

/// Matches a record's name or email against a search term.
pub enum SearchFilter {
    Fixed(String),
    Pattern(Regex),
}

impl SearchFilter {
    pub fn new(term: &str, fixed_string: bool) -> Result<Self, Box<dyn std::error::Error>> {
        if fixed_string {
            Ok(SearchFilter::Fixed(term.to_string()))
        } else {
            let regex = Regex::new(term)
                .map_err(|e| format!("Invalid regex pattern '{}': {}", term, e))?;
            Ok(SearchFilter::Pattern(regex))
        }
    }

    pub fn matches(&self, fullname: &str, email: &str) -> bool {
        match self {
            SearchFilter::Fixed(term) => fullname.contains(term) || email.contains(term),
            SearchFilter::Pattern(regex) => regex.is_match(fullname) || regex.is_match(email),
        }
    }
}

/// Builds an optional filter from the `ls` arguments.
pub fn search_filter(
    search_term: Option<&str>,
    fixed_string: bool,
) -> Result<Option<SearchFilter>, Box<dyn std::error::Error>> {
    search_term.map(|term| SearchFilter::new(term, fixed_string)).transpose()
}

/// Asks for a y/N answer on stdin. Anything but "y" or "yes" is a no.
pub fn confirm(prompt: &str) -> Result<bool, Box<dyn std::error::Error>> {
    print!("{} [y/N]: ", prompt);
    io::stdout().flush()?;

    let mut input = String::new();
    io::stdin().read_line(&mut input)?;
    let input = input.trim().to_lowercase();
    Ok(input == "y" || input == "yes")
}

use diesel::connection::SimpleConnection;
use diesel_migrations::{EmbeddedMigrations, MigrationHarness, embed_migrations};
use rocket::fairing::AdHoc;
use rocket_sync_db_pools::{database, diesel};

pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations");

#[database("sqlite_db")]
pub struct DbConn(diesel::SqliteConnection);

/// Switches a file-backed database to write-ahead logging so readers keep
/// seeing the last committed state while a delete or restore is in flight.
///
/// The journal mode is stored in the database file, so running this on one
/// pooled connection covers the whole pool. In-memory databases ignore it.
///
/// # Arguments
/// * `conn` - A mutable reference to a SQLite database connection
pub fn set_journal_mode(conn: &mut diesel::SqliteConnection) -> Result<(), diesel::result::Error> {
    conn.batch_execute("PRAGMA journal_mode = WAL")
}

/// Creates a Rocket fairing that enables WAL journaling on ignition.
pub fn set_journal_mode_fairing() -> AdHoc {
    AdHoc::try_on_ignite("Set Journal Mode", |rocket| async {
        let Some(conn) = DbConn::get_one(&rocket).await else {
            error!("No database connection available to set the journal mode");
            return Err(rocket);
        };
        match conn.run(set_journal_mode).await {
            Ok(()) => Ok(rocket),
            Err(e) => {
                error!("Failed to set journal mode: {}", e);
                Err(rocket)
            }
        }
    })
}

/// Runs all pending database migrations on the provided connection.
///
/// # Arguments
/// * `conn` - A mutable reference to a SQLite database connection
///
/// # Panics
/// Panics if any migration fails to run
pub fn run_pending_migrations(conn: &mut diesel::SqliteConnection) {
    conn.run_pending_migrations(MIGRATIONS)
        .expect("Failed to run pending migrations");
}

/// Creates a Rocket fairing that runs database migrations on ignition.
///
/// This fairing ensures both contact form tables exist before the first
/// request is served.
pub fn run_migrations_fairing() -> AdHoc {
    AdHoc::on_ignite("Diesel Migrations", |rocket| async {
        // Get a database connection from Rocket's pool
        let conn = DbConn::get_one(&rocket).await.expect("database connection for migration");
        conn.run(|c| {
            run_pending_migrations(c);
        })
        .await;
        rocket
    })
}

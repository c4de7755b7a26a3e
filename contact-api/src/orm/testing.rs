//! Test support: in-memory databases and a Rocket instance wired to one.

use diesel::connection::SimpleConnection;
use diesel::sqlite::SqliteConnection;
use rocket::figment::{
    util::map,
    value::{Map, Value},
};
use rocket::{Build, Rocket, fairing::AdHoc};

use super::db::{DbConn, run_migrations_fairing, run_pending_migrations};

/// Configures SQLite with performance-optimized settings for testing.
///
/// Sets `synchronous = OFF`, which makes SQLite faster but less durable -
/// only use for testing. The rollback journal stays on: delete and restore
/// rely on it to undo a failed move.
///
/// # Panics
/// Panics if the PRAGMA commands fail to execute
fn set_sqlite_test_pragmas(conn: &mut SqliteConnection) {
    conn.batch_execute("PRAGMA synchronous = OFF")
        .expect("Failed to set SQLite PRAGMAs");
}

/// Creates a Rocket fairing that sets SQLite testing pragmas.
fn set_sqlite_test_pragmas_fairing() -> AdHoc {
    AdHoc::on_ignite("Set SQLite Test Pragmas", |rocket| async {
        let conn = DbConn::get_one(&rocket)
            .await
            .expect("database connection for test pragmas");
        conn.run(|c| {
            set_sqlite_test_pragmas(c);
        })
        .await;
        rocket
    })
}

/// Creates and configures a Rocket instance for testing with an in-memory SQLite database.
///
/// The returned Rocket instance will have:
/// - A uniquely named shared-cache in-memory SQLite database, so every pooled
///   connection of this instance sees the same data and no other test does
/// - Database connection pool attached
/// - Testing pragmas set
/// - All migrations run
/// - Routes and catchers mounted as in production
pub fn test_rocket() -> Rocket<Build> {
    use uuid::Uuid;

    let unique_db_name = format!("file:test_db_{}?mode=memory&cache=shared", Uuid::new_v4());

    let db_config: Map<_, Value> = map! {
        "url" => unique_db_name.into(),
        "pool_size" => 5.into(),
        "timeout" => 5.into(),
    };

    let figment = rocket::Config::figment().merge(("databases", map!["sqlite_db" => db_config]));

    let rocket = rocket::custom(figment)
        .attach(DbConn::fairing())
        .attach(set_sqlite_test_pragmas_fairing())
        .attach(run_migrations_fairing());

    crate::register_catchers(crate::mount_routes(rocket))
}

/// Creates a synchronous in-memory SQLite database connection for unit tests.
///
/// This function returns a `diesel::SqliteConnection` connected to an in-memory SQLite database
/// and runs all embedded Diesel migrations. This is ideal for direct store and
/// soft-delete calls in synchronous test code.
///
/// Each call to this function returns a new, independent in-memory database.
pub fn setup_test_db() -> SqliteConnection {
    use diesel::Connection;

    let mut conn = SqliteConnection::establish(":memory:")
        .expect("Failed to create in-memory SQLite database");
    run_pending_migrations(&mut conn);
    conn
}

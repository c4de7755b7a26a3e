pub mod contact_form;
mod db;
pub mod deleted_contact_form;
pub mod soft_delete;
// On by default so `cargo test` finds it; release builds use
// `--no-default-features` to leave it and `uuid` out.
#[cfg(feature = "test-staging")]
pub mod testing;

pub use db::*;

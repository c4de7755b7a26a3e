pub mod contact_form;
pub mod deleted_contact_form;

// Re-export models for easier access
pub use contact_form::*;
pub use deleted_contact_form::*;

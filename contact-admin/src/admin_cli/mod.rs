pub mod contact_commands;
pub mod trash_commands;
pub mod utils;

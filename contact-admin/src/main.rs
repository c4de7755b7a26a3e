use clap::{Parser, Subcommand};

mod admin_cli;

use admin_cli::{
    contact_commands::{ContactAction, handle_contact_command_with_conn},
    trash_commands::{TrashAction, handle_trash_command_with_conn},
    utils::establish_connection,
};

#[derive(Parser)]
#[command(name = "contact-admin")]
#[command(about = "Administer contact form submissions and the deleted records archive")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    #[command(about = "Inspect and soft-delete active contact forms")]
    Contact {
        #[command(subcommand)]
        action: ContactAction,
    },
    #[command(about = "Inspect, restore and purge deleted contact forms")]
    Trash {
        #[command(subcommand)]
        action: TrashAction,
    },
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let mut conn = establish_connection()?;
    match cli.command {
        Commands::Contact { action } => handle_contact_command_with_conn(&mut conn, action),
        Commands::Trash { action } => handle_trash_command_with_conn(&mut conn, action),
    }
}

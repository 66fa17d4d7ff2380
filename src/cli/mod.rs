//! CLI module for the Recipe API
//!
//! - `serve`: run the HTTP API
//! - `create-superuser`: create a staff/superuser account

pub mod create_superuser;
pub mod serve;

use clap::{Parser, Subcommand};

/// Recipe API - per-user recipes, tags and ingredients
#[derive(Parser)]
#[command(name = "recipe-api")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Run the HTTP API server
    Serve,

    /// Create a user with staff and superuser rights
    CreateSuperuser(create_superuser::CreateSuperuserArgs),
}

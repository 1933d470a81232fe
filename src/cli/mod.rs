//! CLI 模块

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "sprig")]
#[command(version)]
#[command(about = "A keyboard-driven todo list for the terminal")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Launch the interactive task list (default)
    Tui,
}

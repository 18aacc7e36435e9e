use clap::{Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(name = "segmarket-tui")]
#[command(about = "Terminal dashboard for Segmarket security events")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Debug, Subcommand, Clone, Copy, PartialEq, Eq)]
pub enum Commands {
    /// Run against the Segmarket API (default)
    Run,
    /// Run in dev mode with sample events and an in-memory session
    Dev,
    /// Log in from the terminal and save the session
    Login,
    /// Remove the saved session
    Logout,
    /// Print config path and create default file if missing
    ConfigPath,
}

impl Cli {
    pub fn command(&self) -> Commands {
        self.command.unwrap_or(Commands::Run)
    }
}

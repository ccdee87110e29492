//! CLI module for the delegator
//!
//! Command-line interface definitions and handlers.
//!
//! # Commands
//!
//! - `serve` - Start the HTTP/WebSocket server
//! - `route` - Plan a delegation chain for a task
//! - `agents` - List registered agents
//! - `config` - Configuration utilities (init)
//! - `completions` - Generate shell completions
//!
//! # Example
//!
//! ```bash
//! # Start server with routing exposed
//! delegator serve --enable-routing
//!
//! # Plan a task locally
//! delegator route "создать систему для анализа"
//!
//! # Generate shell completions
//! delegator completions bash > ~/.bash_completion.d/delegator
//! ```

pub mod agents;
pub mod completions;
pub mod config;
pub mod output;
pub mod route;
pub mod serve;

pub use completions::handle_completions;
pub use config::handle_config_init;

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Default configuration file looked up by every command.
pub const DEFAULT_CONFIG_PATH: &str = "delegator.toml";

/// Agent delegation engine
#[derive(Parser, Debug)]
#[command(
    name = "delegator",
    version,
    about = "Routes tasks to chains of specialist AI agents"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Start the delegation server
    Serve(ServeArgs),
    /// Plan a delegation chain for a task
    Route(RouteArgs),
    /// List registered agents
    Agents(AgentsArgs),
    /// Configuration utilities
    #[command(subcommand)]
    Config(ConfigCommands),
    /// Generate shell completions
    Completions(CompletionsArgs),
}

#[derive(Args, Debug)]
pub struct ServeArgs {
    /// Path to configuration file
    #[arg(short, long, default_value = DEFAULT_CONFIG_PATH)]
    pub config: PathBuf,

    /// Override server port
    #[arg(short, long, env = "DELEGATOR_PORT")]
    pub port: Option<u16>,

    /// Override server host
    #[arg(short = 'H', long, env = "DELEGATOR_HOST")]
    pub host: Option<String>,

    /// Set log level (trace, debug, info, warn, error)
    #[arg(short, long, env = "DELEGATOR_LOG_LEVEL")]
    pub log_level: Option<String>,

    /// Expose the routing endpoint regardless of config
    #[arg(long)]
    pub enable_routing: bool,
}

#[derive(Args, Debug)]
pub struct RouteArgs {
    /// Task text to route
    pub task: String,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,

    /// Path to configuration file
    #[arg(short, long, default_value = DEFAULT_CONFIG_PATH)]
    pub config: PathBuf,
}

#[derive(Args, Debug)]
pub struct AgentsArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Initialize a new configuration file
    Init(ConfigInitArgs),
}

#[derive(Args, Debug)]
pub struct ConfigInitArgs {
    /// Output file path
    #[arg(short, long, default_value = DEFAULT_CONFIG_PATH)]
    pub output: PathBuf,

    /// Overwrite existing file
    #[arg(short, long)]
    pub force: bool,
}

#[derive(Args, Debug)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: clap_complete::Shell,
}

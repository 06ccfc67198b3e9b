//! cli::args
//!
//! Command-line argument definitions using clap derive.
//!
//! # Global Flags
//!
//! These flags are available on all commands:
//! - `--help` / `-h`: Show help
//! - `--version`: Show version
//! - `--debug`: Enable debug logging
//! - `--quiet` / `-q`: Minimal output
//! - `--json`: Machine-readable output
//! - `--source`, `--base-url`, `--base-path`: Override the configured data source

use clap::{Parser, Subcommand};

use crate::core::config::Overrides;

/// churn - Repository and code-churn data from the analytics backend
#[derive(Parser, Debug)]
#[command(name = "churn")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    /// Minimal output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Print results as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Data source to use (overrides config)
    #[arg(long, global = true, value_name = "KIND")]
    pub source: Option<String>,

    /// Backend URL for the http source (overrides config)
    #[arg(long, global = true, value_name = "URL")]
    pub base_url: Option<String>,

    /// API path prefix for the http source (overrides config)
    #[arg(long, global = true, value_name = "PATH")]
    pub base_path: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    /// Parse command-line arguments.
    pub fn parse_args() -> Self {
        Parser::parse()
    }

    /// Config overrides given on the command line.
    pub fn overrides(&self) -> Overrides {
        Overrides {
            kind: self.source.clone(),
            base_url: self.base_url.clone(),
            base_path: self.base_path.clone(),
        }
    }
}

/// Available commands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// List repositories
    #[command(
        name = "repos",
        long_about = "List the repositories known to the data source.\n\n\
            Prints one repository per line as `id  name`. Use the id with \
            `churn commits` to see its churn history.",
        after_help = "\
EXAMPLES:
    # List repositories from the configured source
    churn repos

    # Ask a local backend instead
    churn --source http --base-url http://localhost:8080 repos"
    )]
    Repos,

    /// Add a repository
    #[command(
        name = "add",
        long_about = "Add a repository by name.\n\n\
            The name is sent as given, typically a host/path identifier such as \
            `github.com/user/repo`. The data source assigns the id.",
        after_help = "\
EXAMPLES:
    churn add github.com/acme/widget
    churn add github.com/acme/widget --json"
    )]
    Add {
        /// Repository name (e.g. github.com/user/repo)
        name: String,
    },

    /// Show daily churn for a repository
    #[command(
        name = "commits",
        long_about = "Show lines added and deleted per day for a repository.\n\n\
            Covers the 30 days before today through today, oldest first, \
            followed by a totals line.",
        after_help = "\
EXAMPLES:
    churn commits 1
    churn commits 1 --json"
    )]
    Commits {
        /// Repository id (see `churn repos`)
        repository_id: String,
    },

    /// Show or create the configuration file
    #[command(
        name = "config",
        after_help = "\
EXAMPLES:
    # Show the effective configuration
    churn config show

    # Write a starter config file
    churn config init"
    )]
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },

    /// Generate shell completion scripts
    #[command(
        name = "completion",
        after_help = "\
EXAMPLES:
    # Bash (add to ~/.bashrc)
    churn completion bash >> ~/.bashrc

    # Zsh (add to ~/.zshrc)
    churn completion zsh >> ~/.zshrc"
    )]
    Completion {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Config subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum ConfigAction {
    /// Show the effective configuration and where it was loaded from
    Show,
    /// Write a starter configuration file
    Init {
        /// Replace an existing file
        #[arg(long)]
        force: bool,
    },
}

/// Supported shells for completion
#[derive(clap::ValueEnum, Debug, Clone, Copy)]
#[allow(clippy::enum_variant_names)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
}

//! CLI argument definitions using clap.
//!
//! ## Commands
//!
//! - `check`: Report missing, unused and asymmetric keys (the default)
//! - `repair`: Fill asymmetric keys with marked placeholders
//! - `clean`: Remove unused keys from every locale file
//! - `init`: Initialize keyaudit configuration file

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

#[derive(Debug, Parser)]
#[command(
    name = "keyaudit",
    author,
    version,
    about = "Check translation keys in locale JSON files against their usage in code",
    long_about = None,
    args_conflicts_with_subcommands = true
)]
pub struct Arguments {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Arguments for the implicit `check` when no subcommand is given.
    #[command(flatten)]
    pub check: CheckArgs,
}

impl Arguments {
    /// The command to run; `check` when none was given.
    pub fn into_command(self) -> Command {
        self.command.unwrap_or(Command::Check(self.check))
    }

    pub fn verbose(&self) -> bool {
        match &self.command {
            Some(Command::Check(args)) => args.common.verbose,
            Some(Command::Repair(args)) => args.common.verbose,
            Some(Command::Clean(args)) => args.common.verbose,
            Some(Command::Init) => false,
            None => self.check.common.verbose,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Cargo-style report
    #[default]
    Text,
    /// Pretty-printed JSON on stdout
    Json,
}

/// Common arguments shared by all commands.
#[derive(Debug, Clone, Args)]
pub struct CommonArgs {
    /// Project root to check
    #[arg(default_value = ".")]
    pub root: PathBuf,

    /// Messages directory path (overrides config file)
    #[arg(long)]
    pub messages_root: Option<PathBuf>,

    /// Locale to check; repeat to list several (overrides config file)
    #[arg(long = "locale", value_name = "LOCALE")]
    pub locales: Vec<String>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

#[derive(Debug, Args)]
pub struct CheckArgs {
    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Args)]
pub struct RepairArgs {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Actually write placeholders (default is dry-run)
    #[arg(long)]
    pub apply: bool,
}

#[derive(Debug, Args)]
pub struct CleanArgs {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Actually delete keys (default is dry-run)
    #[arg(long)]
    pub apply: bool,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Report missing, unused and asymmetric translation keys (default)
    Check(CheckArgs),
    /// Copy keys missing from some locales with a marker prefix
    Repair(RepairArgs),
    /// Remove unused translation keys from every locale file
    Clean(CleanArgs),
    /// Initialize a new .keyauditrc.json configuration file
    Init,
}

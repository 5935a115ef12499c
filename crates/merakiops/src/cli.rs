//! Clap derive definitions for the `merakiops` console.

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_complete::Shell;

/// merakiops: chat operations for the Cisco Meraki Dashboard
#[derive(Debug, Parser)]
#[command(
    name = "merakiops",
    version,
    about = "Query and configure Meraki organizations the way you would from chat",
    long_about = "Query and configure Meraki organizations the way you would from chat.\n\n\
        Commands that lack parameters print a menu or form together with the\n\
        follow-up line that continues them. `interactive` answers those prompts\n\
        in the terminal instead.",
    propagate_version = true,
    subcommand_required = true,
    arg_required_else_help = true
)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalOpts,

    #[command(subcommand)]
    pub command: Command,
}

// ── Global Options ───────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct GlobalOpts {
    /// Dashboard profile to use
    #[arg(long, short = 'p', env = "MERAKIOPS_PROFILE", global = true)]
    pub profile: Option<String>,

    /// Dashboard API base URL (overrides profile)
    #[arg(long, env = "MERAKIOPS_BASE_URL", global = true)]
    pub base_url: Option<String>,

    /// Dashboard API key
    #[arg(long, global = true, hide_env = true, env = "MERAKIOPS_API_KEY")]
    pub api_key: Option<String>,

    /// Request timeout in seconds (overrides profile)
    #[arg(long, env = "MERAKIOPS_TIMEOUT", global = true)]
    pub timeout: Option<u64>,

    /// Accept invalid TLS certificates
    #[arg(long, short = 'k', global = true)]
    pub insecure: bool,

    /// When to use color output
    #[arg(long, default_value = "auto", global = true)]
    pub color: ColorMode,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(long, short = 'v', action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress non-error output
    #[arg(long, short = 'q', global = true)]
    pub quiet: bool,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ColorMode {
    Auto,
    Always,
    Never,
}

// ── Commands ─────────────────────────────────────────────────────────

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Dispatch one chat line, e.g. `run get-devices "Acme Corp" switches`
    Run(LineArgs),

    /// Dispatch a chat line and answer its prompts in the terminal
    #[command(alias = "i")]
    Interactive(LineArgs),

    /// List the registered chat commands
    Commands,

    /// Generate shell completions
    Completions(CompletionsArgs),
}

#[derive(Debug, Args)]
pub struct LineArgs {
    /// Subcommand and arguments; the group keyword may be given or omitted
    #[arg(required = true, trailing_var_arg = true, allow_hyphen_values = true)]
    pub words: Vec<String>,
}

#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    pub shell: Shell,
}

//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! and help text.  No business logic lives here.

use clap::{Args, Parser, Subcommand, ValueEnum};

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "mdmaker",
    bin_name = "mdmaker",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "Batch-create numbered Markdown notes",
    long_about = "mdmaker creates a batch of sequentially numbered, empty \
                  Markdown notes in a vault folder from a base name and a \
                  naming format.",
    after_help = "EXAMPLES:\n\
        \x20 mdmaker create memo --count 5\n\
        \x20 mdmaker create log  --count 10 --format '-n' --pad 3 --folder daily\n\
        \x20 mdmaker preview memo --count ２０\n\
        \x20 mdmaker folders --vault ~/notes",
    arg_required_else_help = true,
    subcommand_required    = true,
)]
pub struct Cli {
    /// Flags available on every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

/// All available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Create a batch of notes.
    #[command(
        visible_alias = "c",
        about = "Create a batch of numbered notes",
        after_help = "EXAMPLES:\n\
            \x20 mdmaker create memo --count 5                # memo（01）.md .. memo（05）.md\n\
            \x20 mdmaker create memo --format '_n' --pad 0     # memo_1.md ..\n\
            \x20 mdmaker create day --format '\\no.n' -n 3     # dayno.01.md ..\n\
            \x20 mdmaker create memo --dry-run"
    )]
    Create(CreateArgs),

    /// Show the names a batch would create.
    #[command(
        visible_alias = "p",
        about = "Preview generated note names",
        after_help = "EXAMPLES:\n\
            \x20 mdmaker preview memo --count 12\n\
            \x20 mdmaker preview memo --format '-n' --pad 3"
    )]
    Preview(PreviewArgs),

    /// List folders in the vault.
    #[command(visible_alias = "ls", about = "List vault folders")]
    Folders,

    /// Initialise an mdmaker configuration file.
    #[command(
        about = "Initialise configuration",
        after_help = "EXAMPLES:\n\
            \x20 mdmaker init\n\
            \x20 mdmaker init --force"
    )]
    Init(InitArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 mdmaker completions bash > ~/.local/share/bash-completion/completions/mdmaker\n\
            \x20 mdmaker completions zsh  > ~/.zfunc/_mdmaker\n\
            \x20 mdmaker completions fish > ~/.config/fish/completions/mdmaker.fish"
    )]
    Completions(CompletionsArgs),

    /// Manage the mdmaker configuration.
    #[command(
        about = "Configuration management",
        subcommand,
        after_help = "EXAMPLES:\n\
            \x20 mdmaker config get defaults.number_format\n\
            \x20 mdmaker config set defaults.pad_width 3\n\
            \x20 mdmaker config list"
    )]
    Config(ConfigCommands),
}

// ── naming (shared by create/preview) ─────────────────────────────────────────

/// How generated notes are named.  Unset values come from the config.
#[derive(Debug, Args)]
pub struct NamingArgs {
    /// Base name every note starts with.
    #[arg(value_name = "BASE", help = "Base name (default: defaults.base_name)")]
    pub base_name: Option<String>,

    /// Number of notes. Full-width digits are accepted.
    #[arg(
        short = 'n',
        long = "count",
        value_name = "COUNT",
        help = "Number of notes, 1-100 (default: defaults.file_count)"
    )]
    pub count: Option<String>,

    /// Naming format: `n` becomes the number, `\n` a literal `n`.
    #[arg(
        short = 'f',
        long = "format",
        value_name = "FORMAT",
        allow_hyphen_values = true,
        help = "Naming format; 'n' is the number, '\\n' a literal n"
    )]
    pub format: Option<String>,

    /// Zero-padding width (0 = none).
    #[arg(
        short = 'p',
        long = "pad",
        value_name = "WIDTH",
        allow_negative_numbers = true,
        help = "Zero-pad numbers to this many digits (0 = none)"
    )]
    pub pad: Option<i64>,
}

// ── create ────────────────────────────────────────────────────────────────────

/// Arguments for `mdmaker create`.
#[derive(Debug, Args)]
pub struct CreateArgs {
    #[command(flatten)]
    pub naming: NamingArgs,

    /// Target folder inside the vault (`/` for the root).
    #[arg(
        short = 'd',
        long = "folder",
        value_name = "FOLDER",
        help = "Target folder in the vault (default: defaults.target_folder)"
    )]
    pub folder: Option<String>,

    /// Skip the confirmation prompt.
    #[arg(short = 'y', long = "yes", help = "Skip confirmation and create immediately")]
    pub yes: bool,

    /// Preview what would be created without writing any files.
    #[arg(long = "dry-run", help = "Show what would be created without creating")]
    pub dry_run: bool,

    /// Remember the format and padding as the new defaults.
    #[arg(long = "save", help = "Save --format/--pad as the new defaults")]
    pub save: bool,
}

// ── preview ───────────────────────────────────────────────────────────────────

/// Arguments for `mdmaker preview`.
#[derive(Debug, Args)]
pub struct PreviewArgs {
    #[command(flatten)]
    pub naming: NamingArgs,

    /// How many names to show.
    #[arg(long = "limit", value_name = "N", default_value_t = 5, help = "Names to show")]
    pub limit: usize,
}

// ── init ──────────────────────────────────────────────────────────────────────

/// Arguments for `mdmaker init`.
#[derive(Debug, Args)]
pub struct InitArgs {
    /// Overwrite an existing config file.
    #[arg(long = "force", help = "Overwrite existing configuration")]
    pub force: bool,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `mdmaker completions`.
#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Target shell.
    #[arg(value_enum, help = "Shell to generate completions for")]
    pub shell: Shell,
}

/// Supported shells for completion generation.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

// ── config subcommands ────────────────────────────────────────────────────────

/// Subcommands for `mdmaker config`.
#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Print the value of a configuration key.
    Get {
        /// Dotted key path, e.g. `defaults.pad_width`.
        key: String,
    },
    /// Set a configuration key to a value.
    Set {
        /// Dotted key path.
        key: String,
        /// New value.
        #[arg(allow_hyphen_values = true)]
        value: String,
    },
    /// Print all configuration values.
    List,
    /// Print the path to the active configuration file.
    Path,
}

// ── tests ─────────────────────────────────────────────────────────────────────

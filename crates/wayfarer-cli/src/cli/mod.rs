//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums.  No business logic lives here.

use clap::{Args, Parser, Subcommand, ValueEnum};

pub mod global;
pub use global::GlobalArgs;

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "wayfarer",
    bin_name = "wayfarer",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "\u{26a1} Interactive scaffolding for serverless GraphQL applications",
    long_about = "Wayfarer scaffolds a serverless GraphQL application backed by a \
                  DynamoDB-style key-value store, and keeps the generated code in \
                  sync as you add entities to the schema.",
    after_help = "EXAMPLES:\n\
        \x20 wayfarer app                     # scaffold the application, interactively\n\
        \x20 wayfarer entity order            # define the 'order' entity and generate its code\n\
        \x20 wayfarer entity order --force    # re-render 'order' from its saved definition\n\
        \x20 wayfarer completions bash > /usr/share/bash-completion/completions/wayfarer",
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
    /// Scaffold or refresh the application.
    #[command(
        about = "Scaffold or refresh the application",
        after_help = "EXAMPLES:\n\
            \x20 wayfarer app\n\
            \x20 wayfarer app --yes --skip-install"
    )]
    App(AppArgs),

    /// Define an entity and generate its code.
    #[command(
        visible_alias = "e",
        about = "Define an entity and generate its code",
        after_help = "EXAMPLES:\n\
            \x20 wayfarer entity order\n\
            \x20 wayfarer entity order --regenerate\n\
            \x20 wayfarer entity Order.json      # trailing .json is stripped"
    )]
    Entity(EntityArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 wayfarer completions bash > ~/.local/share/bash-completion/completions/wayfarer\n\
            \x20 wayfarer completions zsh  > ~/.zfunc/_wayfarer\n\
            \x20 wayfarer completions fish > ~/.config/fish/completions/wayfarer.fish"
    )]
    Completions(CompletionsArgs),
}

// ── app ───────────────────────────────────────────────────────────────────────

/// Arguments for `wayfarer app`.
#[derive(Debug, Args)]
pub struct AppArgs {
    /// Do not print the dependency-installation hint.
    #[arg(long = "skip-install", help = "Skip dependency installation")]
    pub skip_install: bool,

    /// Accept defaults without prompting.
    #[arg(short = 'y', long = "yes", help = "Accept defaults without prompting")]
    pub yes: bool,
}

// ── entity ────────────────────────────────────────────────────────────────────

/// Arguments for `wayfarer entity`.
#[derive(Debug, Args)]
pub struct EntityArgs {
    /// Entity name.  A trailing `.json` is stripped, so a definition file
    /// name can be passed directly.
    #[arg(value_name = "NAME", help = "Entity name")]
    pub name: String,

    /// Re-render from the saved definition without prompting.
    #[arg(long = "regenerate", help = "Re-render from the saved definition")]
    pub regenerate: bool,

    /// Same as --regenerate.
    #[arg(long = "force", help = "Skip the update prompt")]
    pub force: bool,

    /// Do not print the dependency-installation hint.
    #[arg(long = "skip-install", help = "Skip dependency installation")]
    pub skip_install: bool,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `wayfarer completions`.
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

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use clap::{CommandFactory, Parser};

    #[test]
    fn verify_cli_structure() {
        // clap's internal consistency check — catches conflicts, missing values, etc.
        Cli::command().debug_assert();
    }

    #[test]
    fn parse_entity_command() {
        let cli = Cli::parse_from(["wayfarer", "entity", "order", "--regenerate"]);
        match cli.command {
            Commands::Entity(args) => {
                assert_eq!(args.name, "order");
                assert!(args.regenerate);
                assert!(!args.force);
            }
            other => panic!("expected Entity, got {other:?}"),
        }
    }

    #[test]
    fn parse_app_command() {
        let cli = Cli::parse_from(["wayfarer", "app", "--yes", "--skip-install"]);
        match cli.command {
            Commands::App(args) => {
                assert!(args.yes);
                assert!(args.skip_install);
            }
            other => panic!("expected App, got {other:?}"),
        }
    }

    #[test]
    fn quiet_and_verbose_conflict() {
        let result = Cli::try_parse_from(["wayfarer", "--quiet", "--verbose", "app"]);
        assert!(result.is_err());
    }

    #[test]
    fn entity_alias() {
        let cli = Cli::parse_from(["wayfarer", "e", "order"]);
        assert!(matches!(cli.command, Commands::Entity(_)));
    }
}

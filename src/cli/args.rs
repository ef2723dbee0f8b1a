//! Command-line interface definitions.

use clap::{ColorChoice, Parser, Subcommand};
use std::path::PathBuf;

/// Render an HTML <head> block from a TOML page description
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None, arg_required_else_help = true)]
pub struct Cli {
    /// Control colored output (auto, always, never)
    #[arg(long, global = true, default_value = "auto")]
    pub color: ColorChoice,

    /// Print debug output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Config file path (default: head.toml)
    #[arg(short = 'C', long, global = true, default_value = "head.toml", value_hint = clap::ValueHint::FilePath)]
    pub config: PathBuf,

    /// subcommands
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Render the <head> markup
    #[command(visible_alias = "r")]
    Render {
        #[command(flatten)]
        args: RenderArgs,
    },

    /// Validate the config file without rendering
    #[command(visible_alias = "c")]
    Check,
}

/// Render command arguments.
#[derive(clap::Args, Debug, Clone)]
pub struct RenderArgs {
    /// Render only these groups, in this order (e.g. `og,twitter`)
    #[arg(long, value_delimiter = ',', value_name = "GROUP")]
    pub only: Option<Vec<String>>,

    /// Disable og:/twitter: derivation from title and description
    #[arg(long)]
    pub no_auto_og: bool,

    /// Write output to a file instead of stdout
    #[arg(short, long, value_hint = clap::ValueHint::FilePath)]
    pub output: Option<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_render_args() {
        let cli = Cli::try_parse_from([
            "tola-head", "-C", "site/head.toml", "render", "--only", "og,twitter", "--no-auto-og",
        ])
        .unwrap();
        assert_eq!(cli.config, PathBuf::from("site/head.toml"));
        let Commands::Render { args } = cli.command else {
            panic!("expected render");
        };
        assert_eq!(args.only, Some(vec!["og".to_string(), "twitter".to_string()]));
        assert!(args.no_auto_og);
        assert!(args.output.is_none());
    }

    #[test]
    fn test_parse_check_defaults() {
        let cli = Cli::try_parse_from(["tola-head", "check", "-v"]).unwrap();
        assert_eq!(cli.config, PathBuf::from("head.toml"));
        assert!(cli.verbose);
        assert!(matches!(cli.command, Commands::Check));
    }
}

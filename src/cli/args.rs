//! Command-line interface definitions.

use clap::{ColorChoice, Parser, Subcommand};
use std::path::PathBuf;

/// Breadcrumb resolution for hierarchical navigation menus
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None, arg_required_else_help = true)]
pub struct Cli {
    /// Control colored output (auto, always, never)
    #[arg(long, global = true, default_value = "auto")]
    pub color: ColorChoice,

    /// Config file path (default: search upward for navcrumb.toml)
    #[arg(short = 'C', long, global = true, value_hint = clap::ValueHint::FilePath)]
    pub config: Option<PathBuf>,

    /// Menu hierarchy file (.json or .toml), overrides `[menu].source`
    #[arg(short, long, global = true, value_hint = clap::ValueHint::FilePath)]
    pub menu: Option<PathBuf>,

    /// Ignore host overrides and resolve every path locally
    #[arg(long, global = true)]
    pub no_host: bool,

    /// Enable verbose output for debugging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// subcommands
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Resolve paths to breadcrumb trails
    #[command(visible_alias = "r")]
    Resolve {
        #[command(flatten)]
        args: ResolveArgs,
    },

    /// Print the menu hierarchy
    #[command(visible_alias = "m")]
    Menu {
        #[command(flatten)]
        args: MenuArgs,
    },

    /// Check the menu hierarchy for broken references and ambiguities
    #[command(visible_alias = "c")]
    Check {
        #[command(flatten)]
        args: CheckArgs,
    },

    /// Re-resolve paths whenever the config or menu file changes
    #[command(visible_alias = "w")]
    Watch {
        #[command(flatten)]
        args: WatchArgs,
    },
}

/// Resolve command arguments.
#[derive(clap::Args, Debug, Clone)]
pub struct ResolveArgs {
    /// Paths or URLs to resolve. Use `-` to read them from stdin.
    #[arg(value_name = "PATH", required = true)]
    pub paths: Vec<String>,

    /// Keep only the last N crumbs (0 = all), overrides `[breadcrumb].max_segments`
    #[arg(short = 'n', long, value_name = "N")]
    pub max: Option<usize>,

    /// Output JSON instead of text
    #[arg(short, long)]
    pub json: bool,

    /// Pretty-print JSON output
    #[arg(short, long)]
    pub pretty: bool,

    /// Show which strategy (or the host) produced each trail
    #[arg(short, long)]
    pub explain: bool,

    /// Click crumb INDEX (0-based) of each trail through the host
    #[arg(short, long, value_name = "INDEX")]
    pub follow: Option<usize>,
}

/// Menu command arguments.
#[derive(clap::Args, Debug, Clone)]
pub struct MenuArgs {
    /// Dump the hierarchy as JSON instead of a tree
    #[arg(short, long)]
    pub json: bool,

    /// Pretty-print JSON output
    #[arg(short, long)]
    pub pretty: bool,
}

/// Check command arguments.
#[derive(clap::Args, Debug, Clone)]
pub struct CheckArgs {
    /// Report errors without failing
    #[arg(short, long)]
    pub warn_only: bool,
}

/// Watch command arguments.
#[derive(clap::Args, Debug, Clone)]
pub struct WatchArgs {
    /// Paths or URLs to keep resolving
    #[arg(value_name = "PATH", required = true)]
    pub paths: Vec<String>,

    /// Keep only the last N crumbs (0 = all)
    #[arg(short = 'n', long, value_name = "N")]
    pub max: Option<usize>,
}

#[allow(unused)]
impl Cli {
    pub const fn is_resolve(&self) -> bool {
        matches!(self.command, Commands::Resolve { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_resolve() {
        let cli = Cli::parse_from(["navcrumb", "resolve", "/a/b", "/c", "-n", "2", "--json"]);
        let Commands::Resolve { args } = cli.command else {
            panic!("expected resolve");
        };
        assert_eq!(args.paths, ["/a/b", "/c"]);
        assert_eq!(args.max, Some(2));
        assert!(args.json);
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::parse_from(["navcrumb", "r", "/", "--menu", "menu.json", "--no-host", "-v"]);
        assert_eq!(cli.menu, Some(PathBuf::from("menu.json")));
        assert!(cli.no_host);
        assert!(cli.verbose);
        assert!(cli.is_resolve());
    }
}

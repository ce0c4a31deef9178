//! CLI entry point for bfwalk

use std::io::IsTerminal;
use std::process::ExitCode;

use clap::{Parser, ValueEnum};
use tracing_subscriber::EnvFilter;

use bfwalk::{
    JsonFormatter, ListConfig, ListError, ListSummary, OsStorage, Order, TextFormatter, list_tree,
};

/// Color output mode
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
enum ColorMode {
    /// Auto-detect based on terminal and environment
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

/// Determine whether to use color output based on mode and environment.
fn should_use_color(mode: ColorMode) -> bool {
    match mode {
        ColorMode::Always => true,
        ColorMode::Never => false,
        ColorMode::Auto => {
            // Respect NO_COLOR environment variable (https://no-color.org/)
            if std::env::var_os("NO_COLOR").is_some() {
                return false;
            }
            if std::env::var_os("FORCE_COLOR").is_some() {
                return true;
            }
            if std::env::var("TERM").map(|t| t == "dumb").unwrap_or(false) {
                return false;
            }
            std::io::stdout().is_terminal()
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "bfwalk")]
#[command(about = "List a directory tree breadth-first, level by level")]
#[command(version)]
struct Args {
    /// Directory to walk
    #[arg(default_value = ".")]
    path: String,

    /// Descend only N levels deep
    #[arg(short = 'L', long = "level")]
    level: Option<usize>,

    /// List directories only
    #[arg(short = 'd', long = "dirs-only")]
    dirs_only: bool,

    /// Skip entries whose name matches pattern (can be used multiple times)
    #[arg(short = 'I', long = "ignore")]
    ignore: Vec<String>,

    /// Walk depth-first instead of breadth-first
    #[arg(long = "depth-first")]
    depth_first: bool,

    /// Stop after N entries
    #[arg(short = 'n', long = "limit")]
    limit: Option<usize>,

    /// Output one JSON object per line
    #[arg(long = "json")]
    json: bool,

    /// Control color output: auto, always, never
    #[arg(long = "color", value_name = "WHEN", default_value = "auto")]
    color: ColorMode,

    /// Log directory errors and walk progress to stderr
    #[arg(short = 'v', long = "verbose")]
    verbose: bool,
}

fn init_logging(verbose: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if verbose {
            EnvFilter::new("bfwalk=debug")
        } else {
            EnvFilter::new("bfwalk=warn")
        }
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn run(args: &Args) -> Result<ListSummary, ListError> {
    let config = ListConfig {
        order: if args.depth_first {
            Order::DepthFirst
        } else {
            Order::BreadthFirst
        },
        max_depth: args.level,
        dirs_only: args.dirs_only,
        ignore_patterns: args.ignore.clone(),
        limit: args.limit,
    };

    // Relative paths resolve against the working directory, absolute ones as-is
    let storage = OsStorage::new(".");

    if args.json {
        let stdout = std::io::stdout();
        list_tree(&storage, &args.path, &config, JsonFormatter::new(stdout.lock()))
    } else {
        let formatter = TextFormatter::stdout(should_use_color(args.color));
        list_tree(&storage, &args.path, &config, formatter)
    }
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_logging(args.verbose);

    match run(&args) {
        Ok(summary) => {
            if summary.errors > 0 {
                tracing::debug!(errors = summary.errors, "some directories could not be read");
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("bfwalk: {}", e);
            ExitCode::FAILURE
        }
    }
}

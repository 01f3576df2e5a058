//! CLI Adapter.

mod browse;
mod ops;

use std::io;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use env_logger::Env;
use log::LevelFilter;

use crate::app::config::load_config;
use crate::app::{AppContext, Session};
use crate::domain::{AppError, FilenavConfig};
use crate::ports::Prompter;
use crate::services::{AutoPrompter, DialoguerPrompter, SystemLauncher};

pub use browse::run_loop;

/// Environment variable holding an env_logger filter.
pub const LOG_ENV: &str = "FILENAV_LOG";

#[derive(Parser)]
#[command(name = "filenav")]
#[command(version)]
#[command(about = "Browse and manage files from the terminal", long_about = None)]
struct Cli {
    /// Configuration file (default: $FILENAV_CONFIG, then ~/.config/filenav/config.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    /// Answer yes to every confirmation
    #[arg(short = 'y', long, global = true)]
    yes: bool,
    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Browse interactively (default)
    #[clap(visible_alias = "b")]
    Browse {
        /// Directory to start in
        dir: Option<PathBuf>,
    },
    /// List one directory
    Ls {
        /// Directory to list (default: current directory)
        dir: Option<PathBuf>,
        /// Emit rows as JSON
        #[arg(long)]
        json: bool,
    },
    /// Create a single directory level
    Mkdir { path: PathBuf },
    /// Rename a file or directory
    Rename {
        old: PathBuf,
        new: PathBuf,
        /// Replace NEW if it already exists
        #[arg(short, long)]
        force: bool,
    },
    /// Delete a file or directory recursively
    #[clap(visible_alias = "delete")]
    Rm { path: PathBuf },
    /// Copy a file or directory tree
    Cp {
        src: PathBuf,
        dest: PathBuf,
        /// Replace DEST if it already exists
        #[arg(short, long)]
        force: bool,
    },
    /// Move a file or directory within one filesystem
    Mv {
        src: PathBuf,
        dest: PathBuf,
        /// Replace DEST if it already exists
        #[arg(short, long)]
        force: bool,
    },
}

/// Entry point for the CLI.
pub fn run() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(e) = dispatch(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn init_logging(verbose: bool) {
    let mut builder = env_logger::Builder::from_env(Env::new().filter_or(LOG_ENV, "warn"));
    if verbose {
        builder.filter_level(LevelFilter::Debug);
    }
    builder.format_timestamp(None).init();
}

fn dispatch(cli: Cli) -> Result<(), AppError> {
    let config = load_config(cli.config.as_deref())?;
    let mut prompter = prompter_for(cli.yes);

    match cli.command.unwrap_or(Commands::Browse { dir: None }) {
        Commands::Browse { dir } => run_browse(config, prompter, dir.as_deref()),
        Commands::Ls { dir, json } => {
            ops::run_ls(&config, dir.as_deref().unwrap_or(Path::new(".")), json)
        }
        Commands::Mkdir { path } => ops::run_mkdir(&path),
        Commands::Rename { old, new, force } => ops::run_rename(&old, &new, force),
        Commands::Rm { path } => ops::run_rm(&config, &mut prompter, &path),
        Commands::Cp { src, dest, force } => ops::run_cp(&src, &dest, force),
        Commands::Mv { src, dest, force } => ops::run_mv(&src, &dest, force),
    }
}

fn prompter_for(yes: bool) -> Box<dyn Prompter> {
    if yes { Box::new(AutoPrompter::new(true)) } else { Box::new(DialoguerPrompter::new()) }
}

fn run_browse(
    config: FilenavConfig,
    prompter: Box<dyn Prompter>,
    dir: Option<&Path>,
) -> Result<(), AppError> {
    let start = match dir.map(Path::to_path_buf).or_else(|| config.browser.start_dir.clone()) {
        Some(start) => start,
        None => std::env::current_dir()?,
    };
    let launcher = SystemLauncher::new(config.open.command.clone());
    let ctx = AppContext::new(config, prompter, launcher);
    let mut session = Session::open(ctx, &start)?;

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let mut stderr = io::stderr();
    run_loop(&mut session, stdin.lock(), &mut stdout, &mut stderr)
}

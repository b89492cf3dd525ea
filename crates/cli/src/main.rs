use anyhow::Result;
use clap::{Args, Parser, Subcommand, ValueEnum};
use roadmap_protocol::ViewerClass;
use std::path::PathBuf;

use crate::response::CommandResponse;

mod commands;
mod response;

#[derive(Parser)]
#[command(name = "roadmap")]
#[command(about = "Assemble and project strategic roadmaps", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Quiet mode: log only warnings/errors (stdout is reserved for JSON)
    #[arg(long, global = true)]
    quiet: bool,

    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pretty: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Assemble a roadmap from a request document
    Assemble(AssembleArgs),

    /// Project a stored roadmap for a viewer class
    Project(ProjectArgs),

    /// Print the effective section contract
    Sections(SectionsArgs),
}

#[derive(Args)]
pub(crate) struct AssembleArgs {
    /// Request JSON file (`-` reads stdin)
    #[arg(default_value = "-")]
    pub input: PathBuf,

    /// Compiler config (TOML)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Project the assembled roadmap for this viewer class
    #[arg(long, value_enum)]
    pub viewer: Option<Viewer>,
}

#[derive(Args)]
pub(crate) struct ProjectArgs {
    /// Roadmap JSON file (`-` reads stdin)
    #[arg(default_value = "-")]
    pub input: PathBuf,

    /// Viewer class to project for
    #[arg(long, value_enum)]
    pub viewer: Viewer,
}

#[derive(Args)]
pub(crate) struct SectionsArgs {
    /// Compiler config (TOML)
    #[arg(long)]
    pub config: Option<PathBuf>,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub(crate) enum Viewer {
    Executive,
    Delegate,
}

impl From<Viewer> for ViewerClass {
    fn from(viewer: Viewer) -> Self {
        match viewer {
            Viewer::Executive => ViewerClass::Executive,
            Viewer::Delegate => ViewerClass::Delegate,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"));
    if cli.quiet {
        builder.filter_level(log::LevelFilter::Warn);
    } else if cli.verbose {
        builder.filter_level(log::LevelFilter::Debug);
    }
    builder.target(env_logger::Target::Stderr).init();

    let result = match cli.command {
        Commands::Assemble(args) => commands::run_assemble(args),
        Commands::Project(args) => commands::run_project(args),
        Commands::Sections(args) => commands::run_sections(args),
    };
    let response = result.unwrap_or_else(|err| {
        log::error!("{err:#}");
        CommandResponse::error(&err)
    });

    response.print(cli.pretty)?;
    if response.is_error() {
        std::process::exit(1);
    }
    Ok(())
}

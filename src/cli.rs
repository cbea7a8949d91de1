use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "reconkit")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Bootstrap a Go reconnaissance toolset via `go install`")]
#[command(
    long_about = "A CLI tool that installs a curated set of ProjectDiscovery reconnaissance tools (subfinder, httpx, naabu, nuclei, katana, notify) by driving `go install` for each one, placing the binaries in GOBIN or ~/go/bin."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Path to configuration file
    #[arg(short, long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Enable verbose logging (-v for info, -vv for debug, -vvv for trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    pub quiet: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Install the reconnaissance toolset
    Install {
        /// Install only the named tools (repeatable)
        #[arg(short, long = "tool", value_name = "NAME")]
        tools: Vec<String>,

        /// Destination directory for installed binaries
        #[arg(long, value_name = "DIR")]
        gobin: Option<PathBuf>,

        /// Show what would be installed without running the toolchain
        #[arg(long)]
        dry_run: bool,

        /// Exit non-zero if any tool fails to install
        #[arg(long)]
        strict: bool,

        /// Skip the confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },

    /// List the tools in the catalog
    List {
        /// Output format
        #[arg(long, value_enum, default_value = "table")]
        format: OutputFormat,
    },

    /// Show which catalog tools are already installed
    Status {
        /// Destination directory to check for binaries
        #[arg(long, value_name = "DIR")]
        gobin: Option<PathBuf>,

        /// Output format
        #[arg(long, value_enum, default_value = "table")]
        format: OutputFormat,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Table,
    Json,
}

impl Cli {
    /// Initialize logging based on verbosity level
    pub fn init_logging(&self) {
        if self.quiet {
            return;
        }

        let level = match self.verbose {
            0 => log::LevelFilter::Warn,
            1 => log::LevelFilter::Info,
            2 => log::LevelFilter::Debug,
            _ => log::LevelFilter::Trace,
        };

        env_logger::Builder::from_default_env()
            .filter_level(level)
            .init();
    }
}

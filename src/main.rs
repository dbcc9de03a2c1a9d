use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use daybudget::core::log::init_logging;

#[derive(Parser)]
#[command(version, about)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to optional configuration file
    #[arg(short, long, global = true)]
    config_path: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

impl From<Commands> for daybudget::AppCommand {
    fn from(cmd: Commands) -> daybudget::AppCommand {
        match cmd {
            Commands::Status { currency } => daybudget::AppCommand::Status { currency },
            Commands::Setup => unreachable!("Setup command should be handled separately"),
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Create default configuration
    Setup,
    /// Show today's and this week's totals with the remaining budget
    Status {
        /// Report cash in this currency (usd, eur or rub)
        #[arg(long)]
        currency: Option<String>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose);

    let result = match cli.command {
        Some(Commands::Setup) => daybudget::cli::setup::setup(),
        Some(cmd) => daybudget::run_command(cmd.into(), cli.config_path.as_deref()),
        None => {
            Cli::command().print_help()?;
            Ok(())
        }
    };

    if let Err(e) = &result {
        tracing::error!(error = %e, "Application failed");
    }
    result
}

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use crate::Commands;

#[derive(Parser)]
#[command(name = "checklist")]
#[command(about = "Checklists backed by a remote service", long_about = None)]
pub(crate) struct Cli {
    /// Directory holding config.json and state.json
    #[arg(long = "data-dir", value_name = "DIR", global = true)]
    data_dir: Option<PathBuf>,

    /// Service base URL (overrides config and $CHECKLIST_URL)
    #[arg(long, value_name = "URL", global = true)]
    url: Option<String>,

    /// Debug logging on stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

pub(crate) fn run() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        None => {
            checklist::tui::run_with_options(checklist::tui::TuiRunOptions {
                data_dir: cli.data_dir,
                url: cli.url,
            })?;
        }
        Some(command) => {
            checklist::logging::init_stderr(cli.verbose);
            let ctx = crate::cli_exec::CliContext::open(cli.data_dir, cli.url.as_deref())?;
            crate::cli_exec::handle_command(&ctx, command)?
        }
    }

    Ok(())
}

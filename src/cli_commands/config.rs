use clap::Subcommand;

#[derive(Subcommand)]
pub(crate) enum ConfigCommands {
    /// Show the effective configuration
    Show {
        /// Emit JSON
        #[arg(long)]
        json: bool,
    },
    /// Update config.json
    Set {
        /// Service base URL, e.g. http://127.0.0.1:8080/api
        #[arg(long = "base-url", value_name = "URL")]
        base_url: Option<String>,
        /// Per-request timeout in seconds (0 disables)
        #[arg(long, value_name = "SECS")]
        timeout: Option<u64>,
    },
}

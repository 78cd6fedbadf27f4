use clap::Args;

#[derive(Args)]
pub(crate) struct RegisterArgs {
    #[arg(long)]
    pub(crate) username: String,
    #[arg(long)]
    pub(crate) email: String,
    /// Read from stdin when omitted
    #[arg(long)]
    pub(crate) password: Option<String>,
}

#[derive(Args)]
pub(crate) struct LoginArgs {
    #[arg(long)]
    pub(crate) username: String,
    /// Read from stdin when omitted
    #[arg(long)]
    pub(crate) password: Option<String>,
}

#[derive(Args)]
pub(crate) struct StatusArgs {
    /// Emit JSON
    #[arg(long)]
    pub(crate) json: bool,
}

use clap::Args;

#[derive(Args)]
pub(crate) struct ListsArgs {
    /// Emit JSON
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Args)]
pub(crate) struct CreateArgs {
    pub(crate) name: String,
    /// Emit JSON
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Args)]
pub(crate) struct DeleteArgs {
    pub(crate) checklist_id: String,
    /// Skip the confirmation prompt
    #[arg(long)]
    pub(crate) yes: bool,
}

#[derive(Args)]
pub(crate) struct ItemsArgs {
    pub(crate) checklist_id: String,
    /// Emit JSON
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Args)]
pub(crate) struct AddArgs {
    pub(crate) checklist_id: String,
    pub(crate) name: String,
    /// Emit JSON
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Args)]
pub(crate) struct ItemRefArgs {
    pub(crate) checklist_id: String,
    pub(crate) item_id: String,
}

#[derive(Args)]
pub(crate) struct RenameArgs {
    pub(crate) checklist_id: String,
    pub(crate) item_id: String,
    pub(crate) name: String,
}

#[derive(Args)]
pub(crate) struct RemoveArgs {
    pub(crate) checklist_id: String,
    pub(crate) item_id: String,
    /// Skip the confirmation prompt
    #[arg(long)]
    pub(crate) yes: bool,
}

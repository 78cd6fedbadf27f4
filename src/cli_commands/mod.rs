use clap::Subcommand;

pub(crate) mod config;
pub(crate) mod lists;
pub(crate) mod session;

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// Create an account and sign in
    Register(session::RegisterArgs),

    /// Sign in and store the session token
    Login(session::LoginArgs),

    /// Forget the stored session token
    Logout,

    /// Show the current view and session state
    Status(session::StatusArgs),

    /// List checklists
    Lists(lists::ListsArgs),

    /// Create a checklist
    Create(lists::CreateArgs),

    /// Delete a checklist
    Delete(lists::DeleteArgs),

    /// List the items of a checklist, with progress
    Items(lists::ItemsArgs),

    /// Add an item to a checklist
    Add(lists::AddArgs),

    /// Mark an item completed
    Done(lists::ItemRefArgs),

    /// Mark an item not completed
    Undone(lists::ItemRefArgs),

    /// Rename an item
    Rename(lists::RenameArgs),

    /// Delete an item
    Remove(lists::RemoveArgs),

    /// Show or change client configuration
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

pub(crate) use self::config::ConfigCommands;

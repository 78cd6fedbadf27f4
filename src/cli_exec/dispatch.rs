use super::config::handle_config_command;
use super::items::{
    handle_add_command, handle_items_command, handle_remove_command, handle_rename_command,
    handle_toggle_command,
};
use super::lists::{handle_create_command, handle_delete_command, handle_lists_command};
use super::session::{
    handle_login_command, handle_logout_command, handle_register_command, handle_status_command,
};
use super::*;

pub(super) fn handle_command(ctx: &CliContext, command: Commands) -> Result<()> {
    match command {
        Commands::Register(args) => {
            handle_register_command(ctx, args.username, args.email, args.password)?
        }
        Commands::Login(args) => handle_login_command(ctx, args.username, args.password)?,
        Commands::Logout => handle_logout_command(ctx)?,
        Commands::Status(args) => handle_status_command(ctx, args.json)?,
        Commands::Lists(args) => handle_lists_command(ctx, args.json)?,
        Commands::Create(args) => handle_create_command(ctx, &args.name, args.json)?,
        Commands::Delete(args) => handle_delete_command(ctx, &args.checklist_id, args.yes)?,
        Commands::Items(args) => handle_items_command(ctx, &args.checklist_id, args.json)?,
        Commands::Add(args) => {
            handle_add_command(ctx, &args.checklist_id, &args.name, args.json)?
        }
        Commands::Done(args) => {
            handle_toggle_command(ctx, &args.checklist_id, &args.item_id, true)?
        }
        Commands::Undone(args) => {
            handle_toggle_command(ctx, &args.checklist_id, &args.item_id, false)?
        }
        Commands::Rename(args) => {
            handle_rename_command(ctx, &args.checklist_id, &args.item_id, &args.name)?
        }
        Commands::Remove(args) => {
            handle_remove_command(ctx, &args.checklist_id, &args.item_id, args.yes)?
        }
        Commands::Config { command } => handle_config_command(ctx, command)?,
    }

    Ok(())
}

use checklist::confirm::Removal;
use checklist::items::ItemCollection;

use super::prompt::confirmer;
use super::*;

fn loaded(session: &Session, client: &RemoteClient, checklist_id: RecordId) -> Result<ItemCollection> {
    let mut view = ItemCollection::new(checklist_id, None);
    gateway(view.activate(client, session))?;
    Ok(view)
}

pub(super) fn handle_items_command(ctx: &CliContext, raw_id: &str, json: bool) -> Result<()> {
    let checklist_id = parse_id(raw_id, "checklist")?;
    let session = ctx.require_session()?;
    let client = ctx.client()?;
    let view = loaded(&session, &client, checklist_id)?;
    let progress = view.progress();

    if json {
        return print_json(
            &serde_json::json!({
                "checklist_id": view.checklist_id(),
                "items": view.items(),
                "completed": progress.completed,
                "total": progress.total,
                "percent": progress.percent,
            }),
            "items",
        );
    }

    println!("{}% ({})", progress.percent, progress.summary());
    if view.items().is_empty() {
        println!("(no items)");
    }
    for item in view.items() {
        let mark = if item.item_completion_status { "x" } else { " " };
        println!("[{}] {} {}", mark, item.id, item.name);
    }
    Ok(())
}

pub(super) fn handle_add_command(
    ctx: &CliContext,
    raw_id: &str,
    name: &str,
    json: bool,
) -> Result<()> {
    let checklist_id = parse_id(raw_id, "checklist")?;
    let session = ctx.require_session()?;
    let client = ctx.client()?;
    let mut view = ItemCollection::new(checklist_id, None);
    let created = gateway(view.create(&client, &session, name))?;
    if json {
        print_json(created, "item")?;
    } else {
        println!("Added item {} {}", created.id, created.name);
    }
    Ok(())
}

pub(super) fn handle_toggle_command(
    ctx: &CliContext,
    raw_checklist: &str,
    raw_item: &str,
    done: bool,
) -> Result<()> {
    let checklist_id = parse_id(raw_checklist, "checklist")?;
    let item_id = RecordId::parse(raw_item);
    let session = ctx.require_session()?;
    let client = ctx.client()?;
    let mut view = loaded(&session, &client, checklist_id)?;
    gateway(view.toggle_completion(&client, &session, &item_id, done))?;

    let state = if done { "done" } else { "not done" };
    println!("Marked item {} {}", item_id, state);
    println!("{}", view.progress().summary());
    Ok(())
}

pub(super) fn handle_rename_command(
    ctx: &CliContext,
    raw_checklist: &str,
    raw_item: &str,
    name: &str,
) -> Result<()> {
    let checklist_id = parse_id(raw_checklist, "checklist")?;
    let item_id = RecordId::parse(raw_item);
    let session = ctx.require_session()?;
    let client = ctx.client()?;
    let mut view = loaded(&session, &client, checklist_id)?;
    gateway(view.rename(&client, &session, &item_id, name))?;
    println!("Renamed item {}", item_id);
    Ok(())
}

pub(super) fn handle_remove_command(
    ctx: &CliContext,
    raw_checklist: &str,
    raw_item: &str,
    yes: bool,
) -> Result<()> {
    let checklist_id = parse_id(raw_checklist, "checklist")?;
    let item_id = parse_id(raw_item, "item")?;
    let session = ctx.require_session()?;
    let client = ctx.client()?;
    let mut view = ItemCollection::new(checklist_id, None);
    let mut confirm = confirmer(yes);
    match gateway(view.delete(&client, &session, &item_id, &mut confirm))? {
        Removal::Removed => println!("Deleted item {}", item_id),
        Removal::Cancelled => println!("Cancelled"),
    }
    Ok(())
}

use checklist::checklists::ChecklistCollection;
use checklist::confirm::Removal;

use super::prompt::confirmer;
use super::*;

fn loaded(session: &Session, client: &RemoteClient) -> Result<ChecklistCollection> {
    let mut view = ChecklistCollection::default();
    gateway(view.activate(client, session))?;
    Ok(view)
}

pub(super) fn handle_lists_command(ctx: &CliContext, json: bool) -> Result<()> {
    let session = ctx.require_session()?;
    let client = ctx.client()?;
    let view = loaded(&session, &client)?;
    if json {
        return print_json(&view.checklists(), "checklists");
    }

    println!("{}", view.count_label());
    if view.checklists().is_empty() {
        println!("(no checklists; create one with `checklist create <NAME>`)");
    }
    for c in view.checklists() {
        if c.created_at.is_empty() {
            println!("{} {}", c.id, c.name);
        } else {
            println!("{} {} {}", c.id, c.name, c.created_at);
        }
    }
    Ok(())
}

pub(super) fn handle_create_command(ctx: &CliContext, name: &str, json: bool) -> Result<()> {
    let session = ctx.require_session()?;
    let client = ctx.client()?;
    // A fresh collection: create never re-fetches, it only appends.
    let mut view = ChecklistCollection::default();
    let created = gateway(view.create(&client, &session, name))?;
    if json {
        print_json(created, "checklist")?;
    } else {
        println!("Created checklist {} {}", created.id, created.name);
    }
    Ok(())
}

pub(super) fn handle_delete_command(ctx: &CliContext, raw_id: &str, yes: bool) -> Result<()> {
    let id = parse_id(raw_id, "checklist")?;
    let session = ctx.require_session()?;
    let client = ctx.client()?;
    let mut view = ChecklistCollection::default();
    let mut confirm = confirmer(yes);
    match gateway(view.delete(&client, &session, &id, &mut confirm))? {
        Removal::Removed => println!("Deleted checklist {}", id),
        Removal::Cancelled => println!("Cancelled"),
    }
    Ok(())
}

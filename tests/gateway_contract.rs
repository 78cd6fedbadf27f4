mod common;

use anyhow::Result;
use checklist::model::{RecordId, Session};
use checklist::remote::{ErrorKind, LoginRequest, RegisterRequest, extract_token};

fn register(
    client: &checklist::remote::RemoteClient,
    username: &str,
) -> Result<Session> {
    let payload = client.register(&RegisterRequest {
        username: username.to_string(),
        email: format!("{}@example.com", username),
        password: "hunter2".to_string(),
    })?;
    let token = extract_token(&payload).expect("token in register response");
    Ok(Session::new(token))
}

#[test]
fn checklist_and_item_crud_round_trip() -> Result<()> {
    let guard = common::spawn_server()?;
    let client = common::client_for(&guard)?;
    let session = register(&client, "alice")?;

    assert!(client.list_checklists(&session)?.is_empty());

    let groceries = client.create_checklist(&session, "Groceries")?;
    assert_eq!(groceries.name, "Groceries");
    assert!(groceries.id.is_valid());
    assert!(!groceries.created_at.is_empty());

    let chores = client.create_checklist(&session, "Chores")?;
    let names: Vec<String> = client
        .list_checklists(&session)?
        .into_iter()
        .map(|c| c.name)
        .collect();
    assert_eq!(names, vec!["Groceries", "Chores"]);

    let milk = client.create_item(&session, &groceries.id, "Milk")?;
    let eggs = client.create_item(&session, &groceries.id, "Eggs")?;
    assert!(!milk.item_completion_status);

    let done = client.update_item_status(&session, &groceries.id, &milk.id, true)?;
    assert_eq!(done.id, milk.id);
    assert!(done.item_completion_status);

    let renamed = client.rename_item(&session, &groceries.id, &eggs.id, "Free-range eggs")?;
    assert_eq!(renamed.name, "Free-range eggs");

    client.delete_item(&session, &groceries.id, &milk.id)?;
    let items = client.list_items(&session, &groceries.id)?;
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].name, "Free-range eggs");

    client.delete_checklist(&session, &chores.id)?;
    let remaining = client.list_checklists(&session)?;
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0].id, groceries.id);

    Ok(())
}

#[test]
fn login_returns_a_usable_token() -> Result<()> {
    let guard = common::spawn_server()?;
    let client = common::client_for(&guard)?;
    register(&client, "bob")?;

    let payload = client.login(&LoginRequest {
        username: "bob".to_string(),
        password: "hunter2".to_string(),
    })?;
    let session = Session::new(extract_token(&payload).expect("token in login response"));
    client.create_checklist(&session, "Packing")?;
    assert_eq!(client.list_checklists(&session)?.len(), 1);

    let err = client
        .login(&LoginRequest {
            username: "bob".to_string(),
            password: "wrong".to_string(),
        })
        .unwrap_err();
    assert_eq!(err.kind, ErrorKind::Auth);

    Ok(())
}

#[test]
fn bad_token_is_an_auth_error() -> Result<()> {
    let guard = common::spawn_server()?;
    let client = common::client_for(&guard)?;

    let err = client
        .list_checklists(&Session::new("not-a-token"))
        .unwrap_err();
    assert_eq!(err.kind, ErrorKind::Auth);
    assert!(err.is_auth());
    Ok(())
}

#[test]
fn duplicate_registration_is_rejected() -> Result<()> {
    let guard = common::spawn_server()?;
    let client = common::client_for(&guard)?;
    register(&client, "carol")?;

    let err = register(&client, "carol").unwrap_err();
    let err = err
        .downcast_ref::<checklist::remote::GatewayError>()
        .expect("gateway error");
    assert_eq!(err.kind, ErrorKind::Server);
    Ok(())
}

#[test]
fn checklists_are_private_to_their_owner() -> Result<()> {
    let guard = common::spawn_server()?;
    let client = common::client_for(&guard)?;
    let alice = register(&client, "alice")?;
    let mallory = register(&client, "mallory")?;

    let list = client.create_checklist(&alice, "Secret")?;
    assert!(client.list_checklists(&mallory)?.is_empty());

    let err = client.list_items(&mallory, &list.id).unwrap_err();
    assert_eq!(err.kind, ErrorKind::Server);

    let err = client.delete_checklist(&mallory, &list.id).unwrap_err();
    assert_eq!(err.kind, ErrorKind::Server);
    assert_eq!(client.list_checklists(&alice)?.len(), 1);
    Ok(())
}

#[test]
fn unknown_item_is_a_server_error() -> Result<()> {
    let guard = common::spawn_server()?;
    let client = common::client_for(&guard)?;
    let session = register(&client, "dave")?;
    let list = client.create_checklist(&session, "Trip")?;

    let err = client
        .update_item_status(&session, &list.id, &RecordId::Number(9999), true)
        .unwrap_err();
    assert_eq!(err.kind, ErrorKind::Server);
    assert!(err.detail.contains("404"));
    Ok(())
}

#[test]
fn text_ids_cannot_reach_other_routes() -> Result<()> {
    let guard = common::spawn_server()?;
    let client = common::client_for(&guard)?;
    let session = register(&client, "henry")?;
    let list = client.create_checklist(&session, "L")?;
    let item = client.create_item(&session, &list.id, "Bread")?;

    let crafted = RecordId::Text(format!("{}/item/{}", list.id, item.id));
    let err = client.delete_checklist(&session, &crafted).unwrap_err();
    assert_eq!(err.kind, ErrorKind::Server);

    let items = client.list_items(&session, &list.id)?;
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].id, item.id);
    assert_eq!(client.list_checklists(&session)?.len(), 1);
    Ok(())
}

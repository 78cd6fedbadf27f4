use super::*;
use crate::remote::ErrorKind;
use crate::tests::fake_gateway::FakeGateway;

fn item(id: i64, name: &str, done: bool) -> Item {
    Item {
        id: RecordId::Number(id),
        name: name.to_string(),
        item_completion_status: done,
    }
}

fn session() -> Session {
    Session::new("t")
}

fn loaded(gw: &FakeGateway) -> ItemCollection {
    let mut view = ItemCollection::new(RecordId::Number(1), None);
    view.activate(gw, &session()).unwrap();
    view
}

fn groceries() -> FakeGateway {
    FakeGateway::default().with_items(
        RecordId::Number(1),
        vec![
            item(2, "Bread", true),
            item(3, "Milk", false),
            item(4, "Eggs", false),
        ],
    )
}

#[test]
fn label_falls_back_to_placeholder() {
    assert_eq!(ItemCollection::new(RecordId::Number(1), None).label(), "Checklist");
    assert_eq!(ItemCollection::new(RecordId::Number(1), Some("  ")).label(), "Checklist");
    assert_eq!(
        ItemCollection::new(RecordId::Number(1), Some("Groceries")).label(),
        "Groceries"
    );
}

#[test]
fn progress_is_rounded_percentage() {
    assert_eq!(Progress::of(&[]).percent, 0);

    let third = [item(1, "a", true), item(2, "b", false), item(3, "c", false)];
    let p = Progress::of(&third);
    assert_eq!((p.completed, p.total, p.percent), (1, 3, 33));
    assert_eq!(p.summary(), "1 of 3 completed");

    let two_thirds = [item(1, "a", true), item(2, "b", true), item(3, "c", false)];
    assert_eq!(Progress::of(&two_thirds).percent, 67);

    let mut eighth = vec![item(1, "a", true)];
    eighth.extend((2..=8).map(|i| item(i, "x", false)));
    assert_eq!(Progress::of(&eighth).percent, 13);

    let all = [item(1, "a", true), item(2, "b", true)];
    assert_eq!(Progress::of(&all).percent, 100);
}

#[test]
fn failed_activation_clears_loading() {
    let gw = groceries();
    gw.fail_on(Operation::ListItems, ErrorKind::Network);
    let mut view = ItemCollection::new(RecordId::Number(1), None);
    assert!(view.is_loading());
    assert!(view.activate(&gw, &session()).is_err());
    assert!(!view.is_loading());
    assert!(view.items().is_empty());
    assert_eq!(view.progress().percent, 0);
}

#[test]
fn toggle_replaces_only_the_target() {
    let gw = groceries();
    let mut view = loaded(&gw);
    let before = view.items().to_vec();
    assert_eq!(view.progress().completed, 1);

    view.toggle_completion(&gw, &session(), &RecordId::Number(3), true)
        .unwrap();

    assert_eq!(view.items().len(), before.len());
    assert_eq!(view.items()[0], before[0]);
    assert_eq!(view.items()[1], item(3, "Milk", true));
    assert_eq!(view.items()[2], before[2]);
    assert_eq!(view.progress().completed, 2);
}

#[test]
fn toggle_takes_the_server_record_verbatim() {
    let gw = groceries();
    let mut view = loaded(&gw);
    gw.server_rename_item(&RecordId::Number(1), &RecordId::Number(3), "Oat milk");

    view.toggle_completion(&gw, &session(), &RecordId::Number(3), true)
        .unwrap();
    assert_eq!(view.items()[1], item(3, "Oat milk", true));
}

#[test]
fn reply_for_an_unknown_id_changes_nothing() {
    let gw = groceries();
    let mut view = loaded(&gw);
    let before = view.items().to_vec();
    gw.echo_item_id(RecordId::Number(77));

    view.toggle_completion(&gw, &session(), &RecordId::Number(3), true)
        .unwrap();
    assert_eq!(view.items(), before.as_slice());

    view.start_edit(&RecordId::Number(4));
    view.rename(&gw, &session(), &RecordId::Number(4), "Duck eggs")
        .unwrap();
    assert_eq!(view.items(), before.as_slice());
    assert_eq!(gw.calls_to(Operation::UpdateItemStatus), 1);
    assert_eq!(gw.calls_to(Operation::RenameItem), 1);
}

#[test]
fn toggle_with_invalid_id_sends_nothing() {
    let gw = groceries();
    let mut view = loaded(&gw);
    for bad in [RecordId::Number(0), RecordId::Number(-2), RecordId::Text(" ".into())] {
        let err = view.toggle_completion(&gw, &session(), &bad, true).unwrap_err();
        assert_eq!(err.kind, ErrorKind::Validation);
    }
    assert_eq!(gw.calls_to(Operation::UpdateItemStatus), 0);
}

#[test]
fn failed_toggle_leaves_list_unchanged() {
    let gw = groceries();
    let mut view = loaded(&gw);
    let before = view.items().to_vec();
    gw.fail_on(Operation::UpdateItemStatus, ErrorKind::Server);

    assert!(
        view.toggle_completion(&gw, &session(), &RecordId::Number(3), true)
            .is_err()
    );
    assert_eq!(view.items(), before.as_slice());
}

#[test]
fn create_guards_blank_names_and_appends() {
    let gw = groceries();
    let mut view = loaded(&gw);

    assert!(view.create(&gw, &session(), "  ").is_err());
    assert_eq!(gw.calls_to(Operation::CreateItem), 0);

    let created = view.create(&gw, &session(), " Butter ").unwrap().clone();
    assert_eq!(created.name, "Butter");
    assert!(!created.item_completion_status);
    assert_eq!(view.items().len(), 4);
    assert_eq!(view.items().last(), Some(&created));
    assert_eq!(view.progress().summary(), "1 of 4 completed");
}

#[test]
fn rename_success_closes_the_edit() {
    let gw = groceries();
    let mut view = loaded(&gw);
    assert!(view.start_edit(&RecordId::Number(4)));
    assert_eq!(view.editing().map(|e| e.draft.as_str()), Some("Eggs"));

    if let Some(draft) = view.edit_draft_mut() {
        *draft = "Free-range eggs".to_string();
    }
    assert!(view.commit_edit(&gw, &session()).unwrap());

    assert!(view.editing().is_none());
    assert_eq!(view.items()[2], item(4, "Free-range eggs", false));
    assert_eq!(view.items().len(), 3);
}

#[test]
fn rename_failure_keeps_the_edit_open() {
    let gw = groceries();
    let mut view = loaded(&gw);
    view.start_edit(&RecordId::Number(4));
    gw.fail_on(Operation::RenameItem, ErrorKind::Network);

    let err = view
        .rename(&gw, &session(), &RecordId::Number(4), "Duck eggs")
        .unwrap_err();
    assert_eq!(err.kind, ErrorKind::Network);
    assert_eq!(
        view.editing(),
        Some(&EditState {
            item_id: RecordId::Number(4),
            draft: "Eggs".to_string(),
        })
    );
    assert_eq!(view.items()[2], item(4, "Eggs", false));
}

#[test]
fn start_edit_on_unknown_item_is_refused() {
    let gw = groceries();
    let mut view = loaded(&gw);
    assert!(!view.start_edit(&RecordId::Number(99)));
    assert!(view.editing().is_none());
    assert!(!view.commit_edit(&gw, &session()).unwrap());
}

#[test]
fn delete_is_confirmed_and_removes_only_target() {
    let gw = groceries();
    let mut view = loaded(&gw);

    let out = view
        .delete(&gw, &session(), &RecordId::Number(2), &mut |_: &str| false)
        .unwrap();
    assert_eq!(out, Removal::Cancelled);
    assert_eq!(gw.calls_to(Operation::DeleteItem), 0);

    let out = view
        .delete(&gw, &session(), &RecordId::Number(2), &mut |p: &str| {
            p == DELETE_PROMPT
        })
        .unwrap();
    assert_eq!(out, Removal::Removed);
    assert_eq!(
        view.items(),
        &[item(3, "Milk", false), item(4, "Eggs", false)]
    );
    assert_eq!(view.progress().percent, 0);
}

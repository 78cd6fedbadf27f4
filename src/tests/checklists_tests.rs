use super::*;
use crate::remote::ErrorKind;
use crate::session::View;
use crate::store::MemorySessionStore;
use crate::tests::fake_gateway::FakeGateway;

fn checklist(id: i64, name: &str) -> Checklist {
    Checklist {
        id: RecordId::Number(id),
        name: name.to_string(),
        created_at: "2024-01-01".to_string(),
    }
}

fn session() -> Session {
    Session::new("t")
}

#[test]
fn activation_loads_the_list() {
    let gw = FakeGateway::default().with_checklists(vec![checklist(1, "A"), checklist(2, "B")]);
    let mut view = ChecklistCollection::default();
    assert!(view.is_loading());

    view.activate(&gw, &session()).unwrap();
    assert!(!view.is_loading());
    assert_eq!(view.checklists().len(), 2);
    assert_eq!(view.count_label(), "2 checklists");
}

#[test]
fn failed_activation_stays_empty_and_stops_loading() {
    let gw = FakeGateway::default().with_checklists(vec![checklist(1, "A")]);
    gw.fail_on(Operation::ListChecklists, ErrorKind::Server);
    let mut view = ChecklistCollection::default();

    let err = view.activate(&gw, &session()).unwrap_err();
    assert_eq!(err.kind, ErrorKind::Server);
    assert!(!view.is_loading());
    assert!(view.checklists().is_empty());
    assert_eq!(view.count_label(), "0 checklists");
}

#[test]
fn blank_names_never_issue_a_request() {
    let gw = FakeGateway::default().with_checklists(vec![checklist(1, "A")]);
    let mut view = ChecklistCollection::default();
    view.activate(&gw, &session()).unwrap();
    let before = view.checklists().to_vec();

    for name in ["", "   ", "\t\n"] {
        let err = view.create(&gw, &session(), name).unwrap_err();
        assert_eq!(err.kind, ErrorKind::Validation);
    }
    assert_eq!(gw.calls_to(Operation::CreateChecklist), 0);
    assert_eq!(view.checklists(), before.as_slice());
}

#[test]
fn create_appends_server_record_once_in_order() {
    let gw = FakeGateway::default().with_checklists(vec![checklist(1, "A"), checklist(2, "B")]);
    let mut view = ChecklistCollection::default();
    view.activate(&gw, &session()).unwrap();

    let created = view.create(&gw, &session(), "Groceries").unwrap().clone();
    assert_eq!(created.name, "Groceries");

    let ids: Vec<_> = view.checklists().iter().map(|c| c.id.clone()).collect();
    assert_eq!(
        ids,
        vec![RecordId::Number(1), RecordId::Number(2), created.id.clone()]
    );
    assert_eq!(view.checklists().iter().filter(|c| c.id == created.id).count(), 1);
    assert_eq!(view.count_label(), "3 checklists");
}

#[test]
fn failed_create_leaves_list_unchanged() {
    let gw = FakeGateway::default().with_checklists(vec![checklist(1, "A")]);
    let mut view = ChecklistCollection::default();
    view.activate(&gw, &session()).unwrap();
    gw.fail_on(Operation::CreateChecklist, ErrorKind::Network);

    assert!(view.create(&gw, &session(), "New").is_err());
    assert_eq!(view.checklists(), &[checklist(1, "A")]);
}

#[test]
fn delete_requires_confirmation() {
    let gw = FakeGateway::default().with_checklists(vec![checklist(1, "A"), checklist(2, "B")]);
    let mut view = ChecklistCollection::default();
    view.activate(&gw, &session()).unwrap();

    let mut asked = Vec::new();
    let mut decline = |prompt: &str| {
        asked.push(prompt.to_string());
        false
    };
    let out = view
        .delete(&gw, &session(), &RecordId::Number(1), &mut decline)
        .unwrap();
    assert_eq!(out, Removal::Cancelled);
    assert_eq!(asked, vec![DELETE_PROMPT.to_string()]);
    assert_eq!(gw.calls_to(Operation::DeleteChecklist), 0);
    assert_eq!(view.checklists().len(), 2);
}

#[test]
fn confirmed_delete_removes_only_that_entry() {
    let gw = FakeGateway::default().with_checklists(vec![
        checklist(1, "A"),
        checklist(2, "B"),
        checklist(3, "C"),
    ]);
    let mut view = ChecklistCollection::default();
    view.activate(&gw, &session()).unwrap();

    let out = view
        .delete(&gw, &session(), &RecordId::Number(2), &mut |_: &str| true)
        .unwrap();
    assert_eq!(out, Removal::Removed);
    assert_eq!(view.checklists(), &[checklist(1, "A"), checklist(3, "C")]);
}

#[test]
fn failed_delete_keeps_stale_entry() {
    let gw = FakeGateway::default().with_checklists(vec![checklist(1, "A")]);
    let mut view = ChecklistCollection::default();
    view.activate(&gw, &session()).unwrap();
    gw.fail_on(Operation::DeleteChecklist, ErrorKind::Auth);

    let err = view
        .delete(&gw, &session(), &RecordId::Number(1), &mut |_: &str| true)
        .unwrap_err();
    assert_eq!(err.kind, ErrorKind::Auth);
    assert_eq!(view.checklists(), &[checklist(1, "A")]);
}

#[test]
fn select_navigates_without_a_request() {
    let gw = FakeGateway::default();
    let view = ChecklistCollection::default();
    let mut ctl = SessionController::new(MemorySessionStore::default());
    ctl.complete_login("t").unwrap();

    assert!(view.select(&mut ctl, RecordId::Number(9)));
    assert_eq!(ctl.view(), View::ItemList);
    assert_eq!(ctl.selected_checklist(), Some(&RecordId::Number(9)));
    assert_eq!(gw.total_calls(), 0);
}

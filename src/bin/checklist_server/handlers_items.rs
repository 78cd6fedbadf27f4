use super::*;

/// Runs `f` against the caller's checklist, or answers 404.
async fn with_checklist<F>(state: &AppState, subject: &Subject, checklist_id: i64, f: F) -> Response
where
    F: FnOnce(&mut ChecklistRecord) -> Response,
{
    let mut checklists = state.checklists.write().await;
    match checklists
        .iter_mut()
        .find(|c| c.id == checklist_id && c.owner == subject.username)
    {
        Some(checklist) => f(checklist),
        None => not_found(),
    }
}

fn find_item(checklist: &mut ChecklistRecord, item_id: i64) -> Option<&mut ItemRecord> {
    checklist.items.iter_mut().find(|i| i.id == item_id)
}

pub(super) async fn list_items(
    State(state): State<Arc<AppState>>,
    Extension(subject): Extension<Subject>,
    Path(checklist_id): Path<i64>,
) -> Response {
    with_checklist(&state, &subject, checklist_id, |checklist| {
        envelope(&checklist.items).into_response()
    })
    .await
}

pub(super) async fn create_item(
    State(state): State<Arc<AppState>>,
    Extension(subject): Extension<Subject>,
    Path(checklist_id): Path<i64>,
    Json(body): Json<ItemNameBody>,
) -> Response {
    let name = body.item_name.trim().to_string();
    if name.is_empty() {
        return bad_request("itemName is required");
    }

    let id = state.next_id();
    with_checklist(&state, &subject, checklist_id, move |checklist| {
        let item = ItemRecord {
            id,
            name,
            item_completion_status: false,
        };
        let out = envelope(&item).into_response();
        checklist.items.push(item);
        tracing::info!(checklist_id, id, "item created");
        out
    })
    .await
}

pub(super) async fn update_item_status(
    State(state): State<Arc<AppState>>,
    Extension(subject): Extension<Subject>,
    Path((checklist_id, item_id)): Path<(i64, i64)>,
    Json(body): Json<ItemStatusBody>,
) -> Response {
    with_checklist(&state, &subject, checklist_id, |checklist| {
        let Some(item) = find_item(checklist, item_id) else {
            return not_found();
        };
        item.item_completion_status = body.item_completion_status;
        tracing::debug!(checklist_id, item_id, done = item.item_completion_status, "item status");
        envelope(&*item).into_response()
    })
    .await
}

pub(super) async fn rename_item(
    State(state): State<Arc<AppState>>,
    Extension(subject): Extension<Subject>,
    Path((checklist_id, item_id)): Path<(i64, i64)>,
    Json(body): Json<ItemNameBody>,
) -> Response {
    let name = body.item_name.trim().to_string();
    if name.is_empty() {
        return bad_request("itemName is required");
    }

    with_checklist(&state, &subject, checklist_id, move |checklist| {
        let Some(item) = find_item(checklist, item_id) else {
            return not_found();
        };
        item.name = name;
        tracing::debug!(checklist_id, item_id, "item renamed");
        envelope(&*item).into_response()
    })
    .await
}

pub(super) async fn delete_item(
    State(state): State<Arc<AppState>>,
    Extension(subject): Extension<Subject>,
    Path((checklist_id, item_id)): Path<(i64, i64)>,
) -> Response {
    with_checklist(&state, &subject, checklist_id, |checklist| {
        let Some(pos) = checklist.items.iter().position(|i| i.id == item_id) else {
            return not_found();
        };
        checklist.items.remove(pos);
        tracing::info!(checklist_id, item_id, "item deleted");
        envelope(serde_json::json!({ "id": item_id, "deleted": true })).into_response()
    })
    .await
}

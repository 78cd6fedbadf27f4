use super::*;

pub(super) async fn list_checklists(
    State(state): State<Arc<AppState>>,
    Extension(subject): Extension<Subject>,
) -> Response {
    let checklists = state.checklists.read().await;
    let owned: Vec<&ChecklistRecord> = checklists
        .iter()
        .filter(|c| c.owner == subject.username)
        .collect();
    envelope(owned).into_response()
}

pub(super) async fn create_checklist(
    State(state): State<Arc<AppState>>,
    Extension(subject): Extension<Subject>,
    Json(body): Json<NameBody>,
) -> Response {
    let name = body.name.trim();
    if name.is_empty() {
        return bad_request("name is required");
    }

    let record = ChecklistRecord {
        id: state.next_id(),
        name: name.to_string(),
        created_at: now_ts(),
        owner: subject.username.clone(),
        items: Vec::new(),
    };
    tracing::info!(id = record.id, owner = %subject.username, "checklist created");

    let out = envelope(&record).into_response();
    state.checklists.write().await.push(record);
    out
}

pub(super) async fn delete_checklist(
    State(state): State<Arc<AppState>>,
    Extension(subject): Extension<Subject>,
    Path(id): Path<i64>,
) -> Response {
    let mut checklists = state.checklists.write().await;
    let Some(pos) = checklists
        .iter()
        .position(|c| c.id == id && c.owner == subject.username)
    else {
        return not_found();
    };
    checklists.remove(pos);
    tracing::info!(id, owner = %subject.username, "checklist deleted");

    envelope(serde_json::json!({ "id": id, "deleted": true })).into_response()
}

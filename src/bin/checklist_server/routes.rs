//! Route table. Everything except registration, login and health checks
//! sits behind `require_bearer`.

use super::*;

pub(super) fn authed_router(state: Arc<AppState>) -> Router<Arc<AppState>> {
    Router::new()
        .route("/checklist", get(list_checklists).post(create_checklist))
        .route("/checklist/:id", delete(delete_checklist))
        .route("/checklist/:id/item", get(list_items).post(create_item))
        .route(
            "/checklist/:id/item/:item_id",
            put(update_item_status).delete(delete_item),
        )
        .route("/checklist/:id/item/rename/:item_id", put(rename_item))
        .layer(middleware::from_fn_with_state(state, require_bearer))
}

pub(super) fn api_router(state: Arc<AppState>) -> Router<Arc<AppState>> {
    Router::new()
        .route("/healthz", get(healthz))
        .route("/register", post(register))
        .route("/login", post(login))
        .merge(authed_router(state))
}

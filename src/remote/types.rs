//! Request bodies sent to the checklist service.

#[derive(Clone, Debug, serde::Serialize)]
pub struct RegisterRequest {
    pub username: String,
    pub email: String,
    pub password: String,
}

#[derive(Clone, Debug, serde::Serialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Debug, serde::Serialize)]
pub(super) struct CreateChecklistRequest<'a> {
    pub(super) name: &'a str,
}

#[derive(Debug, serde::Serialize)]
pub(super) struct ItemNameRequest<'a> {
    #[serde(rename = "itemName")]
    pub(super) item_name: &'a str,
}

#[derive(Debug, serde::Serialize)]
pub(super) struct ItemStatusRequest {
    #[serde(rename = "itemCompletionStatus")]
    pub(super) item_completion_status: bool,
}

use super::*;

/// Authenticated caller, inserted by `require_bearer`.
#[derive(Clone, Debug)]
pub(super) struct Subject {
    pub(super) username: String,
}

#[derive(Clone, Debug)]
pub(super) struct User {
    pub(super) username: String,
    pub(super) password_hash: String,
    pub(super) created_at: String,
}

#[derive(Clone, Debug, serde::Serialize)]
pub(super) struct ItemRecord {
    pub(super) id: i64,
    pub(super) name: String,

    #[serde(rename = "itemCompletionStatus")]
    pub(super) item_completion_status: bool,
}

#[derive(Clone, Debug, serde::Serialize)]
pub(super) struct ChecklistRecord {
    pub(super) id: i64,
    pub(super) name: String,

    #[serde(rename = "createdAt")]
    pub(super) created_at: String,

    #[serde(skip)]
    pub(super) owner: String,

    #[serde(skip)]
    pub(super) items: Vec<ItemRecord>,
}

pub(super) struct AppState {
    pub(super) users: RwLock<HashMap<String, User>>,

    // blake3(token) -> username
    pub(super) tokens: RwLock<HashMap<String, String>>,

    pub(super) checklists: RwLock<Vec<ChecklistRecord>>,

    next_id: AtomicI64,
}

impl AppState {
    pub(super) fn new() -> Self {
        Self {
            users: RwLock::new(HashMap::new()),
            tokens: RwLock::new(HashMap::new()),
            checklists: RwLock::new(Vec::new()),
            next_id: AtomicI64::new(1),
        }
    }

    /// Shared by checklists and items, so ids are unique server-wide.
    pub(super) fn next_id(&self) -> i64 {
        self.next_id.fetch_add(1, Ordering::Relaxed)
    }
}

#[derive(Debug, serde::Deserialize)]
pub(super) struct RegisterBody {
    #[serde(default)]
    pub(super) username: String,
    #[serde(default)]
    pub(super) email: String,
    #[serde(default)]
    pub(super) password: String,
}

#[derive(Debug, serde::Deserialize)]
pub(super) struct LoginBody {
    #[serde(default)]
    pub(super) username: String,
    #[serde(default)]
    pub(super) password: String,
}

#[derive(Debug, serde::Deserialize)]
pub(super) struct NameBody {
    #[serde(default)]
    pub(super) name: String,
}

#[derive(Debug, serde::Deserialize)]
pub(super) struct ItemNameBody {
    #[serde(rename = "itemName", default)]
    pub(super) item_name: String,
}

#[derive(Debug, serde::Deserialize)]
pub(super) struct ItemStatusBody {
    #[serde(rename = "itemCompletionStatus")]
    pub(super) item_completion_status: bool,
}

/// `{ "data": ... }`, the shape every success response uses.
pub(super) fn envelope<T: serde::Serialize>(data: T) -> Json<serde_json::Value> {
    Json(serde_json::json!({ "data": data }))
}

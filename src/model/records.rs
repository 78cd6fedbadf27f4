use serde::{Deserialize, Serialize};

use super::ids::RecordId;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Checklist {
    pub id: RecordId,
    pub name: String,

    #[serde(rename = "createdAt", default)]
    pub created_at: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub id: RecordId,

    #[serde(alias = "itemName")]
    pub name: String,

    #[serde(rename = "itemCompletionStatus", default)]
    pub item_completion_status: bool,
}

/// `{ "data": ... }` wrapper used by every list/create/update response.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Envelope<T> {
    pub data: T,
}

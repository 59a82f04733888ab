use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub type TodoId = u64;

/// One todo record as it lives in the collection file and on the wire.
/// `updated_at` stays absent until the record is updated for the first time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Todo {
    pub id: TodoId,
    pub title: String,
    pub description: String,
    pub completed: bool,
    pub created_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

/// Validated client input, already trimmed. Absent optional fields keep
/// their `None` so the update merge can tell "not sent" from "sent".
#[derive(Debug, Clone, PartialEq)]
pub struct TodoDraft {
    pub title: String,
    pub description: Option<String>,
    pub completed: Option<bool>,
}

#[derive(Debug, Serialize)]
pub struct DeletedTodo {
    pub message: String,
    pub todo: Todo,
}

//! The todo store: validation, identifier assignment, the update merge rule,
//! and the load / mutate / persist cycle against a single flat file.

mod persistence;
mod validation;

use std::path::{Path, PathBuf};

use chrono::Utc;
use serde_json::Value;
use tracing::debug;

use crate::error::{AppError, AppResult};
use crate::models::{Todo, TodoDraft, TodoId};

use persistence::CollectionFile;

/// Owns the authoritative collection. Keeps no records in memory between
/// calls: every operation re-reads the file and every mutation rewrites it
/// in full.
#[derive(Debug, Clone)]
pub struct TodoStore {
    file: CollectionFile,
}

impl TodoStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            file: CollectionFile::new(path),
        }
    }

    pub fn path(&self) -> &Path {
        self.file.path()
    }

    /// Full collection in insertion order.
    pub async fn list(&self) -> AppResult<Vec<Todo>> {
        Ok(self.file.load().await)
    }

    pub async fn get(&self, id: TodoId) -> AppResult<Todo> {
        self.file
            .load()
            .await
            .into_iter()
            .find(|todo| todo.id == id)
            .ok_or(AppError::NotFound(id))
    }

    /// Validates the payload, assigns the next identifier, and appends the
    /// record. Validation runs before any file write, so a rejected payload
    /// leaves the collection untouched.
    pub async fn create(&self, payload: &Value) -> AppResult<Todo> {
        let draft = validation::parse_draft(payload)?;

        let mut todos = self.file.load().await;
        let todo = Todo {
            id: next_id(&todos),
            title: draft.title,
            description: draft.description.unwrap_or_default(),
            completed: draft.completed.unwrap_or(false),
            created_at: Utc::now(),
            updated_at: None,
        };

        todos.push(todo.clone());
        self.file.save(&todos).await?;
        debug!(id = todo.id, "created todo");

        Ok(todo)
    }

    /// Validates the payload, then merges it into the stored record without
    /// moving it in the collection.
    pub async fn update(&self, id: TodoId, payload: &Value) -> AppResult<Todo> {
        let draft = validation::parse_draft(payload)?;

        let mut todos = self.file.load().await;
        let todo = todos
            .iter_mut()
            .find(|todo| todo.id == id)
            .ok_or(AppError::NotFound(id))?;

        apply_update(todo, draft);
        let updated = todo.clone();

        self.file.save(&todos).await?;
        debug!(id, "updated todo");

        Ok(updated)
    }

    /// Removes the record and returns it for confirmation display.
    pub async fn delete(&self, id: TodoId) -> AppResult<Todo> {
        let mut todos = self.file.load().await;
        let index = todos
            .iter()
            .position(|todo| todo.id == id)
            .ok_or(AppError::NotFound(id))?;

        let removed = todos.remove(index);
        self.file.save(&todos).await?;
        debug!(id, "deleted todo");

        Ok(removed)
    }
}

/// One past the current maximum, recomputed from the collection on every
/// create. An empty collection starts at 1. Deleting the highest record
/// hands its id to the next create; lower ids are never reused.
fn next_id(todos: &[Todo]) -> TodoId {
    todos.iter().map(|todo| todo.id).max().map_or(1, |max| max + 1)
}

/// The update merge: `title` is always replaced, `description` only by a
/// non-empty value, `completed` only when supplied. `updated_at` is stamped
/// on every call.
fn apply_update(todo: &mut Todo, draft: TodoDraft) {
    todo.title = draft.title;
    if let Some(description) = draft.description
        && !description.is_empty()
    {
        todo.description = description;
    }
    if let Some(completed) = draft.completed {
        todo.completed = completed;
    }
    todo.updated_at = Some(Utc::now());
}

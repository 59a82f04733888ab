use std::path::{Path, PathBuf};

use tokio::fs;
use tracing::{debug, warn};

use crate::error::{AppError, AppResult};
use crate::models::Todo;

/// The flat-file medium: one pretty-printed JSON array holding the whole
/// collection. Reads never fail (anything unreadable loads as empty),
/// writes go through a temp file and rename so an interrupted save keeps
/// the previous content intact.
#[derive(Debug, Clone)]
pub struct CollectionFile {
    path: PathBuf,
}

impl CollectionFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub async fn load(&self) -> Vec<Todo> {
        let bytes = match fs::read(&self.path).await {
            Ok(bytes) => bytes,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "todo file not found, starting empty");
                return Vec::new();
            }
            Err(err) => {
                warn!(
                    path = %self.path.display(),
                    error = %err,
                    "failed to read todo file, treating it as empty"
                );
                return Vec::new();
            }
        };

        match serde_json::from_slice(&bytes) {
            Ok(todos) => todos,
            Err(err) => {
                warn!(
                    path = %self.path.display(),
                    error = %err,
                    "todo file is not a valid todo array, treating it as empty"
                );
                Vec::new()
            }
        }
    }

    pub async fn save(&self, todos: &[Todo]) -> AppResult<()> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent).await.map_err(|err| {
                AppError::persistence(format!(
                    "failed to create directory '{}': {}",
                    parent.display(),
                    err
                ))
            })?;
        }

        let json = serde_json::to_vec_pretty(todos)
            .map_err(|err| AppError::persistence(format!("failed to serialize todos: {}", err)))?;

        let temp_path = self.path.with_extension("tmp");
        fs::write(&temp_path, json).await.map_err(|err| {
            AppError::persistence(format!(
                "failed to write temp file '{}': {}",
                temp_path.display(),
                err
            ))
        })?;

        fs::rename(&temp_path, &self.path).await.map_err(|err| {
            AppError::persistence(format!(
                "failed to rename '{}' to '{}': {}",
                temp_path.display(),
                self.path.display(),
                err
            ))
        })?;

        Ok(())
    }
}

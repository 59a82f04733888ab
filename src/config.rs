use std::env;
use std::path::PathBuf;

use anyhow::{Context, Result};

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub todos_file: PathBuf,
    pub static_dir: Option<PathBuf>,
}

impl AppConfig {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();

        let host = env::var("APP_HOST").unwrap_or_else(|_| "0.0.0.0".to_string());

        let port = env::var("APP_PORT")
            .unwrap_or_else(|_| "3000".to_string())
            .parse::<u16>()
            .context("APP_PORT must be a valid u16")?;

        let todos_file = env::var("TODOS_FILE")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("todos.json"));

        let static_dir = env::var("STATIC_DIR").ok().map(PathBuf::from);

        Ok(Self {
            host,
            port,
            todos_file,
            static_dir,
        })
    }

    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

pub mod app;
pub mod config;
pub mod error;
pub mod handlers;
pub mod models;
pub mod state;
pub mod store;

pub use app::build_router;
pub use error::{AppError, AppResult};
pub use models::{Todo, TodoId};
pub use store::TodoStore;

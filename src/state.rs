use std::sync::Arc;

use crate::store::TodoStore;

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<TodoStore>,
}

impl AppState {
    pub fn new(store: Arc<TodoStore>) -> Self {
        Self { store }
    }
}

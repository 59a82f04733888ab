use std::path::Path;

use axum::{Router, routing::get};
use tower_http::{cors::CorsLayer, services::ServeDir, trace::TraceLayer};

use crate::handlers;
use crate::state::AppState;

/// Wires the API index and the five CRUD routes, with permissive CORS for
/// the browser frontend and request tracing. When `static_dir` is set the
/// frontend assets are served for everything the API does not match.
pub fn build_router(state: AppState, static_dir: Option<&Path>) -> Router {
    let mut router = Router::new()
        .route("/", get(handlers::index))
        .route(
            "/todos",
            get(handlers::list_todos).post(handlers::create_todo),
        )
        .route(
            "/todos/{id}",
            get(handlers::get_todo)
                .put(handlers::update_todo)
                .delete(handlers::delete_todo),
        )
        .with_state(state);

    if let Some(dir) = static_dir {
        router = router.fallback_service(ServeDir::new(dir));
    }

    router
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}

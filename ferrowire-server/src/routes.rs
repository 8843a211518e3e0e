/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 23/8/26
******************************************************************************/

//! Route definitions for the file API.
//!
//! # Route Structure
//!
//! ```text
//! /
//! ├── /health                      GET    - Health check
//! └── /files                       GET    - List files
//!     ├── /create                  POST   - Create a file
//!     └── /{file_id}               GET    - Get a file by id
//!         │                        DELETE - Delete a file
//!         ├── /contents            GET    - Render a file as wire text
//!         ├── /validate            GET    - Validate a file
//!         └── /messages            POST   - Append a message
//! ```

use crate::handlers::{
    AppState, add_message, create_file, delete_file, get_file, get_file_contents, health_check,
    list_files, validate_file,
};
use axum::{Router, routing::get, routing::post};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

/// Creates the file API router with all endpoints and middleware.
///
/// # Examples
///
/// ```ignore
/// use ferrowire_server::handlers::AppState;
/// use ferrowire_server::routes::create_router;
///
/// let state = Arc::new(AppState { /* ... */ });
/// let router = create_router(state);
/// axum::serve(listener, router).await?;
/// ```
pub fn create_router(state: Arc<AppState>) -> Router {
    let file_routes = Router::new()
        .route("/", get(list_files))
        .route("/create", post(create_file))
        .route("/{file_id}", get(get_file).delete(delete_file))
        .route("/{file_id}/contents", get(get_file_contents))
        .route("/{file_id}/validate", get(validate_file))
        .route("/{file_id}/messages", post(add_message));

    Router::new()
        .route("/health", get(health_check))
        .nest("/files", file_routes)
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}

/// Creates a minimal router for testing without middleware.
#[cfg(test)]
pub fn create_test_router(state: Arc<AppState>) -> Router {
    let file_routes = Router::new()
        .route("/", get(list_files))
        .route("/create", post(create_file))
        .route("/{file_id}", get(get_file).delete(delete_file))
        .route("/{file_id}/contents", get(get_file_contents))
        .route("/{file_id}/validate", get(validate_file))
        .route("/{file_id}/messages", post(add_message));

    Router::new()
        .route("/health", get(health_check))
        .nest("/files", file_routes)
        .with_state(state)
}

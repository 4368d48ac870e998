use axum::{
    Json, Router,
    routing::{get, post},
};
use serde_json::{Value, json};
use tower_http::{services::ServeDir, trace::TraceLayer};

use crate::{AppState, users::handlers};

/// Create the application router.
pub fn create_router(state: AppState) -> Router {
    // Uploaded pictures are served statically, the way the records
    // reference them.
    let uploads = ServeDir::new(state.files.upload_dir().to_path_buf());

    Router::new()
        .route("/", get(handlers::list_users_handler))
        .route(
            "/add",
            get(handlers::add_form_handler).post(handlers::create_user_handler),
        )
        .route("/edit/{id}", get(handlers::edit_form_handler))
        .route("/update/{id}", post(handlers::update_user_handler))
        .route("/delete/{id}", get(handlers::delete_user_handler))
        .route("/health", get(health_handler))
        .nest_service("/uploads", uploads)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn health_handler() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

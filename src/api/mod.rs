mod error;
mod extract;
mod handlers;

use axum::{
    routing::{delete, get, post, put},
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::db::Database;

pub use error::ApiError;
pub use extract::{EmployeeId, ValidatedEmployee};

pub fn create_router(db: Database) -> Router {
    let api = Router::new()
        .route("/employees", get(handlers::list_employees))
        .route("/employees", post(handlers::create_employee))
        .route("/employees/{id}", get(handlers::get_employee))
        .route("/employees/{id}", put(handlers::update_employee))
        .route("/employees/{id}", delete(handlers::delete_employee))
        // Anything else under /api, including unsupported methods
        .fallback(handlers::endpoint_not_found)
        .method_not_allowed_fallback(handlers::endpoint_not_found);

    Router::new()
        .nest("/api", api)
        .fallback(handlers::not_found)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(db)
}

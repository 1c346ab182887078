//! API routes for the searoute server.

mod routes;

use axum::Router;
use std::sync::Arc;

pub fn routes() -> Router<Arc<crate::state::AppState>> {
    routes::create_router()
}

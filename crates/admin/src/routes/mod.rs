//! HTTP route handlers.
//!
//! # Route Structure
//!
//! ```text
//! GET  /health                 - Health check (registered in main)
//! GET  /                       - Redirect to /orders
//! GET  /orders                 - Unfulfilled orders table
//! ```

use axum::{Router, response::Redirect, routing::get};

use crate::state::AppState;

pub mod orders;

/// Build the application router.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(index))
        .route("/orders", get(orders::list::index))
}

/// The unfulfilled-orders page is the only page; the root redirects to it.
async fn index() -> Redirect {
    Redirect::to("/orders")
}

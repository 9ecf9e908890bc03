//! # HTTP Routes
//!
//! One module per resource, each exposing a `router()` nested under `/api`.
//!
//! ## Route Table
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  GET  /health                           liveness + database ping       │
//! │                                                                         │
//! │  /api/categories      GET POST          /:id  GET PATCH DELETE         │
//! │  /api/products        GET POST          /:id  GET PATCH DELETE         │
//! │  /api/inventory       GET               /:id  GET PATCH (quantity)     │
//! │  /api/customers       GET POST          /:id  GET PATCH                │
//! │  /api/staff           GET POST          /:id  GET PATCH                │
//! │  /api/schedules       GET POST          /:id  GET PATCH DELETE         │
//! │  /api/attendance      GET POST          /:id  GET                      │
//! │  /api/orders          GET               /:id  GET                      │
//! │                       POST /kiosk       PATCH /:id/status              │
//! │  /api/transactions    GET POST          /:id  GET                      │
//! │  /api/stats           GET               /revenue GET  /categories GET  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Inventory rows and orders are never created through a generic POST:
//! inventory rows appear with their product, orders only through the kiosk
//! checkout endpoint.

pub mod attendance;
pub mod categories;
pub mod customers;
pub mod health;
pub mod inventory;
pub mod orders;
pub mod products;
pub mod schedules;
pub mod staff;
pub mod stats;
pub mod transactions;

use axum::routing::get;
use axum::Router;

use crate::state::AppState;

/// Assembles the full route tree.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health))
        .nest("/api", api())
}

fn api() -> Router<AppState> {
    Router::new()
        .nest("/categories", categories::router())
        .nest("/products", products::router())
        .nest("/inventory", inventory::router())
        .nest("/customers", customers::router())
        .nest("/staff", staff::router())
        .nest("/schedules", schedules::router())
        .nest("/attendance", attendance::router())
        .nest("/orders", orders::router())
        .nest("/transactions", transactions::router())
        .nest("/stats", stats::router())
}

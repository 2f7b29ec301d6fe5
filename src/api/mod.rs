//! API Module
//!
//! HTTP handlers and routing for the read-through cache server.
//!
//! # Endpoints
//! - `GET /content/:key` - Read-through fetch of one cached object
//! - `GET /health` - Health check endpoint

pub mod handlers;
pub mod routes;

pub use handlers::*;
pub use routes::create_router;

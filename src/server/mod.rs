//! HTTP transport: handlers and router for the query API
//!
//! The transport is a thin layer: handlers normalize parameters through
//! the shared `FilterSpec` path, delegate to the engine and serialize the
//! result. No query logic lives here.

pub mod handlers;
pub mod router;

pub use router::{AppState, build_router};

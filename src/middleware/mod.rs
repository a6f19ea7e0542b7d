// ABOUTME: HTTP middleware for CORS and per-request tracing spans
// ABOUTME: Layers applied around every triage and health route

pub mod cors;
pub mod tracing;

// CORS configuration
pub use cors::setup_cors;

// Request tracing
pub use tracing::{create_request_span, REQUEST_ID_HEADER};

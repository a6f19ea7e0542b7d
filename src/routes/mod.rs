// ABOUTME: Route module organization for the Pierre Mind HTTP endpoints
// ABOUTME: Assembles triage and health routes with tracing, request-id, CORS, and body limits
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Route module for Pierre Mind Server
//!
//! Each domain module contains only route definitions and thin handler functions
//! that delegate to the service layer.

/// Health check and readiness routes
pub mod health;
/// Chat, mood analysis, insights, and validation routes
pub mod triage;

use std::sync::Arc;

use axum::http::HeaderName;
use axum::Router;
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::trace::TraceLayer;

use crate::config::ServerConfig;
use crate::middleware::{create_request_span, setup_cors, REQUEST_ID_HEADER};
use crate::resources::TriageResources;

/// Health route handlers
pub use health::HealthRoutes;
/// Triage route handlers
pub use triage::TriageRoutes;

/// Build the full application router
///
/// Layers run outermost first: request ID assignment, tracing span, CORS, body
/// limit, then the handler. The request ID is echoed on the response.
pub fn build_router(resources: Arc<TriageResources>, config: &ServerConfig) -> Router {
    let request_id = HeaderName::from_static(REQUEST_ID_HEADER);

    Router::new()
        .merge(TriageRoutes::routes(Arc::clone(&resources)))
        .merge(HealthRoutes::routes(resources))
        .layer(RequestBodyLimitLayer::new(config.max_body_bytes))
        .layer(setup_cors(&config.cors_allowed_origins))
        .layer(PropagateRequestIdLayer::new(request_id.clone()))
        .layer(TraceLayer::new_for_http().make_span_with(create_request_span))
        .layer(SetRequestIdLayer::new(request_id, MakeRequestUuid))
}

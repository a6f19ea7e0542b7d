// ABOUTME: Health check route handlers for service monitoring and status endpoints
// ABOUTME: Reports liveness and whether the generative provider is configured
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Health check routes for service monitoring
//!
//! `/ready` answers 200 even without a provider: the service is usable in
//! degraded mode, and the body says so.

use std::sync::Arc;

use chrono::Utc;
use pierre_mind_core::constants::routes;
use serde_json::{json, Value};

use crate::resources::TriageResources;

/// Health routes implementation
pub struct HealthRoutes;

impl HealthRoutes {
    /// Create all health check routes
    pub fn routes(resources: Arc<TriageResources>) -> axum::Router {
        use axum::{extract::State, routing::get, Json, Router};

        async fn health_handler() -> Json<Value> {
            Json(json!({
                "status": "healthy",
                "timestamp": Utc::now().to_rfc3339()
            }))
        }

        async fn ready_handler(
            State(resources): State<Arc<TriageResources>>,
        ) -> Json<Value> {
            let configured = resources.bridge.is_configured();
            Json(json!({
                "status": if configured { "ready" } else { "degraded" },
                "llm_configured": configured,
                "llm_provider": resources.bridge.provider_name(),
                "timestamp": Utc::now().to_rfc3339()
            }))
        }

        Router::new()
            .route(routes::HEALTH, get(health_handler))
            .route(routes::READY, get(ready_handler))
            .with_state(resources)
    }
}

//! REST API module
//!
//! HTTP surface of the lookup service. The interactive client talks to
//! `GET /api/thesaurus`; everything else is operational.

pub mod thesaurus_routes;

use axum::Router;
use tower::ServiceBuilder;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::aggregator::Aggregator;

pub use thesaurus_routes::{create_thesaurus_router, word_param, HealthResponse};

/// Build the full axum router with all routes and middleware.
pub fn build_router(aggregator: Aggregator) -> Router {
    create_thesaurus_router(aggregator).layer(
        ServiceBuilder::new()
            .layer(TraceLayer::new_for_http())
            .layer(
                CorsLayer::new()
                    .allow_origin(Any)
                    .allow_methods(Any)
                    .allow_headers(Any),
            ),
    )
}

//! HTTP boundary for the inheritance tax calculator.
//!
//! Requests are validated before the calculator runs. Submitted declarations
//! are stored through whichever [`DeclarationRepository`] backend the
//! configuration selects.
//!
//! [`DeclarationRepository`]: inheritance_core::DeclarationRepository

pub mod config;
pub mod error;
pub mod logging;
pub mod routes;
pub mod state;

use axum::Router;
use tower_http::trace::TraceLayer;

pub use config::{AppConfig, ConfigError};
pub use error::AppError;
pub use state::AppState;

/// Full application router with request tracing.
pub fn app(state: AppState) -> Router {
    routes::router()
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

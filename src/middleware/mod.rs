pub mod auth;
pub mod request_metrics;

pub use auth::AuthMiddleware;
pub use request_metrics::RequestMetrics;

//! Domain model types for fleet routing.
//!
//! Provides the core abstractions: delivery stops with coordinates and a
//! telemetry payload, and the closed tour produced by the optimizer.

mod stop;
mod tour;

pub use stop::Stop;
pub use tour::Tour;

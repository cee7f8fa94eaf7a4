//! # fleet-routing
//!
//! Fleet delivery telemetry simulation and single-vehicle route optimization.
//!
//! Synthetic delivery stops carry geographic coordinates plus sensor
//! telemetry (temperature, vibration). Routing is a two-stage pipeline: a
//! geodesic distance matrix built from stop coordinates, and a cheapest-arc
//! construction that produces a closed tour through every stop, starting and
//! ending at the depot (index 0). Scenario mutators perturb telemetry fields
//! only, so re-optimizing after a perturbation yields the same route.
//!
//! ## Modules
//!
//! - [`models`] — Domain model types (Stop, Tour)
//! - [`distance`] — Geodesic distance matrix
//! - [`constructive`] — Cheapest-arc tour construction
//! - [`telemetry`] — Synthetic stop generation and scenario perturbation
//! - [`simulation`] — Scenario pipeline (baseline, heatwave, delay)

pub mod constructive;
pub mod distance;
pub mod models;
pub mod simulation;
pub mod telemetry;

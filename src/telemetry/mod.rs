//! Synthetic telemetry: stop generation and scenario perturbation.
//!
//! - [`generate_stops`] — Seeded synthetic stop records (coordinates + sensor payload)
//! - [`Scenario`] — Baseline / heatwave / delay perturbations of the sensor payload

mod generator;
mod scenario;

pub use generator::{
    generate_stops, LAT_RANGE, LON_RANGE, TEMP_MEAN_C, TEMP_STD_C, VIBRATION_RANGE,
};
pub use scenario::{
    apply_delays, apply_heatwave, Scenario, DELAY_VIBRATION_OFFSET, HEATWAVE_TEMP_OFFSET_C,
};

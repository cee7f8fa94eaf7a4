//! Environmental scenario perturbation.
//!
//! Scenarios mutate telemetry fields only; coordinates are never touched,
//! so a route recomputed over perturbed stops matches the baseline route.
//! The surrounding system relies on this invariant.

use serde::{Deserialize, Serialize};

use crate::models::Stop;

/// Temperature offset applied to every stop under a heatwave, in °C.
pub const HEATWAVE_TEMP_OFFSET_C: f64 = 10.0;
/// Vibration offset applied to every stop under delay conditions.
pub const DELAY_VIBRATION_OFFSET: f64 = 0.5;

/// An environmental scenario applied to a stop set before re-optimization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Scenario {
    /// Unperturbed stop set.
    Baseline,
    /// Elevated temperatures across the fleet.
    Heatwave,
    /// Rough or delayed delivery conditions (elevated vibration).
    Delay,
}

impl Scenario {
    /// Applies this scenario's perturbation to the stop set in place.
    ///
    /// `Baseline` is a no-op.
    pub fn apply(&self, stops: &mut [Stop]) {
        match self {
            Scenario::Baseline => {}
            Scenario::Heatwave => apply_heatwave(stops),
            Scenario::Delay => apply_delays(stops),
        }
    }

    /// Human-readable scenario name.
    pub fn name(&self) -> &'static str {
        match self {
            Scenario::Baseline => "baseline",
            Scenario::Heatwave => "heatwave",
            Scenario::Delay => "delay",
        }
    }
}

/// Raises every stop's temperature by [`HEATWAVE_TEMP_OFFSET_C`].
pub fn apply_heatwave(stops: &mut [Stop]) {
    for stop in stops {
        stop.set_temperature_c(stop.temperature_c() + HEATWAVE_TEMP_OFFSET_C);
    }
}

/// Raises every stop's vibration level by [`DELAY_VIBRATION_OFFSET`].
pub fn apply_delays(stops: &mut [Stop]) {
    for stop in stops {
        stop.set_vibration_level(stop.vibration_level() + DELAY_VIBRATION_OFFSET);
    }
}

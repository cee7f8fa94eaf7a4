//! Synthetic sensor data generation.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rand_distr::{Distribution, Normal};
use tracing::debug;

use crate::models::Stop;

/// Latitude bounds of the generated service area (degrees).
pub const LAT_RANGE: (f64, f64) = (40.60, 40.75);
/// Longitude bounds of the generated service area (degrees).
pub const LON_RANGE: (f64, f64) = (-74.02, -73.93);
/// Mean generated temperature in degrees Celsius.
pub const TEMP_MEAN_C: f64 = 6.0;
/// Standard deviation of generated temperature.
pub const TEMP_STD_C: f64 = 2.0;
/// Vibration level bounds.
pub const VIBRATION_RANGE: (f64, f64) = (0.1, 0.4);

/// Generates `count` synthetic delivery stops with IDs 0..count.
///
/// Coordinates are sampled uniformly inside a New York bounding box,
/// temperature from a normal distribution, and vibration uniformly — the
/// same distributions for every stop, including the depot (stop 0).
/// Deterministic for a given seed.
///
/// # Examples
///
/// ```
/// use fleet_routing::telemetry::generate_stops;
///
/// let stops = generate_stops(5, 42);
/// assert_eq!(stops.len(), 5);
/// assert_eq!(stops[0].id(), 0);
/// assert_eq!(stops, generate_stops(5, 42));
/// ```
pub fn generate_stops(count: usize, seed: u64) -> Vec<Stop> {
    let mut rng = StdRng::seed_from_u64(seed);
    let temperature = Normal::new(TEMP_MEAN_C, TEMP_STD_C).expect("std dev is positive");

    let stops: Vec<Stop> = (0..count)
        .map(|id| {
            let lat = rng.random_range(LAT_RANGE.0..LAT_RANGE.1);
            let lon = rng.random_range(LON_RANGE.0..LON_RANGE.1);
            let temp = temperature.sample(&mut rng);
            let vibration = rng.random_range(VIBRATION_RANGE.0..VIBRATION_RANGE.1);
            Stop::new(id, lat, lon).with_telemetry(temp, vibration)
        })
        .collect();

    debug!(count, seed, "generated synthetic stops");
    stops
}

//! Delivery stop type.

use serde::{Deserialize, Serialize};

/// A delivery stop in the fleet network.
///
/// Stop 0 is conventionally the depot. Each stop has a stable index
/// identifier, geographic coordinates in degrees, and a telemetry payload
/// (temperature, vibration). The optimizer reads coordinates only; the
/// telemetry fields exist for the scenario mutators and are carried through
/// untouched.
///
/// # Examples
///
/// ```
/// use fleet_routing::models::Stop;
///
/// let depot = Stop::new(0, 40.71, -74.00);
/// assert_eq!(depot.id(), 0);
/// assert_eq!(depot.temperature_c(), 0.0);
///
/// let s = Stop::new(1, 40.68, -73.95).with_telemetry(5.4, 0.22);
/// assert_eq!(s.id(), 1);
/// assert_eq!(s.temperature_c(), 5.4);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Stop {
    id: usize,
    lat: f64,
    lon: f64,
    temperature_c: f64,
    vibration_level: f64,
}

impl Stop {
    /// Creates a new stop with zeroed telemetry.
    pub fn new(id: usize, lat: f64, lon: f64) -> Self {
        Self {
            id,
            lat,
            lon,
            temperature_c: 0.0,
            vibration_level: 0.0,
        }
    }

    /// Sets the telemetry payload for this stop.
    pub fn with_telemetry(mut self, temperature_c: f64, vibration_level: f64) -> Self {
        self.temperature_c = temperature_c;
        self.vibration_level = vibration_level;
        self
    }

    /// Stop ID (0 = depot).
    pub fn id(&self) -> usize {
        self.id
    }

    /// Latitude in degrees.
    pub fn lat(&self) -> f64 {
        self.lat
    }

    /// Longitude in degrees.
    pub fn lon(&self) -> f64 {
        self.lon
    }

    /// Last reported temperature in degrees Celsius.
    pub fn temperature_c(&self) -> f64 {
        self.temperature_c
    }

    /// Last reported vibration level.
    pub fn vibration_level(&self) -> f64 {
        self.vibration_level
    }

    /// Overwrites the temperature reading (used by scenario mutators).
    pub fn set_temperature_c(&mut self, temperature_c: f64) {
        self.temperature_c = temperature_c;
    }

    /// Overwrites the vibration reading (used by scenario mutators).
    pub fn set_vibration_level(&mut self, vibration_level: f64) {
        self.vibration_level = vibration_level;
    }

    /// Returns `true` if both coordinates are finite and within the valid
    /// geographic domain (latitude [-90, 90], longitude [-180, 180]).
    pub fn has_valid_coordinates(&self) -> bool {
        self.lat.is_finite()
            && self.lon.is_finite()
            && (-90.0..=90.0).contains(&self.lat)
            && (-180.0..=180.0).contains(&self.lon)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stop_new() {
        let s = Stop::new(3, 40.7, -74.0);
        assert_eq!(s.id(), 3);
        assert_eq!(s.lat(), 40.7);
        assert_eq!(s.lon(), -74.0);
        assert_eq!(s.temperature_c(), 0.0);
        assert_eq!(s.vibration_level(), 0.0);
    }

    #[test]
    fn test_stop_with_telemetry() {
        let s = Stop::new(1, 40.7, -74.0).with_telemetry(6.5, 0.3);
        assert_eq!(s.temperature_c(), 6.5);
        assert_eq!(s.vibration_level(), 0.3);
    }

    #[test]
    fn test_stop_setters() {
        let mut s = Stop::new(1, 40.7, -74.0).with_telemetry(6.0, 0.2);
        s.set_temperature_c(16.0);
        s.set_vibration_level(0.7);
        assert_eq!(s.temperature_c(), 16.0);
        assert_eq!(s.vibration_level(), 0.7);
        // coordinates untouched
        assert_eq!(s.lat(), 40.7);
        assert_eq!(s.lon(), -74.0);
    }

    #[test]
    fn test_valid_coordinates() {
        assert!(Stop::new(0, 40.7, -74.0).has_valid_coordinates());
        assert!(Stop::new(0, -90.0, 180.0).has_valid_coordinates());
        assert!(!Stop::new(0, 91.0, 0.0).has_valid_coordinates());
        assert!(!Stop::new(0, 0.0, -180.5).has_valid_coordinates());
        assert!(!Stop::new(0, f64::NAN, 0.0).has_valid_coordinates());
        assert!(!Stop::new(0, 0.0, f64::INFINITY).has_valid_coordinates());
    }
}

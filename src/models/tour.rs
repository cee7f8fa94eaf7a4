//! Closed tour type.

use serde::{Deserialize, Serialize};

/// A closed single-vehicle tour over a set of stops.
///
/// The visit sequence has length N+1 for N stops: it starts and ends at the
/// depot and visits every other stop exactly once in between. A tour is the
/// sole output of an optimization run and carries its total distance.
///
/// # Examples
///
/// ```
/// use fleet_routing::models::Tour;
///
/// let tour = Tour::new(vec![0, 2, 1, 0], 12.5);
/// assert_eq!(tour.depot(), Some(0));
/// assert!(tour.is_closed());
/// assert_eq!(tour.len(), 4);
/// assert_eq!(tour.total_distance_km(), 12.5);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tour {
    stops: Vec<usize>,
    total_distance_km: f64,
}

impl Tour {
    /// Creates a tour from a visit sequence and its total distance.
    pub fn new(stops: Vec<usize>, total_distance_km: f64) -> Self {
        Self {
            stops,
            total_distance_km,
        }
    }

    /// The visit sequence, including the closing return to the depot.
    pub fn stops(&self) -> &[usize] {
        &self.stops
    }

    /// The depot index (first element of the sequence).
    pub fn depot(&self) -> Option<usize> {
        self.stops.first().copied()
    }

    /// Length of the visit sequence (N+1 for a closed tour over N stops).
    pub fn len(&self) -> usize {
        self.stops.len()
    }

    /// Returns `true` if the visit sequence is empty.
    pub fn is_empty(&self) -> bool {
        self.stops.is_empty()
    }

    /// Returns `true` if the sequence starts and ends at the same stop.
    pub fn is_closed(&self) -> bool {
        self.stops.len() >= 2 && self.stops.first() == self.stops.last()
    }

    /// Total tour distance in kilometers.
    pub fn total_distance_km(&self) -> f64 {
        self.total_distance_km
    }
}

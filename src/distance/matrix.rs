//! Dense geodesic distance matrix.

use thiserror::Error;

use crate::models::Stop;

/// Mean Earth radius in kilometers for the haversine formula.
const EARTH_RADIUS_KM: f64 = 6371.0;

/// Errors from distance matrix construction.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum MatrixError {
    /// No stops (or no rows) were supplied.
    #[error("at least one stop is required")]
    Empty,
    /// A stop's coordinates fall outside the valid geographic domain.
    #[error("stop {id}: coordinates ({lat}, {lon}) outside valid range")]
    CoordinateOutOfRange {
        /// Offending stop ID.
        id: usize,
        /// Latitude in degrees.
        lat: f64,
        /// Longitude in degrees.
        lon: f64,
    },
    /// Explicit distance data does not form a square matrix.
    #[error("expected {expected} entries for a {size}x{size} matrix, got {actual}")]
    NotSquare {
        /// Declared matrix dimension.
        size: usize,
        /// Expected entry count (`size * size`).
        expected: usize,
        /// Actual entry count supplied.
        actual: usize,
    },
    /// A row of explicit distance data has the wrong length.
    #[error("row {row} has {actual} entries, expected {expected}")]
    Ragged {
        /// Index of the offending row.
        row: usize,
        /// Expected row length.
        expected: usize,
        /// Actual row length.
        actual: usize,
    },
}

/// Great-circle distance between two coordinates in kilometers.
///
/// Uses the spherical haversine formula. Symmetric by construction: the same
/// two points yield the same distance regardless of argument order.
///
/// # Examples
///
/// ```
/// use fleet_routing::distance::haversine_km;
///
/// // One degree of longitude at the equator is about 111 km.
/// let d = haversine_km(0.0, 0.0, 0.0, 1.0);
/// assert!(d > 110.0 && d < 112.0);
/// ```
pub fn haversine_km(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    if lat1 == lat2 && lon1 == lon2 {
        return 0.0;
    }

    let phi1 = lat1.to_radians();
    let phi2 = lat2.to_radians();
    let dphi = (lat2 - lat1).to_radians();
    let dlambda = (lon2 - lon1).to_radians();

    let a = (dphi / 2.0).sin().powi(2) + phi1.cos() * phi2.cos() * (dlambda / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().asin();

    EARTH_RADIUS_KM * c
}

/// A dense n×n distance matrix stored in row-major order.
///
/// Supports geodesic distance computation from stop coordinates and explicit
/// distance specification. Distances are in kilometers.
///
/// # Examples
///
/// ```
/// use fleet_routing::models::Stop;
/// use fleet_routing::distance::DistanceMatrix;
///
/// let stops = vec![
///     Stop::new(0, 40.71, -74.00),
///     Stop::new(1, 40.68, -73.95),
/// ];
/// let dm = DistanceMatrix::from_stops(&stops).unwrap();
/// assert_eq!(dm.size(), 2);
/// assert_eq!(dm.get(0, 0), 0.0);
/// assert_eq!(dm.get(0, 1), dm.get(1, 0));
/// ```
#[derive(Debug, Clone)]
pub struct DistanceMatrix {
    data: Vec<f64>,
    size: usize,
}

impl DistanceMatrix {
    /// Creates a distance matrix of the given size, initialized to zero.
    pub fn new(size: usize) -> Self {
        Self {
            data: vec![0.0; size * size],
            size,
        }
    }

    /// Computes a geodesic distance matrix from stop coordinates.
    ///
    /// Requires at least one stop; every stop's coordinates must lie within
    /// the valid geographic domain. A single stop yields a 1×1 zero matrix.
    /// O(n²) haversine evaluations.
    pub fn from_stops(stops: &[Stop]) -> Result<Self, MatrixError> {
        if stops.is_empty() {
            return Err(MatrixError::Empty);
        }
        for stop in stops {
            if !stop.has_valid_coordinates() {
                return Err(MatrixError::CoordinateOutOfRange {
                    id: stop.id(),
                    lat: stop.lat(),
                    lon: stop.lon(),
                });
            }
        }

        let n = stops.len();
        let mut dm = Self::new(n);
        for i in 0..n {
            for j in (i + 1)..n {
                let d = haversine_km(stops[i].lat(), stops[i].lon(), stops[j].lat(), stops[j].lon());
                dm.set(i, j, d);
                dm.set(j, i, d);
            }
        }
        Ok(dm)
    }

    /// Creates a distance matrix from explicit rows.
    ///
    /// Rejects empty input and ragged rows (every row must have as many
    /// entries as there are rows).
    pub fn from_rows(rows: Vec<Vec<f64>>) -> Result<Self, MatrixError> {
        let n = rows.len();
        if n == 0 {
            return Err(MatrixError::Empty);
        }
        let mut data = Vec::with_capacity(n * n);
        for (i, row) in rows.into_iter().enumerate() {
            if row.len() != n {
                return Err(MatrixError::Ragged {
                    row: i,
                    expected: n,
                    actual: row.len(),
                });
            }
            data.extend(row);
        }
        Ok(Self { data, size: n })
    }

    /// Creates a distance matrix from an explicit n×n grid in row-major order.
    ///
    /// Rejects size 0 and data whose length doesn't match `size * size`.
    pub fn from_data(size: usize, data: Vec<f64>) -> Result<Self, MatrixError> {
        if size == 0 {
            return Err(MatrixError::Empty);
        }
        if data.len() != size * size {
            return Err(MatrixError::NotSquare {
                size,
                expected: size * size,
                actual: data.len(),
            });
        }
        Ok(Self { data, size })
    }

    /// Returns the distance from stop `from` to stop `to`.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of bounds.
    pub fn get(&self, from: usize, to: usize) -> f64 {
        self.data[from * self.size + to]
    }

    /// Sets the distance from stop `from` to stop `to`.
    pub fn set(&mut self, from: usize, to: usize, distance: f64) {
        self.data[from * self.size + to] = distance;
    }

    /// Number of stops in this matrix.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns `true` if the matrix is symmetric within the given tolerance.
    pub fn is_symmetric(&self, tol: f64) -> bool {
        for i in 0..self.size {
            for j in (i + 1)..self.size {
                if (self.get(i, j) - self.get(j, i)).abs() > tol {
                    return false;
                }
            }
        }
        true
    }
}

//! Geodesic distance matrix.
//!
//! Provides a dense pairwise distance matrix over delivery stops, built
//! from great-circle (haversine) distances in kilometers.

mod matrix;

pub use matrix::{haversine_km, DistanceMatrix, MatrixError};

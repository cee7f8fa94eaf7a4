//! Cheapest-arc tour construction.
//!
//! # Algorithm
//!
//! Builds a closed tour by repeatedly taking the globally cheapest unused
//! arc that keeps the partial selection a set of disjoint open paths: an arc
//! is admissible when neither endpoint already has two incident arcs and the
//! endpoints lie in different path fragments (no premature cycle). Once n−1
//! arcs are selected the fragments form a single Hamiltonian path, which is
//! closed back into a cycle and read off starting at the depot.
//!
//! Arc costs are integer: kilometers scaled by [`COST_SCALE`] and rounded to
//! the nearest integer, so near-equal distances collapse to the same cost
//! and ties are broken by arc index order rather than floating-point noise.
//! Among equal-cost arcs the one enumerated first in ascending
//! (from, to) index order wins, which makes the construction fully
//! deterministic for identical inputs.
//!
//! This is a first-solution strategy only; no improvement phase (such as
//! 2-opt) is applied afterwards.
//!
//! # Complexity
//!
//! O(n² log n), dominated by sorting the arc list.

use thiserror::Error;

use crate::distance::DistanceMatrix;
use crate::models::Tour;

/// Multiplier converting kilometers to integer arc cost (i.e. meters).
pub const COST_SCALE: f64 = 1000.0;

/// Errors from tour construction.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SolveError {
    /// The distance matrix has no stops.
    #[error("distance matrix has no stops")]
    EmptyMatrix,
    /// The depot index does not name a stop in the matrix.
    #[error("depot index {depot} out of bounds for {size} stops")]
    DepotOutOfBounds {
        /// Requested depot index.
        depot: usize,
        /// Number of stops in the matrix.
        size: usize,
    },
    /// No Hamiltonian cycle could be completed (disconnected or
    /// non-finite arc costs). There is no usable partial result.
    #[error("no feasible tour: stops are not fully connected")]
    Infeasible,
}

/// An undirected arc between two stops with its integer cost.
#[derive(Debug)]
struct Arc {
    i: usize,
    j: usize,
    cost: i64,
}

/// Integer arc cost for a distance in kilometers.
///
/// Non-finite distances have no cost: the arc is unusable.
fn scaled_cost(km: f64) -> Option<i64> {
    if km.is_finite() {
        Some((km * COST_SCALE).round() as i64)
    } else {
        None
    }
}

/// Constructs a closed tour over all stops using cheapest-arc selection.
///
/// The tour starts and ends at `depot` and visits every other stop exactly
/// once in between. The input matrix is never mutated, and the construction
/// is deterministic: identical matrices always yield the identical tour.
///
/// # Arguments
///
/// * `distances` — Pairwise distance matrix in kilometers (index 0 = depot
///   in the surrounding system; any valid index is accepted here)
/// * `depot` — Fixed start/end stop of the tour
///
/// # Examples
///
/// ```
/// use fleet_routing::distance::DistanceMatrix;
/// use fleet_routing::constructive::cheapest_arc_tour;
///
/// let dm = DistanceMatrix::from_rows(vec![
///     vec![0.0, 1.0, 2.0],
///     vec![1.0, 0.0, 1.0],
///     vec![2.0, 1.0, 0.0],
/// ]).unwrap();
///
/// let tour = cheapest_arc_tour(&dm, 0).unwrap();
/// assert_eq!(tour.stops().first(), Some(&0));
/// assert_eq!(tour.stops().last(), Some(&0));
/// assert_eq!(tour.len(), 4);
/// ```
pub fn cheapest_arc_tour(distances: &DistanceMatrix, depot: usize) -> Result<Tour, SolveError> {
    let n = distances.size();
    if n == 0 {
        return Err(SolveError::EmptyMatrix);
    }
    if depot >= n {
        return Err(SolveError::DepotOutOfBounds { depot, size: n });
    }
    if n == 1 {
        return Ok(Tour::new(vec![depot, depot], 0.0));
    }

    // Enumerate arcs in ascending (from, to) order. The sort is stable on
    // cost, so equal-cost arcs keep this enumeration order.
    let mut arcs = Vec::with_capacity(n * (n - 1) / 2);
    for i in 0..n {
        for j in (i + 1)..n {
            if let Some(cost) = scaled_cost(distances.get(i, j)) {
                arcs.push(Arc { i, j, cost });
            }
        }
    }
    arcs.sort_by_key(|a| (a.cost, a.i, a.j));

    // Each stop starts as its own one-node path fragment.
    // fragment_of[stop] = fragment id, fragment_members[f] = stops in f.
    let mut fragment_of: Vec<usize> = (0..n).collect();
    let mut fragment_members: Vec<Vec<usize>> = (0..n).map(|v| vec![v]).collect();
    let mut degree = vec![0u8; n];
    let mut neighbors: Vec<Vec<usize>> = vec![Vec::with_capacity(2); n];
    let mut selected = 0;

    for arc in &arcs {
        if selected == n - 1 {
            break;
        }
        if degree[arc.i] == 2 || degree[arc.j] == 2 {
            continue;
        }
        let fi = fragment_of[arc.i];
        let fj = fragment_of[arc.j];
        if fi == fj {
            continue;
        }

        degree[arc.i] += 1;
        degree[arc.j] += 1;
        neighbors[arc.i].push(arc.j);
        neighbors[arc.j].push(arc.i);

        // Merge fragment fj into fi.
        let moved = std::mem::take(&mut fragment_members[fj]);
        for &v in &moved {
            fragment_of[v] = fi;
        }
        fragment_members[fi].extend(moved);

        selected += 1;
    }

    if selected != n - 1 {
        return Err(SolveError::Infeasible);
    }

    // The two remaining degree-1 stops are the path endpoints; closing them
    // completes the cycle. The closing arc must itself be usable.
    let mut ends = (0..n).filter(|&v| degree[v] == 1);
    let a = ends.next().expect("open path has two endpoints");
    let b = ends.next().expect("open path has two endpoints");
    if scaled_cost(distances.get(a, b)).is_none() {
        return Err(SolveError::Infeasible);
    }
    neighbors[a].push(b);
    neighbors[b].push(a);

    Ok(extract_tour(&neighbors, distances, depot))
}

/// Reads the cycle off the adjacency lists, starting and ending at `depot`.
///
/// Two traversal directions exist; the walk starts toward the neighbor
/// linked by the earliest-selected arc (adjacency entries are pushed in
/// selection order), so identical inputs yield the identical tour.
fn extract_tour(neighbors: &[Vec<usize>], distances: &DistanceMatrix, depot: usize) -> Tour {
    let n = neighbors.len();
    let mut stops = Vec::with_capacity(n + 1);
    stops.push(depot);

    let mut prev = depot;
    let mut current = neighbors[depot][0];
    let mut total = distances.get(depot, current);

    while current != depot {
        stops.push(current);
        let next = if neighbors[current][0] != prev {
            neighbors[current][0]
        } else {
            neighbors[current][1]
        };
        total += distances.get(current, next);
        prev = current;
        current = next;
    }

    stops.push(depot);
    Tour::new(stops, total)
}

#[cfg(test)]
mod tests {
    use super::*;

    /// 5-stop instance whose cheapest-arc tour is hand-checked.
    ///
    /// Sorted arcs: (1,3)=1, (0,3)=2, (1,4)=3, (2,4)=4, (2,3)=5, (1,2)=6,
    /// (0,4)=7, (0,1)=8, (0,2)=9. The first four are all admissible and
    /// form the path 0-3-1-4-2, closed through (0,2).
    fn reference_matrix() -> DistanceMatrix {
        DistanceMatrix::from_rows(vec![
            vec![0.0, 8.0, 9.0, 2.0, 7.0],
            vec![8.0, 0.0, 6.0, 1.0, 3.0],
            vec![9.0, 6.0, 0.0, 5.0, 4.0],
            vec![2.0, 1.0, 5.0, 0.0, 10.0],
            vec![7.0, 3.0, 4.0, 10.0, 0.0],
        ])
        .expect("square")
    }

    fn assert_valid_tour(tour: &Tour, n: usize, depot: usize) {
        assert_eq!(tour.len(), n + 1);
        assert_eq!(tour.stops().first(), Some(&depot));
        assert_eq!(tour.stops().last(), Some(&depot));
        let mut seen = vec![false; n];
        for &s in &tour.stops()[..n] {
            assert!(!seen[s], "stop {} visited twice", s);
            seen[s] = true;
        }
        assert!(seen.iter().all(|&v| v), "not all stops visited");
    }

    #[test]
    fn test_reference_tour() {
        let tour = cheapest_arc_tour(&reference_matrix(), 0).expect("feasible");
        assert_eq!(tour.stops(), &[0, 3, 1, 4, 2, 0]);
        // 2 + 1 + 3 + 4 + 9
        assert!((tour.total_distance_km() - 19.0).abs() < 1e-10);
    }

    #[test]
    fn test_single_stop_degenerate() {
        let dm = DistanceMatrix::from_rows(vec![vec![0.0]]).expect("square");
        let tour = cheapest_arc_tour(&dm, 0).expect("feasible");
        assert_eq!(tour.stops(), &[0, 0]);
        assert_eq!(tour.total_distance_km(), 0.0);
    }

    #[test]
    fn test_two_stops() {
        let dm = DistanceMatrix::from_rows(vec![vec![0.0, 4.0], vec![4.0, 0.0]]).expect("square");
        let tour = cheapest_arc_tour(&dm, 0).expect("feasible");
        assert_eq!(tour.stops(), &[0, 1, 0]);
        assert!((tour.total_distance_km() - 8.0).abs() < 1e-10);
    }

    #[test]
    fn test_uniform_costs_tie_break() {
        // All arcs cost the same, so selection order is purely the
        // lexicographic tie-break: (0,1), (0,2), then (1,3).
        let mut dm = DistanceMatrix::new(4);
        for i in 0..4 {
            for j in 0..4 {
                if i != j {
                    dm.set(i, j, 5.0);
                }
            }
        }
        let tour = cheapest_arc_tour(&dm, 0).expect("feasible");
        assert_eq!(tour.stops(), &[0, 1, 3, 2, 0]);
        assert!((tour.total_distance_km() - 20.0).abs() < 1e-10);
    }

    #[test]
    fn test_rounding_collapses_near_ties() {
        // Perturbations below half the cost resolution (0.0005 km) vanish
        // after scaling, so the tour must not change.
        let base = reference_matrix();
        let mut perturbed = base.clone();
        for i in 0..perturbed.size() {
            for j in 0..perturbed.size() {
                if i != j {
                    perturbed.set(i, j, base.get(i, j) + 0.0002);
                }
            }
        }
        let t1 = cheapest_arc_tour(&base, 0).expect("feasible");
        let t2 = cheapest_arc_tour(&perturbed, 0).expect("feasible");
        assert_eq!(t1.stops(), t2.stops());
    }

    #[test]
    fn test_determinism() {
        let dm = reference_matrix();
        let t1 = cheapest_arc_tour(&dm, 0).expect("feasible");
        let t2 = cheapest_arc_tour(&dm, 0).expect("feasible");
        assert_eq!(t1, t2);
    }

    #[test]
    fn test_tour_validity() {
        let tour = cheapest_arc_tour(&reference_matrix(), 0).expect("feasible");
        assert_valid_tour(&tour, 5, 0);
    }

    #[test]
    fn test_nonzero_depot() {
        let tour = cheapest_arc_tour(&reference_matrix(), 2).expect("feasible");
        assert_valid_tour(&tour, 5, 2);
    }

    #[test]
    fn test_empty_matrix() {
        let dm = DistanceMatrix::new(0);
        assert_eq!(cheapest_arc_tour(&dm, 0), Err(SolveError::EmptyMatrix));
    }

    #[test]
    fn test_depot_out_of_bounds() {
        let dm = DistanceMatrix::new(3);
        assert_eq!(
            cheapest_arc_tour(&dm, 3),
            Err(SolveError::DepotOutOfBounds { depot: 3, size: 3 })
        );
    }

    #[test]
    fn test_infeasible_closing_arc() {
        // The only way to close the triangle runs through an infinite arc.
        let mut dm = DistanceMatrix::new(3);
        dm.set(0, 1, 1.0);
        dm.set(1, 0, 1.0);
        dm.set(1, 2, 1.0);
        dm.set(2, 1, 1.0);
        dm.set(0, 2, f64::INFINITY);
        dm.set(2, 0, f64::INFINITY);
        assert_eq!(cheapest_arc_tour(&dm, 0), Err(SolveError::Infeasible));
    }

    #[test]
    fn test_infeasible_disconnected() {
        // Stop 3 has no finite arc at all.
        let mut dm = DistanceMatrix::new(4);
        for i in 0..4 {
            for j in 0..4 {
                if i != j {
                    let d = if i == 3 || j == 3 { f64::INFINITY } else { 1.0 };
                    dm.set(i, j, d);
                }
            }
        }
        assert_eq!(cheapest_arc_tour(&dm, 0), Err(SolveError::Infeasible));
    }

    #[test]
    fn test_collinear_stops_visited_in_order() {
        use crate::models::Stop;

        // Four stops spaced evenly along one parallel: adjacent arcs are
        // cheapest, so the tour sweeps east and comes straight back.
        let stops: Vec<Stop> = (0..4)
            .map(|i| Stop::new(i, 40.70, -74.00 + 0.01 * i as f64))
            .collect();
        let dm = DistanceMatrix::from_stops(&stops).expect("valid stops");
        let tour = cheapest_arc_tour(&dm, 0).expect("feasible");
        assert_eq!(tour.stops(), &[0, 1, 2, 3, 0]);
    }
}

//! Scenario pipeline: generate stops, optimize, perturb, re-optimize.
//!
//! The stop collection is an owned in-memory `Vec<Stop>` handed between
//! generation, mutation, and optimization; each optimization run rebuilds
//! the distance matrix from scratch, so nothing is cached across scenario
//! mutations.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::info;

use crate::constructive::{cheapest_arc_tour, SolveError};
use crate::distance::{DistanceMatrix, MatrixError};
use crate::models::{Stop, Tour};
use crate::telemetry::{generate_stops, Scenario};

/// Fixed depot index: the tour always starts and ends at stop 0.
pub const DEPOT: usize = 0;

/// Errors from route planning.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PlanError {
    /// Distance matrix construction failed.
    #[error(transparent)]
    Matrix(#[from] MatrixError),
    /// Tour construction failed.
    #[error(transparent)]
    Solve(#[from] SolveError),
}

/// Computes the closed delivery tour for a set of stops.
///
/// Builds a fresh geodesic distance matrix from the stop coordinates and
/// runs cheapest-arc construction with the depot fixed at index 0. Pure:
/// the stop collection is never mutated.
///
/// # Examples
///
/// ```
/// use fleet_routing::simulation::plan_route;
/// use fleet_routing::telemetry::generate_stops;
///
/// let stops = generate_stops(5, 42);
/// let tour = plan_route(&stops).unwrap();
/// assert_eq!(tour.len(), 6);
/// assert_eq!(tour.depot(), Some(0));
/// ```
pub fn plan_route(stops: &[Stop]) -> Result<Tour, PlanError> {
    let distances = DistanceMatrix::from_stops(stops)?;
    let tour = cheapest_arc_tour(&distances, DEPOT)?;
    Ok(tour)
}

/// One scenario's optimization outcome.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScenarioRun {
    /// The scenario that was in effect.
    pub scenario: Scenario,
    /// The tour computed after applying the scenario.
    pub tour: Tour,
}

/// Results of the full scenario suite over one generated stop set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationReport {
    /// Scenario outcomes in execution order (baseline first).
    pub runs: Vec<ScenarioRun>,
}

impl SimulationReport {
    /// The baseline (unperturbed) run.
    pub fn baseline(&self) -> &ScenarioRun {
        &self.runs[0]
    }

    /// Returns `true` when every scenario's visit sequence equals the
    /// baseline's — the expected outcome, since scenario mutators never
    /// touch coordinates.
    pub fn route_invariant(&self) -> bool {
        let reference = self.baseline().tour.stops();
        self.runs.iter().all(|run| run.tour.stops() == reference)
    }
}

/// Runs the full scenario suite: baseline, heatwave, then delay.
///
/// One stop set is generated up front and persists across runs; each
/// scenario perturbs the telemetry in place (perturbations accumulate, so
/// the delay run also carries the heatwave offset) and the route is then
/// recomputed from scratch.
///
/// # Examples
///
/// ```
/// use fleet_routing::simulation::run_scenarios;
///
/// let report = run_scenarios(5, 42).unwrap();
/// assert_eq!(report.runs.len(), 3);
/// assert!(report.route_invariant());
/// ```
pub fn run_scenarios(count: usize, seed: u64) -> Result<SimulationReport, PlanError> {
    let mut stops = generate_stops(count, seed);
    let mut runs = Vec::with_capacity(3);

    for scenario in [Scenario::Baseline, Scenario::Heatwave, Scenario::Delay] {
        scenario.apply(&mut stops);
        let tour = plan_route(&stops)?;
        info!(
            scenario = scenario.name(),
            stops = count,
            distance_km = tour.total_distance_km(),
            "computed delivery route"
        );
        runs.push(ScenarioRun { scenario, tour });
    }

    Ok(SimulationReport { runs })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::telemetry::apply_heatwave;

    fn assert_valid_tour(tour: &Tour, n: usize) {
        assert_eq!(tour.len(), n + 1);
        assert_eq!(tour.stops().first(), Some(&DEPOT));
        assert_eq!(tour.stops().last(), Some(&DEPOT));
        let mut seen = vec![false; n];
        for &s in &tour.stops()[..n] {
            assert!(!seen[s]);
            seen[s] = true;
        }
        assert!(seen.iter().all(|&v| v));
    }

    #[test]
    fn test_plan_route_valid_tour() {
        let stops = generate_stops(8, 42);
        let tour = plan_route(&stops).expect("feasible");
        assert_valid_tour(&tour, 8);
        assert!(tour.total_distance_km() > 0.0);
    }

    #[test]
    fn test_plan_route_single_stop() {
        let stops = generate_stops(1, 42);
        let tour = plan_route(&stops).expect("feasible");
        assert_eq!(tour.stops(), &[0, 0]);
        assert_eq!(tour.total_distance_km(), 0.0);
    }

    #[test]
    fn test_plan_route_rejects_empty() {
        assert!(matches!(
            plan_route(&[]),
            Err(PlanError::Matrix(MatrixError::Empty))
        ));
    }

    #[test]
    fn test_plan_route_deterministic() {
        let stops = generate_stops(6, 7);
        assert_eq!(
            plan_route(&stops).expect("feasible"),
            plan_route(&stops).expect("feasible")
        );
    }

    #[test]
    fn test_mutation_does_not_change_route() {
        let mut stops = generate_stops(6, 42);
        let before = plan_route(&stops).expect("feasible");
        apply_heatwave(&mut stops);
        let after = plan_route(&stops).expect("feasible");
        assert_eq!(before.stops(), after.stops());
        assert_eq!(before.total_distance_km(), after.total_distance_km());
    }

    #[test]
    fn test_run_scenarios_route_invariant() {
        let report = run_scenarios(5, 42).expect("feasible");
        assert_eq!(report.runs.len(), 3);
        assert_eq!(report.runs[0].scenario, Scenario::Baseline);
        assert_eq!(report.runs[1].scenario, Scenario::Heatwave);
        assert_eq!(report.runs[2].scenario, Scenario::Delay);
        assert!(report.route_invariant());
        assert_valid_tour(&report.baseline().tour, 5);
    }

    #[test]
    fn test_run_scenarios_rejects_empty() {
        assert!(run_scenarios(0, 42).is_err());
    }
}

//! Tour construction heuristics.
//!
//! - [`cheapest_arc_tour`] — Greedy cheapest-arc construction, O(n² log n)

mod cheapest_arc;

pub use cheapest_arc::{cheapest_arc_tour, SolveError, COST_SCALE};

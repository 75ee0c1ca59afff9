#![deny(missing_docs)]

//! Chromatic-number engine: DSATUR upper bounds, k-coloring feasibility
//! models, and the binary search that drives them to the optimum.

mod dsatur;
mod model;
mod search;

pub use dsatur::{dsatur, HeuristicColoring};
pub use model::{build_k_coloring_model, extract_coloring, ColoringVars};
pub use search::{solve_chromatic_number, ChromaticSolution, SearchConfig};

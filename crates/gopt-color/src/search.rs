use gopt_core::errors::{ErrorInfo, GoptError};
use gopt_core::{SolveOptions, SolveOutcome, SolverBackend};
use gopt_graph::SimpleGraph;
use serde::{Deserialize, Serialize};

use crate::dsatur::dsatur;
use crate::model::{build_k_coloring_model, extract_coloring};

/// Tunables for the chromatic-number search.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Node count above which the DSATUR heuristic refines the initial
    /// upper bound. Below it the degree bound is tight enough to start from.
    #[serde(default = "SearchConfig::default_heuristic_threshold")]
    pub heuristic_threshold: usize,
    /// Whether to seed each shrinking candidate with the previous feasible
    /// coloring. Hints are advisory; disabling them only costs solve time.
    #[serde(default = "SearchConfig::default_warm_start")]
    pub warm_start: bool,
    /// Options forwarded to every feasibility solve.
    #[serde(default)]
    pub solve: SolveOptions,
}

impl SearchConfig {
    const fn default_heuristic_threshold() -> usize {
        20
    }

    const fn default_warm_start() -> bool {
        true
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            heuristic_threshold: Self::default_heuristic_threshold(),
            warm_start: Self::default_warm_start(),
            solve: SolveOptions::default(),
        }
    }
}

/// Minimum proper coloring found by the exact search.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChromaticSolution {
    /// The chromatic number of the graph.
    pub chromatic_number: usize,
    /// A proper coloring using exactly `chromatic_number` colors. Which of
    /// the equivalent optimal colorings is returned depends on backend
    /// tie-breaking.
    pub coloring: Vec<usize>,
}

/// Finds the chromatic number by binary search over feasibility models.
///
/// Feasibility of k-coloring is monotone in k, so bisection over
/// `[1, min(n, max_degree + 1)]` converges to the minimum feasible k. Each
/// feasible candidate becomes the incumbent and shrinks the upper bound;
/// each proven-infeasible candidate raises the lower bound. A timeout
/// leaves feasibility unknown and aborts the search instead of corrupting
/// a bound.
pub fn solve_chromatic_number(
    graph: &SimpleGraph,
    backend: &dyn SolverBackend,
    config: &SearchConfig,
) -> Result<ChromaticSolution, GoptError> {
    if graph.is_empty() {
        return Ok(ChromaticSolution {
            chromatic_number: 0,
            coloring: Vec::new(),
        });
    }

    let n = graph.n();
    let mut lower = 1usize;
    let mut upper = n.min(graph.max_degree() + 1);
    if n > config.heuristic_threshold {
        let heuristic = dsatur(graph);
        if heuristic.color_count < upper {
            log::debug!(
                "dsatur tightened the upper bound from {upper} to {}",
                heuristic.color_count
            );
            upper = heuristic.color_count;
        }
    }

    let mut best: Option<ChromaticSolution> = None;
    while lower <= upper {
        let k = (lower + upper) / 2;
        let (mut model, layout) = build_k_coloring_model(graph, k)?;
        if config.warm_start {
            if let Some(incumbent) = &best {
                if k < incumbent.chromatic_number {
                    // colors that no longer fit under k are dropped
                    for (v, color) in incumbent.coloring.iter().copied().enumerate() {
                        if color < k {
                            model.set_hint(layout.var(v, color), 1.0)?;
                        }
                    }
                }
            }
        }

        match backend.solve(&model, &config.solve)? {
            SolveOutcome::Optimal(solution) => {
                let coloring = extract_coloring(&layout, &solution)?;
                log::debug!("k={k} feasible within [{lower}, {upper}]");
                best = Some(ChromaticSolution {
                    chromatic_number: k,
                    coloring,
                });
                upper = k - 1;
            }
            SolveOutcome::Infeasible => {
                log::debug!("k={k} proven infeasible within [{lower}, {upper}]");
                lower = k + 1;
            }
            SolveOutcome::TimedOut => {
                return Err(GoptError::Backend(
                    ErrorInfo::new(
                        "solve-timeout",
                        "time limit reached; feasibility of the candidate is unknown",
                    )
                    .with_context("k", k)
                    .with_hint("raise the per-solve time limit or shrink the instance"),
                ));
            }
        }
    }

    best.ok_or_else(|| {
        GoptError::Search(
            ErrorInfo::new(
                "bounds-exhausted",
                "no candidate color count was feasible",
            )
            .with_context("nodes", n)
            .with_hint("one color per vertex is always feasible; the engine rejected every candidate"),
        )
    })
}

use std::collections::BTreeSet;

use gopt_graph::SimpleGraph;
use serde::{Deserialize, Serialize};

/// Proper coloring produced by the greedy saturation-degree heuristic.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeuristicColoring {
    /// Color index per node, `0..color_count`.
    pub colors: Vec<usize>,
    /// Number of distinct colors used.
    pub color_count: usize,
}

/// Greedy DSATUR coloring.
///
/// Repeatedly colors the uncolored vertex whose neighbors already use the
/// most distinct colors (its saturation degree), breaking ties by higher
/// degree and then by lowest id, and assigns the lowest color index unused
/// among its colored neighbors. Polynomial, deterministic, and an upper
/// bound on the chromatic number; it may overshoot the optimum.
pub fn dsatur(graph: &SimpleGraph) -> HeuristicColoring {
    let n = graph.n();
    let mut assigned: Vec<Option<usize>> = vec![None; n];
    let mut saturation: Vec<BTreeSet<usize>> = vec![BTreeSet::new(); n];

    for _ in 0..n {
        let mut pick: Option<usize> = None;
        for v in 0..n {
            if assigned[v].is_some() {
                continue;
            }
            // strict comparison keeps the lowest id among ties
            let better = match pick {
                None => true,
                Some(u) => {
                    (saturation[v].len(), graph.degree(v))
                        > (saturation[u].len(), graph.degree(u))
                }
            };
            if better {
                pick = Some(v);
            }
        }
        let Some(v) = pick else {
            break;
        };

        let neighbor_colors: BTreeSet<usize> =
            graph.neighbors(v).filter_map(|w| assigned[w]).collect();
        let mut color = 0;
        while neighbor_colors.contains(&color) {
            color += 1;
        }
        assigned[v] = Some(color);
        for w in graph.neighbors(v) {
            saturation[w].insert(color);
        }
    }

    let colors: Vec<usize> = assigned
        .into_iter()
        .map(|color| color.unwrap_or_default())
        .collect();
    let color_count = colors.iter().copied().max().map_or(0, |max| max + 1);
    HeuristicColoring {
        colors,
        color_count,
    }
}

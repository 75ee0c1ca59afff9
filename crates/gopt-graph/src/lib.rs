#![deny(missing_docs)]

//! Graph data model for the graph-opt services: validated flow networks,
//! undirected simple graphs, and deterministic random generators.

mod flow;
mod generators;
mod simple;

pub use flow::{FlowArc, FlowNetwork};
pub use generators::{gen_gnp, gen_layered_network};
pub use simple::SimpleGraph;

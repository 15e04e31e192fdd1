//! Wavefront Search: breadth-first state-space search over caller-supplied
//! problem definitions.
//!
//! This crate is the engine layer of Wavefront. It knows nothing about any
//! concrete problem — worlds live in `wavefront_harness`.
//!
//! # Crate dependency graph
//!
//! ```text
//! wavefront_search  ←  wavefront_harness
//! (frontier, nodes)    (worlds, rendering, bundles)
//! ```
//!
//! # Key types
//!
//! - [`SearchProblem`] — trait for problems that support search
//! - [`SearchNode`] — immutable node with arena-indexed parent links
//! - [`NodeArena`] — owner of all nodes created by a run; path reconstruction
//! - [`FifoFrontier`] — FIFO frontier with by-state membership index
//! - [`SearchReportV1`] — per-run summary artifact (counters, termination)
//! - [`tree_search`] / [`graph_search`] — the two exploration strategies
//!
//! [`SearchProblem`]: contract::SearchProblem
//! [`SearchNode`]: node::SearchNode
//! [`NodeArena`]: node::NodeArena
//! [`FifoFrontier`]: frontier::FifoFrontier
//! [`SearchReportV1`]: report::SearchReportV1
//! [`tree_search`]: search::tree_search
//! [`graph_search`]: search::graph_search

#![forbid(unsafe_code)]

pub mod contract;
pub mod error;
pub mod frontier;
pub mod node;
pub mod report;
pub mod search;

//! Graph compilation error.
//!
//! Returned by `StateGraph::compile` when the graph wiring is inconsistent.

use thiserror::Error;

/// Error when compiling a state graph.
///
/// Validation ensures every edge endpoint and every conditional target is a
/// registered node (or `START`/`END`), and that the graph has an entry point.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CompilationError {
    /// An edge or conditional target references an id not registered via `add_node`.
    #[error("node not found: {0}")]
    NodeNotFound(String),
    /// Neither `add_edge(START, ..)` nor `set_conditional_entry_point` was called.
    #[error("graph has no entry point")]
    MissingEntryPoint,
}

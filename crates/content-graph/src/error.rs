//! Runtime errors raised by the graph itself (not by node bodies).
//!
//! Node error types convert from `GraphError` so a compiled graph can surface
//! routing faults through the caller's own error enum.

use thiserror::Error;

/// Errors produced while running a compiled graph.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum GraphError {
    /// The conditional entry router returned an id outside its declared targets.
    #[error("unknown route: {0}")]
    UnknownRoute(String),
    /// A node returned `Next::Node(id)` for an id that was never registered.
    #[error("node not found: {0}")]
    NodeNotFound(String),
    /// The run did not reach END within the step limit.
    #[error("max steps exceeded: {0}")]
    MaxStepsExceeded(usize),
    /// Node execution failed; used by nodes that keep `GraphError` as their error type.
    #[error("execution failed: {0}")]
    ExecutionFailed(String),
}

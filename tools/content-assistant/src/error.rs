//! Error taxonomy for the content workflow.
//!
//! **Interaction**: Returned by `IdeaGenerator`, `ContentExpander`, the workflow nodes
//! and `WorkflowController`. Graph runtime faults arrive through `Graph`.

use content_graph::{GatewayError, GraphError};
use thiserror::Error;

/// Why an idea-generation call produced no batch.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum GenerationCause {
    /// The gateway call itself failed.
    #[error(transparent)]
    Gateway(#[from] GatewayError),
    /// The response body is not JSON.
    #[error("response is not valid JSON: {0}")]
    Malformed(String),
    /// The JSON does not satisfy the five-idea schema.
    #[error("response violates the idea schema: {0}")]
    Schema(String),
}

/// Failures surfaced to the caller of the workflow. Nothing here is retried.
#[derive(Debug, Error)]
pub enum ContentError {
    /// Gateway error, malformed JSON or schema violation during idea generation.
    #[error("idea generation failed: {0}")]
    GenerationFailure(#[source] GenerationCause),
    /// Gateway error during content expansion.
    #[error("content expansion failed: {0}")]
    ExpansionFailure(#[source] GatewayError),
    /// The inbound request named a request type the controller does not route.
    #[error("unknown request type: {0}")]
    UnknownRequestType(String),
    /// A required input field is missing, empty or invalid.
    #[error("invalid input: {0}")]
    InputValidationFailure(String),
    /// The graph runtime failed (unknown route, step limit).
    #[error(transparent)]
    Graph(#[from] GraphError),
}

impl ContentError {
    pub(crate) fn invalid(field: impl Into<String>) -> Self {
        ContentError::InputValidationFailure(field.into())
    }
}

//! Workflow controller: conditional entry on `request_type`, one node, then END.
//!
//! **Interaction**: Built once per process from a gateway; `run` is a pure function
//! over `WorkflowState` (no persistence, no network of its own beyond the node's
//! single gateway call). On error the caller's previous state is still valid.

use std::sync::Arc;

use content_graph::{CompilationError, CompiledStateGraph, ModelGateway, StateGraph, END};
use tracing::info;

use crate::error::ContentError;
use crate::expander::ContentExpander;
use crate::generator::IdeaGenerator;

use super::nodes::{GenerateContentNode, GenerateIdeasNode, GENERATE_CONTENT, GENERATE_IDEAS};
use super::state::{WorkflowRequest, WorkflowState};

/// Builds the two-node graph: Start routes to `generate_ideas` or `generate_content`,
/// both lead to END.
pub fn build_graph(
    gateway: Arc<dyn ModelGateway>,
) -> Result<CompiledStateGraph<WorkflowState, ContentError>, CompilationError> {
    let ideas = GenerateIdeasNode::new(IdeaGenerator::new(gateway.clone()));
    let content = GenerateContentNode::new(ContentExpander::new(gateway));

    let mut graph = StateGraph::<WorkflowState, ContentError>::new();
    graph
        .add_node(GENERATE_IDEAS, Arc::new(ideas))
        .add_node(GENERATE_CONTENT, Arc::new(content))
        .set_conditional_entry_point(
            |state: &WorkflowState| state.request_type.node_id().to_string(),
            [GENERATE_IDEAS, GENERATE_CONTENT],
        )
        .add_edge(GENERATE_IDEAS, END)
        .add_edge(GENERATE_CONTENT, END);
    graph.compile()
}

pub struct WorkflowController {
    graph: CompiledStateGraph<WorkflowState, ContentError>,
}

impl WorkflowController {
    pub fn new(gateway: Arc<dyn ModelGateway>) -> Result<Self, CompilationError> {
        Ok(Self {
            graph: build_graph(gateway)?,
        })
    }

    /// Routes `state` to its node and returns the updated state.
    pub async fn run(&self, state: WorkflowState) -> Result<WorkflowState, ContentError> {
        info!(request_type = ?state.request_type, "routing request");
        self.graph.invoke(state).await
    }

    /// Resolves an inbound request; unknown request types fail before any gateway call.
    pub async fn handle(&self, request: WorkflowRequest) -> Result<WorkflowState, ContentError> {
        let state = WorkflowState::try_from(request)?;
        self.run(state).await
    }
}

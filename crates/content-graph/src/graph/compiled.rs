//! Compiled state graph: immutable, supports invoke only.
//!
//! Built by `StateGraph::compile`. Picks the first node from the entry point, then
//! follows each node's `Next` until END or the step limit.

use std::collections::HashMap;
use std::sync::Arc;

use tracing::debug;

use crate::error::GraphError;

use super::state_graph::{EntryPoint, END};
use super::{Next, Node};

/// Compiled graph: immutable structure, supports invoke only.
///
/// Shareable across tasks behind `Arc`; all run state lives in the `S` value passed
/// to `invoke`.
pub struct CompiledStateGraph<S, E = GraphError> {
    pub(super) nodes: HashMap<String, Arc<dyn Node<S, E>>>,
    pub(super) edges: HashMap<String, String>,
    pub(super) entry: EntryPoint<S>,
    pub(super) max_steps: usize,
}

impl<S, E> CompiledStateGraph<S, E>
where
    S: Clone + Send + Sync + 'static,
    E: From<GraphError> + Send + 'static,
{
    /// Resolves the first node for `state`; `END` means nothing runs.
    fn entry_node(&self, state: &S) -> Result<String, GraphError> {
        match &self.entry {
            EntryPoint::Fixed(id) => Ok(id.clone()),
            EntryPoint::Conditional { router, targets } => {
                let route = router(state);
                if !targets.iter().any(|t| t == &route) {
                    return Err(GraphError::UnknownRoute(route));
                }
                debug!(route = %route, "conditional entry resolved");
                Ok(route)
            }
        }
    }

    /// Runs the graph with the given state and returns the final state.
    ///
    /// - `Next::Continue`: follow the node's outgoing edge, or end if it has none.
    /// - `Next::Node(id)`: run the node with that id next.
    /// - `Next::End`: stop and return current state.
    ///
    /// Node errors are returned as-is; the input state is consumed either way.
    pub async fn invoke(&self, state: S) -> Result<S, E> {
        let mut state = state;
        let mut current = self.entry_node(&state)?;
        let mut steps = 0usize;

        while current != END {
            if steps >= self.max_steps {
                return Err(GraphError::MaxStepsExceeded(self.max_steps).into());
            }
            steps += 1;

            let node = self
                .nodes
                .get(&current)
                .ok_or_else(|| GraphError::NodeNotFound(current.clone()))?;
            debug!(node = %current, step = steps, "running node");
            let (new_state, next) = node.run(state).await?;
            state = new_state;

            current = match next {
                Next::End => break,
                Next::Node(id) => id,
                Next::Continue => match self.edges.get(&current) {
                    Some(to) => to.clone(),
                    None => break,
                },
            };
        }
        Ok(state)
    }
}

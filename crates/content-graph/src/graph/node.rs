//! Graph node trait: one step in a StateGraph.
//!
//! Receives state `S`, returns updated `S` and `Next`. The error type `E` is chosen by
//! the graph owner; it must absorb `GraphError` so routing faults share the same channel.

use async_trait::async_trait;

use crate::error::GraphError;

use super::Next;

/// One step in a graph: state in, (state out, next step).
///
/// **Interaction**: Registered with `StateGraph::add_node`; run by
/// `CompiledStateGraph::invoke`.
#[async_trait]
pub trait Node<S, E = GraphError>: Send + Sync
where
    S: Clone + Send + Sync + 'static,
    E: From<GraphError> + Send + 'static,
{
    /// Node id (e.g. `"generate_ideas"`). Must be unique within a graph.
    fn id(&self) -> &str;

    /// One step: state in, (state out, next step).
    async fn run(&self, state: S) -> Result<(S, Next), E>;
}

//! State graph builder: nodes, edges and an entry point.
//!
//! Add nodes with `add_node`, wire them with `add_edge(from, to)` using the `START`
//! and `END` sentinels, or start from `set_conditional_entry_point`, then `compile`
//! to get a `CompiledStateGraph`.

use std::collections::HashMap;
use std::sync::Arc;

use crate::error::GraphError;
use crate::graph::compile_error::CompilationError;
use crate::graph::compiled::CompiledStateGraph;
use crate::graph::node::Node;

/// Virtual source node: `add_edge(START, id)` makes `id` the fixed entry point.
pub const START: &str = "__start__";
/// Virtual sink node: an edge to `END` (or a router returning it) stops the run.
pub const END: &str = "__end__";

/// Step limit used unless `with_max_steps` is called.
pub const DEFAULT_MAX_STEPS: usize = 32;

/// Conditional entry router: reads the incoming state and returns the id of the first node.
pub type Router<S> = Arc<dyn Fn(&S) -> String + Send + Sync>;

/// How a run picks its first node.
pub(super) enum EntryPoint<S> {
    Fixed(String),
    Conditional {
        router: Router<S>,
        targets: Vec<String>,
    },
}

/// State graph: nodes, single outgoing edge per node, and an entry point.
///
/// Generic over state type `S` and node error type `E`. Build with `add_node` /
/// `add_edge` / `set_conditional_entry_point`, then `compile()`.
///
/// **Interaction**: Accepts `Arc<dyn Node<S, E>>`; produces `CompiledStateGraph<S, E>`.
pub struct StateGraph<S, E = GraphError> {
    nodes: HashMap<String, Arc<dyn Node<S, E>>>,
    /// from -> to; `END` as target stops the run.
    edges: HashMap<String, String>,
    entry: Option<EntryPoint<S>>,
    max_steps: usize,
}

impl<S, E> Default for StateGraph<S, E>
where
    S: Clone + Send + Sync + 'static,
    E: From<GraphError> + Send + 'static,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<S, E> StateGraph<S, E>
where
    S: Clone + Send + Sync + 'static,
    E: From<GraphError> + Send + 'static,
{
    /// Creates an empty graph.
    pub fn new() -> Self {
        Self {
            nodes: HashMap::new(),
            edges: HashMap::new(),
            entry: None,
            max_steps: DEFAULT_MAX_STEPS,
        }
    }

    /// Overrides the step limit applied by `invoke`.
    pub fn with_max_steps(mut self, max_steps: usize) -> Self {
        self.max_steps = max_steps;
        self
    }

    /// Adds a node; replaces any node already registered under the same id.
    pub fn add_node(&mut self, id: impl Into<String>, node: Arc<dyn Node<S, E>>) -> &mut Self {
        self.nodes.insert(id.into(), node);
        self
    }

    /// Adds an edge. `from == START` sets the fixed entry point; any other `from`
    /// gets `to` as its single outgoing edge (a later call replaces it).
    pub fn add_edge(&mut self, from: impl Into<String>, to: impl Into<String>) -> &mut Self {
        let from = from.into();
        let to = to.into();
        if from == START {
            self.entry = Some(EntryPoint::Fixed(to));
        } else {
            self.edges.insert(from, to);
        }
        self
    }

    /// Starts every run at the node chosen by `router`.
    ///
    /// `targets` lists every id the router may return; it is checked at compile time,
    /// and a router result outside it fails the run with `GraphError::UnknownRoute`.
    pub fn set_conditional_entry_point<F, I, T>(&mut self, router: F, targets: I) -> &mut Self
    where
        F: Fn(&S) -> String + Send + Sync + 'static,
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        self.entry = Some(EntryPoint::Conditional {
            router: Arc::new(router),
            targets: targets.into_iter().map(Into::into).collect(),
        });
        self
    }

    fn check_target(&self, id: &str) -> Result<(), CompilationError> {
        if id == END || self.nodes.contains_key(id) {
            Ok(())
        } else {
            Err(CompilationError::NodeNotFound(id.to_string()))
        }
    }

    /// Builds the executable graph.
    ///
    /// Fails with `MissingEntryPoint` when no entry was set, or `NodeNotFound(id)` when
    /// an edge endpoint or conditional target is not a registered node.
    pub fn compile(self) -> Result<CompiledStateGraph<S, E>, CompilationError> {
        match &self.entry {
            None => return Err(CompilationError::MissingEntryPoint),
            Some(EntryPoint::Fixed(id)) => self.check_target(id)?,
            Some(EntryPoint::Conditional { targets, .. }) => {
                for id in targets {
                    self.check_target(id)?;
                }
            }
        }
        for (from, to) in &self.edges {
            if !self.nodes.contains_key(from) {
                return Err(CompilationError::NodeNotFound(from.clone()));
            }
            self.check_target(to)?;
        }
        let Some(entry) = self.entry else {
            return Err(CompilationError::MissingEntryPoint);
        };
        Ok(CompiledStateGraph {
            nodes: self.nodes,
            edges: self.edges,
            entry,
            max_steps: self.max_steps,
        })
    }
}

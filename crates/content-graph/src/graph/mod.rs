//! State graph: nodes, edges and an entry point; compile, then invoke.
//!
//! Aligns with LangGraph `StateGraph`: add nodes, wire `START`/`END` edges or a
//! conditional entry point, compile, then invoke with state.

mod compile_error;
mod compiled;
mod next;
mod node;
mod state_graph;

pub use compile_error::CompilationError;
pub use compiled::CompiledStateGraph;
pub use next::Next;
pub use node::Node;
pub use state_graph::{Router, StateGraph, DEFAULT_MAX_STEPS, END, START};

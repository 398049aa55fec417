//! Minimal LangGraph-style state graph in Rust: state-in, state-out.
//!
//! One state type per graph; each node takes the state and returns the updated state
//! plus a routing decision (`Next`). Graphs start either from a fixed `START` edge or
//! from a conditional entry point that inspects the incoming state.
//!
//! The `gateway` module holds the model gateway contract used by nodes that call a
//! hosted LLM, with an OpenAI-compatible client and a scripted mock.

pub mod error;
pub mod gateway;
pub mod graph;

pub use error::GraphError;
pub use gateway::{
    ChatMessage, ChatRequest, ChatResponse, GatewayConfig, GatewayError, MessageRole,
    MockGateway, ModelGateway, OpenAiGateway, Usage, DEFAULT_API_BASE, DEFAULT_MODEL,
    DEFAULT_TIMEOUT,
};
pub use graph::{
    CompilationError, CompiledStateGraph, Next, Node, Router, StateGraph, DEFAULT_MAX_STEPS, END,
    START,
};

//! Idea/content workflow expressed as a state graph with a conditional entry point.

mod controller;
mod nodes;
mod state;

pub use controller::{build_graph, WorkflowController};
pub use nodes::{
    GenerateContentNode, GenerateIdeasNode, GENERATE_CONTENT, GENERATE_IDEAS,
    REJECTION_LOG_WARN_BYTES,
};
pub use state::{RequestType, WorkflowRequest, WorkflowState};

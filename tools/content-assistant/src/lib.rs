//! Content assistant: social-media ideas and posts for a small business.
//!
//! Turns a business profile into five content ideas, regenerates while the user rejects
//! them (never repeating what was already shown), and expands the chosen idea into a
//! ready-to-publish post. Routing runs on a two-node `content_graph::StateGraph`.

pub mod accept;
pub mod config;
pub mod demo;
pub mod error;
pub mod expander;
pub mod generator;
pub mod idea;
pub mod output;
pub mod profile;
pub mod prompt;
pub mod session;
pub mod sink;
pub mod workflow;

pub use accept::{accept_idea, Accepted};
pub use config::{Config, Overrides};
pub use demo::DemoGateway;
pub use error::{ContentError, GenerationCause};
pub use expander::ContentExpander;
pub use generator::IdeaGenerator;
pub use idea::{ContentIdea, IdeaBatch, RejectionLog, BATCH_SIZE};
pub use output::{format_ideas, format_record, MenuChoice};
pub use profile::{BusinessProfile, Tone};
pub use session::SessionStore;
pub use sink::{ChosenContent, ContentRecord, ContentSink, MemorySink, SinkError, SqliteSink};
pub use workflow::{RequestType, WorkflowController, WorkflowRequest, WorkflowState};

//! The two workflow nodes: generate ideas, generate content. Both end the run.

use async_trait::async_trait;
use content_graph::{Next, Node};
use tracing::warn;

use crate::error::ContentError;
use crate::expander::ContentExpander;
use crate::generator::IdeaGenerator;

use super::state::WorkflowState;

pub const GENERATE_IDEAS: &str = "generate_ideas";
pub const GENERATE_CONTENT: &str = "generate_content";

/// Rendered rejection log size past which a warning is logged. The log is never pruned.
pub const REJECTION_LOG_WARN_BYTES: usize = 16 * 1024;

/// Moves `current_ideas` into the rejection log, then asks for a fresh batch.
pub struct GenerateIdeasNode {
    generator: IdeaGenerator,
}

impl GenerateIdeasNode {
    pub fn new(generator: IdeaGenerator) -> Self {
        Self { generator }
    }
}

#[async_trait]
impl Node<WorkflowState, ContentError> for GenerateIdeasNode {
    fn id(&self) -> &str {
        GENERATE_IDEAS
    }

    async fn run(&self, state: WorkflowState) -> Result<(WorkflowState, Next), ContentError> {
        let mut rejected = state.rejected_ideas.clone();
        if let Some(current) = &state.current_ideas {
            rejected.push(current);
        }
        let rendered = rejected.render();
        if rendered.len() > REJECTION_LOG_WARN_BYTES {
            warn!(
                batches = rejected.len(),
                bytes = rendered.len(),
                "rejection log keeps growing; prompt size is unbounded"
            );
        }

        let batch = self.generator.generate(&state.profile, &rendered).await?;
        Ok((
            WorkflowState {
                current_ideas: Some(batch),
                rejected_ideas: rejected,
                ..state
            },
            Next::End,
        ))
    }
}

/// Expands `chosen_idea` into `final_content`.
pub struct GenerateContentNode {
    expander: ContentExpander,
}

impl GenerateContentNode {
    pub fn new(expander: ContentExpander) -> Self {
        Self { expander }
    }
}

#[async_trait]
impl Node<WorkflowState, ContentError> for GenerateContentNode {
    fn id(&self) -> &str {
        GENERATE_CONTENT
    }

    async fn run(&self, state: WorkflowState) -> Result<(WorkflowState, Next), ContentError> {
        let chosen = state
            .chosen_idea
            .as_deref()
            .ok_or_else(|| ContentError::invalid("chosen_idea"))?;
        let content = self.expander.expand(&state.profile, chosen).await?;
        Ok((
            WorkflowState {
                final_content: Some(content),
                ..state
            },
            Next::End,
        ))
    }
}

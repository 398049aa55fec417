//! Accepting an idea: expand it, then append the finished record to the sink.
//!
//! **Interaction**: Called by the CLI when the user picks an idea. A sink failure is
//! returned next to the finished post instead of replacing it.

use tracing::{error, info};

use crate::error::ContentError;
use crate::idea::ContentIdea;
use crate::sink::{ChosenContent, ContentRecord, ContentSink, SinkError};
use crate::workflow::{WorkflowController, WorkflowState};

/// Outcome of a successful expansion.
#[derive(Debug)]
pub struct Accepted {
    /// Workflow state with `final_content` set.
    pub state: WorkflowState,
    pub record: ContentRecord,
    /// Result of the sink append. The post in `record` is valid either way.
    pub saved: Result<(), SinkError>,
}

/// Expands `idea` on top of `state` and appends the record to `sink`.
///
/// Fails only when the expansion itself fails; `state` is then still the caller's.
pub async fn accept_idea(
    controller: &WorkflowController,
    sink: &dyn ContentSink,
    state: WorkflowState,
    idea: ContentIdea,
) -> Result<Accepted, ContentError> {
    let done = controller.run(state.choose(idea.idea.clone())).await?;
    let record = ChosenContent {
        profile: done.profile.clone(),
        idea,
        expansion: done.final_content.clone().unwrap_or_default(),
    }
    .to_record();

    let saved = sink.append(&record).await;
    match &saved {
        Ok(()) => info!(idea = %record.idea, "content accepted and saved"),
        Err(e) => error!(error = %e, idea = %record.idea, "content accepted but not saved"),
    }
    Ok(Accepted {
        state: done,
        record,
        saved,
    })
}

//! Workflow state threaded through the controller, and the inbound request shape.
//!
//! **Interaction**: `WorkflowState` goes into and comes out of `WorkflowController::run`;
//! hosts keep it per session (see `SessionStore`). `WorkflowRequest` is the loosely
//! typed inbound form whose request type is resolved before the graph runs.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ContentError;
use crate::idea::{IdeaBatch, RejectionLog};
use crate::profile::BusinessProfile;

use super::nodes::{GENERATE_CONTENT, GENERATE_IDEAS};

/// Which branch of the workflow a request takes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RequestType {
    GenerateIdeas,
    GenerateContent,
}

impl RequestType {
    /// Graph node that handles this request type.
    pub fn node_id(self) -> &'static str {
        match self {
            RequestType::GenerateIdeas => GENERATE_IDEAS,
            RequestType::GenerateContent => GENERATE_CONTENT,
        }
    }
}

impl FromStr for RequestType {
    type Err = ContentError;

    /// Accepts the variant names and the route keys `create_ideas` / `create_content`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "GenerateIdeas" | "create_ideas" => Ok(RequestType::GenerateIdeas),
            "GenerateContent" | "create_content" => Ok(RequestType::GenerateContent),
            other => Err(ContentError::UnknownRequestType(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkflowState {
    pub request_type: RequestType,
    #[serde(rename = "businessProfile")]
    pub profile: BusinessProfile,
    #[serde(default)]
    pub current_ideas: Option<IdeaBatch>,
    #[serde(default)]
    pub rejected_ideas: RejectionLog,
    #[serde(default)]
    pub chosen_idea: Option<String>,
    #[serde(default)]
    pub final_content: Option<String>,
}

impl WorkflowState {
    /// Fresh session state asking for the first batch of ideas.
    pub fn new(profile: BusinessProfile) -> Self {
        Self {
            request_type: RequestType::GenerateIdeas,
            profile,
            current_ideas: None,
            rejected_ideas: RejectionLog::new(),
            chosen_idea: None,
            final_content: None,
        }
    }

    /// Same session, asking for another batch (the current one becomes rejected).
    pub fn request_more_ideas(self) -> Self {
        Self {
            request_type: RequestType::GenerateIdeas,
            ..self
        }
    }

    /// Same session, asking to expand `idea`.
    pub fn choose(self, idea: impl Into<String>) -> Self {
        Self {
            request_type: RequestType::GenerateContent,
            chosen_idea: Some(idea.into()),
            ..self
        }
    }
}

/// Inbound request: `requestType` is free text until resolved.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkflowRequest {
    pub request_type: String,
    pub business_profile: BusinessProfile,
    #[serde(default, alias = "rejectedIdeasSoFar")]
    pub rejected_ideas: RejectionLog,
    #[serde(default, alias = "currentIdeasSoFar")]
    pub current_ideas: Option<IdeaBatch>,
    #[serde(default)]
    pub chosen_idea: Option<String>,
}

impl TryFrom<WorkflowRequest> for WorkflowState {
    type Error = ContentError;

    fn try_from(req: WorkflowRequest) -> Result<Self, Self::Error> {
        Ok(Self {
            request_type: req.request_type.parse()?,
            profile: req.business_profile,
            current_ideas: req.current_ideas,
            rejected_ideas: req.rejected_ideas,
            chosen_idea: req.chosen_idea,
            final_content: None,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile::Tone;

    fn cafe() -> BusinessProfile {
        BusinessProfile::new(
            "Café Luna",
            "artisan coffee shop",
            Tone::Creative,
            "increase foot traffic",
        )
    }

    #[test]
    fn request_type_parses_names_and_route_keys() {
        assert_eq!("GenerateIdeas".parse::<RequestType>().unwrap(), RequestType::GenerateIdeas);
        assert_eq!("create_content".parse::<RequestType>().unwrap(), RequestType::GenerateContent);
        assert!(matches!(
            "DeleteEverything".parse::<RequestType>(),
            Err(ContentError::UnknownRequestType(s)) if s == "DeleteEverything"
        ));
    }

    #[test]
    fn request_converts_to_state() {
        let json = r#"{
            "requestType": "GenerateContent",
            "businessProfile": {"name":"Café Luna","description":"artisan coffee shop","tone":"Creative","goals":"increase foot traffic"},
            "chosenIdea": "Host a latte-art contest"
        }"#;
        let req: WorkflowRequest = serde_json::from_str(json).unwrap();
        let state = WorkflowState::try_from(req).unwrap();
        assert_eq!(state.request_type, RequestType::GenerateContent);
        assert_eq!(state.chosen_idea.as_deref(), Some("Host a latte-art contest"));
        assert!(state.rejected_ideas.is_empty());
        assert!(state.current_ideas.is_none());
    }

    #[test]
    fn unknown_request_type_fails_conversion() {
        let req = WorkflowRequest {
            request_type: "Publish".into(),
            business_profile: cafe(),
            rejected_ideas: RejectionLog::new(),
            current_ideas: None,
            chosen_idea: None,
        };
        assert!(matches!(
            WorkflowState::try_from(req),
            Err(ContentError::UnknownRequestType(_))
        ));
    }

    #[test]
    fn state_transitions_keep_session_data() {
        let state = WorkflowState::new(cafe()).choose("Latte art");
        assert_eq!(state.request_type, RequestType::GenerateContent);
        let state = state.request_more_ideas();
        assert_eq!(state.request_type, RequestType::GenerateIdeas);
        assert_eq!(state.chosen_idea.as_deref(), Some("Latte art"));
    }

    #[test]
    fn state_json_roundtrip() {
        let state = WorkflowState::new(cafe()).choose("Latte art");
        let json = serde_json::to_string(&state).unwrap();
        assert!(json.contains("\"requestType\":\"GenerateContent\""));
        assert!(json.contains("\"businessProfile\""));
        let back: WorkflowState = serde_json::from_str(&json).unwrap();
        assert_eq!(back, state);
    }
}

//! Content expander: profile + chosen idea -> finished post text, returned as-is.

use std::sync::Arc;

use content_graph::{ChatRequest, ModelGateway};
use tracing::{info, warn};

use crate::error::ContentError;
use crate::profile::BusinessProfile;
use crate::prompt::{content_prompt, CONTENT_KICKOFF, SAMPLING_TEMPERATURE};

/// **Interaction**: Holds `Arc<dyn ModelGateway>`; called by `GenerateContentNode`.
pub struct ContentExpander {
    gateway: Arc<dyn ModelGateway>,
}

impl ContentExpander {
    pub fn new(gateway: Arc<dyn ModelGateway>) -> Self {
        Self { gateway }
    }

    /// One gateway call. The text is not parsed; it is meant for direct display.
    pub async fn expand(
        &self,
        profile: &BusinessProfile,
        chosen_idea: &str,
    ) -> Result<String, ContentError> {
        profile.validate()?;
        if chosen_idea.trim().is_empty() {
            return Err(ContentError::invalid("chosen_idea"));
        }
        let request = ChatRequest::with_system(content_prompt(profile, chosen_idea), CONTENT_KICKOFF)
            .temperature(SAMPLING_TEMPERATURE);
        info!(business = %profile.name, idea = %chosen_idea, "expanding chosen idea");

        let response = self.gateway.chat(request).await.map_err(|e| {
            warn!(error = %e, "content expansion gateway call failed");
            ContentError::ExpansionFailure(e)
        })?;
        info!(len = response.content.len(), "content expanded");
        Ok(response.content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile::Tone;
    use content_graph::{GatewayError, MockGateway};

    fn cafe() -> BusinessProfile {
        BusinessProfile::new(
            "Café Luna",
            "artisan coffee shop",
            Tone::Creative,
            "increase foot traffic",
        )
    }

    #[tokio::test]
    async fn returns_raw_text() {
        let gw = Arc::new(MockGateway::with_fixed_response("1. CONCEPT: ...\n2. Instagram"));
        let out = ContentExpander::new(gw.clone())
            .expand(&cafe(), "Host a latte-art contest")
            .await
            .unwrap();
        assert_eq!(out, "1. CONCEPT: ...\n2. Instagram");
        let req = &gw.requests()[0];
        assert_eq!(req.temperature, Some(SAMPLING_TEMPERATURE));
        assert!(req.system_prompt().unwrap().contains("Host a latte-art contest"));
    }

    #[tokio::test]
    async fn transport_error_is_expansion_failure() {
        let gw = Arc::new(MockGateway::failing(GatewayError::Network("timeout".into())));
        let err = ContentExpander::new(gw)
            .expand(&cafe(), "Host a latte-art contest")
            .await
            .unwrap_err();
        assert!(matches!(err, ContentError::ExpansionFailure(GatewayError::Network(_))));
    }

    #[tokio::test]
    async fn empty_idea_is_rejected_before_call() {
        let gw = Arc::new(MockGateway::with_fixed_response("x"));
        let err = ContentExpander::new(gw.clone())
            .expand(&cafe(), "  ")
            .await
            .unwrap_err();
        assert!(matches!(err, ContentError::InputValidationFailure(f) if f == "chosen_idea"));
        assert_eq!(gw.call_count(), 0);
    }
}

//! Idea generator: profile + rejected ideas -> validated batch of five ideas.
//!
//! **Interaction**: Holds `Arc<dyn ModelGateway>`; called by `GenerateIdeasNode`.
//! Stateless: the caller carries the rejected-ideas text forward.

use std::sync::Arc;

use content_graph::{ChatRequest, ModelGateway};
use tracing::{info, warn};

use crate::error::{ContentError, GenerationCause};
use crate::idea::IdeaBatch;
use crate::profile::BusinessProfile;
use crate::prompt::{ideas_prompt, IDEAS_KICKOFF, SAMPLING_TEMPERATURE};

pub struct IdeaGenerator {
    gateway: Arc<dyn ModelGateway>,
}

impl IdeaGenerator {
    pub fn new(gateway: Arc<dyn ModelGateway>) -> Self {
        Self { gateway }
    }

    /// One gateway call; either five valid ideas or `GenerationFailure`. No retry.
    pub async fn generate(
        &self,
        profile: &BusinessProfile,
        rejected: &str,
    ) -> Result<IdeaBatch, ContentError> {
        profile.validate()?;
        let request = ChatRequest::with_system(ideas_prompt(profile, rejected), IDEAS_KICKOFF)
            .temperature(SAMPLING_TEMPERATURE);
        info!(business = %profile.name, rejected_len = rejected.len(), "generating content ideas");

        let response = self.gateway.chat(request).await.map_err(|e| {
            warn!(error = %e, "idea generation gateway call failed");
            ContentError::GenerationFailure(GenerationCause::Gateway(e))
        })?;
        let batch = IdeaBatch::parse(&response.content).map_err(|cause| {
            warn!(error = %cause, "model returned an invalid idea batch");
            ContentError::GenerationFailure(cause)
        })?;
        info!(ideas = batch.ideas().len(), "content ideas generated");
        Ok(batch)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile::Tone;
    use content_graph::{GatewayError, MockGateway};

    const FIVE: &str = r#"{"content_ideas":[{"id":1,"idea":"a"},{"id":2,"idea":"b"},{"id":3,"idea":"c"},{"id":4,"idea":"d"},{"id":5,"idea":"e"}]}"#;

    fn cafe() -> BusinessProfile {
        BusinessProfile::new(
            "Café Luna",
            "artisan coffee shop",
            Tone::Creative,
            "increase foot traffic",
        )
    }

    #[tokio::test]
    async fn returns_batch_and_sends_fixed_temperature() {
        let gw = Arc::new(MockGateway::with_fixed_response(FIVE));
        let generator = IdeaGenerator::new(gw.clone());
        let batch = generator.generate(&cafe(), "").await.unwrap();
        assert_eq!(batch.ideas().len(), 5);

        let reqs = gw.requests();
        assert_eq!(reqs.len(), 1);
        assert_eq!(reqs[0].temperature, Some(SAMPLING_TEMPERATURE));
        assert!(reqs[0].system_prompt().unwrap().contains("Café Luna"));
    }

    #[tokio::test]
    async fn transport_error_is_generation_failure() {
        let gw = Arc::new(MockGateway::failing(GatewayError::Network("reset".into())));
        let err = IdeaGenerator::new(gw).generate(&cafe(), "").await.unwrap_err();
        assert!(matches!(
            err,
            ContentError::GenerationFailure(GenerationCause::Gateway(GatewayError::Network(_)))
        ));
    }

    #[tokio::test]
    async fn invalid_profile_skips_gateway() {
        let gw = Arc::new(MockGateway::with_fixed_response(FIVE));
        let mut profile = cafe();
        profile.name = String::new();
        let err = IdeaGenerator::new(gw.clone())
            .generate(&profile, "")
            .await
            .unwrap_err();
        assert!(matches!(err, ContentError::InputValidationFailure(f) if f == "name"));
        assert_eq!(gw.call_count(), 0);
    }
}

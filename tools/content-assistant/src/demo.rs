//! Offline gateway for `--dry-run`: canned ideas and a canned post, no network.

use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use content_graph::{ChatRequest, ChatResponse, GatewayError, ModelGateway};

const IDEAS: [&str; 5] = [
    "Behind-the-scenes reel of a typical morning",
    "Customer spotlight series with short testimonials",
    "Weekly tip carousel tied to your product",
    "Limited-time giveaway for followers who share a post",
    "Live Q&A answering the most common customer questions",
];

/// Answers idea prompts with a fresh numbered batch and content prompts with a sample post.
#[derive(Debug, Default)]
pub struct DemoGateway {
    rounds: AtomicUsize,
}

impl DemoGateway {
    pub fn new() -> Self {
        Self::default()
    }

    fn ideas(&self) -> String {
        let round = self.rounds.fetch_add(1, Ordering::SeqCst) + 1;
        let ideas: Vec<serde_json::Value> = IDEAS
            .iter()
            .enumerate()
            .map(|(i, idea)| {
                let text = if round == 1 {
                    idea.to_string()
                } else {
                    format!("{idea} (round {round})")
                };
                serde_json::json!({ "id": i + 1, "idea": text })
            })
            .collect();
        serde_json::json!({ "content_ideas": ideas }).to_string()
    }
}

#[async_trait]
impl ModelGateway for DemoGateway {
    async fn chat(&self, request: ChatRequest) -> Result<ChatResponse, GatewayError> {
        let system = request.system_prompt().unwrap_or_default();
        if system.contains("content_ideas") {
            return Ok(ChatResponse::text(self.ideas()));
        }
        Ok(ChatResponse::text(
            "1. CONCEPT\nA short, friendly post built around the chosen idea.\n\n\
             2. SOCIAL NETWORKS\nInstagram and Facebook.\n\n\
             3. IMAGE PROMPT\nBright photo of the team at work, warm morning light.\n\n\
             4. COPY OUT\nCome see what we've been working on this week! #smallbusiness\n\n\
             5. COPY IN\nMade here, made for you.\n\n\
             6. VIDEO CONCEPT\nNot applicable.",
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::idea::IdeaBatch;
    use crate::profile::{BusinessProfile, Tone};
    use crate::prompt::{content_prompt, ideas_prompt};

    fn cafe() -> BusinessProfile {
        BusinessProfile::new("Café Luna", "coffee", Tone::Formal, "sell more")
    }

    #[tokio::test]
    async fn idea_prompt_gets_a_valid_batch_each_round() {
        let gw = DemoGateway::new();
        let req = ChatRequest::with_system(ideas_prompt(&cafe(), ""), "go");
        let first = IdeaBatch::parse(&gw.chat(req.clone()).await.unwrap().content).unwrap();
        let second = IdeaBatch::parse(&gw.chat(req).await.unwrap().content).unwrap();
        assert_eq!(first.ideas().len(), 5);
        assert_ne!(first, second);
    }

    #[tokio::test]
    async fn content_prompt_gets_sample_post() {
        let gw = DemoGateway::new();
        let req = ChatRequest::with_system(content_prompt(&cafe(), "Latte art"), "go");
        let text = gw.chat(req).await.unwrap().content;
        assert!(text.starts_with("1. CONCEPT"));
        assert!(IdeaBatch::parse(&text).is_err());
    }
}

//! Content ideas: the five-idea batch returned by the model and the rejection log.
//!
//! **Interaction**: `IdeaBatch::parse` is the only way model output becomes a batch;
//! `RejectionLog` is carried in `WorkflowState` and rendered into the ideas prompt.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::error::GenerationCause;

/// Number of ideas in every batch.
pub const BATCH_SIZE: usize = 5;

/// One idea; `id` is 1..=5 within its batch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentIdea {
    pub id: u32,
    pub idea: String,
}

impl ContentIdea {
    pub fn new(id: u32, idea: impl Into<String>) -> Self {
        Self {
            id,
            idea: idea.into(),
        }
    }
}

/// Unvalidated shape of the model's JSON.
mod wire {
    use serde::Deserialize;

    #[derive(Debug, Deserialize)]
    pub struct RawBatch {
        pub(super) content_ideas: Vec<RawIdea>,
    }

    #[derive(Debug, Deserialize)]
    pub struct RawIdea {
        pub(super) id: i64,
        pub(super) idea: String,
    }
}

use wire::RawBatch;

/// Exactly five ideas with ids 1..=5, no repeats, in presentation order.
///
/// Serializes as `{"content_ideas":[{"id":1,"idea":"..."},...]}`; deserializing
/// re-runs validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "wire::RawBatch")]
pub struct IdeaBatch {
    content_ideas: Vec<ContentIdea>,
}

impl IdeaBatch {
    /// Validates a list of ideas into a batch.
    pub fn new(ideas: Vec<ContentIdea>) -> Result<Self, GenerationCause> {
        if ideas.len() != BATCH_SIZE {
            return Err(GenerationCause::Schema(format!(
                "expected {BATCH_SIZE} ideas, got {}",
                ideas.len()
            )));
        }
        let mut seen = HashSet::new();
        for idea in &ideas {
            if idea.id < 1 || idea.id as usize > BATCH_SIZE {
                return Err(GenerationCause::Schema(format!(
                    "id {} out of range 1..={BATCH_SIZE}",
                    idea.id
                )));
            }
            if !seen.insert(idea.id) {
                return Err(GenerationCause::Schema(format!("duplicate id {}", idea.id)));
            }
            if idea.idea.trim().is_empty() {
                return Err(GenerationCause::Schema(format!("idea {} is empty", idea.id)));
            }
        }
        Ok(Self {
            content_ideas: ideas,
        })
    }

    /// Parses model output: optional Markdown fence or surrounding prose, then JSON,
    /// then the batch invariant.
    pub fn parse(text: &str) -> Result<Self, GenerationCause> {
        let json = extract_json(text);
        let value: serde_json::Value =
            serde_json::from_str(json).map_err(|e| GenerationCause::Malformed(e.to_string()))?;
        let raw: RawBatch =
            serde_json::from_value(value).map_err(|e| GenerationCause::Schema(e.to_string()))?;
        Self::try_from(raw)
    }

    pub fn ideas(&self) -> &[ContentIdea] {
        &self.content_ideas
    }

    pub fn get(&self, id: u32) -> Option<&ContentIdea> {
        self.content_ideas.iter().find(|i| i.id == id)
    }

    /// Serialized form used in the rejection log and in the prompt.
    pub fn to_json(&self) -> String {
        // Only strings and integers: serialization cannot fail.
        serde_json::to_string(self).unwrap_or_default()
    }
}

impl TryFrom<RawBatch> for IdeaBatch {
    type Error = GenerationCause;

    fn try_from(raw: RawBatch) -> Result<Self, Self::Error> {
        let ideas = raw
            .content_ideas
            .into_iter()
            .map(|r| {
                u32::try_from(r.id)
                    .map(|id| ContentIdea::new(id, r.idea))
                    .map_err(|_| GenerationCause::Schema(format!("id {} out of range", r.id)))
            })
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(ideas)
    }
}

/// Strips an optional Markdown fence (any info string), then any prose around the
/// outermost object.
fn extract_json(content: &str) -> &str {
    let mut content = content.trim();
    if let Some(rest) = content.strip_prefix("```") {
        let rest = rest.trim_end();
        content = rest.strip_suffix("```").unwrap_or(rest).trim();
    }
    match (content.find('{'), content.rfind('}')) {
        (Some(start), Some(end)) if start < end => &content[start..=end],
        _ => content,
    }
}

/// Append-only record of previously shown batches, oldest first. Never pruned.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RejectionLog {
    entries: Vec<String>,
}

impl RejectionLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends the serialized form of `batch`.
    pub fn push(&mut self, batch: &IdeaBatch) {
        self.entries.push(batch.to_json());
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Text embedded in the ideas prompt: entries joined by newlines, empty when none.
    pub fn render(&self) -> String {
        self.entries.join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FIVE: &str = r#"{"content_ideas":[
        {"id":1,"idea":"Latte-art contest"},
        {"id":2,"idea":"Behind the roast"},
        {"id":3,"idea":"Meet the barista"},
        {"id":4,"idea":"Customer of the week"},
        {"id":5,"idea":"Rainy-day special"}]}"#;

    #[test]
    fn parses_five_ideas_in_order() {
        let batch = IdeaBatch::parse(FIVE).unwrap();
        let ids: Vec<u32> = batch.ideas().iter().map(|i| i.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5]);
        assert_eq!(batch.get(3).unwrap().idea, "Meet the barista");
        assert!(batch.get(6).is_none());
    }

    #[test]
    fn accepts_fenced_and_prose_wrapped_json() {
        let fenced = format!("```json\n{FIVE}\n```");
        assert!(IdeaBatch::parse(&fenced).is_ok());
        let prose = format!("Here are your ideas:\n{FIVE}\nEnjoy!");
        assert!(IdeaBatch::parse(&prose).is_ok());
    }

    #[test]
    fn fence_info_string_is_ignored() {
        for tag in ["JSON", "javascript", "", "json "] {
            let fenced = format!("```{tag}\n{FIVE}\n```");
            assert_eq!(
                IdeaBatch::parse(&fenced).unwrap(),
                IdeaBatch::parse(FIVE).unwrap(),
                "tag {tag:?}"
            );
        }
        let unclosed = format!("```JSON\n{FIVE}");
        assert!(IdeaBatch::parse(&unclosed).is_ok());
    }

    #[test]
    fn single_idea_is_a_schema_error() {
        let err = IdeaBatch::parse(r#"{"content_ideas":[{"id":1,"idea":"x"}]}"#).unwrap_err();
        assert!(matches!(err, GenerationCause::Schema(msg) if msg.contains("got 1")));
    }

    #[test]
    fn duplicate_and_out_of_range_ids_are_rejected() {
        let dup = FIVE.replace(r#""id":5"#, r#""id":4"#);
        assert!(matches!(IdeaBatch::parse(&dup), Err(GenerationCause::Schema(m)) if m.contains("duplicate")));
        let zero = FIVE.replace(r#""id":1"#, r#""id":0"#);
        assert!(matches!(IdeaBatch::parse(&zero), Err(GenerationCause::Schema(_))));
        let negative = FIVE.replace(r#""id":1"#, r#""id":-1"#);
        assert!(matches!(IdeaBatch::parse(&negative), Err(GenerationCause::Schema(_))));
    }

    #[test]
    fn missing_field_and_empty_idea_are_rejected() {
        let missing = FIVE.replace(r#""idea":"Behind the roast""#, r#""text":"Behind the roast""#);
        assert!(matches!(IdeaBatch::parse(&missing), Err(GenerationCause::Schema(_))));
        let empty = FIVE.replace("Behind the roast", " ");
        assert!(matches!(IdeaBatch::parse(&empty), Err(GenerationCause::Schema(_))));
    }

    #[test]
    fn non_json_is_malformed() {
        let err = IdeaBatch::parse("Sure! 1. Latte art 2. Roasting").unwrap_err();
        assert!(matches!(err, GenerationCause::Malformed(_)));
    }

    #[test]
    fn deserialize_revalidates() {
        let bad = r#"{"content_ideas":[{"id":1,"idea":"x"}]}"#;
        assert!(serde_json::from_str::<IdeaBatch>(bad).is_err());
        let good: IdeaBatch = serde_json::from_str(FIVE).unwrap();
        assert_eq!(good.ideas().len(), BATCH_SIZE);
    }

    #[test]
    fn to_json_keeps_non_ascii_and_reparses() {
        let ideas = (1..=5)
            .map(|i| ContentIdea::new(i, format!("Café idea {i}")))
            .collect();
        let batch = IdeaBatch::new(ideas).unwrap();
        let json = batch.to_json();
        assert!(json.starts_with(r#"{"content_ideas":[{"id":1,"idea":"Café idea 1"}"#));
        assert_eq!(IdeaBatch::parse(&json).unwrap(), batch);
    }

    #[test]
    fn rejection_log_appends_in_order() {
        let first = IdeaBatch::parse(FIVE).unwrap();
        let second = IdeaBatch::parse(&FIVE.replace("Latte-art contest", "Open mic night")).unwrap();
        let mut log = RejectionLog::new();
        assert!(log.is_empty());
        assert_eq!(log.render(), "");
        log.push(&first);
        log.push(&second);
        assert_eq!(log.len(), 2);
        assert_eq!(log.render(), format!("{}\n{}", first.to_json(), second.to_json()));
        let json = serde_json::to_string(&log).unwrap();
        assert!(json.starts_with("[\""));
    }
}

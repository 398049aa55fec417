//! Console output for the CLI: idea list, accepted record, menu input.
//!
//! **Interaction**: Used by `main` only. Formatting lives here so it can be tested
//! without a terminal.

use crate::idea::{IdeaBatch, BATCH_SIZE};
use crate::sink::ContentRecord;

/// Formats the batch as `Idea {id}: {idea}`, one per line.
pub fn format_ideas(batch: &IdeaBatch) -> String {
    batch
        .ideas()
        .iter()
        .map(|i| format!("Idea {}: {}", i.id, i.idea))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Header with the business and chosen idea, then the post text unchanged.
pub fn format_record(record: &ContentRecord) -> String {
    format!(
        "Business: {}\nTone: {}\nIdea: {}\nCreated: {}\n\n{}",
        record.business_name, record.tone, record.idea, record.created_at, record.final_content
    )
}

/// One answer at the idea menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    /// 1-based idea id.
    Pick(u32),
    Regenerate,
    Quit,
}

impl MenuChoice {
    /// Parses `1`..`5`, `r` or `q` (case-insensitive). Anything else is `None`.
    pub fn parse(input: &str) -> Option<Self> {
        let input = input.trim();
        match input.to_ascii_lowercase().as_str() {
            "r" => Some(MenuChoice::Regenerate),
            "q" => Some(MenuChoice::Quit),
            _ => input
                .parse::<u32>()
                .ok()
                .filter(|n| (1..=BATCH_SIZE as u32).contains(n))
                .map(MenuChoice::Pick),
        }
    }
}

pub const MENU_HINT: &str = "Choose an idea (1-5), r to see new ideas, q to quit:";

#[cfg(test)]
mod tests {
    use super::*;
    use crate::idea::ContentIdea;

    #[test]
    fn ideas_are_listed_one_per_line() {
        let batch = IdeaBatch::new(
            (1..=5)
                .map(|n| ContentIdea::new(n, format!("idea {n}")))
                .collect(),
        )
        .unwrap();
        let text = format_ideas(&batch);
        assert_eq!(text.lines().count(), 5);
        assert_eq!(text.lines().next(), Some("Idea 1: idea 1"));
        assert_eq!(text.lines().last(), Some("Idea 5: idea 5"));
    }

    #[test]
    fn record_keeps_post_text_verbatim() {
        let record = ContentRecord {
            business_name: "Café Luna".into(),
            description: "artisan coffee shop".into(),
            tone: "Creative".into(),
            goals: "increase foot traffic".into(),
            idea: "Latte-art contest".into(),
            final_content: "1. CONCEPT\n  keep indent".into(),
            created_at: "2026-10-18T10:00:00+00:00".into(),
        };
        let text = format_record(&record);
        assert!(text.starts_with("Business: Café Luna\n"));
        assert!(text.ends_with("\n\n1. CONCEPT\n  keep indent"));
    }

    #[test]
    fn menu_accepts_ids_r_and_q() {
        assert_eq!(MenuChoice::parse(" 3 "), Some(MenuChoice::Pick(3)));
        assert_eq!(MenuChoice::parse("R"), Some(MenuChoice::Regenerate));
        assert_eq!(MenuChoice::parse("q"), Some(MenuChoice::Quit));
        assert_eq!(MenuChoice::parse("0"), None);
        assert_eq!(MenuChoice::parse("6"), None);
        assert_eq!(MenuChoice::parse("maybe"), None);
    }
}

//! Persistence sink for accepted content: one flat record per chosen idea.
//!
//! - `ContentSink`: append-only async interface
//! - `SqliteSink`: SQLite file (default `data/content.db`)
//! - `MemorySink`: in-memory, for tests and dry runs

mod memory;
mod sqlite;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::idea::ContentIdea;
use crate::profile::BusinessProfile;

pub use memory::MemorySink;
pub use sqlite::SqliteSink;

/// Error for sink operations. Backend errors are flattened to text.
#[derive(Debug, thiserror::Error)]
pub enum SinkError {
    #[error("storage: {0}")]
    Storage(String),
}

/// The accepted idea together with its expansion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChosenContent {
    pub profile: BusinessProfile,
    pub idea: ContentIdea,
    pub expansion: String,
}

impl ChosenContent {
    /// Flattens into a record stamped with the current UTC time.
    pub fn to_record(&self) -> ContentRecord {
        ContentRecord {
            business_name: self.profile.name.clone(),
            description: self.profile.description.clone(),
            tone: self.profile.tone.label().to_string(),
            goals: self.profile.goals.clone(),
            idea: self.idea.idea.clone(),
            final_content: self.expansion.clone(),
            created_at: chrono::Utc::now().to_rfc3339(),
        }
    }
}

/// Flat persisted row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentRecord {
    pub business_name: String,
    pub description: String,
    pub tone: String,
    pub goals: String,
    pub idea: String,
    pub final_content: String,
    /// RFC 3339 timestamp.
    pub created_at: String,
}

/// Append-only durable storage for content records.
#[async_trait]
pub trait ContentSink: Send + Sync {
    async fn append(&self, record: &ContentRecord) -> Result<(), SinkError>;
}

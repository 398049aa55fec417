//! In-memory sink. Not persistent.

use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use super::{ContentRecord, ContentSink, SinkError};

#[derive(Debug, Default, Clone)]
pub struct MemorySink {
    records: Arc<RwLock<Vec<ContentRecord>>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of every appended record, oldest first.
    pub async fn records(&self) -> Vec<ContentRecord> {
        self.records.read().await.clone()
    }
}

#[async_trait]
impl ContentSink for MemorySink {
    async fn append(&self, record: &ContentRecord) -> Result<(), SinkError> {
        self.records.write().await.push(record.clone());
        Ok(())
    }
}

//! In-process sessions: one `WorkflowState` per session id.
//!
//! **Interaction**: The CLI creates a session per business profile and writes back the
//! state returned by each `WorkflowController::run`. A failed run leaves the stored state
//! untouched.

use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::RwLock;
use uuid::Uuid;

use crate::workflow::WorkflowState;

#[derive(Debug, Clone, Default)]
pub struct SessionStore {
    inner: Arc<RwLock<HashMap<Uuid, WorkflowState>>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores `state` under a fresh v4 id.
    pub async fn create(&self, state: WorkflowState) -> Uuid {
        let id = Uuid::new_v4();
        self.inner.write().await.insert(id, state);
        id
    }

    pub async fn get(&self, id: &Uuid) -> Option<WorkflowState> {
        self.inner.read().await.get(id).cloned()
    }

    /// Replaces the state of an existing session. Returns false if `id` is unknown.
    pub async fn put(&self, id: &Uuid, state: WorkflowState) -> bool {
        match self.inner.write().await.get_mut(id) {
            Some(slot) => {
                *slot = state;
                true
            }
            None => false,
        }
    }

    pub async fn remove(&self, id: &Uuid) -> Option<WorkflowState> {
        self.inner.write().await.remove(id)
    }

    pub async fn len(&self) -> usize {
        self.inner.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.inner.read().await.is_empty()
    }
}

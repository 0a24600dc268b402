//! Implements a struct that holds the state of the REST server.

use std::sync::Arc;

use crate::persona::PersonaStore;

/// The state of the REST server.
#[derive(Debug, Clone)]
pub struct AppState {
    /// The personas and their transactions, shared read-only by every handler.
    pub persona_store: Arc<PersonaStore>,
}

impl AppState {
    /// Create a new [AppState] that serves the personas in `persona_store`.
    pub fn new(persona_store: PersonaStore) -> Self {
        Self {
            persona_store: Arc::new(persona_store),
        }
    }
}

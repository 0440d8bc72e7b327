//! Application context owning the session and language state.
//!
//! Build one [`AppContext`] at startup and hand it (or clones of it) to every
//! consumer. Clones share the same cells, so there is a single session and a
//! single language per context.

use std::rc::Rc;

use crate::config::{StateConfig, StorageKeys};
use crate::language::LanguageState;
use crate::session::SessionState;
use crate::storage::{default_storage, KeyValueStorage, NoopStorage};

#[derive(Clone, Debug)]
pub struct AppContext {
    session: SessionState,
    language: LanguageState,
}

impl AppContext {
    pub fn new(storage: Rc<dyn KeyValueStorage>, config: &StateConfig) -> Self {
        if !storage.is_persistent() {
            tracing::debug!("client state will not persist in this context");
        }
        let keys = match config.keys.validate() {
            Ok(()) => config.keys.clone(),
            Err(e) => {
                tracing::warn!("{e}, using default storage keys");
                StorageKeys::default()
            }
        };
        Self {
            session: SessionState::load(Rc::clone(&storage), &keys.session),
            language: LanguageState::load(storage, &keys.language, config.language.default),
        }
    }

    /// Context for a client, backed by the platform's durable storage.
    pub fn client(config: &StateConfig) -> Self {
        Self::new(default_storage(&config.storage), config)
    }

    /// Context for server rendering, where no client storage exists.
    pub fn server() -> Self {
        Self::new(Rc::new(NoopStorage), &StateConfig::default())
    }

    pub fn session(&self) -> &SessionState {
        &self.session
    }

    pub fn language(&self) -> &LanguageState {
        &self.language
    }
}

//! # Store crate — persisted client state
//!
//! Holds the two pieces of state the directory client keeps across reloads:
//! the signed-in user and the active display language. Each lives in an
//! observable [`StateCell`] and is mirrored to a [`KeyValueStorage`] backend on
//! every change, so the next start picks up where the last one left off.
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`cell`] | [`StateCell`] with synchronous subscribers and pull-based [`Derived`] values |
//! | [`storage`] | The [`KeyValueStorage`] trait, [`NoopStorage`] and platform selection |
//! | [`session`] | [`SessionState`] — cached [`api::SessionUser`], stored as JSON |
//! | [`language`] | [`LanguageState`] — active [`api::Language`], stored as its bare code |
//! | [`context`] | [`AppContext`] — owns both managers, built once at startup |
//! | [`config`] | [`StateConfig`] — storage keys, default language, storage directory |
//!
//! ## Backends
//!
//! - **Web** (WASM + `web` feature): browser `localStorage` via `WebStorage`
//! - **Desktop / Mobile** (native): one file per key via [`FileStorage`]
//! - **Server rendering**: [`NoopStorage`], which never returns anything
//! - **Tests**: [`MemoryStorage`], whose clones share contents

pub mod cell;
pub mod config;
pub mod context;
pub mod error;
pub mod language;
pub mod session;
pub mod storage;

mod file_store;
mod memory;
pub use file_store::FileStorage;
pub use memory::MemoryStorage;

#[cfg(all(target_arch = "wasm32", feature = "web"))]
mod web;
#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub use web::WebStorage;

pub use cell::{Derived, StateCell, Subscription};
pub use config::StateConfig;
pub use context::AppContext;
pub use error::{ConfigError, StorageError};
pub use language::LanguageState;
pub use session::SessionState;
pub use storage::{default_storage, KeyValueStorage, NoopStorage};

//! # API crate — shared types for the directory front-end
//!
//! Everything in here is plain data: the shapes the hosted backend returns for
//! the directory (vendors, locations, categories, tags, ratings), the identity
//! cached for the signed-in admin, the two display languages, and the public
//! runtime configuration the client reads at startup.
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`models`] | Directory records, [`SessionUser`], [`Language`] and [`FetchStatus`] |
//! | [`config`] | [`PublicConfig`] — media upload settings read from `PUBLIC_*` env vars |
//!
//! Network access to the backend is not part of this crate; callers
//! deserialize responses into these types with whatever client they use.

pub mod config;
pub mod models;

pub use config::PublicConfig;
pub use models::{
    Admin, Category, FetchStatus, Language, Location, Rating, SessionUser, Tag,
    UnknownLanguage, User, Vendor,
};

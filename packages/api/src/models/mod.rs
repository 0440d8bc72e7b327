//! Data models for the directory.

mod directory;
mod language;
mod user;

pub use directory::{Category, FetchStatus, Location, Rating, Tag};
pub use language::{Language, UnknownLanguage};
pub use user::{Admin, SessionUser, User, Vendor};

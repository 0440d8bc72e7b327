//! # Account records and the cached session identity
//!
//! The backend keeps three kinds of accounts. [`Admin`] rows are the ones that
//! sign in to the dashboard; [`User`] and [`Vendor`] rows are listed and
//! managed through it. All three carry an ISO-8601 `created_at` string exactly
//! as the backend returns it.
//!
//! [`SessionUser`] is the subset of an admin that the client keeps in local
//! storage between reloads. It is always replaced wholesale, never edited in
//! place, and `Option<SessionUser>::None` means "not signed in".

use serde::{Deserialize, Serialize};

/// Identity of the signed-in actor, cached on the client.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SessionUser {
    pub id: i64,
    pub name: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile_pic: Option<String>,
}

impl SessionUser {
    pub fn new(id: i64, name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            email: email.into(),
            profile_pic: None,
        }
    }

    /// Builder method to attach a profile picture URL.
    pub fn with_profile_pic(mut self, url: impl Into<String>) -> Self {
        self.profile_pic = Some(url.into());
        self
    }
}

/// Dashboard administrator.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Admin {
    pub id: i64,
    pub name: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile_pic: Option<String>,
    pub created_at: String,
}

impl From<&Admin> for SessionUser {
    fn from(admin: &Admin) -> Self {
        Self {
            id: admin.id,
            name: admin.name.clone(),
            email: admin.email.clone(),
            profile_pic: admin.profile_pic.clone(),
        }
    }
}

/// Registered end user.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct User {
    pub id: i64,
    pub username: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile_pic: Option<String>,
    pub created_at: String,
}

/// Account that owns one or more locations.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Vendor {
    pub id: i64,
    pub username: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile_pic: Option<String>,
    pub created_at: String,
}

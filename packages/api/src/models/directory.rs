//! # Directory records
//!
//! The listing side of the backend: a [`Location`] belongs to a vendor and a
//! [`Category`], carries any number of [`Tag`]s and media URLs, and collects
//! [`Rating`]s from users. Human-readable text is stored twice, once per
//! [`Language`], in `_en` / `_km` columns; the accessor methods pick the right
//! one for the active language.
//!
//! [`FetchStatus`] mirrors the lifecycle of a single backend request so that
//! views can render loading and error states without extra flags.

use serde::{Deserialize, Serialize};

use super::Language;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tag {
    pub id: i64,
    pub name: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: i64,
    pub name_en: String,
    pub name_km: String,
}

impl Category {
    pub fn name(&self, lang: Language) -> &str {
        lang.pick(&self.name_en, &self.name_km)
    }
}

/// A listed place, joined with its category and tags.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Location {
    pub id: i64,
    pub name_en: String,
    pub name_km: String,
    pub description_en: String,
    pub description_km: String,
    pub contact: String,
    pub address: String,
    pub map_link: String,
    pub website: String,
    /// Owning vendor. The column is spelled `vender_id` in the backend.
    pub vender_id: i64,
    pub category_id: i64,
    pub category: Category,
    #[serde(default)]
    pub tags: Vec<Tag>,
    /// Media URLs, first one is the cover image.
    #[serde(default)]
    pub media: Vec<String>,
}

impl Location {
    pub fn name(&self, lang: Language) -> &str {
        lang.pick(&self.name_en, &self.name_km)
    }

    pub fn description(&self, lang: Language) -> &str {
        lang.pick(&self.description_en, &self.description_km)
    }

    pub fn cover_image(&self) -> Option<&str> {
        self.media.first().map(String::as_str)
    }

    pub fn has_tag(&self, tag_id: i64) -> bool {
        self.tags.iter().any(|t| t.id == tag_id)
    }
}

/// A user's score for a location.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rating {
    pub id: i64,
    pub location_id: i64,
    pub user_id: i64,
    /// Score from 1 to 5.
    pub rating: u8,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
    pub created_at: String,
}

impl Rating {
    /// Mean score, or `None` for an empty slice.
    pub fn average(ratings: &[Rating]) -> Option<f64> {
        if ratings.is_empty() {
            return None;
        }
        let total: u32 = ratings.iter().map(|r| u32::from(r.rating)).sum();
        Some(f64::from(total) / ratings.len() as f64)
    }
}

/// State of a single backend request.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FetchStatus {
    #[default]
    Idle,
    Pending,
    Success,
    Error,
}

impl FetchStatus {
    pub fn is_pending(self) -> bool {
        self == FetchStatus::Pending
    }

    /// Whether the request has completed, successfully or not.
    pub fn is_finished(self) -> bool {
        matches!(self, FetchStatus::Success | FetchStatus::Error)
    }
}

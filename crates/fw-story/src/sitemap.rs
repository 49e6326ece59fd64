//! Slug extraction from `system/sitemap.json`.
//!
//! Sites publish the sitemap either as a bare array or wrapped as
//! `{"data": [...]}`. Entries are usually page summaries carrying a `slug`,
//! but bare slug strings occur too.

use serde::Deserialize;
use serde_json::{Map, Value};

use crate::error::StoryError;
use crate::fields;

/// One sitemap entry.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum SlugEntry {
    /// A bare slug.
    Slug(String),
    /// A page summary object.
    Page(Map<String, Value>),
    /// Anything else; carries no slug.
    Other(Value),
}

impl SlugEntry {
    /// The slug this entry names.
    ///
    /// Objects without a usable `slug` yield an empty slug;
    /// other values yield none.
    pub fn slug(&self) -> Option<String> {
        match self {
            Self::Slug(slug) => Some(slug.clone()),
            Self::Page(obj) => Some(fields::string_or(obj, "slug", "")),
            Self::Other(_) => None,
        }
    }
}

/// The two accepted sitemap layouts.
#[derive(Debug, Clone, PartialEq)]
pub enum SitemapShape {
    /// `{"data": [...]}`.
    Wrapped(Vec<SlugEntry>),
    /// `[...]`.
    Bare(Vec<SlugEntry>),
}

impl SitemapShape {
    /// Match raw sitemap text against the wrapped layout, then the bare one.
    ///
    /// # Errors
    ///
    /// Returns [`StoryError::MalformedInput`] if the text is not JSON or
    /// matches neither layout.
    pub fn parse(raw: &str) -> Result<Self, StoryError> {
        let value: Value = serde_json::from_str(raw)?;

        if let Some(data) = value.as_object().and_then(|obj| obj.get("data"))
            && let Ok(entries) = Vec::<SlugEntry>::deserialize(data)
        {
            return Ok(Self::Wrapped(entries));
        }

        Ok(Self::Bare(Vec::<SlugEntry>::deserialize(value)?))
    }

    /// Entries in document order.
    pub fn entries(&self) -> &[SlugEntry] {
        match self {
            Self::Wrapped(entries) | Self::Bare(entries) => entries,
        }
    }
}

/// Extract page slugs from raw sitemap JSON, in document order.
///
/// # Errors
///
/// Returns [`StoryError::MalformedInput`] if the text is neither a JSON
/// array nor an object with an array `data` field.
pub fn extract_slugs(raw: &str) -> Result<Vec<String>, StoryError> {
    let shape = SitemapShape::parse(raw)?;
    Ok(shape.entries().iter().filter_map(SlugEntry::slug).collect())
}

/// Join slugs into a newline-separated listing.
pub fn slug_listing(slugs: &[String]) -> String {
    slugs.join("\n")
}

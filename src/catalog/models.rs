//! Catalog Domain Models
//!
//! This module contains the data structures exchanged by the catalog routes.

use crate::access::schema::{ATTR_CATEGORY, CATEGORY_INDEX};
use serde::{Deserialize, Serialize};

// =============================================================================
// Catalog Domain Models
// =============================================================================

/// A product as shown to the frontend
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CatalogItem {
    /// Unique item identifier (primary key)
    pub item_id: String,

    /// Display name
    pub name: String,

    /// Free-form description
    pub description: String,

    /// Price in minor currency units
    pub price: u64,

    /// Category, also queryable through its secondary index
    pub category: String,

    /// Opaque URI of the thumbnail image
    pub thumb_image_uri: String,

    /// Opaque URI of the full-size image
    pub profile_image_uri: String,
}

/// Response envelope for item listings
#[derive(Debug, Serialize)]
pub struct ItemsResponse {
    pub items: Vec<CatalogItem>,
}

/// Query string accepted by `GET /items`
#[derive(Debug, Default, Deserialize)]
pub struct ItemsQuery {
    /// Name of the attribute to filter on
    pub filter: Option<String>,

    /// Value the attribute must equal
    pub value: Option<String>,
}

impl ItemsQuery {
    /// Returns `(filter, value)` only when both are present.
    pub fn filter_pair(&self) -> Option<(&str, &str)> {
        match (&self.filter, &self.value) {
            (Some(f), Some(v)) => Some((f.as_str(), v.as_str())),
            _ => None,
        }
    }
}

// =============================================================================
// Filterable attributes
// =============================================================================

/// Catalog attributes that may be used as a `GET /items` filter.
///
/// Each variant owns its secondary index, so callers can never pick an
/// arbitrary index by name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterAttribute {
    Category,
}

impl FilterAttribute {
    /// Parses a filter name, ignoring ASCII case (`category`, `Category`).
    pub fn parse(name: &str) -> Option<Self> {
        if name.eq_ignore_ascii_case(ATTR_CATEGORY) {
            Some(Self::Category)
        } else {
            None
        }
    }

    /// Attribute name as held in storage
    pub const fn storage_attribute(&self) -> &'static str {
        match self {
            Self::Category => ATTR_CATEGORY,
        }
    }

    /// Secondary index resolving this attribute
    pub const fn index_name(&self) -> &'static str {
        match self {
            Self::Category => CATEGORY_INDEX,
        }
    }
}

//! CMS content items.

use std::collections::HashMap;
use std::ops::Index;

use serde::{Deserialize, Serialize};

/// A content item: a named container of text fields.
///
/// Field access by key never fails. A field the item does not define reads
/// as the empty string, matching how the CMS reports unset fields.
///
/// ```
/// use reference_storefront_core::ContentItem;
///
/// let item = ContentItem::new("no-datasource").with_field("Text", "Pick a data source");
/// assert_eq!(&item["Text"], "Pick a data source");
/// assert_eq!(&item["Title"], "");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContentItem {
    /// Item identifier (path or ID).
    pub id: String,
    /// Item name.
    pub name: String,
    /// Text fields keyed by field name.
    pub fields: HashMap<String, String>,
}

impl ContentItem {
    /// Create an item with no fields.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        let id = id.into();
        Self {
            name: id.rsplit('/').next().unwrap_or_default().to_string(),
            id,
            fields: HashMap::new(),
        }
    }

    /// Set a field, returning the item.
    #[must_use]
    pub fn with_field(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.fields.insert(name.into(), value.into());
        self
    }

    /// Get a field value, or the empty string when the field is missing.
    #[must_use]
    pub fn field(&self, name: &str) -> &str {
        self.fields.get(name).map_or("", String::as_str)
    }
}

impl Index<&str> for ContentItem {
    type Output = str;

    fn index(&self, name: &str) -> &Self::Output {
        self.field(name)
    }
}

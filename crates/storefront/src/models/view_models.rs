//! View models built from content items rather than service results.

use askama::Template;
use askama_web::WebTemplate;
use reference_storefront_core::ContentItem;
use serde::Serialize;

use super::mapping::MappingError;

/// Content item field holding the placeholder text.
pub const TEXT_FIELD: &str = "Text";

/// Placeholder shown by a component that has no data source configured.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Template, WebTemplate)]
#[serde(rename_all = "PascalCase")]
#[template(path = "components/no_datasource.html")]
pub struct NoDataSourceViewModel {
    message: String,
}

impl NoDataSourceViewModel {
    /// Build from the "no data source" content item.
    ///
    /// An item without a `Text` field yields an empty message.
    #[must_use]
    pub fn new(item: &ContentItem) -> Self {
        Self {
            message: item[TEXT_FIELD].to_string(),
        }
    }

    /// Build from a content item that may be missing.
    ///
    /// # Errors
    ///
    /// Returns [`MappingError::ArgumentNull`] when `item` is `None`.
    pub fn try_new(item: Option<&ContentItem>) -> Result<Self, MappingError> {
        item.map(Self::new).ok_or(MappingError::ArgumentNull {
            argument: "noDataSourceItem",
        })
    }

    /// The placeholder message.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_reads_text_field() {
        let item = ContentItem::new("no-datasource")
            .with_field(TEXT_FIELD, "This component has no data source.");
        let model = NoDataSourceViewModel::new(&item);
        assert_eq!(model.message(), "This component has no data source.");
    }

    #[test]
    fn test_missing_text_field_is_empty() {
        let model = NoDataSourceViewModel::new(&ContentItem::new("no-datasource"));
        assert_eq!(model.message(), "");
    }

    #[test]
    fn test_missing_item_is_argument_null() {
        assert_eq!(
            NoDataSourceViewModel::try_new(None),
            Err(MappingError::ArgumentNull {
                argument: "noDataSourceItem"
            })
        );
    }

    #[test]
    fn test_render_escapes_message() {
        let item = ContentItem::new("no-datasource").with_field(TEXT_FIELD, "<b>Pick one</b>");
        let html = NoDataSourceViewModel::new(&item).render().unwrap();
        assert!(html.contains("Pick one"));
        assert!(!html.contains("<b>"));
    }

    #[test]
    fn test_serialize_wire_keys() {
        let item = ContentItem::new("no-datasource").with_field(TEXT_FIELD, "Nothing here");
        let value = serde_json::to_value(NoDataSourceViewModel::new(&item)).unwrap();
        assert_eq!(value, serde_json::json!({"Message": "Nothing here"}));
    }
}

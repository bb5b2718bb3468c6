use crate::domain::model::{LinkSpec, SlideItem};
use crate::domain::ports::ContentNode;

pub const PN_FILE_REFERENCE: &str = "fileReference";
pub const PN_TITLE: &str = "title";
pub const PN_BUTTON_NAME: &str = "buttonName";

/// Builds a slide from a multifield item node. Every property is optional,
/// so an authored item always adapts and keeps its position.
pub fn adapt(node: &dyn ContentNode) -> Option<SlideItem> {
    let link = LinkSpec::from_node(node);

    Some(SlideItem {
        file_reference: node.get(PN_FILE_REFERENCE),
        title: node.get(PN_TITLE),
        button_name: node.get(PN_BUTTON_NAME),
        internal_link: link.internal_link(),
        external_link: link.external_link(),
        link: link.resolve(),
        is_internal: link.is_internal(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::JsonContentStore;
    use crate::domain::ports::ContentStore;
    use serde_json::json;

    fn store() -> JsonContentStore {
        JsonContentStore::from_value(
            "/slides",
            json!({
                "item0": {
                    "fileReference": "/content/dam/banner.jpg",
                    "title": "Now showing",
                    "buttonName": "Buy",
                    "internalLink": "/content/cinema/en/tickets",
                    "externalLink": "tickets.example.com"
                },
                "item1": { "title": "External", "externalLink": "example.com" },
                "item2": { "jcr:primaryType": "nt:unstructured" }
            }),
        )
        .unwrap()
    }

    #[test]
    fn test_adapt_slide_with_both_links() {
        let store = store();
        let slide = adapt(store.resolve("/slides/item0").unwrap()).unwrap();
        assert_eq!(slide.file_reference.as_deref(), Some("/content/dam/banner.jpg"));
        assert_eq!(slide.link.as_deref(), Some("/content/cinema/en/tickets.html"));
        assert_eq!(
            slide.external_link.as_deref(),
            Some("http://tickets.example.com")
        );
        assert!(slide.is_internal);
    }

    #[test]
    fn test_adapt_slide_external_only() {
        let store = store();
        let slide = adapt(store.resolve("/slides/item1").unwrap()).unwrap();
        assert_eq!(slide.link.as_deref(), Some("http://example.com"));
        assert_eq!(slide.internal_link, None);
        assert_eq!(slide.file_reference, None);
        assert!(!slide.is_internal);
    }

    #[test]
    fn test_empty_item_still_adapts() {
        let store = store();
        let slide = adapt(store.resolve("/slides/item2").unwrap()).unwrap();
        assert_eq!(slide, SlideItem::default());
        assert_eq!(
            serde_json::to_value(&slide).unwrap(),
            json!({ "isInternal": false })
        );
    }

    #[test]
    fn test_slide_json_keys() {
        let store = store();
        let slide = adapt(store.resolve("/slides/item1").unwrap()).unwrap();
        assert_eq!(
            serde_json::to_value(&slide).unwrap(),
            json!({
                "title": "External",
                "externalLink": "http://example.com",
                "link": "http://example.com",
                "isInternal": false
            })
        );
    }
}

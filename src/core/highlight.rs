use crate::core::slide::{PN_BUTTON_NAME, PN_FILE_REFERENCE, PN_TITLE};
use crate::domain::model::{HighlightViewModel, LinkSpec};
use crate::domain::ports::ContentNode;

pub const RESOURCE_TYPE: &str = "aem-cinema-react/components/highlight";

pub const PN_ALIGNMENT: &str = "alignment";
pub const PN_DESCRIPTION: &str = "description";

pub fn build_highlight(node: &dyn ContentNode) -> HighlightViewModel {
    let link = LinkSpec::from_node(node);

    HighlightViewModel {
        file_reference: node.get(PN_FILE_REFERENCE),
        alignment: node.get(PN_ALIGNMENT),
        title: node.get(PN_TITLE),
        description: node.get(PN_DESCRIPTION),
        button_name: node.get(PN_BUTTON_NAME),
        internal_link: link.internal_link(),
        external_link: link.external_link(),
        link: link.resolve(),
        exported_type: RESOURCE_TYPE,
    }
}

//! Link normalization shared by every component that carries an authored
//! internal/external link pair.

use crate::domain::model::LinkSpec;
use crate::domain::ports::ContentNode;

pub const PAGE_EXTENSION: &str = ".html";
pub const DEFAULT_SCHEME: &str = "http://";

pub const PN_INTERNAL_LINK: &str = "internalLink";
pub const PN_EXTERNAL_LINK: &str = "externalLink";

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

/// Internal page path with the page extension appended when missing.
pub fn format_internal(target: Option<&str>) -> Option<String> {
    non_empty(target).map(|target| {
        if target.ends_with(PAGE_EXTENSION) {
            target.to_string()
        } else {
            format!("{}{}", target, PAGE_EXTENSION)
        }
    })
}

/// External address with `http://` prepended when it has no http(s) scheme.
pub fn format_external(target: Option<&str>) -> Option<String> {
    non_empty(target).map(|target| {
        if target.starts_with("http://") || target.starts_with("https://") {
            target.to_string()
        } else {
            format!("{}{}", DEFAULT_SCHEME, target)
        }
    })
}

impl LinkSpec {
    pub fn new(internal_target: Option<&str>, external_target: Option<&str>) -> Self {
        Self {
            internal_target: internal_target.map(str::to_string),
            external_target: external_target.map(str::to_string),
        }
    }

    /// Reads `internalLink` / `externalLink` from an item node.
    pub fn from_node(node: &dyn ContentNode) -> Self {
        Self {
            internal_target: node.get(PN_INTERNAL_LINK),
            external_target: node.get(PN_EXTERNAL_LINK),
        }
    }

    pub fn is_internal(&self) -> bool {
        non_empty(self.internal_target.as_deref()).is_some()
    }

    pub fn internal_link(&self) -> Option<String> {
        format_internal(self.internal_target.as_deref())
    }

    pub fn external_link(&self) -> Option<String> {
        format_external(self.external_target.as_deref())
    }

    /// The one link to render. A non-empty internal target always wins,
    /// even when the external one is also set.
    pub fn resolve(&self) -> Option<String> {
        if self.is_internal() {
            self.internal_link()
        } else {
            self.external_link()
        }
    }
}

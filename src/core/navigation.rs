//! Menu visibility for the child pages of a navigation root.

use crate::domain::model::{NavPageView, NavbarViewModel};
use crate::domain::ports::{ContentNode, ContentStore};
use chrono::{DateTime, Utc};

pub const RESOURCE_TYPE: &str = "aem-cinema-react/components/customnavbar";

pub const JCR_CONTENT: &str = "jcr:content";
pub const PN_PRIMARY_TYPE: &str = "jcr:primaryType";
pub const NT_PAGE: &str = "cq:Page";
pub const PN_HIDE_IN_NAV: &str = "cq:hideInNav";
pub const PN_ON_TIME: &str = "onTime";
pub const PN_OFF_TIME: &str = "offTime";
pub const PN_PAGE_TITLE: &str = "jcr:title";

pub const PN_URL: &str = "url";
pub const PN_TOPAZ_PLUS_URL: &str = "topazPlusUrl";
pub const PN_ACCESSIBILITY_URL: &str = "accessibilityUrl";
pub const PN_FAQ_URL: &str = "faqUrl";

/// A page is listed when it has content, is not flagged hidden and `now`
/// falls inside its on/off window. Both window bounds are inclusive.
pub fn is_visible_in_nav(page: Option<&dyn ContentNode>, now: DateTime<Utc>) -> bool {
    let Some(content) = page.and_then(|page| page.child(JCR_CONTENT)) else {
        return false;
    };

    if content.get::<bool>(PN_HIDE_IN_NAV).unwrap_or(false) {
        return false;
    }

    if let Some(on_time) = content.get::<DateTime<Utc>>(PN_ON_TIME) {
        if now < on_time {
            return false;
        }
    }

    if let Some(off_time) = content.get::<DateTime<Utc>>(PN_OFF_TIME) {
        if now > off_time {
            return false;
        }
    }

    true
}

/// Untyped nodes count as pages; anything typed must be a `cq:Page`.
pub fn is_page(node: &dyn ContentNode) -> bool {
    node.name() != JCR_CONTENT
        && node
            .get::<String>(PN_PRIMARY_TYPE)
            .map_or(true, |primary_type| primary_type == NT_PAGE)
}

/// Child pages of `root` that belong in the menu, in repository order.
pub fn visible_children<'n>(
    root: &'n dyn ContentNode,
    now: DateTime<Utc>,
) -> Vec<&'n dyn ContentNode> {
    root.children()
        .into_iter()
        .filter(|child| is_page(*child))
        .filter(|child| is_visible_in_nav(Some(*child), now))
        .collect()
}

pub fn page_view(page: &dyn ContentNode) -> NavPageView {
    let title = page
        .child(JCR_CONTENT)
        .and_then(|content| content.get::<String>(PN_PAGE_TITLE))
        .filter(|title| !title.is_empty())
        .unwrap_or_else(|| page.name().to_string());

    NavPageView {
        path: page.path().to_string(),
        name: page.name().to_string(),
        title,
    }
}

/// Menu entries under the page at `url`. An unset url, a missing store or
/// an unknown path all give an empty menu.
pub fn navbar_pages(
    store: Option<&dyn ContentStore>,
    url: Option<&str>,
    now: DateTime<Utc>,
) -> Vec<NavPageView> {
    let Some(url) = url.filter(|u| !u.is_empty()) else {
        return Vec::new();
    };

    let Some(store) = store else {
        tracing::warn!("No content store available to resolve navigation root {}", url);
        return Vec::new();
    };

    let Some(root) = store.resolve(url) else {
        tracing::warn!("Navigation root page not found: {}", url);
        return Vec::new();
    };

    let pages: Vec<NavPageView> = visible_children(root, now)
        .into_iter()
        .map(page_view)
        .collect();

    tracing::debug!("{} navigation pages visible under {}", pages.len(), url);
    pages
}

pub fn build_navbar(
    store: Option<&dyn ContentStore>,
    node: &dyn ContentNode,
    now: DateTime<Utc>,
) -> NavbarViewModel {
    let url: Option<String> = node.get(PN_URL);
    let navbar_pages = navbar_pages(store, url.as_deref(), now);

    NavbarViewModel {
        url,
        navbar_pages,
        topaz_plus_url: node.get(PN_TOPAZ_PLUS_URL),
        accessibility_url: node.get(PN_ACCESSIBILITY_URL),
        faq_url: node.get(PN_FAQ_URL),
        exported_type: RESOURCE_TYPE,
    }
}

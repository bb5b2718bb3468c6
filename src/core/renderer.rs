use crate::core::{carousel, highlight, navigation};
use crate::domain::model::{CarouselViewModel, HighlightViewModel, NavbarViewModel};
use crate::domain::ports::{ContentNode, ContentStore};
use crate::utils::error::{ContentError, Result};
use chrono::{DateTime, Utc};
use serde::Serialize;

pub const PN_RESOURCE_TYPE: &str = "sling:resourceType";

/// Per-request inputs that are not content: the instant visibility windows
/// are evaluated against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderContext {
    pub now: DateTime<Utc>,
}

impl RenderContext {
    pub fn at(now: DateTime<Utc>) -> Self {
        Self { now }
    }
}

pub trait ComponentModel: Serialize + Sized {
    const RESOURCE_TYPE: &'static str;

    fn build(store: &dyn ContentStore, node: &dyn ContentNode, ctx: &RenderContext) -> Self;
}

impl ComponentModel for CarouselViewModel {
    const RESOURCE_TYPE: &'static str = carousel::RESOURCE_TYPE;

    fn build(store: &dyn ContentStore, node: &dyn ContentNode, _ctx: &RenderContext) -> Self {
        carousel::build_carousel(store, node)
    }
}

impl ComponentModel for NavbarViewModel {
    const RESOURCE_TYPE: &'static str = navigation::RESOURCE_TYPE;

    fn build(store: &dyn ContentStore, node: &dyn ContentNode, ctx: &RenderContext) -> Self {
        navigation::build_navbar(Some(store), node, ctx.now)
    }
}

impl ComponentModel for HighlightViewModel {
    const RESOURCE_TYPE: &'static str = highlight::RESOURCE_TYPE;

    fn build(_store: &dyn ContentStore, node: &dyn ContentNode, _ctx: &RenderContext) -> Self {
        highlight::build_highlight(node)
    }
}

pub struct ComponentRenderer<'s> {
    store: &'s dyn ContentStore,
    context: RenderContext,
}

impl<'s> ComponentRenderer<'s> {
    pub fn new(store: &'s dyn ContentStore, context: RenderContext) -> Self {
        Self { store, context }
    }

    /// Renders the component at `path` by its `sling:resourceType`.
    pub fn render(&self, path: &str) -> Result<serde_json::Value> {
        let node = self
            .store
            .resolve(path)
            .ok_or_else(|| ContentError::ComponentNotFound {
                path: path.to_string(),
            })?;

        let resource_type: String = node.get(PN_RESOURCE_TYPE).unwrap_or_default();
        tracing::debug!("Rendering {} as {}", path, resource_type);

        match resource_type.trim_start_matches("/apps/") {
            carousel::RESOURCE_TYPE => self.render_as::<CarouselViewModel>(node),
            navigation::RESOURCE_TYPE => self.render_as::<NavbarViewModel>(node),
            highlight::RESOURCE_TYPE => self.render_as::<HighlightViewModel>(node),
            _ => Err(ContentError::UnsupportedResourceType {
                path: path.to_string(),
                resource_type: resource_type.clone(),
            }),
        }
    }

    pub fn render_as<M: ComponentModel>(&self, node: &dyn ContentNode) -> Result<serde_json::Value> {
        let model = M::build(self.store, node, &self.context);
        Ok(serde_json::to_value(model)?)
    }
}

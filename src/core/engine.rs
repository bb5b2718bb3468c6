use crate::adapters::JsonContentStore;
use crate::core::renderer::{ComponentRenderer, RenderContext};
use crate::core::{ConfigProvider, Storage};
use crate::utils::error::Result;
use chrono::Utc;

/// Loads the content export named by the config and renders every
/// configured component to storage.
pub struct RenderEngine<S: Storage, C: ConfigProvider> {
    storage: S,
    config: C,
}

impl<S: Storage, C: ConfigProvider> RenderEngine<S, C> {
    pub fn new(storage: S, config: C) -> Self {
        Self { storage, config }
    }

    pub fn run(&self) -> Result<Vec<String>> {
        tracing::info!("Starting render");

        let store =
            JsonContentStore::from_file(self.config.mount_path(), self.config.content_file())?;

        let now = self.config.evaluation_time().unwrap_or_else(Utc::now);
        tracing::debug!("Evaluating visibility at {}", now.to_rfc3339());
        let renderer = ComponentRenderer::new(&store, RenderContext::at(now));

        // Nothing is written unless every component renders.
        let rendered = self
            .config
            .component_paths()
            .iter()
            .map(|path| {
                let json = renderer.render(path)?;
                Ok((path, serde_json::to_vec_pretty(&json)?))
            })
            .collect::<Result<Vec<_>>>()?;

        let mut outputs = Vec::with_capacity(rendered.len());
        for (path, data) in rendered {
            let output = self.storage.write_file(&output_file_name(path), &data)?;
            tracing::info!("Rendered {} -> {}", path, output);
            outputs.push(output);
        }

        tracing::info!("Rendered {} components", outputs.len());
        Ok(outputs)
    }
}

/// `/content/site/jcr:content/root/nav` -> `content_site_jcr_content_root_nav.model.json`
pub fn output_file_name(component_path: &str) -> String {
    let stem: String = component_path
        .trim_matches('/')
        .chars()
        .map(|c| if c == '/' || c == ':' { '_' } else { c })
        .collect();
    format!("{}.model.json", stem)
}

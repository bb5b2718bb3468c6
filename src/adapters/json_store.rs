//! Content store backed by a JCR-style JSON export.
//!
//! Objects become child nodes, scalars and arrays become properties and
//! `null` values are dropped. The whole tree is mounted at a repository path,
//! so an export of `/content/site` can be addressed with absolute paths.

use crate::domain::model::PropertyValue;
use crate::domain::ports::{ContentNode, ContentStore};
use crate::utils::error::{ContentError, Result};
use serde_json::{Map, Value};
use std::collections::HashMap;
use std::path::Path;

#[derive(Debug, Clone)]
pub struct JsonNode {
    path: String,
    properties: HashMap<String, PropertyValue>,
    children: Vec<JsonNode>,
}

impl JsonNode {
    fn from_map(path: String, map: Map<String, Value>) -> Self {
        let mut properties = HashMap::new();
        let mut children = Vec::new();

        for (key, value) in map {
            match value {
                Value::Object(child) => {
                    children.push(JsonNode::from_map(join_path(&path, &key), child));
                }
                Value::Null => {}
                Value::Bool(b) => {
                    properties.insert(key, PropertyValue::Bool(b));
                }
                Value::Number(n) => {
                    let value = match n.as_i64() {
                        Some(long) => PropertyValue::Long(long),
                        None => PropertyValue::Double(n.as_f64().unwrap_or_default()),
                    };
                    properties.insert(key, value);
                }
                Value::String(s) => {
                    properties.insert(key, PropertyValue::String(s));
                }
                Value::Array(items) => {
                    let values = items
                        .into_iter()
                        .filter_map(|item| match item {
                            Value::String(s) => Some(s),
                            Value::Number(n) => Some(n.to_string()),
                            Value::Bool(b) => Some(b.to_string()),
                            _ => None,
                        })
                        .collect();
                    properties.insert(key, PropertyValue::Strings(values));
                }
            }
        }

        Self {
            path,
            properties,
            children,
        }
    }

    fn count(&self) -> usize {
        1 + self.children.iter().map(JsonNode::count).sum::<usize>()
    }

    fn descend(&self, relative_path: &str) -> Option<&JsonNode> {
        relative_path
            .split('/')
            .filter(|segment| !segment.is_empty() && *segment != ".")
            .try_fold(self, |node, segment| {
                node.children.iter().find(|child| child.name() == segment)
            })
    }
}

impl ContentNode for JsonNode {
    fn path(&self) -> &str {
        &self.path
    }

    fn property(&self, name: &str) -> Option<&PropertyValue> {
        self.properties.get(name)
    }

    fn children(&self) -> Vec<&dyn ContentNode> {
        self.children
            .iter()
            .map(|child| child as &dyn ContentNode)
            .collect()
    }

    fn child(&self, relative_path: &str) -> Option<&dyn ContentNode> {
        self.descend(relative_path)
            .map(|node| node as &dyn ContentNode)
    }
}

#[derive(Debug, Clone)]
pub struct JsonContentStore {
    root: JsonNode,
}

impl JsonContentStore {
    pub fn from_value(mount_path: &str, value: Value) -> Result<Self> {
        let map = match value {
            Value::Object(map) => map,
            other => {
                return Err(ContentError::InvalidContentError {
                    message: format!("export root must be a JSON object, got {}", kind(&other)),
                });
            }
        };

        let root = JsonNode::from_map(normalize_mount(mount_path), map);
        tracing::debug!(
            "Loaded content tree at {} ({} nodes)",
            root.path,
            root.count()
        );
        Ok(Self { root })
    }

    pub fn from_json_str(mount_path: &str, content: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(content)?;
        Self::from_value(mount_path, value)
    }

    pub fn from_file<P: AsRef<Path>>(mount_path: &str, path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        tracing::info!("Reading content export from {}", path.as_ref().display());
        Self::from_json_str(mount_path, &content)
    }

    pub fn mount_path(&self) -> &str {
        &self.root.path
    }
}

impl ContentStore for JsonContentStore {
    fn resolve(&self, path: &str) -> Option<&dyn ContentNode> {
        let mount = self.root.path.as_str();
        let relative = if mount == "/" {
            path.strip_prefix('/')?
        } else if path == mount {
            ""
        } else {
            path.strip_prefix(mount)?.strip_prefix('/')?
        };

        self.root
            .descend(relative)
            .map(|node| node as &dyn ContentNode)
    }
}

fn normalize_mount(mount_path: &str) -> String {
    let trimmed = mount_path.trim_end_matches('/');
    if trimmed.is_empty() {
        "/".to_string()
    } else if trimmed.starts_with('/') {
        trimmed.to_string()
    } else {
        format!("/{}", trimmed)
    }
}

fn join_path(parent: &str, name: &str) -> String {
    if parent == "/" {
        format!("/{}", name)
    } else {
        format!("{}/{}", parent, name)
    }
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

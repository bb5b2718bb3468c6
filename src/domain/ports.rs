use crate::domain::model::PropertyValue;
use crate::utils::error::Result;
use chrono::{DateTime, Utc};

/// Read-only view of one node in the content repository.
pub trait ContentNode {
    /// Absolute repository path, e.g. `/content/site/en/home`.
    fn path(&self) -> &str;

    fn name(&self) -> &str {
        self.path().rsplit('/').next().unwrap_or_default()
    }

    fn property(&self, name: &str) -> Option<&PropertyValue>;

    /// Direct children in repository order.
    fn children(&self) -> Vec<&dyn ContentNode>;

    /// Descendant addressed by a relative path such as `jcr:content/data`.
    fn child(&self, relative_path: &str) -> Option<&dyn ContentNode>;
}

impl<'a> dyn ContentNode + 'a {
    /// Typed property read; `None` when absent or not convertible.
    pub fn get<T: FromProperty>(&self, name: &str) -> Option<T> {
        self.property(name).and_then(T::from_property)
    }
}

pub trait ContentStore {
    fn resolve(&self, path: &str) -> Option<&dyn ContentNode>;
}

/// Conversion from a stored property to a Rust type, lenient the way
/// repository value maps are (numbers read as strings, "true" reads as a bool).
pub trait FromProperty: Sized {
    fn from_property(value: &PropertyValue) -> Option<Self>;
}

impl FromProperty for String {
    fn from_property(value: &PropertyValue) -> Option<Self> {
        match value {
            PropertyValue::String(s) => Some(s.clone()),
            PropertyValue::Bool(b) => Some(b.to_string()),
            PropertyValue::Long(n) => Some(n.to_string()),
            PropertyValue::Double(n) => Some(n.to_string()),
            PropertyValue::Date(dt) => Some(dt.to_rfc3339()),
            PropertyValue::Strings(values) => values.first().cloned(),
        }
    }
}

impl FromProperty for bool {
    fn from_property(value: &PropertyValue) -> Option<Self> {
        match value {
            PropertyValue::Bool(b) => Some(*b),
            PropertyValue::String(s) => s.parse().ok(),
            _ => None,
        }
    }
}

impl FromProperty for i64 {
    fn from_property(value: &PropertyValue) -> Option<Self> {
        match value {
            PropertyValue::Long(n) => Some(*n),
            PropertyValue::String(s) => s.parse().ok(),
            _ => None,
        }
    }
}

impl FromProperty for DateTime<Utc> {
    fn from_property(value: &PropertyValue) -> Option<Self> {
        match value {
            PropertyValue::Date(dt) => Some(*dt),
            PropertyValue::String(s) => DateTime::parse_from_rfc3339(s)
                .ok()
                .map(|dt| dt.with_timezone(&Utc)),
            _ => None,
        }
    }
}

impl FromProperty for Vec<String> {
    fn from_property(value: &PropertyValue) -> Option<Self> {
        match value {
            PropertyValue::Strings(values) => Some(values.clone()),
            PropertyValue::String(s) => Some(vec![s.clone()]),
            _ => None,
        }
    }
}

/// Destination for rendered component JSON.
pub trait Storage {
    fn write_file(&self, path: &str, data: &[u8]) -> Result<String>;
}

pub trait ConfigProvider {
    fn content_file(&self) -> &str;
    fn mount_path(&self) -> &str;
    fn component_paths(&self) -> &[String];
    /// `None` writes to stdout.
    fn output_path(&self) -> Option<&str>;
    fn evaluation_time(&self) -> Option<DateTime<Utc>>;
}

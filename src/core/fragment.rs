//! Field extraction from structured content fragments.
//!
//! Fragment data is authored either under `jcr:content/data` or flattened
//! directly onto `jcr:content`, depending on the template version. Both are
//! accepted without configuration, the nested location taking precedence.

use crate::domain::ports::{ContentNode, ContentStore};
use crate::utils::error::MissingData;
use std::collections::BTreeMap;

pub const DATA_NODE: &str = "jcr:content/data";
pub const CONTENT_NODE: &str = "jcr:content";

pub const MOVIE_FIELDS: [&str; 5] = ["poster", "title", "ageGroup", "gender", "movieTime"];

/// Values read from a fragment, keyed by the requested field name.
/// Every requested field has an entry; unreadable ones are `None`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FragmentFields {
    values: BTreeMap<String, Option<String>>,
}

impl FragmentFields {
    pub fn absent(fields: &[&str]) -> Self {
        Self {
            values: fields.iter().map(|f| (f.to_string(), None)).collect(),
        }
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.values.get(field).and_then(|v| v.as_deref())
    }

    /// Owned copy of a field, for moving into a view model.
    pub fn take(&mut self, field: &str) -> Option<String> {
        self.values.get_mut(field).and_then(Option::take)
    }

    pub fn is_empty(&self) -> bool {
        self.values.values().all(Option::is_none)
    }
}

pub fn locate_data_node<'s>(
    store: &'s dyn ContentStore,
    fragment_path: &str,
) -> Result<&'s dyn ContentNode, MissingData> {
    if fragment_path.is_empty() {
        return Err(MissingData::PathNotSet);
    }

    let fragment = store
        .resolve(fragment_path)
        .ok_or_else(|| MissingData::FragmentNotFound(fragment_path.to_string()))?;

    fragment
        .child(DATA_NODE)
        .or_else(|| fragment.child(CONTENT_NODE))
        .ok_or_else(|| MissingData::DataNodeNotFound(fragment_path.to_string()))
}

/// Reads `fields` by exact name, reporting why nothing could be read.
pub fn try_extract(
    store: &dyn ContentStore,
    fragment_path: Option<&str>,
    fields: &[&str],
) -> Result<FragmentFields, MissingData> {
    let data = locate_data_node(store, fragment_path.unwrap_or_default())?;

    let values = fields
        .iter()
        .map(|field| (field.to_string(), data.get::<String>(field)))
        .collect();

    tracing::debug!("Fragment fields extracted from {}", data.path());
    Ok(FragmentFields { values })
}

/// Like [`try_extract`] but never fails: missing content yields a field set
/// with every entry absent.
pub fn extract(
    store: &dyn ContentStore,
    fragment_path: Option<&str>,
    fields: &[&str],
) -> FragmentFields {
    match try_extract(store, fragment_path, fields) {
        Ok(values) => values,
        Err(missing) => {
            tracing::warn!("Content fragment unavailable: {}", missing);
            FragmentFields::absent(fields)
        }
    }
}

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::collections::BTreeMap;

/// A single stored property value.
#[derive(Debug, Clone, PartialEq)]
pub enum PropertyValue {
    String(String),
    Bool(bool),
    Long(i64),
    Double(f64),
    Date(DateTime<Utc>),
    Strings(Vec<String>),
}

impl From<&str> for PropertyValue {
    fn from(value: &str) -> Self {
        PropertyValue::String(value.to_string())
    }
}

impl From<String> for PropertyValue {
    fn from(value: String) -> Self {
        PropertyValue::String(value)
    }
}

impl From<bool> for PropertyValue {
    fn from(value: bool) -> Self {
        PropertyValue::Bool(value)
    }
}

impl From<DateTime<Utc>> for PropertyValue {
    fn from(value: DateTime<Utc>) -> Self {
        PropertyValue::Date(value)
    }
}

/// Authored link pair: an internal page path and/or an external address.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LinkSpec {
    pub internal_target: Option<String>,
    pub external_target: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SlideItem {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_reference: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub button_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub internal_link: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub external_link: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
    pub is_internal: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MovieItem {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub poster: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub age_group: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gender: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub movie_time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fragment_path: Option<String>,
}

impl MovieItem {
    /// True when none of the fragment fields could be read.
    pub fn is_incomplete(&self) -> bool {
        self.poster.is_none()
            && self.title.is_none()
            && self.age_group.is_none()
            && self.gender.is_none()
            && self.movie_time.is_none()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HighlightViewModel {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_reference: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alignment: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub button_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub internal_link: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub external_link: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
    #[serde(rename = ":type")]
    pub exported_type: &'static str,
}

/// A page entry of a navigation menu.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NavPageView {
    pub path: String,
    pub name: String,
    pub title: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NavbarViewModel {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    pub navbar_pages: Vec<NavPageView>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub topaz_plus_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub accessibility_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub faq_url: Option<String>,
    #[serde(rename = ":type")]
    pub exported_type: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DataLayerEntry {
    #[serde(rename = "@type")]
    pub resource_type: String,
    pub id: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CarouselViewModel {
    pub id: String,
    pub slides: Vec<SlideItem>,
    pub movies: Vec<MovieItem>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content_type: Option<String>,
    pub data_layer: BTreeMap<String, DataLayerEntry>,
    #[serde(rename = ":type")]
    pub exported_type: &'static str,
}

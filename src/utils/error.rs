use thiserror::Error;

#[derive(Error, Debug)]
pub enum ContentError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error in {field}: {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value for {field} ({value}): {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },

    #[error("Invalid content export: {message}")]
    InvalidContentError { message: String },

    #[error("Component not found at path: {path}")]
    ComponentNotFound { path: String },

    #[error("Unsupported resource type '{resource_type}' at {path}")]
    UnsupportedResourceType { path: String, resource_type: String },
}

impl ContentError {
    pub fn user_friendly_message(&self) -> String {
        match self {
            ContentError::IoError(e) => format!("Could not read or write a file: {}", e),
            ContentError::SerializationError(e) => format!("Content is not valid JSON: {}", e),
            ContentError::ConfigValidationError { field, message } => {
                format!("Configuration problem in '{}': {}", field, message)
            }
            ContentError::InvalidConfigValueError { field, reason, .. } => {
                format!("Configuration value '{}' is invalid: {}", field, reason)
            }
            ContentError::MissingConfigError { field } => {
                format!("Configuration value '{}' is required", field)
            }
            ContentError::InvalidContentError { message } => {
                format!("The content export cannot be loaded: {}", message)
            }
            ContentError::ComponentNotFound { path } => {
                format!("No component exists at '{}'", path)
            }
            ContentError::UnsupportedResourceType { resource_type, .. } => {
                format!("Components of type '{}' cannot be rendered", resource_type)
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, ContentError>;

/// Why a referenced piece of content could not be read.
///
/// Models never return this to their callers; it is collapsed into an absent
/// field or an empty list and only kept for diagnostics.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MissingData {
    #[error("fragment path is not set")]
    PathNotSet,

    #[error("fragment resource not found at {0}")]
    FragmentNotFound(String),

    #[error("fragment data node (jcr:content/data or jcr:content) not found under {0}")]
    DataNodeNotFound(String),
}

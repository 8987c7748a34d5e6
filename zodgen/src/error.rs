//! Error types for the generator.

use thiserror::Error;

use crate::model::TypeKind;

/// Result type alias for generation operations.
pub type GenerateResult<T> = Result<T, GenerateError>;

/// Error raised while turning a dynamically loaded definition into code.
///
/// Typed [`Type`](crate::model::Type) graphs cannot carry an unknown kind,
/// so these only surface at the JSON boundary.
#[derive(Debug, Error)]
pub enum GenerateError {
    /// The `type` tag is not one of the known kinds.
    #[error("Unknown type kind: {tag}")]
    UnknownKind { tag: String },

    /// The definition has no string `type` tag.
    #[error("Type definition is missing its 'type' tag{}", format_path(.path))]
    MissingKind { path: String },

    /// The tag is known but the attributes do not decode.
    #[error("Malformed '{kind}' definition: {source}")]
    Malformed {
        kind: TypeKind,
        #[source]
        source: serde_json::Error,
    },

    /// The input is not JSON at all.
    #[error("Invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
}

impl GenerateError {
    /// Create an unknown kind error.
    pub fn unknown_kind(tag: impl Into<String>) -> Self {
        Self::UnknownKind { tag: tag.into() }
    }

    /// The offending tag, if this is an unknown kind error.
    pub fn unknown_tag(&self) -> Option<&str> {
        match self {
            Self::UnknownKind { tag } => Some(tag),
            _ => None,
        }
    }
}

fn format_path(path: &str) -> String {
    if path.is_empty() {
        String::new()
    } else {
        format!(" at {}", path)
    }
}

//! Error types for the scrolly compiler.

use std::io;
use thiserror::Error;

/// Result type alias for scrolly operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while parsing, compiling, or storing an article.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error when reading or writing files.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The payload is not valid JSON or does not match the wire format.
    #[error("Invalid article payload: {0}")]
    Json(#[from] serde_json::Error),

    /// A field is present but violates the schema.
    #[error("Schema error at {path}: {message}")]
    Schema {
        /// Location of the offending field (e.g. `pages[0].frames[1].components[2]`)
        path: String,
        /// What is wrong with it
        message: String,
    },

    /// A component sits in a slot the page template does not have.
    #[error("Component {component_id}: position '{position}' is not valid for layout template '{template}'")]
    InvalidPosition {
        /// Offending component id
        component_id: String,
        /// Declared position
        position: String,
        /// Page layout template
        template: String,
    },

    /// The component asks for an animation behavior that does not exist.
    #[error("Component {component_id}: unknown transition '{name}'")]
    UnknownTransition {
        /// Offending component id
        component_id: String,
        /// Requested transition name
        name: String,
    },

    /// A staged file with the same name already exists for the article.
    #[error("An image named '{0}' already exists for this article, upload it with a different name")]
    AlreadyExists(String),

    /// The artifact sink or image stager failed.
    #[error("Storage error: {0}")]
    Storage(String),

    /// Error while rendering an artifact.
    #[error("Rendering error: {0}")]
    Render(String),

    /// Generic error with message.
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Build a schema error for the given field path.
    pub fn schema(path: impl Into<String>, message: impl Into<String>) -> Self {
        Error::Schema {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Whether this error was caused by the input document rather than I/O.
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            Error::Json(_)
                | Error::Schema { .. }
                | Error::InvalidPosition { .. }
                | Error::UnknownTransition { .. }
        )
    }

    /// Id of the component this error is about, if any.
    pub fn component_id(&self) -> Option<&str> {
        match self {
            Error::InvalidPosition { component_id, .. }
            | Error::UnknownTransition { component_id, .. } => Some(component_id),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::UnknownTransition {
            component_id: "001-1-1".to_string(),
            name: "spin".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Component 001-1-1: unknown transition 'spin'"
        );

        let err = Error::schema("pages[0].layout.widthLeft", "not a CSS length");
        assert_eq!(
            err.to_string(),
            "Schema error at pages[0].layout.widthLeft: not a CSS length"
        );
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "file not found");
        let err: Error = io_err.into();
        assert!(matches!(err, Error::Io(_)));
        assert!(!err.is_input_error());
    }

    #[test]
    fn test_component_id_accessor() {
        let err = Error::InvalidPosition {
            component_id: "p-f-c".to_string(),
            position: "bottom".to_string(),
            template: "left-right".to_string(),
        };
        assert_eq!(err.component_id(), Some("p-f-c"));
        assert!(err.is_input_error());
        assert_eq!(Error::Other("x".into()).component_id(), None);
    }
}

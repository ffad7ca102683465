use thiserror::Error;

/// Errors raised at the edges of the editor: loading exports and reading config.
///
/// Pointer and keyboard handling never fails; these only come from data that
/// enters the editor from outside.
#[derive(Debug, Error)]
pub enum FloorplanError {
    #[error("Failed to parse JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Failed to read file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Wall references unknown corner {0}")]
    UnknownCorner(String),
}

/// Result type for fallible floorplan operations
pub type Result<T> = std::result::Result<T, FloorplanError>;

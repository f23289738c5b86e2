// src/error.rs
use flowkit_style::StyleParseError;
use thiserror::Error;

/// Errors raised while loading or interpreting a scene document.
///
/// Layout itself never fails; only the document boundary can.
#[derive(Error, Debug)]
pub enum SceneError {
    #[error("Scene JSON is invalid: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Flow declarations are invalid: {0}")]
    Style(#[from] StyleParseError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

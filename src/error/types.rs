use thiserror::Error;

/// Unified result type for the slotgrid crate.
pub type Result<T> = std::result::Result<T, FrameError>;

/// Errors surfaced by the frame containers and their style boundary.
///
/// Template resolution itself is total: every presence pattern, including the
/// all-absent one, is a defined case and never produces an error.
#[derive(Debug, Error)]
pub enum FrameError {
    #[error("unrecognized justify-content value `{0}`")]
    JustifyContent(String),
    #[error("unrecognized align-items value `{0}`")]
    AlignItems(String),
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error("serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}

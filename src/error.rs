use thiserror::Error;

#[derive(Error, Debug)]
pub enum JotterError {
    #[error("Not a jotter notebook. Run 'jotter init' first.")]
    NotInitialized,

    #[error("Already initialized. Remove .jotter/ to reinitialize.")]
    AlreadyInitialized,

    #[error("Reordering across pinned and unpinned groups is not supported. Unpin/pin to move between groups.")]
    CrossGroupReorder,

    #[error("Invalid import file: {0}")]
    ImportFormat(String),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, JotterError>;

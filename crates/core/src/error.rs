#[derive(Debug, thiserror::Error)]
pub enum BidsError {
    #[error("invalid input: {0}")]
    InvalidInput(String),
    #[error(transparent)]
    InvalidLabel(#[from] bids_types::LabelError),
    #[error("invalid events: {0}")]
    InvalidEvents(String),
    #[error("failed to create directory {path}: {source}", path = path.display())]
    DirCreation {
        path: std::path::PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to remove directory {path}: {source}", path = path.display())]
    DirRemoval {
        path: std::path::PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to read file: {0}")]
    FileRead(std::io::Error),
    #[error("failed to write file: {0}")]
    FileWrite(std::io::Error),
    #[error("failed to serialize JSON: {0}")]
    Serialization(serde_json::Error),
    #[error(transparent)]
    Files(#[from] bids_files::FilesError),
}

pub type BidsResult<T> = std::result::Result<T, BidsError>;

use std::path::PathBuf;

#[derive(thiserror::Error, Debug)]
pub enum HelperError {
    #[error("backup directory not found: {}", .0.display())]
    DirectoryNotFound(PathBuf),
    #[error("No .{extension} files found in directory: {}", .dir.display())]
    NoBackupsFound { dir: PathBuf, extension: String },
    #[error("backup payload must contain at least 8 bytes (got {len})")]
    PayloadTooShort { len: usize },
    #[error("Invalid DTC format: {0}")]
    InvalidCodeFormat(String),
    #[error("Selection must be a valid integer: {0:?}")]
    InvalidSelection(String),
    #[error("Selection {choice} is out of range (1-{available})")]
    SelectionOutOfRange { choice: String, available: usize },
    #[error("Unknown topic '{topic}'. Available: {available}")]
    UnknownTopic { topic: String, available: String },
    #[error("invalid config file {}: {source}", .path.display())]
    Config {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    #[error("{}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl HelperError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

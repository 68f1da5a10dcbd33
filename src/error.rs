use std::path::PathBuf;

pub type Result<T> = std::result::Result<T, Error>;

/// Failures while reading the medicine catalog or its stop-word list.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("catalog file {path} could not be opened: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("catalog {path} is malformed: {source}")]
    Malformed {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("catalog {path} is missing required column `{column}`")]
    MissingColumn { path: PathBuf, column: &'static str },

    #[error("stop-word list {path} could not be read: {source}")]
    StopWords {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

#[derive(Debug, thiserror::Error)]
pub enum IndexError {
    #[error("empty vocabulary: no terms survive stop-word filtering across {documents} catalog entries")]
    EmptyVocabulary { documents: usize },
}

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Load(#[from] LoadError),

    #[error(transparent)]
    Index(#[from] IndexError),

    #[error("could not bind HTTP server to {addr}: {source}")]
    Bind {
        addr: String,
        #[source]
        source: std::io::Error,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("index build task failed: {0}")]
    Startup(#[from] tokio::task::JoinError),
}

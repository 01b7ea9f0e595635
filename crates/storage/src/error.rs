use std::path::PathBuf;

use snafu::Snafu;

#[derive(Debug, Snafu)]
#[snafu(visibility(pub(crate)))]
pub enum StorageError {
    #[snafu(display("session identifier '{raw}' is not a valid UUID"))]
    InvalidSessionId {
        stage: &'static str,
        raw: String,
        source: uuid::Error,
    },
    #[snafu(display("failed to create state directory at {path:?} on `{stage}`: {source}"))]
    CreateStateDirectory {
        stage: &'static str,
        path: PathBuf,
        source: std::io::Error,
    },
    #[snafu(display("failed to read session file at {path:?} on `{stage}`: {source}"))]
    ReadSessionFile {
        stage: &'static str,
        path: PathBuf,
        source: std::io::Error,
    },
    #[snafu(display("failed to write session file at {path:?} on `{stage}`: {source}"))]
    WriteSessionFile {
        stage: &'static str,
        path: PathBuf,
        source: std::io::Error,
    },
    #[snafu(display(
        "failed to replace session file from {from:?} to {to:?} on `{stage}`: {source}"
    ))]
    ReplaceSessionFile {
        stage: &'static str,
        from: PathBuf,
        to: PathBuf,
        source: std::io::Error,
    },
}

pub type StorageResult<T> = Result<T, StorageError>;

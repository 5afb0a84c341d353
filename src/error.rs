use std::path::PathBuf;

use chrono::NaiveDateTime;

/// Error arising when a configuration cannot be turned into a builder
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigurationError {
    #[error("missing configuration field: {0}")]
    MissingField(&'static str),
    #[error("invalid eventCreationDate: {0}")]
    InvalidCreationDate(#[source] TimestampParseError),
    #[error("unknown timezone: {0}")]
    UnknownTimezone(String),
}

/// Error arising when an event cannot be added to a document
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("missing event field: {0}")]
    MissingField(&'static str),
    #[error("event {uid} was prepared by a calendar with a different configuration")]
    ForeignBlock { uid: String },
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum TimestampParseError {
    #[error("unrecognized date/time: {0:?}")]
    Unrecognized(String),
    #[error("local time {0} does not exist in the configured timezone")]
    NonexistentLocalTime(NaiveDateTime),
}

#[derive(Debug, thiserror::Error)]
pub enum PersistenceError {
    #[error("could not write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("nothing was written to {}", .0.display())]
    EmptyWrite(PathBuf),
    #[error("{} does not exist after writing", .0.display())]
    Missing(PathBuf),
}

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Configuration(#[from] ConfigurationError),
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    Timestamp(#[from] TimestampParseError),
    #[error(transparent)]
    Persistence(#[from] PersistenceError),
}

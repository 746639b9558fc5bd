use std::io;
use thiserror::Error;

/// Reasons a [`FlightFields`](crate::types::flight::FlightFields) draft cannot
/// become a [`FlightRecord`](crate::types::flight::FlightRecord).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RecordError {
    #[error("Field '{field}' is empty")]
    MissingField { field: &'static str },
    #[error("Field '{field}' is not a valid H:MM or HH:MM time: '{value}'")]
    InvalidTime { field: &'static str, value: String },
    #[error("{year:04}-{month:02}-{day:02} is not a calendar date")]
    InvalidDate { year: i32, month: u32, day: u32 },
}

/// Errors produced while loading itinerary text from disk.
#[derive(Debug, Error)]
pub enum InputError {
    #[error("Not a valid .txt file: {path}")]
    InvalidExtension { path: String },
    #[error("File '{path}' is {size} bytes, the limit is {limit} bytes")]
    TooLarge { path: String, size: u64, limit: usize },
    #[error("Failed to open '{path}'. \nError: {source}")]
    OpenFile {
        path: String,
        #[source]
        source: io::Error,
    },
    #[error("Failed while reading '{path}'. \nError: {source}")]
    Read {
        path: String,
        #[source]
        source: io::Error,
    },
}

/// Errors produced while writing a calendar or archive to disk.
#[derive(Debug, Error)]
pub enum SaveError {
    #[error("Output path must end in .{expected}: {path}")]
    InvalidExtension {
        path: String,
        expected: &'static str,
    },
    #[error("Failed to create '{path}'. \nError: {source}")]
    CreateFile {
        path: String,
        #[source]
        source: io::Error,
    },
    #[error("Failed to create directories for '{path}'. \nError: {source}")]
    CreateDirectory {
        path: String,
        #[source]
        source: io::Error,
    },
    #[error("Failed while writing '{path}'. \nError: {source}")]
    Write {
        path: String,
        #[source]
        source: io::Error,
    },
}

/// Errors produced while bundling per-flight calendars into a zip archive.
#[cfg(feature = "archive")]
#[derive(Debug, Error)]
pub enum ArchiveError {
    #[error("Failed to add '{entry}' to the archive. \nError: {source}")]
    Entry {
        entry: String,
        #[source]
        source: zip::result::ZipError,
    },
    #[error("Failed to finish the archive. \nError: {source}")]
    Finish {
        #[source]
        source: zip::result::ZipError,
    },
    #[error("Failed while writing entry '{entry}'. \nError: {source}")]
    EntryWrite {
        entry: String,
        #[source]
        source: io::Error,
    },
    #[error(transparent)]
    Save(#[from] SaveError),
}

//! TSO Grid Export Processor Library
//!
//! A Rust library for converting multi-country TSO static grid model
//! spreadsheet exports into normalized line, transformer and bus tables.
//!
//! This library provides tools for:
//! - Loading two-level-header grid export workbooks into tabular form
//! - Cleaning inconsistent source encodings into typed, unit-consistent records
//! - Deriving the bus set from line endpoints with canonical naming
//! - Resolving bus coordinates through a throttled geocoding provider with
//!   progressive query relaxation
//! - Writing the three normalized tables as row-indexed CSV files

pub mod config;
pub mod constants;

// Core application modules
pub mod app {
    pub mod models;
    pub mod services {
        pub mod bus_builder;
        pub mod csv_export;
        pub mod extract;
        pub mod geocode;
        pub mod pipeline;
        pub mod workbook;
    }
}

// CLI modules
pub mod cli {
    pub mod args;
    pub mod commands;
}

// Re-export commonly used types
pub use app::models::{BusRecord, LineRecord, TransformerRecord};
pub use config::RunConfig;

/// Result type alias for the TSO processor
pub type Result<T> = std::result::Result<T, Error>;

/// Comprehensive error types for grid export processing operations
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// I/O operation failed
    #[error("I/O error: {message}")]
    Io {
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// Workbook could not be opened or read
    #[error("Workbook error in '{path}': {message}")]
    Workbook {
        path: String,
        message: String,
        #[source]
        source: Option<calamine::XlsxError>,
    },

    /// Column selection did not reduce to exactly one source column
    #[error(
        "Schema mismatch in sheet '{sheet}': column '{column}' matched {matches} source column(s), expected exactly one"
    )]
    SchemaMismatch {
        sheet: String,
        column: String,
        matches: usize,
    },

    /// A present source value could not be cleaned into its typed form
    #[error("Malformed value for field '{field}': '{value}' ({message})")]
    MalformedField {
        field: String,
        value: String,
        message: String,
    },

    /// CSV output error
    #[error("CSV writing error for '{path}': {message}")]
    CsvWriting {
        path: String,
        message: String,
        #[source]
        source: Option<csv::Error>,
    },

    /// Geocoding provider transport or protocol error
    #[error("Geocoding error: {message}")]
    Geocoding {
        message: String,
        #[source]
        source: Option<reqwest::Error>,
    },

    /// Configuration error
    #[error("Configuration error: {message}")]
    Configuration { message: String },
}

impl Error {
    /// Create an I/O error with context
    pub fn io(message: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            message: message.into(),
            source,
        }
    }

    /// Create a workbook error with context
    pub fn workbook(
        path: impl Into<String>,
        message: impl Into<String>,
        source: Option<calamine::XlsxError>,
    ) -> Self {
        Self::Workbook {
            path: path.into(),
            message: message.into(),
            source,
        }
    }

    /// Create a schema mismatch error
    pub fn schema_mismatch(
        sheet: impl Into<String>,
        column: impl Into<String>,
        matches: usize,
    ) -> Self {
        Self::SchemaMismatch {
            sheet: sheet.into(),
            column: column.into(),
            matches,
        }
    }

    /// Create a malformed field error
    pub fn malformed_field(
        field: impl Into<String>,
        value: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self::MalformedField {
            field: field.into(),
            value: value.into(),
            message: message.into(),
        }
    }

    /// Create a CSV writing error
    pub fn csv_writing(
        path: impl Into<String>,
        message: impl Into<String>,
        source: Option<csv::Error>,
    ) -> Self {
        Self::CsvWriting {
            path: path.into(),
            message: message.into(),
            source,
        }
    }

    /// Create a geocoding error
    pub fn geocoding(message: impl Into<String>, source: Option<reqwest::Error>) -> Self {
        Self::Geocoding {
            message: message.into(),
            source,
        }
    }

    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }
}

// Automatic conversions from common error types
impl From<std::io::Error> for Error {
    fn from(error: std::io::Error) -> Self {
        Self::Io {
            message: "I/O operation failed".to_string(),
            source: error,
        }
    }
}

impl From<csv::Error> for Error {
    fn from(error: csv::Error) -> Self {
        Self::CsvWriting {
            path: "unknown".to_string(),
            message: "CSV writing failed".to_string(),
            source: Some(error),
        }
    }
}

impl From<reqwest::Error> for Error {
    fn from(error: reqwest::Error) -> Self {
        Self::Geocoding {
            message: "Geocoding request failed".to_string(),
            source: Some(error),
        }
    }
}

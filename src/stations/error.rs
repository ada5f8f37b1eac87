//! Station directory error types.

/// Errors raised while loading the station list.
#[derive(Debug, thiserror::Error)]
pub enum DirectoryError {
    /// The source file could not be opened
    #[error("failed to open station file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// The CSV content could not be read
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

use std::path::PathBuf;

/// Errors from read-path resolution.
#[derive(Debug, thiserror::Error)]
pub enum ReaderError {
    /// The configured storage root is missing or not a directory.
    ///
    /// Raised at construction only. The reader never creates the root.
    #[error("storage root {}: {reason}", .path.display())]
    StorageRoot { path: PathBuf, reason: String },

    /// I/O failure other than not-found while probing the primary object.
    ///
    /// Absence must never be inferred from a failed probe, so this is
    /// surfaced instead of being folded into [`Resolution::Absent`].
    ///
    /// [`Resolution::Absent`]: crate::resolution::Resolution::Absent
    #[error("probe failed for {}: {source}", .path.display())]
    Probe {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Result alias for reader operations.
pub type ReaderResult<T> = Result<T, ReaderError>;

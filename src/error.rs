// Error types returned by the store and the registry. The UI layer turns
// them into messages; none of them ends the program.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Failures while reading or writing the data file.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to read {}: {source}", path.display())]
    Read { path: PathBuf, source: io::Error },

    #[error("failed to write {}: {source}", path.display())]
    Write { path: PathBuf, source: io::Error },

    #[error("failed to serialize restaurants: {0}")]
    Serialize(#[from] serde_json::Error),
}

#[derive(Debug, Error)]
pub enum RegistryError {
    /// No record matched the (title-cased) name.
    #[error("restaurant \"{0}\" was not found")]
    NotFound(String),

    #[error(transparent)]
    Store(#[from] StoreError),
}

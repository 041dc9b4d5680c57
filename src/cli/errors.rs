use std::path::PathBuf;

use thiserror::Error;

/// Application-specific errors for the CLI
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Cannot load config {}: {source}", path.display())]
    Config {
        path: PathBuf,
        #[source]
        source: brandprep::Error,
    },

    #[error(transparent)]
    Generate(#[from] brandprep::Error),
}

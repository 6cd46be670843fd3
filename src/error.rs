use std::path::PathBuf;

use thiserror::Error;

/// Failures that can surface while resolving a configured location into files.
#[derive(Error, Debug)]
pub enum CleanError {
    #[error("invalid pattern '{pattern}': {source}")]
    Pattern {
        pattern: String,
        #[source]
        source: glob::PatternError,
    },

    #[error("cannot read {}: {source}", path.display())]
    Access {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

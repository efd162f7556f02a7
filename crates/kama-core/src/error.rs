use thiserror::Error;

/// Failures that escalate past the `Maybe` channel.
///
/// Ordinary absence never shows up here: a field that cannot be extracted is
/// an `Absent`, not an error. These variants cover defects and I/O — and of
/// them only `Structural` aborts a run, since a record that fails its declared
/// shape means an extractor assigned the wrong type and continuing would
/// silently corrupt the output.
#[derive(Debug, Error)]
pub enum Error {
    #[error("structural validation failed for {page}: {}", .violations.join("; "))]
    Structural {
        page: String,
        violations: Vec<String>,
    },

    #[error("record store {path} is not valid JSON: {source}")]
    StoreFormat {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

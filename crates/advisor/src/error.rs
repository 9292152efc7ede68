use thiserror::Error;

/// Failures surfaced at the request-handling boundary.
///
/// Malformed budget lines inside an otherwise usable reply are NOT an
/// error; the parser drops them and the request still succeeds.
#[derive(Debug, Error)]
pub enum AdvisorError {
    /// The caller supplied an empty or whitespace-only query.
    #[error("{0}")]
    InvalidInput(String),

    /// The oracle call failed, timed out, or returned no usable text.
    #[error("oracle call failed: {0}")]
    Upstream(#[from] anyhow::Error),
}

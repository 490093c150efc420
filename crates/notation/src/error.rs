//! Errors the facade functions can return.

/// The only failure mode this crate has: the sink stopped accepting
/// bytes partway through a render.
#[derive(Debug, thiserror::Error)]
pub enum NotationError {
    /// The underlying [`std::io::Write`] returned an error. Rendering
    /// stops at the first failure; bytes already written are not
    /// undone.
    #[error("notation: write failed after {written} bytes: {source}")]
    Write {
        written: usize,
        #[source]
        source: std::io::Error,
    },
}

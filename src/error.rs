use thiserror::Error;

/// Convenience result type for pipeline operations.
pub type PipelineResult<T> = Result<T, PipelineError>;

/// Error type returned by pipeline operations, the worker pool and the demonstrations.
#[derive(Debug, Error)]
pub enum PipelineError {
    /// A terminal operation with no meaningful default (max/min/reduce) received no elements.
    #[error("empty input: {operation} requires at least one element")]
    EmptyInput { operation: &'static str },

    /// An integer reduction left the `i64` range.
    #[error("numeric overflow in {operation}")]
    Overflow { operation: &'static str },

    /// Two elements produced the same key while collecting into a map without a merge function.
    #[error("duplicate key {key} while collecting into a map")]
    DuplicateKey { key: String },

    /// The worker pool could not be built.
    #[error("thread pool error: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),

    /// Underlying I/O error while writing output.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// A value could not be encoded as a JSON line.
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

impl PipelineError {
    pub(crate) fn empty(operation: &'static str) -> Self {
        Self::EmptyInput { operation }
    }
}

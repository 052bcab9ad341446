use enough::StopReason;

/// Errors from loading a BMP into a frame sink.
///
/// Pixel data that ends early is not an error: the load stops silently and
/// reports it through [`crate::LoadOutcome::truncated`]. Only header-level
/// shortfalls surface as [`BitmapError::Truncated`].
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum BitmapError {
    #[error("cannot open bitmap source: {0}")]
    IoOpen(#[source] std::io::Error),

    #[error("truncated bitmap: {0}")]
    Truncated(String),

    #[error("unrecognized format magic bytes")]
    UnrecognizedFormat,

    #[error("unsupported bitmap format: {0}")]
    UnsupportedFormat(String),

    #[error("invalid header: {0}")]
    InvalidHeader(String),

    #[error("limit exceeded: {0}")]
    LimitExceeded(String),

    #[error("operation cancelled")]
    Cancelled(StopReason),
}

impl From<StopReason> for BitmapError {
    fn from(r: StopReason) -> Self {
        BitmapError::Cancelled(r)
    }
}

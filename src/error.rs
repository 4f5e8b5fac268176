use thiserror::Error;

pub type Result<T> = std::result::Result<T, BufferError>;

/// Failures surfaced by the checked entry points of [`FixedBuffer`](crate::FixedBuffer)
/// and [`Container`](crate::Container).
///
/// The plain accessors never return these; they panic on a bad index instead.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum BufferError {
    #[error("index {index} out of range for buffer of length {len}")]
    OutOfRange { index: usize, len: usize },

    /// Negative length, or the allocator refused the request.
    #[error("cannot allocate buffer of length {len}")]
    AllocationFailed { len: i64 },
}

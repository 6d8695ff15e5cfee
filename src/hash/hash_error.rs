use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum HashInputError {
    /// The requested `start..start + length` window is not backed by the buffer.
    #[error("range {start}..{start}+{length} is outside a buffer of {buffer_len} bytes")]
    RangeOutOfBounds {
        start: usize,
        length: usize,
        buffer_len: usize,
    },
}

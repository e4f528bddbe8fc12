use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error("Unknown rotation strategy: {0}")]
    UnknownStrategy(String),

    #[error("Block of {len} bytes is not a whole number of {stride}-byte records")]
    RaggedBlock { len: usize, stride: usize },

    #[error("Records of {size} bytes do not match a {stride}-byte stride")]
    StrideMismatch { size: usize, stride: usize },

    #[error("Range {offset}..{offset}+{len} exceeds sequence of length {total}")]
    RangeOutOfBounds {
        offset: usize,
        len: usize,
        total: usize,
    },

    #[error("Invalid rng source: {0}")]
    InvalidRngSource(String),
}

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DecodeError {
    #[error("read of {len} bytes at offset {offset} is outside the {have}-byte message")]
    OutOfBounds {
        offset: usize,
        len: usize,
        have: usize,
    },

    #[error("malformed name: {0}")]
    MalformedName(String),

    #[error("malformed record: {0}")]
    MalformedRecord(String),

    #[error("malformed message: {0}")]
    MalformedMessage(String),
}

//! Crate-wide error type. One flat enum rather than per-module error
//! types, since every failure here traces back to a handful of causes:
//! a key that isn't there, a key that shouldn't be there, or a version
//! number outside the committed range.

use std::fmt;

#[derive(Debug, PartialEq, Eq, Clone)]
pub enum Error {
    /// Looked up a key that has never been inserted.
    KeyNotFound(String),
    /// Supplied a key that fails a structural precondition of the call
    /// (for example, a parent key an insert would make its own ancestor).
    InvalidKey(String),
    /// Looked up a key that existed but was later removed.
    KeyRemoved(String),
    /// Tried to insert a key that is already present.
    KeyExists(String),
    /// Tried to remove a key that still has children.
    KeyHasChildren(String),
    /// Asked for a version outside `0..=max_version()`.
    InvalidVersion(u64),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::KeyNotFound(key) => write!(f, "key not found: {}", key),
            Error::InvalidKey(key) => write!(f, "invalid key: {}", key),
            Error::KeyRemoved(key) => write!(f, "key removed: {}", key),
            Error::KeyExists(key) => write!(f, "key already exists: {}", key),
            Error::KeyHasChildren(key) => write!(f, "key has children: {}", key),
            Error::InvalidVersion(v) => write!(f, "invalid version: {}", v),
        }
    }
}

impl std::error::Error for Error {}

pub type Result<T> = std::result::Result<T, Error>;

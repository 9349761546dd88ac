//! Error types for Hashline

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChainError {
    #[error("Invalid block hash at index {index}: stored {stored}, computed {computed}")]
    InvalidBlockHash {
        index: u64,
        stored: String,
        computed: String,
    },

    #[error("Invalid block linkage at index {index}: expected prev_hash {expected}, found {actual}")]
    InvalidBlockLinkage {
        index: u64,
        expected: String,
        actual: String,
    },
}

/// Convenience alias used across the crate
pub type Result<T> = std::result::Result<T, ChainError>;

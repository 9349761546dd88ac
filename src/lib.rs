//! Hashline - A minimal hash-linked ledger demonstrating tamper-evident chains
//!
//! # Architecture
//!
//! The crate is organized into logical modules:
//!
//! ## Core Ledger
//! - [`blockchain`] - Block structure, chain management and validation
//!
//! ## Cryptography
//! - [`crypto`] - SHA-256 digest helpers
//!
//! ## Utilities
//! - [`error`] - Error types

#![forbid(unsafe_code)]

// ============================================================================
// Core Ledger
// ============================================================================
pub mod blockchain;

// ============================================================================
// Cryptography
// ============================================================================
pub mod crypto;

// ============================================================================
// Utilities
// ============================================================================
pub mod error;

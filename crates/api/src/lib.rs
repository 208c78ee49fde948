//! Public API traits and types for the jwsig library
//!
//! This crate provides the public API surface for the jwsig ecosystem:
//! the error taxonomy shared by every operation, the secure digest
//! capability trait, and the capability traits through which the external
//! cryptographic provider is consumed.

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(all(feature = "alloc", not(feature = "std")))]
extern crate alloc;

pub mod error;
pub mod traits;

// Re-export commonly used items at the crate level for convenience
pub use error::{Error, Result, ResultExt};

// Re-export all traits from the traits module
pub use traits::{EcKeyPair, EcdsaProvider, MacProvider, SecureDigest};

// Re-export trait modules for direct access
pub use traits::{digest, provider};

//! Trait definitions for the jwsig public API

pub mod digest;
pub mod provider;

pub use digest::SecureDigest;
pub use provider::{EcKeyPair, EcdsaProvider, MacProvider};

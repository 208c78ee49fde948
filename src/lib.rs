//! # jwsig
//!
//! Cryptographic plumbing for JOSE/JWS ECDSA signatures.
//!
//! ## Usage
//!
//! Add this to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! jwsig = "0.1"
//! ```
//!
//! ## Crate Structure
//!
//! This is a facade crate that re-exports functionality from several sub-crates:
//!
//! - [`jwsig_api`]: Public traits and error types
//! - [`jwsig_params`]: Curve names and size constants
//! - [`jwsig_sign`]: Algorithm registry, DER/concatenated signature
//!   transcoding, key-pair generation, and digest algorithm instances
//!
//! The elliptic-curve arithmetic itself is not implemented here: signing,
//! verification, and key generation are delegated to an external provider
//! implementing the capability traits in [`jwsig_api`].

#![cfg_attr(not(feature = "std"), no_std)]

// Core re-exports (always available)
pub use jwsig_api as api;
pub use jwsig_params as params;
pub use jwsig_sign as sign;

/// Common imports for jwsig users
pub mod prelude {
    // Re-export error types
    pub use crate::api::{Error, Result};

    // Re-export core traits
    pub use crate::api::{EcdsaProvider, MacProvider, SecureDigest};

    // Re-export the algorithm registry and digest instances
    pub use crate::sign::{EcdsaDigest, JwsAlgorithm, MacDigest};

    // Re-export key generation and transcoding entry points
    pub use crate::sign::keypair::generate_keypair;
    #[cfg(feature = "std")]
    pub use crate::sign::keypair::generate_keypair_default;
    pub use crate::sign::transcode::{concat_to_der, der_to_concat};
}

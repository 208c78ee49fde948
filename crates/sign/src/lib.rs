//! JWS Signature Algorithms
//!
//! This crate implements the byte-level contract of JOSE/JWS ECDSA
//! signatures: the closed algorithm registry (ES256, ES384, ES512),
//! transcoding between ASN.1/DER and the concatenated `R || S` wire
//! encoding, provider-backed key generation, and the ECDSA and MAC secure
//! digest algorithm instances.

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(all(feature = "alloc", not(feature = "std")))]
extern crate alloc;

pub mod alg;
pub mod ecdsa;
pub mod keypair;
pub mod mac;
pub mod transcode;

// Re-exports for the common entry points
pub use alg::JwsAlgorithm;
pub use ecdsa::EcdsaDigest;
pub use mac::{MacAlgorithm, MacDigest};
pub use transcode::{concat_to_der, der_to_concat, SignatureComponents};

//! Secure digest traits for jwsig
//!
//! A secure digest algorithm is one that requires a key to compute and to
//! verify its output: either a digital signature (asymmetric key pair) or a
//! message authentication code (one symmetric key used for both directions).
//! The value returned from [`SecureDigest::id`] is used verbatim as the JWS
//! `alg` protected header value.

use crate::error::DigestResult;

#[cfg(all(feature = "alloc", not(feature = "std")))]
use alloc::vec::Vec;

/// Core trait for keyed digest algorithms
///
/// # Verification outcome
///
/// `verify` returning `Ok(false)` means the digest does not match the
/// message; it is a normal outcome, not an error. Errors are reserved for
/// malformed inputs and provider failures, which callers must treat
/// differently (reject-as-malformed rather than reject-and-log).
pub trait SecureDigest {
    /// Key type used to produce digests
    ///
    /// For MAC algorithms this is the same type as `VerifyingKey`.
    type SigningKey;

    /// Key type used to verify digests
    type VerifyingKey;

    /// Returns the algorithm identifier used as the JWS `alg` header value
    fn id(&self) -> &'static str;

    /// Compute the digest of `message` with the given signing key
    ///
    /// For ECDSA algorithms the returned bytes are in the fixed-length
    /// concatenated `R || S` wire encoding, not DER.
    fn sign(&self, message: &[u8], key: &Self::SigningKey) -> DigestResult<Vec<u8>>;

    /// Verify a digest against a message and verification key
    ///
    /// Returns `Ok(true)` when the digest matches, `Ok(false)` when it does
    /// not, and an error when `digest` is not a well-formed encoding for
    /// this algorithm.
    fn verify(
        &self,
        message: &[u8],
        digest: &[u8],
        key: &Self::VerifyingKey,
    ) -> DigestResult<bool>;
}

//! MAC digest algorithms for JWS (HS256, HS384, HS512)
//!
//! The MAC family is the symmetric half of the secure digest abstraction:
//! one key both produces and verifies the tag. The HMAC primitive itself is
//! external; verification recomputes the tag and compares in constant time.

use jwsig_api::error::DigestResult;
use jwsig_api::{MacProvider, SecureDigest};
use subtle::ConstantTimeEq;

#[cfg(all(feature = "alloc", not(feature = "std")))]
use alloc::vec::Vec;

/// HMAC variants defined for JWS
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MacAlgorithm {
    /// HMAC with SHA-256
    Hs256,
    /// HMAC with SHA-384
    Hs384,
    /// HMAC with SHA-512
    Hs512,
}

impl MacAlgorithm {
    /// The identifier used as the JWS `alg` protected header value
    pub fn id(self) -> &'static str {
        match self {
            Self::Hs256 => "HS256",
            Self::Hs384 => "HS384",
            Self::Hs512 => "HS512",
        }
    }

    /// Expected tag length in bytes
    pub fn tag_size(self) -> usize {
        match self {
            Self::Hs256 => 32,
            Self::Hs384 => 48,
            Self::Hs512 => 64,
        }
    }
}

/// A MAC JWS algorithm bound to an external HMAC provider
pub struct MacDigest<P> {
    alg: MacAlgorithm,
    provider: P,
}

impl<P: MacProvider> MacDigest<P> {
    /// Bind a MAC variant to a provider
    pub fn new(alg: MacAlgorithm, provider: P) -> Self {
        MacDigest { alg, provider }
    }

    /// The MAC variant this instance implements
    pub fn algorithm(&self) -> MacAlgorithm {
        self.alg
    }
}

impl<P: MacProvider> SecureDigest for MacDigest<P> {
    type SigningKey = P::Key;
    type VerifyingKey = P::Key;

    fn id(&self) -> &'static str {
        self.alg.id()
    }

    fn sign(&self, message: &[u8], key: &Self::SigningKey) -> DigestResult<Vec<u8>> {
        self.provider.compute(message, key)
    }

    /// Recompute the tag and compare in constant time
    ///
    /// A length mismatch compares unequal; it is still `Ok(false)`, not an
    /// error, since MAC tags have no internal structure to be malformed.
    fn verify(
        &self,
        message: &[u8],
        digest: &[u8],
        key: &Self::VerifyingKey,
    ) -> DigestResult<bool> {
        let computed = self.provider.compute(message, key)?;
        if computed.len() != digest.len() {
            return Ok(false);
        }
        Ok(computed.ct_eq(digest).into())
    }
}

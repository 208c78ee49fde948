//! External cryptographic provider capabilities
//!
//! The elliptic-curve arithmetic and MAC primitives are not implemented in
//! this workspace; they are consumed through the capability traits below so
//! that any conformant provider can be substituted. Providers exchange ECDSA
//! signatures in ASN.1/DER form; the concatenated JWS wire encoding is
//! produced by the transcoder on top of these traits.

use crate::error::Result;
use rand::{CryptoRng, RngCore};
use zeroize::Zeroize;

#[cfg(all(feature = "alloc", not(feature = "std")))]
use alloc::vec::Vec;

/// A freshly generated public/secret key pair
///
/// The pair is exclusively owned by the caller after generation; neither the
/// provider nor this library retains a reference to it.
#[derive(Clone, Debug)]
pub struct EcKeyPair<Pub, Sec> {
    /// Public half, handed to verifiers
    pub public: Pub,
    /// Secret half, consumed by the signing primitive
    pub secret: Sec,
}

/// Capability trait for an external ECDSA provider
///
/// # Security Requirements
///
/// Implementations must use the caller-supplied cryptographically secure RNG
/// for all random number generation, and must be safe for concurrent use if
/// callers sign or verify from multiple threads.
pub trait EcdsaProvider {
    /// Public key type for this provider
    type PublicKey: Clone;

    /// Secret key type - must be zeroizable but not byte-accessible
    type SecretKey: Clone + Zeroize;

    /// Generate a key pair on the named curve
    ///
    /// `curve` is the named parameter set (e.g. `"secp256r1"`) taken from
    /// the algorithm registry.
    fn generate_keypair<R: CryptoRng + RngCore>(
        &self,
        curve: &str,
        rng: &mut R,
    ) -> Result<EcKeyPair<Self::PublicKey, Self::SecretKey>>;

    /// Sign `message`, returning an ASN.1/DER-encoded ECDSA signature
    fn sign_der(&self, message: &[u8], key: &Self::SecretKey) -> Result<Vec<u8>>;

    /// Verify a DER-encoded ECDSA signature over `message`
    ///
    /// Returns `Ok(false)` for a well-formed signature that does not match;
    /// errors are reserved for provider failures and rejected keys.
    fn verify_der(
        &self,
        message: &[u8],
        signature: &[u8],
        key: &Self::PublicKey,
    ) -> Result<bool>;
}

/// Capability trait for an external MAC provider
pub trait MacProvider {
    /// Symmetric key type, used for both computing and verifying tags
    type Key: Clone + Zeroize;

    /// Compute the MAC tag of `message` under `key`
    fn compute(&self, message: &[u8], key: &Self::Key) -> Result<Vec<u8>>;
}

//! ECDSA digest algorithms for JWS (ES256, ES384, ES512)
//!
//! The curve arithmetic lives in an external [`EcdsaProvider`]; this module
//! composes it with the signature transcoder so that callers only ever see
//! the fixed-length concatenated wire encoding.

use crate::alg::JwsAlgorithm;
use crate::transcode;
use jwsig_api::error::DigestResult;
use jwsig_api::{EcdsaProvider, Error, ResultExt, SecureDigest};

#[cfg(all(feature = "alloc", not(feature = "std")))]
use alloc::vec::Vec;

/// An ECDSA JWS algorithm bound to an external signing provider
pub struct EcdsaDigest<P> {
    alg: JwsAlgorithm,
    provider: P,
}

impl<P: EcdsaProvider> EcdsaDigest<P> {
    /// Bind a registry variant to a provider
    pub fn new(alg: JwsAlgorithm, provider: P) -> Self {
        EcdsaDigest { alg, provider }
    }

    /// ES256 over the given provider
    pub fn es256(provider: P) -> Self {
        Self::new(JwsAlgorithm::Es256, provider)
    }

    /// ES384 over the given provider
    pub fn es384(provider: P) -> Self {
        Self::new(JwsAlgorithm::Es384, provider)
    }

    /// ES512 over the given provider
    pub fn es512(provider: P) -> Self {
        Self::new(JwsAlgorithm::Es512, provider)
    }

    /// The registry variant this instance implements
    pub fn algorithm(&self) -> JwsAlgorithm {
        self.alg
    }
}

impl<P: EcdsaProvider> SecureDigest for EcdsaDigest<P> {
    type SigningKey = P::SecretKey;
    type VerifyingKey = P::PublicKey;

    fn id(&self) -> &'static str {
        self.alg.id()
    }

    /// Sign `message` and return the concatenated `R || S` wire encoding
    ///
    /// The provider hands back DER; the transcoder pins it to the variant's
    /// fixed signature width. A transcoding failure here means the provider
    /// emitted something other than well-formed DER, and is re-labelled as
    /// such.
    fn sign(&self, message: &[u8], key: &Self::SigningKey) -> DigestResult<Vec<u8>> {
        let der = self.provider.sign_der(message, key)?;
        transcode::der_to_concat(&der, self.alg.signature_size())
            .with_context("ECDSA provider returned malformed DER")
    }

    /// Verify a concatenated signature over `message`
    ///
    /// `Ok(false)` means a well-formed signature that does not match; a
    /// wrong-length or malformed input is an error, since the two outcomes
    /// have different security implications.
    fn verify(
        &self,
        message: &[u8],
        digest: &[u8],
        key: &Self::VerifyingKey,
    ) -> DigestResult<bool> {
        if digest.len() != self.alg.signature_size() {
            return Err(Error::InvalidLength {
                context: "concatenated ECDSA signature",
                expected: self.alg.signature_size(),
                actual: digest.len(),
            });
        }
        let der = transcode::concat_to_der(digest)?;
        self.provider.verify_der(message, &der, key)
    }
}

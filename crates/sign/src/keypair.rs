//! EC key pair generation
//!
//! Key pairs come from the external provider; this module only selects the
//! curve parameters for the requested registry variant and folds provider
//! failures into a single error. The returned pair is owned entirely by the
//! caller - nothing is retained here.

use crate::alg::JwsAlgorithm;
use jwsig_api::error::KeyResult;
use jwsig_api::{EcKeyPair, EcdsaProvider, Error, ResultExt};
use rand::{CryptoRng, RngCore};

/// Generate a key pair for the given algorithm variant
///
/// Initializes the provider's curve-parameter generation with the variant's
/// named curve and the supplied cryptographically secure randomness source.
/// Any provider failure (unsupported curve, misconfiguration) is wrapped
/// into [`Error::KeyGenerationFailed`] carrying the original cause; a
/// partially-initialized pair is never returned.
pub fn generate_keypair<P, R>(
    provider: &P,
    alg: JwsAlgorithm,
    rng: &mut R,
) -> KeyResult<EcKeyPair<P::PublicKey, P::SecretKey>>
where
    P: EcdsaProvider,
    R: CryptoRng + RngCore,
{
    provider
        .generate_keypair(alg.curve_name(), rng)
        .wrap_err(|cause| Error::KeyGenerationFailed {
            context: "EC key pair generation",
            #[cfg(feature = "std")]
            message: format!("unable to generate {} key pair: {}", alg.id(), cause),
        })
}

/// Generate a key pair of strength sufficient for every supported variant
///
/// Convenience form of [`generate_keypair`]: uses ES512 (the strongest
/// supported variant) and the operating system's CSPRNG. `OsRng` is a
/// zero-sized handle onto process-wide OS state, so there is nothing to
/// initialize or reset here.
#[cfg(feature = "std")]
pub fn generate_keypair_default<P>(
    provider: &P,
) -> KeyResult<EcKeyPair<P::PublicKey, P::SecretKey>>
where
    P: EcdsaProvider,
{
    generate_keypair(provider, JwsAlgorithm::Es512, &mut rand::rngs::OsRng)
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::cell::Cell;
    use rand::SeedableRng;
    use rand_chacha::ChaCha20Rng;

    /// Records the curve it was asked for; keys are raw random bytes
    struct RecordingProvider {
        curves_seen: Cell<Option<&'static str>>,
    }

    impl RecordingProvider {
        fn new() -> Self {
            RecordingProvider {
                curves_seen: Cell::new(None),
            }
        }

        fn intern(curve: &str) -> &'static str {
            match curve {
                "secp256r1" => "secp256r1",
                "secp384r1" => "secp384r1",
                "secp521r1" => "secp521r1",
                _ => "unknown",
            }
        }
    }

    impl EcdsaProvider for RecordingProvider {
        type PublicKey = Vec<u8>;
        type SecretKey = Vec<u8>;

        fn generate_keypair<R: CryptoRng + RngCore>(
            &self,
            curve: &str,
            rng: &mut R,
        ) -> jwsig_api::Result<EcKeyPair<Vec<u8>, Vec<u8>>> {
            self.curves_seen.set(Some(Self::intern(curve)));
            let mut secret = vec![0u8; 32];
            rng.fill_bytes(&mut secret);
            let public = secret.iter().map(|b| !b).collect();
            Ok(EcKeyPair { public, secret })
        }

        fn sign_der(&self, _message: &[u8], _key: &Vec<u8>) -> jwsig_api::Result<Vec<u8>> {
            unimplemented!("not exercised by key generation tests")
        }

        fn verify_der(
            &self,
            _message: &[u8],
            _signature: &[u8],
            _key: &Vec<u8>,
        ) -> jwsig_api::Result<bool> {
            unimplemented!("not exercised by key generation tests")
        }
    }

    /// Always fails, standing in for a misconfigured provider
    struct BrokenProvider;

    impl EcdsaProvider for BrokenProvider {
        type PublicKey = Vec<u8>;
        type SecretKey = Vec<u8>;

        fn generate_keypair<R: CryptoRng + RngCore>(
            &self,
            _curve: &str,
            _rng: &mut R,
        ) -> jwsig_api::Result<EcKeyPair<Vec<u8>, Vec<u8>>> {
            Err(Error::ProviderFailure {
                context: "curve parameters unavailable",
                #[cfg(feature = "std")]
                message: String::from("no such curve"),
            })
        }

        fn sign_der(&self, _message: &[u8], _key: &Vec<u8>) -> jwsig_api::Result<Vec<u8>> {
            unimplemented!()
        }

        fn verify_der(
            &self,
            _message: &[u8],
            _signature: &[u8],
            _key: &Vec<u8>,
        ) -> jwsig_api::Result<bool> {
            unimplemented!()
        }
    }

    #[test]
    fn passes_the_registry_curve_to_the_provider() {
        let mut rng = ChaCha20Rng::seed_from_u64(7);
        for (alg, curve) in [
            (JwsAlgorithm::Es256, "secp256r1"),
            (JwsAlgorithm::Es384, "secp384r1"),
            (JwsAlgorithm::Es512, "secp521r1"),
        ] {
            let provider = RecordingProvider::new();
            generate_keypair(&provider, alg, &mut rng).unwrap();
            assert_eq!(provider.curves_seen.get(), Some(curve));
        }
    }

    #[test]
    fn default_generation_targets_the_strongest_variant() {
        let provider = RecordingProvider::new();
        let pair = generate_keypair_default(&provider).unwrap();
        assert_eq!(provider.curves_seen.get(), Some("secp521r1"));
        assert_eq!(pair.secret.len(), 32);
    }

    #[test]
    fn provider_failure_becomes_key_generation_failed() {
        let mut rng = ChaCha20Rng::seed_from_u64(7);
        let err = generate_keypair(&BrokenProvider, JwsAlgorithm::Es256, &mut rng).unwrap_err();
        assert!(matches!(err, Error::KeyGenerationFailed { .. }));
    }
}

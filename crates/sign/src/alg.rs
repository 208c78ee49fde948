//! JWS ECDSA algorithm registry
//!
//! The registry is a closed set: adding a variant without handling it in
//! every accessor is a compile-time error, so an unsupported case can never
//! be a silent runtime lookup miss.

use core::fmt;
use core::str::FromStr;

use jwsig_api::{Error, Result};
use jwsig_params as params;

/// ECDSA signature algorithm variants defined for JWS
///
/// Each variant maps to a named curve, the width of one signature component
/// in the concatenated encoding, and the total signature width. The mapping
/// is immutable after compilation and safe for unsynchronized concurrent
/// reads.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum JwsAlgorithm {
    /// ECDSA over P-256 with SHA-256
    Es256,
    /// ECDSA over P-384 with SHA-384
    Es384,
    /// ECDSA over P-521 with SHA-512
    Es512,
}

impl JwsAlgorithm {
    /// All supported variants, strongest last
    pub const ALL: [JwsAlgorithm; 3] = [Self::Es256, Self::Es384, Self::Es512];

    /// Look up a variant by its JWS `alg` header identifier
    pub fn resolve(id: &str) -> Result<Self> {
        match id {
            "ES256" => Ok(Self::Es256),
            "ES384" => Ok(Self::Es384),
            "ES512" => Ok(Self::Es512),
            _ => Err(Error::UnsupportedAlgorithm {
                context: "JWS ECDSA algorithm registry",
                #[cfg(feature = "std")]
                message: format!("unrecognized algorithm identifier: {}", id),
            }),
        }
    }

    /// The identifier used as the JWS `alg` protected header value
    pub fn id(self) -> &'static str {
        match self {
            Self::Es256 => "ES256",
            Self::Es384 => "ES384",
            Self::Es512 => "ES512",
        }
    }

    /// The named curve parameter set used for key generation and signing
    pub fn curve_name(self) -> &'static str {
        match self {
            Self::Es256 => params::P256_CURVE_NAME,
            Self::Es384 => params::P384_CURVE_NAME,
            Self::Es512 => params::P521_CURVE_NAME,
        }
    }

    /// Total byte length of a concatenated `R || S` signature
    pub fn signature_size(self) -> usize {
        match self {
            Self::Es256 => params::P256_SIGNATURE_SIZE,
            Self::Es384 => params::P384_SIGNATURE_SIZE,
            Self::Es512 => params::P521_SIGNATURE_SIZE,
        }
    }

    /// Byte length of one signature component (half the signature size)
    pub fn component_size(self) -> usize {
        self.signature_size() / 2
    }
}

impl fmt::Display for JwsAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for JwsAlgorithm {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::resolve(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registry_resolves_all_documented_variants() {
        let es256 = JwsAlgorithm::resolve("ES256").unwrap();
        assert_eq!(es256.curve_name(), "secp256r1");
        assert_eq!(es256.signature_size(), 64);

        let es384 = JwsAlgorithm::resolve("ES384").unwrap();
        assert_eq!(es384.curve_name(), "secp384r1");
        assert_eq!(es384.signature_size(), 96);

        let es512 = JwsAlgorithm::resolve("ES512").unwrap();
        assert_eq!(es512.curve_name(), "secp521r1");
        assert_eq!(es512.signature_size(), 132);
    }

    #[test]
    fn registry_rejects_unknown_identifier() {
        let err = JwsAlgorithm::resolve("ES128").unwrap_err();
        assert!(matches!(err, Error::UnsupportedAlgorithm { .. }));

        // Identifiers are case-sensitive per RFC 7515
        assert!(JwsAlgorithm::resolve("es256").is_err());
        assert!(JwsAlgorithm::resolve("").is_err());
    }

    #[test]
    fn component_size_is_half_of_signature_size() {
        for alg in JwsAlgorithm::ALL {
            assert_eq!(alg.signature_size() % 2, 0);
            assert_eq!(alg.component_size() * 2, alg.signature_size());
        }
    }

    #[test]
    fn display_and_from_str_round_trip() {
        for alg in JwsAlgorithm::ALL {
            assert_eq!(alg.id().parse::<JwsAlgorithm>().unwrap(), alg);
            assert_eq!(alg.to_string(), alg.id());
        }
    }
}

//! Constants for the ECDSA JWS algorithm family
//!
//! Component size is the width of one signature component (`R` or `S`) in
//! the concatenated JWS encoding: the curve's scalar size in bytes. The
//! signature size is the total width of `R || S`.

/// Named curve for ES256 (NIST P-256)
pub const P256_CURVE_NAME: &str = "secp256r1";

/// Named curve for ES384 (NIST P-384)
pub const P384_CURVE_NAME: &str = "secp384r1";

/// Named curve for ES512 (NIST P-521)
pub const P521_CURVE_NAME: &str = "secp521r1";

/// Size of one signature component for ES256 in bytes
pub const P256_COMPONENT_SIZE: usize = 32;

/// Size of one signature component for ES384 in bytes
pub const P384_COMPONENT_SIZE: usize = 48;

/// Size of one signature component for ES512 in bytes
///
/// P-521 scalars occupy 521 bits, hence 66 bytes rather than a power of two.
pub const P521_COMPONENT_SIZE: usize = 66;

/// Size of a concatenated ES256 signature in bytes
pub const P256_SIGNATURE_SIZE: usize = P256_COMPONENT_SIZE * 2;

/// Size of a concatenated ES384 signature in bytes
pub const P384_SIGNATURE_SIZE: usize = P384_COMPONENT_SIZE * 2;

/// Size of a concatenated ES512 signature in bytes
pub const P521_SIGNATURE_SIZE: usize = P521_COMPONENT_SIZE * 2;

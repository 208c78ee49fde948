//! Error handling for JWS signature operations

pub mod traits;
pub mod types;

// Re-export the primary error type and result
pub use types::{Error, Result};

// Re-export error traits
pub use traits::ResultExt;

// Implement standard Error trait when std is available
#[cfg(feature = "std")]
impl std::error::Error for Error {}

// Specialized result types for different operations

/// Result of a DER/concatenated signature transcoding operation
pub type TranscodeResult<T> = Result<T>;

/// Result of a key-generation operation
pub type KeyResult<T> = Result<T>;

/// Result of a secure digest computation or verification
pub type DigestResult<T> = Result<T>;

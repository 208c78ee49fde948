//! Error type definitions for JWS signature operations

#[cfg(feature = "std")]
use std::string::String;

/// Primary error type for JWS signature operations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Algorithm identifier is not in the registry
    UnsupportedAlgorithm {
        context: &'static str,
        #[cfg(feature = "std")]
        message: String,
    },

    /// Malformed DER or concatenated signature encoding
    ///
    /// `offset` is the position of the offending byte in the input.
    InvalidSignatureFormat {
        context: &'static str,
        offset: usize,
        #[cfg(feature = "std")]
        message: String,
    },

    /// The external key-generation primitive failed
    KeyGenerationFailed {
        context: &'static str,
        #[cfg(feature = "std")]
        message: String,
    },

    /// Invalid length error with context
    InvalidLength {
        context: &'static str,
        expected: usize,
        actual: usize,
    },

    /// Invalid key error
    InvalidKey {
        context: &'static str,
        #[cfg(feature = "std")]
        message: String,
    },

    /// The external sign/verify/MAC primitive failed
    ProviderFailure {
        context: &'static str,
        #[cfg(feature = "std")]
        message: String,
    },

    /// Other error
    Other {
        context: &'static str,
        #[cfg(feature = "std")]
        message: String,
    },
}

/// Result type for JWS signature operations
pub type Result<T> = core::result::Result<T, Error>;

impl Error {
    /// Replace the context of an existing error
    ///
    /// Every other field (byte offsets, length diagnostics, messages) is
    /// preserved; only the `context` string changes.
    pub fn with_context(self, context: &'static str) -> Self {
        match self {
            Self::UnsupportedAlgorithm {
                #[cfg(feature = "std")]
                message,
                ..
            } => Self::UnsupportedAlgorithm {
                context,
                #[cfg(feature = "std")]
                message,
            },
            Self::InvalidSignatureFormat {
                offset,
                #[cfg(feature = "std")]
                message,
                ..
            } => Self::InvalidSignatureFormat {
                context,
                offset,
                #[cfg(feature = "std")]
                message,
            },
            Self::KeyGenerationFailed {
                #[cfg(feature = "std")]
                message,
                ..
            } => Self::KeyGenerationFailed {
                context,
                #[cfg(feature = "std")]
                message,
            },
            Self::InvalidLength {
                expected, actual, ..
            } => Self::InvalidLength {
                context,
                expected,
                actual,
            },
            Self::InvalidKey {
                #[cfg(feature = "std")]
                message,
                ..
            } => Self::InvalidKey {
                context,
                #[cfg(feature = "std")]
                message,
            },
            Self::ProviderFailure {
                #[cfg(feature = "std")]
                message,
                ..
            } => Self::ProviderFailure {
                context,
                #[cfg(feature = "std")]
                message,
            },
            Self::Other {
                #[cfg(feature = "std")]
                message,
                ..
            } => Self::Other {
                context,
                #[cfg(feature = "std")]
                message,
            },
        }
    }

    /// Add a message to an existing error (when std is available)
    #[cfg(feature = "std")]
    pub fn with_message(self, message: impl Into<String>) -> Self {
        let message = message.into();
        match self {
            Self::UnsupportedAlgorithm { context, .. } => {
                Self::UnsupportedAlgorithm { context, message }
            }
            Self::InvalidSignatureFormat {
                context, offset, ..
            } => Self::InvalidSignatureFormat {
                context,
                offset,
                message,
            },
            Self::KeyGenerationFailed { context, .. } => {
                Self::KeyGenerationFailed { context, message }
            }
            Self::InvalidLength {
                context,
                expected,
                actual,
            } => Self::InvalidLength {
                context,
                expected,
                actual,
            },
            Self::InvalidKey { context, .. } => Self::InvalidKey { context, message },
            Self::ProviderFailure { context, .. } => Self::ProviderFailure { context, message },
            Self::Other { context, .. } => Self::Other { context, message },
        }
    }
}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            #[cfg(feature = "std")]
            Self::UnsupportedAlgorithm { context, message } => {
                write!(f, "Unsupported algorithm: {}: {}", context, message)
            }
            #[cfg(not(feature = "std"))]
            Self::UnsupportedAlgorithm { context } => {
                write!(f, "Unsupported algorithm: {}", context)
            }
            Self::InvalidSignatureFormat {
                context, offset, ..
            } => {
                write!(
                    f,
                    "Invalid signature format: {} (at byte {})",
                    context, offset
                )
            }
            #[cfg(feature = "std")]
            Self::KeyGenerationFailed { context, message } => {
                write!(f, "Key generation failed: {}: {}", context, message)
            }
            #[cfg(not(feature = "std"))]
            Self::KeyGenerationFailed { context } => {
                write!(f, "Key generation failed: {}", context)
            }
            Self::InvalidLength {
                context,
                expected,
                actual,
            } => {
                write!(
                    f,
                    "{}: invalid length (expected {}, got {})",
                    context, expected, actual
                )
            }
            Self::InvalidKey { context, .. } => {
                write!(f, "Invalid key: {}", context)
            }
            #[cfg(feature = "std")]
            Self::ProviderFailure { context, message } => {
                write!(f, "Provider failure: {}: {}", context, message)
            }
            #[cfg(not(feature = "std"))]
            Self::ProviderFailure { context } => {
                write!(f, "Provider failure: {}", context)
            }
            #[cfg(feature = "std")]
            Self::Other { context, message } => {
                write!(f, "{}: {}", context, message)
            }
            #[cfg(not(feature = "std"))]
            Self::Other { context } => {
                write!(f, "Error: {}", context)
            }
        }
    }
}

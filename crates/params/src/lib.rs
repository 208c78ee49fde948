//! Parameter constants for the jwsig library
//!
//! This crate holds the fixed, process-wide parameters that drive the
//! algorithm registry: curve names and signature size constants. It has no
//! dependencies and is always `no_std` compatible.

#![no_std]

pub mod ecdsa;

pub use ecdsa::*;

//! Crypto error types.

use thiserror::Error;

/// Cryptographic operation errors.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CryptoError {
    /// Signature bytes have the wrong length or an invalid `r`/`s`.
    #[error("Invalid signature format")]
    InvalidSignatureFormat,

    /// `s` is in the upper half of the curve order.
    #[error("Signature is malleable (high S value)")]
    MalleableSignature,

    /// Recovery byte is not one of 0, 1, 27, 28.
    #[error("Invalid recovery id: {0}")]
    InvalidRecoveryId(u8),

    /// Public key recovery failed.
    #[error("Public key recovery failed")]
    RecoveryFailed,

    /// Invalid private key
    #[error("Invalid private key")]
    InvalidPrivateKey,

    /// Signing failed
    #[error("Signing failed: {0}")]
    SigningFailed(String),
}

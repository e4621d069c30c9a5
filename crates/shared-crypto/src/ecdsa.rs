//! # ECDSA Signatures (secp256k1, recoverable)
//!
//! Ethereum-style recoverable signatures: 65 bytes `r ‖ s ‖ v` with
//! `v ∈ {27, 28}`. Verification recovers the signer address and compares it
//! against an expected identity instead of checking against a public key.
//!
//! ## Security Properties
//!
//! - RFC 6979 deterministic nonces (no RNG dependency for signing)
//! - Low-S normalization on signing, high-S rejected on recovery (EIP-2)
//! - Secret key bytes zeroized after loading

use crate::hashing::keccak256;
use crate::CryptoError;
use k256::ecdsa::{RecoveryId, Signature, SigningKey, VerifyingKey};
use shared_types::{Address, Hash};
use zeroize::Zeroize;

/// Half of the secp256k1 curve order (for malleability check).
/// n/2 where n = 0xFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFEBAAEDCE6AF48A03BBFD25E8CD0364141
const SECP256K1_HALF_ORDER: [u8; 32] = [
    0x7F, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF,
    0x5D, 0x57, 0x6E, 0x73, 0x57, 0xA4, 0x50, 0x1D, 0xDF, 0xE9, 0x2F, 0x46, 0x68, 0x1B, 0x20, 0xA0,
];

/// Recoverable signature (65 bytes, `r ‖ s ‖ v`).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RecoverableSignature {
    /// R component.
    pub r: [u8; 32],
    /// S component.
    pub s: [u8; 32],
    /// Recovery byte (27 or 28 when produced here; 0/1 accepted on input).
    pub v: u8,
}

impl RecoverableSignature {
    /// Byte length of the serialized form.
    pub const LEN: usize = 65;

    /// Parse from a 65-byte slice.
    pub fn from_slice(bytes: &[u8]) -> Result<Self, CryptoError> {
        if bytes.len() != Self::LEN {
            return Err(CryptoError::InvalidSignatureFormat);
        }
        let mut r = [0u8; 32];
        let mut s = [0u8; 32];
        r.copy_from_slice(&bytes[..32]);
        s.copy_from_slice(&bytes[32..64]);
        Ok(Self { r, s, v: bytes[64] })
    }

    /// Serialize to `r ‖ s ‖ v`.
    pub fn to_bytes(&self) -> [u8; 65] {
        let mut out = [0u8; 65];
        out[..32].copy_from_slice(&self.r);
        out[32..64].copy_from_slice(&self.s);
        out[64] = self.v;
        out
    }
}

/// secp256k1 keypair producing recoverable signatures.
pub struct RelayerKeyPair {
    signing_key: SigningKey,
}

impl RelayerKeyPair {
    /// Generate random keypair.
    pub fn generate() -> Self {
        let signing_key = SigningKey::random(&mut rand::thread_rng());
        Self { signing_key }
    }

    /// Create from secret key bytes (32 bytes).
    pub fn from_bytes(bytes: &[u8; 32]) -> Result<Self, CryptoError> {
        let signing_key =
            SigningKey::from_slice(bytes).map_err(|_| CryptoError::InvalidPrivateKey)?;
        Ok(Self { signing_key })
    }

    /// Create from a hex secret key, with or without `0x` prefix.
    pub fn from_hex(secret: &str) -> Result<Self, CryptoError> {
        let digits = secret.trim().trim_start_matches("0x");
        let mut bytes = hex::decode(digits).map_err(|_| CryptoError::InvalidPrivateKey)?;
        let result = if bytes.len() == 32 {
            SigningKey::from_slice(&bytes)
                .map(|signing_key| Self { signing_key })
                .map_err(|_| CryptoError::InvalidPrivateKey)
        } else {
            Err(CryptoError::InvalidPrivateKey)
        };
        bytes.zeroize();
        result
    }

    /// Ethereum address of this key.
    pub fn address(&self) -> Address {
        address_from_pubkey(self.signing_key.verifying_key())
    }

    /// Sign a 32-byte digest (deterministic RFC 6979, low-S).
    pub fn sign_prehash(&self, digest: &Hash) -> Result<RecoverableSignature, CryptoError> {
        let (sig, recid) = self
            .signing_key
            .sign_prehash_recoverable(digest)
            .map_err(|e| CryptoError::SigningFailed(e.to_string()))?;

        // k256 may return a high-S signature; normalize and flip parity.
        let (sig, recid) = match sig.normalize_s() {
            Some(normalized) => (
                normalized,
                RecoveryId::new(!recid.is_y_odd(), recid.is_x_reduced()),
            ),
            None => (sig, recid),
        };

        let bytes = sig.to_bytes();
        let mut r = [0u8; 32];
        let mut s = [0u8; 32];
        r.copy_from_slice(&bytes[..32]);
        s.copy_from_slice(&bytes[32..]);

        Ok(RecoverableSignature {
            r,
            s,
            v: 27 + recid.to_byte(),
        })
    }

    /// Sign `message` as an EIP-191 personal message.
    pub fn sign_personal_message(
        &self,
        message: &[u8],
    ) -> Result<RecoverableSignature, CryptoError> {
        self.sign_prehash(&crate::hashing::eip191_hash(message))
    }
}

impl std::fmt::Debug for RelayerKeyPair {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RelayerKeyPair")
            .field("address", &hex::encode(self.address()))
            .finish_non_exhaustive()
    }
}

/// Recover the signer's address from a digest and signature.
pub fn recover_address(
    digest: &Hash,
    signature: &RecoverableSignature,
) -> Result<Address, CryptoError> {
    let recovery_id = parse_recovery_id(signature.v)?;

    if !is_low_s(&signature.s) {
        return Err(CryptoError::MalleableSignature);
    }

    let mut sig_bytes = [0u8; 64];
    sig_bytes[..32].copy_from_slice(&signature.r);
    sig_bytes[32..].copy_from_slice(&signature.s);
    let parsed = Signature::from_slice(&sig_bytes);
    sig_bytes.zeroize();
    let sig = parsed.map_err(|_| CryptoError::InvalidSignatureFormat)?;

    let recovered_key = VerifyingKey::recover_from_prehash(digest, &sig, recovery_id)
        .map_err(|_| CryptoError::RecoveryFailed)?;

    Ok(address_from_pubkey(&recovered_key))
}

/// Derive Ethereum address from public key: last 20 bytes of
/// `keccak256(x ‖ y)`.
pub fn address_from_pubkey(public_key: &VerifyingKey) -> Address {
    let pubkey_bytes = public_key.to_encoded_point(false);
    // Skip the 0x04 uncompressed-point tag.
    let hash = keccak256(&pubkey_bytes.as_bytes()[1..]);

    let mut address = [0u8; 20];
    address.copy_from_slice(&hash[12..]);
    address
}

/// EIP-55 mixed-case checksum encoding of an address.
pub fn checksum_address(address: &Address) -> String {
    let lower = hex::encode(address);
    let hash = keccak256(lower.as_bytes());
    let mut out = String::with_capacity(42);
    out.push_str("0x");
    for (i, c) in lower.chars().enumerate() {
        let nibble = (hash[i / 2] >> (if i % 2 == 0 { 4 } else { 0 })) & 0x0F;
        if c.is_ascii_alphabetic() && nibble >= 8 {
            out.push(c.to_ascii_uppercase());
        } else {
            out.push(c);
        }
    }
    out
}

/// `s <= n/2`.
fn is_low_s(s: &[u8; 32]) -> bool {
    s.as_slice() <= SECP256K1_HALF_ORDER.as_slice()
}

/// Valid v values: 0, 1, 27, 28
fn parse_recovery_id(v: u8) -> Result<RecoveryId, CryptoError> {
    let id = match v {
        0 | 27 => 0,
        1 | 28 => 1,
        _ => return Err(CryptoError::InvalidRecoveryId(v)),
    };
    RecoveryId::from_byte(id).ok_or(CryptoError::InvalidRecoveryId(v))
}

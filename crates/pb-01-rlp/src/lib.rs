//! # pb-01-rlp
//!
//! Recursive Length Prefix codec used by trie proof nodes, account records
//! and storage slot values.
//!
//! ## Role in System
//!
//! - **Leaf component**: pure, stateless functions consumed by the trie
//!   proof verifier (`pb-02`) and the deposit ledger (`pb-04`)
//! - **Strict decoding**: only canonical encodings are accepted, so every
//!   decoded item has exactly one byte representation
//!
//! ## Encoding Rules
//!
//! | First byte | Meaning |
//! |------------|---------|
//! | `0x00..=0x7f` | single byte, encodes itself |
//! | `0x80..=0xb7` | byte string, length `b - 0x80` (0..=55) |
//! | `0xb8..=0xbf` | byte string, `b - 0xb7` big-endian length bytes follow |
//! | `0xc0..=0xf7` | list, payload length `b - 0xc0` (0..=55) |
//! | `0xf8..=0xff` | list, `b - 0xf7` big-endian length bytes follow |

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod decode;
pub mod encode;
pub mod errors;
pub mod item;

pub use decode::{decode, decode_u64, decode_uint};
pub use encode::{encode, encode_bytes, encode_list, encode_u64, encode_uint};
pub use errors::{Malformation, RlpError};
pub use item::RlpItem;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

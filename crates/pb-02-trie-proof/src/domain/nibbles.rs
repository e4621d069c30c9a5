use super::errors::ShapeViolation;

// =============================================================================
// NIBBLES: Half-byte path representation
// =============================================================================

/// Nibble path for trie traversal.
///
/// Trie keys are converted to nibbles (half-bytes, 0-15) for traversal. A
/// 32-byte hashed key becomes 64 nibbles.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Nibbles(pub Vec<u8>);

impl Nibbles {
    /// Create nibbles from arbitrary bytes (high nibble first).
    pub fn from_bytes(bytes: &[u8]) -> Self {
        Nibbles(bytes.iter().flat_map(|b| [b >> 4, b & 0x0F]).collect())
    }

    /// Find common prefix length with another nibble slice.
    pub fn common_prefix_len(&self, other: &[u8]) -> usize {
        self.0
            .iter()
            .zip(other.iter())
            .take_while(|(a, b)| a == b)
            .count()
    }

    /// Number of nibbles.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the path has no nibbles.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Borrow the raw nibbles.
    pub fn as_slice(&self) -> &[u8] {
        &self.0
    }

    /// Encode nibbles with hex-prefix.
    ///
    /// Flag nibble: 0=extension even, 1=extension odd, 2=leaf even, 3=leaf odd.
    /// Odd paths pack their first nibble beside the flag; even paths pad with 0.
    pub fn encode_hex_prefix(&self, is_leaf: bool) -> Vec<u8> {
        let odd = self.len() % 2 == 1;
        let flag = if is_leaf { 2 } else { 0 } + u8::from(odd);

        let mut result = Vec::with_capacity(self.len() / 2 + 1);
        let rest = if odd {
            result.push((flag << 4) | self.0[0]);
            &self.0[1..]
        } else {
            result.push(flag << 4);
            &self.0[..]
        };
        for chunk in rest.chunks(2) {
            result.push((chunk[0] << 4) | chunk[1]);
        }
        result
    }

    /// Decode hex-prefix bytes into `(path, is_leaf)`.
    ///
    /// Rejects an empty encoding, a flag nibble above 3 and a non-zero
    /// padding nibble on even paths.
    pub fn decode_hex_prefix(encoded: &[u8]) -> Result<(Self, bool), ShapeViolation> {
        let first = *encoded.first().ok_or(ShapeViolation::EmptyPath)?;
        let flag = first >> 4;
        if flag > 3 {
            return Err(ShapeViolation::InvalidFlag(flag));
        }
        let is_leaf = flag >= 2;
        let odd = flag % 2 == 1;

        let mut nibbles = Vec::with_capacity(encoded.len() * 2);
        if odd {
            nibbles.push(first & 0x0F);
        } else if first & 0x0F != 0 {
            return Err(ShapeViolation::NonZeroPadding);
        }
        for &byte in &encoded[1..] {
            nibbles.push(byte >> 4);
            nibbles.push(byte & 0x0F);
        }

        Ok((Nibbles(nibbles), is_leaf))
    }
}

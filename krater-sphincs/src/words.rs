//! Word-aligned byte buffers.
//!
//! Hash inputs in this crate are sequences of 32-bit words (big-endian per
//! word) with an explicit partial trailing word, so 16-byte node values and
//! 22-byte compressed addresses move between tree levels without per-byte
//! repacking. The invariant throughout is
//! `byte_len == 4 * full_words + partial_len` with `partial_len` in `0..=3`
//! and the valid partial bytes left-aligned in the high end of the word.
//!
//! Malformed partial lengths are programming-contract violations and fail
//! loudly rather than being reported as recoverable errors.

use alloc::vec::Vec;

/// Fixed-length truncated tree-hash digest: 4 words, 16 bytes.
pub type HashOutput = [u32; 4];

/// Number of words in a [`HashOutput`].
pub const OUTPUT_WORDS: usize = 4;

/// Serialize a digest to its big-endian byte form.
#[must_use]
pub fn output_to_bytes(out: &HashOutput) -> [u8; 16] {
    let mut bytes = [0u8; 16];
    for (chunk, word) in bytes.chunks_exact_mut(4).zip(out.iter()) {
        chunk.copy_from_slice(&word.to_be_bytes());
    }
    bytes
}

/// Deserialize a digest from its big-endian byte form.
#[must_use]
pub fn output_from_bytes(bytes: &[u8; 16]) -> HashOutput {
    let mut out = [0u32; 4];
    for (word, chunk) in out.iter_mut().zip(bytes.chunks_exact(4)) {
        *word = u32::from_be_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]);
    }
    out
}

/// Mask keeping only the `len` high-order bytes of a word.
const fn partial_mask(len: usize) -> u32 {
    if len == 0 {
        0
    } else {
        !0u32 << (8 * (4 - len))
    }
}

/// Owned word-aligned buffer with a partial trailing word.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WordArray {
    words: Vec<u32>,
    partial: u32,
    partial_len: usize,
}

impl WordArray {
    /// Create a buffer from full words plus a partial trailing word.
    ///
    /// # Panics
    ///
    /// Panics if `partial_len > 3`.
    #[must_use]
    pub fn new(words: Vec<u32>, partial: u32, partial_len: usize) -> Self {
        assert!(partial_len <= 3, "partial byte count out of range");
        Self {
            words,
            partial: partial & partial_mask(partial_len),
            partial_len,
        }
    }

    /// Create an empty buffer.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            words: Vec::new(),
            partial: 0,
            partial_len: 0,
        }
    }

    /// Pack a byte slice into words, big-endian per word.
    #[must_use]
    pub fn from_bytes(bytes: &[u8]) -> Self {
        let mut chunks = bytes.chunks_exact(4);
        let words = chunks
            .by_ref()
            .map(|c| u32::from_be_bytes([c[0], c[1], c[2], c[3]]))
            .collect();
        let tail = chunks.remainder();
        let mut partial = 0u32;
        for (i, &b) in tail.iter().enumerate() {
            partial |= u32::from(b) << (8 * (3 - i));
        }
        Self {
            words,
            partial,
            partial_len: tail.len(),
        }
    }

    /// Total length in bytes.
    #[must_use]
    pub fn byte_len(&self) -> usize {
        4 * self.words.len() + self.partial_len
    }

    /// Append a full word.
    ///
    /// # Panics
    ///
    /// Panics if the buffer currently ends in a partial word.
    pub fn push_word(&mut self, word: u32) {
        assert_eq!(self.partial_len, 0, "buffer has a partial tail");
        self.words.push(word);
    }

    /// Append a single byte, extending or completing the partial word.
    pub fn push_byte(&mut self, byte: u8) {
        self.partial |= u32::from(byte) << (8 * (3 - self.partial_len));
        self.partial_len += 1;
        if self.partial_len == 4 {
            self.words.push(self.partial);
            self.partial = 0;
            self.partial_len = 0;
        }
    }

    /// Decompose into (full words, partial word, partial byte count).
    #[must_use]
    pub fn into_components(self) -> (Vec<u32>, u32, usize) {
        (self.words, self.partial, self.partial_len)
    }

    /// Borrow as a [`WordSpan`].
    #[must_use]
    pub fn as_span(&self) -> WordSpan<'_> {
        WordSpan {
            words: &self.words,
            partial: self.partial,
            partial_len: self.partial_len,
        }
    }

    /// Unpack to a byte vector, big-endian per word.
    #[must_use]
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(self.byte_len());
        for word in &self.words {
            bytes.extend_from_slice(&word.to_be_bytes());
        }
        bytes.extend_from_slice(&self.partial.to_be_bytes()[..self.partial_len]);
        bytes
    }
}

/// Borrowed word-aligned buffer with a partial trailing word.
#[derive(Clone, Copy, Debug)]
pub struct WordSpan<'a> {
    words: &'a [u32],
    partial: u32,
    partial_len: usize,
}

impl<'a> WordSpan<'a> {
    /// Create a span over full words plus a partial trailing word.
    ///
    /// # Panics
    ///
    /// Panics if `partial_len > 3`.
    #[must_use]
    pub fn new(words: &'a [u32], partial: u32, partial_len: usize) -> Self {
        assert!(partial_len <= 3, "partial byte count out of range");
        Self {
            words,
            partial: partial & partial_mask(partial_len),
            partial_len,
        }
    }

    /// Span over full words only.
    #[must_use]
    pub fn full(words: &'a [u32]) -> Self {
        Self {
            words,
            partial: 0,
            partial_len: 0,
        }
    }

    /// Total length in bytes.
    #[must_use]
    pub fn byte_len(&self) -> usize {
        4 * self.words.len() + self.partial_len
    }

    /// The full words.
    #[must_use]
    pub fn words(&self) -> &'a [u32] {
        self.words
    }

    /// The partial trailing word (valid bytes left-aligned).
    #[must_use]
    pub fn partial(&self) -> u32 {
        self.partial
    }

    /// Number of valid bytes in the partial word.
    #[must_use]
    pub fn partial_len(&self) -> usize {
        self.partial_len
    }

    /// The valid partial bytes as a big-endian prefix.
    #[must_use]
    pub fn partial_bytes(&self) -> ([u8; 4], usize) {
        (self.partial.to_be_bytes(), self.partial_len)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    #[test]
    fn byte_len_invariant() {
        let buf = WordArray::new(vec![1, 2, 3], 0xAABB_0000, 2);
        assert_eq!(buf.byte_len(), 14);

        let buf = WordArray::empty();
        assert_eq!(buf.byte_len(), 0);
    }

    #[test]
    fn from_bytes_roundtrip() {
        let bytes: Vec<u8> = (0u8..22).collect();
        let buf = WordArray::from_bytes(&bytes);
        assert_eq!(buf.byte_len(), 22);
        assert_eq!(buf.to_bytes(), bytes);
    }

    #[test]
    fn from_bytes_packs_big_endian() {
        let buf = WordArray::from_bytes(&[0x12, 0x34, 0x56, 0x78, 0x9A]);
        let (words, partial, partial_len) = buf.into_components();
        assert_eq!(words, vec![0x1234_5678]);
        assert_eq!(partial, 0x9A00_0000);
        assert_eq!(partial_len, 1);
    }

    #[test]
    fn partial_low_bytes_are_masked() {
        // Garbage below the valid partial bytes must not survive construction.
        let buf = WordArray::new(vec![], 0xAABB_CCDD, 2);
        assert_eq!(buf.to_bytes(), vec![0xAA, 0xBB]);
    }

    #[test]
    fn push_byte_completes_words() {
        let mut buf = WordArray::empty();
        for b in [0x01, 0x02, 0x03, 0x04, 0x05] {
            buf.push_byte(b);
        }
        assert_eq!(buf.byte_len(), 5);
        let (words, partial, partial_len) = buf.into_components();
        assert_eq!(words, vec![0x0102_0304]);
        assert_eq!(partial, 0x0500_0000);
        assert_eq!(partial_len, 1);
    }

    #[test]
    #[should_panic(expected = "partial tail")]
    fn push_word_rejects_partial_tail() {
        let mut buf = WordArray::new(vec![], 0xAA00_0000, 1);
        buf.push_word(7);
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn partial_len_out_of_range() {
        let _ = WordArray::new(vec![], 0, 4);
    }

    #[test]
    fn output_byte_roundtrip() {
        let out: HashOutput = [0x0102_0304, 0x0506_0708, 0x090A_0B0C, 0x0D0E_0F10];
        let bytes = output_to_bytes(&out);
        assert_eq!(bytes[0], 0x01);
        assert_eq!(bytes[15], 0x10);
        assert_eq!(output_from_bytes(&bytes), out);
    }
}

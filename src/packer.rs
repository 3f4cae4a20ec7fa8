//! Bit-stream packer: arbitrary-width integers in, fixed-width symbols out.
//!
//! The packer owns a symbol-width accumulator. `push` appends the low
//! `width` bits of a value most-significant-bit first; each time the
//! accumulator fills, the completed integer is mapped through the alphabet
//! and queued. `flush` drains the queue, closing any partial symbol with
//! zero padding.
//!
//! # Bit order
//!
//! With a 6-bit Base64 alphabet, `push(84, 8)` contributes `01010100`: the
//! first six bits (`010101` = 21, `'V'`) complete a symbol, and the last two
//! (`00`) wait left-justified at the top of the next one.

use crate::alphabet::Alphabet;
use crate::error::{Error, Result};

/// Low `n` bits set, for `n` in `0..=32`.
#[inline]
pub(crate) fn low_mask(n: usize) -> u32 {
    if n >= 32 {
        u32::MAX
    } else {
        (1u32 << n) - 1
    }
}

/// Streaming bit packer over a caller-supplied alphabet.
///
/// # Examples
///
/// ```
/// use symbits::{CharTable, Packer};
///
/// let hex = CharTable::new("0123456789abcdef");
/// let mut packer = Packer::new(4, hex).unwrap();
/// packer.push(0xAB, 8).unwrap();
/// packer.push(0xC, 4).unwrap();
/// assert_eq!(packer.flush_string(), "abc");
/// ```
pub struct Packer<A: Alphabet> {
    /// Bits per emitted symbol, fixed at construction.
    bits: usize,
    /// Bits still free in the symbol being assembled, in `1..=bits`.
    free: usize,
    /// Bits already placed in the current symbol, left-justified.
    acc: u32,
    /// Symbols finalized since the last flush.
    out: Vec<A::Symbol>,
    alphabet: A,
}

impl<A: Alphabet> std::fmt::Debug for Packer<A> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Packer")
            .field("symbol_width", &self.bits)
            .field("pending_symbols", &self.out.len())
            .field("partial_bits", &(self.bits - self.free))
            .finish()
    }
}

impl<A: Alphabet> Packer<A> {
    /// Create a packer emitting `symbol_width`-bit symbols through `alphabet`.
    pub fn new(symbol_width: usize, alphabet: A) -> Result<Self> {
        if !(1..=32).contains(&symbol_width) {
            return Err(Error::InvalidSymbolWidth(symbol_width));
        }
        Ok(Self {
            bits: symbol_width,
            free: symbol_width,
            acc: 0,
            out: Vec::new(),
            alphabet,
        })
    }

    /// The fixed number of bits each emitted symbol represents.
    pub fn symbol_width(&self) -> usize {
        self.bits
    }

    /// Number of bits buffered in the current partial symbol.
    pub fn partial_bits(&self) -> usize {
        self.bits - self.free
    }

    /// Append the low `width` bits of `value`, most-significant bit first.
    ///
    /// Queues zero, one, or several symbols depending on how `width`
    /// straddles symbol boundaries. `width` must be in `1..=32` and `value`
    /// must fit in it; on error the packer is unchanged.
    pub fn push(&mut self, value: u32, width: usize) -> Result<()> {
        if !(1..=32).contains(&width) {
            return Err(Error::WidthOutOfRange(width));
        }
        if width < 32 && value >= 1u32 << width {
            return Err(Error::ValueOverflow(value, width));
        }

        let mut k = width;
        while k > 0 {
            if k >= self.free {
                // Enough bits remain to finish the current symbol.
                k -= self.free;
                let filled = self.acc | ((value >> k) & low_mask(self.free));
                self.out.push(self.alphabet.encode_symbol(filled));
                self.acc = 0;
                self.free = self.bits;
            } else {
                // The remainder fits in the slot, left-justified below
                // whatever is already there.
                self.free -= k;
                self.acc |= (value & low_mask(k)) << self.free;
                break;
            }
        }
        Ok(())
    }

    /// `push(value, 8)`: the common whole-byte case.
    pub fn push_byte(&mut self, value: u8) -> Result<()> {
        self.push(u32::from(value), 8)
    }

    /// Drain every finished symbol, closing any partial symbol with zero
    /// padding, and reset the packer.
    ///
    /// Flushing twice with no intervening push returns an empty sequence the
    /// second time.
    pub fn flush(&mut self) -> Vec<A::Symbol> {
        let mut out = std::mem::take(&mut self.out);
        if self.free != self.bits {
            out.push(self.alphabet.encode_symbol(self.acc));
            self.acc = 0;
            self.free = self.bits;
        }
        out
    }
}

impl<A: Alphabet<Symbol = char>> Packer<A> {
    /// [`flush`](Packer::flush) collected into a `String`, for character
    /// alphabets.
    pub fn flush_string(&mut self) -> String {
        self.flush().into_iter().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::alphabet::{CharTable, IdentityAlphabet};

    const BASE64: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789+/";

    fn base64_packer() -> Packer<CharTable> {
        Packer::new(6, CharTable::new(BASE64)).unwrap()
    }

    #[test]
    fn test_push_whole_bytes() {
        let mut packer = base64_packer();
        for (input, expected) in [
            (&[84u8][..], "VA"),
            (&[84, 104][..], "VGg"),
            (&[84, 104, 103][..], "VGhn"),
            (&[84, 104, 103, 115][..], "VGhncw"),
            (&[84, 104, 103, 115, 46][..], "VGhncy4"),
        ] {
            for &byte in input {
                packer.push_byte(byte).unwrap();
            }
            assert_eq!(packer.flush_string(), expected);
        }
    }

    #[test]
    fn test_push_sub_symbol_widths() {
        let mut packer = base64_packer();

        // 111(000) -> 56 -> '4'
        packer.push(7, 3).unwrap();
        assert_eq!(packer.flush_string(), "4");

        // 111101 -> 61 -> '9'
        packer.push(7, 3).unwrap();
        packer.push(5, 3).unwrap();
        assert_eq!(packer.flush_string(), "9");

        // 111101 011(000) -> 61 24 -> "9Y"
        packer.push(7, 3).unwrap();
        packer.push(5, 3).unwrap();
        packer.push(3, 3).unwrap();
        assert_eq!(packer.flush_string(), "9Y");

        // 111101 011001 -> 61 25 -> "9Z"
        packer.push(7, 3).unwrap();
        packer.push(5, 3).unwrap();
        packer.push(3, 3).unwrap();
        packer.push(1, 3).unwrap();
        assert_eq!(packer.flush_string(), "9Z");
    }

    #[test]
    fn test_push_single_bits() {
        let mut packer = base64_packer();

        packer.push(0, 1).unwrap();
        assert_eq!(packer.flush_string(), "A");

        for bit in [1, 1, 0] {
            packer.push(bit, 1).unwrap();
        }
        assert_eq!(packer.flush_string(), "w");

        for bit in [1, 1, 0, 1, 0, 1] {
            packer.push(bit, 1).unwrap();
        }
        assert_eq!(packer.flush_string(), "1");

        for bit in [1, 1, 0, 1, 0, 1, 1] {
            packer.push(bit, 1).unwrap();
        }
        assert_eq!(packer.flush_string(), "1g");
    }

    #[test]
    fn test_push_full_words() {
        let mut packer = base64_packer();
        for word in [
            1416127776u32,
            1903520099,
            1797284466,
            1870097952,
            1718581280,
            1786080624,
            1931505526,
            1701978161,
            857762913,
            2054758500,
            1869050670,
        ] {
            packer.push(word, 32).unwrap();
        }
        assert_eq!(
            packer.flush_string(),
            "VGhlIHF1aWNrIGJyb3duIGZveCBqdW1wcyBvdmVyIDEzIGxhenkgZG9ncy4"
        );
    }

    #[test]
    fn test_push_mixed_widths() {
        let mut packer = base64_packer();
        packer.push(406201, 19).unwrap();
        packer.push(387698, 22).unwrap();
        packer.push(0, 1).unwrap();
        packer.push(7, 8).unwrap();
        packer.push(123, 8).unwrap();
        packer.push(65535, 16).unwrap();
        assert_eq!(packer.flush_string(), "xlci9TkB3v//w");

        packer.push(46, 8).unwrap();
        packer.push(46, 16).unwrap();
        packer.push(1, 3).unwrap();
        packer.push(0, 1).unwrap();
        assert_eq!(packer.flush_string(), "LgAuI");
    }

    #[test]
    fn test_flush_is_drained() {
        let mut packer = base64_packer();
        packer.push(7, 3).unwrap();
        assert_eq!(packer.flush_string(), "4");
        assert_eq!(packer.flush_string(), "");
        assert_eq!(packer.partial_bits(), 0);
    }

    #[test]
    fn test_padding_uses_zero_bits() {
        // 7 over 3 bits is 111; the flush pads to 111000 = 56.
        let mut packer = Packer::new(6, IdentityAlphabet::new(64)).unwrap();
        packer.push(7, 3).unwrap();
        assert_eq!(packer.flush(), vec![56]);
    }

    #[test]
    fn test_rejects_value_too_wide() {
        let mut packer = base64_packer();
        let err = packer.push(8, 3).unwrap_err();
        assert!(matches!(err, Error::ValueOverflow(8, 3)));
        // Failed push leaves no partial bits behind.
        assert_eq!(packer.partial_bits(), 0);
        assert_eq!(packer.flush_string(), "");
    }

    #[test]
    fn test_rejects_bad_widths() {
        let mut packer = base64_packer();
        assert!(matches!(
            packer.push(0, 0),
            Err(Error::WidthOutOfRange(0))
        ));
        assert!(matches!(
            packer.push(0, 33),
            Err(Error::WidthOutOfRange(33))
        ));
    }

    #[test]
    fn test_rejects_bad_symbol_width() {
        assert!(matches!(
            Packer::new(0, IdentityAlphabet::new(1)),
            Err(Error::InvalidSymbolWidth(0))
        ));
        assert!(matches!(
            Packer::new(33, IdentityAlphabet::new(1)),
            Err(Error::InvalidSymbolWidth(33))
        ));
    }

    #[test]
    fn test_width_32_accepts_any_value() {
        let mut packer = Packer::new(32, IdentityAlphabet::new(u32::MAX)).unwrap();
        packer.push(u32::MAX, 32).unwrap();
        assert_eq!(packer.flush(), vec![u32::MAX]);
    }
}

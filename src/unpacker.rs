//! Bit-stream unpacker: fixed-width symbols in, arbitrary-width integers out.
//!
//! `load` decodes and validates an entire symbol sequence up front; `pop`
//! then extracts runs of bits across symbol boundaries, and `offset` seeks
//! to an absolute bit position. The read cursor is the pair (symbol index,
//! unread bits within that symbol).
//!
//! Exhaustion is a sentinel, not an error: `pop` returns `Ok(None)` once the
//! stream runs dry, and a pop that asks for more bits than remain is clamped
//! to whatever is left.

use crate::alphabet::Alphabet;
use crate::error::{Error, Result};
use crate::packer::low_mask;

/// Streaming bit unpacker over a caller-supplied alphabet.
///
/// # Examples
///
/// ```
/// use symbits::{CharTable, Unpacker};
///
/// let hex = CharTable::new("0123456789abcdef");
/// let mut unpacker = Unpacker::new(4, hex).unwrap();
/// unpacker.load("abc".chars()).unwrap();
/// assert_eq!(unpacker.pop(8).unwrap(), Some(0xAB));
/// assert_eq!(unpacker.pop(4).unwrap(), Some(0xC));
/// assert_eq!(unpacker.pop(4).unwrap(), None);
/// ```
pub struct Unpacker<A: Alphabet> {
    /// Bits per loaded symbol, fixed at construction.
    bits: usize,
    /// The loaded source, pre-decoded to integers at `load` time.
    values: Vec<u32>,
    /// Index of the symbol the cursor sits in.
    pos: usize,
    /// Unread bits remaining in the symbol at `pos`, in `1..=bits`.
    residual: usize,
    /// Total unread bits; kept in lockstep with `(pos, residual)`.
    avail: usize,
    alphabet: A,
}

impl<A: Alphabet> std::fmt::Debug for Unpacker<A> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Unpacker")
            .field("symbol_width", &self.bits)
            .field("loaded_symbols", &self.values.len())
            .field("remaining_bits", &self.avail)
            .finish()
    }
}

impl<A: Alphabet> Unpacker<A> {
    /// Create an unpacker reading `symbol_width`-bit symbols through
    /// `alphabet`. Nothing is loaded; `pop` returns `Ok(None)` until
    /// [`load`](Unpacker::load) is called.
    pub fn new(symbol_width: usize, alphabet: A) -> Result<Self> {
        if !(1..=32).contains(&symbol_width) {
            return Err(Error::InvalidSymbolWidth(symbol_width));
        }
        Ok(Self {
            bits: symbol_width,
            values: Vec::new(),
            pos: 0,
            residual: symbol_width,
            avail: 0,
            alphabet,
        })
    }

    /// The fixed number of bits each loaded symbol represents.
    pub fn symbol_width(&self) -> usize {
        self.bits
    }

    /// Unread bits between the cursor and the end of the loaded sequence.
    pub fn remaining_bits(&self) -> usize {
        self.avail
    }

    /// Load a symbol sequence, replacing any previous one and rewinding the
    /// cursor to bit 0.
    ///
    /// The whole input is decoded through the alphabet before any state
    /// changes; on [`Error::InvalidSymbol`] the previously loaded sequence
    /// and cursor are untouched.
    pub fn load<I>(&mut self, input: I) -> Result<()>
    where
        I: IntoIterator<Item = A::Symbol>,
    {
        let mut values = Vec::new();
        for (i, symbol) in input.into_iter().enumerate() {
            match self.alphabet.decode_symbol(&symbol) {
                Some(v) => values.push(v),
                None => return Err(Error::InvalidSymbol(i)),
            }
        }
        self.avail = values.len() * self.bits;
        self.values = values;
        self.pos = 0;
        self.residual = self.bits;
        Ok(())
    }

    /// Extract the next `width` bits as an unsigned integer, most-significant
    /// bit first, in the same bit order [`crate::Packer::push`] writes.
    ///
    /// Returns `Ok(None)` once the stream is exhausted (or nothing is
    /// loaded), without consuming anything. A `width` larger than what
    /// remains is clamped: the final pop yields just the leftover bits.
    /// Widths above 32 are a precondition violation, not a silent wrap.
    pub fn pop(&mut self, width: usize) -> Result<Option<u32>> {
        if width > 32 {
            return Err(Error::WidthOutOfRange(width));
        }
        if self.avail == 0 {
            return Ok(None);
        }

        let mut k = width.min(self.avail);
        self.avail -= k;

        let mut value = self.values[self.pos];
        let mut binary = 0u32;
        while k > 0 {
            if k >= self.residual {
                // Take the rest of this symbol and step to the next one, if
                // there is one.
                k -= self.residual;
                binary |= (value & low_mask(self.residual)) << k;
                if self.pos + 1 < self.values.len() {
                    self.pos += 1;
                    self.residual = self.bits;
                    value = self.values[self.pos];
                }
            } else {
                // Take the top k of the residual bits.
                binary |= (value & low_mask(self.residual)) >> (self.residual - k);
                self.residual -= k;
                break;
            }
        }
        Ok(Some(binary))
    }

    /// `pop(8)`: the common whole-byte case.
    pub fn pop_byte(&mut self) -> Result<Option<u32>> {
        self.pop(8)
    }

    /// Seek to an absolute bit position measured from the start of the
    /// loaded sequence (not relative to the current cursor).
    ///
    /// Seeking past the end is not an error: the unpacker becomes exhausted
    /// and `pop` returns `Ok(None)` until the next `load` or a shorter seek.
    pub fn offset(&mut self, skip: usize) {
        self.pos = skip / self.bits;
        self.residual = self.bits - skip % self.bits;
        self.avail = (self.values.len() * self.bits).saturating_sub(skip);
    }
}

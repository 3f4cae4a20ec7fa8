//! The symbol↔integer mapping seam.
//!
//! The packer and unpacker never choose an alphabet; they drive whatever
//! mapping was injected at construction through this trait. This is the only
//! dispatch seam in the crate: `encode_symbol` must be total over
//! `[0, 2^symbol_width)`, and `decode_symbol` returns `None` for anything
//! outside the alphabet, which is how [`crate::Unpacker::load`] rejects bad
//! input before touching its cursor.

use std::collections::HashMap;

/// A caller-supplied mapping between symbol-width integers and symbols.
pub trait Alphabet {
    /// The symbol type this alphabet produces, e.g. `char` for text encodings.
    type Symbol;

    /// Map an integer in `[0, 2^symbol_width)` to its symbol.
    fn encode_symbol(&self, value: u32) -> Self::Symbol;

    /// Map a symbol back to its integer, or `None` if unrecognized.
    fn decode_symbol(&self, symbol: &Self::Symbol) -> Option<u32>;
}

/// A character alphabet backed by an ordered symbol table.
///
/// Each character is assigned its position in the input string, which is the
/// shape of every standard base-N alphabet (RFC 4648 Base64, Base32, Base16,
/// and any custom variant).
///
/// # Examples
///
/// ```
/// use symbits::{Alphabet, CharTable};
///
/// let hex = CharTable::new("0123456789abcdef");
/// assert_eq!(hex.encode_symbol(10), 'a');
/// assert_eq!(hex.decode_symbol(&'f'), Some(15));
/// assert_eq!(hex.decode_symbol(&'g'), None);
/// ```
#[derive(Debug, Clone)]
pub struct CharTable {
    symbols: Vec<char>,
    lookup: HashMap<char, u32>,
}

impl CharTable {
    /// Build a table from an ordered sequence of symbol characters.
    ///
    /// The table does not check that it covers a full power of two; sizing it
    /// to `2^symbol_width` entries is the caller's contract.
    pub fn new(symbols: &str) -> Self {
        let symbols: Vec<char> = symbols.chars().collect();
        let lookup = symbols
            .iter()
            .enumerate()
            .map(|(i, &c)| (c, i as u32))
            .collect();
        Self { symbols, lookup }
    }

    /// Number of symbols in the table.
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    /// Return true if the table holds no symbols.
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }
}

impl Alphabet for CharTable {
    type Symbol = char;

    /// # Panics
    ///
    /// Panics if `value` indexes past the table; the packer only presents
    /// values below `2^symbol_width`.
    fn encode_symbol(&self, value: u32) -> char {
        self.symbols[value as usize]
    }

    fn decode_symbol(&self, symbol: &char) -> Option<u32> {
        self.lookup.get(symbol).copied()
    }
}

/// An alphabet whose symbols are the integers themselves.
///
/// Useful when a packed stream stays numeric and only the bit-cursor
/// machinery is wanted. Decoding rejects values at or above the declared
/// alphabet size.
#[derive(Debug, Clone, Copy)]
pub struct IdentityAlphabet {
    size: u32,
}

impl IdentityAlphabet {
    /// Create an identity alphabet over `[0, size)`.
    pub fn new(size: u32) -> Self {
        Self { size }
    }
}

impl Alphabet for IdentityAlphabet {
    type Symbol = u32;

    fn encode_symbol(&self, value: u32) -> u32 {
        value
    }

    fn decode_symbol(&self, symbol: &u32) -> Option<u32> {
        (*symbol < self.size).then_some(*symbol)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_char_table_positions() {
        let table = CharTable::new("ABCD");
        assert_eq!(table.len(), 4);
        assert_eq!(table.encode_symbol(0), 'A');
        assert_eq!(table.encode_symbol(3), 'D');
        assert_eq!(table.decode_symbol(&'C'), Some(2));
        assert_eq!(table.decode_symbol(&'E'), None);
    }

    #[test]
    fn test_identity_bounds() {
        let id = IdentityAlphabet::new(64);
        assert_eq!(id.decode_symbol(&63), Some(63));
        assert_eq!(id.decode_symbol(&64), None);
        assert_eq!(id.encode_symbol(17), 17);
    }
}

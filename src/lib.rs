//! # Generic Base-N Bit-Stream Codec
//!
//! *Arbitrary-width integers in, caller-defined symbols out — and back.*
//!
//! ## Intuition First
//!
//! Think of a conveyor belt of fixed-size crates (symbols) and a pile of
//! parcels of wildly different sizes (your integers, each with a declared
//! bit width). The packer slices every parcel into bits and lays them into
//! crates front-to-back, sealing each crate the moment it is full. The
//! unpacker walks the same belt with a tape measure marked in bits: it can
//! read any run of bits off the crates, or jump straight to bit 4711 without
//! opening a single crate before it.
//!
//! ## The Problem
//!
//! Every base-N text encoding — Base64, Base32, Hex, Crockford, URL-safe
//! variants, one-off game save formats — is the *same* machine wearing a
//! different alphabet. Hard-coding the alphabet means rewriting the genuinely
//! tricky parts each time:
//!
//! - **Bit order**: values enter most-significant-bit first and must come
//!   back out the same way.
//! - **Cross-symbol carry**: a 19-bit value straddles four 6-bit symbols.
//! - **Partial symbols**: a flush mid-symbol zero-pads the tail.
//! - **Absolute seeking**: random access is measured in bits, not symbols.
//!
//! This crate keeps exactly that machinery and nothing else. The alphabet is
//! injected through the [`Alphabet`] trait; the core never chooses one.
//!
//! ## Implementation Notes
//!
//! - **[`Packer`]**: a symbol-width accumulator plus a queue of finished
//!   symbols. `push` may emit zero or many symbols; `flush` drains and
//!   zero-pads.
//! - **[`Unpacker`]**: a pre-decoded symbol buffer plus a bit cursor
//!   (symbol index, unread bits within it). `pop` clamps oversized requests
//!   to what remains and signals exhaustion with `Ok(None)`; `offset` seeks
//!   to an absolute bit position, and seeking past the end just exhausts the
//!   stream.
//! - All intermediate arithmetic is `u32`; single calls are capped at 32
//!   bits, and anything wider is rejected up front rather than silently
//!   wrapped.
//! - Each instance is plain owned state. `&mut self` enforces the
//!   single-writer discipline; distinct instances are fully independent.
//!
//! ## Example
//!
//! ```rust
//! use symbits::{CharTable, Packer, Unpacker};
//!
//! let base64 =
//!     CharTable::new("ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789+/");
//!
//! let mut packer = Packer::new(6, base64.clone()).unwrap();
//! packer.push(84, 8).unwrap();
//! packer.push(104, 8).unwrap();
//! packer.push(103, 8).unwrap();
//! assert_eq!(packer.flush_string(), "VGhn");
//!
//! let mut unpacker = Unpacker::new(6, base64).unwrap();
//! unpacker.load("VGhn".chars()).unwrap();
//! assert_eq!(unpacker.pop(8).unwrap(), Some(84));
//! unpacker.offset(16); // seek straight to the third byte
//! assert_eq!(unpacker.pop(8).unwrap(), Some(103));
//! ```
//!
//! ## References
//!
//! - Josefsson, S. (2006). RFC 4648: "The Base16, Base32, and Base64 Data
//!   Encodings."

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod alphabet;
pub mod error;
pub mod packer;
pub mod unpacker;

pub use alphabet::{Alphabet, CharTable, IdentityAlphabet};
pub use error::Error;
pub use packer::Packer;
pub use unpacker::Unpacker;

#![no_main]
use libfuzzer_sys::fuzz_target;
use symbits::{IdentityAlphabet, Packer, Unpacker};

fuzz_target!(|data: (u8, Vec<(u8, u32)>)| {
    let (width_raw, items) = data;
    let symbol_width = (width_raw as usize % 16) + 1;
    let alphabet = IdentityAlphabet::new(1u32 << symbol_width);

    let mut packer = Packer::new(symbol_width, alphabet).unwrap();
    let mut pushed = Vec::new();
    for (w, v) in items {
        let width = (w as usize % 32) + 1;
        let value = if width == 32 {
            v
        } else {
            v & ((1u32 << width) - 1)
        };
        packer.push(value, width).unwrap();
        pushed.push((width, value));
    }

    let encoded = packer.flush();
    let mut unpacker = Unpacker::new(symbol_width, alphabet).unwrap();
    unpacker.load(encoded).unwrap();
    for (width, value) in pushed {
        assert_eq!(unpacker.pop(width).unwrap(), Some(value));
    }

    // Flush padding is strictly less than one symbol and all zero.
    let padding = unpacker.remaining_bits();
    assert!(padding < symbol_width);
    if padding > 0 {
        assert_eq!(unpacker.pop(padding).unwrap(), Some(0));
    }
    assert_eq!(unpacker.pop(1).unwrap(), None);
});

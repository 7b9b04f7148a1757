#![no_main]

// Converting a ROM to the other layout and back must reproduce it exactly.

use genesis_rom_convert::{convert, ConvertError, FormatTag, RomImage};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Ok(rom) = RomImage::from_slice(data) else {
        return;
    };

    for (from, to) in [
        (FormatTag::Interleaved, FormatTag::Linear),
        (FormatTag::Linear, FormatTag::Interleaved),
    ] {
        match convert(&rom, from, to) {
            Ok(converted) => {
                assert_eq!(converted.len(), rom.len(), "Conversion changed the size");

                let restored = convert(&converted, to, from).expect("Inverse conversion failed");
                assert_eq!(restored.data(), rom.data(), "Roundtrip did not restore the input");
            }
            Err(ConvertError::MalformedInput { len }) => {
                assert_eq!(len, rom.len());
                assert!(len % 2 == 1, "Even length ROM was rejected");
            }
            Err(e) => panic!("Unexpected error: {e}"),
        }
    }
});

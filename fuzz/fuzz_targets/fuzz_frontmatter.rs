#![no_main]

use libfuzzer_sys::fuzz_target;
use starsite::content::{frontmatter, parse_narrative};

fuzz_target!(|data: &[u8]| {
    if let Ok(source) = std::str::from_utf8(data) {
        if let Some(fm) = frontmatter::split(source) {
            assert!(fm.block.len() <= source.len());
        }

        // Any outcome is fine as long as nothing panics.
        let _ = parse_narrative("fuzz", source);
    }
});

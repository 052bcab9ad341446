#![no_main]
use libfuzzer_sys::fuzz_target;
use lcdbitmap::{FrameBuffer, LoadRequest, Limits, Permissiveness};
use std::io::Cursor;

fuzz_target!(|data: &[u8]| {
    // Sub-byte depths and zero-width rows walk without consuming input,
    // so cap the walk.
    let limits = Limits {
        max_width: Some(4096),
        max_height: Some(4096),
        max_pixels: Some(1 << 16),
    };
    let mut fb = FrameBuffer::new(160, 128);

    // Every mode must never panic.
    for (permissiveness, padded) in [
        (Permissiveness::Permissive, false),
        (Permissiveness::Permissive, true),
        (Permissiveness::Strict, true),
    ] {
        let _ = LoadRequest::new(Cursor::new(data))
            .with_limits(&limits)
            .with_permissiveness(permissiveness)
            .with_padded_rows(padded)
            .load(&mut fb, enough::Unstoppable);
    }
    let _ = lcdbitmap::probe_bitmap(Cursor::new(data));
});

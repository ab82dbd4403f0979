#![no_main]

use bjdata_core::fuzzing::NoopHost;
use bjdata_core::{DecoderBuffer, DecoderOptions, Source};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let mut buffer = DecoderBuffer::new(Source::fixed(data), DecoderOptions::default(), NoopHost);
    let _ = buffer.decode();
});

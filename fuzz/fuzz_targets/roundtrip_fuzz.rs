#![no_main]
use deltarle::engine::{self, Input};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if data.is_empty() {
        return;
    }

    // Use first byte as control flags.
    let flags = data[0];
    let payload = &data[1..];

    let input = if flags & 1 != 0 {
        // Reinterpret the payload as little-endian i64 samples.
        let samples = payload
            .chunks_exact(8)
            .map(|c| i64::from_le_bytes(c.try_into().unwrap()))
            .collect();
        Input::Log(samples)
    } else {
        Input::Text(payload.to_vec())
    };

    let analysis = engine::analyze(input);
    assert_eq!(
        analysis.metrics().compressed_size,
        analysis.runs().len() * 2
    );
    analysis.verify().unwrap();
});

//! Bitstream to text packing

/// Pack demodulated bits into bytes and decode each byte as a character
///
/// Bits are grouped eight at a time in production order, first-emitted bit
/// most significant. A trailing group shorter than eight bits is silently
/// dropped — it cannot form a character.
pub fn bits_to_text(bits: &[bool]) -> String {
    bits.chunks_exact(8)
        .map(|group| {
            let byte = group.iter().fold(0u8, |acc, &bit| (acc << 1) | bit as u8);
            byte as char
        })
        .collect()
}

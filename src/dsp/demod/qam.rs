//! Hard-decision 16-QAM symbol demodulator
//!
//! Square 4×4 constellation on amplitude levels {−3, −1, 1, 3} per axis,
//! four bits per symbol, no soft metric and no error correction.

use num_complex::Complex64;

/// Amplitude decision levels of the 4×4 grid, in pinned order
///
/// The order matters: midpoint ties resolve to the earlier level.
pub const LEVELS: [f64; 4] = [-3.0, -1.0, 1.0, 3.0];

/// Two-bit group emitted for each level in `LEVELS`
const LEVEL_BITS: [[bool; 2]; 4] = [
    [true, false],  // -3 -> 10
    [true, true],   // -1 -> 11
    [false, true],  //  1 -> 01
    [false, false], //  3 -> 00
];

/// Hard-slice received symbols into bits, four per symbol
///
/// The quadrature and in-phase components are quantized independently to
/// the nearest grid level, and the quadrature bit group is emitted before
/// the in-phase group.
pub fn demodulate(symbols: &[Complex64]) -> Vec<bool> {
    let mut bits = Vec::with_capacity(symbols.len() * 4);
    for symbol in symbols {
        bits.extend_from_slice(&LEVEL_BITS[nearest_level(symbol.im)]);
        bits.extend_from_slice(&LEVEL_BITS[nearest_level(symbol.re)]);
    }
    bits
}

/// Index into `LEVELS` of the level nearest to `value`
///
/// Strict `<` keeps the first minimum, pinning midpoint ties to the
/// lowest-indexed level.
fn nearest_level(value: f64) -> usize {
    let mut best = 0;
    let mut best_distance = f64::INFINITY;
    for (idx, level) in LEVELS.iter().enumerate() {
        let distance = (value - level).abs();
        if distance < best_distance {
            best_distance = distance;
            best = idx;
        }
    }
    best
}

/// Map four bits (quadrature group first) back onto a grid symbol
///
/// Inverse of the slicer's mapping; useful for generating test signals.
pub fn symbol_for_bits(bits: [bool; 4]) -> Complex64 {
    let q = LEVELS[level_for_group([bits[0], bits[1]])];
    let i = LEVELS[level_for_group([bits[2], bits[3]])];
    Complex64::new(i, q)
}

/// Modulate a bitstream onto grid symbols, four bits per symbol
///
/// A trailing group shorter than four bits is dropped.
pub fn modulate_bits(bits: &[bool]) -> Vec<Complex64> {
    bits.chunks_exact(4)
        .map(|chunk| symbol_for_bits([chunk[0], chunk[1], chunk[2], chunk[3]]))
        .collect()
}

fn level_for_group(group: [bool; 2]) -> usize {
    match group {
        [true, false] => 0,  // 10 -> -3
        [true, true] => 1,   // 11 -> -1
        [false, true] => 2,  // 01 ->  1
        [false, false] => 3, // 00 ->  3
    }
}

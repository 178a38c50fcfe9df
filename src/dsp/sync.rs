//! Preamble-based frame synchronization

use crate::types::{ReceiverError, ReceiverResult};
use num_complex::Complex64;

/// Result of locating the preamble inside a decimated symbol sequence
#[derive(Debug, Clone)]
pub struct SyncResult {
    /// Offset where the preamble begins
    pub preamble_start: usize,
    /// Index of the first data symbol (preamble start + preamble length)
    pub frame_start: usize,
    /// Peak correlation magnitude, exposed for diagnostics
    pub peak_magnitude: f64,
}

/// Cross-correlate `signal` against the known preamble and locate the frame
///
/// Valid-mode correlation: `corr[o] = Σ signal[o+k]·conj(preamble[k])` for
/// every offset where the preamble fully overlaps the signal. The frame
/// start is the global maximum of `|corr|`; on ties the first offset wins.
/// A capture is assumed to hold exactly one frame, so no peak threshold is
/// applied — but a runner-up close to the winner is logged.
pub fn locate_frame(signal: &[Complex64], preamble: &[Complex64]) -> ReceiverResult<SyncResult> {
    if preamble.is_empty() {
        return Err(ReceiverError::EmptySignal("preamble contains no symbols"));
    }
    if signal.is_empty() {
        return Err(ReceiverError::EmptySignal(
            "decimated signal contains no symbols",
        ));
    }
    if preamble.len() > signal.len() {
        return Err(ReceiverError::PreambleTooLong {
            preamble: preamble.len(),
            signal: signal.len(),
        });
    }

    let correlation = cross_correlate(signal, preamble);

    let mut best_offset = 0;
    let mut best_magnitude = f64::NEG_INFINITY;
    for (offset, c) in correlation.iter().enumerate() {
        let magnitude = c.norm();
        if magnitude > best_magnitude {
            best_magnitude = magnitude;
            best_offset = offset;
        }
    }

    let runner_up = correlation
        .iter()
        .enumerate()
        .filter(|(offset, _)| *offset != best_offset)
        .map(|(_, c)| c.norm())
        .fold(0.0, f64::max);
    if runner_up > 0.9 * best_magnitude {
        log::warn!(
            "ambiguous correlation peak: best {:.3} at offset {}, runner-up {:.3}",
            best_magnitude,
            best_offset,
            runner_up
        );
    }

    Ok(SyncResult {
        preamble_start: best_offset,
        frame_start: best_offset + preamble.len(),
        peak_magnitude: best_magnitude,
    })
}

/// Valid-mode cross-correlation with the conjugated preamble
fn cross_correlate(signal: &[Complex64], preamble: &[Complex64]) -> Vec<Complex64> {
    let span = signal.len() - preamble.len() + 1;
    (0..span)
        .map(|offset| {
            signal[offset..offset + preamble.len()]
                .iter()
                .zip(preamble.iter())
                .map(|(r, p)| r * p.conj())
                .sum()
        })
        .collect()
}

//! I/Q merge and fixed-factor decimation

use num_complex::Complex64;

/// Merge filtered I/Q sequences into complex baseband and keep every
/// `factor`-th sample: `r[k] = I[k·K] + j·Q[k·K]`.
///
/// The output holds exactly `floor(N / K)` symbols; a trailing partial
/// stride is dropped. No anti-aliasing is done here — band-limiting is
/// entirely the lowpass stage's job, and adding a filter at this stage
/// would change the output.
pub fn downsample(i: &[f64], q: &[f64], factor: usize) -> Vec<Complex64> {
    assert_eq!(i.len(), q.len(), "I/Q sequences must be index-aligned");
    assert!(factor > 0, "decimation factor must be at least 1");

    let count = i.len() / factor;
    (0..count)
        .map(|k| Complex64::new(i[k * factor], q[k * factor]))
        .collect()
}

//! Quadrature downconversion

use std::f64::consts::PI;

/// Mix a real capture with local oscillator references at the carrier
/// frequency, producing in-phase and quadrature baseband components.
///
/// `I[n] = x[n]·cos(2π·f_c·n / f_s)`, `Q[n] = x[n]·sin(2π·f_c·n / f_s)`.
/// The products still contain an image at twice the carrier frequency; the
/// lowpass stage removes it.
pub fn downconvert(samples: &[f64], carrier_freq: f64, sample_rate: f64) -> (Vec<f64>, Vec<f64>) {
    let omega = 2.0 * PI * carrier_freq / sample_rate;

    let mut i = Vec::with_capacity(samples.len());
    let mut q = Vec::with_capacity(samples.len());

    for (n, &sample) in samples.iter().enumerate() {
        let phase = omega * n as f64;
        i.push(sample * phase.cos());
        q.push(sample * phase.sin());
    }

    (i, q)
}

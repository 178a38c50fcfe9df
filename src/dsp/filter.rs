//! Frequency-domain brick-wall lowpass filter

use num_complex::Complex64;
use rustfft::FftPlanner;

/// Ideal lowpass filter realized as a full-block FFT, bin zeroing, and
/// inverse FFT.
///
/// The whole capture is transformed as a single block (no streaming, no
/// overlap-save), which costs O(N log N) and keeps every passband bin
/// bit-exact, but produces circular-convolution artifacts at the first and
/// last samples of the block. The frame of interest must stay away from
/// both block edges.
pub struct BrickwallLowpass {
    /// Cutoff frequency in Hz; bins strictly above it are zeroed
    cutoff_freq: f64,
    /// Sample rate in Hz
    sample_rate: f64,
    /// FFT planner (reused across calls; plans are cached per length)
    planner: FftPlanner<f64>,
}

impl BrickwallLowpass {
    /// Create a new lowpass filter
    pub fn new(cutoff_freq: f64, sample_rate: f64) -> Self {
        Self {
            cutoff_freq,
            sample_rate,
            planner: FftPlanner::new(),
        }
    }

    /// Filter one real sequence, preserving its length
    ///
    /// Returns the real part of the inverse transform; the imaginary
    /// residual is round-trip numerical noise, not signal.
    pub fn apply(&mut self, samples: &[f64]) -> Vec<f64> {
        let n = samples.len();
        if n == 0 {
            return Vec::new();
        }

        let mut buffer: Vec<Complex64> =
            samples.iter().map(|&s| Complex64::new(s, 0.0)).collect();

        let forward = self.planner.plan_fft_forward(n);
        forward.process(&mut buffer);

        for (k, bin) in buffer.iter_mut().enumerate() {
            if bin_frequency(k, n, self.sample_rate).abs() > self.cutoff_freq {
                *bin = Complex64::new(0.0, 0.0);
            }
        }

        let inverse = self.planner.plan_fft_inverse(n);
        inverse.process(&mut buffer);

        // rustfft does not normalize the round trip; scale by 1/N.
        let scale = 1.0 / n as f64;
        buffer.iter().map(|c| c.re * scale).collect()
    }
}

/// Signal frequency of FFT bin `k` in an `n`-point transform
///
/// Standard fftfreq layout: the first half of the bins map to
/// `k·f_s/n`, the second half to the negative mirror `(k−n)·f_s/n`.
pub fn bin_frequency(k: usize, n: usize, sample_rate: f64) -> f64 {
    let half = (n + 1) / 2;
    if k < half {
        k as f64 * sample_rate / n as f64
    } else {
        (k as f64 - n as f64) * sample_rate / n as f64
    }
}

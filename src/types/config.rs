//! Receiver configuration

/// Receiver chain configuration
///
/// An explicit configuration record is passed through the pipeline instead
/// of module-level constants, so independent receiver runs share no state.
#[derive(Debug, Clone)]
pub struct ReceiverConfig {
    /// Carrier frequency in Hz
    pub carrier_freq: f64,
    /// Capture sample rate in Hz
    pub sample_rate: f64,
    /// Lowpass cutoff frequency in Hz
    pub cutoff_freq: f64,
    /// Decimation factor; must equal the transmit samples-per-symbol count
    /// for correlation and demodulation to be meaningful
    pub decimation: usize,
}

impl Default for ReceiverConfig {
    fn default() -> Self {
        Self {
            carrier_freq: 20.0, // Hz
            sample_rate: 100.0, // Hz
            cutoff_freq: 5.1,   // Hz
            decimation: 10,
        }
    }
}

impl ReceiverConfig {
    /// Validate configuration parameters
    pub fn validate(&self) -> Result<(), String> {
        if self.sample_rate <= 0.0 {
            return Err(format!(
                "sample rate {} Hz must be positive",
                self.sample_rate
            ));
        }

        if self.carrier_freq <= 0.0 {
            return Err(format!(
                "carrier frequency {} Hz must be positive",
                self.carrier_freq
            ));
        }

        if self.cutoff_freq <= 0.0 {
            return Err(format!(
                "cutoff frequency {} Hz must be positive",
                self.cutoff_freq
            ));
        }

        if self.decimation == 0 {
            return Err("decimation factor must be at least 1".to_string());
        }

        // A cutoff at or above Nyquist leaves every bin below it, so the
        // lowpass stage passes the signal through unchanged.
        if self.cutoff_freq >= self.sample_rate / 2.0 {
            log::warn!(
                "cutoff {} Hz is at or above Nyquist ({} Hz); the lowpass filter will not attenuate anything",
                self.cutoff_freq,
                self.sample_rate / 2.0
            );
        }

        if self.carrier_freq >= self.sample_rate / 2.0 {
            log::warn!(
                "carrier {} Hz is at or above Nyquist ({} Hz); the capture cannot represent it",
                self.carrier_freq,
                self.sample_rate / 2.0
            );
        }

        Ok(())
    }

    /// Symbol rate implied by the decimation factor, in baud
    pub fn symbol_rate(&self) -> f64 {
        self.sample_rate / self.decimation as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ReceiverConfig::default();
        assert_eq!(config.carrier_freq, 20.0);
        assert_eq!(config.sample_rate, 100.0);
        assert_eq!(config.cutoff_freq, 5.1);
        assert_eq!(config.decimation, 10);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_zero_decimation() {
        let config = ReceiverConfig {
            decimation: 0,
            ..ReceiverConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_nonpositive_rates() {
        let config = ReceiverConfig {
            sample_rate: 0.0,
            ..ReceiverConfig::default()
        };
        assert!(config.validate().is_err());

        let config = ReceiverConfig {
            carrier_freq: -20.0,
            ..ReceiverConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_cutoff_above_nyquist_is_not_an_error() {
        // The filter silently no-ops in this case; validate only warns.
        let config = ReceiverConfig {
            cutoff_freq: 60.0,
            ..ReceiverConfig::default()
        };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_symbol_rate() {
        let config = ReceiverConfig::default();
        assert!((config.symbol_rate() - 10.0).abs() < 1e-12);
    }
}

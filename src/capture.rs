//! Capture and preamble file loading
//!
//! Both inputs are plain ASCII text with one value per line: the capture
//! holds real-valued samples (integer or floating-point literals), the
//! preamble holds complex symbols written like `1.0+0.5i`. Each file is
//! opened, fully read, and closed before the next pipeline stage runs.

use crate::types::{ReceiverError, ReceiverResult};
use num_complex::Complex64;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Load a real-valued capture, one sample per line
///
/// Blank lines are skipped; anything else that does not parse as a decimal
/// literal is a fatal parse error carrying the 1-based line number.
pub fn load_capture(path: &Path) -> ReceiverResult<Vec<f64>> {
    let file = File::open(path).map_err(|e| ReceiverError::Io {
        path: path.to_path_buf(),
        source: e,
    })?;
    let reader = BufReader::new(file);

    let mut samples = Vec::new();
    for (idx, line) in reader.lines().enumerate() {
        let line = line.map_err(|e| ReceiverError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }

        let value: f64 = trimmed.parse().map_err(|_| ReceiverError::Parse {
            path: path.to_path_buf(),
            line: idx + 1,
            reason: format!("invalid sample value {:?}", trimmed),
        })?;
        samples.push(value);
    }

    if samples.is_empty() {
        return Err(ReceiverError::EmptySignal("capture contains no samples"));
    }

    log::debug!("loaded {} samples from {}", samples.len(), path.display());
    Ok(samples)
}

/// Load the known preamble reference, one complex symbol per line
pub fn load_preamble(path: &Path) -> ReceiverResult<Vec<Complex64>> {
    let file = File::open(path).map_err(|e| ReceiverError::Io {
        path: path.to_path_buf(),
        source: e,
    })?;
    let reader = BufReader::new(file);

    let mut symbols = Vec::new();
    for (idx, line) in reader.lines().enumerate() {
        let line = line.map_err(|e| ReceiverError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }

        let symbol = parse_complex(trimmed).ok_or_else(|| ReceiverError::Parse {
            path: path.to_path_buf(),
            line: idx + 1,
            reason: format!("invalid complex literal {:?}", trimmed),
        })?;
        symbols.push(symbol);
    }

    if symbols.is_empty() {
        return Err(ReceiverError::EmptySignal("preamble contains no symbols"));
    }

    log::debug!("loaded {} preamble symbols from {}", symbols.len(), path.display());
    Ok(symbols)
}

/// Parse a complex literal of the form `<real><sign><imag>i`
///
/// The grammar is parsed by hand so it does not depend on any host-language
/// complex syntax. Both `i` and `j` are accepted as the imaginary-unit
/// marker, and exponent notation is allowed in either mantissa.
fn parse_complex(s: &str) -> Option<Complex64> {
    let body = s.strip_suffix(['i', 'j'])?;

    // The imaginary part starts at the last sign that is neither the
    // leading sign nor part of an exponent.
    let mut split = None;
    for (pos, c) in body.char_indices().skip(1) {
        if (c == '+' || c == '-') && !matches!(body.as_bytes()[pos - 1], b'e' | b'E') {
            split = Some(pos);
        }
    }
    let pos = split?;

    let re: f64 = body[..pos].parse().ok()?;
    let im: f64 = body[pos..].parse().ok()?;
    Some(Complex64::new(re, im))
}

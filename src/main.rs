// Module declarations
mod capture;
mod dsp;
mod receiver;
mod types;

use anyhow::{Context, Result};
use clap::Parser;
use receiver::Receiver;
use std::path::PathBuf;
use types::ReceiverConfig;

/// Recover a 16-QAM-encoded text message from a recorded capture
#[derive(Parser, Debug)]
#[command(name = "qam-rx", version, about)]
struct Args {
    /// Capture file, one real-valued sample per line
    capture: PathBuf,

    /// Preamble reference file, one complex symbol per line (e.g. `1.0+0.5i`)
    preamble: PathBuf,

    /// Carrier frequency in Hz
    #[arg(long, default_value_t = ReceiverConfig::default().carrier_freq)]
    carrier_freq: f64,

    /// Capture sample rate in Hz
    #[arg(long, default_value_t = ReceiverConfig::default().sample_rate)]
    sample_rate: f64,

    /// Lowpass cutoff frequency in Hz
    #[arg(long, default_value_t = ReceiverConfig::default().cutoff_freq)]
    cutoff_freq: f64,

    /// Decimation factor (transmit samples per symbol)
    #[arg(long, default_value_t = ReceiverConfig::default().decimation)]
    decimation: usize,
}

fn main() -> Result<()> {
    env_logger::init();

    if let Err(e) = run() {
        log::error!("Receiver error: {:#}", e);
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }

    Ok(())
}

fn run() -> Result<()> {
    let args = Args::parse();

    let config = ReceiverConfig {
        carrier_freq: args.carrier_freq,
        sample_rate: args.sample_rate,
        cutoff_freq: args.cutoff_freq,
        decimation: args.decimation,
    };
    config
        .validate()
        .map_err(|reason| anyhow::anyhow!("invalid configuration: {}", reason))?;

    log::info!(
        "decoding {} at {} baud (carrier {} Hz, sample rate {} Hz)",
        args.capture.display(),
        config.symbol_rate(),
        config.carrier_freq,
        config.sample_rate
    );

    let samples = capture::load_capture(&args.capture).context("loading capture")?;
    let preamble = capture::load_preamble(&args.preamble).context("loading preamble")?;

    let receiver = Receiver::new(config);
    let frame = receiver.run(&samples, &preamble)?;

    println!("peak correlation magnitude: {:.3}", frame.peak_correlation);
    println!("{}", frame.text);

    Ok(())
}

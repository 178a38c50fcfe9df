pub mod qam;

// Re-export commonly used operations
pub use qam::demodulate;

//! Simulated barcode scanning.

pub mod simulator;

pub use simulator::{pick_uniform, ScanOutcome, ScanSimulator};

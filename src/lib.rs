//! Recover linear congruential generator parameters from five consecutive
//! outputs and predict the next one.
//!
//! - [`math`] - extended Euclid and modular inverse
//! - [`recovery`] - parallel brute-force search over candidate moduli
//! - [`generator`] - forward LCG for producing sample windows
//! - [`config`] - YAML search options

pub mod config;
pub mod generator;
pub mod math;
pub mod recovery;
pub mod types;

pub use config::{DEFAULT_BOUND, SearchConfig};
pub use generator::Lcg;
pub use recovery::{LcgRecoverer, RecoveryError, SearchReport, find_parameters, predict_next};
pub use types::{RecoveredParameters, SampleWindow, SearchOutcome, SearchStats};

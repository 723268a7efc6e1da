//! Analysis runners for gain, noise and sweeps.

pub mod gain;
pub mod noise;
pub mod sweep;
pub mod types;

pub use gain::run_gain;
pub use noise::run_noise;
pub use sweep::run_sweep;
pub use types::list_types;

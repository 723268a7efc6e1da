//! Cascade analysis for rfchain.
//!
//! This crate provides:
//! - [`SignalChain`]: an ordered, labelled chain of components with
//!   point-to-point gain and reference-point noise queries
//! - Frequency sweep generation and batch evaluation, parallel for large sweeps
//! - Noise budgets with per-component contributions
//! - Chain serialization via [`ChainRecord`]
//! - Text summaries, annotations and CSV tabulation

pub mod chain;
pub mod config;
pub mod error;
pub mod noise;
pub mod parallel;
pub mod record;
pub mod summary;
pub mod sweep;

pub use chain::{ChainRef, SignalChain};
pub use config::AnalysisConfig;
pub use error::{Error, Result};
pub use noise::{NoiseBreakdown, NoiseContribution};
pub use parallel::ParallelSweepConfig;
pub use record::{ChainRecord, ComponentRecord};
pub use summary::Annotation;
pub use sweep::{GainSweep, NoiseSweep, SweepConfig, SweepType};

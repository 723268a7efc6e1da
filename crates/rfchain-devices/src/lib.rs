//! Hardware models for rfchain.
//!
//! This crate provides datasheet-backed models for:
//! - Amplifiers: cryogenic and room-temperature LNAs, plus a closed-form fixed amplifier
//! - Cables: room-temperature coax families and two-temperature cryogenic coax
//! - Attenuators with analytic thermal noise
//! - High-pass filters
//! - The AD9082 ADC input
//!
//! Every model implements [`rfchain_core::Component`]. [`Device`] wraps them
//! in a closed enum that can be built by type name from [`Params`], using the
//! declarative registry in [`metadata`].

pub mod amplifier;
pub mod attenuator;
pub mod cable;
pub mod converter;
pub mod cryo_cable;
mod datasheet;
pub mod device;
pub mod error;
pub mod filter;
pub mod metadata;
pub mod params;

pub use amplifier::{AmplifierModel, DatasheetAmplifier, FixedAmplifier};
pub use attenuator::Attenuator;
pub use cable::{Cable, CableFamily};
pub use converter::Ad9082Adc;
pub use cryo_cable::{CryoCable, CryoCableFamily};
pub use device::Device;
pub use error::{Error, Result};
pub use filter::{FilterModel, HighPassFilter};
pub use metadata::{Category, ComponentInfo, ParamKind, ParamSpec};
pub use params::{ParamValue, Params, params};

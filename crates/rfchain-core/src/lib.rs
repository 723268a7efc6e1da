//! Core types for rfchain.
//!
//! This crate provides the building blocks every hardware model and the
//! cascade solver rely on: physical constants and dB/power conversions,
//! frequency characterization tables with a fixed interpolation scheme per
//! table kind, and the [`Component`] contract.

pub mod component;
pub mod error;
pub mod table;
pub mod units;

pub use component::{Component, ComponentKind, Response};
pub use error::{Error, Result};
pub use table::{Interpolation, RangePolicy, Sample, Table, check_frequency};
pub use units::BOLTZMANN;

//! Amplifier models.
//!
//! Amplifier noise is characterized by an equivalent input noise temperature
//! `Te(f)` (or a noise figure converted to one). The component reports it
//! referred to its output: `k_B·Te(f)·G(f)`.

use rfchain_core::{
    Component, ComponentKind, Error, RangePolicy, Result, Sample, Table, check_frequency,
    units::{BOLTZMANN, db_to_linear, noise_temperature_from_figure},
};

use crate::datasheet::{GHZ, MHZ, gain_table, noise_table};

/// Datasheet-characterized amplifier parts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AmplifierModel {
    /// Cryogenic LNA (Cryo Electronics), 0–3 GHz.
    CryoElecLna,
    /// Mini-Circuits ZX60-3018G+ room-temperature amplifier.
    Zx60_3018gPlus,
    /// ASU 3 GHz cryogenic LNA.
    Asu3GhzLna,
}

impl AmplifierModel {
    pub const ALL: [AmplifierModel; 3] = [
        AmplifierModel::CryoElecLna,
        AmplifierModel::Zx60_3018gPlus,
        AmplifierModel::Asu3GhzLna,
    ];

    /// Registered component type name.
    pub fn type_name(self) -> &'static str {
        match self {
            AmplifierModel::CryoElecLna => "CryoElecLna",
            AmplifierModel::Zx60_3018gPlus => "Zx60_3018gPlus",
            AmplifierModel::Asu3GhzLna => "Asu3GhzLna",
        }
    }

    /// Look up a model by its registered type name.
    pub fn from_type_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|m| m.type_name() == name)
    }

    fn tables(self) -> Result<(Table, Table)> {
        match self {
            AmplifierModel::CryoElecLna => {
                let freqs = [0.0, 500.0, 1000.0, 1500.0, 2000.0, 2250.0, 2500.0, 2750.0, 3000.0];
                // The two highest noise temperatures are estimates.
                let te = [5.0, 4.0, 4.0, 4.0, 5.0, 7.0, 14.0, 28.0, 56.0];
                let gain = [32.0, 33.0, 32.0, 31.0, 30.0, 27.0, 25.0, 23.0, 22.0];
                Ok((
                    gain_table(&freqs, MHZ, &gain)?,
                    noise_table(&freqs, MHZ, &te.map(|t| BOLTZMANN * t))?,
                ))
            }
            AmplifierModel::Zx60_3018gPlus => {
                // Gain as measured on the bench; noise figure from the datasheet.
                let gain_freqs = [0.0, 58.0, 470.0, 961.8, 1302.0, 1806.0, 2356.0, 2939.0, 3000.0];
                let gain = [23.0, 23.0, 22.45, 21.6, 20.7, 20.1, 19.0, 17.85, 17.8];
                let nf_freqs = [
                    0.0, 20.0, 50.0, 100.0, 351.0, 500.0, 663.0, 866.0, 1000.0, 1168.0, 1378.0,
                    1500.0, 1671.0, 1863.0, 2000.0, 2174.0, 2376.0, 2500.0, 2668.0, 2879.0, 3000.0,
                ];
                let nf_db = [
                    2.92, 2.92, 2.66, 2.61, 2.69, 2.72, 2.66, 2.69, 2.64, 2.60, 2.59, 2.59, 2.60,
                    2.62, 2.63, 2.62, 2.61, 2.58, 2.60, 2.61, 2.64,
                ];
                let psd = nf_db.map(|nf| BOLTZMANN * noise_temperature_from_figure(nf));
                Ok((
                    gain_table(&gain_freqs, MHZ, &gain)?,
                    noise_table(&nf_freqs, MHZ, &psd)?,
                ))
            }
            AmplifierModel::Asu3GhzLna => {
                let gain_freqs = [0.0, 0.1, 0.5, 1.0, 1.5, 2.0, 2.5, 3.0];
                let gain = [-25.0, 0.0, 27.0, 32.0, 30.0, 30.0, 32.0, 33.0];
                let te_freqs = [0.0, 0.2, 0.4, 0.6, 3.0];
                let te = [30.0, 15.0, 7.0, 6.0, 6.0];
                Ok((
                    gain_table(&gain_freqs, GHZ, &gain)?,
                    noise_table(&te_freqs, GHZ, &te.map(|t| BOLTZMANN * t))?,
                ))
            }
        }
    }
}

/// An amplifier backed by gain and input noise tables.
#[derive(Debug, Clone, PartialEq)]
pub struct DatasheetAmplifier {
    model: AmplifierModel,
    gain: Table,
    input_noise: Table,
}

impl DatasheetAmplifier {
    pub fn new(model: AmplifierModel) -> Result<Self> {
        let (gain, input_noise) = model.tables()?;
        Ok(Self {
            model,
            gain,
            input_noise,
        })
    }

    pub fn model(&self) -> AmplifierModel {
        self.model
    }

    /// Input-referred noise PSD `k_B·Te(f)` in W/Hz.
    pub fn input_noise(&self, frequency: f64, policy: RangePolicy) -> Result<Sample> {
        self.input_noise.eval(frequency, policy)
    }
}

impl Component for DatasheetAmplifier {
    fn kind(&self) -> ComponentKind {
        ComponentKind::Active
    }

    fn gain(&self, frequency: f64, policy: RangePolicy) -> Result<Sample> {
        self.gain.eval(frequency, policy)
    }

    fn noise(&self, frequency: f64, policy: RangePolicy) -> Result<Sample> {
        let input = self.input_noise.eval(frequency, policy)?;
        let gain = self.gain.eval(frequency, policy)?;
        Ok(input.zip_with(gain, |n, g| n * db_to_linear(g)))
    }
}

/// A flat-gain amplifier described by closed-form parameters.
#[derive(Debug, Clone, PartialEq)]
pub struct FixedAmplifier {
    gain_db: f64,
    noise_temperature_k: f64,
    part_number: String,
}

impl FixedAmplifier {
    pub fn new(gain_db: f64, noise_temperature_k: f64) -> Result<Self> {
        if !gain_db.is_finite() {
            return Err(Error::invalid_parameter("gain_db", gain_db, "gain must be finite"));
        }
        if !noise_temperature_k.is_finite() || noise_temperature_k < 0.0 {
            return Err(Error::invalid_parameter(
                "noise_temperature_k",
                noise_temperature_k,
                "noise temperature must be non-negative",
            ));
        }
        Ok(Self {
            gain_db,
            noise_temperature_k,
            part_number: String::new(),
        })
    }

    /// Build from a noise figure in dB instead of a noise temperature.
    pub fn from_noise_figure(gain_db: f64, noise_figure_db: f64) -> Result<Self> {
        if !noise_figure_db.is_finite() || noise_figure_db < 0.0 {
            return Err(Error::invalid_parameter(
                "noise_figure_db",
                noise_figure_db,
                "noise figure must be non-negative",
            ));
        }
        Self::new(gain_db, noise_temperature_from_figure(noise_figure_db))
    }

    /// Attach a free-text part number.
    pub fn with_part_number(mut self, part_number: impl Into<String>) -> Self {
        self.part_number = part_number.into();
        self
    }

    pub fn gain_db(&self) -> f64 {
        self.gain_db
    }

    pub fn noise_temperature_k(&self) -> f64 {
        self.noise_temperature_k
    }

    pub fn part_number(&self) -> &str {
        &self.part_number
    }
}

impl Component for FixedAmplifier {
    fn kind(&self) -> ComponentKind {
        ComponentKind::Active
    }

    fn gain(&self, frequency: f64, _policy: RangePolicy) -> Result<Sample> {
        check_frequency(frequency)?;
        Ok(Sample::exact(self.gain_db))
    }

    fn noise(&self, frequency: f64, _policy: RangePolicy) -> Result<Sample> {
        check_frequency(frequency)?;
        Ok(Sample::exact(
            BOLTZMANN * self.noise_temperature_k * db_to_linear(self.gain_db),
        ))
    }
}

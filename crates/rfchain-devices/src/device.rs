//! The closed set of hardware models a chain can hold.

use rfchain_core::{Component, ComponentKind, RangePolicy, Response, Sample};

use crate::amplifier::{AmplifierModel, DatasheetAmplifier, FixedAmplifier};
use crate::attenuator::Attenuator;
use crate::cable::{Cable, CableFamily};
use crate::converter::Ad9082Adc;
use crate::cryo_cable::{CryoCable, CryoCableFamily};
use crate::error::{Error, Result};
use crate::filter::{FilterModel, HighPassFilter};
use crate::metadata::{self, ComponentInfo};
use crate::params::{ParamReader, ParamValue, Params};

/// Any hardware model from the library.
#[derive(Debug, Clone, PartialEq)]
pub enum Device {
    Attenuator(Attenuator),
    Cable(Cable),
    CryoCable(CryoCable),
    Amplifier(DatasheetAmplifier),
    FixedAmplifier(FixedAmplifier),
    Filter(HighPassFilter),
    Adc(Ad9082Adc),
}

macro_rules! dispatch {
    ($self:ident, $d:ident => $body:expr) => {
        match $self {
            Device::Attenuator($d) => $body,
            Device::Cable($d) => $body,
            Device::CryoCable($d) => $body,
            Device::Amplifier($d) => $body,
            Device::FixedAmplifier($d) => $body,
            Device::Filter($d) => $body,
            Device::Adc($d) => $body,
        }
    };
}

impl Device {
    /// Registered type name, as used in [`metadata`] and chain records.
    pub fn type_name(&self) -> &'static str {
        match self {
            Device::Attenuator(_) => "Attenuator",
            Device::Cable(c) => c.family().type_name(),
            Device::CryoCable(c) => c.family().type_name(),
            Device::Amplifier(a) => a.model().type_name(),
            Device::FixedAmplifier(_) => "FixedAmplifier",
            Device::Filter(f) => f.model().type_name(),
            Device::Adc(_) => "Ad9082Adc",
        }
    }

    /// Registration metadata for this device's type.
    pub fn info(&self) -> Option<&'static ComponentInfo> {
        metadata::lookup(self.type_name())
    }

    /// Construction parameters that reproduce this device via
    /// [`Device::from_params`].
    pub fn params(&self) -> Params {
        let mut p = Params::new();
        match self {
            Device::Attenuator(a) => {
                p.insert("attenuation_db".into(), a.attenuation_db().into());
                p.insert("temperature_k".into(), a.temperature_k().into());
            }
            Device::Cable(c) => {
                p.insert("length_m".into(), c.length_m().into());
            }
            Device::CryoCable(c) => {
                p.insert("length_m".into(), c.length_m().into());
                p.insert("temperature_k".into(), c.temperature_k().into());
            }
            Device::FixedAmplifier(a) => {
                p.insert("gain_db".into(), a.gain_db().into());
                p.insert("noise_temperature_k".into(), a.noise_temperature_k().into());
                p.insert("part_number".into(), a.part_number().into());
            }
            Device::Amplifier(_) | Device::Filter(_) | Device::Adc(_) => {}
        }
        p
    }

    /// Construct a device from its registered type name and parameters.
    ///
    /// Every parameter the type declares must be present; undeclared names
    /// are rejected.
    pub fn from_params(type_name: &str, params: &Params) -> Result<Self> {
        let info = metadata::lookup(type_name)
            .ok_or_else(|| Error::UnknownComponentType(type_name.to_string()))?;
        if let Some(name) = params.keys().find(|k| info.parameter(k).is_none()) {
            return Err(Error::UnknownParameter {
                component: type_name.to_string(),
                parameter: name.clone(),
            });
        }
        let r = ParamReader::new(type_name, params);

        let device: Device = match type_name {
            "Attenuator" => {
                Attenuator::new(r.number("attenuation_db")?, r.number("temperature_k")?)?.into()
            }
            "FixedAmplifier" => {
                FixedAmplifier::new(r.number("gain_db")?, r.number("noise_temperature_k")?)?
                    .with_part_number(r.text("part_number")?)
                    .into()
            }
            "Ad9082Adc" => Ad9082Adc::new()?.into(),
            name => {
                if let Some(family) = CableFamily::from_type_name(name) {
                    Cable::new(family, r.number("length_m")?)?.into()
                } else if let Some(family) = CryoCableFamily::from_type_name(name) {
                    CryoCable::new(family, r.number("length_m")?, r.number("temperature_k")?)?
                        .into()
                } else if let Some(model) = AmplifierModel::from_type_name(name) {
                    DatasheetAmplifier::new(model)?.into()
                } else if let Some(model) = FilterModel::from_type_name(name) {
                    HighPassFilter::new(model)?.into()
                } else {
                    return Err(Error::UnknownComponentType(name.to_string()));
                }
            }
        };
        Ok(device)
    }

    /// Construct a device with every parameter at its registered default.
    pub fn with_defaults(type_name: &str) -> Result<Self> {
        let info = metadata::lookup(type_name)
            .ok_or_else(|| Error::UnknownComponentType(type_name.to_string()))?;
        let params: Params = info
            .parameters
            .iter()
            .map(|p| (p.name.to_string(), p.default_value()))
            .collect();
        Self::from_params(type_name, &params)
    }

    /// Value of one construction parameter, if this device has it.
    pub fn param(&self, name: &str) -> Option<ParamValue> {
        self.params().remove(name)
    }
}

impl Component for Device {
    fn kind(&self) -> ComponentKind {
        dispatch!(self, d => d.kind())
    }

    fn gain(&self, frequency: f64, policy: RangePolicy) -> rfchain_core::Result<Sample> {
        dispatch!(self, d => d.gain(frequency, policy))
    }

    fn noise(&self, frequency: f64, policy: RangePolicy) -> rfchain_core::Result<Sample> {
        dispatch!(self, d => d.noise(frequency, policy))
    }

    fn gain_sweep(&self, frequencies: &[f64], policy: RangePolicy) -> rfchain_core::Result<Response> {
        dispatch!(self, d => d.gain_sweep(frequencies, policy))
    }

    fn noise_sweep(
        &self,
        frequencies: &[f64],
        policy: RangePolicy,
    ) -> rfchain_core::Result<Response> {
        dispatch!(self, d => d.noise_sweep(frequencies, policy))
    }
}

macro_rules! impl_from {
    ($($variant:ident($ty:ty)),* $(,)?) => {
        $(
            impl From<$ty> for Device {
                fn from(d: $ty) -> Self {
                    Device::$variant(d)
                }
            }
        )*
    };
}

impl_from!(
    Attenuator(Attenuator),
    Cable(Cable),
    CryoCable(CryoCable),
    Amplifier(DatasheetAmplifier),
    FixedAmplifier(FixedAmplifier),
    Filter(HighPassFilter),
    Adc(Ad9082Adc),
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metadata::registry;
    use crate::params::params;

    #[test]
    fn test_every_registered_type_builds_with_defaults() {
        for info in registry() {
            let device = Device::with_defaults(info.type_name)
                .unwrap_or_else(|e| panic!("{}: {}", info.type_name, e));
            assert_eq!(device.type_name(), info.type_name);
            assert_eq!(device.kind(), info.kind, "{}", info.type_name);
            assert_eq!(device.info(), Some(info));
        }
    }

    #[test]
    fn test_params_reproduce_device() {
        let devices: Vec<Device> = vec![
            Attenuator::new(-10.0, 300.0).unwrap().into(),
            Cable::new(CableFamily::Rg58c, 0.75).unwrap().into(),
            CryoCable::new(CryoCableFamily::Ss219, 0.3, 40.0).unwrap().into(),
            FixedAmplifier::new(18.5, 35.0).unwrap().with_part_number("X").into(),
            DatasheetAmplifier::new(AmplifierModel::Asu3GhzLna).unwrap().into(),
        ];
        for d in devices {
            let rebuilt = Device::from_params(d.type_name(), &d.params()).unwrap();
            assert_eq!(rebuilt, d);
        }
    }

    #[test]
    fn test_from_params_errors() {
        assert!(matches!(
            Device::from_params("Resistor", &Params::new()),
            Err(Error::UnknownComponentType(_))
        ));
        assert!(matches!(
            Device::from_params("Rg58cCable", &Params::new()),
            Err(Error::MissingParameter { .. })
        ));
        assert!(matches!(
            Device::from_params("Rg58cCable", &params([("length_m", 1.0), ("width", 2.0)])),
            Err(Error::UnknownParameter { .. })
        ));
        assert!(matches!(
            Device::from_params("Rg58cCable", &params([("length_m", "one")])),
            Err(Error::ParameterType { .. })
        ));
        assert!(matches!(
            Device::from_params(
                "Attenuator",
                &params([("attenuation_db", 5.0), ("temperature_k", 300.0)])
            ),
            Err(Error::Core(rfchain_core::Error::InvalidParameter { .. }))
        ));
    }

    #[test]
    fn test_delegation() {
        let d: Device = Attenuator::new(-6.0, 4.0).unwrap().into();
        assert_eq!(d.gain(1e9, RangePolicy::Strict).unwrap().value, -6.0);
        let sweep = d.noise_sweep(&[1e8, 1e9], RangePolicy::Strict).unwrap();
        assert_eq!(sweep.len(), 2);
        assert_eq!(d.param("temperature_k"), Some(ParamValue::Number(4.0)));
    }
}

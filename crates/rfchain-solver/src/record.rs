//! Serializable chain description.
//!
//! A [`ChainRecord`] captures a chain as its name plus, for each component in
//! order, its label, registered type name and construction parameters.
//! Rebuilding from a record reconstructs every device from the same
//! parameters, so gain and noise evaluate bit-identically.

use std::path::Path;

use rfchain_devices::{Device, Params};
use serde::{Deserialize, Serialize};

use crate::chain::SignalChain;
use crate::error::Result;

/// One component of a serialized chain.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComponentRecord {
    pub label: String,
    #[serde(rename = "type")]
    pub type_name: String,
    #[serde(default)]
    pub params: Params,
}

/// A serialized chain.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChainRecord {
    pub name: String,
    pub components: Vec<ComponentRecord>,
}

impl ChainRecord {
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

impl From<&SignalChain<Device>> for ChainRecord {
    fn from(chain: &SignalChain<Device>) -> Self {
        ChainRecord {
            name: chain.name().to_string(),
            components: chain
                .iter()
                .map(|(label, device)| ComponentRecord {
                    label: label.to_string(),
                    type_name: device.type_name().to_string(),
                    params: device.params(),
                })
                .collect(),
        }
    }
}

impl SignalChain<Device> {
    pub fn to_record(&self) -> ChainRecord {
        ChainRecord::from(self)
    }

    /// Build a chain from a record. Fails without a partial chain if any
    /// component cannot be constructed or a label repeats.
    pub fn from_record(record: &ChainRecord) -> Result<Self> {
        let mut chain: SignalChain = SignalChain::new(record.name.clone());
        for component in &record.components {
            let device = Device::from_params(&component.type_name, &component.params)?;
            chain.add_component(device, component.label.clone())?;
        }
        log::debug!(
            "{}: loaded {} components from record",
            chain.name(),
            chain.len()
        );
        Ok(chain)
    }

    pub fn to_json(&self) -> Result<String> {
        self.to_record().to_json()
    }

    pub fn from_json(json: &str) -> Result<Self> {
        Self::from_record(&ChainRecord::from_json(json)?)
    }

    /// Write the chain as pretty-printed JSON.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        std::fs::write(path, self.to_json()?)?;
        Ok(())
    }

    /// Read a chain written by [`SignalChain::save`].
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json(&text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use rfchain_devices::{Attenuator, Cable, CableFamily, params};

    #[test]
    fn test_record_shape() {
        let mut chain: SignalChain = SignalChain::new("shape");
        chain
            .add_component(Attenuator::new(-10.0, 300.0).unwrap(), "IN")
            .unwrap();
        chain
            .add_component(Cable::new(CableFamily::Rg58c, 2.0).unwrap(), "COAX")
            .unwrap();
        let value: serde_json::Value = serde_json::from_str(&chain.to_json().unwrap()).unwrap();
        assert_eq!(value["name"], "shape");
        assert_eq!(value["components"][0]["label"], "IN");
        assert_eq!(value["components"][0]["type"], "Attenuator");
        assert_eq!(value["components"][0]["params"]["attenuation_db"], -10.0);
        assert_eq!(value["components"][1]["type"], "Rg58cCable");
        assert_eq!(value["components"][1]["params"]["length_m"], 2.0);
    }

    #[test]
    fn test_params_default_to_empty() {
        let json = r#"{"name": "lna", "components": [{"label": "AMP", "type": "CryoElecLna"}]}"#;
        let chain = SignalChain::<Device>::from_json(json).unwrap();
        assert_eq!(chain.len(), 1);
        assert_eq!(chain.labels().next(), Some("AMP"));
    }

    #[test]
    fn test_bad_records_rejected() {
        let record = ChainRecord {
            name: "bad".into(),
            components: vec![ComponentRecord {
                label: "X".into(),
                type_name: "FluxCapacitor".into(),
                params: Params::new(),
            }],
        };
        assert!(matches!(
            SignalChain::<Device>::from_record(&record),
            Err(Error::Device(rfchain_devices::Error::UnknownComponentType(_)))
        ));

        let att = ComponentRecord {
            label: "A".into(),
            type_name: "Attenuator".into(),
            params: params([("attenuation_db", -1.0), ("temperature_k", 300.0)]),
        };
        let record = ChainRecord {
            name: "dup".into(),
            components: vec![att.clone(), att],
        };
        assert!(matches!(
            SignalChain::<Device>::from_record(&record),
            Err(Error::DuplicateLabel(_))
        ));

        assert!(matches!(
            SignalChain::<Device>::from_json("{not json"),
            Err(Error::Json(_))
        ));
    }
}

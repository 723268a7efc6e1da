//! Component registration metadata.
//!
//! A static, declarative description of every constructible component type:
//! how it is named and grouped, whether it is passive or active, and which
//! parameters it takes. Front ends use this to build component browsers and
//! parameter forms; [`crate::Device::from_params`] uses it to validate input.

use std::fmt;

use rfchain_core::ComponentKind;
use serde::Serialize;

use crate::params::ParamValue;

/// Library grouping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum Category {
    Amplifiers,
    Cables,
    Attenuators,
    Filters,
    Converters,
}

impl Category {
    pub const ALL: [Category; 5] = [
        Category::Amplifiers,
        Category::Cables,
        Category::Attenuators,
        Category::Filters,
        Category::Converters,
    ];
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Category::Amplifiers => "Amplifiers",
            Category::Cables => "Cables",
            Category::Attenuators => "Attenuators",
            Category::Filters => "Filters",
            Category::Converters => "Converters",
        };
        f.write_str(name)
    }
}

/// Value kind of a parameter.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub enum ParamKind {
    /// A number in `unit`, valid within `[min, max]`, or `(min, max]` when
    /// `min_exclusive` is set.
    Numeric {
        unit: &'static str,
        min: f64,
        min_exclusive: bool,
        max: f64,
        default: f64,
    },
    /// Free text.
    Text { default: &'static str },
}

/// Description of one construction parameter.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ParamSpec {
    pub name: &'static str,
    pub label: &'static str,
    pub kind: ParamKind,
}

impl ParamSpec {
    pub fn default_value(&self) -> ParamValue {
        match self.kind {
            ParamKind::Numeric { default, .. } => ParamValue::Number(default),
            ParamKind::Text { default } => ParamValue::Text(default.to_string()),
        }
    }

    /// Whether `value` lies within the advertised range. Text parameters
    /// accept anything.
    pub fn accepts(&self, value: f64) -> bool {
        match self.kind {
            ParamKind::Numeric {
                min,
                min_exclusive,
                max,
                ..
            } => {
                let above_min = if min_exclusive { value > min } else { value >= min };
                above_min && value <= max
            }
            ParamKind::Text { .. } => true,
        }
    }

    pub fn unit(&self) -> Option<&'static str> {
        match self.kind {
            ParamKind::Numeric { unit, .. } => Some(unit),
            ParamKind::Text { .. } => None,
        }
    }
}

/// Registration entry for a component type.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ComponentInfo {
    pub type_name: &'static str,
    pub display_name: &'static str,
    pub category: Category,
    pub kind: ComponentKind,
    pub description: &'static str,
    pub parameters: &'static [ParamSpec],
}

impl ComponentInfo {
    pub fn parameter(&self, name: &str) -> Option<&'static ParamSpec> {
        self.parameters.iter().find(|p| p.name == name)
    }
}

const LENGTH: ParamSpec = ParamSpec {
    name: "length_m",
    label: "Length",
    kind: ParamKind::Numeric {
        unit: "m",
        min: 0.0,
        min_exclusive: false,
        max: 100.0,
        default: 1.0,
    },
};

const ROOM_TEMPERATURE: ParamSpec = ParamSpec {
    name: "temperature_k",
    label: "Physical temperature",
    kind: ParamKind::Numeric {
        unit: "K",
        min: 0.0,
        min_exclusive: true,
        max: 400.0,
        default: 300.0,
    },
};

const CRYO_TEMPERATURE: ParamSpec = ParamSpec {
    name: "temperature_k",
    label: "Physical temperature",
    kind: ParamKind::Numeric {
        unit: "K",
        min: 0.0,
        min_exclusive: true,
        max: 300.0,
        default: 4.0,
    },
};

const ATTENUATION: ParamSpec = ParamSpec {
    name: "attenuation_db",
    label: "Attenuation (as gain)",
    kind: ParamKind::Numeric {
        unit: "dB",
        min: -100.0,
        min_exclusive: false,
        max: 0.0,
        default: -3.0,
    },
};

const CABLE_PARAMS: &[ParamSpec] = &[LENGTH];
const CRYO_CABLE_PARAMS: &[ParamSpec] = &[LENGTH, CRYO_TEMPERATURE];
const ATTENUATOR_PARAMS: &[ParamSpec] = &[ATTENUATION, ROOM_TEMPERATURE];
const FIXED_AMPLIFIER_PARAMS: &[ParamSpec] = &[
    ParamSpec {
        name: "gain_db",
        label: "Gain",
        kind: ParamKind::Numeric {
            unit: "dB",
            min: -20.0,
            min_exclusive: false,
            max: 60.0,
            default: 20.0,
        },
    },
    ParamSpec {
        name: "noise_temperature_k",
        label: "Noise temperature",
        kind: ParamKind::Numeric {
            unit: "K",
            min: 0.0,
            min_exclusive: false,
            max: 10_000.0,
            default: 50.0,
        },
    },
    ParamSpec {
        name: "part_number",
        label: "Part number",
        kind: ParamKind::Text { default: "" },
    },
];

const fn entry(
    type_name: &'static str,
    display_name: &'static str,
    category: Category,
    kind: ComponentKind,
    description: &'static str,
    parameters: &'static [ParamSpec],
) -> ComponentInfo {
    ComponentInfo {
        type_name,
        display_name,
        category,
        kind,
        description,
        parameters,
    }
}

use Category::*;
use ComponentKind::{Active, Passive};

static REGISTRY: &[ComponentInfo] = &[
    // Amplifiers
    entry(
        "CryoElecLna",
        "Cryo Electronics LNA",
        Amplifiers,
        Active,
        "Cryogenic low-noise amplifier, 0-3 GHz, ~4 K noise temperature mid-band",
        &[],
    ),
    entry(
        "Zx60_3018gPlus",
        "Mini-Circuits ZX60-3018G+",
        Amplifiers,
        Active,
        "Room-temperature amplifier, 20-3000 MHz, measured gain and datasheet noise figure",
        &[],
    ),
    entry(
        "Asu3GhzLna",
        "ASU 3 GHz LNA",
        Amplifiers,
        Active,
        "Cryogenic LNA with low-frequency roll-off below 500 MHz",
        &[],
    ),
    entry(
        "FixedAmplifier",
        "Fixed amplifier",
        Amplifiers,
        Active,
        "Flat gain and noise temperature, for parts without a characterization table",
        FIXED_AMPLIFIER_PARAMS,
    ),
    // Room-temperature cables
    entry(
        "LcomSmaCable",
        "L-com SMA cable",
        Cables,
        Passive,
        "Typical L-com SMA assembly, VNA-measured loss up to 3 GHz",
        CABLE_PARAMS,
    ),
    entry(
        "FairviewF141Cable",
        "Fairview FM-F141 cable",
        Cables,
        Passive,
        "Fairview Microwave FM-F141 SMA coax up to 18 GHz",
        CABLE_PARAMS,
    ),
    entry(
        "Rg58cCable",
        "RG58C/U cable",
        Cables,
        Passive,
        "Pasternack RG58C/U flexible coax up to 5 GHz",
        CABLE_PARAMS,
    ),
    entry(
        "Rg174aCable",
        "RG174A/U cable",
        Cables,
        Passive,
        "Pasternack RG174A/U flexible coax up to 1 GHz",
        CABLE_PARAMS,
    ),
    // Cryogenic cables
    entry(
        "CuNi119Cryo",
        "CuNi 1.19 mm cryo coax",
        Cables,
        Passive,
        "1.19 mm CuNi semi-rigid coax characterized at 300 K and 4 K",
        CRYO_CABLE_PARAMS,
    ),
    entry(
        "CuNi086Cryo",
        "CuNi 0.86 mm cryo coax",
        Cables,
        Passive,
        "0.86 mm CuNi semi-rigid coax characterized at 300 K and 4 K",
        CRYO_CABLE_PARAMS,
    ),
    entry(
        "Ss086Cryo",
        "SS 0.86 mm cryo coax",
        Cables,
        Passive,
        "0.86 mm stainless steel coax characterized at 300 K and 4 K",
        CRYO_CABLE_PARAMS,
    ),
    entry(
        "Ss219Cryo",
        "SS 2.19 mm cryo coax",
        Cables,
        Passive,
        "2.19 mm stainless steel coax characterized at 300 K and 4 K",
        CRYO_CABLE_PARAMS,
    ),
    entry(
        "NbTi086Cryo",
        "NbTi 0.86 mm cryo coax",
        Cables,
        Passive,
        "0.86 mm NbTi coax, superconducting at 4 K",
        CRYO_CABLE_PARAMS,
    ),
    entry(
        "Bcb029Ss034Cryo",
        "CryoCoax BCB029",
        Cables,
        Passive,
        "CryoCoax BCB029, 0.034\" SS/SS, characterized to 20 GHz",
        CRYO_CABLE_PARAMS,
    ),
    entry(
        "Bcb014Ss085Cryo",
        "CryoCoax BCB014",
        Cables,
        Passive,
        "CryoCoax BCB014, 0.085\" SS/SS, characterized to 20 GHz",
        CRYO_CABLE_PARAMS,
    ),
    entry(
        "Bcb024Sp034Cryo",
        "CryoCoax BCB024",
        Cables,
        Passive,
        "CryoCoax BCB024, 0.034\" SP CuNi/CuNi, characterized to 20 GHz",
        CRYO_CABLE_PARAMS,
    ),
    entry(
        "Bcb012NbTi034Cryo",
        "CryoCoax BCB012",
        Cables,
        Passive,
        "CryoCoax BCB012, 0.034\" NbTi/NbTi, superconducting at 4 K",
        CRYO_CABLE_PARAMS,
    ),
    // Attenuators
    entry(
        "Attenuator",
        "Attenuator",
        Attenuators,
        Passive,
        "Matched fixed attenuator with thermal noise k_B*T at its physical temperature",
        ATTENUATOR_PARAMS,
    ),
    // Filters
    entry(
        "Vhf1320Filter",
        "Mini-Circuits VHF-1320+",
        Filters,
        Passive,
        "High-pass filter, passband from 1320 MHz",
        &[],
    ),
    entry(
        "Vhf1760Filter",
        "Mini-Circuits VHF-1760+",
        Filters,
        Passive,
        "High-pass filter, passband from 1760 MHz",
        &[],
    ),
    entry(
        "Vhf1910Filter",
        "Mini-Circuits VHF-1910+",
        Filters,
        Passive,
        "High-pass filter, passband from 1910 MHz",
        &[],
    ),
    // Converters
    entry(
        "Ad9082Adc",
        "AD9082 ADC",
        Converters,
        Active,
        "AD9082 ADC input, unity gain, noise floor from datasheet SNR",
        &[],
    ),
];

/// Every registered component type.
pub fn registry() -> &'static [ComponentInfo] {
    REGISTRY
}

/// Look up a component type by its registered name.
pub fn lookup(type_name: &str) -> Option<&'static ComponentInfo> {
    REGISTRY.iter().find(|info| info.type_name == type_name)
}

/// Registered component types in one category.
pub fn by_category(category: Category) -> impl Iterator<Item = &'static ComponentInfo> {
    REGISTRY.iter().filter(move |info| info.category == category)
}

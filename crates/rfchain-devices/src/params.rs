//! Construction parameter values.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// A single construction parameter: a number or free text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ParamValue {
    Number(f64),
    Text(String),
}

impl ParamValue {
    pub fn as_number(&self) -> Option<f64> {
        match self {
            ParamValue::Number(v) => Some(*v),
            ParamValue::Text(_) => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            ParamValue::Number(_) => None,
            ParamValue::Text(s) => Some(s),
        }
    }
}

impl From<f64> for ParamValue {
    fn from(v: f64) -> Self {
        ParamValue::Number(v)
    }
}

impl From<&str> for ParamValue {
    fn from(s: &str) -> Self {
        ParamValue::Text(s.to_string())
    }
}

impl From<String> for ParamValue {
    fn from(s: String) -> Self {
        ParamValue::Text(s)
    }
}

impl fmt::Display for ParamValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParamValue::Number(v) => write!(f, "{}", v),
            ParamValue::Text(s) => write!(f, "{}", s),
        }
    }
}

/// Parameter name to value, ordered by name for stable serialization.
pub type Params = BTreeMap<String, ParamValue>;

/// Build a [`Params`] map from `(name, value)` pairs.
pub fn params<I, K, V>(pairs: I) -> Params
where
    I: IntoIterator<Item = (K, V)>,
    K: Into<String>,
    V: Into<ParamValue>,
{
    pairs
        .into_iter()
        .map(|(k, v)| (k.into(), v.into()))
        .collect()
}

/// Typed access to the parameters of one component type.
pub(crate) struct ParamReader<'a> {
    component: &'a str,
    params: &'a Params,
}

impl<'a> ParamReader<'a> {
    pub(crate) fn new(component: &'a str, params: &'a Params) -> Self {
        Self { component, params }
    }

    fn get(&self, name: &str) -> Result<&'a ParamValue> {
        self.params.get(name).ok_or_else(|| Error::MissingParameter {
            component: self.component.to_string(),
            parameter: name.to_string(),
        })
    }

    pub(crate) fn number(&self, name: &str) -> Result<f64> {
        self.get(name)?
            .as_number()
            .ok_or_else(|| Error::ParameterType {
                component: self.component.to_string(),
                parameter: name.to_string(),
                expected: "a number",
            })
    }

    pub(crate) fn text(&self, name: &str) -> Result<String> {
        self.get(name)?
            .as_text()
            .map(str::to_string)
            .ok_or_else(|| Error::ParameterType {
                component: self.component.to_string(),
                parameter: name.to_string(),
                expected: "text",
            })
    }
}

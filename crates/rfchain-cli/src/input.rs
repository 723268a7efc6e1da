//! Chain and configuration loading.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use rfchain::{AnalysisConfig, Device, RangePolicy, SignalChain, presets};

/// Where the chain under analysis comes from.
#[derive(Debug, Clone, PartialEq)]
pub enum ChainSource {
    File(PathBuf),
    Preset(String),
}

impl ChainSource {
    pub fn from_args(chain: Option<PathBuf>, preset: Option<String>) -> Result<Self> {
        match (chain, preset) {
            (Some(_), Some(_)) => bail!("--chain and --preset cannot be used together"),
            (Some(path), None) => Ok(ChainSource::File(path)),
            (None, Some(name)) => Ok(ChainSource::Preset(name)),
            (None, None) => Ok(ChainSource::Preset(presets::SIMPLE_CRYOGENIC.to_string())),
        }
    }

    pub fn load(&self, config: AnalysisConfig) -> Result<SignalChain> {
        let chain: SignalChain = match self {
            ChainSource::File(path) => SignalChain::<Device>::load(path)
                .with_context(|| format!("Failed to load chain: {}", path.display()))?,
            ChainSource::Preset(name) => match presets::by_name(name) {
                Some(chain) => chain.with_context(|| format!("Failed to build preset: {}", name))?,
                None => bail!(
                    "Unknown preset '{}' (available: {})",
                    name,
                    presets::NAMES.join(", ")
                ),
            },
        };
        log::info!("Loaded chain '{}' with {} components", chain.name(), chain.len());
        Ok(chain.with_config(config))
    }
}

/// Read the analysis configuration; `strict` overrides the file's range policy.
pub fn load_config(path: Option<&Path>, strict: bool) -> Result<AnalysisConfig> {
    let config = match path {
        Some(path) => AnalysisConfig::load(path)
            .with_context(|| format!("Failed to read config: {}", path.display()))?,
        None => AnalysisConfig::default(),
    };
    Ok(if strict {
        config.with_range_policy(RangePolicy::Strict)
    } else {
        config
    })
}

pub fn save_chain(chain: &SignalChain, path: &Path) -> Result<()> {
    chain
        .save(path)
        .with_context(|| format!("Failed to write chain: {}", path.display()))?;
    println!("Wrote {} components to {}", chain.len(), path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_source_selection() {
        assert_eq!(
            ChainSource::from_args(None, None).unwrap(),
            ChainSource::Preset(presets::SIMPLE_CRYOGENIC.to_string())
        );
        assert!(ChainSource::from_args(Some("a.json".into()), Some("simple".into())).is_err());
        assert!(
            ChainSource::Preset("nope".into())
                .load(AnalysisConfig::default())
                .is_err()
        );
    }

    #[test]
    fn test_deployment_presets_load() {
        let config = AnalysisConfig::default();
        for name in ["default", "mcgill", "slim2024", "SLIM Deployment 2025"] {
            let chain = ChainSource::from_args(None, Some(name.into()))
                .unwrap()
                .load(config)
                .unwrap();
            assert!(presets::NAMES.contains(&chain.name()));
            assert_eq!(chain.labels().last(), Some("ADC"));
        }
    }

    #[test]
    fn test_config_and_chain_files() {
        let dir = tempfile::tempdir().unwrap();

        let config_path = dir.path().join("config.json");
        std::fs::write(&config_path, r#"{"parallel": {"min_points_for_parallel": 16}}"#).unwrap();
        let config = load_config(Some(&config_path), true).unwrap();
        assert_eq!(config.range_policy, RangePolicy::Strict);
        assert_eq!(config.parallel.min_points_for_parallel, 16);

        let chain_path = dir.path().join("chain.json");
        let preset = ChainSource::from_args(None, None)
            .unwrap()
            .load(config)
            .unwrap();
        save_chain(&preset, &chain_path).unwrap();
        let loaded = ChainSource::File(chain_path).load(config).unwrap();
        assert_eq!(loaded, preset);
    }
}

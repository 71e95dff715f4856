use std::fs;
use std::path::Path;

use anyhow::{bail, Context, Result};
use clap::ValueEnum;
use serde::Deserialize;

use crate::runtime::loader::DEFAULT_UNREACHABLE_COST;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Algorithm {
    Dvr,
    Lsr,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimConfig {
    pub unreachable_cost: u64,
    pub algorithms: Vec<Algorithm>,
    pub output_format: OutputFormat,
    pub cross_check: bool,
    pub dvr_max_passes: Option<usize>,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            unreachable_cost: DEFAULT_UNREACHABLE_COST,
            algorithms: vec![Algorithm::Dvr, Algorithm::Lsr],
            output_format: OutputFormat::Text,
            cross_check: false,
            dvr_max_passes: None,
        }
    }
}

/// Command line values. `None` and `false` leave the file or default value in place.
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub unreachable_cost: Option<u64>,
    pub algorithms: Option<Vec<Algorithm>>,
    pub output_format: Option<OutputFormat>,
    pub cross_check: bool,
    pub dvr_max_passes: Option<usize>,
}

#[derive(Debug, Deserialize, Default)]
struct RawDvr {
    max_passes: Option<usize>,
}

#[derive(Debug, Deserialize, Default)]
struct RawSimConfig {
    unreachable_cost: Option<u64>,
    algorithms: Option<Vec<Algorithm>>,
    output_format: Option<OutputFormat>,
    cross_check: Option<bool>,
    dvr: Option<RawDvr>,
}

pub fn parse_sim_config(text: &str) -> Result<SimConfig> {
    let raw_cfg: RawSimConfig = if text.trim().is_empty() {
        RawSimConfig::default()
    } else {
        serde_yaml::from_str(text).context("failed to parse simulator config yaml")?
    };
    let defaults = SimConfig::default();
    let dvr = raw_cfg.dvr.unwrap_or_default();

    let cfg = SimConfig {
        unreachable_cost: raw_cfg.unreachable_cost.unwrap_or(defaults.unreachable_cost),
        algorithms: raw_cfg.algorithms.unwrap_or(defaults.algorithms),
        output_format: raw_cfg.output_format.unwrap_or(defaults.output_format),
        cross_check: raw_cfg.cross_check.unwrap_or(defaults.cross_check),
        dvr_max_passes: dvr.max_passes,
    };
    validate(cfg)
}

pub fn load_sim_config(path: &Path) -> Result<SimConfig> {
    let raw_text = fs::read_to_string(path)
        .with_context(|| format!("failed to read config file {}", path.display()))?;
    parse_sim_config(&raw_text)
        .with_context(|| format!("invalid config file {}", path.display()))
}

pub fn resolve_sim_config(path: Option<&Path>, overrides: &ConfigOverrides) -> Result<SimConfig> {
    let base = match path {
        Some(path) => load_sim_config(path)?,
        None => SimConfig::default(),
    };
    validate(base.with_overrides(overrides))
}

impl SimConfig {
    pub fn with_overrides(self, overrides: &ConfigOverrides) -> Self {
        Self {
            unreachable_cost: overrides.unreachable_cost.unwrap_or(self.unreachable_cost),
            algorithms: overrides.algorithms.clone().unwrap_or(self.algorithms),
            output_format: overrides.output_format.unwrap_or(self.output_format),
            cross_check: overrides.cross_check || self.cross_check,
            dvr_max_passes: overrides.dvr_max_passes.or(self.dvr_max_passes),
        }
    }
}

fn validate(mut cfg: SimConfig) -> Result<SimConfig> {
    if cfg.algorithms.is_empty() {
        bail!("at least one routing algorithm must be selected");
    }
    if cfg.dvr_max_passes == Some(0) {
        bail!("dvr max_passes must be at least 1");
    }
    let mut seen = Vec::with_capacity(cfg.algorithms.len());
    cfg.algorithms.retain(|algorithm| {
        if seen.contains(algorithm) {
            false
        } else {
            seen.push(*algorithm);
            true
        }
    });
    Ok(cfg)
}

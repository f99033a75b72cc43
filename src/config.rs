use crate::distribution::{Distribution, Empty, Gaussian};
use crate::elements::{Alignment, Drift, Element, FocusingUnit, Quad, TaperedPL};
use crate::error::ConfigError;
use crate::Float;
use anyhow::{Context, Result};
use serde::Deserialize;
use std::convert::TryFrom;
use std::fs;
use std::path::Path;

#[derive(Deserialize)]
pub struct Config {
    pub beam: Beam,
    pub distribution: DistributionConfig,
    #[serde(default)]
    pub lattice: Vec<ElementConfig>,
    #[serde(default)]
    pub output: Output,
}

#[derive(Deserialize)]
pub struct Beam {
    pub kin_energy_mev: Float,
    pub mass_mev: Float,
    pub charge_qe: Float,
    pub bunch_charge_c: Float,
    pub npart: usize,
    #[serde(default)]
    pub seed: u64,
}

/// Missing keys fall back to `Output::default()`.
#[derive(Deserialize)]
#[serde(default)]
pub struct Output {
    pub write_output: bool,
    pub outdir: String,
    pub stride: usize,
}

impl Default for Output {
    fn default() -> Output {
        Output {
            write_output: false,
            outdir: "output".to_string(),
            stride: 1,
        }
    }
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DistributionConfig {
    Empty,
    Gaussian {
        lambda_x: Float,
        lambda_y: Float,
        lambda_t: Float,
        lambda_px: Float,
        lambda_py: Float,
        lambda_pt: Float,
        #[serde(default)]
        mu_xpx: Float,
        #[serde(default)]
        mu_ypy: Float,
        #[serde(default)]
        mu_tpt: Float,
    },
}

fn one_slice() -> usize {
    1
}

/// One entry of the `[[lattice]]` array. `dx`, `dy` (m) and
/// `rotation` (degrees) default to a perfectly aligned element.
#[derive(Deserialize, Clone, Debug, PartialEq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ElementConfig {
    Drift {
        ds: Float,
        #[serde(default = "one_slice")]
        nslice: usize,
        #[serde(default)]
        dx: Float,
        #[serde(default)]
        dy: Float,
        #[serde(default)]
        rotation: Float,
    },
    Quad {
        ds: Float,
        k: Float,
        #[serde(default)]
        unit: i64,
        #[serde(default = "one_slice")]
        nslice: usize,
        #[serde(default)]
        dx: Float,
        #[serde(default)]
        dy: Float,
        #[serde(default)]
        rotation: Float,
    },
    TaperedPl {
        k: Float,
        taper: Float,
        #[serde(default)]
        unit: i64,
        #[serde(default)]
        dx: Float,
        #[serde(default)]
        dy: Float,
        #[serde(default)]
        rotation: Float,
    },
}

impl ElementConfig {
    pub fn build(&self) -> Result<Element, ConfigError> {
        let element: Element = match *self {
            ElementConfig::Drift {
                ds,
                nslice,
                dx,
                dy,
                rotation,
            } => Drift::new(ds, nslice, Alignment::new(dx, dy, rotation))?.into(),
            ElementConfig::Quad {
                ds,
                k,
                unit,
                nslice,
                dx,
                dy,
                rotation,
            } => Quad::new(
                ds,
                k,
                FocusingUnit::try_from(unit)?,
                nslice,
                Alignment::new(dx, dy, rotation),
            )?
            .into(),
            ElementConfig::TaperedPl {
                k,
                taper,
                unit,
                dx,
                dy,
                rotation,
            } => TaperedPL::new(
                k,
                taper,
                FocusingUnit::try_from(unit)?,
                Alignment::new(dx, dy, rotation),
            )?
            .into(),
        };
        Ok(element)
    }
}

impl Output {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.stride == 0 {
            return Err(ConfigError::ZeroStride);
        }
        Ok(())
    }
}

impl DistributionConfig {
    pub fn build(&self) -> Result<Distribution, ConfigError> {
        let dist: Distribution = match *self {
            DistributionConfig::Empty => Empty::new().into(),
            DistributionConfig::Gaussian {
                lambda_x,
                lambda_y,
                lambda_t,
                lambda_px,
                lambda_py,
                lambda_pt,
                mu_xpx,
                mu_ypy,
                mu_tpt,
            } => Gaussian::new(
                lambda_x, lambda_y, lambda_t, lambda_px, lambda_py, lambda_pt, mu_xpx, mu_ypy,
                mu_tpt,
            )?
            .into(),
        };
        Ok(dist)
    }
}

impl Config {
    /// Reads `config.toml` from the working directory.
    pub fn new() -> Result<Config> {
        Config::from_file("config.toml")
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Config> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Could not open the config file {}", path.display()))?;
        Config::from_toml(&contents)
            .with_context(|| format!("Could not parse config file {}", path.display()))
    }

    pub fn from_toml(contents: &str) -> Result<Config> {
        let cfg: Config = toml::from_str(contents).context("Invalid TOML configuration")?;
        cfg.output.validate()?;
        Ok(cfg)
    }
}

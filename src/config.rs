/***************************************/
/*        3rd party libraries          */
/***************************************/
use serde::Deserialize;
use std::fs;
use std::path::Path;
use thiserror::Error;

/***************************************/
/*           Local modules             */
/***************************************/
use crate::elevator::DEFAULT_STEP_LIMIT_FACTOR;

/***************************************/
/*       Public data structures        */
/***************************************/
#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct Config {
    pub building: BuildingConfig,
    #[serde(default)]
    pub simulation: SimulationConfig,
    #[serde(default)]
    pub pickup: Vec<PickupConfig>,
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct BuildingConfig {
    pub n_cars: usize,
    pub top_floor: u8,
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct SimulationConfig {
    #[serde(default = "default_step_limit_factor")]
    pub step_limit_factor: usize,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        SimulationConfig {
            step_limit_factor: DEFAULT_STEP_LIMIT_FACTOR,
        }
    }
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct PickupConfig {
    pub rider: String,
    pub origin: u8,
    pub destination: u8,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read configuration file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse configuration file: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid configuration: {0}")]
    Invalid(String),
}

fn default_step_limit_factor() -> usize {
    DEFAULT_STEP_LIMIT_FACTOR
}

/***************************************/
/*             Public API              */
/***************************************/
pub fn load_config(path: impl AsRef<Path>) -> Result<Config, ConfigError> {
    let config_str = fs::read_to_string(path)?;
    parse_config(&config_str)
}

pub fn parse_config(config_str: &str) -> Result<Config, ConfigError> {
    let config: Config = toml::from_str(config_str)?;
    config.validate()?;
    Ok(config)
}

impl Config {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.building.n_cars == 0 {
            return Err(ConfigError::Invalid("n_cars must be at least 1".to_string()));
        }
        if self.simulation.step_limit_factor == 0 {
            return Err(ConfigError::Invalid(
                "step_limit_factor must be at least 1".to_string(),
            ));
        }
        for pickup in self.pickup.iter() {
            if pickup.origin > self.building.top_floor
                || pickup.destination > self.building.top_floor
            {
                return Err(ConfigError::Invalid(format!(
                    "pick-up for {} ({} -> {}) leaves the building (top floor {})",
                    pickup.rider, pickup.origin, pickup.destination, self.building.top_floor
                )));
            }
        }
        Ok(())
    }
}

/***************************************/
/*             Unit tests              */
/***************************************/

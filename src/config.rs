//! Simulation settings. The constants are the defaults used when nothing is
//! given on the command line.

use clap::Args;

use crate::{error::ConfigError, runway::Runway};

/// Airplanes flying at once, one thread each.
pub const NUM_AIRPLANES: usize = 10;

/// Landings each airplane makes before the simulation ends.
pub const NUM_LANDINGS: usize = 10;

/// Upper bound of the random taxi time, in milliseconds. Taxiing happens
/// outside the airport lock while the runway stays occupied.
pub const MAX_TAXI_TIME_MS: u64 = 10;

/// Upper bound of the random wait between two landings of one airplane, in
/// milliseconds.
pub const MAX_WAIT_TIME_MS: u64 = 100;

#[derive(Clone, Debug, Args)]
pub struct SimulationConfig {
    /// The number of airplanes
    #[clap(short = 'n', long, default_value_t = NUM_AIRPLANES)]
    pub airplanes: usize,
    /// The number of landings per airplane
    #[clap(short = 'l', long, default_value_t = NUM_LANDINGS)]
    pub landings: usize,
    /// Maximum taxi time in milliseconds
    #[clap(long, default_value_t = MAX_TAXI_TIME_MS)]
    pub max_taxi_ms: u64,
    /// Maximum wait between landings in milliseconds
    #[clap(long, default_value_t = MAX_WAIT_TIME_MS)]
    pub max_wait_ms: u64,
    /// An optional seed making every airplane's choices repeatable
    #[clap(short = 's', long)]
    pub seed: Option<u64>,
    /// Runways airplanes may land on, e.g. `9,4R,15L`. All runways by default
    #[clap(short = 'r', long, value_delimiter = ',')]
    pub runways: Vec<Runway>,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            airplanes: NUM_AIRPLANES,
            landings: NUM_LANDINGS,
            max_taxi_ms: MAX_TAXI_TIME_MS,
            max_wait_ms: MAX_WAIT_TIME_MS,
            seed: None,
            runways: Vec::new(),
        }
    }
}

impl SimulationConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.airplanes == 0 {
            return Err(ConfigError::NoAirplanes);
        }
        if self.max_taxi_ms == 0 {
            return Err(ConfigError::ZeroDelay("taxi"));
        }
        if self.max_wait_ms == 0 {
            return Err(ConfigError::ZeroDelay("wait"));
        }
        Ok(())
    }

    /// Runways in play; an empty list means every runway.
    pub fn runways(&self) -> Vec<Runway> {
        if self.runways.is_empty() {
            Runway::ALL.to_vec()
        } else {
            self.runways.clone()
        }
    }

    /// Distinct per-airplane seed so airplanes do not mirror each other.
    pub fn seed_for(&self, airplane: usize) -> Option<u64> {
        self.seed.map(|s| s.wrapping_add(airplane as u64))
    }
}

#[cfg(test)]
mod tests {
    use super::SimulationConfig;
    use crate::{error::ConfigError, runway::Runway};

    #[test]
    fn defaults_are_valid() {
        let config = SimulationConfig::default();
        assert_eq!(config.validate(), Ok(()));
        assert_eq!(config.runways(), Runway::ALL.to_vec());
        assert_eq!(config.seed_for(3), None);
    }

    #[test]
    fn rejects_degenerate() {
        let config = SimulationConfig {
            airplanes: 0,
            ..Default::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::NoAirplanes));
        let config = SimulationConfig {
            max_wait_ms: 0,
            ..Default::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::ZeroDelay("wait")));
    }

    #[test]
    fn seeds_differ_per_airplane() {
        let config = SimulationConfig {
            seed: Some(u64::MAX),
            ..Default::default()
        };
        assert_eq!(config.seed_for(0), Some(u64::MAX));
        assert_eq!(config.seed_for(1), Some(0));
    }
}

use crate::runway::Runway;

/// Rule the airport status checker found broken.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StatusError {
    #[error("runway {0} is used by {1} airplanes at once")]
    DoubleOccupancy(Runway, usize),
    #[error("crossing runways {0} and {1} are in use at the same time")]
    CrossingRunways(Runway, Runway),
    #[error("finished with runway {0}, which was not in use")]
    NotInUse(Runway),
}

#[derive(Debug, thiserror::Error)]
pub enum AirportError {
    #[error("unknown runway: {0}")]
    UnknownRunway(String),
    /// Release without a matching reserve. The counter is left untouched.
    #[error("runway {0} released while not occupied")]
    NotOccupied(Runway),
    #[error("runway lock poisoned by a panicking airplane")]
    Poisoned,
    #[error("airport status check failed on runway {runway}: {source}")]
    Status {
        runway: Runway,
        #[source]
        source: StatusError,
    },
}

#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("at least one airplane is required")]
    NoAirplanes,
    #[error("maximum {0} time must be at least 1 ms")]
    ZeroDelay(&'static str),
}

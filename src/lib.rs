//! Conflict-aware runway arbitration for an airport whose runways cross.
//!
//! Airplanes call [`RunwayControl::reserve`] before landing and
//! [`RunwayControl::release`] once they have taxied off. The
//! [`AirportServer`] keeps crossing runways from ever being occupied at the
//! same time while letting non-crossing runways be used in parallel.

pub mod airplane;
pub mod config;
pub mod error;
pub mod logging;
pub mod runway;
pub mod simulation;
pub mod status;
pub mod sync;

pub use airplane::{Airplane, AirplaneId, FlightPlan, RandomFlightPlan, ScriptedFlightPlan};
pub use error::{AirportError, ConfigError, StatusError};
pub use runway::Runway;
pub use status::{NoopChecker, RuleChecker, StatusChecker};
pub use sync::{server::AirportServer, Landing, RunwayControl};

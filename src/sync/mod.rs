pub mod occupancy;
pub mod server;

use crate::{airplane::AirplaneId, error::AirportError, runway::Runway};

/// Conflict-aware runway arbitration.
///
/// The requirements for that are
/// 1. Mutual Exclusion - while a runway is occupied, neither it nor any runway crossing it is handed out.
/// 2. No Deadlock - assuming every `reserve()` is eventually matched by a `release()`, every waiting airplane
/// eventually lands.
pub trait RunwayControl {
    /// Blocks until `runway` and every runway crossing it are free, then occupies `runway`.
    fn reserve(&self, plane: AirplaneId, runway: Runway) -> Result<(), AirportError>;
    /// Vacates `runway` and wakes whoever may now proceed. Never waits on conflicts.
    fn release(&self, plane: AirplaneId, runway: Runway) -> Result<(), AirportError>;

    // Guard ties the release to scope, so a panicking airplane cannot keep a runway forever
    fn land(&self, plane: AirplaneId, runway: Runway) -> Result<Landing<'_, Self>, AirportError>
    where
        Self: Sized,
    {
        self.reserve(plane, runway)?;
        Ok(Landing {
            control: self,
            plane,
            runway,
            released: false,
        })
    }
}

pub struct Landing<'a, C: RunwayControl> {
    control: &'a C,
    plane: AirplaneId,
    runway: Runway,
    // Book-keeping so drop() does not release a second time after release()
    released: bool,
}

impl<C: RunwayControl> Landing<'_, C> {
    pub fn runway(&self) -> Runway {
        self.runway
    }

    pub fn release(mut self) -> Result<(), AirportError> {
        self.released = true;
        self.control.release(self.plane, self.runway)
    }
}

impl<C: RunwayControl> Drop for Landing<'_, C> {
    fn drop(&mut self) {
        if self.released {
            return;
        }
        if let Err(e) = self.control.release(self.plane, self.runway) {
            tracing::error!(plane = %self.plane, runway = %self.runway, error = %e, "release on drop failed");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{server::AirportServer, RunwayControl};
    use crate::{airplane::AirplaneId, runway::Runway::*, status::NoopChecker};

    #[test]
    fn landing_releases_on_drop() {
        let airport = AirportServer::new(NoopChecker);
        {
            let landing = airport.land(AirplaneId(1), R4L).unwrap();
            assert_eq!(landing.runway(), R4L);
            assert!(airport.occupancy().unwrap().is_busy(R4L));
        }
        assert!(!airport.occupancy().unwrap().is_busy(R4L));
    }

    #[test]
    fn explicit_release_only_once() {
        let airport = AirportServer::new(NoopChecker);
        let landing = airport.land(AirplaneId(1), R15R).unwrap();
        landing.release().unwrap();
        // Drop after release must not underflow into an error or a second release
        assert_eq!(airport.occupancy().unwrap().count(R15R), 0);
        airport.reserve(AirplaneId(2), R15R).unwrap();
        assert_eq!(airport.occupancy().unwrap().count(R15R), 1);
    }
}

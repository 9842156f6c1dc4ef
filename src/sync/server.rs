use std::sync::{Condvar, Mutex, MutexGuard};

use tracing::debug;

use super::{occupancy::Occupancy, RunwayControl};
use crate::{airplane::AirplaneId, error::AirportError, runway::Runway, status::StatusChecker};

/// Monitor over the airport's runways: one lock for every counter, one wait
/// channel per runway.
///
/// A waiting airplane sleeps on the channel of whichever runway currently
/// blocks it and re-evaluates its whole predicate on every wake, so it never
/// lands after only part of its conflicts have cleared.
pub struct AirportServer<C> {
    runways: Mutex<Occupancy>,
    channels: [Condvar; Runway::COUNT],
    checker: C,
}

impl<C: StatusChecker> AirportServer<C> {
    pub fn new(checker: C) -> Self {
        Self {
            runways: Mutex::new(Occupancy::default()),
            channels: std::array::from_fn(|_| Condvar::new()),
            checker,
        }
    }

    pub fn checker(&self) -> &C {
        &self.checker
    }

    /// Consistent snapshot of every runway's counter.
    pub fn occupancy(&self) -> Result<Occupancy, AirportError> {
        Ok(self.lock()?.clone())
    }

    fn lock(&self) -> Result<MutexGuard<'_, Occupancy>, AirportError> {
        self.runways.lock().map_err(|_| AirportError::Poisoned)
    }

    // Anyone blocked on `runway` or on a runway crossing it may now pass
    fn wake(&self, runway: Runway) {
        self.channels[runway.index()].notify_all();
        for c in runway.conflicts_with() {
            self.channels[c.index()].notify_all();
        }
    }
}

impl<C: StatusChecker> RunwayControl for AirportServer<C> {
    fn reserve(&self, plane: AirplaneId, runway: Runway) -> Result<(), AirportError> {
        let mut runways = self.lock()?;
        debug!(
            "Airplane {plane} is acquiring any needed runway(s) for landing on Runway {}",
            self.checker.runway_name(runway)
        );

        while let Some(blocker) = runways.blocker(runway) {
            debug!(%plane, %runway, %blocker, "waiting");
            runways = self.channels[blocker.index()]
                .wait(runways)
                .map_err(|_| AirportError::Poisoned)?;
        }
        runways.increment(runway);

        // Still under the lock: the checker sees exactly this change
        self.checker
            .check_status(runway)
            .map_err(|source| AirportError::Status { runway, source })
    }

    fn release(&self, plane: AirplaneId, runway: Runway) -> Result<(), AirportError> {
        let mut runways = self.lock()?;
        debug!(
            "Airplane {plane} is releasing any needed runway(s) after landing on Runway {}",
            self.checker.runway_name(runway)
        );

        runways.decrement(runway)?;
        let checked = self.checker.finished_with(runway);
        self.wake(runway);
        checked.map_err(|source| AirportError::Status { runway, source })
    }
}

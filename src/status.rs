use std::sync::Mutex;

use crate::{error::StatusError, runway::Runway};

/// Airport-wide rule checker, called by the server under its lock after every
/// occupancy change. Implementations must not block.
pub trait StatusChecker: Send + Sync {
    /// An airplane has just been cleared to land on `runway`.
    fn check_status(&self, runway: Runway) -> Result<(), StatusError>;
    /// An airplane has just vacated `runway`.
    fn finished_with(&self, runway: Runway) -> Result<(), StatusError>;
    fn runway_name(&self, runway: Runway) -> &'static str {
        runway.name()
    }
}

#[derive(Default)]
pub struct NoopChecker;

impl StatusChecker for NoopChecker {
    fn check_status(&self, _: Runway) -> Result<(), StatusError> {
        Ok(())
    }
    fn finished_with(&self, _: Runway) -> Result<(), StatusError> {
        Ok(())
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StatusReport {
    pub landings: usize,
    pub max_concurrent: usize,
    pub violations: Vec<StatusError>,
}

#[derive(Default)]
struct Tally {
    in_use: [usize; Runway::COUNT],
    report: StatusReport,
}

/// Keeps its own count of airplanes per runway, independent of the server's,
/// and records every broken rule it sees.
#[derive(Default)]
pub struct RuleChecker {
    tally: Mutex<Tally>,
}

impl RuleChecker {
    pub fn report(&self) -> StatusReport {
        self.with_tally(|t| t.report.clone())
    }

    fn with_tally<T>(&self, f: impl FnOnce(&mut Tally) -> T) -> T {
        // The tally is plain counters, still meaningful after a panic elsewhere
        let mut tally = self
            .tally
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        f(&mut tally)
    }
}

impl Tally {
    fn record(&mut self, e: StatusError) -> Result<(), StatusError> {
        tracing::error!(violation = %e, "airport rule violated");
        self.report.violations.push(e.clone());
        Err(e)
    }
}

impl StatusChecker for RuleChecker {
    fn check_status(&self, runway: Runway) -> Result<(), StatusError> {
        self.with_tally(|t| {
            t.in_use[runway.index()] += 1;
            t.report.landings += 1;
            let concurrent = t.in_use.iter().filter(|&&n| n > 0).count();
            t.report.max_concurrent = t.report.max_concurrent.max(concurrent);

            let n = t.in_use[runway.index()];
            if n > 1 {
                return t.record(StatusError::DoubleOccupancy(runway, n));
            }
            if let Some(&other) = runway
                .conflicts_with()
                .iter()
                .find(|r| t.in_use[r.index()] > 0)
            {
                return t.record(StatusError::CrossingRunways(runway, other));
            }
            tracing::trace!(runway = %runway, concurrent, "airport status ok");
            Ok(())
        })
    }

    fn finished_with(&self, runway: Runway) -> Result<(), StatusError> {
        self.with_tally(|t| match t.in_use[runway.index()].checked_sub(1) {
            Some(n) => {
                t.in_use[runway.index()] = n;
                Ok(())
            }
            None => t.record(StatusError::NotInUse(runway)),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::{RuleChecker, StatusChecker};
    use crate::{error::StatusError, runway::Runway::*};

    #[test]
    fn crossing_detected() {
        let checker = RuleChecker::default();
        checker.check_status(R4L).unwrap();
        checker.check_status(R9).unwrap();
        checker.finished_with(R9).unwrap();
        checker.check_status(R15L).unwrap_err(); // crosses 4L
        let report = checker.report();
        assert_eq!(report.landings, 3);
        assert_eq!(report.max_concurrent, 2);
        assert_eq!(report.violations, vec![StatusError::CrossingRunways(R15L, R4L)]);
    }

    #[test]
    fn double_occupancy() {
        let checker = RuleChecker::default();
        checker.check_status(R4R).unwrap();
        assert_eq!(
            checker.check_status(R4R),
            Err(StatusError::DoubleOccupancy(R4R, 2))
        );
    }

    #[test]
    fn finish_unused() {
        let checker = RuleChecker::default();
        assert_eq!(checker.finished_with(R15R), Err(StatusError::NotInUse(R15R)));
        assert_eq!(checker.report().violations.len(), 1);
        assert_eq!(checker.runway_name(R15R), "15R");
    }
}

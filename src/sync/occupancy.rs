use crate::{error::AirportError, runway::Runway};

/// Per-runway use counters. Only ever touched while holding the airport lock.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Occupancy {
    in_use: [usize; Runway::COUNT],
}

impl Occupancy {
    pub fn count(&self, runway: Runway) -> usize {
        self.in_use[runway.index()]
    }

    pub fn is_busy(&self, runway: Runway) -> bool {
        self.count(runway) >= 1
    }

    /// Does not re-check conflicts; callers must have seen `blocker` return `None`.
    pub fn increment(&mut self, runway: Runway) {
        self.in_use[runway.index()] += 1;
    }

    pub fn decrement(&mut self, runway: Runway) -> Result<(), AirportError> {
        let n = &mut self.in_use[runway.index()];
        *n = n.checked_sub(1).ok_or(AirportError::NotOccupied(runway))?;
        Ok(())
    }

    /// First runway that keeps `runway` from being safe to occupy: the runway
    /// itself if busy, otherwise the first busy conflicting runway.
    pub fn blocker(&self, runway: Runway) -> Option<Runway> {
        std::iter::once(&runway)
            .chain(runway.conflicts_with())
            .copied()
            .find(|&r| self.is_busy(r))
    }

    pub fn busy(&self) -> impl Iterator<Item = Runway> + '_ {
        Runway::ALL.into_iter().filter(|&r| self.is_busy(r))
    }

    /// Broken invariants in this snapshot, empty when the airport is safe.
    pub fn violations(&self) -> Vec<(Runway, Runway)> {
        let mut found = Vec::new();
        for a in self.busy() {
            if self.count(a) > 1 {
                found.push((a, a));
            }
            found.extend(
                a.conflicts_with()
                    .iter()
                    .filter(|&&b| a < b && self.is_busy(b))
                    .map(|&b| (a, b)),
            );
        }
        found
    }
}

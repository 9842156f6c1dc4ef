use std::{fmt, thread, time::Duration};

use rand::{distributions::Uniform, Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::{info, warn};

use crate::{error::AirportError, runway::Runway, sync::RunwayControl};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AirplaneId(pub usize);

impl fmt::Display for AirplaneId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Where an airplane lands next and how long it stays away from the lock.
pub trait FlightPlan: Send {
    fn next_runway(&mut self) -> Runway;
    fn taxi_time(&mut self) -> Duration;
    fn wait_time(&mut self) -> Duration;
}

/// Uniformly random runway, taxi time in `1..=max_taxi` ms and wait time in `1..=max_wait` ms.
pub struct RandomFlightPlan {
    rng: ChaCha8Rng,
    runways: Vec<Runway>,
    taxi: Uniform<u64>,
    wait: Uniform<u64>,
}

impl RandomFlightPlan {
    /// Without a seed every plan draws from fresh entropy.
    pub fn new(runways: Vec<Runway>, max_taxi_ms: u64, max_wait_ms: u64, seed: Option<u64>) -> Self {
        assert!(!runways.is_empty(), "Expect at least one runway to land on");
        Self {
            rng: seed.map_or_else(ChaCha8Rng::from_entropy, ChaCha8Rng::seed_from_u64),
            runways,
            taxi: Uniform::new_inclusive(1, max_taxi_ms.max(1)),
            wait: Uniform::new_inclusive(1, max_wait_ms.max(1)),
        }
    }
}

impl FlightPlan for RandomFlightPlan {
    fn next_runway(&mut self) -> Runway {
        self.runways[self.rng.gen_range(0..self.runways.len())]
    }
    fn taxi_time(&mut self) -> Duration {
        Duration::from_millis(self.rng.sample(self.taxi))
    }
    fn wait_time(&mut self) -> Duration {
        Duration::from_millis(self.rng.sample(self.wait))
    }
}

/// Cycles through a fixed runway list with fixed delays, zero unless set.
#[derive(Clone, Debug)]
pub struct ScriptedFlightPlan {
    runways: Vec<Runway>,
    next: usize,
    taxi: Duration,
    wait: Duration,
}

impl ScriptedFlightPlan {
    pub fn new(runways: Vec<Runway>) -> Self {
        assert!(!runways.is_empty(), "Expect at least one runway to land on");
        Self {
            runways,
            next: 0,
            taxi: Duration::ZERO,
            wait: Duration::ZERO,
        }
    }

    pub fn with_delays(mut self, taxi: Duration, wait: Duration) -> Self {
        self.taxi = taxi;
        self.wait = wait;
        self
    }
}

impl FlightPlan for ScriptedFlightPlan {
    fn next_runway(&mut self) -> Runway {
        let r = self.runways[self.next];
        self.next = (self.next + 1) % self.runways.len();
        r
    }
    fn taxi_time(&mut self) -> Duration {
        self.taxi
    }
    fn wait_time(&mut self) -> Duration {
        self.wait
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FlightLog {
    pub landed: Vec<Runway>,
}

pub struct Airplane {
    id: AirplaneId,
}

impl Airplane {
    pub fn new(id: AirplaneId) -> Self {
        Self { id }
    }

    pub fn id(&self) -> AirplaneId {
        self.id
    }

    /// Reserve, taxi, release and wait, `landings` times over.
    ///
    /// Stops at the first error. A runway whose reservation was granted but
    /// flagged by the status checker is released before returning, so a
    /// failing airplane never leaves a runway occupied.
    pub fn fly<A, P>(&self, airport: &A, plan: &mut P, landings: usize) -> Result<FlightLog, AirportError>
    where
        A: RunwayControl,
        P: FlightPlan + ?Sized,
    {
        let mut log = FlightLog::default();
        for _ in 0..landings {
            let runway = plan.next_runway();
            if let Err(e) = airport.reserve(self.id, runway) {
                if matches!(e, AirportError::Status { .. }) {
                    if let Err(release) = airport.release(self.id, runway) {
                        warn!(plane = %self.id, %runway, error = %release, "could not vacate flagged runway");
                    }
                }
                return Err(e);
            }

            let taxi = plan.taxi_time();
            info!(
                "Airplane {} is taxiing on Runway {runway} for {} milliseconds",
                self.id,
                taxi.as_millis()
            );
            pause(taxi);

            airport.release(self.id, runway)?;
            log.landed.push(runway);

            let wait = plan.wait_time();
            info!(
                "Airplane {} is waiting for {} milliseconds before landing again",
                self.id,
                wait.as_millis()
            );
            pause(wait);
        }
        Ok(log)
    }
}

fn pause(d: Duration) {
    if !d.is_zero() {
        thread::sleep(d);
    }
}

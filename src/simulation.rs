use std::{sync::Arc, thread};

use anyhow::{anyhow, Context};
use tracing::info;

use crate::{
    airplane::{Airplane, AirplaneId, FlightLog, FlightPlan, RandomFlightPlan},
    config::SimulationConfig,
    status::{RuleChecker, StatusReport},
    sync::server::AirportServer,
};

#[derive(Debug)]
pub struct SimulationReport {
    pub flights: Vec<(AirplaneId, FlightLog)>,
    pub status: StatusReport,
}

impl SimulationReport {
    pub fn total_landings(&self) -> usize {
        self.flights.iter().map(|(_, log)| log.landed.len()).sum()
    }

    pub fn is_clean(&self) -> bool {
        self.status.violations.is_empty()
    }
}

/// Flies `config.airplanes` randomly planned airplanes against one airport.
pub fn run(config: &SimulationConfig) -> anyhow::Result<SimulationReport> {
    config.validate().context("invalid simulation settings")?;
    let runways = config.runways();
    info!(
        airplanes = config.airplanes,
        landings = config.landings,
        ?runways,
        "opening the airport"
    );
    let plans = (0..config.airplanes)
        .map(|n| {
            RandomFlightPlan::new(
                runways.clone(),
                config.max_taxi_ms,
                config.max_wait_ms,
                config.seed_for(n),
            )
        })
        .collect();
    fly_all(plans, config.landings)
}

/// One thread per plan, all sharing a single airport; airplane `n` flies plan `n`.
pub fn fly_all<P>(plans: Vec<P>, landings: usize) -> anyhow::Result<SimulationReport>
where
    P: FlightPlan + 'static,
{
    let airport = Arc::new(AirportServer::new(RuleChecker::default()));
    let ths = plans
        .into_iter()
        .enumerate()
        .map(|(n, mut plan)| {
            let id = AirplaneId(n);
            let airport = airport.clone();
            thread::Builder::new()
                .name(format!("airplane-{n}"))
                .spawn(move || Airplane::new(id).fly(&*airport, &mut plan, landings))
                .map(|th| (id, th))
                .with_context(|| format!("could not launch airplane {id}"))
        })
        .collect::<anyhow::Result<Vec<_>>>()?;

    // Join everyone before reporting the first failure
    let results = ths
        .into_iter()
        .map(|(id, th)| {
            th.join()
                .map_err(|_| anyhow!("airplane {id} panicked"))
                .and_then(|r| r.with_context(|| format!("airplane {id} stopped")))
                .map(|log| (id, log))
        })
        .collect::<Vec<_>>();
    let flights = results.into_iter().collect::<anyhow::Result<Vec<_>>>()?;

    let status = airport.checker().report();
    info!(
        landings = status.landings,
        max_concurrent = status.max_concurrent,
        violations = status.violations.len(),
        "airport closed"
    );
    Ok(SimulationReport { flights, status })
}

#[cfg(test)]
mod tests {
    use super::{fly_all, run};
    use crate::{
        airplane::ScriptedFlightPlan,
        config::SimulationConfig,
        runway::Runway::{self, *},
    };

    #[test]
    fn random_simulation_is_clean() {
        let config = SimulationConfig {
            airplanes: 6,
            landings: 20,
            max_taxi_ms: 2,
            max_wait_ms: 2,
            seed: Some(2024),
            runways: Vec::new(),
        };
        let report = run(&config).unwrap();
        assert_eq!(report.total_landings(), 120);
        assert_eq!(report.status.landings, 120);
        assert!(report.is_clean(), "{:?}", report.status.violations);
        assert!(report.status.max_concurrent <= 2);
    }

    #[test]
    fn restricted_runways() {
        let config = SimulationConfig {
            airplanes: 3,
            landings: 5,
            max_taxi_ms: 1,
            max_wait_ms: 1,
            runways: vec![R4L, R4R],
            ..Default::default()
        };
        let report = run(&config).unwrap();
        assert!(report
            .flights
            .iter()
            .flat_map(|(_, log)| &log.landed)
            .all(|r| matches!(r, R4L | R4R)));
    }

    #[test]
    fn invalid_config_rejected() {
        let config = SimulationConfig {
            airplanes: 0,
            ..Default::default()
        };
        assert!(run(&config).is_err());
    }

    #[test]
    fn every_runway_contended() {
        let plans = Runway::ALL
            .iter()
            .map(|&r| ScriptedFlightPlan::new(vec![r]))
            .chain(Runway::ALL.iter().map(|_| ScriptedFlightPlan::new(Runway::ALL.to_vec())))
            .collect();
        let report = fly_all(plans, 200).unwrap();
        assert_eq!(report.flights.len(), 10);
        assert_eq!(report.total_landings(), 2000);
        assert!(report.is_clean());
    }
}

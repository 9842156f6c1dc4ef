use clap::{Parser, Subcommand};
use runways::{config::SimulationConfig, logging, simulation, Runway};

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct RunwayTools {
    /// Log filter used when RUST_LOG is not set
    #[clap(long, global = true, default_value = "info")]
    log: String,
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Fly airplanes against the airport and report any rule violation
    Simulate(SimulationConfig),
    /// Print which runways cross which
    Topology,
}

fn main() -> anyhow::Result<()> {
    let cli = RunwayTools::parse();
    logging::init_logging(&cli.log)?;
    match cli.command {
        Command::Simulate(config) => {
            let report = simulation::run(&config)?;
            println!(
                "{} landings by {} airplanes, at most {} runways in use at once",
                report.total_landings(),
                report.flights.len(),
                report.status.max_concurrent
            );
            if !report.is_clean() {
                for v in &report.status.violations {
                    eprintln!("violation: {v}");
                }
                anyhow::bail!("{} airport rule violations", report.status.violations.len());
            }
        }
        Command::Topology => {
            for r in Runway::ALL {
                let crossing: Vec<_> = r.conflicts_with().iter().map(|c| c.name()).collect();
                println!("{:>3} crosses {}", r.name(), crossing.join(", "));
            }
        }
    }
    Ok(())
}

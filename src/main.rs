use clap::{Parser, ValueEnum};
use glam::DVec2;
use gravitas::prelude::*;

/// Headless N-body gravity simulation
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Number of bodies to simulate
    #[arg(short, long, default_value_t = 4000)]
    bodies: usize,
    /// Number of steps to run
    #[arg(short, long, default_value_t = 600)]
    steps: usize,
    /// Elapsed seconds per step
    #[arg(long, default_value_t = 0.016)]
    dt: f64,
    /// Largest elapsed seconds a single step may advance by
    #[arg(long, default_value_t = 0.1)]
    max_dt: f64,
    /// Seed of the initial distribution
    #[arg(long)]
    seed: Option<u64>,
    /// Minimum distance used in the force computation
    #[arg(long, default_value_t = 1.0)]
    softening: f64,
    /// Log diagnostics every this many steps
    #[arg(long, default_value_t = 60)]
    report_every: usize,
    /// Algorithm computing the forces
    #[arg(long, value_enum, default_value_t = Method::Parallel)]
    method: Method,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum Method {
    Parallel,
    Sequential,
    Pairs,
}

impl Method {
    fn compute_method(self) -> Box<dyn ComputeMethod<DVec2, f64> + Send> {
        match self {
            #[cfg(feature = "parallel")]
            Method::Parallel => Box::new(parallel::BruteForce),
            #[cfg(not(feature = "parallel"))]
            Method::Parallel => {
                log::warn!("built without the parallel feature, falling back to sequential");
                Box::new(sequential::BruteForce)
            }
            Method::Sequential => Box::new(sequential::BruteForce),
            Method::Pairs => Box::new(sequential::BruteForcePairs),
        }
    }
}

fn main() -> Result<(), gravitas::Error> {
    env_logger::init();
    let args = Args::parse();

    if !args.max_dt.is_finite() || args.max_dt < 0.0 {
        return Err(gravitas::Error::InvalidTimeStep(args.max_dt));
    }

    let scenario = ScenarioConfig {
        count: args.bodies,
        seed: args.seed,
        ..Default::default()
    };
    let config = SimulationConfig::default().with_min_distance(args.softening);

    let mut simulation =
        Simulation::with_compute_method(scenario.generate()?, config, args.method.compute_method())?;

    let initial_energy = simulation.total_energy();
    log::info!(
        "running {} bodies for {} steps with {:?}",
        simulation.len(),
        args.steps,
        args.method
    );

    let dt = if args.dt > args.max_dt {
        log::warn!("clamping dt {} to {}", args.dt, args.max_dt);
        args.max_dt
    } else {
        args.dt
    };

    for step in 1..=args.steps {
        simulation.step(dt)?;

        if args.report_every != 0 && step % args.report_every == 0 {
            let energy = simulation.total_energy();
            log::info!(
                "step {step}: momentum {}, centre of mass {:?}, energy drift {:.3e}",
                simulation.total_momentum(),
                simulation.centre_of_mass(),
                (energy - initial_energy) / initial_energy.abs().max(f64::MIN_POSITIVE)
            );
        }
    }

    if let Some(centre) = simulation.centre_of_mass() {
        println!("centre of mass: {centre}");
    }
    println!("total momentum: {}", simulation.total_momentum());
    println!("total energy: {:e}", simulation.total_energy());

    Ok(())
}

use criterion::{
    criterion_group, criterion_main, AxisScale, BenchmarkId, Criterion, PlotConfiguration,
};
use rand::{thread_rng, Rng};

use glam::DVec2;
use gravitas::prelude::*;

fn random_point_masses(i: usize) -> Vec<PointMass<DVec2, f64>> {
    let mut rng = thread_rng();
    let mut gen = |range| rng.gen_range(range);

    (0..i)
        .map(|_| {
            let position = DVec2::new(gen(-20000.0..20000.0), gen(-20000.0..20000.0));
            let mass = gen(2e15..2e16);

            PointMass::new(position, mass)
        })
        .collect()
}

fn criterion_benchmark(c: &mut Criterion) {
    let law = SimulationConfig::default().law();

    let mut group = c.benchmark_group("Gravitas");
    group
        .plot_config(PlotConfiguration::default().summary_scale(AxisScale::Logarithmic))
        .warm_up_time(std::time::Duration::from_secs(1))
        .sample_size(50);

    for i in (2..=12).map(|i| 2_usize.pow(i)) {
        let point_masses = random_point_masses(i);

        #[cfg(feature = "parallel")]
        {
            let mut cm = parallel::BruteForce;
            group.bench_with_input(
                BenchmarkId::new("parallel::BruteForce", i),
                &point_masses,
                |b, input| b.iter(|| cm.compute(input.as_slice(), &law)),
            );
        }

        {
            let mut cm = sequential::BruteForce;
            group.bench_with_input(
                BenchmarkId::new("sequential::BruteForce", i),
                &point_masses,
                |b, input| b.iter(|| cm.compute(input.as_slice(), &law)),
            );

            let mut cm = sequential::BruteForcePairs;
            group.bench_with_input(
                BenchmarkId::new("sequential::BruteForcePairs", i),
                &point_masses,
                |b, input| b.iter(|| cm.compute(input.as_slice(), &law)),
            );
        }
    }

    group.finish();
}

fn step_benchmark(c: &mut Criterion) {
    let bodies = ScenarioConfig {
        count: 1024,
        seed: Some(0),
        ..Default::default()
    }
    .generate()
    .expect("valid scenario");

    let mut simulation =
        Simulation::new(bodies, SimulationConfig::default()).expect("valid simulation");

    c.bench_function("Simulation::step 1024", |b| {
        b.iter(|| simulation.step(0.016).expect("valid time step"))
    });
}

criterion_group!(benches, criterion_benchmark, step_benchmark);
criterion_main!(benches);

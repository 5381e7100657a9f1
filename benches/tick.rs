use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use stress_scene::camera::OrbitCamera;
use stress_scene::core::advance;
use stress_scene::geometry::{build_palette, Complexity};
use stress_scene::scene::{RngSource, SimulationState};

fn populated_state(objects: usize, lights: usize) -> SimulationState {
    let mut rng = RngSource::seeded(0xC0FFEE);
    let mut state = SimulationState::new(OrbitCamera::default(), Complexity::MEDIUM);
    state.regenerate_objects(objects, &mut rng);
    state.regenerate_lights(lights, &mut rng);
    state
}

fn bench_advance(c: &mut Criterion) {
    let mut group = c.benchmark_group("advance");

    for count in [1_000, 10_000, 20_000] {
        let mut state = populated_state(count, 3);
        let mut t = 0.0_f32;
        group.bench_with_input(BenchmarkId::new("objects", count), &count, |b, _| {
            b.iter(|| {
                t += 1.0 / 60.0;
                advance(black_box(&mut state), black_box(t));
            })
        });
    }

    group.finish();
}

fn bench_regenerate(c: &mut Criterion) {
    let mut group = c.benchmark_group("regenerate");
    let mut rng = RngSource::seeded(7);
    let mut state = SimulationState::new(OrbitCamera::default(), Complexity::MEDIUM);

    group.bench_function("objects_10000", |b| {
        b.iter(|| state.regenerate_objects(black_box(10_000), &mut rng))
    });

    group.finish();
}

fn bench_palette(c: &mut Criterion) {
    let mut group = c.benchmark_group("palette");

    for level in Complexity::MIN..=Complexity::MAX {
        if let Some(complexity) = Complexity::new(level) {
            group.bench_with_input(
                BenchmarkId::new("build", complexity.label()),
                &complexity,
                |b, &complexity| b.iter(|| build_palette(black_box(complexity))),
            );
        }
    }

    group.finish();
}

criterion_group!(benches, bench_advance, bench_regenerate, bench_palette);
criterion_main!(benches);

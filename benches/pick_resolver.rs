use airglobe::{Camera, PickInput, PickResolver};
use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

fn pick_resolver_benchmark(c: &mut Criterion) {
    let input = PickInput {
        screen_x: 640.0,
        screen_y: 380.0,
        scene_width: 1200.0,
        scene_height: 800.0,
        camera: Camera::default(),
        rotation_angle_deg: 123.4,
        radius: 300.0,
        hit: None,
    };

    c.bench_function("pick_resolver", |b| {
        b.iter(|| PickResolver::resolve(black_box(&input)).unwrap());
    });
}

criterion_group!(benches, pick_resolver_benchmark);
criterion_main!(benches);

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use stratum_engine::buffer::{DynamicBuffer, HostBackend};
use stratum_engine::{triangulate, Point, VertexObject};

fn clockwise_star(n: usize) -> Vec<Point> {
    let mut rng = StdRng::seed_from_u64(n as u64);
    (0..n)
        .map(|k| {
            let a = (k as f32 + rng.gen_range(0.0..0.5)) / n as f32 * std::f32::consts::TAU;
            let r: f32 = rng.gen_range(20.0..100.0);
            Point::new(-a.cos() * r, a.sin() * r)
        })
        .collect()
}

fn bench_triangulate(c: &mut Criterion) {
    let mut group = c.benchmark_group("triangulate");
    for n in [16usize, 64, 256] {
        let star = clockwise_star(n);
        group.bench_with_input(BenchmarkId::from_parameter(n), &star, |b, star| {
            b.iter(|| triangulate(black_box(star)))
        });
    }
    group.finish();
}

fn bench_upload(c: &mut Criterion) {
    let obj = VertexObject::from_vertices(clockwise_star(64)).expect("star triangulates");
    let (coords, indices) = obj.vertex_array();

    c.bench_function("upload_steady_state", |b| {
        let mut backend = HostBackend::new();
        let mut buffer = DynamicBuffer::new(&mut backend, 256);
        b.iter(|| buffer.upload(&mut backend, black_box(&coords), black_box(&indices)))
    });
}

criterion_group!(benches, bench_triangulate, bench_upload);
criterion_main!(benches);

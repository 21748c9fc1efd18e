use criterion::{black_box, criterion_group, criterion_main, Criterion};
use ndarray::Array2;

use sphere_warp::chunk::planner::plan_tiles;
use sphere_warp::operation::{remap, Operation, WarpOptions};
use sphere_warp::proj::hammer;

fn make_test_data(size: usize) -> Array2<f64> {
    let mut src = Array2::zeros((size, size));
    for row in 0..size {
        for col in 0..size {
            src[(row, col)] = (row * size + col) as f64;
        }
    }
    src
}

fn bench_operation(c: &mut Criterion, op: Operation) {
    let sizes = [256, 512, 1024];
    for &size in &sizes {
        let src = make_test_data(size);

        c.bench_function(&format!("{}_{size}x{size}", op.name()), |b| {
            b.iter(|| {
                black_box(remap(op, &src, WarpOptions::default(), &mut |_| {}).unwrap());
            });
        });
    }
}

fn bench_hammer_tile(c: &mut Criterion) {
    bench_operation(c, Operation::HammerTile);
}

fn bench_polar_to_hammer(c: &mut Criterion) {
    bench_operation(c, Operation::PolarToHammer);
}

fn bench_polar_to_mercator(c: &mut Criterion) {
    bench_operation(c, Operation::PolarToMercator);
}

fn bench_tile_size_scaling(c: &mut Criterion) {
    let src = make_test_data(1024);

    for tile_size in [8, 32, 64, 256] {
        let options = WarpOptions { tile_size };
        c.bench_function(&format!("hammer_tile_1024_tile{tile_size}"), |b| {
            b.iter(|| {
                black_box(remap(Operation::HammerTile, &src, options, &mut |_| {}).unwrap());
            });
        });
    }
}

fn bench_hammer_throughput(c: &mut Criterion) {
    let n = 1_000_000;
    let points: Vec<(f64, f64)> = (0..n)
        .map(|i| {
            let t = i as f64 / n as f64;
            (2.0 * t - 1.0, 1.0 - 2.0 * t * t)
        })
        .collect();

    c.bench_function("hammer_reproject_1M_points", |b| {
        b.iter(|| {
            for &(x, y) in &points {
                black_box(hammer::reproject(x, y));
            }
        });
    });
}

fn bench_plan_tiles(c: &mut Criterion) {
    c.bench_function("plan_tiles_4096_tile64", |b| {
        b.iter(|| black_box(plan_tiles((4096, 4096), (64, 64)).unwrap()));
    });
}

criterion_group!(
    benches,
    bench_hammer_tile,
    bench_polar_to_hammer,
    bench_polar_to_mercator,
    bench_tile_size_scaling,
    bench_hammer_throughput,
    bench_plan_tiles
);
criterion_main!(benches);

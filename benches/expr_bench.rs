use criterion::{black_box, criterion_group, criterion_main, Criterion};
use gridflow::relax::RedBlack;
use gridflow::{laplacian, set, set_region, sum, EvaluableExt, Extent, Grid};

// Benchmark constants to avoid magic numbers
const SIZE: usize = 256;

fn inputs() -> (Grid<f64>, Grid<f64>) {
    let extent = Extent::new(SIZE, SIZE);
    let a = Grid::from_fn(extent, |x, y| (x as f64 * 0.01).sin() + y as f64 * 0.5);
    let b = Grid::from_fn(extent, |x, y| 1.0 + ((x ^ y) & 7) as f64);
    (a, b)
}

fn bench_fused_expression(c: &mut Criterion) {
    let (a, b) = inputs();
    let mut out: Grid<f64> = Grid::new(a.extent());

    c.bench_function("fused_a_plus_2b_minus_sin_a", |bench| {
        bench.iter(|| {
            set(&mut out, &a + 2.0f64 * &b - (&a).sin());
            black_box(&out);
        })
    });
}

fn bench_hand_loop(c: &mut Criterion) {
    let (a, b) = inputs();
    let mut out = vec![0.0f64; SIZE * SIZE];

    c.bench_function("hand_loop_a_plus_2b_minus_sin_a", |bench| {
        bench.iter(|| {
            for ((o, &av), &bv) in out.iter_mut().zip(a.as_slice()).zip(b.as_slice()) {
                *o = av + 2.0 * bv - av.sin();
            }
            black_box(&out);
        })
    });
}

fn bench_laplacian(c: &mut Criterion) {
    let (a, _) = inputs();
    let mut out: Grid<f64> = Grid::new(a.extent());
    let interior = a.region().inset(1);

    c.bench_function("laplacian_5pt", |bench| {
        bench.iter(|| {
            set_region(&mut out, interior, laplacian(&a, (1.0, 1.0)));
            black_box(&out);
        })
    });
}

fn bench_reduction(c: &mut Criterion) {
    let (a, b) = inputs();
    let region = a.region();

    c.bench_function("sum_of_product", |bench| {
        bench.iter(|| black_box(sum((&a).elementwise_mul(&b), region)))
    });
}

fn bench_red_black_sweep(c: &mut Criterion) {
    let (mut u, _) = inputs();
    let f = Grid::filled(u.extent(), -1.0);
    let mut solver = RedBlack::new(&u, (1.0, 1.0));

    c.bench_function("red_black_sweep", |bench| {
        bench.iter(|| {
            solver.sweep(&mut u, &f);
            black_box(&u);
        })
    });
}

criterion_group!(
    benches,
    bench_fused_expression,
    bench_hand_loop,
    bench_laplacian,
    bench_reduction,
    bench_red_black_sweep
);
criterion_main!(benches);

use diagonal_munkres::Arbitrary;
use diagonal_munkres::Cost;
use diagonal_munkres::CostMatrix;
use diagonal_munkres::Exhaustive;
use diagonal_munkres::Munkres;

criterion::criterion_main!(benches);
criterion::criterion_group! {
    name = benches;
    config = criterion::Criterion::default()
        .without_plots()
        .noise_threshold(3.0)
        .significance_level(0.01)
        .sample_size(10)
        .measurement_time(std::time::Duration::from_secs(1));
    targets =
        solving_arbitrary_assignment,
        enumerating_arbitrary_assignment,
        solving_square_assignment,
        solving_wide_assignment,
}

fn uniform(rows: usize, cols: usize) -> CostMatrix {
    let data = (0..rows * cols).map(|_| rand::random::<Cost>()).collect();
    CostMatrix::new(rows, cols, data).expect("valid shape")
}

fn solving_arbitrary_assignment(c: &mut criterion::Criterion) {
    let ref matrix = CostMatrix::random();
    c.bench_function("solve an Arbitrary assignment", |b| {
        b.iter(|| Munkres::from(matrix.clone()).compute())
    });
}

fn enumerating_arbitrary_assignment(c: &mut criterion::Criterion) {
    let ref matrix = CostMatrix::random();
    c.bench_function("enumerate an Arbitrary assignment", |b| {
        b.iter(|| Exhaustive::from(matrix).minimize())
    });
}

fn solving_square_assignment(c: &mut criterion::Criterion) {
    let ref matrix = uniform(65, 64);
    c.bench_function("solve a 64x64 assignment without diagonal", |b| {
        b.iter(|| Munkres::from(matrix.clone()).compute())
    });
}

fn solving_wide_assignment(c: &mut criterion::Criterion) {
    let ref matrix = uniform(33, 64);
    c.bench_function("solve 32 rows into 64 columns with diagonal", |b| {
        b.iter(|| Munkres::from(matrix.clone()).compute())
    });
}

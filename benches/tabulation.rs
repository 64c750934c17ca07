use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use std::hint::black_box;
use tabulation::formatter::{Formatter, HtmlConfig};
use tabulation::{GridLike, Tabulation};

// Helper function to create a filled tabulation of the given size
fn create_test_tabulation(rows: usize, columns: usize) -> Tabulation<i32> {
    let t = Tabulation::default();
    for _ in 0..rows {
        let values: Vec<i32> = (0..columns).map(|_| rand::random::<i32>()).collect();
        t.rows().push(values);
    }
    t
}

// Benchmark pushing rows of different widths
fn bench_push_rows(c: &mut Criterion) {
    let mut group = c.benchmark_group("push_rows");
    let sizes = [(10, 4), (100, 8), (100, 32), (1000, 16)];

    for (rows, columns) in sizes {
        let values: Vec<i32> = (0..columns as i32).collect();
        group.bench_with_input(
            BenchmarkId::new("size", format!("{}x{}", rows, columns)),
            &values,
            |b, values| {
                b.iter(|| {
                    let t: Tabulation<i32> = Tabulation::default();
                    for _ in 0..rows {
                        t.rows().push(values.iter().copied());
                    }
                    black_box(t.cells_count())
                });
            },
        );
    }
    group.finish();
}

// Benchmark pushing columns, which touches every row
fn bench_push_columns(c: &mut Criterion) {
    let mut group = c.benchmark_group("push_columns");

    for size in [10, 100, 500] {
        group.bench_with_input(BenchmarkId::new("size", size), &size, |b, &size| {
            b.iter(|| {
                let t: Tabulation<i32> = Tabulation::default();
                for column in 0..size {
                    t.columns().push((0..size).map(|row| row * column));
                }
                black_box(t.cells_count())
            });
        });
    }
    group.finish();
}

// Benchmark growing the table through cell assignment
fn bench_set_cells(c: &mut Criterion) {
    let mut group = c.benchmark_group("set_cells");

    for size in [10isize, 100, 300] {
        group.bench_with_input(BenchmarkId::new("diagonal", size), &size, |b, &size| {
            b.iter(|| {
                let t: Tabulation<isize> = Tabulation::default();
                for i in 0..size {
                    t.cell(i, i).set_value(i).unwrap();
                }
                black_box(t.cells_count())
            });
        });
    }
    group.finish();
}

fn bench_resize(c: &mut Criterion) {
    let t = create_test_tabulation(200, 50);

    c.bench_function("resize_shrink_and_grow", |b| {
        b.iter(|| {
            let copy = Tabulation::from(t.to_grid());
            copy.resize(black_box(100), black_box(100)).unwrap();
            black_box(copy.cells_count())
        });
    });
}

fn bench_iterate(c: &mut Criterion) {
    let t = create_test_tabulation(500, 20);

    c.bench_function("iterate_cells", |b| {
        b.iter(|| {
            let mut sum = 0i64;
            for row in &t.rows() {
                for cell in &row.columns() {
                    sum += cell.with_value(|value| value.copied().unwrap_or_default()) as i64;
                }
            }
            black_box(sum)
        });
    });
}

fn bench_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("render_html");
    let configs = [
        ("default", HtmlConfig::default()),
        (
            "compact_unescaped",
            HtmlConfig {
                indent: 0,
                escape: false,
                ..HtmlConfig::default()
            },
        ),
    ];

    for (rows, columns) in [(10, 10), (100, 10), (500, 20)] {
        let t = create_test_tabulation(rows, columns);
        for (name, config) in configs.iter() {
            group.bench_with_input(
                BenchmarkId::new(*name, format!("{}x{}", rows, columns)),
                &t,
                |b, t| {
                    b.iter(|| black_box(Formatter::new(t).to_html_with_config(config).unwrap()));
                },
            );
        }
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_push_rows,
    bench_push_columns,
    bench_set_cells,
    bench_resize,
    bench_iterate,
    bench_render
);
criterion_main!(benches);

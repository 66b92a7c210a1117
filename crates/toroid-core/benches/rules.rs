//! Criterion benchmarks for the rule engine
//!
//! Run with: cargo bench -p toroid-core

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use toroid_core::{rules, Cell, DoubleBuffer, Grid, GridDims};

/// Deterministic soup: roughly one cell in three alive.
fn soup(dims: GridDims) -> Grid {
    let mut grid = Grid::new(dims);
    let mut state: u32 = 0x2545_f491;
    for row in 0..dims.rows() {
        for col in 0..dims.cols() {
            state ^= state << 13;
            state ^= state >> 17;
            state ^= state << 5;
            grid.set(row, col, Cell::from_alive(state % 3 == 0));
        }
    }
    grid
}

fn bench_step(c: &mut Criterion) {
    let mut group = c.benchmark_group("step");

    for dims in [GridDims::REFERENCE, GridDims::new(100, 200)] {
        let grid = soup(dims);
        group.throughput(Throughput::Elements(dims.cell_count() as u64));

        group.bench_function(format!("alloc_{dims}"), |b| {
            b.iter(|| rules::step(black_box(&grid)));
        });

        group.bench_function(format!("double_buffer_{dims}"), |b| {
            let mut buffers = DoubleBuffer::new(grid.clone());
            b.iter(|| {
                buffers.advance();
                black_box(buffers.current().live_count())
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_step);
criterion_main!(benches);

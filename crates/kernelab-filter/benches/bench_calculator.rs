use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use kernelab_filter::apply::apply_filter;
use kernelab_filter::calculator::{calculate, FilterMode};
use kernelab_filter::sweep::KernelSweep;
use kernelab_grid::{GridSize, Kernel, PixelGrid};

fn bench_calculator(c: &mut Criterion) {
    let mut group = c.benchmark_group("Filter Calculator");

    for grid_size in [5, 10, 20].iter() {
        for kernel_size in [3, 5].iter() {
            if grid_size < kernel_size {
                continue;
            }

            let parameter_string = format!("{}x{}", grid_size, kernel_size);

            let input = PixelGrid::filled(
                GridSize {
                    width: *grid_size,
                    height: *grid_size,
                },
                128,
            );
            let kernel = Kernel::ones(*kernel_size).unwrap();
            let mut sweep = KernelSweep::new(*grid_size, kernel.radius());
            sweep.start();

            for mode in [FilterMode::Mean, FilterMode::Convolution, FilterMode::Median] {
                group.bench_with_input(
                    BenchmarkId::new(format!("calculate_{:?}", mode), &parameter_string),
                    &(&input, &kernel, &sweep),
                    |b, i| b.iter(|| black_box(calculate(i.0, i.1, i.2, 1.0, mode))),
                );
            }

            group.bench_with_input(
                BenchmarkId::new("apply_filter_mean", &parameter_string),
                &(&input, &kernel),
                |b, i| b.iter(|| black_box(apply_filter(i.0, i.1, FilterMode::Mean, 1.0))),
            );
        }
    }

    group.finish();
}

criterion_group!(benches, bench_calculator);
criterion_main!(benches);

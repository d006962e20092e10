use kernelab_filter::apply::{apply_filter, step};
use kernelab_filter::calculator::{calculate, FilterMode};
use kernelab_filter::config::FilterConfig;
use kernelab_filter::error::FilterError;
use kernelab_filter::sweep::KernelSweep;
use kernelab_filter::writer::{quantize, write_output};
use kernelab_grid::{GridSize, Kernel, PixelGrid};

fn checkerboard(side: usize) -> PixelGrid {
    let mut grid = PixelGrid::filled(
        GridSize {
            width: side,
            height: side,
        },
        255,
    );
    for row in 0..side {
        for col in 0..side {
            if (row + col) % 2 == 1 {
                grid.set(row as i32, col as i32, 0);
            }
        }
    }
    grid
}

#[test]
fn full_sweep_equals_manual_stepping() -> Result<(), FilterError> {
    let input = checkerboard(6);
    let kernel = Kernel::ones(3)?;

    for mode in [
        FilterMode::Mean,
        FilterMode::CrossCorrelation,
        FilterMode::Convolution,
        FilterMode::CustomConvolution,
        FilterMode::Gaussian,
        FilterMode::Median,
    ] {
        let applied = apply_filter(&input, &kernel, mode, 1.0)?;

        let mut stepped = PixelGrid::unset(input.size());
        let mut sweep = KernelSweep::new(input.width(), kernel.radius());
        sweep.start();
        loop {
            step(&input, &kernel, &sweep, &mut stepped, 1.0, mode);
            if sweep.next().is_none() {
                break;
            }
        }

        assert_eq!(applied, stepped);
    }
    Ok(())
}

#[test]
fn outputs_round_trip_through_the_output_grid() -> Result<(), FilterError> {
    let input = checkerboard(5);
    let config = FilterConfig {
        mode: FilterMode::Gaussian,
        sigma: 0.8,
        ..Default::default()
    };
    let kernel = config.build_kernel()?;

    let mut output = PixelGrid::unset(input.size());
    let mut sweep = KernelSweep::new(input.width(), config.radius());
    sweep.start();
    loop {
        let result = calculate(&input, &kernel, &sweep, config.constant, config.mode)
            .expect("window always covers cells while navigating");
        write_output(&mut output, &result);

        let (row, col) = result.output_cell;
        assert_eq!(output.get(row as i32, col as i32), Some(quantize(result.output)));

        if sweep.next().is_none() {
            break;
        }
    }
    Ok(())
}

#[test]
fn mean_sweep_of_checkerboard_averages_the_window() -> Result<(), FilterError> {
    // a 3x3 window on a checkerboard sees either 5 or 4 white cells
    let input = checkerboard(5);
    let kernel = Kernel::ones(3)?;

    let output = apply_filter(&input, &kernel, FilterMode::Mean, 1.0)?;

    for row in 1..=3 {
        for col in 1..=3 {
            let whites = if (row + col) % 2 == 0 { 5.0 } else { 4.0 };
            let expected = quantize(whites * 255.0 / 9.0);
            assert_eq!(output.get(row, col), Some(expected));
        }
    }
    Ok(())
}

#[test]
fn sweep_resize_keeps_pipeline_consistent() -> Result<(), FilterError> {
    let input = checkerboard(7);
    let kernel = Kernel::ones(3)?;
    let mut sweep = KernelSweep::new(5, kernel.radius());
    sweep.start();
    sweep.next();

    // a grid-size change mid-navigation resets the sweep; the next
    // calculation runs at the fresh initial position without any cleanup
    sweep.set_grid_size(input.width());
    let result = calculate(&input, &kernel, &sweep, 1.0, FilterMode::Mean)
        .expect("reset sweep still covers a full window");
    assert_eq!(result.output_cell, (1, 1));
    assert_eq!(result.records.len(), 9);
    Ok(())
}

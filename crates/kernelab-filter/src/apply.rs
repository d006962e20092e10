//! Full-grid filter application
//!
//! The synchronous counterpart of an interactive auto-advance loop: step
//! through every valid window position, calculate, and write the result
//! back. Each step completes fully before the next begins, so stopping
//! between any two steps leaves the grids and the sweep consistent.

use kernelab_grid::{Kernel, PixelGrid};

use crate::calculator::{calculate, FilterMode};
use crate::error::FilterError;
use crate::sweep::KernelSweep;
use crate::writer::write_output;

/// Run one calculate-and-write step at the sweep's current position.
///
/// # Returns
///
/// The value written to the output grid, or `None` when the calculator
/// produced no result for the current window.
pub fn step(
    input: &PixelGrid,
    kernel: &Kernel,
    sweep: &KernelSweep,
    output: &mut PixelGrid,
    constant: f32,
    mode: FilterMode,
) -> Option<u8> {
    let result = calculate(input, kernel, sweep, constant, mode)?;
    Some(write_output(output, &result))
}

/// Apply a filter across every valid window position of the input grid.
///
/// # Arguments
///
/// * `input` - The square input grid.
/// * `kernel` - The kernel to slide across the grid.
/// * `mode` - The filter family to compute.
/// * `constant` - The constant multiplier applied to kernel weights.
///
/// # Returns
///
/// A fresh output grid with every reachable center cell filled in; cells
/// the window center never visits stay unset.
///
/// # Errors
///
/// Returns an error if the input grid is not square or the kernel does not
/// fit it at any position.
pub fn apply_filter(
    input: &PixelGrid,
    kernel: &Kernel,
    mode: FilterMode,
    constant: f32,
) -> Result<PixelGrid, FilterError> {
    if input.width() != input.height() {
        return Err(FilterError::NonSquareGrid(input.width(), input.height()));
    }

    let mut sweep = KernelSweep::new(input.width(), kernel.radius());
    if sweep.total_positions() == 0 {
        return Err(FilterError::KernelDoesNotFit {
            kernel: kernel.size(),
            grid: input.width(),
        });
    }

    log::debug!(
        "applying {:?} over {} positions of a {}x{} grid",
        mode,
        sweep.total_positions(),
        input.width(),
        input.height()
    );

    let mut output = PixelGrid::unset(input.size());
    sweep.start();
    loop {
        step(input, kernel, &sweep, &mut output, constant, mode);
        if sweep.next().is_none() {
            break;
        }
    }

    Ok(output)
}

//! Output write-back
//!
//! Quantizes a calculator's aggregate output to a storable pixel value and
//! writes it into the output grid at the window center.

use kernelab_grid::PixelGrid;

use crate::calculator::CalculationResult;

/// Quantize a filter output to a pixel value.
///
/// Rounds half away from zero, then clamps to [0, 255]. The same policy
/// applies to every filter mode; write-back is the only place outputs are
/// rounded.
pub fn quantize(output: f32) -> u8 {
    output.round().clamp(0.0, 255.0) as u8
}

/// Write a calculation result into the output grid at its output cell.
///
/// Callers holding a `None` calculation (the no-result sentinel) simply skip
/// the write; nothing is stored for a window that produced no output.
///
/// # Returns
///
/// The quantized value that was written.
pub fn write_output(grid: &mut PixelGrid, result: &CalculationResult) -> u8 {
    let value = quantize(result.output);
    let (row, col) = result.output_cell;
    grid.set(row as i32, col as i32, value);
    value
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculator::{calculate, FilterMode};
    use crate::sweep::KernelSweep;
    use kernelab_grid::{GridError, GridSize, Kernel, PixelGrid};

    #[test]
    fn quantize_rounds_half_away_from_zero() {
        assert_eq!(quantize(127.5), 128);
        assert_eq!(quantize(127.49), 127);
        assert_eq!(quantize(0.5), 1);
        assert_eq!(quantize(-0.4), 0);
        assert_eq!(quantize(-12.0), 0);
        assert_eq!(quantize(255.4), 255);
        assert_eq!(quantize(400.0), 255);
    }

    #[test]
    fn written_value_round_trips_through_the_grid() -> Result<(), GridError> {
        #[rustfmt::skip]
        let rows = vec![
            vec![10, 20, 30],
            vec![40, 50, 60],
            vec![70, 80, 90],
        ];
        let input = PixelGrid::from_rows(&rows)?;
        let kernel = Kernel::ones(3)?;
        let mut sweep = KernelSweep::new(3, 1);
        sweep.start();

        let result = calculate(&input, &kernel, &sweep, 1.0, FilterMode::Mean).unwrap();
        let mut output = PixelGrid::unset(GridSize {
            width: 3,
            height: 3,
        });
        let written = write_output(&mut output, &result);

        assert_eq!(written, quantize(result.output));
        assert_eq!(output.get(1, 1), Some(written));
        // mean of 10..=90 is 50 exactly
        assert_eq!(output.get(1, 1), Some(50));
        // no other cell was touched
        assert_eq!(output.get(0, 0), None);
        Ok(())
    }
}

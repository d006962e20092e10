//! Filter calculators
//!
//! One parameterized per-cell loop shared by every filter family. The
//! families differ only in how the kernel is pre-transformed, where the input
//! value is read from, and how the per-cell products are aggregated; those
//! three choices are captured by [`FilterProfile`] and selected through
//! [`FilterMode`].

use kernelab_grid::{Kernel, PixelGrid};

use crate::sweep::KernelSweep;

/// The filter families supported by the calculator.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FilterMode {
    /// Average of the window, all-ones kernel by convention.
    Mean,
    /// Weighted sum with the kernel as-is.
    CrossCorrelation,
    /// Weighted sum with the kernel rotated 180 degrees.
    Convolution,
    /// Convolution taught through reflected input coordinates, with explicit
    /// zero-padding where the reflection leaves the grid.
    CustomConvolution,
    /// Weighted sum with a Gaussian kernel; the kernel is expected to come
    /// from [`crate::kernels::gaussian_kernel`]. No rotation is applied
    /// because the kernel is symmetric.
    Gaussian,
    /// Order-statistic filter; kernel weights are ignored.
    Median,
}

/// How the kernel is prepared before the per-cell loop.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KernelTransform {
    /// Use the kernel as-is.
    Identity,
    /// Rotate the kernel 180 degrees once before the loop.
    Flip180,
}

/// Where the input value for a window cell is read from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PaddingPolicy {
    /// Read the window cell directly; the sweep invariant keeps it in the
    /// grid.
    FitOnly,
    /// Read the coordinate reflected about the window center, substituting 0
    /// when the reflection leaves the grid.
    ZeroPadReflected,
}

/// How the final output value derives from the per-cell records.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Aggregation {
    /// Sum of the clamped products.
    Sum,
    /// Sum of the clamped products divided by the kernel area. The division
    /// happens exactly once, here; kernel weights are never pre-normalized
    /// for the mean.
    Mean,
    /// Median of the input values; weights do not participate.
    Median,
}

/// The loop behavior of one filter family.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FilterProfile {
    /// Kernel pre-transform applied once before the loop.
    pub transform: KernelTransform,
    /// Input lookup policy for each window cell.
    pub padding: PaddingPolicy,
    /// Output derivation from the per-cell records.
    pub aggregation: Aggregation,
}

impl FilterMode {
    /// The loop behavior of this filter family.
    pub fn profile(self) -> FilterProfile {
        match self {
            FilterMode::Mean => FilterProfile {
                transform: KernelTransform::Identity,
                padding: PaddingPolicy::FitOnly,
                aggregation: Aggregation::Mean,
            },
            FilterMode::CrossCorrelation | FilterMode::Gaussian => FilterProfile {
                transform: KernelTransform::Identity,
                padding: PaddingPolicy::FitOnly,
                aggregation: Aggregation::Sum,
            },
            FilterMode::Convolution => FilterProfile {
                transform: KernelTransform::Flip180,
                padding: PaddingPolicy::FitOnly,
                aggregation: Aggregation::Sum,
            },
            FilterMode::CustomConvolution => FilterProfile {
                transform: KernelTransform::Flip180,
                padding: PaddingPolicy::ZeroPadReflected,
                aggregation: Aggregation::Sum,
            },
            FilterMode::Median => FilterProfile {
                transform: KernelTransform::Identity,
                padding: PaddingPolicy::FitOnly,
                aggregation: Aggregation::Median,
            },
        }
    }
}

/// One weighted contribution to a filter output.
///
/// Records are produced in [`KernelSweep::affected_cells`] order and are
/// never mutated after creation; they exist so a display layer can show the
/// step-by-step arithmetic behind an output value.
#[derive(Clone, Debug, PartialEq)]
pub struct CellCalculation {
    /// Position of this record in the window enumeration.
    pub index: usize,
    /// Grid coordinate the input value was read from. For the reflected
    /// convolution path this can lie outside the grid.
    pub coordinate: (i32, i32),
    /// The input pixel value; 0 for unset or padded cells.
    pub input_value: f32,
    /// The base kernel weight after any pre-transform.
    pub kernel_weight: f32,
    /// The constant multiplier the calculation ran with.
    pub constant: f32,
    /// `kernel_weight * constant` (fixed at 1.0 for the median filter).
    pub effective_weight: f32,
    /// `input_value * effective_weight`, before clamping.
    pub product: f32,
    /// The product clamped to the pixel range [0, 255].
    pub clamped: f32,
}

/// The sorted-order view behind a median output.
#[derive(Clone, Debug, PartialEq)]
pub struct MedianBreakdown {
    /// The window's input values in ascending order.
    pub sorted_values: Vec<f32>,
    /// Index of the median element, or of the lower of the two middle
    /// elements for an even count.
    pub low_index: usize,
    /// Index of the median element, or of the upper of the two middle
    /// elements for an even count.
    pub high_index: usize,
}

/// The full outcome of one calculator invocation.
#[derive(Clone, Debug, PartialEq)]
pub struct CalculationResult {
    /// Per-cell records in window enumeration order.
    pub records: Vec<CellCalculation>,
    /// Sum of the clamped per-cell products.
    pub total: f32,
    /// The kernel area `(2k+1)^2`.
    pub area: usize,
    /// The aggregate output value, before write-back rounding.
    pub output: f32,
    /// The grid cell the output belongs to (the window center).
    pub output_cell: (usize, usize),
    /// Sorted-order details, present for the median filter only.
    pub median: Option<MedianBreakdown>,
}

/// Compute the per-cell breakdown and aggregate output for the window at the
/// sweep's current position.
///
/// For each affected cell, in enumeration order: the input value is read
/// from the grid (unset cells read as 0), the cell's offset from the center
/// selects the kernel weight, the weight is scaled by `constant`, and the
/// resulting product is clamped to [0, 255] before entering the running
/// total. Kernel pre-transform, input lookup and aggregation follow
/// [`FilterMode::profile`].
///
/// # Returns
///
/// The calculation result, or `None` when the window covers no cells. This
/// function is total: it never panics or divides by zero for any grid,
/// kernel and sweep combination.
pub fn calculate(
    grid: &PixelGrid,
    kernel: &Kernel,
    sweep: &KernelSweep,
    constant: f32,
    mode: FilterMode,
) -> Option<CalculationResult> {
    let cells = sweep.affected_cells();
    if cells.is_empty() {
        return None;
    }

    let profile = mode.profile();
    let (center_row, center_col) = sweep.output_cell();

    let flipped;
    let kernel = match profile.transform {
        KernelTransform::Identity => kernel,
        KernelTransform::Flip180 => {
            flipped = kernel.flip180();
            &flipped
        }
    };
    let k = kernel.radius() as i32;
    let area = kernel.size() * kernel.size();

    let mut records = Vec::with_capacity(cells.len());
    let mut total = 0.0f32;

    for (index, &(row, col)) in cells.iter().enumerate() {
        let dr = row as i32 - center_row as i32;
        let dc = col as i32 - center_col as i32;

        let (in_row, in_col) = match profile.padding {
            PaddingPolicy::FitOnly => (row as i32, col as i32),
            PaddingPolicy::ZeroPadReflected => {
                (center_row as i32 - dr, center_col as i32 - dc)
            }
        };
        let input_value = grid.get(in_row, in_col).map(f32::from).unwrap_or(0.0);

        let (kernel_weight, effective_weight) = match profile.aggregation {
            Aggregation::Median => (1.0, 1.0),
            _ => {
                let weight = kernel.get((dr + k) as usize, (dc + k) as usize);
                (weight, weight * constant)
            }
        };

        let product = input_value * effective_weight;
        let clamped = product.clamp(0.0, 255.0);
        total += clamped;

        records.push(CellCalculation {
            index,
            coordinate: (in_row, in_col),
            input_value,
            kernel_weight,
            constant,
            effective_weight,
            product,
            clamped,
        });
    }

    let (output, median) = match profile.aggregation {
        Aggregation::Sum => (total, None),
        Aggregation::Mean => (total / area as f32, None),
        Aggregation::Median => {
            let mut sorted: Vec<f32> = records.iter().map(|r| r.input_value).collect();
            sorted.sort_by(|a, b| a.total_cmp(b));
            let count = sorted.len();
            let (low_index, high_index) = if count % 2 == 1 {
                (count / 2, count / 2)
            } else {
                ((count - 1) / 2, count / 2)
            };
            let median_value = (sorted[low_index] + sorted[high_index]) / 2.0;
            (
                median_value * constant,
                Some(MedianBreakdown {
                    sorted_values: sorted,
                    low_index,
                    high_index,
                }),
            )
        }
    };

    Some(CalculationResult {
        records,
        total,
        area,
        output,
        output_cell: (center_row, center_col),
        median,
    })
}

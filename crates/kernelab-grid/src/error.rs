/// An error type for the grid module.
#[derive(thiserror::Error, Debug)]
pub enum GridError {
    /// Error when a kernel is created with an even size.
    #[error("Kernel size must be odd, got {0}")]
    EvenKernelSize(usize),

    /// Error when a grid side length is outside the supported range.
    #[error("Grid size {0} is outside the supported range ({1}-{2})")]
    SizeOutOfRange(usize, usize, usize),

    /// Error when imported rows do not form a square grid.
    #[error("Row {0} has {1} columns, expected {2}")]
    NonSquareRows(usize, usize, usize),

    /// Error when an imported cell value is not a pixel value.
    #[error("Cell ({0}, {1}) is outside the pixel range 0-255")]
    ValueOutOfRange(usize, usize),

    /// Error when the weight count does not match the kernel size.
    #[error("Weight count ({0}) does not match the kernel size ({1})")]
    InvalidWeightCount(usize, usize),
}

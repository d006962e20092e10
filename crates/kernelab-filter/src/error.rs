/// An error type for the filter module.
#[derive(thiserror::Error, Debug)]
pub enum FilterError {
    /// Error when the kernel cannot be placed on the grid at any position.
    #[error("Kernel of size {kernel} does not fit a grid of size {grid}")]
    KernelDoesNotFit {
        /// The kernel side length.
        kernel: usize,
        /// The grid side length.
        grid: usize,
    },

    /// Error when a sweep is requested over a non-square grid.
    #[error("Sweeps require a square grid, got {0}x{1}")]
    NonSquareGrid(usize, usize),

    /// Error from the underlying grid containers.
    #[error(transparent)]
    Grid(#[from] kernelab_grid::GridError),
}

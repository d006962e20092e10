//! Filter configuration

use kernelab_grid::{GridError, Kernel};

use crate::calculator::FilterMode;
use crate::kernels;

/// The user-facing filter settings: mode, kernel shape and the parameters
/// that derive the kernel weights.
///
/// The kernel is rebuilt from the configuration on every [`build_kernel`]
/// call rather than cached, so a change to the size, sigma or normalize
/// flag always takes effect on the next calculation.
///
/// [`build_kernel`]: FilterConfig::build_kernel
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FilterConfig {
    /// The filter family to compute.
    pub mode: FilterMode,
    /// The kernel side length. Must be odd.
    pub kernel_size: usize,
    /// The Gaussian standard deviation, used by the Gaussian mode only.
    pub sigma: f32,
    /// Whether Gaussian weights are scaled to sum to 1.
    pub normalize: bool,
    /// The constant multiplier applied to kernel weights.
    pub constant: f32,
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            mode: FilterMode::Mean,
            kernel_size: 3,
            sigma: 1.0,
            normalize: true,
            constant: 1.0,
        }
    }
}

impl FilterConfig {
    /// The kernel radius implied by the configured size.
    pub fn radius(&self) -> usize {
        self.kernel_size / 2
    }

    /// Build the kernel for the configured mode.
    ///
    /// Mean and median use the all-ones default, Gaussian derives its
    /// weights from the configured sigma, and the remaining weighted modes
    /// start from all zeros for the user to edit.
    ///
    /// # Errors
    ///
    /// Returns an error if the configured kernel size is even.
    pub fn build_kernel(&self) -> Result<Kernel, GridError> {
        match self.mode {
            FilterMode::Mean | FilterMode::Median => kernels::ones_kernel(self.kernel_size),
            FilterMode::Gaussian => {
                kernels::gaussian_kernel(self.kernel_size, self.sigma, self.normalize)
            }
            FilterMode::CrossCorrelation
            | FilterMode::Convolution
            | FilterMode::CustomConvolution => Kernel::zeros(self.kernel_size),
        }
    }
}

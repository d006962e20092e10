//! Kernel weight generators

use kernelab_grid::{GridError, Kernel};

/// Create an all-ones kernel, the mean-filter default.
///
/// The weights are deliberately not divided by the area: the mean filter
/// divides once, in its aggregation step.
///
/// # Arguments
///
/// * `size` - The side length of the kernel. Must be odd.
pub fn ones_kernel(size: usize) -> Result<Kernel, GridError> {
    Kernel::ones(size)
}

/// Create a 2D Gaussian kernel.
///
/// Each weight is `1/(2*pi*sigma^2) * exp(-(dx^2 + dy^2) / (2*sigma^2))`
/// with `dx`, `dy` the offsets from the kernel center. With `normalize`
/// enabled, every weight is divided by the weight sum so the kernel sums
/// to 1.
///
/// Callers regenerate the kernel whenever `size`, `sigma` or the normalize
/// flag changes; the generator is cheap at teaching scale and never cached.
///
/// # Arguments
///
/// * `size` - The side length of the kernel. Must be odd.
/// * `sigma` - The standard deviation of the Gaussian.
/// * `normalize` - Whether to scale the weights to sum to 1.
pub fn gaussian_kernel(size: usize, sigma: f32, normalize: bool) -> Result<Kernel, GridError> {
    let mut weights = Vec::with_capacity(size * size);

    let center = (size / 2) as f32;
    let sigma_sq = sigma * sigma;
    let scale = 1.0 / (2.0 * std::f32::consts::PI * sigma_sq);

    for row in 0..size {
        for col in 0..size {
            let dy = row as f32 - center;
            let dx = col as f32 - center;
            weights.push(scale * (-(dx * dx + dy * dy) / (2.0 * sigma_sq)).exp());
        }
    }

    if normalize {
        let norm = weights.iter().sum::<f32>();
        weights.iter_mut().for_each(|w| *w /= norm);
    }

    Kernel::from_weights(size, weights)
}

use crate::error::GridError;

/// A square matrix of filter weights.
///
/// The size is always odd so a center cell exists at `size / 2`; constructors
/// reject even sizes. Reads outside the kernel return `0.0` and writes
/// outside the kernel are no-ops.
#[derive(Clone, Debug, PartialEq)]
pub struct Kernel {
    size: usize,
    weights: Vec<f32>,
}

impl Kernel {
    /// Create a new kernel with every weight set to the given value.
    ///
    /// # Arguments
    ///
    /// * `size` - The side length of the kernel. Must be odd.
    /// * `value` - The initial weight for every cell.
    ///
    /// # Errors
    ///
    /// Returns an error if the size is even.
    ///
    /// # Examples
    ///
    /// ```
    /// use kernelab_grid::Kernel;
    ///
    /// let kernel = Kernel::new(3, 1.0).unwrap();
    ///
    /// assert_eq!(kernel.size(), 3);
    /// assert_eq!(kernel.radius(), 1);
    /// assert_eq!(kernel.get(1, 1), 1.0);
    /// ```
    pub fn new(size: usize, value: f32) -> Result<Self, GridError> {
        if size % 2 == 0 {
            return Err(GridError::EvenKernelSize(size));
        }
        Ok(Self {
            size,
            weights: vec![value; size * size],
        })
    }

    /// Create a new all-ones kernel, the mean-filter default.
    pub fn ones(size: usize) -> Result<Self, GridError> {
        Self::new(size, 1.0)
    }

    /// Create a new all-zeros kernel, the custom-filter default.
    pub fn zeros(size: usize) -> Result<Self, GridError> {
        Self::new(size, 0.0)
    }

    /// Create a kernel from explicit weights in row-major order.
    ///
    /// # Errors
    ///
    /// Returns an error if the size is even or the weight count does not
    /// match `size * size`.
    pub fn from_weights(size: usize, weights: Vec<f32>) -> Result<Self, GridError> {
        if size % 2 == 0 {
            return Err(GridError::EvenKernelSize(size));
        }
        if weights.len() != size * size {
            return Err(GridError::InvalidWeightCount(weights.len(), size));
        }
        Ok(Self { size, weights })
    }

    /// Get the weight of a cell, or `0.0` when the coordinate is outside the
    /// kernel.
    pub fn get(&self, row: usize, col: usize) -> f32 {
        if row >= self.size || col >= self.size {
            return 0.0;
        }
        self.weights[row * self.size + col]
    }

    /// Set the weight of a cell. No-op when the coordinate is outside the
    /// kernel.
    pub fn set(&mut self, row: usize, col: usize, value: f32) {
        if row < self.size && col < self.size {
            self.weights[row * self.size + col] = value;
        }
    }

    /// Set every weight to the given value.
    pub fn fill(&mut self, value: f32) {
        self.weights.fill(value);
    }

    /// Replace the backing store with an all-zero kernel of the new size.
    ///
    /// Prior weights are destroyed, not remapped.
    ///
    /// # Errors
    ///
    /// Returns an error if the new size is even; the kernel is unchanged in
    /// that case.
    pub fn resize(&mut self, size: usize) -> Result<(), GridError> {
        if size % 2 == 0 {
            return Err(GridError::EvenKernelSize(size));
        }
        self.size = size;
        self.weights = vec![0.0; size * size];
        Ok(())
    }

    /// Create the 180-degree rotation of this kernel.
    ///
    /// `flipped[r][c] = original[size-1-r][size-1-c]`. This single transform
    /// is the semantic difference between convolution and cross-correlation:
    /// convolution is correlation with the rotated kernel. The source kernel
    /// is not mutated.
    ///
    /// # Examples
    ///
    /// ```
    /// use kernelab_grid::Kernel;
    ///
    /// let mut kernel = Kernel::zeros(3).unwrap();
    /// kernel.set(0, 0, 1.0);
    ///
    /// let flipped = kernel.flip180();
    ///
    /// assert_eq!(flipped.get(2, 2), 1.0);
    /// assert_eq!(flipped.get(0, 0), 0.0);
    /// ```
    pub fn flip180(&self) -> Kernel {
        let mut weights = Vec::with_capacity(self.weights.len());
        for row in 0..self.size {
            for col in 0..self.size {
                weights.push(self.get(self.size - 1 - row, self.size - 1 - col));
            }
        }
        Kernel {
            size: self.size,
            weights,
        }
    }

    /// Get the side length of the kernel.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Get the kernel radius `k`, where the full kernel is `2k+1`.
    pub fn radius(&self) -> usize {
        self.size / 2
    }

    /// Get the sum of all weights.
    pub fn sum(&self) -> f32 {
        self.weights.iter().sum()
    }

    /// Get the weights as a row-major slice.
    pub fn as_slice(&self) -> &[f32] {
        &self.weights
    }
}

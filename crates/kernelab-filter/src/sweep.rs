//! Kernel sweep navigation
//!
//! Tracks the kernel's center position as it slides across the input grid in
//! raster order, and enumerates the input cells covered by the window at the
//! current position.

/// Navigation phase of a kernel sweep.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SweepPhase {
    /// Before navigation has started.
    Initial,
    /// Actively stepping through grid positions.
    Navigating,
}

/// Tracks the kernel window position over a square grid.
///
/// Valid center positions keep the whole window inside the grid: while
/// navigating, both coordinates stay within `radius..=grid_size-1-radius`.
/// When the kernel does not fit the grid at all, [`total_positions`] is zero
/// and navigation is disabled entirely.
///
/// Mutating operations report the position change as a return value; there
/// are no ambient change signals. Consumers poll [`output_cell`] and
/// [`phase`] for current state.
///
/// [`total_positions`]: KernelSweep::total_positions
/// [`output_cell`]: KernelSweep::output_cell
/// [`phase`]: KernelSweep::phase
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct KernelSweep {
    grid_size: usize,
    radius: usize,
    row: usize,
    col: usize,
    phase: SweepPhase,
}

impl KernelSweep {
    /// Create a new sweep over a square grid.
    ///
    /// # Arguments
    ///
    /// * `grid_size` - The side length of the grid in cells.
    /// * `radius` - The kernel radius `k`, where the full kernel is `2k+1`.
    pub fn new(grid_size: usize, radius: usize) -> Self {
        Self {
            grid_size,
            radius,
            row: radius,
            col: radius,
            phase: SweepPhase::Initial,
        }
    }

    /// Begin navigating from the first valid position `(k, k)`.
    ///
    /// # Returns
    ///
    /// `true` when the sweep entered the navigating phase; `false` when it
    /// was already navigating, or when the kernel does not fit the grid.
    pub fn start(&mut self) -> bool {
        if self.phase == SweepPhase::Navigating {
            return false;
        }
        if self.total_positions() == 0 {
            log::debug!(
                "sweep cannot start: kernel radius {} does not fit grid size {}",
                self.radius,
                self.grid_size
            );
            return false;
        }
        self.row = self.radius;
        self.col = self.radius;
        self.phase = SweepPhase::Navigating;
        true
    }

    /// Return to the initial phase at position `(k, k)`.
    pub fn reset(&mut self) {
        self.row = self.radius;
        self.col = self.radius;
        self.phase = SweepPhase::Initial;
    }

    /// Advance to the next position in raster order, wrapping to the start
    /// of the next row at the right edge.
    ///
    /// # Returns
    ///
    /// The new center position, or `None` when not navigating or already at
    /// the bottom-right position.
    pub fn next(&mut self) -> Option<(usize, usize)> {
        if !self.can_go_next() {
            return None;
        }
        self.col += 1;
        if self.col > self.max_pos() {
            self.col = self.radius;
            self.row += 1;
        }
        Some((self.row, self.col))
    }

    /// Step back to the previous position in raster order, wrapping to the
    /// end of the previous row at the left edge.
    ///
    /// # Returns
    ///
    /// The new center position, or `None` when not navigating or already at
    /// the top-left position.
    pub fn previous(&mut self) -> Option<(usize, usize)> {
        if !self.can_go_previous() {
            return None;
        }
        if self.col == self.radius {
            self.col = self.max_pos();
            self.row -= 1;
        } else {
            self.col -= 1;
        }
        Some((self.row, self.col))
    }

    /// Whether a forward step is possible.
    pub fn can_go_next(&self) -> bool {
        if self.phase != SweepPhase::Navigating {
            return false;
        }
        !(self.row == self.max_pos() && self.col == self.max_pos())
    }

    /// Whether a backward step is possible.
    pub fn can_go_previous(&self) -> bool {
        if self.phase != SweepPhase::Navigating {
            return false;
        }
        !(self.row == self.radius && self.col == self.radius)
    }

    /// Enumerate the grid cells covered by the window at the current center.
    ///
    /// Cells are listed in row-major order (row offset outer, column offset
    /// inner, both ascending) and filtered to the grid bounds. Calculators
    /// assign record indices in exactly this order, so the ordering is part
    /// of the public contract.
    pub fn affected_cells(&self) -> Vec<(usize, usize)> {
        let k = self.radius as i32;
        let mut cells = Vec::with_capacity((self.radius * 2 + 1).pow(2));
        for dr in -k..=k {
            for dc in -k..=k {
                let row = self.row as i32 + dr;
                let col = self.col as i32 + dc;
                if row >= 0
                    && col >= 0
                    && (row as usize) < self.grid_size
                    && (col as usize) < self.grid_size
                {
                    cells.push((row as usize, col as usize));
                }
            }
        }
        cells
    }

    /// The current center position, where the filter output is written.
    pub fn output_cell(&self) -> (usize, usize) {
        (self.row, self.col)
    }

    /// The current navigation phase.
    pub fn phase(&self) -> SweepPhase {
        self.phase
    }

    /// The number of valid center positions, zero when the kernel does not
    /// fit the grid.
    pub fn total_positions(&self) -> usize {
        let side = self.side();
        side * side
    }

    /// The raster index of the current position.
    pub fn position_index(&self) -> usize {
        let side = self.side();
        if side == 0 {
            return 0;
        }
        (self.row - self.radius) * side + (self.col - self.radius)
    }

    /// Jump directly to the position with the given raster index, clamped to
    /// the valid range, entering the navigating phase.
    ///
    /// # Returns
    ///
    /// The new center position, or `None` when there are no valid positions.
    pub fn seek(&mut self, index: usize) -> Option<(usize, usize)> {
        let side = self.side();
        if side == 0 {
            return None;
        }
        let index = index.min(side * side - 1);
        self.row = self.radius + index / side;
        self.col = self.radius + index % side;
        self.phase = SweepPhase::Navigating;
        Some((self.row, self.col))
    }

    /// Change the grid size. Position validity cannot be guaranteed across a
    /// resize, so the sweep returns to the initial phase.
    pub fn set_grid_size(&mut self, grid_size: usize) {
        self.grid_size = grid_size;
        self.reset();
    }

    /// Change the kernel radius. Forces a reset, like [`set_grid_size`].
    ///
    /// [`set_grid_size`]: KernelSweep::set_grid_size
    pub fn set_kernel_radius(&mut self, radius: usize) {
        self.radius = radius;
        self.reset();
    }

    /// The side length of the swept grid.
    pub fn grid_size(&self) -> usize {
        self.grid_size
    }

    /// The kernel radius `k`.
    pub fn radius(&self) -> usize {
        self.radius
    }

    // side length of the valid-position square
    fn side(&self) -> usize {
        self.grid_size.saturating_sub(2 * self.radius)
    }

    // last valid row/col while navigating; callers must ensure side() > 0
    fn max_pos(&self) -> usize {
        self.radius + self.side() - 1
    }
}

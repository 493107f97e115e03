/// Per-sample stability of one frame. `true` means the sample stayed within
/// the escape radius for the whole iteration budget.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StabilityGrid {
    pub columns: u32,
    pub rows: u32,
    pub stride: u32,
    cells: Vec<bool>,
}

impl StabilityGrid {
    /// Build from row-major cells.
    ///
    /// # Panics
    /// If `cells.len() != columns * rows`.
    pub fn new(columns: u32, rows: u32, stride: u32, cells: Vec<bool>) -> Self {
        assert_eq!(
            cells.len(),
            columns as usize * rows as usize,
            "cell count does not match grid dimensions"
        );
        Self {
            columns,
            rows,
            stride,
            cells,
        }
    }

    /// Classify frozen escape counts: stable iff the count reached the budget.
    pub fn from_counts(
        columns: u32,
        rows: u32,
        stride: u32,
        counts: &[u32],
        max_iterations: u32,
    ) -> Self {
        let cells = counts.iter().map(|&n| n == max_iterations).collect();
        Self::new(columns, rows, stride, cells)
    }

    pub fn cells(&self) -> &[bool] {
        &self.cells
    }

    pub fn is_stable(&self, column: u32, row: u32) -> bool {
        column < self.columns
            && row < self.rows
            && self.cells[(row * self.columns + column) as usize]
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn stable_count(&self) -> usize {
        self.cells.iter().filter(|&&stable| stable).count()
    }

    /// Share of sampled cells that are stable, in [0, 1].
    pub fn stable_fraction(&self) -> f64 {
        if self.cells.is_empty() {
            return 0.0;
        }
        self.stable_count() as f64 / self.cells.len() as f64
    }

    /// Pixel coordinates of stable cells, scaled back up by the stride.
    pub fn stable_pixels(&self) -> impl Iterator<Item = (u32, u32)> + '_ {
        let columns = self.columns.max(1);
        let stride = self.stride;
        self.cells
            .iter()
            .enumerate()
            .filter(|&(_, &stable)| stable)
            .map(move |(i, _)| {
                let i = i as u32;
                ((i % columns) * stride, (i / columns) * stride)
            })
    }
}

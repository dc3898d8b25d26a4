//! Half-block cell grid.
//!
//! Every terminal cell carries two stacked surface pixels: the upper one is
//! drawn as the foreground of `▀`, the lower one as the background. A cell is
//! therefore nothing but a colour pair, and the glyph is implied.

/// 24-bit colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

impl From<[u8; 3]> for Rgb {
    fn from([r, g, b]: [u8; 3]) -> Self {
        Self::new(r, g, b)
    }
}

/// The two pixels shown by one cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PixelPair {
    pub upper: Rgb,
    pub lower: Rgb,
}

impl PixelPair {
    pub const fn new(upper: Rgb, lower: Rgb) -> Self {
        Self { upper, lower }
    }

    /// Both halves the same colour.
    pub const fn solid(color: Rgb) -> Self {
        Self::new(color, color)
    }

    pub fn is_solid(&self) -> bool {
        self.upper == self.lower
    }
}

/// Row-major grid of pixel pairs, sized to the terminal.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CellGrid {
    cols: u16,
    rows: u16,
    pairs: Vec<PixelPair>,
}

impl CellGrid {
    pub fn new(cols: u16, rows: u16) -> Self {
        Self {
            cols,
            rows,
            pairs: vec![PixelPair::default(); cols as usize * rows as usize],
        }
    }

    pub fn cols(&self) -> u16 {
        self.cols
    }

    pub fn rows(&self) -> u16 {
        self.rows
    }

    pub fn same_size(&self, other: &CellGrid) -> bool {
        self.cols == other.cols && self.rows == other.rows
    }

    /// Match a terminal size. The allocation is kept when it is big enough.
    pub fn resize(&mut self, cols: u16, rows: u16) {
        if self.cols != cols || self.rows != rows {
            self.cols = cols;
            self.rows = rows;
            self.pairs
                .resize(cols as usize * rows as usize, PixelPair::default());
        }
    }

    pub fn fill(&mut self, pair: PixelPair) {
        self.pairs.fill(pair);
    }

    pub fn get(&self, col: u16, row: u16) -> Option<PixelPair> {
        self.row(row)?.get(col as usize).copied()
    }

    /// One terminal row, `None` below the grid.
    pub fn row(&self, row: u16) -> Option<&[PixelPair]> {
        let start = self.row_start(row)?;
        Some(&self.pairs[start..start + self.cols as usize])
    }

    pub fn row_mut(&mut self, row: u16) -> Option<&mut [PixelPair]> {
        let start = self.row_start(row)?;
        let end = start + self.cols as usize;
        Some(&mut self.pairs[start..end])
    }

    fn row_start(&self, row: u16) -> Option<usize> {
        (row < self.rows).then(|| row as usize * self.cols as usize)
    }
}

use crate::checksum::cycle_bytes;

/// An n x n block pattern stored row by row.
/// Every row reads the same from left to right and from right to left.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    size: usize,
    cells: Vec<bool>,
}

impl Grid {
    /// Builds the mirrored pattern from a checksum.
    ///
    /// Each row is seeded by `ceil(size / 2)` consecutive checksum bytes
    /// (reused cyclically). A seed byte paints its column and the mirrored
    /// column when it is even. For odd sizes the last seed byte of a row
    /// lands on the center column.
    pub fn from_checksum(checksum: &[u8], size: usize) -> Self {
        let chunk = size.div_ceil(2);
        let data = cycle_bytes(checksum, chunk * size);
        let mut cells = vec![false; size * size];
        for (row, seed) in data.chunks(chunk).enumerate() {
            let cells_row = &mut cells[row * size..(row + 1) * size];
            for (column, byte) in seed.iter().enumerate() {
                // only even bytes are painted
                let painted = byte % 2 == 0;
                cells_row[column] = painted;
                cells_row[size - 1 - column] = painted;
            };
        };
        log::debug!("built {size}x{size} grid from {} seed bytes", data.len());
        Self { size, cells }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn cells(&self) -> &[bool] {
        &self.cells
    }

    pub fn get(&self, row: usize, column: usize) -> Option<bool> {
        if row >= self.size || column >= self.size {
            return None;
        };
        Some(self.cells[row * self.size + column])
    }

    pub fn rows(&self) -> impl Iterator<Item = &[bool]> {
        self.cells.chunks(self.size)
    }

    /// Renders the pattern with `*` for painted blocks and `.` for background.
    pub fn pattern(&self) -> String {
        let mut output = String::from("Pattern:");
        for line in self.pattern_rows() {
            output.push('\n');
            output.push_str(&line);
        };
        output
    }

    pub(crate) fn pattern_rows(&self) -> Vec<String> {
        self.rows()
            .map(|row| row.iter().map(|&painted| if painted { '*' } else { '.' }).collect())
            .collect()
    }
}

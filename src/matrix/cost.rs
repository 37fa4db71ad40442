use super::cell::Cell;
use crate::Arbitrary;
use crate::Cost;
use serde::Deserialize;
use serde::Serialize;

/// non-negative n × m cost matrix. the last row is the virtual row:
/// the price of leaving each column unmatched. rows 0..n-1 are real
/// and must each be given a distinct column, so m ≥ n - 1.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Vec<Cost>>", into = "Vec<Vec<Cost>>")]
pub struct CostMatrix {
    rows: usize,
    cols: usize,
    data: Vec<Cost>,
}

impl CostMatrix {
    /// validate a row-major buffer of rows × cols entries
    pub fn new(rows: usize, cols: usize, data: Vec<Cost>) -> anyhow::Result<Self> {
        anyhow::ensure!(rows > 0, "cost matrix needs a virtual row");
        anyhow::ensure!(
            data.len() == rows * cols,
            "expected {} entries for {}x{}, found {}",
            rows * cols,
            rows,
            cols,
            data.len()
        );
        anyhow::ensure!(
            cols + 1 >= rows,
            "{} real rows cannot be matched into {} columns",
            rows - 1,
            cols
        );
        if let Some(i) = data.iter().position(|x| !x.is_finite() || *x < 0.) {
            anyhow::bail!(
                "entry ({}, {}) = {} is not a finite non-negative cost",
                i / cols,
                i % cols,
                data[i]
            );
        }
        Ok(Self { rows, cols, data })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }
    pub fn cols(&self) -> usize {
        self.cols
    }
    /// number of rows that must be matched to a column
    pub fn real(&self) -> usize {
        self.rows - 1
    }
    /// index of the virtual row
    pub fn diagonal(&self) -> usize {
        self.rows - 1
    }
    pub fn is_diagonal(&self, row: usize) -> bool {
        row == self.diagonal()
    }
    /// columns left for the virtual row once every real row holds one
    pub fn capacity(&self) -> usize {
        self.cols - self.real()
    }
    /// rows taking part in the solve. without spare
    /// columns the virtual row can never be matched.
    pub fn active(&self) -> usize {
        match self.capacity() {
            0 => self.real(),
            _ => self.rows,
        }
    }

    pub fn row(&self, row: usize) -> &[Cost] {
        &self.data[row * self.cols..(row + 1) * self.cols]
    }
    /// entries of a column across active rows
    pub fn col(&self, col: usize) -> impl Iterator<Item = Cost> + '_ {
        (0..self.active()).map(move |r| self[Cell::from((r, col))])
    }
    /// active cells in row-major order
    pub fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
        (0..self.active()).flat_map(move |r| (0..self.cols).map(move |c| Cell::from((r, c))))
    }
    /// active zero cells in row-major order
    pub fn zeros(&self) -> impl Iterator<Item = Cell> + '_ {
        self.cells().filter(move |cell| self.is_zero(*cell))
    }
    pub fn is_zero(&self, cell: Cell) -> bool {
        self[cell] == 0.
    }

    /// subtract each column's minimum from the column, returning the minima.
    /// afterwards every column holds a zero and nothing went negative.
    pub fn reduce(&mut self) -> Vec<Cost> {
        let minima = (0..self.cols)
            .map(|c| self.col(c).fold(Cost::INFINITY, Cost::min))
            .collect::<Vec<_>>();
        for r in 0..self.active() {
            for c in 0..self.cols {
                self[Cell::from((r, c))] -= minima[c];
            }
        }
        minima
    }
}

impl std::ops::Index<Cell> for CostMatrix {
    type Output = Cost;
    fn index(&self, cell: Cell) -> &Self::Output {
        assert!(cell.row() < self.rows, "row {} out of bounds", cell.row());
        assert!(cell.col() < self.cols, "col {} out of bounds", cell.col());
        &self.data[cell.row() * self.cols + cell.col()]
    }
}
impl std::ops::IndexMut<Cell> for CostMatrix {
    fn index_mut(&mut self, cell: Cell) -> &mut Self::Output {
        assert!(cell.row() < self.rows, "row {} out of bounds", cell.row());
        assert!(cell.col() < self.cols, "col {} out of bounds", cell.col());
        &mut self.data[cell.row() * self.cols + cell.col()]
    }
}

impl TryFrom<Vec<Vec<Cost>>> for CostMatrix {
    type Error = anyhow::Error;
    fn try_from(rows: Vec<Vec<Cost>>) -> Result<Self, Self::Error> {
        let n = rows.len();
        let m = rows.first().map(Vec::len).unwrap_or(0);
        if let Some(r) = rows.iter().position(|row| row.len() != m) {
            anyhow::bail!("row {} has {} columns, expected {}", r, rows[r].len(), m);
        }
        Self::new(n, m, rows.into_iter().flatten().collect())
    }
}
impl From<CostMatrix> for Vec<Vec<Cost>> {
    fn from(matrix: CostMatrix) -> Self {
        (0..matrix.rows).map(|r| matrix.row(r).to_vec()).collect()
    }
}

impl std::str::FromStr for CostMatrix {
    type Err = anyhow::Error;
    /// whitespace separated entries, one row per line, virtual row last
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.lines()
            .map(str::trim)
            .filter(|line| !line.is_empty() && !line.starts_with('#'))
            .map(|line| {
                line.split_whitespace()
                    .map(|x| {
                        x.parse::<Cost>()
                            .map_err(|e| anyhow::anyhow!("bad entry {:?}: {}", x, e))
                    })
                    .collect::<anyhow::Result<Vec<_>>>()
            })
            .collect::<anyhow::Result<Vec<_>>>()
            .and_then(Self::try_from)
    }
}

impl Arbitrary for CostMatrix {
    fn random() -> Self {
        // half the time draw small integers so ties and
        // degenerate zero patterns get exercised too
        let n = rand::random_range(1..=crate::ARBITRARY_ROWS);
        let m = n - 1 + rand::random_range(0..=crate::ARBITRARY_SLACK);
        let integral = rand::random::<bool>();
        let data = (0..n * m)
            .map(|_| match integral {
                true => rand::random_range(0..4u8) as Cost,
                false => rand::random::<Cost>(),
            })
            .collect();
        Self::new(n, m, data).expect("arbitrary shape is valid")
    }
}

impl std::fmt::Display for CostMatrix {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for r in 0..self.rows {
            for x in self.row(r) {
                write!(f, "{:>8.3}", x)?;
            }
            match self.is_diagonal(r) {
                true => writeln!(f, "   (diagonal)")?,
                false => writeln!(f)?,
            }
        }
        Ok(())
    }
}

/// Percolation model on an n-by-n grid of open/blocked sites
///
/// Connectivity is tracked by two weighted quick-union structures augmented
/// with virtual nodes: a virtual top node wired to every open site in row 1,
/// and a virtual bottom node wired to every open site in row n. The grid
/// percolates iff virtual top and virtual bottom share a root, so the global
/// check costs a single pairwise query instead of scanning a boundary row.
///
/// Two structures are needed to keep `is_full` honest. With a single
/// structure, once the grid percolates every open bottom-row site becomes
/// transitively connected to the virtual top through the virtual bottom,
/// and sites with no open path from the top report as full ("backwash").
/// The full-query structure therefore never contains the virtual bottom.
use anyhow::{bail, Result};

use crate::union_find::UnionFind;

#[derive(Debug)]
pub struct PercolationGrid {
    n: usize,
    open: Vec<bool>, // row-major n*n
    open_count: usize,
    full_set: UnionFind,      // sites + virtual top
    percolate_set: UnionFind, // sites + virtual top + virtual bottom
}

impl PercolationGrid {
    /// Create an n-by-n grid with all sites blocked
    pub fn new(n: usize) -> Result<Self> {
        if n == 0 {
            bail!("Grid size must be at least 1, got 0");
        }
        Ok(PercolationGrid {
            n,
            open: vec![false; n * n],
            open_count: 0,
            full_set: UnionFind::new(n * n + 1)?,
            percolate_set: UnionFind::new(n * n + 2)?,
        })
    }

    fn virtual_top(&self) -> usize {
        self.n * self.n
    }

    fn virtual_bottom(&self) -> usize {
        self.n * self.n + 1
    }

    /// Map 1-based (row, col) to a dense 0-based site label
    fn site_label(&self, row: usize, col: usize) -> usize {
        (row - 1) * self.n + (col - 1)
    }

    fn validate(&self, row: usize, col: usize) -> Result<()> {
        if row < 1 || row > self.n || col < 1 || col > self.n {
            bail!(
                "Site ({}, {}) out of range for {}x{} grid (indices are 1-based)",
                row,
                col,
                self.n,
                self.n
            );
        }
        Ok(())
    }

    /// Open site (row, col) if it is not open already
    ///
    /// A constant number of union operations per call: the four orthogonal
    /// neighbors in both structures, plus the virtual wiring for boundary
    /// rows. Never proportional to n.
    pub fn open(&mut self, row: usize, col: usize) -> Result<()> {
        self.validate(row, col)?;
        let label = self.site_label(row, col);
        if self.open[label] {
            return Ok(());
        }
        self.open[label] = true;
        self.open_count += 1;

        if row == 1 {
            let top = self.virtual_top();
            self.full_set.union(label, top)?;
            self.percolate_set.union(label, top)?;
        }
        // Virtual bottom is wired in the percolation structure only,
        // never in full_set
        if row == self.n {
            let bottom = self.virtual_bottom();
            self.percolate_set.union(label, bottom)?;
        }

        let neighbors = [
            (row > 1).then(|| (row - 1, col)),
            (row < self.n).then(|| (row + 1, col)),
            (col > 1).then(|| (row, col - 1)),
            (col < self.n).then(|| (row, col + 1)),
        ];
        for (nrow, ncol) in neighbors.into_iter().flatten() {
            let nlabel = self.site_label(nrow, ncol);
            if self.open[nlabel] {
                self.full_set.union(label, nlabel)?;
                self.percolate_set.union(label, nlabel)?;
            }
        }
        Ok(())
    }

    /// Is site (row, col) open?
    pub fn is_open(&self, row: usize, col: usize) -> Result<bool> {
        self.validate(row, col)?;
        Ok(self.open[self.site_label(row, col)])
    }

    /// Is site (row, col) full, i.e. connected to the top row through
    /// open neighbors?
    pub fn is_full(&mut self, row: usize, col: usize) -> Result<bool> {
        self.validate(row, col)?;
        let label = self.site_label(row, col);
        let top = self.virtual_top();
        self.full_set.connected(label, top)
    }

    /// Does the system percolate?
    pub fn percolates(&mut self) -> Result<bool> {
        let top = self.virtual_top();
        let bottom = self.virtual_bottom();
        self.percolate_set.connected(top, bottom)
    }

    /// Number of open sites
    pub fn number_of_open_sites(&self) -> usize {
        self.open_count
    }
}

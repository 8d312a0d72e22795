/// Union-Find (Disjoint Sets) data structure for grid connectivity tracking
use anyhow::{bail, Result};

/// Weighted quick-union with path compression over a fixed universe of
/// `n` integer-labeled elements. The forest only ever grows more coalesced:
/// there are no split or remove operations.
#[derive(Debug)]
pub struct UnionFind {
    parent: Vec<usize>,
    size: Vec<usize>,
    components: usize,
}

impl UnionFind {
    /// Create a new UnionFind with n singleton sets
    pub fn new(n: usize) -> Result<Self> {
        if n == 0 {
            bail!("UnionFind requires at least one element, got 0");
        }
        let parent = (0..n).collect();
        let size = vec![1; n];
        Ok(UnionFind {
            parent,
            size,
            components: n,
        })
    }

    /// Find the root of element x with path compression
    pub fn find(&mut self, x: usize) -> Result<usize> {
        if x >= self.parent.len() {
            bail!(
                "Element {} out of range for UnionFind of {} elements",
                x,
                self.parent.len()
            );
        }
        Ok(self.find_unchecked(x))
    }

    // Validated callers only. Every visited node is repointed directly at
    // the root, so repeated queries amortize to near O(1).
    fn find_unchecked(&mut self, x: usize) -> usize {
        if self.parent[x] != x {
            self.parent[x] = self.find_unchecked(self.parent[x]);
        }
        self.parent[x]
    }

    /// Union the sets containing x and y
    pub fn union(&mut self, x: usize, y: usize) -> Result<()> {
        let root_x = self.find(x)?;
        let root_y = self.find(y)?;

        if root_x != root_y {
            // Union by size: smaller tree goes under the larger root,
            // keeping tree height logarithmic
            if self.size[root_x] < self.size[root_y] {
                self.parent[root_x] = root_y;
                self.size[root_y] += self.size[root_x];
            } else {
                self.parent[root_y] = root_x;
                self.size[root_x] += self.size[root_y];
            }
            self.components -= 1;
        }
        Ok(())
    }

    /// Check if two elements are in the same set
    pub fn connected(&mut self, x: usize, y: usize) -> Result<bool> {
        Ok(self.find(x)? == self.find(y)?)
    }

    /// Number of disjoint sets remaining
    pub fn count(&self) -> usize {
        self.components
    }
}

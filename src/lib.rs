// Library exports for percolate
pub mod monte_carlo;
pub mod percolation;
pub mod stats;
pub mod union_find;

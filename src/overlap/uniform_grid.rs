use super::{pair_penalty, OverlapStrategy};
use crate::point::Point;
use itertools::iproduct;
use rustc_hash::FxHashMap;

/// Uniform spatial hash with cell size `2 * max_radius`.
///
/// With that cell size, two discs can only collide when their centers fall in
/// the same or an adjacent cell, so each gene is checked against its 3x3
/// neighborhood only. Expected O(K) for spread-out populations; degenerates to
/// the brute-force cost when every gene lands in one cell.
#[derive(Clone, Debug)]
pub struct UniformGrid {
    cell_size: f64,
}

impl UniformGrid {
    pub fn new(max_radius: f64) -> Self {
        debug_assert!(max_radius > 0.0);
        Self {
            cell_size: 2.0 * max_radius,
        }
    }

    pub fn cell_size(&self) -> f64 {
        self.cell_size
    }

    fn cell_of(&self, gene: &Point) -> (i64, i64) {
        (
            (gene.x() / self.cell_size).floor() as i64,
            (gene.y() / self.cell_size).floor() as i64,
        )
    }
}

impl OverlapStrategy for UniformGrid {
    fn penalty(&self, genes: &[Point], weight: f64) -> f64 {
        let mut cells: FxHashMap<(i64, i64), Vec<usize>> = FxHashMap::default();
        for (index, gene) in genes.iter().enumerate() {
            cells.entry(self.cell_of(gene)).or_default().push(index);
        }

        let mut total = 0.0;
        for (index, gene) in genes.iter().enumerate() {
            let (cell_x, cell_y) = self.cell_of(gene);
            for (dx, dy) in iproduct!(-1..=1, -1..=1) {
                if let Some(bucket) = cells.get(&(cell_x + dx, cell_y + dy)) {
                    // slice position is the canonical pair order, so every
                    // pair is priced exactly once
                    for &other in bucket {
                        if other > index {
                            total += pair_penalty(gene, &genes[other], weight);
                        }
                    }
                }
            }
        }
        total
    }
}

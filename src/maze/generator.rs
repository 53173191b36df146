//=========================================================================
// Maze Generator
//=========================================================================
//
// Randomized depth-first backtracker over an explicit stack.
//
// Flow:
//   random start → visit → [peek top → pick unvisited neighbor → carve
//   → push] → backtrack (pop) when the top has no unvisited neighbor
//
// Every cell is pushed exactly once, so exactly rows*cols - 1 walls are
// carved and the passages form a spanning tree. The visited set lives only
// for the duration of one call.
//
//=========================================================================

//=== External Dependencies ===============================================

use log::debug;
use rand::seq::SliceRandom;
use rand::Rng;

//=== Internal Dependencies ===============================================

use super::{Direction, Grid, Position};

//=== VisitedSet ==========================================================

/// Fixed-size bitset keyed by cell index.
struct VisitedSet {
    words: Vec<u64>,
}

impl VisitedSet {
    fn new(len: usize) -> Self {
        Self {
            words: vec![0; len.div_ceil(64)],
        }
    }

    #[inline]
    fn insert(&mut self, index: usize) {
        self.words[index / 64] |= 1 << (index % 64);
    }

    #[inline]
    fn contains(&self, index: usize) -> bool {
        self.words[index / 64] & (1 << (index % 64)) != 0
    }
}

//=== generate() ==========================================================

/// Builds a perfect maze of `rows` x `cols` cells.
///
/// The random source is only drawn from here, so a seeded `rng` yields the
/// same layout for the same dimensions every time.
///
/// # Panics
///
/// Panics if `rows` or `cols` is 2 or less.
pub fn generate<R: Rng + ?Sized>(rows: usize, cols: usize, rng: &mut R) -> Grid {
    let mut grid = Grid::new(rows, cols);
    let mut visited = VisitedSet::new(grid.len());
    let mut stack = Vec::with_capacity(grid.len());

    let start = Position::new(rng.gen_range(0..cols), rng.gen_range(0..rows));
    visited.insert(grid.index_of(start));
    stack.push(start);

    let mut candidates: Vec<(Direction, Position)> = Vec::with_capacity(4);
    let mut carved = 0usize;

    while let Some(&current) = stack.last() {
        candidates.clear();
        candidates.extend(
            Direction::ALL
                .into_iter()
                .filter_map(|dir| grid.neighbor(current, dir).map(|next| (dir, next)))
                .filter(|&(_, next)| !visited.contains(grid.index_of(next))),
        );

        let Some(&(dir, next)) = candidates.choose(rng) else {
            stack.pop();
            continue;
        };

        grid.carve(current, dir);
        carved += 1;
        visited.insert(grid.index_of(next));
        stack.push(next);
    }

    debug!(
        target: "maze::generator",
        "Generated {}x{} maze from ({}, {}): {} passages",
        rows, cols, start.x, start.y, carved
    );

    grid
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::VecDeque;

    //--- Test Helpers -----------------------------------------------------

    /// Breadth-first flood fill; returns how many times each cell was reached.
    fn reach_counts(grid: &Grid, from: Position) -> Vec<usize> {
        let mut counts = vec![0; grid.len()];
        let mut queue = VecDeque::from([(from, None::<Position>)]);
        counts[grid.index_of(from)] = 1;

        while let Some((pos, parent)) = queue.pop_front() {
            for next in grid.open_neighbors(pos) {
                if Some(next) == parent {
                    continue;
                }
                counts[grid.index_of(next)] += 1;
                // A cycle would reach a cell twice; stop expanding it.
                if counts[grid.index_of(next)] == 1 {
                    queue.push_back((next, Some(pos)));
                }
            }
        }
        counts
    }

    fn sizes() -> [(usize, usize); 5] {
        [(3, 3), (3, 7), (8, 3), (21, 31), (16, 16)]
    }

    //--- Tests ------------------------------------------------------------

    #[test]
    fn visited_set_tracks_bits_across_words() {
        let mut set = VisitedSet::new(130);
        for i in [0, 63, 64, 129] {
            assert!(!set.contains(i));
            set.insert(i);
            assert!(set.contains(i));
        }
        assert!(!set.contains(1));
        assert!(!set.contains(128));
    }

    #[test]
    fn passage_count_is_cells_minus_one() {
        for seed in 0..10 {
            let mut rng = StdRng::seed_from_u64(seed);
            for (rows, cols) in sizes() {
                let grid = generate(rows, cols, &mut rng);
                assert_eq!(grid.passage_count(), rows * cols - 1, "{}x{} seed {}", rows, cols, seed);
            }
        }
    }

    #[test]
    fn every_cell_reached_exactly_once() {
        for seed in 0..10 {
            let mut rng = StdRng::seed_from_u64(seed);
            for (rows, cols) in sizes() {
                let grid = generate(rows, cols, &mut rng);
                let from = Position::new(seed as usize % cols, seed as usize % rows);
                let counts = reach_counts(&grid, from);
                assert!(counts.iter().all(|&c| c == 1), "{}x{} seed {}", rows, cols, seed);
            }
        }
    }

    #[test]
    fn walls_are_symmetric() {
        let mut rng = StdRng::seed_from_u64(7);
        let grid = generate(12, 17, &mut rng);

        for (pos, cell) in grid.iter() {
            for dir in Direction::ALL {
                match grid.neighbor(pos, dir) {
                    Some(next) => assert_eq!(
                        cell.has_wall(dir),
                        grid.cell(next).has_wall(dir.opposite()),
                        "one-way wall at {:?} {:?}",
                        pos,
                        dir
                    ),
                    None => assert!(cell.has_wall(dir), "border opened at {:?} {:?}", pos, dir),
                }
            }
        }
    }

    #[test]
    fn same_seed_same_layout() {
        let a = generate(15, 20, &mut StdRng::seed_from_u64(42));
        let b = generate(15, 20, &mut StdRng::seed_from_u64(42));
        assert_eq!(a, b);
    }

    #[test]
    fn different_seeds_usually_differ() {
        let layouts: Vec<Grid> = (0..4)
            .map(|seed| generate(10, 10, &mut StdRng::seed_from_u64(seed)))
            .collect();
        assert!(layouts.windows(2).any(|pair| pair[0] != pair[1]));
    }

    #[test]
    fn every_cell_has_an_opening() {
        let grid = generate(9, 9, &mut StdRng::seed_from_u64(3));
        assert!(grid.iter().all(|(_, c)| c.open_sides() >= 1));
    }

    #[test]
    #[should_panic(expected = "Rows must be greater than 2")]
    fn rejects_degenerate_rows() {
        generate(2, 10, &mut StdRng::seed_from_u64(0));
    }
}

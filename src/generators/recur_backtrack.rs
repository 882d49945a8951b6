use rand::{Rng, seq::SliceRandom};

use crate::{
    error::{Result, check_dimensions},
    generators::MazeAlgorithm,
    maze::{Coord, Maze, SpaceGraph, grid::canonical_grid},
};

/// Randomized depth-first search from (0, 0) over the full grid.
#[derive(Debug, Clone)]
pub struct Backtracking {
    width: u16,
    height: u16,
}

/// A cell on the DFS stack together with the neighbors it has yet to try.
struct Frame {
    cell: Coord,
    pending: Vec<Coord>,
}

impl Backtracking {
    pub fn new(width: u16, height: u16) -> Self {
        Backtracking { width, height }
    }

    fn ravel_index(&self, coord: Coord) -> usize {
        coord.1 as usize * self.width as usize + coord.0 as usize
    }

    /// Push-ready frame for `cell` with its grid neighbors in random order.
    fn frame<R: Rng + ?Sized>(grid: &SpaceGraph, cell: Coord, rng: &mut R) -> Frame {
        let mut pending: Vec<Coord> = grid.neighbors(cell).collect();
        pending.shuffle(rng);
        Frame { cell, pending }
    }
}

impl MazeAlgorithm for Backtracking {
    fn generate_with<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<Maze> {
        check_dimensions(self.width, self.height)?;

        let grid = canonical_grid(self.width, self.height);
        let cell_count = grid.node_count();

        let mut tree = SpaceGraph::with_capacity(cell_count, cell_count - 1);
        for cell in grid.nodes() {
            tree.add_node(cell);
        }

        let start: Coord = (0, 0);
        let mut visited = vec![false; cell_count];
        visited[self.ravel_index(start)] = true;

        // Explicit stack instead of recursion: the DFS can be as deep as the cell count.
        let mut stack = vec![Self::frame(&grid, start, rng)];
        let mut max_depth = stack.len();

        while let Some(top) = stack.last_mut() {
            let cell = top.cell;
            match top.pending.pop() {
                Some(next) => {
                    let index = self.ravel_index(next);
                    if visited[index] {
                        continue;
                    }
                    visited[index] = true;
                    tree.add_edge(cell, next, ());
                    stack.push(Self::frame(&grid, next, rng));
                    max_depth = max_depth.max(stack.len());
                }
                // Every neighbor tried, backtrack
                None => {
                    stack.pop();
                }
            }
        }

        tracing::debug!(
            width = self.width,
            height = self.height,
            max_depth,
            passages = tree.edge_count(),
            "backtracking finished"
        );
        Ok(Maze::new(self.width, self.height, tree))
    }
}

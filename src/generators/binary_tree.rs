use rand::Rng;

use crate::{
    error::{Result, check_dimensions},
    generators::MazeAlgorithm,
    maze::{Maze, SpaceGraph, grid},
};

/// Binary tree: every cell opens a passage either left or up.
///
/// Cells in row 0 can only go left and cells in column 0 can only go up, which leaves
/// long open corridors along those two edges and a diagonal bias toward (0, 0).
#[derive(Debug, Clone)]
pub struct BinaryTree {
    width: u16,
    height: u16,
}

impl BinaryTree {
    pub fn new(width: u16, height: u16) -> Self {
        BinaryTree { width, height }
    }
}

impl MazeAlgorithm for BinaryTree {
    fn generate_with<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<Maze> {
        check_dimensions(self.width, self.height)?;

        let cell_count = self.width as usize * self.height as usize;
        let mut tree = SpaceGraph::with_capacity(cell_count, cell_count - 1);

        // Each cell links to a cell that comes strictly earlier in (x, y) order, so every
        // cell has one path back to (0, 0) and no cycle can form.
        for (x, y) in grid::cells(self.width, self.height) {
            tree.add_node((x, y));
            let towards = match (x, y) {
                (0, 0) => continue,
                (0, y) => (0, y - 1),
                (x, 0) => (x - 1, 0),
                (x, y) => {
                    if rng.random_bool(0.5) {
                        (x - 1, y)
                    } else {
                        (x, y - 1)
                    }
                }
            };
            tree.add_edge((x, y), towards, ());
        }

        tracing::debug!(
            width = self.width,
            height = self.height,
            passages = tree.edge_count(),
            "binary tree finished"
        );
        Ok(Maze::new(self.width, self.height, tree))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{generators::get_rng, maze::is_spanning_tree};

    #[test]
    fn test_spanning_tree() {
        let mut rng = get_rng(Some(17));
        let maze = BinaryTree::new(11, 6).generate_with(&mut rng).unwrap();
        assert_eq!(maze.space_graph().edge_count(), 65);
        assert!(is_spanning_tree(maze.space_graph(), 11, 6));
    }

    #[test]
    fn test_edges_run_open() {
        let mut rng = get_rng(Some(4));
        let maze = BinaryTree::new(7, 5).generate_with(&mut rng).unwrap();
        for x in 1..7 {
            assert!(maze.is_open((x - 1, 0), (x, 0)));
        }
        for y in 1..5 {
            assert!(maze.is_open((0, y - 1), (0, y)));
        }
    }

    #[test]
    fn test_interior_cells_link_left_or_up_once() {
        let mut rng = get_rng(Some(23));
        let maze = BinaryTree::new(9, 9).generate_with(&mut rng).unwrap();
        for x in 1..9 {
            for y in 1..9 {
                let left = maze.is_open((x, y), (x - 1, y));
                let up = maze.is_open((x, y), (x, y - 1));
                assert!(left ^ up, "cell ({x}, {y}) must link exactly one of left/up");
            }
        }
    }

    #[test]
    fn test_left_or_up_is_a_fair_coin() {
        let mut rng = get_rng(Some(31));
        let size = 101;
        let maze = BinaryTree::new(size, size).generate_with(&mut rng).unwrap();
        let mut left = 0;
        let mut interior = 0;
        for x in 1..size {
            for y in 1..size {
                interior += 1;
                if maze.is_open((x, y), (x - 1, y)) {
                    left += 1;
                }
            }
        }
        let share = left as f64 / interior as f64;
        assert!(
            (share - 0.5).abs() < 0.03,
            "{left} of {interior} interior cells went left"
        );
    }

    #[test]
    fn test_origin_degree() {
        // (1, 0) and (0, 1) are both forced toward the origin.
        let maze = BinaryTree::new(3, 3).generate().unwrap();
        assert_eq!(maze.space_graph().neighbors((0, 0)).count(), 2);

        let maze = BinaryTree::new(3, 1).generate().unwrap();
        assert_eq!(maze.space_graph().neighbors((0, 0)).count(), 1);

        let maze = BinaryTree::new(1, 1).generate().unwrap();
        assert_eq!(maze.space_graph().neighbors((0, 0)).count(), 0);
    }
}

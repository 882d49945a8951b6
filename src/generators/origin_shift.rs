use petgraph::graphmap::DiGraphMap;
use rand::Rng;

use crate::{
    error::{MazeError, Result, check_dimensions},
    generators::MazeAlgorithm,
    maze::{
        Coord, Maze,
        grid::{self, to_undirected},
    },
};

/// Number of root moves per cell when no step count is given.
const DEFAULT_STEPS_PER_CELL: u64 = 20;

/// Origin shift: start from a fixed rooted spanning tree and let its root wander.
///
/// Every move points the old root at a random neighbor and makes that neighbor the new
/// root by dropping its own parent link. The tree stays a spanning tree after every move;
/// the default of 20 moves per cell scrambles it well past its starting shape.
#[derive(Debug, Clone)]
pub struct OriginShift {
    width: u16,
    height: u16,
    steps: Option<u64>,
}

impl OriginShift {
    pub fn new(width: u16, height: u16) -> Self {
        OriginShift {
            width,
            height,
            steps: None,
        }
    }

    /// Set the number of root moves. `None` means `20 * width * height`;
    /// `Some(0)` keeps the default tree as is.
    pub fn with_steps(mut self, steps: Option<u64>) -> Self {
        self.steps = steps;
        self
    }

    pub fn steps(&self) -> u64 {
        self.steps
            .unwrap_or(DEFAULT_STEPS_PER_CELL * self.width as u64 * self.height as u64)
    }

    /// The tree the walk starts from, rooted at (0, 0).
    pub fn default_tree(&self) -> Result<ParentTree> {
        check_dimensions(self.width, self.height)?;
        Ok(ParentTree::new(self.width, self.height))
    }
}

impl MazeAlgorithm for OriginShift {
    fn generate_with<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<Maze> {
        let mut tree = self.default_tree()?;
        let steps = self.steps();

        if self.width == 1 && self.height == 1 {
            tracing::warn!(steps, "single cell has nowhere to move the root, skipping walk");
        } else {
            for _ in 0..steps {
                tree.shift_root(rng)?;
            }
        }

        let space_graph = to_undirected(&tree.to_digraph());
        tracing::debug!(
            width = self.width,
            height = self.height,
            steps,
            root = ?tree.root(),
            passages = space_graph.edge_count(),
            "origin shift finished"
        );
        Ok(Maze::new(self.width, self.height, space_graph))
    }
}

/// A spanning tree of the grid with every edge pointing toward a single root.
///
/// Each cell stores its parent, so a non-root cell has exactly one outgoing edge and the
/// root (the only cell without a parent) has none.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParentTree {
    width: u16,
    height: u16,
    parents: Box<[Option<Coord>]>,
    root: Coord,
}

impl ParentTree {
    /// Builds the starting tree: row 0 chains left into (0, 0) and every column chains up
    /// into row 0.
    fn new(width: u16, height: u16) -> Self {
        let mut parents = vec![None; width as usize * height as usize].into_boxed_slice();
        for (x, y) in grid::cells(width, height) {
            let parent = match (x, y) {
                (0, 0) => None,
                (x, 0) => Some((x - 1, 0)),
                (x, y) => Some((x, y - 1)),
            };
            parents[Self::ravel_index(width, (x, y))] = parent;
        }
        ParentTree {
            width,
            height,
            parents,
            root: (0, 0),
        }
    }

    fn ravel_index(width: u16, coord: Coord) -> usize {
        coord.1 as usize * width as usize + coord.0 as usize
    }

    fn index(&self, coord: Coord) -> usize {
        Self::ravel_index(self.width, coord)
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    pub fn root(&self) -> Coord {
        self.root
    }

    /// The cell `coord` points at, or `None` for the root and for out-of-bounds coordinates.
    pub fn parent(&self, coord: Coord) -> Option<Coord> {
        if coord.0 >= self.width || coord.1 >= self.height {
            return None;
        }
        self.parents[self.index(coord)]
    }

    /// Number of outgoing edges of `coord`: 1 for every cell except the root.
    pub fn out_degree(&self, coord: Coord) -> usize {
        self.parent(coord).is_some() as usize
    }

    /// Move the root to a uniformly chosen neighbor of the current root.
    /// Returns the new root.
    pub fn shift_root<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<Coord> {
        let candidates = || grid::neighbors(self.root, self.width, self.height);
        let no_neighbor = || {
            MazeError::InvariantViolation(format!(
                "root {:?} of a {}x{} grid has no neighbor",
                self.root, self.width, self.height
            ))
        };
        let count = candidates().count();
        if count == 0 {
            return Err(no_neighbor());
        }
        let next_root = candidates()
            .nth(rng.random_range(0..count))
            .ok_or_else(no_neighbor)?;
        self.move_root_to(next_root)?;
        Ok(next_root)
    }

    /// Make `next_root`, a neighbor of the current root, the new root.
    pub fn move_root_to(&mut self, next_root: Coord) -> Result<()> {
        let old_root = self.root;
        if old_root.0.abs_diff(next_root.0) + old_root.1.abs_diff(next_root.1) != 1
            || next_root.0 >= self.width
            || next_root.1 >= self.height
        {
            return Err(MazeError::InvariantViolation(format!(
                "{next_root:?} is not a neighbor of root {old_root:?}"
            )));
        }

        let next_index = self.index(next_root);
        if self.parents[next_index].take().is_none() {
            return Err(MazeError::InvariantViolation(format!(
                "{next_root:?} has no outgoing edge while {old_root:?} is root"
            )));
        }
        let old_index = self.index(old_root);
        self.parents[old_index] = Some(next_root);
        self.root = next_root;
        Ok(())
    }

    /// Checks that exactly one cell (the root) lacks a parent, every parent link joins
    /// adjacent cells, and following parents from any cell ends at the root.
    pub fn is_rooted_tree(&self) -> bool {
        const UNKNOWN: u8 = 0;
        const ON_PATH: u8 = 1;
        const REACHES_ROOT: u8 = 2;

        let roots = self.parents.iter().filter(|p| p.is_none()).count();
        if roots != 1 || self.parent(self.root).is_some() {
            return false;
        }

        let mut state = vec![UNKNOWN; self.parents.len()];
        state[self.index(self.root)] = REACHES_ROOT;

        for start in grid::cells(self.width, self.height) {
            let mut path = Vec::new();
            let mut current = start;
            loop {
                let index = self.index(current);
                match state[index] {
                    REACHES_ROOT => break,
                    ON_PATH => return false,
                    _ => {}
                }
                state[index] = ON_PATH;
                path.push(index);
                match self.parents[index] {
                    Some(parent)
                        if parent.0 < self.width
                            && parent.1 < self.height
                            && current.0.abs_diff(parent.0) + current.1.abs_diff(parent.1)
                                == 1 =>
                    {
                        current = parent
                    }
                    _ => return false,
                }
            }
            for index in path {
                state[index] = REACHES_ROOT;
            }
        }
        true
    }

    /// Export as a directed graph with one `child -> parent` edge per non-root cell.
    pub fn to_digraph(&self) -> DiGraphMap<Coord, ()> {
        let mut graph = DiGraphMap::with_capacity(self.parents.len(), self.parents.len());
        for cell in grid::cells(self.width, self.height) {
            graph.add_node(cell);
            if let Some(parent) = self.parent(cell) {
                graph.add_edge(cell, parent, ());
            }
        }
        graph
    }
}

pub mod grid;
pub mod walls;

use petgraph::{graphmap::UnGraphMap, visit::Bfs};

use crate::error::Result;
pub use walls::{WallGraph, space_to_wall_graph};

/// Cell coordinate `(x, y)`; also used for lattice points of the wall graph.
pub type Coord = (u16, u16);

/// Undirected graph over cells. An edge means there is no wall between the two cells.
pub type SpaceGraph = UnGraphMap<Coord, ()>;

/// A perfect maze: a spanning tree over a `width` x `height` grid of cells.
///
/// Only the generators in [`crate::generators`] build mazes, so every `Maze` in circulation
/// has exactly one path between any two of its cells.
#[derive(Debug, Clone)]
pub struct Maze {
    width: u16,
    height: u16,
    space_graph: SpaceGraph,
}

impl Maze {
    pub(crate) fn new(width: u16, height: u16, space_graph: SpaceGraph) -> Self {
        debug_assert!(
            is_spanning_tree(&space_graph, width, height),
            "generated space graph is not a spanning tree of the {width}x{height} grid"
        );
        Maze {
            width,
            height,
            space_graph,
        }
    }

    /// Returns the width of the maze in cells.
    pub fn width(&self) -> u16 {
        self.width
    }

    /// Returns the height of the maze in cells.
    pub fn height(&self) -> u16 {
        self.height
    }

    /// Returns the open passages between cells.
    pub fn space_graph(&self) -> &SpaceGraph {
        &self.space_graph
    }

    pub fn cell_count(&self) -> usize {
        self.width as usize * self.height as usize
    }

    /// Checks if the given coordinate is within the bounds of the maze.
    pub fn is_in_bounds(&self, coord: Coord) -> bool {
        coord.0 < self.width && coord.1 < self.height
    }

    /// Checks if there is an open passage between two cells.
    pub fn is_open(&self, a: Coord, b: Coord) -> bool {
        self.space_graph.contains_edge(a, b)
    }

    /// Derives the wall graph of this maze, see [`space_to_wall_graph`].
    pub fn wall_graph(&self) -> Result<WallGraph> {
        space_to_wall_graph(self.width, self.height, &self.space_graph)
    }
}

/// Checks that `graph` is a spanning tree of the `width` x `height` grid: it holds every
/// cell and nothing else, each edge joins two adjacent cells, it has one edge fewer than
/// it has nodes, and every cell is reachable from (0, 0).
pub fn is_spanning_tree(graph: &SpaceGraph, width: u16, height: u16) -> bool {
    let cell_count = width as usize * height as usize;
    if cell_count == 0 || graph.node_count() != cell_count {
        return false;
    }
    if graph.nodes().any(|(x, y)| x >= width || y >= height) {
        return false;
    }
    if graph.edge_count() != cell_count - 1 {
        return false;
    }
    let adjacent = graph
        .all_edges()
        .all(|(a, b, _)| a.0.abs_diff(b.0) + a.1.abs_diff(b.1) == 1);
    if !adjacent {
        return false;
    }

    let mut bfs = Bfs::new(graph, (0, 0));
    let mut reached = 0;
    while bfs.next(graph).is_some() {
        reached += 1;
    }
    reached == cell_count
}

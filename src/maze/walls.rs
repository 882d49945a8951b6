use petgraph::graphmap::UnGraphMap;

use super::{Coord, SpaceGraph};
use crate::error::{Result, check_dimensions};

/// Undirected graph over lattice points (grid-line intersections). An edge is a wall
/// segment between two adjacent lattice points.
///
/// Cell `(x, y)` is the unit square with corners `(x, y)` and `(x + 1, y + 1)`.
pub type WallGraph = UnGraphMap<Coord, ()>;

/// Build the wall graph with every possible wall segment standing.
pub fn full_lattice(width: u16, height: u16) -> WallGraph {
    let node_count = (width as usize + 1) * (height as usize + 1);
    let mut walls = UnGraphMap::with_capacity(node_count, 2 * node_count);
    for x in 0..=width {
        for y in 0..=height {
            walls.add_node((x, y));
        }
    }
    for x in 0..=width {
        for y in 0..=height {
            if x < width {
                walls.add_edge((x, y), (x + 1, y), ());
            }
            if y < height {
                walls.add_edge((x, y), (x, y + 1), ());
            }
        }
    }
    walls
}

/// The wall segment separating two adjacent cells, as a pair of lattice points.
///
/// With the cells ordered so that `lo < hi`:
/// - same column (`hi` is below `lo`): the horizontal segment along the top edge of `hi`;
/// - same row (`hi` is right of `lo`): the vertical segment along the left edge of `hi`.
///
/// Returns `None` when the segment would end past `u16::MAX`.
pub fn separating_wall(a: Coord, b: Coord) -> Option<(Coord, Coord)> {
    let hi = std::cmp::max(a, b);
    let end = if a.0 == b.0 {
        (hi.0.checked_add(1)?, hi.1)
    } else {
        (hi.0, hi.1.checked_add(1)?)
    };
    Some((hi, end))
}

/// Construct the dual of a maze's space graph and negate it, so edges become walls.
///
/// Starts from the full lattice and knocks out the one segment between the two cells of
/// every space edge. Nothing else is removed, so the outer boundary stays closed. The
/// input graph is only read; edges touching a cell outside the grid are skipped.
pub fn space_to_wall_graph(width: u16, height: u16, space_graph: &SpaceGraph) -> Result<WallGraph> {
    check_dimensions(width, height)?;

    let in_bounds = |c: Coord| c.0 < width && c.1 < height;
    let mut walls = full_lattice(width, height);
    for (a, b, _) in space_graph.all_edges() {
        if !in_bounds(a) || !in_bounds(b) {
            tracing::debug!(?a, ?b, "skipping passage outside the grid");
            continue;
        }
        if let Some((from, to)) = separating_wall(a, b) {
            walls.remove_edge(from, to);
        }
    }

    tracing::debug!(
        width,
        height,
        passages = space_graph.edge_count(),
        walls = walls.edge_count(),
        "built wall graph"
    );
    Ok(walls)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::MazeError;

    #[test]
    fn test_full_lattice_counts() {
        let walls = full_lattice(3, 2);
        assert_eq!(walls.node_count(), 4 * 3);
        // horizontal segments: 3 per row over 3 rows, vertical: 2 per column over 4 columns
        assert_eq!(walls.edge_count(), 9 + 8);
    }

    #[test]
    fn test_separating_wall_orientation() {
        // vertically adjacent cells share a horizontal segment
        assert_eq!(separating_wall((2, 3), (2, 4)), Some(((2, 4), (3, 4))));
        assert_eq!(separating_wall((2, 4), (2, 3)), Some(((2, 4), (3, 4))));
        // horizontally adjacent cells share a vertical segment
        assert_eq!(separating_wall((1, 0), (2, 0)), Some(((2, 0), (2, 1))));
        assert_eq!(separating_wall((u16::MAX, 0), (u16::MAX, 1)), None);
    }

    #[test]
    fn test_out_of_grid_passages_ignored() {
        let mut space = SpaceGraph::new();
        space.add_edge((u16::MAX, 0), (u16::MAX, 1), ());
        space.add_edge((0, 1), (0, u16::MAX), ());
        space.add_edge((0, 0), (1, 0), ());

        let walls = space_to_wall_graph(2, 2, &space).unwrap();
        assert_eq!(walls.edge_count(), full_lattice(2, 2).edge_count() - 1);
        assert!(!walls.contains_edge((1, 0), (1, 1)));
    }

    #[test]
    fn test_two_cells_side_by_side() {
        let mut space = SpaceGraph::new();
        space.add_edge((0, 0), (1, 0), ());

        let walls = space_to_wall_graph(2, 1, &space).unwrap();
        let mut nodes: Vec<_> = walls.nodes().collect();
        nodes.sort();
        assert_eq!(nodes, vec![(0, 0), (0, 1), (1, 0), (1, 1), (2, 0), (2, 1)]);
        assert_eq!(walls.edge_count(), 6);
        assert!(!walls.contains_edge((1, 0), (1, 1)));
        assert_eq!(full_lattice(2, 1).edge_count(), 7);
    }

    #[test]
    fn test_two_cells_stacked() {
        let mut space = SpaceGraph::new();
        space.add_edge((0, 1), (0, 0), ());

        let walls = space_to_wall_graph(1, 2, &space).unwrap();
        assert_eq!(walls.edge_count(), 6);
        assert!(!walls.contains_edge((0, 1), (1, 1)));
        assert!(walls.contains_edge((0, 0), (1, 0)));
        assert!(walls.contains_edge((0, 2), (1, 2)));
    }

    #[test]
    fn test_single_cell_keeps_square() {
        let mut space = SpaceGraph::new();
        space.add_node((0, 0));

        let walls = space_to_wall_graph(1, 1, &space).unwrap();
        assert_eq!(walls.node_count(), 4);
        assert_eq!(walls.edge_count(), 4);
    }

    #[test]
    fn test_input_not_mutated() {
        let mut space = SpaceGraph::new();
        space.add_edge((0, 0), (1, 0), ());
        space.add_edge((1, 0), (1, 1), ());
        space.add_edge((1, 1), (0, 1), ());
        let before: Vec<_> = space.all_edges().map(|(a, b, _)| (a, b)).collect();

        space_to_wall_graph(2, 2, &space).unwrap();

        let after: Vec<_> = space.all_edges().map(|(a, b, _)| (a, b)).collect();
        assert_eq!(before, after);
    }

    #[test]
    fn test_zero_dimension_rejected() {
        let space = SpaceGraph::new();
        assert!(matches!(
            space_to_wall_graph(0, 3, &space),
            Err(MazeError::InvalidDimension { .. })
        ));
    }
}

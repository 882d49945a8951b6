use petgraph::graphmap::{DiGraphMap, UnGraphMap};

use super::{Coord, SpaceGraph};

/// Get the in-bounds neighbors of a cell in a `width` x `height` grid.
/// A neighbor is one step away in a cardinal direction. The order is fixed
/// (left, right, up, down) so that callers drawing random indices stay reproducible.
pub fn neighbors(coord: Coord, width: u16, height: u16) -> impl Iterator<Item = Coord> {
    let (x, y) = coord;
    let in_bounds = move |c: &Coord| c.0 < width && c.1 < height;
    let origin_in_bounds = in_bounds(&coord);
    // NOTE: x - 1 wraps to u16::MAX at the left edge and x + 1 saturates at u16::MAX,
    // both of which fail the bounds check below (dimensions never exceed u16::MAX).
    [
        (x.wrapping_sub(1), y),
        (x.saturating_add(1), y),
        (x, y.wrapping_sub(1)),
        (x, y.saturating_add(1)),
    ]
    .into_iter()
    .filter(move |c| origin_in_bounds && in_bounds(c))
}

/// Iterate over every cell of a `width` x `height` grid, column by column.
pub fn cells(width: u16, height: u16) -> impl Iterator<Item = Coord> {
    (0..width).flat_map(move |x| (0..height).map(move |y| (x, y)))
}

/// Build the full 4-adjacency grid graph: one node per cell, one edge per pair of
/// orthogonally adjacent cells.
pub fn canonical_grid(width: u16, height: u16) -> SpaceGraph {
    let node_count = width as usize * height as usize;
    let mut graph = UnGraphMap::with_capacity(node_count, 2 * node_count);
    for cell in cells(width, height) {
        graph.add_node(cell);
    }
    for (x, y) in cells(width, height) {
        if x + 1 < width {
            graph.add_edge((x, y), (x + 1, y), ());
        }
        if y + 1 < height {
            graph.add_edge((x, y), (x, y + 1), ());
        }
    }
    graph
}

/// Forget edge directions. Opposite directed edges between the same pair collapse into a
/// single undirected edge; isolated nodes are kept.
pub fn to_undirected(tree: &DiGraphMap<Coord, ()>) -> SpaceGraph {
    let mut graph = UnGraphMap::with_capacity(tree.node_count(), tree.edge_count());
    for node in tree.nodes() {
        graph.add_node(node);
    }
    for (from, to, _) in tree.all_edges() {
        graph.add_edge(from, to, ());
    }
    graph
}

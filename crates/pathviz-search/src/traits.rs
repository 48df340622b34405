use pathviz_core::Point;

/// Neighbor enumeration, the only thing BFS needs from a grid.
pub trait Pather {
    /// Append the passable neighbors of `p` to `buf`, in expansion order.
    /// The caller clears `buf` first.
    fn neighbors(&self, p: Point, buf: &mut Vec<Point>);
}

/// A pather whose steps carry a floating-point cost (Dijkstra).
pub trait WeightedPather: Pather {
    /// Cost of stepping from `from` to the adjacent `to`. Always > 0.
    fn cost(&self, from: Point, to: Point) -> f64;
}

/// A weighted pather with a heuristic (A*).
pub trait AstarPather: WeightedPather {
    /// Estimated remaining cost from `from` to `to`. Must not overestimate.
    fn estimate(&self, from: Point, to: Point) -> f64;
}

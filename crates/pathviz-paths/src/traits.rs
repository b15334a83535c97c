use pathviz_core::Point;

/// Remaining-cost estimate that turns the shared relaxation loop into a
/// concrete algorithm. The open-set priority of a node is its accumulated
/// cost plus `estimate(node, end)`.
pub trait Estimator: Send + Sync {
    /// Human-readable algorithm name.
    const NAME: &'static str;

    /// Estimated cost from `from` to `to`. Must never overestimate the true
    /// cost (admissible).
    fn estimate(&self, from: Point, to: Point) -> f64;
}

//! Reachability over the connection graph.
//!
//! The graph is a forest before every check, so a DFS with a visited set
//! touches each point at most once.

use rustc_hash::FxHashSet;

use crate::grid::PointId;

/// Check whether joining `origin` and `target` would close a cycle.
///
/// True iff `target` is already reachable from `origin` through existing
/// connections. `neighbors` returns the direct connections of a point.
///
/// ```
/// use rust_linegame::graph::would_create_cycle;
/// use rust_linegame::grid::PointId;
///
/// // 0 - 1 - 2, and 3 on its own.
/// let adjacency: Vec<Vec<PointId>> = vec![
///     vec![PointId(1)],
///     vec![PointId(0), PointId(2)],
///     vec![PointId(1)],
///     vec![],
/// ];
/// let neighbors = |id: PointId| adjacency[id.index()].as_slice();
///
/// assert!(would_create_cycle(PointId(0), PointId(2), neighbors));
/// assert!(!would_create_cycle(PointId(0), PointId(3), neighbors));
/// ```
pub fn would_create_cycle<'a, F>(origin: PointId, target: PointId, neighbors: F) -> bool
where
    F: Fn(PointId) -> &'a [PointId],
{
    let mut visited = FxHashSet::default();
    let mut stack = vec![origin];

    while let Some(current) = stack.pop() {
        if current == target {
            return true;
        }
        if !visited.insert(current) {
            continue;
        }
        stack.extend(
            neighbors(current)
                .iter()
                .copied()
                .filter(|n| !visited.contains(n)),
        );
    }

    false
}

/// Check that the graph over `point_count` points contains no cycle.
///
/// Used to assert the forest invariant after moves.
pub fn is_forest<'a, F>(point_count: usize, neighbors: F) -> bool
where
    F: Fn(PointId) -> &'a [PointId],
{
    let mut visited = FxHashSet::default();

    for root in (0..point_count as u32).map(PointId) {
        if visited.contains(&root) {
            continue;
        }

        // (point, parent)
        let mut stack = vec![(root, None)];
        visited.insert(root);
        while let Some((current, parent)) = stack.pop() {
            for &next in neighbors(current) {
                if Some(next) == parent {
                    continue;
                }
                if !visited.insert(next) {
                    return false;
                }
                stack.push((next, Some(current)));
            }
        }
    }

    true
}

#[cfg(test)]
mod tests {
    use super::*;

    fn adjacency(point_count: usize, edges: &[(u32, u32)]) -> Vec<Vec<PointId>> {
        let mut adj = vec![Vec::new(); point_count];
        for &(a, b) in edges {
            adj[a as usize].push(PointId(b));
            adj[b as usize].push(PointId(a));
        }
        adj
    }

    #[test]
    fn test_empty_graph_never_cycles() {
        let adj = adjacency(4, &[]);
        let neighbors = |id: PointId| adj[id.index()].as_slice();

        assert!(!would_create_cycle(PointId(0), PointId(3), neighbors));
    }

    #[test]
    fn test_path_endpoints_would_cycle() {
        let adj = adjacency(5, &[(0, 1), (1, 2), (2, 3)]);
        let neighbors = |id: PointId| adj[id.index()].as_slice();

        assert!(would_create_cycle(PointId(0), PointId(3), neighbors));
        assert!(would_create_cycle(PointId(3), PointId(0), neighbors));
        assert!(!would_create_cycle(PointId(0), PointId(4), neighbors));
    }

    #[test]
    fn test_separate_trees() {
        let adj = adjacency(6, &[(0, 1), (2, 3), (3, 4)]);
        let neighbors = |id: PointId| adj[id.index()].as_slice();

        assert!(!would_create_cycle(PointId(1), PointId(4), neighbors));
        assert!(would_create_cycle(PointId(2), PointId(4), neighbors));
    }

    #[test]
    fn test_self_is_reachable() {
        let adj = adjacency(2, &[]);
        let neighbors = |id: PointId| adj[id.index()].as_slice();

        assert!(would_create_cycle(PointId(1), PointId(1), neighbors));
    }

    #[test]
    fn test_is_forest() {
        let tree = adjacency(5, &[(0, 1), (1, 2), (1, 3)]);
        assert!(is_forest(5, |id| tree[id.index()].as_slice()));

        let empty = adjacency(3, &[]);
        assert!(is_forest(3, |id| empty[id.index()].as_slice()));

        let triangle = adjacency(4, &[(0, 1), (1, 2), (2, 0)]);
        assert!(!is_forest(4, |id| triangle[id.index()].as_slice()));
    }

    #[test]
    fn test_is_forest_cycle_in_second_component() {
        let adj = adjacency(7, &[(0, 1), (2, 3), (3, 4), (4, 5), (5, 2)]);
        assert!(!is_forest(7, |id| adj[id.index()].as_slice()));
    }
}

//! Phase 2 tests: BFS, DFS and shortest paths.

use std::collections::HashSet;

use social_graph::graph::{bfs, dfs, shortest_path, shortest_route, GraphBuilder, SocialGraph};
use social_graph::types::{GraphError, UserId};

// ==================== Helper ====================

fn build(pairs: &[(UserId, UserId)]) -> SocialGraph {
    let mut builder = GraphBuilder::new();
    builder.connect_all(pairs.iter().copied());
    builder.build()
}

/// Edges (1,2),(2,3),(3,4),(1,5).
fn scenario() -> SocialGraph {
    build(&[(1, 2), (2, 3), (3, 4), (1, 5)])
}

fn position(order: &[UserId], user: UserId) -> usize {
    order
        .iter()
        .position(|&u| u == user)
        .unwrap_or_else(|| panic!("{} not visited", user))
}

// ==================== Reference scenario ====================

#[test]
fn test_scenario_distances_and_count() {
    let graph = scenario();
    assert_eq!(graph.shortest_path(1, 4).unwrap(), Some(3));
    assert_eq!(graph.shortest_path(1, 3).unwrap(), Some(2));
    assert_eq!(graph.count_total_connections(), 4);
    assert_eq!(graph.direct_connections(1).unwrap(), &[2, 5]);
}

#[test]
fn test_scenario_bfs_order() {
    let graph = scenario();
    let order = graph.bfs(1).unwrap();

    let visited: HashSet<UserId> = order.iter().copied().collect();
    assert_eq!(visited, [1, 2, 3, 4, 5].into_iter().collect());
    assert_eq!(order.len(), 5);
    assert_eq!(order[0], 1);
    assert!(position(&order, 2) < position(&order, 3));
    assert!(position(&order, 5) < position(&order, 3));
    assert!(position(&order, 3) < position(&order, 4));
    assert_eq!(order, vec![1, 2, 5, 3, 4]);
}

#[test]
fn test_scenario_delete_disconnects() {
    let mut graph = scenario();
    graph.delete_connection(1, 2).unwrap();
    assert_eq!(graph.shortest_path(1, 4).unwrap(), None);
    assert_eq!(graph.shortest_route(1, 4).unwrap(), None);
    assert_eq!(graph.bfs(1).unwrap(), vec![1, 5]);
}

// ==================== BFS / DFS ====================

#[test]
fn test_dfs_matches_recursive_preorder() {
    // 1 -> [2, 3], 2 -> [4], 3 -> [4, 5]
    let graph = build(&[(1, 2), (1, 3), (2, 4), (3, 4), (3, 5)]);
    // Recursive: 1, 2, 4 (via 2), 3 (via 4), 5 (via 3)
    assert_eq!(graph.dfs(1).unwrap(), vec![1, 2, 4, 3, 5]);
    assert_eq!(dfs(&graph, 5).unwrap(), vec![5, 3, 1, 2, 4]);
}

#[test]
fn test_dfs_on_scenario() {
    let graph = scenario();
    assert_eq!(graph.dfs(1).unwrap(), vec![1, 2, 3, 4, 5]);
    assert_eq!(graph.dfs(4).unwrap(), vec![4, 3, 2, 1, 5]);
}

#[test]
fn test_traversals_stay_in_component() {
    let graph = build(&[(1, 2), (2, 3), (10, 11), (11, 12), (12, 10)]);

    let b = graph.bfs(10).unwrap();
    let d = graph.dfs(10).unwrap();
    for order in [&b, &d] {
        let set: HashSet<UserId> = order.iter().copied().collect();
        assert_eq!(set.len(), order.len(), "duplicate visit in {:?}", order);
        assert_eq!(set, [10, 11, 12].into_iter().collect());
    }
}

#[test]
fn test_traversals_handle_cycles_and_parallel_edges() {
    let graph = build(&[(1, 2), (2, 3), (3, 1), (1, 2), (3, 3)]);
    assert_eq!(graph.bfs(1).unwrap(), vec![1, 2, 3]);
    assert_eq!(graph.dfs(1).unwrap(), vec![1, 2, 3]);
}

#[test]
fn test_traversal_of_absent_user_fails() {
    let graph = scenario();
    assert!(matches!(bfs(&graph, 99), Err(GraphError::UserNotFound(99))));
    assert!(matches!(dfs(&graph, -1), Err(GraphError::UserNotFound(-1))));
}

#[test]
fn test_deep_chain_dfs_does_not_recurse() {
    let n: UserId = 200_000;
    let mut graph = SocialGraph::new();
    for i in 0..n {
        graph.add_connection(i, i + 1);
    }
    let order = graph.dfs(0).unwrap();
    assert_eq!(order.len() as UserId, n + 1);
    assert_eq!(order.last(), Some(&n));
    assert_eq!(graph.shortest_path(0, n).unwrap(), Some(n as usize));
}

// ==================== Shortest path ====================

#[test]
fn test_shortest_path_to_self_is_zero() {
    let mut graph = scenario();
    assert_eq!(graph.shortest_path(3, 3).unwrap(), Some(0));
    assert_eq!(graph.shortest_route(3, 3).unwrap(), Some(vec![3]));

    graph.delete_connection(4, 3).unwrap();
    // Isolated user still reaches itself
    assert_eq!(graph.shortest_path(4, 4).unwrap(), Some(0));
}

#[test]
fn test_shortest_path_is_symmetric() {
    let graph = build(&[(1, 2), (2, 3), (3, 4), (4, 5), (1, 6), (6, 5), (7, 8)]);
    for a in graph.users() {
        for b in graph.users() {
            assert_eq!(
                graph.shortest_path(a, b).unwrap(),
                graph.shortest_path(b, a).unwrap(),
                "asymmetric distance between {} and {}",
                a,
                b
            );
        }
    }
    assert_eq!(graph.shortest_path(1, 5).unwrap(), Some(2));
    assert_eq!(graph.shortest_path(1, 8).unwrap(), None);
}

#[test]
fn test_shortest_path_takes_shorter_branch() {
    // Long way 1-2-3-4-5, short way 1-9-5
    let graph = build(&[(1, 2), (2, 3), (3, 4), (4, 5), (1, 9), (9, 5)]);
    assert_eq!(graph.shortest_path(1, 5).unwrap(), Some(2));
    assert_eq!(graph.shortest_route(1, 5).unwrap(), Some(vec![1, 9, 5]));
}

#[test]
fn test_shortest_path_absent_endpoint() {
    let graph = scenario();
    assert!(matches!(
        shortest_path(&graph, 1, 42),
        Err(GraphError::UserNotFound(42))
    ));
    assert!(matches!(
        shortest_path(&graph, 42, 1),
        Err(GraphError::UserNotFound(42))
    ));
    assert!(shortest_route(&graph, 0, 1).is_err());
}

#[test]
fn test_route_is_a_valid_path() {
    let graph = build(&[(1, 2), (2, 3), (3, 4), (2, 5), (5, 6), (6, 4), (4, 7)]);
    let route = graph.shortest_route(1, 7).unwrap().unwrap();
    let distance = graph.shortest_path(1, 7).unwrap().unwrap();

    assert_eq!(route.len(), distance + 1);
    assert_eq!(route.first(), Some(&1));
    assert_eq!(route.last(), Some(&7));
    for hop in route.windows(2) {
        assert!(
            graph.direct_connections(hop[0]).unwrap().contains(&hop[1]),
            "{} -> {} is not an edge",
            hop[0],
            hop[1]
        );
    }
}

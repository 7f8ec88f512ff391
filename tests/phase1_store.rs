//! Phase 1 tests: Graph Store mutations and queries.

use social_graph::graph::{DuplicateEdges, GraphBuilder, SocialGraph};
use social_graph::types::{Connection, GraphError};

// ==================== Helper ====================

/// Symmetry: every neighbor entry has a matching entry on the other side.
fn assert_symmetric(graph: &SocialGraph) {
    for u in graph.users() {
        for &v in graph.direct_connections(u).unwrap() {
            let back = graph.direct_connections(v).unwrap();
            let forward_count = graph
                .direct_connections(u)
                .unwrap()
                .iter()
                .filter(|&&x| x == v)
                .count();
            let back_count = back.iter().filter(|&&x| x == u).count();
            assert_eq!(
                forward_count, back_count,
                "asymmetric entries between {} and {}",
                u, v
            );
        }
    }
}

fn scenario() -> SocialGraph {
    let mut builder = GraphBuilder::new();
    builder.connect(1, 2).connect(2, 3).connect(3, 4).connect(1, 5);
    builder.build()
}

// ==================== addConnection ====================

#[test]
fn test_add_connection_creates_both_users() {
    let mut graph = SocialGraph::new();
    assert!(graph.add_connection(10, 20));

    assert!(graph.search_user(10));
    assert!(graph.search_user(20));
    assert_eq!(graph.direct_connections(10).unwrap(), &[20]);
    assert_eq!(graph.direct_connections(20).unwrap(), &[10]);
    assert_eq!(graph.user_count(), 2);
}

#[test]
fn test_add_connection_keeps_insertion_order() {
    let mut graph = SocialGraph::new();
    graph.add_connection(1, 9);
    graph.add_connection(1, 3);
    graph.add_connection(1, 7);
    assert_eq!(graph.direct_connections(1).unwrap(), &[9, 3, 7]);
}

#[test]
fn test_duplicate_connection_is_kept_by_default() {
    let mut graph = SocialGraph::new();
    graph.add_connection(1, 2);
    assert!(graph.add_connection(1, 2));

    assert_eq!(graph.direct_connections(1).unwrap(), &[2, 2]);
    assert_eq!(graph.direct_connections(2).unwrap(), &[1, 1]);
    assert_eq!(graph.count_total_connections(), 1);
    assert_symmetric(&graph);
}

#[test]
fn test_duplicate_connection_ignored_by_policy() {
    let mut graph = SocialGraph::with_duplicate_edges(DuplicateEdges::Ignore);
    assert!(graph.add_connection(1, 2));
    assert!(!graph.add_connection(1, 2));
    assert!(!graph.add_connection(2, 1));

    assert_eq!(graph.direct_connections(1).unwrap(), &[2]);
    assert_eq!(graph.direct_connections(2).unwrap(), &[1]);
    assert_eq!(graph.duplicate_edges(), DuplicateEdges::Ignore);
}

#[test]
fn test_self_loop_stored_on_own_list() {
    let mut graph = SocialGraph::new();
    graph.add_connection(4, 4);

    assert!(graph.search_user(4));
    assert_eq!(graph.direct_connections(4).unwrap(), &[4, 4]);
    assert_eq!(graph.count_total_connections(), 0);
    assert_eq!(graph.user_count(), 1);
}

#[test]
fn test_negative_ids_are_valid_users() {
    let mut graph = SocialGraph::new();
    graph.add_connection(-1, i64::MIN);
    graph.add_connection(-1, 0);

    assert!(graph.search_user(i64::MIN));
    assert_eq!(graph.direct_connections(-1).unwrap(), &[i64::MIN, 0]);
    assert_eq!(graph.count_total_connections(), 2);
}

// ==================== deleteConnection ====================

#[test]
fn test_delete_connection_removes_both_sides() {
    let mut graph = scenario();
    graph.delete_connection(1, 2).unwrap();

    assert_eq!(graph.direct_connections(1).unwrap(), &[5]);
    assert_eq!(graph.direct_connections(2).unwrap(), &[3]);
    assert_eq!(graph.count_total_connections(), 3);
    assert_symmetric(&graph);
}

#[test]
fn test_delete_missing_edge_between_present_users_succeeds() {
    let mut graph = scenario();
    assert!(graph.delete_connection(1, 4).is_ok());
    assert_eq!(graph.count_total_connections(), 4);
}

#[test]
fn test_delete_with_absent_user_fails() {
    let mut graph = scenario();

    match graph.delete_connection(1, 99) {
        Err(GraphError::UserNotFound(99)) => {}
        other => panic!("Expected UserNotFound(99), got {:?}", other),
    }
    match graph.delete_connection(42, 1) {
        Err(GraphError::UserNotFound(42)) => {}
        other => panic!("Expected UserNotFound(42), got {:?}", other),
    }
    // Graph unchanged
    assert_eq!(graph.direct_connections(1).unwrap(), &[2, 5]);
}

#[test]
fn test_delete_removes_one_parallel_copy_per_call() {
    let mut graph = SocialGraph::new();
    graph.add_connection(1, 2);
    graph.add_connection(1, 2);

    graph.delete_connection(1, 2).unwrap();
    assert_eq!(graph.direct_connections(1).unwrap(), &[2]);
    assert_eq!(graph.count_total_connections(), 1);

    graph.delete_connection(2, 1).unwrap();
    assert!(graph.direct_connections(1).unwrap().is_empty());
    assert_eq!(graph.count_total_connections(), 0);
}

#[test]
fn test_user_survives_losing_all_connections() {
    let mut graph = SocialGraph::new();
    graph.add_connection(1, 2);
    graph.delete_connection(1, 2).unwrap();

    assert!(graph.search_user(1));
    assert!(graph.search_user(2));
    assert_eq!(graph.direct_connections(1).unwrap(), &[] as &[i64]);
    assert_eq!(graph.bfs(1).unwrap(), vec![1]);
    assert_eq!(graph.stats().isolated_users, 2);
}

#[test]
fn test_delete_self_loop() {
    let mut graph = SocialGraph::new();
    graph.add_connection(3, 3);
    graph.add_connection(3, 4);
    graph.delete_connection(3, 3).unwrap();
    assert_eq!(graph.direct_connections(3).unwrap(), &[4]);
}

// ==================== Queries ====================

#[test]
fn test_search_and_lookup_on_empty_graph() {
    let graph = SocialGraph::new();
    assert!(graph.is_empty());
    assert!(!graph.search_user(99));

    let err = graph.direct_connections(99).unwrap_err();
    assert!(err.is_not_found());
    assert_eq!(err.to_string(), "User 99 does not exist in the network");
}

#[test]
fn test_degree() {
    let mut graph = scenario();
    graph.add_connection(1, 2);
    assert_eq!(graph.degree(1).unwrap(), 3);
    assert_eq!(graph.degree(4).unwrap(), 1);
    assert!(graph.degree(100).is_err());
}

#[test]
fn test_count_ignores_order_and_duplicates() {
    let pairs = [(1, 2), (2, 3), (3, 4), (1, 5)];

    let mut forward = GraphBuilder::new();
    forward.connect_all(pairs);
    let forward = forward.build();

    let mut reversed = GraphBuilder::new();
    reversed.connect_all(pairs.iter().rev().map(|&(a, b)| (b, a)));
    reversed.connect_all(pairs);
    let reversed = reversed.build();

    assert_eq!(forward.count_total_connections(), 4);
    assert_eq!(reversed.count_total_connections(), 4);
    assert_eq!(forward.connections(), reversed.connections());
}

#[test]
fn test_connections_listing() {
    let graph = scenario();
    let expected: Vec<Connection> = vec![
        Connection::new(1, 2),
        Connection::new(1, 5),
        Connection::new(2, 3),
        Connection::new(3, 4),
    ];
    assert_eq!(graph.connections(), expected);
    assert_eq!(graph.connections().len(), graph.count_total_connections());
}

#[test]
fn test_connection_normalizes_endpoints() {
    let c = Connection::new(9, 3);
    assert_eq!((c.low, c.high), (3, 9));
    assert_eq!(c, Connection::from((3, 9)));
    assert!(c.involves(9));
    assert!(!c.involves(4));
    assert!(Connection::new(2, 2).is_self_loop());
    assert_eq!(c.to_string(), "3 -- 9");
}

#[test]
fn test_users_sorted() {
    let mut graph = SocialGraph::new();
    graph.add_connection(30, -2);
    graph.add_connection(7, 30);
    assert_eq!(graph.users(), vec![-2, 7, 30]);
}

#[test]
fn test_stats() {
    let mut graph = scenario();
    graph.add_connection(1, 2);
    graph.add_connection(6, 6);

    let stats = graph.stats();
    assert_eq!(stats.users, 6);
    assert_eq!(stats.connections, 4);
    assert_eq!(stats.adjacency_entries, 12);
    assert_eq!(stats.isolated_users, 0);
    assert_eq!(stats.max_degree, 3);
}

#[test]
fn test_builder_applies_policy() {
    let mut builder = GraphBuilder::new().with_duplicate_edges(DuplicateEdges::Ignore);
    builder.connect(1, 2).connect(2, 1).connect(1, 2);
    assert_eq!(builder.len(), 3);
    assert!(!builder.is_empty());

    let graph = builder.build();
    assert_eq!(graph.direct_connections(1).unwrap(), &[2]);
}

#[test]
fn test_symmetry_after_mixed_operations() {
    let mut graph = SocialGraph::new();
    for (a, b) in [(1, 2), (2, 3), (1, 2), (3, 3), (4, 1), (2, 4)] {
        graph.add_connection(a, b);
    }
    graph.delete_connection(2, 1).unwrap();
    graph.delete_connection(3, 1).unwrap();
    graph.delete_connection(3, 3).unwrap();
    assert_symmetric(&graph);
}

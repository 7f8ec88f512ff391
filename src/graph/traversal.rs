//! Graph traversal algorithms (BFS, DFS, unweighted shortest path).

use std::collections::{HashMap, HashSet, VecDeque};

use log::debug;

use crate::types::{GraphResult, UserId};

use super::SocialGraph;

/// Breadth-first visitation order starting at `start`.
///
/// Neighbors are enqueued in stored order and marked visited when enqueued,
/// so each user in `start`'s component appears exactly once.
pub fn bfs(graph: &SocialGraph, start: UserId) -> GraphResult<Vec<UserId>> {
    graph.require(start)?;

    let mut visited: HashSet<UserId> = HashSet::new();
    let mut order: Vec<UserId> = Vec::new();
    let mut queue: VecDeque<UserId> = VecDeque::new();

    visited.insert(start);
    queue.push_back(start);

    while let Some(current) = queue.pop_front() {
        order.push(current);
        for &neighbor in graph.neighbors(current) {
            if visited.insert(neighbor) {
                queue.push_back(neighbor);
            }
        }
    }

    debug!("bfs from {start} visited {} users", order.len());
    Ok(order)
}

/// Depth-first visitation order starting at `start`.
///
/// Iterative, with neighbors pushed in reverse so the pop order matches the
/// recursive preorder over stored neighbor order.
pub fn dfs(graph: &SocialGraph, start: UserId) -> GraphResult<Vec<UserId>> {
    graph.require(start)?;

    let mut visited: HashSet<UserId> = HashSet::new();
    let mut order: Vec<UserId> = Vec::new();
    let mut stack: Vec<UserId> = vec![start];

    while let Some(current) = stack.pop() {
        if !visited.insert(current) {
            continue;
        }
        order.push(current);
        for &neighbor in graph.neighbors(current).iter().rev() {
            if !visited.contains(&neighbor) {
                stack.push(neighbor);
            }
        }
    }

    debug!("dfs from {start} visited {} users", order.len());
    Ok(order)
}

/// Minimum number of edges between `src` and `dest`.
///
/// Returns `Ok(None)` when `dest` is not in `src`'s component. BFS dequeues
/// in non-decreasing distance order, so the first discovery of `dest` is
/// minimal.
pub fn shortest_path(graph: &SocialGraph, src: UserId, dest: UserId) -> GraphResult<Option<usize>> {
    graph.require(src)?;
    graph.require(dest)?;

    if src == dest {
        return Ok(Some(0));
    }

    let mut visited: HashSet<UserId> = HashSet::new();
    let mut queue: VecDeque<(UserId, usize)> = VecDeque::new();

    visited.insert(src);
    queue.push_back((src, 0));

    while let Some((current, distance)) = queue.pop_front() {
        for &neighbor in graph.neighbors(current) {
            if !visited.insert(neighbor) {
                continue;
            }
            if neighbor == dest {
                return Ok(Some(distance + 1));
            }
            queue.push_back((neighbor, distance + 1));
        }
    }

    Ok(None)
}

/// One minimum-length route from `src` to `dest`, both endpoints included.
///
/// Same search as [`shortest_path`] with parent links, so
/// `route.len() == distance + 1`.
pub fn shortest_route(
    graph: &SocialGraph,
    src: UserId,
    dest: UserId,
) -> GraphResult<Option<Vec<UserId>>> {
    graph.require(src)?;
    graph.require(dest)?;

    if src == dest {
        return Ok(Some(vec![src]));
    }

    let mut parents: HashMap<UserId, UserId> = HashMap::new();
    let mut queue: VecDeque<UserId> = VecDeque::new();
    queue.push_back(src);

    while let Some(current) = queue.pop_front() {
        for &neighbor in graph.neighbors(current) {
            if neighbor == src || parents.contains_key(&neighbor) {
                continue;
            }
            parents.insert(neighbor, current);
            if neighbor == dest {
                return Ok(Some(unwind(&parents, src, dest)));
            }
            queue.push_back(neighbor);
        }
    }

    Ok(None)
}

fn unwind(parents: &HashMap<UserId, UserId>, src: UserId, dest: UserId) -> Vec<UserId> {
    let mut route = vec![dest];
    let mut current = dest;
    while current != src {
        match parents.get(&current) {
            Some(&parent) => {
                route.push(parent);
                current = parent;
            }
            None => break,
        }
    }
    route.reverse();
    route
}

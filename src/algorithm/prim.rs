//! Prim 最小生成树算法
//!
//! 从第一个顶点出发，用索引二叉堆维护候选边。同权重的候选边按入堆顺序出堆。
//! 只生成起点所在连通分量的生成树，起点不可达的顶点不会出现在任何一步中。

use super::result::MstResult;
use super::MstEngine;
use crate::error::{Error, Result};
use crate::graph::Graph;
use crate::types::Algorithm;
use priority_queue::PriorityQueue;
use std::cmp::{Ordering, Reverse};
use std::time::Instant;
use tracing::{debug, trace};

/// Prim 算法
#[derive(Debug, Clone, Copy, Default)]
pub struct Prim;

impl Prim {
    pub fn new() -> Self {
        Self
    }
}

/// 候选边的堆键：先比较权重，再比较入堆序号
#[derive(Debug, Clone, Copy)]
struct FrontierKey {
    weight: f64,
    seq: u64,
}

impl PartialEq for FrontierKey {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for FrontierKey {}

impl PartialOrd for FrontierKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for FrontierKey {
    fn cmp(&self, other: &Self) -> Ordering {
        self.weight
            .total_cmp(&other.weight)
            .then(self.seq.cmp(&other.seq))
    }
}

/// 候选边集合（最小堆，元素为边下标）
struct Frontier {
    heap: PriorityQueue<usize, Reverse<FrontierKey>>,
    seq: u64,
}

impl Frontier {
    fn new() -> Self {
        Self {
            heap: PriorityQueue::new(),
            seq: 0,
        }
    }

    fn push(&mut self, edge: usize, weight: f64) {
        let key = FrontierKey {
            weight,
            seq: self.seq,
        };
        self.seq += 1;
        self.heap.push(edge, Reverse(key));
    }

    fn pop(&mut self) -> Option<usize> {
        self.heap.pop().map(|(edge, _)| edge)
    }
}

impl MstEngine for Prim {
    fn algorithm(&self) -> Algorithm {
        Algorithm::Prim
    }

    fn run(&self, graph: &Graph) -> Result<MstResult> {
        let started = Instant::now();
        let seed = graph.seed().ok_or(Error::EmptyGraph)?;
        let edges = graph.edges();
        let index = graph.endpoint_index();
        debug!(
            nodes = graph.node_count(),
            edges = edges.len(),
            seed = %seed,
            "prim: start"
        );

        let seed = index
            .get(seed)
            .ok_or_else(|| Error::UnknownNode(seed.to_string()))?;
        let mut visited = vec![false; index.len()];
        let mut frontier = Frontier::new();

        // 把与 node 关联、另一端尚未访问的边加入候选集合
        let expand = |node: usize, visited: &[bool], frontier: &mut Frontier| {
            for &e in index.incident(node) {
                let (s, t) = index.endpoints(e);
                if !visited[s] || !visited[t] {
                    frontier.push(e, edges[e].weight());
                }
            }
        };

        visited[seed] = true;
        let mut reached = 1;
        expand(seed, &visited, &mut frontier);

        let mut mst = Vec::with_capacity(index.len().saturating_sub(1));
        let mut total_weight = 0.0;

        while let Some(e) = frontier.pop() {
            let (s, t) = index.endpoints(e);
            if visited[s] && visited[t] {
                trace!(edge = e, "prim: discard stale");
                continue;
            }

            let edge = &edges[e];
            total_weight += edge.weight();
            mst.push(edge.clone());
            trace!(edge = e, weight = edge.weight(), step = mst.len(), "prim: accept");

            let next = if visited[s] { t } else { s };
            visited[next] = true;
            reached += 1;
            expand(next, &visited, &mut frontier);
        }

        let elapsed_ms = started.elapsed().as_secs_f64() * 1000.0;
        debug!(
            accepted = mst.len(),
            reached,
            unreached = index.len() - reached,
            total_weight,
            elapsed_ms,
            "prim: done"
        );

        Ok(MstResult::new(Algorithm::Prim, mst, total_weight, elapsed_ms))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::Edge;

    #[test]
    fn test_triangle_steps() {
        let graph = Graph::builder()
            .nodes(["A", "B", "C"])
            .edge("A", "B", 1.0)
            .edge("B", "C", 2.0)
            .edge("A", "C", 3.0)
            .build()
            .unwrap();

        let result = Prim.run(&graph).unwrap();
        assert_eq!(result.algorithm, Algorithm::Prim);
        assert_eq!(result.total_weight, 3.0);

        let first = [Edge::new("A", "B", 1.0)];
        let second = [Edge::new("A", "B", 1.0), Edge::new("B", "C", 2.0)];
        let steps: Vec<&[Edge]> = result.steps().collect();
        assert_eq!(steps, vec![&first[..], &second[..]]);
    }

    #[test]
    fn test_empty_graph_error() {
        assert!(matches!(Prim.run(&Graph::empty()), Err(Error::EmptyGraph)));
    }

    #[test]
    fn test_seed_without_edges() {
        let graph = Graph::builder().nodes(["A", "B"]).build().unwrap();
        let result = Prim.run(&graph).unwrap();
        assert_eq!(result.step_count(), 0);
        assert_eq!(result.total_weight, 0.0);
    }

    #[test]
    fn test_seed_as_edge_end() {
        // 起点只作为边的终点出现时也要进入候选集合
        let graph = Graph::builder()
            .nodes(["A", "B", "C"])
            .edge("B", "A", 4.0)
            .edge("C", "B", 1.0)
            .build()
            .unwrap();

        let result = Prim.run(&graph).unwrap();
        assert_eq!(
            result.final_edges(),
            &[Edge::new("B", "A", 4.0), Edge::new("C", "B", 1.0)]
        );
    }

    #[test]
    fn test_only_seed_component() {
        let graph = Graph::builder()
            .nodes(["A", "B", "C", "X", "Y", "Z"])
            .edge("A", "B", 1.0)
            .edge("B", "C", 2.0)
            .edge("A", "C", 3.0)
            .edge("X", "Y", 4.0)
            .edge("Y", "Z", 5.0)
            .edge("X", "Z", 6.0)
            .build()
            .unwrap();

        let result = Prim.run(&graph).unwrap();
        assert_eq!(result.edge_count(), 2);
        assert_eq!(result.total_weight, 3.0);
        for edge in result.final_edges() {
            for id in [edge.start(), edge.end()] {
                assert!(["A", "B", "C"].contains(&id.as_str().unwrap()));
            }
        }
    }

    #[test]
    fn test_ties_pop_in_insertion_order() {
        // A 的两条候选边同权重，先入堆的 A-C 先被选中
        let graph = Graph::builder()
            .nodes(["A", "B", "C"])
            .edge("A", "C", 1.0)
            .edge("A", "B", 1.0)
            .edge("B", "C", 1.0)
            .build()
            .unwrap();

        let result = Prim.run(&graph).unwrap();
        assert_eq!(
            result.final_edges(),
            &[Edge::new("A", "C", 1.0), Edge::new("A", "B", 1.0)]
        );
    }

    #[test]
    fn test_stale_entries_discarded() {
        // B-C 和 C-B 都会入堆，第二条出堆时两端都已访问
        let graph = Graph::builder()
            .nodes(["A", "B", "C"])
            .edge("A", "B", 1.0)
            .edge("A", "C", 2.0)
            .edge("B", "C", 3.0)
            .edge("C", "B", 3.5)
            .build()
            .unwrap();

        let result = Prim.run(&graph).unwrap();
        assert_eq!(result.step_count(), 2);
        assert_eq!(result.total_weight, 3.0);
    }

    #[test]
    fn test_self_loop_never_selected() {
        let graph = Graph::builder()
            .nodes(["A", "B"])
            .edge("A", "A", 0.0)
            .edge("A", "B", 1.0)
            .build()
            .unwrap();

        let result = Prim.run(&graph).unwrap();
        assert_eq!(result.final_edges(), &[Edge::new("A", "B", 1.0)]);
    }
}

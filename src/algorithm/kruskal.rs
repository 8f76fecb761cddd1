//! Kruskal 最小生成树算法
//!
//! 对边下标按权重稳定排序（同权重保持输入顺序），用并查集判环。
//! 非连通图得到最小生成森林。

use super::result::MstResult;
use super::union_find::UnionFind;
use super::MstEngine;
use crate::error::Result;
use crate::graph::Graph;
use crate::types::Algorithm;
use std::time::Instant;
use tracing::{debug, trace};

/// Kruskal 算法
#[derive(Debug, Clone, Copy, Default)]
pub struct Kruskal;

impl Kruskal {
    pub fn new() -> Self {
        Self
    }
}

impl MstEngine for Kruskal {
    fn algorithm(&self) -> Algorithm {
        Algorithm::Kruskal
    }

    fn run(&self, graph: &Graph) -> Result<MstResult> {
        let started = Instant::now();
        let edges = graph.edges();
        debug!(
            nodes = graph.node_count(),
            edges = edges.len(),
            "kruskal: start"
        );

        let mut uf = UnionFind::with_capacity(graph.endpoint_index().len());
        for id in graph.endpoint_ids() {
            uf.make_set(id.clone());
        }

        // 排序下标而不是边本身，输入顺序保持不变
        let mut order: Vec<usize> = (0..edges.len()).collect();
        order.sort_by(|&a, &b| edges[a].weight().total_cmp(&edges[b].weight()));

        let mut mst = Vec::with_capacity(uf.len().saturating_sub(1));
        let mut total_weight = 0.0;

        for i in order {
            // 所有端点已连通，后续边都会成环
            if uf.component_count() <= 1 {
                break;
            }

            let edge = &edges[i];
            if uf.union(edge.start(), edge.end())? {
                total_weight += edge.weight();
                mst.push(edge.clone());
                trace!(edge = i, weight = edge.weight(), step = mst.len(), "kruskal: accept");
            } else {
                trace!(edge = i, "kruskal: skip (cycle)");
            }
        }

        let elapsed_ms = started.elapsed().as_secs_f64() * 1000.0;
        debug!(
            accepted = mst.len(),
            components = uf.component_count(),
            total_weight,
            elapsed_ms,
            "kruskal: done"
        );

        Ok(MstResult::new(
            Algorithm::Kruskal,
            mst,
            total_weight,
            elapsed_ms,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::Edge;
    use crate::types::{NodeId, PropertyValue};

    fn triangle() -> Graph {
        Graph::builder()
            .nodes(["A", "B", "C"])
            .edge("A", "B", 1.0)
            .edge("B", "C", 2.0)
            .edge("A", "C", 3.0)
            .build()
            .unwrap()
    }

    #[test]
    fn test_triangle_steps() {
        let result = Kruskal.run(&triangle()).unwrap();

        assert_eq!(result.algorithm, Algorithm::Kruskal);
        assert_eq!(result.total_weight, 3.0);
        let first = [Edge::new("A", "B", 1.0)];
        let second = [Edge::new("A", "B", 1.0), Edge::new("B", "C", 2.0)];
        let steps: Vec<&[Edge]> = result.steps().collect();
        assert_eq!(steps, vec![&first[..], &second[..]]);
    }

    #[test]
    fn test_input_order_untouched() {
        let graph = Graph::builder()
            .nodes(["A", "B", "C"])
            .edge("A", "C", 3.0)
            .edge("B", "C", 2.0)
            .edge("A", "B", 1.0)
            .build()
            .unwrap();

        let before: Vec<Edge> = graph.edges().to_vec();
        let result = Kruskal.run(&graph).unwrap();
        assert_eq!(graph.edges(), before.as_slice());
        assert_eq!(result.final_edges()[0], Edge::new("A", "B", 1.0));
    }

    #[test]
    fn test_ties_keep_input_order() {
        let graph = Graph::builder()
            .nodes(["A", "B", "C"])
            .edge("B", "C", 1.0)
            .edge("A", "B", 1.0)
            .edge("A", "C", 1.0)
            .build()
            .unwrap();

        let result = Kruskal.run(&graph).unwrap();
        assert_eq!(
            result.final_edges(),
            &[Edge::new("B", "C", 1.0), Edge::new("A", "B", 1.0)]
        );
    }

    #[test]
    fn test_disconnected_gives_forest() {
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

        let result = Kruskal.run(&graph).unwrap();
        assert_eq!(result.edge_count(), 4);
        assert_eq!(result.total_weight, 12.0);
        assert!(!result.is_spanning_tree(graph.node_count()));
    }

    #[test]
    fn test_empty_inputs() {
        let result = Kruskal.run(&Graph::empty()).unwrap();
        assert_eq!(result.step_count(), 0);
        assert_eq!(result.total_weight, 0.0);

        let isolated = Graph::builder().nodes(["A", "B"]).build().unwrap();
        let result = Kruskal.run(&isolated).unwrap();
        assert_eq!(result.step_count(), 0);
        assert_eq!(result.total_weight, 0.0);
    }

    #[test]
    fn test_self_loops_and_parallel_edges() {
        let graph = Graph::builder()
            .nodes(["A", "B"])
            .edge("A", "A", 0.0)
            .edge("A", "B", 5.0)
            .edge("B", "A", 2.0)
            .build()
            .unwrap();

        let result = Kruskal.run(&graph).unwrap();
        assert_eq!(result.final_edges(), &[Edge::new("B", "A", 2.0)]);
    }

    #[test]
    fn test_edge_only_endpoints_counted_as_nodes() {
        let line = PropertyValue::Line(vec![[0.0, 0.0], [3.0, 4.0]]);
        let graph = Graph::builder()
            .node("A")
            .edge_with_payload("A", "Q", 5.0, line.clone())
            .build()
            .unwrap();

        assert_eq!(graph.node_count(), 2);
        let result = Kruskal.run(&graph).unwrap();
        assert_eq!(result.edge_count(), graph.node_count() - 1);
        assert!(result.is_spanning_tree(graph.node_count()));
        assert_eq!(result.final_edges()[0].payload(), &line);
        assert_eq!(result.final_edges()[0].end(), &NodeId::from("Q"));
    }

    #[test]
    fn test_no_declared_nodes_step_bound() {
        let graph = Graph::new(
            Vec::new(),
            vec![Edge::new("X", "Y", 2.0), Edge::new("Y", "Z", 1.0)],
        )
        .unwrap();

        let result = Kruskal.run(&graph).unwrap();
        assert_eq!(result.step_count(), 2);
        assert!(result.step_count() <= graph.node_count() - 1);
        assert_eq!(result.total_weight, 3.0);
    }
}

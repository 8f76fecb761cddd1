//! 最小生成树结果
//!
//! 逐步快照通过共享前缀表示：第 i 步就是已接受边序列的前 i + 1 条，
//! 所有快照共享同一块只追加的边序列，不做逐步拷贝。

use crate::graph::Edge;
use crate::types::Algorithm;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// 最小生成树（森林）结果
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MstResult {
    /// 算法
    pub algorithm: Algorithm,
    /// 总权重
    pub total_weight: f64,
    /// 执行耗时（毫秒）
    pub execution_time_ms: f64,
    /// 按接受顺序排列的边
    edges: Arc<[Edge]>,
}

impl MstResult {
    pub(crate) fn new(
        algorithm: Algorithm,
        edges: Vec<Edge>,
        total_weight: f64,
        execution_time_ms: f64,
    ) -> Self {
        Self {
            algorithm,
            total_weight,
            execution_time_ms,
            edges: edges.into(),
        }
    }

    /// 步数（等于最终边数）
    pub fn step_count(&self) -> usize {
        self.edges.len()
    }

    /// 第 `index` 步的快照
    pub fn step(&self, index: usize) -> Option<&[Edge]> {
        if index < self.edges.len() {
            Some(&self.edges[..=index])
        } else {
            None
        }
    }

    /// 所有步骤的快照
    pub fn steps(&self) -> impl ExactSizeIterator<Item = &[Edge]> + '_ {
        (0..self.edges.len()).map(move |i| &self.edges[..=i])
    }

    /// 最终的生成树（森林）边
    pub fn final_edges(&self) -> &[Edge] {
        &self.edges
    }

    /// 共享的边序列
    pub fn shared_edges(&self) -> Arc<[Edge]> {
        Arc::clone(&self.edges)
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// 结果是否覆盖了 `node_count` 个顶点的整棵生成树（0 个顶点时只有空结果成立）
    pub fn is_spanning_tree(&self, node_count: usize) -> bool {
        self.edges.len() + 1 == node_count.max(1)
    }

    /// 逐步回放游标
    pub fn cursor(&self) -> StepCursor<'_> {
        StepCursor {
            result: self,
            position: 0,
        }
    }
}

/// 逐步回放游标（上一步 / 下一步）
#[derive(Debug, Clone)]
pub struct StepCursor<'a> {
    result: &'a MstResult,
    position: usize,
}

impl<'a> StepCursor<'a> {
    /// 当前快照，没有任何步骤时为 None
    pub fn current(&self) -> Option<&'a [Edge]> {
        self.result.step(self.position)
    }

    pub fn position(&self) -> usize {
        self.position
    }

    /// 前进一步，已在最后一步时返回 None 且不移动
    pub fn next(&mut self) -> Option<&'a [Edge]> {
        if self.is_last() {
            return None;
        }
        self.position += 1;
        self.current()
    }

    /// 后退一步，已在第一步时返回 None 且不移动
    pub fn prev(&mut self) -> Option<&'a [Edge]> {
        if self.is_first() {
            return None;
        }
        self.position -= 1;
        self.current()
    }

    pub fn reset(&mut self) {
        self.position = 0;
    }

    pub fn is_first(&self) -> bool {
        self.position == 0
    }

    pub fn is_last(&self) -> bool {
        self.position + 1 >= self.result.step_count()
    }
}

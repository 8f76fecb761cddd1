//! 边定义
//!
//! 无向带权边。`(start, end)` 与 `(end, start)` 在连通性上等价。

use crate::types::{NodeId, PropertyValue};
use serde::{Deserialize, Serialize};

/// 边
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Edge {
    /// 起点
    start: NodeId,
    /// 终点
    end: NodeId,
    /// 权重（不校验符号和取值）
    weight: f64,
    /// 展示用负载（例如线段坐标），原样透传
    #[serde(default, skip_serializing_if = "PropertyValue::is_null")]
    payload: PropertyValue,
}

impl Edge {
    /// 创建新边
    pub fn new(start: impl Into<NodeId>, end: impl Into<NodeId>, weight: f64) -> Self {
        Self {
            start: start.into(),
            end: end.into(),
            weight,
            payload: PropertyValue::Null,
        }
    }

    /// 创建带负载的边
    pub fn with_payload(
        start: impl Into<NodeId>,
        end: impl Into<NodeId>,
        weight: f64,
        payload: PropertyValue,
    ) -> Self {
        let mut e = Self::new(start, end, weight);
        e.payload = payload;
        e
    }

    pub fn start(&self) -> &NodeId {
        &self.start
    }

    pub fn end(&self) -> &NodeId {
        &self.end
    }

    pub fn weight(&self) -> f64 {
        self.weight
    }

    pub fn payload(&self) -> &PropertyValue {
        &self.payload
    }

    /// 自环
    pub fn is_self_loop(&self) -> bool {
        self.start == self.end
    }

    /// 给定一个端点，返回另一个端点；`node` 不是端点时返回 None
    pub fn opposite(&self, node: &NodeId) -> Option<&NodeId> {
        if &self.start == node {
            Some(&self.end)
        } else if &self.end == node {
            Some(&self.start)
        } else {
            None
        }
    }

    /// 是否连接同一对顶点（忽略方向）
    pub fn connects(&self, a: &NodeId, b: &NodeId) -> bool {
        (&self.start == a && &self.end == b) || (&self.start == b && &self.end == a)
    }
}

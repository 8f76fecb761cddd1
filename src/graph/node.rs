//! 顶点定义

use crate::types::{Coordinate, NodeId, Properties, PropertyValue};
use serde::{Deserialize, Serialize};

/// 顶点
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Node {
    /// 顶点标识
    id: NodeId,
    /// 展示用属性（引擎不读取）
    #[serde(default, skip_serializing_if = "Properties::is_empty")]
    properties: Properties,
}

impl Node {
    /// 创建新顶点
    pub fn new(id: impl Into<NodeId>) -> Self {
        Self {
            id: id.into(),
            properties: Properties::new(),
        }
    }

    /// 创建带坐标的顶点（GeoJSON Point）
    pub fn with_coordinates(id: impl Into<NodeId>, coordinates: Coordinate) -> Self {
        let mut n = Self::new(id);
        n.properties
            .insert("coordinates".to_string(), PropertyValue::Point(coordinates));
        n
    }

    /// 获取顶点标识
    pub fn id(&self) -> &NodeId {
        &self.id
    }

    /// 获取属性
    pub fn property(&self, key: &str) -> Option<&PropertyValue> {
        self.properties.get(key)
    }

    /// 设置属性
    pub fn set_property(&mut self, key: String, value: PropertyValue) {
        self.properties.insert(key, value);
    }

    /// 获取所有属性
    pub fn properties(&self) -> &Properties {
        &self.properties
    }

    /// 获取坐标（如果有）
    pub fn coordinates(&self) -> Option<&Coordinate> {
        self.property("coordinates").and_then(PropertyValue::as_point)
    }
}

impl From<NodeId> for Node {
    fn from(id: NodeId) -> Self {
        Self::new(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_node_coordinates() {
        let n = Node::with_coordinates("A", [1.0, 2.0]);
        assert_eq!(n.id(), &NodeId::from("A"));
        assert_eq!(n.coordinates(), Some(&[1.0, 2.0]));
        assert!(Node::new(3_i64).coordinates().is_none());
    }

    #[test]
    fn test_node_serialization() {
        let json = serde_json::to_string(&Node::new("A")).unwrap();
        assert_eq!(json, r#"{"id":"A"}"#);

        let restored: Node =
            serde_json::from_str(r#"{"id":7,"properties":{"coordinates":[0,1]}}"#).unwrap();
        assert_eq!(restored.id(), &NodeId::Int(7));
        assert_eq!(restored.coordinates(), Some(&[0.0, 1.0]));
    }
}

//! 通用类型定义：顶点标识、展示用属性、算法标签

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// 顶点标识（整数或字符串，对引擎不透明）
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(untagged)]
pub enum NodeId {
    Int(i64),
    Name(String),
}

impl NodeId {
    pub fn as_int(&self) -> Option<i64> {
        match self {
            NodeId::Int(v) => Some(*v),
            NodeId::Name(_) => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            NodeId::Name(s) => Some(s),
            NodeId::Int(_) => None,
        }
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NodeId::Int(v) => write!(f, "{}", v),
            NodeId::Name(s) => write!(f, "{}", s),
        }
    }
}

impl From<i64> for NodeId {
    fn from(v: i64) -> Self {
        NodeId::Int(v)
    }
}

impl From<String> for NodeId {
    fn from(v: String) -> Self {
        NodeId::Name(v)
    }
}

impl From<&str> for NodeId {
    fn from(v: &str) -> Self {
        NodeId::Name(v.to_string())
    }
}

impl From<&NodeId> for NodeId {
    fn from(v: &NodeId) -> Self {
        v.clone()
    }
}

/// 平面坐标 [x, y]（GeoJSON 中为 [经度, 纬度]）
pub type Coordinate = [f64; 2];

/// 属性值
///
/// 只用于展示（例如边的地理坐标），引擎原样保留、从不解读。
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PropertyValue {
    #[default]
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    String(String),
    Point(Coordinate),
    Line(Vec<Coordinate>),
    List(Vec<PropertyValue>),
    Map(IndexMap<String, PropertyValue>),
}

impl PropertyValue {
    pub fn type_name(&self) -> &'static str {
        match self {
            PropertyValue::Null => "null",
            PropertyValue::Bool(_) => "bool",
            PropertyValue::Int(_) => "int",
            PropertyValue::Float(_) => "float",
            PropertyValue::String(_) => "string",
            PropertyValue::Point(_) => "point",
            PropertyValue::Line(_) => "line",
            PropertyValue::List(_) => "list",
            PropertyValue::Map(_) => "map",
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, PropertyValue::Null)
    }

    pub fn as_point(&self) -> Option<&Coordinate> {
        match self {
            PropertyValue::Point(p) => Some(p),
            _ => None,
        }
    }

    pub fn as_line(&self) -> Option<&[Coordinate]> {
        match self {
            PropertyValue::Line(l) => Some(l),
            _ => None,
        }
    }

    pub fn as_string(&self) -> Option<&str> {
        match self {
            PropertyValue::String(v) => Some(v),
            _ => None,
        }
    }
}

impl From<i64> for PropertyValue {
    fn from(v: i64) -> Self {
        PropertyValue::Int(v)
    }
}

impl From<f64> for PropertyValue {
    fn from(v: f64) -> Self {
        PropertyValue::Float(v)
    }
}

impl From<String> for PropertyValue {
    fn from(v: String) -> Self {
        PropertyValue::String(v)
    }
}

impl From<&str> for PropertyValue {
    fn from(v: &str) -> Self {
        PropertyValue::String(v.to_string())
    }
}

impl From<Coordinate> for PropertyValue {
    fn from(v: Coordinate) -> Self {
        PropertyValue::Point(v)
    }
}

impl From<Vec<Coordinate>> for PropertyValue {
    fn from(v: Vec<Coordinate>) -> Self {
        PropertyValue::Line(v)
    }
}

/// 属性映射（保持插入顺序）
pub type Properties = IndexMap<String, PropertyValue>;

/// 最小生成树算法标签
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Algorithm {
    Kruskal,
    Prim,
}

impl Algorithm {
    pub const ALL: [Algorithm; 2] = [Algorithm::Kruskal, Algorithm::Prim];

    pub fn as_str(&self) -> &'static str {
        match self {
            Algorithm::Kruskal => "kruskal",
            Algorithm::Prim => "prim",
        }
    }

    /// 展示用名称
    pub fn display_name(&self) -> &'static str {
        match self {
            Algorithm::Kruskal => "Kruskal's Algorithm",
            Algorithm::Prim => "Prim's Algorithm",
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Algorithm {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "kruskal" => Ok(Algorithm::Kruskal),
            "prim" => Ok(Algorithm::Prim),
            other => Err(crate::Error::InvalidArgument(format!(
                "未知算法: {}",
                other
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_node_id_untagged() {
        let ids: Vec<NodeId> = serde_json::from_str(r#"[1, "A", -7]"#).unwrap();
        assert_eq!(
            ids,
            vec![NodeId::Int(1), NodeId::from("A"), NodeId::Int(-7)]
        );
        assert_eq!(ids[1].to_string(), "A");
        assert_eq!(ids[0].as_int(), Some(1));
    }

    #[test]
    fn test_property_value_geometry() {
        let point: PropertyValue = serde_json::from_str("[1, 2.5]").unwrap();
        assert_eq!(point, PropertyValue::Point([1.0, 2.5]));

        let line: PropertyValue = serde_json::from_str("[[0, 0], [1, 1]]").unwrap();
        assert_eq!(line.as_line().map(|l| l.len()), Some(2));

        let null: PropertyValue = serde_json::from_str("null").unwrap();
        assert!(null.is_null());
    }

    #[test]
    fn test_algorithm_parsing() {
        assert_eq!("Kruskal".parse::<Algorithm>().unwrap(), Algorithm::Kruskal);
        assert_eq!(" prim ".parse::<Algorithm>().unwrap(), Algorithm::Prim);
        assert!("dijkstra".parse::<Algorithm>().is_err());
        assert_eq!(Algorithm::Prim.to_string(), "prim");
    }
}

//! GeoJSON 解析
//!
//! 支持两种写法：
//! - 线模式：LineString 的 properties 中带 start / end / weight，顶点取所有端点
//! - 点模式：Point 的 properties.id 定义顶点，LineString 的前两个坐标按精确坐标匹配到顶点
//!
//! 坐标原样保存为展示用负载；位置可以带高程，匹配时只取前两个分量。

use super::ImportStats;
use crate::error::{Error, Result};
use crate::graph::{Edge, Graph, Node};
use crate::types::{Coordinate, NodeId, PropertyValue};
use indexmap::IndexSet;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::{Map, Value};
use std::collections::HashMap;
use tracing::{debug, warn};

/// GeoJSON 解析模式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GeoJsonMode {
    /// 存在带 id 的 Point 时用点模式，否则用线模式
    #[default]
    Auto,
    Lines,
    Points,
}

#[derive(Debug, Deserialize)]
struct FeatureCollection {
    features: Vec<Feature>,
}

#[derive(Debug, Deserialize)]
struct Feature {
    geometry: Option<Geometry>,
    #[serde(default)]
    properties: Option<Map<String, Value>>,
}

#[derive(Debug, Deserialize)]
struct Geometry {
    #[serde(rename = "type")]
    kind: String,
    #[serde(default)]
    coordinates: Value,
}

impl Feature {
    fn kind(&self) -> Option<&str> {
        self.geometry.as_ref().map(|g| g.kind.as_str())
    }

    fn property(&self, key: &str) -> Option<&Value> {
        self.properties.as_ref().and_then(|p| p.get(key))
    }

    fn coordinates<T: DeserializeOwned>(&self) -> Result<T> {
        let geometry = self
            .geometry
            .as_ref()
            .ok_or_else(|| Error::ParseError("缺少 geometry".to_string()))?;
        T::deserialize(&geometry.coordinates)
            .map_err(|e| Error::ParseError(format!("{} 坐标格式错误: {}", geometry.kind, e)))
    }
}

/// 从字符串解析 GeoJSON FeatureCollection
pub fn parse_geojson(input: &str, mode: GeoJsonMode) -> Result<(Graph, ImportStats)> {
    let collection: FeatureCollection = serde_json::from_str(input)?;

    let mode = match mode {
        GeoJsonMode::Auto => {
            let has_points = collection
                .features
                .iter()
                .any(|f| f.kind() == Some("Point") && f.property("id").is_some());
            if has_points {
                GeoJsonMode::Points
            } else {
                GeoJsonMode::Lines
            }
        }
        m => m,
    };
    debug!(features = collection.features.len(), ?mode, "geojson: parse");

    match mode {
        GeoJsonMode::Points => from_points(&collection.features),
        _ => from_lines(&collection.features),
    }
}

fn node_id(value: Option<&Value>, key: &str) -> Result<NodeId> {
    match value {
        Some(Value::String(s)) => Ok(NodeId::Name(s.clone())),
        Some(Value::Number(n)) => n
            .as_i64()
            .map(NodeId::Int)
            .ok_or_else(|| Error::ParseError(format!("{} 必须是整数或字符串: {}", key, n))),
        Some(other) => Err(Error::ParseError(format!(
            "{} 必须是整数或字符串: {}",
            key, other
        ))),
        None => Err(Error::ParseError(format!("缺少属性 {}", key))),
    }
}

fn weight(feature: &Feature) -> Result<f64> {
    feature
        .property("weight")
        .and_then(Value::as_f64)
        .ok_or_else(|| Error::ParseError("LineString 缺少数值类型的 weight".to_string()))
}

fn from_lines(features: &[Feature]) -> Result<(Graph, ImportStats)> {
    let mut ids: IndexSet<NodeId> = IndexSet::new();
    let mut edges = Vec::new();
    let mut stats = ImportStats::default();

    for feature in features {
        if feature.kind() != Some("LineString") {
            stats.skipped += 1;
            continue;
        }
        let start = node_id(feature.property("start"), "start")?;
        let end = node_id(feature.property("end"), "end")?;
        let payload: PropertyValue = feature.coordinates()?;

        ids.insert(start.clone());
        ids.insert(end.clone());
        edges.push(Edge::with_payload(start, end, weight(feature)?, payload));
    }

    let nodes: Vec<Node> = ids.into_iter().map(Node::new).collect();
    stats.nodes = nodes.len();
    stats.edges = edges.len();
    Ok((Graph::new(nodes, edges)?, stats))
}

/// 位置的平面坐标（忽略高程等多余分量）
fn planar(position: &[f64]) -> Option<Coordinate> {
    match position {
        [x, y, ..] => Some([*x, *y]),
        _ => None,
    }
}

/// 坐标按位精确比较
fn coordinate_key(c: &Coordinate) -> [u64; 2] {
    [c[0].to_bits(), c[1].to_bits()]
}

fn lookup<'a>(by_coordinate: &'a HashMap<[u64; 2], NodeId>, position: &[f64]) -> Option<&'a NodeId> {
    planar(position).and_then(|c| by_coordinate.get(&coordinate_key(&c)))
}

fn from_points(features: &[Feature]) -> Result<(Graph, ImportStats)> {
    let mut nodes = Vec::new();
    let mut by_coordinate: HashMap<[u64; 2], NodeId> = HashMap::new();
    let mut lines = Vec::new();
    let mut stats = ImportStats::default();

    // 先收集所有点，线段可以引用出现在其后的点
    for feature in features {
        match feature.kind() {
            Some("Point") => {
                let id = node_id(feature.property("id"), "id")?;
                let position: Vec<f64> = feature.coordinates()?;
                let point = planar(&position).ok_or_else(|| {
                    Error::ParseError(format!("Point {} 的坐标少于两个分量", id))
                })?;
                by_coordinate.insert(coordinate_key(&point), id.clone());

                let mut node = Node::new(id);
                node.set_property(
                    "coordinates".to_string(),
                    feature.coordinates::<PropertyValue>()?,
                );
                nodes.push(node);
            }
            Some("LineString") => lines.push(feature),
            _ => stats.skipped += 1,
        }
    }

    if nodes.is_empty() && !lines.is_empty() {
        return Err(Error::ImportError(
            "点模式下没有找到带 id 的 Point 要素".to_string(),
        ));
    }

    let mut edges = Vec::new();
    for feature in lines {
        let line: Vec<Vec<f64>> = feature.coordinates()?;
        let endpoints = match line.as_slice() {
            [a, b, ..] => (
                lookup(&by_coordinate, a),
                lookup(&by_coordinate, b),
            ),
            _ => (None, None),
        };

        match endpoints {
            (Some(start), Some(end)) => {
                let (start, end) = (start.clone(), end.clone());
                let payload: PropertyValue = feature.coordinates()?;
                edges.push(Edge::with_payload(start, end, weight(feature)?, payload));
            }
            _ => {
                warn!(coordinates = ?line, "geojson: 线段端点未匹配到任何点，已丢弃");
                stats.skipped += 1;
            }
        }
    }

    stats.nodes = nodes.len();
    stats.edges = edges.len();
    Ok((Graph::new(nodes, edges)?, stats))
}

//! 数据导入模块
//!
//! 把 GeoJSON、邻接 JSON、CSV 边表转换成 `Graph`。
//! 只做格式层面的解析，不校验权重的业务含义。

mod geojson;

pub use geojson::{parse_geojson, GeoJsonMode};

use crate::error::{Error, Result};
use crate::graph::{Edge, Graph, Node};
use crate::types::NodeId;
use indexmap::IndexSet;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::str::FromStr;
use std::time::Instant;
use tracing::info;

/// 导入统计
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize)]
pub struct ImportStats {
    pub nodes: usize,
    pub edges: usize,
    /// 被跳过的要素 / 记录
    pub skipped: usize,
    pub duration_ms: u64,
}

/// 输入格式
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImportFormat {
    GeoJson(GeoJsonMode),
    /// `{ "nodes": [...], "edges": [...] }`
    Json,
    /// `start,end,weight` 边表
    Csv,
}

impl ImportFormat {
    /// 按扩展名推断格式；`.json` 需要结合内容判断，返回 None
    pub fn from_extension(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_ascii_lowercase();
        match ext.as_str() {
            "geojson" => Some(ImportFormat::GeoJson(GeoJsonMode::Auto)),
            "csv" => Some(ImportFormat::Csv),
            _ => None,
        }
    }

    /// 根据内容推断 JSON 文档是 GeoJSON 还是邻接格式
    fn sniff(input: &str) -> Self {
        match serde_json::from_str::<serde_json::Value>(input) {
            Ok(v) if v.get("features").is_some() => ImportFormat::GeoJson(GeoJsonMode::Auto),
            _ => ImportFormat::Json,
        }
    }
}

impl FromStr for ImportFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "geojson" => Ok(ImportFormat::GeoJson(GeoJsonMode::Auto)),
            "lines" => Ok(ImportFormat::GeoJson(GeoJsonMode::Lines)),
            "points" => Ok(ImportFormat::GeoJson(GeoJsonMode::Points)),
            "json" => Ok(ImportFormat::Json),
            "csv" => Ok(ImportFormat::Csv),
            other => Err(Error::InvalidArgument(format!("不支持的格式: {}", other))),
        }
    }
}

/// 图导入器
#[derive(Debug, Clone, Default)]
pub struct GraphImporter {
    format: Option<ImportFormat>,
}

impl GraphImporter {
    pub fn new() -> Self {
        Self::default()
    }

    /// 指定格式（默认按扩展名和内容推断）
    pub fn with_format(mut self, format: ImportFormat) -> Self {
        self.format = Some(format);
        self
    }

    /// 从文件导入
    pub fn import_file<P: AsRef<Path>>(&self, path: P) -> Result<(Graph, ImportStats)> {
        let path = path.as_ref();
        let input = fs::read_to_string(path)?;
        let format = self
            .format
            .or_else(|| ImportFormat::from_extension(path))
            .unwrap_or_else(|| ImportFormat::sniff(&input));

        let (graph, stats) = self.import_str(&input, format)?;
        info!(
            path = %path.display(),
            nodes = stats.nodes,
            edges = stats.edges,
            skipped = stats.skipped,
            duration_ms = stats.duration_ms,
            "图已导入"
        );
        Ok((graph, stats))
    }

    /// 从字符串导入
    pub fn import_str(&self, input: &str, format: ImportFormat) -> Result<(Graph, ImportStats)> {
        let start = Instant::now();
        let (graph, mut stats) = match format {
            ImportFormat::GeoJson(mode) => parse_geojson(input, mode)?,
            ImportFormat::Json => parse_json(input)?,
            ImportFormat::Csv => parse_csv(input)?,
        };
        stats.duration_ms = start.elapsed().as_millis() as u64;
        Ok((graph, stats))
    }
}

/// 邻接格式中的顶点：可以是裸标识，也可以是带属性的对象
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum NodeEntry {
    Id(NodeId),
    Node(Node),
}

#[derive(Debug, Deserialize)]
struct GraphDocument {
    #[serde(default)]
    nodes: Vec<NodeEntry>,
    #[serde(default)]
    edges: Vec<Edge>,
}

/// 解析邻接格式 JSON
pub fn parse_json(input: &str) -> Result<(Graph, ImportStats)> {
    let doc: GraphDocument = serde_json::from_str(input)?;
    let nodes: Vec<Node> = doc
        .nodes
        .into_iter()
        .map(|entry| match entry {
            NodeEntry::Id(id) => Node::new(id),
            NodeEntry::Node(node) => node,
        })
        .collect();

    let graph = Graph::new(nodes, doc.edges)?;
    let stats = ImportStats {
        nodes: graph.node_count(),
        edges: graph.edge_count(),
        ..ImportStats::default()
    };
    Ok((graph, stats))
}

#[derive(Debug, Deserialize)]
struct CsvEdge {
    start: String,
    end: String,
    weight: f64,
}

/// 解析 CSV 边表（带表头 start,end,weight），顶点为按首次出现顺序去重的端点
pub fn parse_csv(input: &str) -> Result<(Graph, ImportStats)> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(input.as_bytes());

    let mut ids: IndexSet<NodeId> = IndexSet::new();
    let mut edges = Vec::new();
    for record in reader.deserialize() {
        let record: CsvEdge = record?;
        let start = NodeId::Name(record.start);
        let end = NodeId::Name(record.end);
        ids.insert(start.clone());
        ids.insert(end.clone());
        edges.push(Edge::new(start, end, record.weight));
    }

    let nodes: Vec<Node> = ids.into_iter().map(Node::new).collect();
    let stats = ImportStats {
        nodes: nodes.len(),
        edges: edges.len(),
        ..ImportStats::default()
    };
    Ok((Graph::new(nodes, edges)?, stats))
}

/// 从文件导入（按扩展名和内容推断格式）
pub fn load_graph<P: AsRef<Path>>(path: P) -> Result<Graph> {
    GraphImporter::new().import_file(path).map(|(graph, _)| graph)
}

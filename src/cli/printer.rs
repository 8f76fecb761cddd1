//! 结果打印器
//!
//! 提供表格和 JSON 两种输出

use crate::algorithm::{BenchmarkResult, Comparison, MstResult};
use crate::error::{Error, Result};
use crate::graph::{Edge, GraphInfo};
use colored::Colorize;
use prettytable::{format, row, Table};
use serde::Serialize;
use std::str::FromStr;

/// 输出格式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// 表格
    #[default]
    Table,
    /// JSON
    Json,
}

impl FromStr for OutputFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "table" => Ok(OutputFormat::Table),
            "json" => Ok(OutputFormat::Json),
            other => Err(Error::InvalidArgument(format!("不支持的输出格式: {}", other))),
        }
    }
}

/// 结果打印器
#[derive(Debug, Clone, Copy, Default)]
pub struct Printer {
    format: OutputFormat,
}

impl Printer {
    pub fn new(format: OutputFormat) -> Self {
        Self { format }
    }

    pub fn format(&self) -> OutputFormat {
        self.format
    }

    /// 打印图的基本信息
    pub fn print_graph_info(&self, info: &GraphInfo) -> Result<String> {
        if self.format == OutputFormat::Json {
            return to_json(info);
        }

        let mut table = new_table();
        table.set_titles(row!["Property", "Value"]);
        table.add_row(row!["Vertices", info.vertices]);
        table.add_row(row!["Edges", info.total_edges]);
        Ok(table.to_string())
    }

    /// 打印单个算法的基准结果
    pub fn print_benchmark(&self, bench: &BenchmarkResult) -> Result<String> {
        if self.format == OutputFormat::Json {
            return to_json(bench);
        }

        let result = &bench.result;
        let mut table = new_table();
        table.set_titles(row![result.algorithm.display_name(), ""]);
        table.add_row(row!["Total Weight", format_weight(result.total_weight)]);
        table.add_row(row!["Edge Count", result.edge_count()]);
        table.add_row(row!["Execution Time (ms)", format_ms(bench.avg_time_ms)]);
        table.add_row(row!["Iterations", bench.iterations]);
        Ok(table.to_string())
    }

    /// 打印对比表
    pub fn print_comparison(&self, comparison: &Comparison) -> Result<String> {
        if self.format == OutputFormat::Json {
            return to_json(comparison);
        }

        let mut table = new_table();
        table.set_titles(row![
            "Algorithm",
            "Total Weight",
            "Execution Time (ms)",
            "Edge Count"
        ]);
        for r in comparison.rows() {
            table.add_row(row![
                r.algorithm.display_name(),
                format_weight(r.total_weight),
                format_ms(r.avg_time_ms),
                r.edge_count
            ]);
        }

        let verdict = if comparison.weights_agree() {
            "总权重一致".green().to_string()
        } else {
            "总权重不一致（图可能不连通）".yellow().to_string()
        };
        Ok(format!("{}{}\n", table, verdict))
    }

    /// 打印逐步构建过程
    pub fn print_steps(&self, result: &MstResult) -> Result<String> {
        if self.format == OutputFormat::Json {
            let steps: Vec<&[Edge]> = result.steps().collect();
            return to_json(&steps);
        }

        let total = result.step_count();
        if total == 0 {
            return Ok(format!("{}: 没有任何步骤\n", result.algorithm.display_name()));
        }

        let mut output = String::new();
        let mut running = 0.0;
        for (i, step) in result.steps().enumerate() {
            // 每一步比上一步多一条边
            let Some(edge) = step.last() else { continue };
            running += edge.weight();
            output.push_str(&format!(
                "{} {} {} (weight {}, total {})\n",
                format!("Step {}/{}:", i + 1, total).bold(),
                format_edge(edge),
                "→".dimmed(),
                format_weight(edge.weight()),
                format_weight(running)
            ));
        }
        Ok(output)
    }
}

fn new_table() -> Table {
    let mut table = Table::new();
    table.set_format(*format::consts::FORMAT_BOX_CHARS);
    table
}

fn to_json<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    Ok(serde_json::to_string_pretty(value)?)
}

fn format_edge(edge: &Edge) -> String {
    format!("{} - {}", edge.start(), edge.end())
}

fn format_weight(weight: f64) -> String {
    // 去掉整数权重多余的小数位
    if weight.fract() == 0.0 && weight.abs() < 1e15 {
        format!("{}", weight as i64)
    } else {
        format!("{:.4}", weight)
    }
}

fn format_ms(ms: f64) -> String {
    format!("{:.4}", ms)
}

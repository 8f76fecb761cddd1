//! MstGraph 命令行工具
//!
//! 导入图，运行 Kruskal / Prim，打印结果、对比表和逐步构建过程

use anyhow::Context;
use clap::{Parser, ValueEnum};
use mstgraph::algorithm::{benchmark_with, compare, BenchmarkConfig};
use mstgraph::cli::{OutputFormat, Printer};
use mstgraph::import::{GraphImporter, ImportFormat};
use mstgraph::types::Algorithm;
use serde_json::json;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// 要运行的算法
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Selection {
    Kruskal,
    Prim,
    Both,
}

#[derive(Parser, Debug)]
#[command(name = "mstgraph-cli")]
#[command(about = "MstGraph 最小生成树命令行工具")]
#[command(version)]
struct Args {
    /// 输入文件路径
    #[arg(short, long)]
    input: PathBuf,

    /// 输入格式: geojson, lines, points, json, csv（默认按扩展名推断）
    #[arg(short, long)]
    format: Option<ImportFormat>,

    /// 算法
    #[arg(short, long, value_enum, default_value = "both")]
    algorithm: Selection,

    /// 计时的运行次数
    #[arg(short = 'n', long, default_value = "1")]
    iterations: usize,

    /// 不计时的预热次数
    #[arg(long, default_value = "0")]
    warmup: usize,

    /// 打印每一步的构建过程
    #[arg(short, long)]
    steps: bool,

    /// 输出格式: table, json
    #[arg(short, long, default_value = "table")]
    output: OutputFormat,

    /// 输出更多日志（可重复）
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// 只输出错误日志
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

fn init_tracing(verbose: u8, quiet: bool) {
    let level = if quiet {
        "error"
    } else {
        match verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_tracing(args.verbose, args.quiet);

    let mut importer = GraphImporter::new();
    if let Some(format) = args.format {
        importer = importer.with_format(format);
    }
    let (graph, stats) = importer
        .import_file(&args.input)
        .with_context(|| format!("无法导入 {}", args.input.display()))?;

    let config = BenchmarkConfig::default()
        .with_iterations(args.iterations)
        .with_warmup(args.warmup);
    info!(?config, algorithm = ?args.algorithm, "开始计算");

    let printer = Printer::new(args.output);
    let algorithms: Vec<Algorithm> = match args.algorithm {
        Selection::Kruskal => vec![Algorithm::Kruskal],
        Selection::Prim => vec![Algorithm::Prim],
        Selection::Both => Algorithm::ALL.to_vec(),
    };

    if printer.format() == OutputFormat::Json {
        // JSON 模式下输出一个完整的报告对象
        let mut report = json!({
            "graph": graph.info(),
            "import": stats,
        });
        if args.algorithm == Selection::Both {
            let comparison = compare(&graph, &config)?;
            report["weights_agree"] = json!(comparison.weights_agree());
            report["rows"] = serde_json::to_value(comparison.rows())?;
            report["results"] = json!([comparison.kruskal, comparison.prim]);
        } else {
            let results = algorithms
                .iter()
                .map(|&algorithm| benchmark_with(algorithm, &graph, &config))
                .collect::<Result<Vec<_>, _>>()?;
            report["results"] = serde_json::to_value(results)?;
        }
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    print!("{}", printer.print_graph_info(&graph.info())?);

    let results = if args.algorithm == Selection::Both {
        let comparison = compare(&graph, &config)?;
        print!("{}", printer.print_comparison(&comparison)?);
        vec![comparison.kruskal, comparison.prim]
    } else {
        let mut results = Vec::with_capacity(algorithms.len());
        for algorithm in algorithms {
            let bench = benchmark_with(algorithm, &graph, &config)?;
            print!("{}", printer.print_benchmark(&bench)?);
            results.push(bench);
        }
        results
    };

    if args.steps {
        for bench in &results {
            println!();
            println!("{}", bench.result.algorithm.display_name());
            print!("{}", printer.print_steps(&bench.result)?);
        }
    }

    Ok(())
}

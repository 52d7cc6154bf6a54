//! 带权无向图命令行工具
//!
//! 构建示例图或随机图，输出最短路径、最少跳数路径和两子图之间的桥

use anyhow::Context;
use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::info;
use tracing_subscriber::EnvFilter;
use weighted_graph::cli::{PrintMode, Printer, QueryReport};
use weighted_graph::generator::{
    example_graph, GeneratorConfig, RandomGraphBuilder, DEFAULT_MAX_EDGE_WEIGHT,
};
use weighted_graph::graph::{Graph, VertexId};

#[derive(Parser, Debug)]
#[command(name = "graph-cli")]
#[command(about = "带权无向图路径查询工具")]
struct Args {
    /// 使用内置示例图
    #[arg(short, long)]
    example: bool,

    /// 随机图的子图规模（至少为 4）
    #[arg(short, long, value_name = "SIZE")]
    random: Option<u64>,

    /// 随机种子（缺省时取系统熵）
    #[arg(long)]
    seed: Option<u64>,

    /// 随机边权重上限
    #[arg(long, default_value_t = DEFAULT_MAX_EDGE_WEIGHT)]
    max_weight: u64,

    /// 查询起点
    #[arg(long)]
    from: Option<u64>,

    /// 查询终点
    #[arg(long)]
    to: Option<u64>,

    /// 以 JSON 输出
    #[arg(long)]
    json: bool,

    /// 日志级别（RUST_LOG 优先）
    #[arg(long, default_value = "warn")]
    log_level: String,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_logging(&args.log_level);

    let printer = Printer::new(if args.json {
        PrintMode::Json
    } else {
        PrintMode::Table
    });

    if !args.example && args.random.is_none() {
        println!("未指定图，使用 --example 或 --random <SIZE>");
        return Ok(());
    }

    if args.example {
        let graph = example_graph();
        let (source, target) = endpoints(&args, VertexId::new(1), VertexId::new(12));
        run_queries(&printer, &graph, source, target)?;
    }

    if let Some(size) = args.random {
        let config = GeneratorConfig {
            subgraph_size: size,
            max_edge_weight: args.max_weight,
            seed: args.seed,
            ..GeneratorConfig::default()
        };
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        let mut builder = RandomGraphBuilder::new(config, rng).context("随机图配置无效")?;
        let generated = builder.build();
        info!(bridge = %generated.bridge, "随机图已生成");
        if printer.mode() == PrintMode::Table {
            println!("Random graph built with bridge: {}", generated.bridge.key());
        }

        let (first, second) = builder.pick_endpoints();
        let (source, target) = endpoints(&args, first, second);
        run_queries(&printer, &generated.graph, source, target)?;
    }

    Ok(())
}

fn init_logging(default_level: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn endpoints(args: &Args, source: VertexId, target: VertexId) -> (VertexId, VertexId) {
    (
        args.from.map(VertexId::new).unwrap_or(source),
        args.to.map(VertexId::new).unwrap_or(target),
    )
}

fn run_queries(
    printer: &Printer,
    graph: &Graph,
    source: VertexId,
    target: VertexId,
) -> anyhow::Result<()> {
    println!("{}", printer.print_graph(graph));

    for id in [source, target] {
        if !graph.has_vertex(id) {
            anyhow::bail!("顶点 {} 不在图中", id);
        }
    }

    let shortest = graph
        .path_result(graph.shortest_path(source, target))
        .context("计算最短路径权重失败")?;
    let smallest = graph
        .path_result(graph.smallest_path(source, target))
        .context("计算最少跳数路径权重失败")?;

    let report = QueryReport {
        source,
        target,
        shortest,
        smallest,
        bridge: graph.find_bridge(source, target),
    };
    println!("{}", printer.print_report(&report));
    Ok(())
}

//! 结果打印器
//!
//! 提供表格和 JSON 格式的图与路径输出

use crate::algorithm::PathResult;
use crate::graph::{Edge, Graph, VertexId};
use prettytable::{format, row, Table};
use serde::{Deserialize, Serialize};

/// 打印模式
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrintMode {
    /// 表格模式
    Table,
    /// JSON 模式
    Json,
}

/// 一次端点查询的全部结果
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QueryReport {
    pub source: VertexId,
    pub target: VertexId,
    /// Dijkstra 最小权重路径
    pub shortest: PathResult,
    /// BFS 最少跳数路径
    pub smallest: PathResult,
    pub bridge: Option<Edge>,
}

/// 结果打印器
pub struct Printer {
    mode: PrintMode,
}

impl Default for Printer {
    fn default() -> Self {
        Self::new(PrintMode::Table)
    }
}

impl Printer {
    pub fn new(mode: PrintMode) -> Self {
        Self { mode }
    }

    pub fn mode(&self) -> PrintMode {
        self.mode
    }

    /// 打印图的顶点和边
    ///
    /// JSON 模式下只输出统计信息。
    pub fn print_graph(&self, graph: &Graph) -> String {
        match self.mode {
            PrintMode::Table => {
                let mut vertices = Table::new();
                vertices.set_format(*format::consts::FORMAT_BOX_CHARS);
                vertices.set_titles(row!["Vertex", "Degree"]);
                for v in graph.vertices() {
                    vertices.add_row(row![v.id().to_string(), v.degree().to_string()]);
                }

                let mut edges = Table::new();
                edges.set_format(*format::consts::FORMAT_BOX_CHARS);
                edges.set_titles(row!["Edge", "Weight"]);
                for e in graph.edges() {
                    edges.add_row(row![e.key().to_string(), e.weight().to_string()]);
                }

                format!(
                    "{}{}{}",
                    vertices,
                    edges,
                    self.print_stats(graph.number_of_vertices(), graph.number_of_edges())
                )
            }
            PrintMode::Json => {
                self.print_stats(graph.number_of_vertices(), graph.number_of_edges())
            }
        }
    }

    /// 打印统计信息
    pub fn print_stats(&self, vertex_count: usize, edge_count: usize) -> String {
        match self.mode {
            PrintMode::Table => {
                let mut table = Table::new();
                table.set_format(*format::consts::FORMAT_BOX_CHARS);
                table.set_titles(row!["Property", "Value"]);
                table.add_row(row!["Vertex Count", vertex_count.to_string()]);
                table.add_row(row!["Edge Count", edge_count.to_string()]);
                table.to_string()
            }
            PrintMode::Json => serde_json::json!({
                "vertex_count": vertex_count,
                "edge_count": edge_count,
            })
            .to_string(),
        }
    }

    /// 打印查询结果
    pub fn print_report(&self, report: &QueryReport) -> String {
        match self.mode {
            PrintMode::Table => {
                let mut table = Table::new();
                table.set_format(*format::consts::FORMAT_BOX_CHARS);
                table.set_titles(row!["Query", "Path", "Hops", "Weight"]);
                table.add_row(Self::path_row("shortest (dijkstra)", &report.shortest));
                table.add_row(Self::path_row("smallest (bfs)", &report.smallest));

                let bridge = match &report.bridge {
                    Some(edge) => {
                        format!("found bridge: {} (weight {})", edge.key(), edge.weight())
                    }
                    None => "no bridge found".to_string(),
                };
                format!(
                    "Using vertices {} and {}\n{}{}\n",
                    report.source, report.target, table, bridge
                )
            }
            PrintMode::Json => serde_json::to_string_pretty(report)
                .unwrap_or_else(|e| serde_json::json!({ "error": e.to_string() }).to_string()),
        }
    }

    fn path_row(name: &str, path: &PathResult) -> prettytable::Row {
        if path.is_empty() {
            return row![name, "(none)", "-", "-"];
        }
        let vertices = path
            .vertices
            .iter()
            .map(VertexId::to_string)
            .collect::<Vec<_>>()
            .join(" -> ");
        row![name, vertices, path.hops.to_string(), path.total_weight.to_string()]
    }
}

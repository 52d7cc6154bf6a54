//! weighted-graph - 带权无向图
//!
//! 提供：
//! - 顶点与带权边的增删，度数增量维护
//! - Dijkstra 最小权重路径与 BFS 最少跳数路径
//! - 桥查找
//! - 示例图与可复现的随机图生成

pub mod algorithm;
pub mod cli;
pub mod error;
pub mod generator;
pub mod graph;

// 重导出常用类型
pub use algorithm::{BridgeFinder, PathFinder, PathResult};
pub use error::{Error, Result};
pub use graph::{Edge, EdgeKey, Graph, PathWeight, Vertex, VertexId, Weight};

/// 库版本
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

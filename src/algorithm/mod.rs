//! 图算法模块
//!
//! 包含最短路径（Dijkstra / BFS）和桥查找算法

mod bridge;
mod path_finding;

pub use bridge::BridgeFinder;
pub use path_finding::{PathFinder, PathResult};

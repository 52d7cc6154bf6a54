//! 示例图与随机图生成
//!
//! 随机图由两个稠密子图和唯一一条连接它们的边组成。随机数生成器由调用方显式传入，
//! 测试中使用固定种子保证可复现。

use crate::error::{Error, Result};
use crate::graph::{Edge, Graph, VertexId, Weight};
use rand::seq::SliceRandom;
use rand::Rng;
use std::ops::RangeInclusive;
use tracing::debug;

/// 随机图的最小子图规模
pub const MIN_SUBGRAPH_SIZE: u64 = 4;

/// 两个子图的 ID 合计不能超出 `u64`
pub const MAX_SUBGRAPH_SIZE: u64 = u64::MAX / 2;

/// 默认随机边权重上限
pub const DEFAULT_MAX_EDGE_WEIGHT: Weight = 50;

/// 生成器配置
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorConfig {
    /// 每个子图的顶点数（0 表示不生成）
    pub subgraph_size: u64,
    /// 边权重上限（下限为 1）
    pub max_edge_weight: Weight,
    /// 每个顶点在子图内随机提议的邻居数
    pub neighbours_per_vertex: usize,
    /// 随机种子
    pub seed: Option<u64>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            subgraph_size: 0,
            max_edge_weight: DEFAULT_MAX_EDGE_WEIGHT,
            neighbours_per_vertex: 3,
            seed: None,
        }
    }
}

impl GeneratorConfig {
    /// 校验配置
    pub fn validate(&self) -> Result<()> {
        if self.subgraph_size < MIN_SUBGRAPH_SIZE {
            return Err(Error::InvalidArgument(format!(
                "子图规模至少为 {}，实际为 {}",
                MIN_SUBGRAPH_SIZE, self.subgraph_size
            )));
        }
        if self.subgraph_size > MAX_SUBGRAPH_SIZE {
            return Err(Error::InvalidArgument(format!(
                "子图规模至多为 {}，实际为 {}",
                MAX_SUBGRAPH_SIZE, self.subgraph_size
            )));
        }
        if self.max_edge_weight == 0 {
            return Err(Error::InvalidArgument("边权重上限必须大于 0".to_string()));
        }
        if self.neighbours_per_vertex == 0 {
            return Err(Error::InvalidArgument("每个顶点至少提议一个邻居".to_string()));
        }
        Ok(())
    }
}

/// 生成结果
#[derive(Debug, Clone)]
pub struct RandomGraph {
    pub graph: Graph,
    /// 两个子图之间唯一的边
    pub bridge: Edge,
}

/// 随机图构建器
pub struct RandomGraphBuilder<R: Rng> {
    config: GeneratorConfig,
    rng: R,
}

impl<R: Rng> RandomGraphBuilder<R> {
    pub fn new(config: GeneratorConfig, rng: R) -> Result<Self> {
        config.validate()?;
        Ok(Self { config, rng })
    }

    /// 第一个子图的顶点范围
    pub fn first_cluster(&self) -> RangeInclusive<u64> {
        1..=self.config.subgraph_size
    }

    /// 第二个子图的顶点范围
    pub fn second_cluster(&self) -> RangeInclusive<u64> {
        self.config.subgraph_size + 1..=2 * self.config.subgraph_size
    }

    /// 构建随机图
    pub fn build(&mut self) -> RandomGraph {
        let mut graph = Graph::new();
        let (first, second) = (self.first_cluster(), self.second_cluster());
        self.populate_cluster(&mut graph, first);
        self.populate_cluster(&mut graph, second);

        let (a, b) = self.pick_endpoints();
        let weight = self.random_weight();
        graph.add_edge(a, b, weight);
        let bridge = Edge::new(a, b, weight);

        debug!(
            vertices = graph.number_of_vertices(),
            edges = graph.number_of_edges(),
            %bridge,
            "随机图构建完成"
        );
        RandomGraph { graph, bridge }
    }

    /// 随机选取一对顶点，分别位于两个子图
    pub fn pick_endpoints(&mut self) -> (VertexId, VertexId) {
        let (first, second) = (self.first_cluster(), self.second_cluster());
        let a = self.rng.gen_range(first);
        let b = self.rng.gen_range(second);
        (VertexId::new(a), VertexId::new(b))
    }

    fn random_weight(&mut self) -> Weight {
        self.rng.gen_range(1..=self.config.max_edge_weight)
    }

    fn populate_cluster(&mut self, graph: &mut Graph, range: RangeInclusive<u64>) {
        let mut ids: Vec<u64> = range.clone().collect();
        for &id in &ids {
            graph.add_vertex(VertexId::new(id));
        }

        // 随机生成链保证子图连通
        ids.shuffle(&mut self.rng);
        for pair in ids.windows(2) {
            let weight = self.random_weight();
            graph.add_edge(VertexId::new(pair[0]), VertexId::new(pair[1]), weight);
        }

        // 重复的提议由 add_edge 忽略
        for id in range.clone() {
            let mut proposed = 0;
            while proposed < self.config.neighbours_per_vertex {
                let neighbour = self.rng.gen_range(range.clone());
                if neighbour == id {
                    continue;
                }
                let weight = self.random_weight();
                graph.add_edge(VertexId::new(id), VertexId::new(neighbour), weight);
                proposed += 1;
            }
        }
    }
}

/// 固定的示例图：两个 6 顶点子图，由 3-9 边（权重 10）连接
pub fn example_graph() -> Graph {
    const EDGES: [(u64, u64, Weight); 19] = [
        // 第一个子图
        (1, 2, 2),
        (1, 4, 4),
        (1, 6, 3),
        (2, 3, 2),
        (2, 6, 1),
        (3, 4, 6),
        (3, 5, 4),
        (3, 6, 1),
        (4, 5, 3),
        // 第二个子图
        (7, 8, 2),
        (7, 9, 5),
        (7, 12, 7),
        (8, 9, 4),
        (8, 10, 2),
        (9, 11, 6),
        (10, 11, 4),
        (10, 12, 5),
        (11, 12, 8),
        // 桥
        (3, 9, 10),
    ];

    let mut graph = Graph::new();
    for id in 1..=12 {
        graph.add_vertex(VertexId::new(id));
    }
    for (a, b, w) in EDGES {
        graph.add_edge(VertexId::new(a), VertexId::new(b), w);
    }
    graph
}

//! 图数据结构
//!
//! 带权无向图：顶点表、规范化边表和邻接索引三者同步维护

use super::edge::{Edge, EdgeKey, PathWeight, Weight};
use super::index::AdjacencyIndex;
use super::vertex::{Vertex, VertexId};
use crate::error::{Error, Result};
use std::collections::BTreeMap;
use tracing::trace;

/// 带权无向图
///
/// 任意两个顶点之间至多一条边，不允许自环。所有变更操作都不会失败，
/// 非法或重复的输入视为空操作，返回 `false`。
#[derive(Debug, Clone, Default)]
pub struct Graph {
    /// 顶点表
    vertices: BTreeMap<VertexId, Vertex>,
    /// 边表（规范化顶点对 -> 权重）
    edges: BTreeMap<EdgeKey, Weight>,
    /// 邻接索引
    adjacency: AdjacencyIndex,
}

impl Graph {
    /// 创建空图
    pub fn new() -> Self {
        Self::default()
    }

    /// 获取顶点数量
    pub fn number_of_vertices(&self) -> usize {
        self.vertices.len()
    }

    /// 获取边数量
    pub fn number_of_edges(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    // ==================== 顶点操作 ====================

    /// 添加顶点，ID 已存在时不做任何事
    pub fn add_vertex(&mut self, id: VertexId) -> bool {
        if self.vertices.contains_key(&id) {
            trace!(vertex = %id, "顶点已存在，忽略");
            return false;
        }
        self.vertices.insert(id, Vertex::new(id));
        self.adjacency.add_vertex(id);
        true
    }

    /// 删除顶点及其全部关联边
    pub fn remove_vertex(&mut self, id: VertexId) -> bool {
        if !self.vertices.contains_key(&id) {
            return false;
        }

        let neighbours: Vec<VertexId> = self.adjacency.neighbours(id).collect();
        for neighbour in neighbours {
            self.remove_edge(id, neighbour);
        }

        self.adjacency.remove_vertex(id);
        self.vertices.remove(&id);
        true
    }

    /// 顶点是否存在
    pub fn has_vertex(&self, id: VertexId) -> bool {
        self.vertices.contains_key(&id)
    }

    /// 获取顶点
    pub fn vertex(&self, id: VertexId) -> Option<&Vertex> {
        self.vertices.get(&id)
    }

    /// 所有顶点（按 ID 升序）
    pub fn vertices(&self) -> impl Iterator<Item = &Vertex> + '_ {
        self.vertices.values()
    }

    pub(crate) fn vertex_ids(&self) -> impl Iterator<Item = VertexId> + '_ {
        self.vertices.keys().copied()
    }

    /// 获取顶点度数
    pub fn degree(&self, id: VertexId) -> Result<usize> {
        self.vertices
            .get(&id)
            .map(Vertex::degree)
            .ok_or_else(|| Error::unknown_vertex(id))
    }

    // ==================== 边操作 ====================

    /// 添加边
    ///
    /// 自环、未知端点、已存在的边都被忽略；已有边的权重保持不变。
    pub fn add_edge(&mut self, u: VertexId, v: VertexId, weight: Weight) -> bool {
        let key = EdgeKey::new(u, v);
        if key.is_self_loop() {
            trace!(vertex = %u, "拒绝自环");
            return false;
        }
        if !self.has_vertex(u) || !self.has_vertex(v) {
            trace!(%key, "端点不存在，忽略");
            return false;
        }
        if self.edges.contains_key(&key) {
            trace!(%key, weight, "边已存在，保留原权重");
            return false;
        }

        self.edges.insert(key, weight);
        self.adjacency.link(u, v);
        for id in [u, v] {
            if let Some(vertex) = self.vertices.get_mut(&id) {
                vertex.increment_degree();
                debug_assert_eq!(vertex.degree(), self.adjacency.len_of(id));
            }
        }
        true
    }

    /// 删除边
    pub fn remove_edge(&mut self, u: VertexId, v: VertexId) -> bool {
        let key = EdgeKey::new(u, v);
        if self.edges.remove(&key).is_none() {
            return false;
        }

        self.adjacency.unlink(u, v);
        for id in [u, v] {
            if let Some(vertex) = self.vertices.get_mut(&id) {
                vertex.decrement_degree();
            }
        }
        true
    }

    /// 边是否存在（与参数顺序无关）
    pub fn has_edge(&self, u: VertexId, v: VertexId) -> bool {
        self.edges.contains_key(&EdgeKey::new(u, v))
    }

    /// 获取边权重
    pub fn edge_weight(&self, u: VertexId, v: VertexId) -> Result<Weight> {
        self.edges
            .get(&EdgeKey::new(u, v))
            .copied()
            .ok_or_else(|| Error::missing_edge(u, v))
    }

    /// 获取边
    pub fn edge(&self, u: VertexId, v: VertexId) -> Option<Edge> {
        let key = EdgeKey::new(u, v);
        self.edges
            .get(&key)
            .map(|&w| Edge::new(key.first(), key.second(), w))
    }

    /// 所有边（按规范化顶点对升序）
    pub fn edges(&self) -> impl Iterator<Item = Edge> + '_ {
        self.edges
            .iter()
            .map(|(key, &w)| Edge::new(key.first(), key.second(), w))
    }

    // ==================== 邻居查询 ====================

    /// 获取顶点的邻居（按 ID 升序）
    pub fn neighbours_for_vertex(&self, id: VertexId) -> Result<Vec<VertexId>> {
        if !self.has_vertex(id) {
            return Err(Error::unknown_vertex(id));
        }
        Ok(self.adjacency.neighbours(id).collect())
    }

    /// 不做存在性检查的邻居迭代，供算法内部使用
    pub(crate) fn neighbours(&self, id: VertexId) -> impl Iterator<Item = VertexId> + '_ {
        self.adjacency.neighbours(id)
    }

    /// 计算路径总权重
    ///
    /// 空路径和单顶点路径权重为 0；相邻两点之间缺边时返回 `NotFound`。
    pub fn path_weight(&self, path: &[VertexId]) -> Result<PathWeight> {
        path.windows(2)
            .try_fold(0, |total: PathWeight, pair| -> Result<PathWeight> {
                let w = self.edge_weight(pair[0], pair[1])?;
                Ok(total + PathWeight::from(w))
            })
    }
}

//! 顶点定义

use serde::{Deserialize, Serialize};
use std::fmt;

/// 顶点 ID（图内唯一）
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct VertexId(pub u64);

impl VertexId {
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    pub fn as_u64(&self) -> u64 {
        self.0
    }
}

impl From<u64> for VertexId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

impl fmt::Display for VertexId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// 顶点
///
/// 度数只由 [`Graph`](crate::graph::Graph) 在增删边时增量维护。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Vertex {
    id: VertexId,
    degree: usize,
}

impl Vertex {
    pub(crate) fn new(id: VertexId) -> Self {
        Self { id, degree: 0 }
    }

    /// 获取顶点 ID
    pub fn id(&self) -> VertexId {
        self.id
    }

    /// 关联边数量
    pub fn degree(&self) -> usize {
        self.degree
    }

    pub(crate) fn increment_degree(&mut self) {
        self.degree += 1;
    }

    pub(crate) fn decrement_degree(&mut self) {
        debug_assert!(self.degree > 0, "顶点 {} 度数下溢", self.id);
        self.degree = self.degree.saturating_sub(1);
    }
}

//! 邻接索引
//!
//! 顶点到邻居集合的映射，随边的增删同步更新

use crate::graph::vertex::VertexId;
use std::collections::{BTreeMap, BTreeSet};

/// 邻接索引
#[derive(Debug, Clone, Default)]
pub struct AdjacencyIndex {
    neighbours: BTreeMap<VertexId, BTreeSet<VertexId>>,
}

impl AdjacencyIndex {
    /// 创建新索引
    pub fn new() -> Self {
        Self::default()
    }

    /// 注册顶点（无邻居）
    pub fn add_vertex(&mut self, v: VertexId) {
        self.neighbours.entry(v).or_default();
    }

    /// 注销顶点，返回它的邻居
    ///
    /// 调用方需先删除所有关联边，这里只清理残留项。
    pub fn remove_vertex(&mut self, v: VertexId) -> BTreeSet<VertexId> {
        let former = self.neighbours.remove(&v).unwrap_or_default();
        for n in &former {
            if let Some(set) = self.neighbours.get_mut(n) {
                set.remove(&v);
            }
        }
        former
    }

    /// 添加无向边
    pub fn link(&mut self, a: VertexId, b: VertexId) {
        self.neighbours.entry(a).or_default().insert(b);
        self.neighbours.entry(b).or_default().insert(a);
    }

    /// 删除无向边
    pub fn unlink(&mut self, a: VertexId, b: VertexId) {
        if let Some(set) = self.neighbours.get_mut(&a) {
            set.remove(&b);
        }
        if let Some(set) = self.neighbours.get_mut(&b) {
            set.remove(&a);
        }
    }

    /// 邻居（升序）
    pub fn neighbours(&self, v: VertexId) -> impl Iterator<Item = VertexId> + '_ {
        self.neighbours
            .get(&v)
            .into_iter()
            .flat_map(|set| set.iter().copied())
    }

    /// 邻居数量
    pub fn len_of(&self, v: VertexId) -> usize {
        self.neighbours.get(&v).map_or(0, BTreeSet::len)
    }
}

//! 边定义
//!
//! 无向边以规范化的顶点对 `(min, max)` 作为唯一标识，权重不参与比较。

use crate::graph::vertex::VertexId;
use serde::{Deserialize, Serialize};
use std::fmt;

/// 边权重
pub type Weight = u64;

/// 路径总权重，宽于单条边权重，任意条边相加都不会溢出
pub type PathWeight = u128;

/// 规范化的无向顶点对
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct EdgeKey {
    first: VertexId,
    second: VertexId,
}

impl EdgeKey {
    /// `(a, b)` 与 `(b, a)` 得到同一个键
    pub fn new(a: VertexId, b: VertexId) -> Self {
        Self {
            first: a.min(b),
            second: a.max(b),
        }
    }

    /// 较小的端点
    pub fn first(&self) -> VertexId {
        self.first
    }

    /// 较大的端点
    pub fn second(&self) -> VertexId {
        self.second
    }

    pub fn is_self_loop(&self) -> bool {
        self.first == self.second
    }

    pub fn contains(&self, v: VertexId) -> bool {
        self.first == v || self.second == v
    }

    /// 另一个端点；`v` 不是端点时返回 `None`
    pub fn other(&self, v: VertexId) -> Option<VertexId> {
        if v == self.first {
            Some(self.second)
        } else if v == self.second {
            Some(self.first)
        } else {
            None
        }
    }
}

impl fmt::Display for EdgeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} <-> {}", self.first, self.second)
    }
}

/// 边（键 + 权重）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Edge {
    key: EdgeKey,
    weight: Weight,
}

impl Edge {
    pub fn new(a: VertexId, b: VertexId, weight: Weight) -> Self {
        Self {
            key: EdgeKey::new(a, b),
            weight,
        }
    }

    pub fn key(&self) -> EdgeKey {
        self.key
    }

    pub fn first(&self) -> VertexId {
        self.key.first()
    }

    pub fn second(&self) -> VertexId {
        self.key.second()
    }

    pub fn weight(&self) -> Weight {
        self.weight
    }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}<--{}-->{}", self.first(), self.weight, self.second())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_edge_key_canonical() {
        let a = VertexId::new(9);
        let b = VertexId::new(3);

        let key = EdgeKey::new(a, b);
        assert_eq!(key, EdgeKey::new(b, a));
        assert_eq!(key.first(), b);
        assert_eq!(key.second(), a);
        assert!(!key.is_self_loop());
    }

    #[test]
    fn test_edge_key_other() {
        let key = EdgeKey::new(VertexId::new(1), VertexId::new(2));
        assert_eq!(key.other(VertexId::new(1)), Some(VertexId::new(2)));
        assert_eq!(key.other(VertexId::new(2)), Some(VertexId::new(1)));
        assert_eq!(key.other(VertexId::new(5)), None);
        assert!(key.contains(VertexId::new(2)));
    }

    #[test]
    fn test_edge_display() {
        let e = Edge::new(VertexId::new(4), VertexId::new(1), 6);
        assert_eq!(e.to_string(), "1<--6-->4");
        assert_eq!(e.key().to_string(), "1 <-> 4");
    }
}

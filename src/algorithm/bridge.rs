//! 桥查找
//!
//! 桥是删除后会增加连通分量数量的边。使用迭代式 Tarjan low-link 深度优先搜索，
//! 不依赖递归深度。

use crate::graph::{Edge, EdgeKey, Graph, VertexId};
use std::collections::{HashMap, HashSet};
use tracing::debug;

/// DFS 栈帧
struct Frame {
    vertex: VertexId,
    /// 发现序号
    order: usize,
    /// 父顶点及其发现序号
    parent: Option<(VertexId, usize)>,
    neighbours: Vec<VertexId>,
    cursor: usize,
}

/// 桥查找器
pub struct BridgeFinder<'g> {
    graph: &'g Graph,
}

impl<'g> BridgeFinder<'g> {
    pub fn new(graph: &'g Graph) -> Self {
        Self { graph }
    }

    /// 图中所有桥（按规范化顶点对升序）
    pub fn bridges(&self) -> Vec<EdgeKey> {
        let mut order: HashMap<VertexId, usize> = HashMap::new();
        let mut low: Vec<usize> = Vec::with_capacity(self.graph.number_of_vertices());
        let mut bridges = Vec::new();

        for root in self.graph.vertex_ids() {
            if order.contains_key(&root) {
                continue;
            }

            let mut stack = vec![self.discover(root, None, &mut order, &mut low)];

            loop {
                let Some(frame) = stack.last_mut() else {
                    break;
                };
                let next = frame.neighbours.get(frame.cursor).copied();
                let (vertex, vertex_order, parent) = (frame.vertex, frame.order, frame.parent);

                match next {
                    Some(neighbour) => {
                        frame.cursor += 1;
                        // 简单图中父边唯一，跳过即可
                        if parent.map(|(p, _)| p) == Some(neighbour) {
                            continue;
                        }
                        match order.get(&neighbour) {
                            Some(&seen) => low[vertex_order] = low[vertex_order].min(seen),
                            None => {
                                let child = self.discover(
                                    neighbour,
                                    Some((vertex, vertex_order)),
                                    &mut order,
                                    &mut low,
                                );
                                stack.push(child);
                            }
                        }
                    }
                    None => {
                        stack.pop();
                        if let Some((p, p_order)) = parent {
                            low[p_order] = low[p_order].min(low[vertex_order]);
                            if low[vertex_order] > p_order {
                                bridges.push(EdgeKey::new(p, vertex));
                            }
                        }
                    }
                }
            }
        }

        bridges.sort();
        debug!(count = bridges.len(), "桥查找完成");
        bridges
    }

    /// `first` 到 `second` 的最少跳数路径上遇到的第一座桥
    ///
    /// 两点之间的任何路径都经过同一组桥，结果只取决于沿路径的先后顺序。
    /// 不连通、两点相同或路径上没有桥时返回 `None`。
    pub fn find_bridge(&self, first: VertexId, second: VertexId) -> Option<Edge> {
        let path = self.graph.smallest_path(first, second);
        if path.len() < 2 {
            return None;
        }

        let bridges: HashSet<EdgeKey> = self.bridges().into_iter().collect();
        path.windows(2)
            .find(|pair| bridges.contains(&EdgeKey::new(pair[0], pair[1])))
            .and_then(|pair| self.graph.edge(pair[0], pair[1]))
    }

    fn discover(
        &self,
        vertex: VertexId,
        parent: Option<(VertexId, usize)>,
        order: &mut HashMap<VertexId, usize>,
        low: &mut Vec<usize>,
    ) -> Frame {
        let index = low.len();
        order.insert(vertex, index);
        low.push(index);
        Frame {
            vertex,
            order: index,
            parent,
            neighbours: self.graph.neighbours(vertex).collect(),
            cursor: 0,
        }
    }
}

impl Graph {
    /// 所有桥，见 [`BridgeFinder::bridges`]
    pub fn bridges(&self) -> Vec<EdgeKey> {
        BridgeFinder::new(self).bridges()
    }

    /// 两点之间的桥，见 [`BridgeFinder::find_bridge`]
    pub fn find_bridge(&self, first: VertexId, second: VertexId) -> Option<Edge> {
        BridgeFinder::new(self).find_bridge(first, second)
    }
}

//! 路径查找算法
//!
//! Dijkstra 最小权重路径与 BFS 最少跳数路径

use crate::error::Result;
use crate::graph::{Graph, PathWeight, VertexId};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, HashMap, HashSet, VecDeque};
use tracing::debug;

/// 路径结果
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PathResult {
    /// 路径上的顶点序列
    pub vertices: Vec<VertexId>,
    /// 经过的边数
    pub hops: usize,
    /// 路径总权重
    pub total_weight: PathWeight,
}

impl PathResult {
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }
}

/// 路径查找器
pub struct PathFinder<'g> {
    graph: &'g Graph,
}

impl<'g> PathFinder<'g> {
    /// 创建路径查找器
    pub fn new(graph: &'g Graph) -> Self {
        Self { graph }
    }

    /// Dijkstra 最小权重路径
    ///
    /// 每轮线性扫描已到达的未访问顶点，距离相同时取 ID 最小者；只有严格更短的距离
    /// 才会替换前驱。未到达的顶点不在距离表中。不连通时返回空序列。
    pub fn shortest_path(&self, source: VertexId, target: VertexId) -> Vec<VertexId> {
        if !self.endpoints_known(source, target) {
            return Vec::new();
        }
        if source == target {
            return vec![source];
        }

        let mut distances: HashMap<VertexId, PathWeight> = HashMap::new();
        distances.insert(source, 0);
        let mut unvisited: BTreeSet<VertexId> = self.graph.vertex_ids().collect();
        let mut previous: HashMap<VertexId, VertexId> = HashMap::new();
        let mut visited = 0usize;

        loop {
            let Some((current, distance)) = unvisited
                .iter()
                .filter_map(|&id| distances.get(&id).map(|&d| (id, d)))
                .min_by_key(|&(_, d)| d)
            else {
                break;
            };

            if current == target {
                break;
            }
            unvisited.remove(&current);
            visited += 1;

            for neighbour in self.graph.neighbours(current) {
                if !unvisited.contains(&neighbour) {
                    continue;
                }
                let Ok(weight) = self.graph.edge_weight(current, neighbour) else {
                    continue;
                };
                let candidate = distance + PathWeight::from(weight);
                let improves = distances
                    .get(&neighbour)
                    .map_or(true, |&known| candidate < known);
                if improves {
                    distances.insert(neighbour, candidate);
                    previous.insert(neighbour, current);
                }
            }
        }

        let path = reconstruct_path(source, target, &previous);
        debug!(
            %source,
            %target,
            visited,
            length = path.len(),
            distance = distances.get(&target).copied(),
            "dijkstra 完成"
        );
        path
    }

    /// BFS 最少跳数路径
    ///
    /// 邻居按 ID 升序入队，首次发现终点即停止。
    pub fn smallest_path(&self, source: VertexId, target: VertexId) -> Vec<VertexId> {
        if !self.endpoints_known(source, target) {
            return Vec::new();
        }
        if source == target {
            return vec![source];
        }

        let mut found = HashSet::new();
        let mut queue = VecDeque::new();
        let mut parent: HashMap<VertexId, VertexId> = HashMap::new();

        found.insert(source);
        queue.push_back(source);

        while let Some(current) = queue.pop_front() {
            for neighbour in self.graph.neighbours(current) {
                if !found.insert(neighbour) {
                    continue;
                }
                parent.insert(neighbour, current);

                if neighbour == target {
                    let path = reconstruct_path(source, target, &parent);
                    debug!(
                        %source,
                        %target,
                        found = found.len(),
                        hops = path.len().saturating_sub(1),
                        "bfs 完成"
                    );
                    return path;
                }
                queue.push_back(neighbour);
            }
        }

        debug!(%source, %target, found = found.len(), "bfs 未找到路径");
        Vec::new()
    }

    /// 判断两点是否连通
    pub fn are_connected(&self, u: VertexId, v: VertexId) -> bool {
        !self.smallest_path(u, v).is_empty()
    }

    fn endpoints_known(&self, source: VertexId, target: VertexId) -> bool {
        let known = self.graph.has_vertex(source) && self.graph.has_vertex(target);
        if !known {
            debug!(%source, %target, "端点不在图中，返回空路径");
        }
        known
    }
}

/// 沿前驱表从终点回溯到起点
fn reconstruct_path(
    source: VertexId,
    target: VertexId,
    previous: &HashMap<VertexId, VertexId>,
) -> Vec<VertexId> {
    let mut vertices = vec![target];
    let mut current = target;

    while current != source {
        match previous.get(&current) {
            Some(&prev) => {
                vertices.push(prev);
                current = prev;
            }
            None => return Vec::new(),
        }
    }

    vertices.reverse();
    vertices
}

impl Graph {
    /// 最小权重路径，见 [`PathFinder::shortest_path`]
    pub fn shortest_path(&self, source: VertexId, target: VertexId) -> Vec<VertexId> {
        PathFinder::new(self).shortest_path(source, target)
    }

    /// 最少跳数路径，见 [`PathFinder::smallest_path`]
    pub fn smallest_path(&self, source: VertexId, target: VertexId) -> Vec<VertexId> {
        PathFinder::new(self).smallest_path(source, target)
    }

    /// 两点是否处于同一连通分量
    pub fn are_connected(&self, u: VertexId, v: VertexId) -> bool {
        PathFinder::new(self).are_connected(u, v)
    }

    /// 为一条路径计算跳数和总权重
    pub fn path_result(&self, vertices: Vec<VertexId>) -> Result<PathResult> {
        let total_weight = self.path_weight(&vertices)?;
        Ok(PathResult {
            hops: vertices.len().saturating_sub(1),
            vertices,
            total_weight,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::example_graph;
    use proptest::prelude::*;

    fn v(id: u64) -> VertexId {
        VertexId::new(id)
    }

    fn ids(path: &[VertexId]) -> Vec<u64> {
        path.iter().map(VertexId::as_u64).collect()
    }

    /// 1 -(1)- 2 -(1)- 3 -(1)- 4，外加 1 -(10)- 4 的捷径
    fn detour_graph() -> Graph {
        let mut graph = Graph::new();
        for id in 1..=4 {
            graph.add_vertex(v(id));
        }
        graph.add_edge(v(1), v(2), 1);
        graph.add_edge(v(2), v(3), 1);
        graph.add_edge(v(3), v(4), 1);
        graph.add_edge(v(1), v(4), 10);
        graph
    }

    #[test]
    fn test_shortest_prefers_weight() {
        let graph = detour_graph();

        let path = graph.shortest_path(v(1), v(4));
        assert_eq!(ids(&path), vec![1, 2, 3, 4]);
        assert_eq!(graph.path_weight(&path), Ok(3));
    }

    #[test]
    fn test_smallest_prefers_hops() {
        let graph = detour_graph();

        let path = graph.smallest_path(v(1), v(4));
        assert_eq!(ids(&path), vec![1, 4]);
        assert_eq!(graph.path_weight(&path), Ok(10));
    }

    #[test]
    fn test_same_source_and_target() {
        let graph = detour_graph();

        assert_eq!(graph.shortest_path(v(2), v(2)), vec![v(2)]);
        assert_eq!(graph.smallest_path(v(2), v(2)), vec![v(2)]);
        assert_eq!(graph.path_weight(&[v(2)]), Ok(0));
        assert!(graph.are_connected(v(2), v(2)));
    }

    #[test]
    fn test_disconnected() {
        let mut graph = detour_graph();
        graph.add_vertex(v(5));
        graph.add_vertex(v(6));
        graph.add_edge(v(5), v(6), 1);

        assert!(graph.shortest_path(v(1), v(6)).is_empty());
        assert!(graph.smallest_path(v(1), v(6)).is_empty());
        assert!(!graph.are_connected(v(1), v(6)));
        assert!(graph.are_connected(v(5), v(6)));
    }

    #[test]
    fn test_unknown_endpoint() {
        let graph = detour_graph();

        assert!(graph.shortest_path(v(1), v(99)).is_empty());
        assert!(graph.smallest_path(v(99), v(1)).is_empty());
        assert!(!graph.are_connected(v(99), v(99)));
    }

    #[test]
    fn test_equal_weight_tie_is_deterministic() {
        // 1-2-4 与 1-3-4 权重相同
        let mut graph = Graph::new();
        for id in 1..=4 {
            graph.add_vertex(v(id));
        }
        graph.add_edge(v(1), v(3), 2);
        graph.add_edge(v(3), v(4), 2);
        graph.add_edge(v(1), v(2), 2);
        graph.add_edge(v(2), v(4), 2);

        assert_eq!(ids(&graph.shortest_path(v(1), v(4))), vec![1, 2, 4]);
        assert_eq!(ids(&graph.smallest_path(v(1), v(4))), vec![1, 2, 4]);
    }

    #[test]
    fn test_example_graph_crosses_bridge_once() {
        let graph = example_graph();

        let path = graph.shortest_path(v(1), v(12));
        let crossings = path
            .windows(2)
            .filter(|p| {
                let (a, b) = (p[0].as_u64(), p[1].as_u64());
                (a, b) == (3, 9) || (a, b) == (9, 3)
            })
            .count();
        assert_eq!(crossings, 1);

        // 1 -> 3 最短为 1-2-3 或 1-6-3（权重 4），9 -> 12 最短为 9-8-10-12（权重 11）
        let to_bridge = graph.path_weight(&graph.shortest_path(v(1), v(3))).unwrap();
        let from_bridge = graph.path_weight(&graph.shortest_path(v(9), v(12))).unwrap();
        assert_eq!(to_bridge, 4);
        assert_eq!(from_bridge, 11);
        assert_eq!(graph.path_weight(&path), Ok(to_bridge + 10 + from_bridge));
    }

    #[test]
    fn test_example_graph_smallest_path() {
        let graph = example_graph();

        let path = graph.smallest_path(v(1), v(12));
        assert_eq!(ids(&path), vec![1, 2, 3, 9, 7, 12]);
        let result = graph.path_result(path).unwrap();
        assert_eq!(result.hops, 5);
        assert_eq!(result.total_weight, 2 + 2 + 10 + 5 + 7);
    }

    #[test]
    fn test_max_weight_edges_stay_reachable() {
        let mut graph = Graph::new();
        for id in 1..=4 {
            graph.add_vertex(v(id));
        }
        graph.add_edge(v(1), v(2), u64::MAX);
        graph.add_edge(v(2), v(3), u64::MAX);
        graph.add_edge(v(1), v(4), u64::MAX);
        graph.add_edge(v(4), v(3), u64::MAX - 1);

        let direct = graph.shortest_path(v(1), v(2));
        assert_eq!(ids(&direct), vec![1, 2]);
        assert_eq!(graph.path_weight(&direct), Ok(PathWeight::from(u64::MAX)));

        // 两条路径的总和都超过 u64::MAX，只有宽类型能区分
        let path = graph.shortest_path(v(1), v(3));
        assert_eq!(ids(&path), vec![1, 4, 3]);
        let result = graph.path_result(path).unwrap();
        assert_eq!(result.total_weight, 2 * PathWeight::from(u64::MAX) - 1);
    }

    #[test]
    fn test_path_result_empty() {
        let graph = detour_graph();

        let result = graph.path_result(Vec::new()).unwrap();
        assert!(result.is_empty());
        assert_eq!(result.hops, 0);
        assert_eq!(result.total_weight, 0);
    }

    /// Floyd–Warshall 参考距离，`unit` 为真时按跳数计
    fn reference_distances(graph: &Graph, n: u64, unit: bool) -> Vec<Vec<Option<PathWeight>>> {
        let size = n as usize;
        let mut dist = vec![vec![None; size]; size];
        for i in 0..size {
            dist[i][i] = Some(0);
        }
        for e in graph.edges() {
            let (a, b) = (e.first().as_u64() as usize, e.second().as_u64() as usize);
            let w = if unit { 1 } else { PathWeight::from(e.weight()) };
            dist[a][b] = Some(w);
            dist[b][a] = Some(w);
        }
        for k in 0..size {
            for i in 0..size {
                for j in 0..size {
                    if let (Some(ik), Some(kj)) = (dist[i][k], dist[k][j]) {
                        if dist[i][j].map_or(true, |ij| ik + kj < ij) {
                            dist[i][j] = Some(ik + kj);
                        }
                    }
                }
            }
        }
        dist
    }

    fn build(n: u64, pairs: &[(u64, u64, u64)]) -> Graph {
        let mut graph = Graph::new();
        for id in 0..n {
            graph.add_vertex(v(id));
        }
        for &(a, b, w) in pairs {
            graph.add_edge(v(a), v(b), w);
        }
        graph
    }

    proptest! {
        #[test]
        fn prop_dijkstra_is_optimal(
            pairs in proptest::collection::vec(
                (0u64..9, 0u64..9, prop_oneof![0u64..30, (u64::MAX - 30)..=u64::MAX]),
                0..30,
            ),
            s in 0u64..9,
            t in 0u64..9,
        ) {
            let graph = build(9, &pairs);
            let reference = reference_distances(&graph, 9, false);
            let path = graph.shortest_path(v(s), v(t));

            match reference[s as usize][t as usize] {
                Some(best) => {
                    prop_assert_eq!(path.first().copied(), Some(v(s)));
                    prop_assert_eq!(path.last().copied(), Some(v(t)));
                    prop_assert_eq!(graph.path_weight(&path), Ok(best));
                }
                None => {
                    prop_assert!(path.is_empty());
                    prop_assert!(!graph.are_connected(v(s), v(t)));
                }
            }
        }

        #[test]
        fn prop_bfs_is_hop_minimal(
            pairs in proptest::collection::vec((0u64..9, 0u64..9, 1u64..30), 0..30),
            s in 0u64..9,
            t in 0u64..9,
        ) {
            let graph = build(9, &pairs);
            let reference = reference_distances(&graph, 9, true);
            let path = graph.smallest_path(v(s), v(t));

            match reference[s as usize][t as usize] {
                Some(hops) => {
                    prop_assert_eq!(path.len() as PathWeight, hops + 1);
                    prop_assert!(graph.path_weight(&path).is_ok());
                    prop_assert_eq!(path.first().copied(), Some(v(s)));
                    prop_assert_eq!(path.last().copied(), Some(v(t)));
                }
                None => prop_assert!(path.is_empty()),
            }
        }
    }
}

//! 并查集
//!
//! 数组存储 parent/rank，顶点标识通过 IndexMap 映射到下标。
//! 按秩合并只影响内部树形，不影响 Kruskal 选中哪些边。

use crate::error::{Error, Result};
use crate::types::NodeId;
use indexmap::IndexMap;

/// 并查集
#[derive(Debug, Clone, Default)]
pub struct UnionFind {
    /// 顶点标识到下标的映射
    ids: IndexMap<NodeId, usize>,
    parent: Vec<usize>,
    rank: Vec<u8>,
    /// 当前连通分量数
    components: usize,
}

impl UnionFind {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            ids: IndexMap::with_capacity(capacity),
            parent: Vec::with_capacity(capacity),
            rank: Vec::with_capacity(capacity),
            components: 0,
        }
    }

    /// 注册顶点为独立分量，已注册时直接返回原下标
    pub fn make_set(&mut self, id: NodeId) -> usize {
        if let Some(&i) = self.ids.get(&id) {
            return i;
        }
        let i = self.parent.len();
        self.ids.insert(id, i);
        self.parent.push(i);
        self.rank.push(0);
        self.components += 1;
        i
    }

    fn index_of(&self, id: &NodeId) -> Result<usize> {
        self.ids
            .get(id)
            .copied()
            .ok_or_else(|| Error::UnknownNode(id.to_string()))
    }

    /// 查找代表元（带路径压缩）
    pub fn find(&mut self, id: &NodeId) -> Result<&NodeId> {
        let i = self.index_of(id)?;
        let root = self.find_root(i);
        // root 一定是已注册的下标
        self.ids
            .get_index(root)
            .map(|(id, _)| id)
            .ok_or_else(|| Error::UnknownNode(id.to_string()))
    }

    /// 合并两个顶点所在的分量；已在同一分量时返回 false
    pub fn union(&mut self, a: &NodeId, b: &NodeId) -> Result<bool> {
        let a = self.index_of(a)?;
        let b = self.index_of(b)?;
        Ok(self.union_roots(a, b))
    }

    /// 两个顶点是否连通
    pub fn connected(&mut self, a: &NodeId, b: &NodeId) -> Result<bool> {
        let a = self.index_of(a)?;
        let b = self.index_of(b)?;
        Ok(self.find_root(a) == self.find_root(b))
    }

    fn find_root(&mut self, mut x: usize) -> usize {
        let mut root = x;
        while self.parent[root] != root {
            root = self.parent[root];
        }
        // 路径压缩
        while self.parent[x] != root {
            let next = self.parent[x];
            self.parent[x] = root;
            x = next;
        }
        root
    }

    fn union_roots(&mut self, a: usize, b: usize) -> bool {
        let ra = self.find_root(a);
        let rb = self.find_root(b);
        if ra == rb {
            return false;
        }

        match self.rank[ra].cmp(&self.rank[rb]) {
            std::cmp::Ordering::Less => self.parent[ra] = rb,
            std::cmp::Ordering::Greater => self.parent[rb] = ra,
            std::cmp::Ordering::Equal => {
                self.parent[rb] = ra;
                self.rank[ra] += 1;
            }
        }
        self.components -= 1;
        true
    }

    /// 已注册的顶点数
    pub fn len(&self) -> usize {
        self.parent.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parent.is_empty()
    }

    pub fn component_count(&self) -> usize {
        self.components
    }
}

/*!
# Disjoint Forest

Union-find over a set of vertices that additionally remembers *how* the trees were joined:
every successful union records the connecting branch on both endpoints and adds its weight
to the accumulated cost. Kruskal's algorithm drives it; once a single tree remains the
branches are exactly the edges of a minimum spanning tree.

Vertex ids may be sparse (freed matrix slots, holes in the list arena), so ids are mapped to
dense positions with a [`FxHashMap`].
*/

use fxhash::FxHashMap;
use smallvec::SmallVec;

use crate::*;

/// A connection recorded in the forest: the other endpoint and the weight
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Branch {
    pub to: VertexId,
    pub weight: Weight,
}

#[derive(Debug, Clone)]
pub struct DisjointForest {
    index: FxHashMap<VertexId, usize>,
    members: Vec<VertexId>,
    parent: Vec<usize>,
    rank: Vec<u8>,
    branches: Vec<SmallVec<[Branch; 2]>>,
    unions: Vec<WeightedEdge>,
    num_trees: usize,
    cost: u64,
    id_bound: usize,
}

impl DisjointForest {
    /// Creates one singleton tree per vertex.
    /// `id_bound` is an exclusive bound on the given ids; duplicates are ignored.
    pub fn new<I>(id_bound: usize, vertices: I) -> Self
    where
        I: IntoIterator<Item = VertexId>,
    {
        let mut index = FxHashMap::default();
        let mut members = Vec::new();
        for u in vertices {
            debug_assert!((u as usize) < id_bound);
            index.entry(u).or_insert_with(|| {
                members.push(u);
                members.len() - 1
            });
        }

        let n = members.len();
        Self {
            index,
            members,
            parent: (0..n).collect(),
            rank: vec![0; n],
            branches: vec![SmallVec::new(); n],
            unions: Vec::new(),
            num_trees: n,
            cost: 0,
            id_bound,
        }
    }

    /// Number of vertices in the forest
    pub fn number_of_members(&self) -> usize {
        self.members.len()
    }

    /// Returns the vertices in the order they were given
    pub fn members(&self) -> &[VertexId] {
        &self.members
    }

    /// Returns *true* if `u` belongs to the forest
    pub fn contains(&self, u: VertexId) -> bool {
        self.index.contains_key(&u)
    }

    /// Exclusive bound on all member ids
    pub fn id_bound(&self) -> usize {
        self.id_bound
    }

    fn root(&mut self, mut pos: usize) -> usize {
        let mut root = pos;
        while self.parent[root] != root {
            root = self.parent[root];
        }

        while self.parent[pos] != pos {
            let parent = self.parent[pos];
            self.parent[pos] = root;
            pos = parent;
        }

        root
    }

    /// Returns the representative vertex of the tree containing `u`,
    /// or `None` if `u` is not a member
    pub fn find(&mut self, u: VertexId) -> Option<VertexId> {
        let pos = *self.index.get(&u)?;
        let root = self.root(pos);
        Some(self.members[root])
    }

    /// Returns *true* if `u` and `v` are members of the same tree
    pub fn same_tree(&mut self, u: VertexId, v: VertexId) -> bool {
        match (self.find(u), self.find(v)) {
            (Some(a), Some(b)) => a == b,
            _ => false,
        }
    }

    /// Joins the trees of `u` and `v` through the branch `{u, v}` of the given weight.
    /// Returns *false* (and records nothing) if both already share a tree or either
    /// is not a member.
    pub fn union(&mut self, u: VertexId, v: VertexId, weight: Weight) -> bool {
        let (Some(&pu), Some(&pv)) = (self.index.get(&u), self.index.get(&v)) else {
            return false;
        };
        let mut left = self.root(pu);
        let mut right = self.root(pv);
        if left == right {
            return false;
        }

        let (left_rank, right_rank) = (self.rank[left], self.rank[right]);
        if left_rank < right_rank {
            std::mem::swap(&mut left, &mut right);
        }
        self.parent[right] = left;
        if left_rank == right_rank {
            self.rank[left] = left_rank.saturating_add(1);
        }

        self.branches[pu].push(Branch { to: v, weight });
        self.branches[pv].push(Branch { to: u, weight });
        self.unions.push(WeightedEdge::new(u, v, weight));
        self.cost += weight as u64;
        self.num_trees -= 1;
        true
    }

    /// Number of disjoint trees
    pub fn number_of_trees(&self) -> usize {
        self.num_trees
    }

    /// Returns *true* if exactly one tree remains
    pub fn is_spanning(&self) -> bool {
        self.num_trees == 1
    }

    /// Sum of the weights of all recorded branches
    pub fn cost(&self) -> u64 {
        self.cost
    }

    /// Returns the recorded branches in the order of the successful unions
    pub fn unions(&self) -> &[WeightedEdge] {
        &self.unions
    }

    /// Returns the branches incident to `u` (empty if `u` is not a member)
    pub fn branches_of(&self, u: VertexId) -> &[Branch] {
        match self.index.get(&u) {
            Some(&pos) => &self.branches[pos],
            None => &[],
        }
    }
}

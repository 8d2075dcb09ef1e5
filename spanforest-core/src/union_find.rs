//! Union-find (disjoint set union) used by Kruskal's cycle detection.
//!
//! Path compression in [`DisjointSet::find`] combined with union by rank keeps
//! every operation at near-constant amortised cost. A fresh instance is built
//! for each engine invocation and dropped when it returns.

/// Partition of `0..len` into disjoint sets.
#[derive(Clone, Debug)]
pub struct DisjointSet {
    parent: Vec<usize>,
    rank: Vec<u8>,
    components: usize,
}

impl DisjointSet {
    /// Creates `count` singleton sets.
    ///
    /// # Examples
    /// ```
    /// use spanforest_core::DisjointSet;
    ///
    /// let mut sets = DisjointSet::make_set(3);
    /// assert!(sets.union(0, 1));
    /// assert!(!sets.union(1, 0));
    /// assert_eq!(sets.components(), 2);
    /// ```
    #[must_use]
    pub fn make_set(count: usize) -> Self {
        Self {
            parent: (0..count).collect(),
            rank: vec![0; count],
            components: count,
        }
    }

    /// Returns the number of elements tracked.
    #[must_use]
    pub fn len(&self) -> usize {
        self.parent.len()
    }

    /// Returns `true` when no elements are tracked.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.parent.is_empty()
    }

    /// Returns the number of disjoint sets remaining.
    #[must_use]
    #[rustfmt::skip]
    pub const fn components(&self) -> usize { self.components }

    /// Returns the representative of the set containing `node`.
    ///
    /// Every node on the path to the root is re-pointed at the root.
    ///
    /// # Panics
    /// Panics if `node >= self.len()`.
    pub fn find(&mut self, mut node: usize) -> usize {
        let mut root = node;
        while self.parent[root] != root {
            root = self.parent[root];
        }

        while self.parent[node] != root {
            let parent = self.parent[node];
            self.parent[node] = root;
            node = parent;
        }

        root
    }

    /// Merges the sets containing `left` and `right`.
    ///
    /// Returns `false` when both already share a set, which tells Kruskal the
    /// edge would close a cycle.
    ///
    /// # Panics
    /// Panics if either index is `>= self.len()`.
    pub fn union(&mut self, left: usize, right: usize) -> bool {
        let mut left = self.find(left);
        let mut right = self.find(right);
        if left == right {
            return false;
        }
        let left_rank = self.rank[left];
        let right_rank = self.rank[right];
        if left_rank < right_rank {
            std::mem::swap(&mut left, &mut right);
        }
        self.parent[right] = left;
        if left_rank == right_rank {
            self.rank[left] = left_rank.saturating_add(1);
        }
        self.components -= 1;
        true
    }

    /// Returns `true` when `left` and `right` share a set.
    ///
    /// # Panics
    /// Panics if either index is `>= self.len()`.
    pub fn connected(&mut self, left: usize, right: usize) -> bool {
        self.find(left) == self.find(right)
    }
}

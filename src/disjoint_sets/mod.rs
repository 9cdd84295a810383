//! Contains the implementation of the [disjoint-sets/union-find] and the trait
//! the spanning tree algorithm uses to talk to it.
//!
//! [disjoint-sets/union-find]: https://en.wikipedia.org/wiki/Disjoint-set_data_structure

mod metadata;
pub mod disjoint_set;

use crate::error::Result;

/// A partition of the indices `0 .. len` that supports merging sets.
///
/// [`DisjointSet`] is the implementation used by default.
/// Other implementations, for example ones that record every call,
/// can be passed to [`find_mst_with`].
///
/// [`DisjointSet`]: disjoint_set/struct.DisjointSet.html
/// [`find_mst_with`]: ../fn.find_mst_with.html
pub trait UnionFind {
    /// The amount of indices in the partition.
    fn len(&self) -> usize;

    /// Returns `true` if the partition holds no indices.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the representative of the set `index` belongs to.
    ///
    /// Calling `find` on a representative must return that representative.
    fn find(&mut self, index: usize) -> Result<usize>;

    /// Joins the sets of both indices, returns `false` if they already shared a set.
    fn union(&mut self, first_index: usize, second_index: usize) -> Result<bool>;

    /// Returns `true` if both indices are in the same set.
    fn is_connected(&mut self, first_index: usize, second_index: usize) -> Result<bool> {
        Ok(self.find(first_index)? == self.find(second_index)?)
    }

    /// The amount of distinct sets.
    fn count_sets(&self) -> usize;
}

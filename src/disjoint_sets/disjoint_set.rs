//! A [disjoint-sets/union-find] implementation over the indices `0 .. len`.
//!
//! See [`DisjointSet`] for more information.
//!
//! [disjoint-sets/union-find]: https://en.wikipedia.org/wiki/Disjoint-set_data_structure
//! [`DisjointSet`]: struct.DisjointSet.html

use {
    std::collections::HashMap,
    crate::{
        disjoint_sets::{
            metadata::Metadata,
            UnionFind,
        },
        error::{Error, Result},
    },
};
#[cfg(feature = "proptest")]
use proptest::prelude::*;

/// A [disjoint-sets/union-find] structure over the indices `0 .. len`.
///
/// Initially each index has its own set but sets can be joined with the `union` method.
/// Each set is a tree with the representative at its root.
/// `find` relinks every node it passes to its grandparent and `union` hangs the
/// smaller tree below the root of the larger one, so both run in amortized `O(α(n))`
/// time where `α` is the inverse Ackermann function.
///
/// Unlike a slice an index that is out of bounds is not a panic but an
/// [`Error::IndexOutOfRange`].
///
/// # Examples
///
/// ```
/// use boruvka::DisjointSet;
///
/// # fn main() -> Result<(), boruvka::Error> {
/// let mut disjoint_set = DisjointSet::new(4);
/// disjoint_set.union(1, 2)?;
/// disjoint_set.union(2, 3)?;
///
/// assert!(disjoint_set.is_connected(1, 3)?);
/// assert!(!disjoint_set.is_connected(0, 3)?);
/// assert_eq!(disjoint_set.count_sets(), 2);
/// # Ok(())
/// # }
/// ```
///
/// [disjoint-sets/union-find]: https://en.wikipedia.org/wiki/Disjoint-set_data_structure
/// [`Error::IndexOutOfRange`]: ../enum.Error.html#variant.IndexOutOfRange
#[derive(Clone, Default)]
pub struct DisjointSet {
    /// The metadata for each index.
    meta: Vec<Metadata>,
}

impl DisjointSet {
    /// Constructs `len` singleton sets indexed `0 .. len`.
    ///
    /// # Examples
    ///
    /// ```
    /// use boruvka::DisjointSet;
    ///
    /// # fn main() -> Result<(), boruvka::Error> {
    /// let disjoint_set = DisjointSet::new(3);
    ///
    /// assert_eq!(disjoint_set.len(), 3);
    /// assert_eq!(disjoint_set.count_sets(), 3);
    /// assert_eq!(disjoint_set.find(2)?, 2);
    /// assert_eq!(disjoint_set.size_of_set(2)?, 1);
    /// # Ok(())
    /// # }
    /// ```
    pub fn new(len: usize) -> Self {
        Self {
            meta: (0 .. len).map(Metadata::new).collect(),
        }
    }

    /// Returns the amount of indices in the structure.
    #[inline]
    pub fn len(&self) -> usize {
        self.meta.len()
    }

    /// Returns `true` if the structure holds no indices.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.meta.is_empty()
    }

    /// Returns the representative of the set `index` belongs to.
    ///
    /// Every node on the path to the root is relinked to its grandparent,
    /// which halves the length of the path for later calls.
    /// This only needs a shared reference.
    ///
    /// # Errors
    ///
    /// If `index` is out of bounds.
    ///
    /// # Examples
    ///
    /// ```
    /// use boruvka::{DisjointSet, Error};
    ///
    /// # fn main() -> Result<(), Error> {
    /// let mut disjoint_set = DisjointSet::new(3);
    /// disjoint_set.union(0, 1)?;
    ///
    /// assert_eq!(disjoint_set.find(1)?, disjoint_set.find(0)?);
    /// assert_eq!(disjoint_set.find(3), Err(Error::IndexOutOfRange { index: 3, len: 3 }));
    /// # Ok(())
    /// # }
    /// ```
    pub fn find(&self, index: usize) -> Result<usize> {
        self.check(index)?;

        let mut current = index;
        loop {
            let parent = self.meta[current].parent();

            // A node that is its own parent is the root.
            if parent == current {
                return Ok(current)
            }

            let grandparent = self.meta[parent].parent();
            self.meta[current].set_parent(grandparent);
            current = grandparent;
        }
    }

    /// Joins the sets of `first_index` and `second_index`.
    ///
    /// Returns `false` without changing anything if they already share a set.
    /// Otherwise the root of the smaller set is attached to the root of the larger set
    /// and `true` is returned.
    /// When both sets have the same size the root of `first_index` stays the root.
    ///
    /// # Errors
    ///
    /// If `first_index` or `second_index` is out of bounds.
    ///
    /// # Examples
    ///
    /// ```
    /// use boruvka::DisjointSet;
    ///
    /// # fn main() -> Result<(), boruvka::Error> {
    /// let mut disjoint_set = DisjointSet::new(4);
    ///
    /// assert!(disjoint_set.union(0, 1)?);
    /// assert!(disjoint_set.union(0, 2)?);
    /// assert!(!disjoint_set.union(1, 2)?);
    ///
    /// // 3 joins the larger set, so its representative is kept.
    /// let root = disjoint_set.find(0)?;
    /// assert!(disjoint_set.union(3, 0)?);
    /// assert_eq!(disjoint_set.find(3)?, root);
    /// assert_eq!(disjoint_set.size_of_set(3)?, 4);
    /// # Ok(())
    /// # }
    /// ```
    pub fn union(&mut self, first_index: usize, second_index: usize) -> Result<bool> {
        let i = self.find(first_index)?;
        let j = self.find(second_index)?;

        if i == j {
            return Ok(false)
        }

        let (root, child) = if self.meta[j].size() > self.meta[i].size() {
            (j, i)
        } else {
            (i, j)
        };

        self.meta[child].set_parent(root);
        self.meta[root].set_size(self.meta[root].size() + self.meta[child].size());

        Ok(true)
    }

    /// Returns `true` if `first_index` and `second_index` are in the same set.
    ///
    /// # Errors
    ///
    /// If `first_index` or `second_index` is out of bounds.
    #[inline]
    pub fn is_connected(&self, first_index: usize, second_index: usize) -> Result<bool> {
        Ok(self.find(first_index)? == self.find(second_index)?)
    }

    /// Returns the amount of indices in the set that `index` belongs to.
    ///
    /// # Errors
    ///
    /// If `index` is out of bounds.
    pub fn size_of_set(&self, index: usize) -> Result<usize> {
        let root = self.find(index)?;

        Ok(self.meta[root].size())
    }

    /// Returns `true` if `index` is the only element of its set.
    ///
    /// # Errors
    ///
    /// If `index` is out of bounds.
    #[inline]
    pub fn is_singleton(&self, index: usize) -> Result<bool> {
        Ok(self.size_of_set(index)? == 1)
    }

    /// Returns the amount of distinct sets.
    ///
    /// This will be done in `O(n α(n))` time.
    pub fn count_sets(&self) -> usize {
        let mut done = bit_vec::BitVec::from_elem(self.len(), false);
        let mut count = 0;

        for i in 0 .. self.len() {
            let root = self.root(i);
            if !done[root] {
                done.set(root, true);
                count += 1;
            }
        }

        count
    }

    /// Like `find` but for an index that is known to be in bounds.
    #[inline]
    fn root(&self, mut index: usize) -> usize {
        while index != self.meta[index].parent() {
            index = self.meta[index].parent();
        }

        index
    }

    #[inline]
    fn check(&self, index: usize) -> Result<()> {
        if index < self.len() {
            Ok(())
        } else {
            Err(Error::IndexOutOfRange { index, len: self.len() })
        }
    }
}

impl UnionFind for DisjointSet {
    #[inline]
    fn len(&self) -> usize {
        DisjointSet::len(self)
    }

    #[inline]
    fn find(&mut self, index: usize) -> Result<usize> {
        DisjointSet::find(self, index)
    }

    #[inline]
    fn union(&mut self, first_index: usize, second_index: usize) -> Result<bool> {
        DisjointSet::union(self, first_index, second_index)
    }

    #[inline]
    fn count_sets(&self) -> usize {
        DisjointSet::count_sets(self)
    }
}

impl std::fmt::Debug for DisjointSet {
    fn fmt(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
        // We map the roots to `usize` names.
        let mut map = HashMap::with_capacity(self.len());
        let mut builder = formatter.debug_list();

        for i in 0 .. self.len() {
            let root = self.root(i);
            let names = map.len();
            let name = *map.entry(root).or_insert(names);

            builder.entry(&format_args!("{} => {}", i, name));
        }

        builder.finish()
    }
}

/// Two structures are equal if they partition the same indices in the same way.
/// The representatives do not need to match.
impl PartialEq for DisjointSet {
    fn eq(&self, other: &Self) -> bool {
        if self.len() != other.len() {
            return false
        }

        // We map the roots of self to the roots of other.
        let mut map = HashMap::with_capacity(self.len());

        for i in 0 .. self.len() {
            let self_root = self.root(i);
            let other_root = other.root(i);

            if *map.entry(self_root).or_insert(other_root) != other_root {
                return false
            }
        }

        // Every set of self maps to one set of other, the counts rule out merged sets.
        map.len() == other.count_sets()
    }
}

impl Eq for DisjointSet {}

#[cfg(feature = "proptest")]
impl Arbitrary for DisjointSet {
    type Parameters = proptest::collection::SizeRange;
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with(size_range: Self::Parameters) -> Self::Strategy {
        proptest::collection::vec(any::<usize>(), size_range).prop_map(|set_numbers| {
            let mut disjoint_set = Self::new(set_numbers.len());

            // We map a `set_number` to an index of that set.
            let mut map = HashMap::with_capacity(set_numbers.len());

            for (index, set_number) in set_numbers.into_iter().enumerate() {
                // Few distinct values so sets actually get joined.
                let set_number = set_number.trailing_zeros();
                let first = *map.entry(set_number).or_insert(index);

                if first != index {
                    // Both indices are below the length.
                    let _ = disjoint_set.union(first, index);
                }
            }

            disjoint_set
        }).boxed()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    #[cfg(feature = "proptest")]
    use proptest::prelude::*;

    /// Builds a structure with the given parents, with `sizes` stored on the elements.
    fn from_parts(parents: &[usize], sizes: &[usize]) -> DisjointSet {
        let meta = parents.iter().zip(sizes).enumerate().map(|(index, (&parent, &size))| {
            let meta = Metadata::new(index);
            meta.set_parent(parent);
            meta.set_size(size);
            meta
        }).collect();

        DisjointSet { meta }
    }

    #[test]
    fn every_index_starts_as_its_own_root() {
        let disjoint_set = DisjointSet::new(5);

        for i in 0 .. 5 {
            assert_eq!(disjoint_set.find(i), Ok(i));
            assert_eq!(disjoint_set.size_of_set(i), Ok(1));
            assert_eq!(disjoint_set.is_singleton(i), Ok(true));
        }
        assert_eq!(disjoint_set.count_sets(), 5);
    }

    #[test]
    fn union_reports_whether_sets_were_joined() {
        let mut disjoint_set = DisjointSet::new(5);

        assert_eq!(disjoint_set.union(0, 1), Ok(true));
        assert_eq!(disjoint_set.find(0), disjoint_set.find(1));
        assert_eq!(disjoint_set.union(0, 1), Ok(false));
        assert_eq!(disjoint_set.union(1, 0), Ok(false));
        assert_eq!(disjoint_set.size_of_set(0), Ok(2));
    }

    #[test]
    fn failed_union_leaves_sizes_alone() {
        let mut disjoint_set = DisjointSet::new(4);
        disjoint_set.union(0, 1).unwrap();
        disjoint_set.union(1, 2).unwrap();
        let before = disjoint_set.clone();

        assert_eq!(disjoint_set.union(2, 0), Ok(false));
        assert_eq!(disjoint_set.size_of_set(0), Ok(3));
        assert_eq!(disjoint_set, before);
    }

    #[test]
    fn equal_sizes_keep_the_first_root() {
        let mut disjoint_set = DisjointSet::new(2);
        disjoint_set.union(0, 1).unwrap();

        assert_eq!(disjoint_set.find(1), Ok(0));
    }

    #[test]
    fn larger_tree_keeps_its_root() {
        let mut disjoint_set = DisjointSet::new(5);
        disjoint_set.union(0, 1).unwrap();
        disjoint_set.union(0, 2).unwrap();
        let root = disjoint_set.find(0).unwrap();

        disjoint_set.union(3, 0).unwrap();

        assert_eq!(disjoint_set.find(3), Ok(root));
        assert_eq!(disjoint_set.size_of_set(3), Ok(4));
    }

    #[test]
    fn find_halves_the_path() {
        // A chain 3 -> 2 -> 1 -> 0.
        let disjoint_set = from_parts(&[0, 0, 1, 2, 4], &[4, 1, 1, 1, 1]);

        assert_eq!(disjoint_set.find(3), Ok(0));
        assert_eq!(disjoint_set.meta[3].parent(), 1);
        assert_eq!(disjoint_set.meta[1].parent(), 0);

        assert_eq!(disjoint_set.find(3), Ok(0));
        assert_eq!(disjoint_set.meta[3].parent(), 0);
        assert_eq!(disjoint_set.find(2), Ok(0));
        assert_eq!(disjoint_set.meta[2].parent(), 0);
    }

    #[test]
    fn separate_components_can_be_merged() {
        let mut disjoint_set = DisjointSet::new(6);
        disjoint_set.union(0, 1).unwrap();
        disjoint_set.union(1, 2).unwrap();
        disjoint_set.union(3, 4).unwrap();
        disjoint_set.union(4, 5).unwrap();

        assert_eq!(disjoint_set.count_sets(), 2);
        assert_eq!(disjoint_set.is_connected(0, 2), Ok(true));
        assert_eq!(disjoint_set.is_connected(3, 5), Ok(true));
        assert_eq!(disjoint_set.is_connected(0, 3), Ok(false));

        disjoint_set.union(2, 3).unwrap();

        assert_eq!(disjoint_set.is_connected(0, 5), Ok(true));
        assert_eq!(disjoint_set.count_sets(), 1);
    }

    #[test]
    fn out_of_range_indices_are_errors() {
        let mut disjoint_set = DisjointSet::new(2);

        assert_eq!(disjoint_set.find(2), Err(Error::IndexOutOfRange { index: 2, len: 2 }));
        assert_eq!(disjoint_set.union(0, 9), Err(Error::IndexOutOfRange { index: 9, len: 2 }));
        assert_eq!(disjoint_set.is_connected(5, 0), Err(Error::IndexOutOfRange { index: 5, len: 2 }));
        assert_eq!(disjoint_set.count_sets(), 2);
    }

    #[test]
    fn debug_names_sets_in_order_of_appearance() {
        let mut disjoint_set = DisjointSet::new(4);
        disjoint_set.union(3, 1).unwrap();

        assert_eq!(format!("{:?}", disjoint_set), "[0 => 0, 1 => 1, 2 => 2, 3 => 1]");
    }

    #[test]
    fn equality_ignores_representatives() {
        let mut first = DisjointSet::new(3);
        first.union(0, 1).unwrap();
        let mut second = DisjointSet::new(3);
        second.union(1, 0).unwrap();
        let mut third = DisjointSet::new(3);
        third.union(1, 2).unwrap();

        assert_eq!(first, second);
        assert_ne!(first, third);
        assert_ne!(first, DisjointSet::new(3));
    }

    #[cfg(feature = "proptest")]
    proptest! {
        #[test]
        fn find_is_idempotent(disjoint_set in any_with::<DisjointSet>((0 .. 64).into())) {
            for i in 0 .. disjoint_set.len() {
                let root = disjoint_set.find(i).unwrap();
                prop_assert_eq!(disjoint_set.find(root).unwrap(), root);
            }
        }

        #[test]
        fn sizes_add_up_to_the_length(disjoint_set in any_with::<DisjointSet>((0 .. 64).into())) {
            let total: usize = (0 .. disjoint_set.len())
                .filter(|&i| disjoint_set.find(i).unwrap() == i)
                .map(|i| disjoint_set.size_of_set(i).unwrap())
                .sum();

            prop_assert_eq!(total, disjoint_set.len());
        }

        #[test]
        fn union_connects_both_indices(
            mut disjoint_set in any_with::<DisjointSet>((1 .. 64).into()),
            a in any::<prop::sample::Index>(),
            b in any::<prop::sample::Index>(),
        ) {
            let a = a.index(disjoint_set.len());
            let b = b.index(disjoint_set.len());
            let sets = disjoint_set.count_sets();
            let joined = disjoint_set.union(a, b).unwrap();

            prop_assert!(disjoint_set.is_connected(a, b).unwrap());
            prop_assert_eq!(disjoint_set.count_sets(), if joined { sets - 1 } else { sets });
            prop_assert!(!disjoint_set.union(a, b).unwrap());
        }
    }
}

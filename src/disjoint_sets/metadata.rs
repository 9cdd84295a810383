use std::cell::Cell;

/// This provides additional information about a given element in the `DisjointSet`.
///
/// For each element in the `DisjointSet` we store a `Metadata`.
/// The fields are cells so `find` can compress paths through a shared reference.
#[derive(Clone, Debug, Default)]
pub(crate) struct Metadata {
    /// The parent of the element in its sets tree.
    /// These form an upside down tree where each child has the index of its parent.
    parent: Cell<usize>,
    /// The amount of elements in the tree below this element.
    /// Only meaningful while the element is a root.
    size: Cell<usize>,
}

impl Metadata {
    /// Create a new `Metadata` for a singleton element with the given index.
    pub(crate) fn new(index: usize) -> Self {
        Self {
            parent: Cell::new(index),
            size: Cell::new(1),
        }
    }

    /// Return the `parent` variable.
    pub(crate) fn parent(&self) -> usize {
        self.parent.get()
    }

    /// Set the `parent` variable.
    pub(crate) fn set_parent(&self, value: usize) {
        self.parent.set(value);
    }

    /// Return the `size` variable.
    pub(crate) fn size(&self) -> usize {
        self.size.get()
    }

    /// Set the `size` variable.
    pub(crate) fn set_size(&self, value: usize) {
        self.size.set(value);
    }
}

#[cfg(test)]
mod tests {
    use super::Metadata;

    #[test]
    fn new_metadata_is_a_singleton_root() {
        let meta = Metadata::new(7);

        assert_eq!(meta.parent(), 7);
        assert_eq!(meta.size(), 1);
    }

    #[test]
    fn setters_go_through_a_shared_reference() {
        let meta = Metadata::new(0);
        let shared = &meta;

        shared.set_parent(3);
        shared.set_size(4);

        assert_eq!(meta.parent(), 3);
        assert_eq!(meta.size(), 4);
    }
}

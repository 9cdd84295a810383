//! Minimum spanning trees with [Boruvka's algorithm].
//!
//! Every round each component picks the cheapest edge that leaves it and all picked
//! edges are added at once, so the amount of components at least halves per round.
//! A connected graph with `n` vertices takes at most `⌈log2 n⌉` rounds of `O(m α(n))`
//! each, for `m` edges.
//!
//! [Boruvka's algorithm]: https://en.wikipedia.org/wiki/Bor%C5%AFvka%27s_algorithm

use {
    std::fmt,
    thiserror::Error,
    crate::{
        disjoint_sets::{
            disjoint_set::DisjointSet,
            UnionFind,
        },
        error::Error,
        graph::{self, Edge, Graph, Weight},
    },
};
#[cfg(feature = "rayon")]
use rayon::prelude::*;

/// The edges of a spanning tree together with their total weight.
///
/// The edges are in the order they were added to the tree.
#[derive(Clone, Debug, PartialEq)]
pub struct SpanningTree<V, W> {
    weight: W,
    edges: Vec<Edge<V, W>>,
}

impl<V, W> SpanningTree<V, W> {
    /// The sum of the weights of all edges.
    #[inline]
    pub fn weight(&self) -> W where W: Copy {
        self.weight
    }

    #[inline]
    pub fn edges(&self) -> &[Edge<V, W>] {
        &self.edges
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.edges.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    /// Returns the total weight and the edges.
    #[inline]
    pub fn into_parts(self) -> (W, Vec<Edge<V, W>>) {
        (self.weight, self.edges)
    }
}

impl<V, W> fmt::Display for SpanningTree<V, W> where
    V: fmt::Debug + PartialOrd,
    W: fmt::Debug + PartialOrd,
{
    fn fmt(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        writeln!(formatter, "MST edges (first, second, weight):")?;

        for edge in graph::sorted(&self.edges) {
            writeln!(formatter, "    {}", edge)?;
        }

        writeln!(formatter, "MST weight: {:?}", self.weight)
    }
}

/// The state of the computation after a round, as handed to an observer.
#[derive(Debug)]
pub struct Round<'a, V, W> {
    /// Starts at 1.
    pub number: usize,
    /// The weight of the edges selected so far.
    pub weight: W,
    /// The edges selected so far.
    pub edges: &'a [Edge<V, W>],
    /// The amount of components that are left.
    pub components: usize,
}

/// The ways computing a spanning tree can fail.
#[derive(Debug, Error)]
pub enum MstError<V, W> {
    /// Some components can not be reached from each other.
    ///
    /// `forest` holds the edges selected before this was detected.
    /// It spans every component but it is not a spanning tree.
    #[error("{error}")]
    Disconnected {
        error: Error,
        forest: SpanningTree<V, W>,
    },
    /// The union-find structure was misused or had the wrong size.
    #[error(transparent)]
    Invalid(#[from] Error),
}

impl<V, W> MstError<V, W> {
    /// The underlying error.
    pub fn error(&self) -> &Error {
        match self {
            MstError::Disconnected { error, .. } => error,
            MstError::Invalid(error) => error,
        }
    }

    /// The edges selected before the graph turned out to be disconnected.
    pub fn forest(&self) -> Option<&SpanningTree<V, W>> {
        match self {
            MstError::Disconnected { forest, .. } => Some(forest),
            MstError::Invalid(_) => None,
        }
    }
}

/// Computes minimum spanning trees, optionally reporting every round to an observer.
///
/// # Examples
///
/// ```
/// # #[macro_use]
/// # extern crate boruvka;
/// use boruvka::Boruvka;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let graph = graph![4; (0, 1, 1), (1, 2, 2), (2, 3, 3), (0, 3, 4)]?;
///
/// let mut rounds = Vec::new();
/// let tree = Boruvka::new()
///     .with_observer(|round| rounds.push((round.number, round.components)))
///     .find_mst(&graph)?;
///
/// assert_eq!(tree.weight(), 6);
/// assert_eq!(rounds.last(), Some(&(rounds.len(), 1)));
/// # Ok(())
/// # }
/// ```
pub struct Boruvka<'o, V, W> {
    observer: Option<Box<dyn FnMut(&Round<'_, V, W>) + 'o>>,
}

impl<'o, V, W> Boruvka<'o, V, W> where V: Clone + fmt::Debug, W: Weight {
    /// Creates a computation without an observer.
    pub fn new() -> Self {
        Self { observer: None }
    }

    /// Calls `observer` after every round.
    pub fn with_observer<F>(mut self, observer: F) -> Self where
        F: FnMut(&Round<'_, V, W>) + 'o,
    {
        self.observer = Some(Box::new(observer));
        self
    }

    /// Computes a minimum spanning tree of `graph`.
    ///
    /// # Errors
    ///
    /// [`MstError::Disconnected`] if the graph is not connected.
    ///
    /// [`MstError::Disconnected`]: enum.MstError.html#variant.Disconnected
    pub fn find_mst(&mut self, graph: &Graph<V, W>) -> Result<SpanningTree<V, W>, MstError<V, W>> {
        let mut disjoint_set = DisjointSet::new(graph.vertex_count());

        self.find_mst_with(graph, &mut disjoint_set)
    }

    /// Computes a minimum spanning tree of `graph` using `union_find` to track
    /// the components.
    ///
    /// `union_find` has to hold one index per vertex.
    /// Sets that are already joined count as a single component and no edge is
    /// selected between their vertices.
    ///
    /// # Errors
    ///
    /// [`Error::SizeMismatch`] if the length of `union_find` is not the amount of vertices,
    /// any error `union_find` returns,
    /// and [`MstError::Disconnected`] if the graph is not connected.
    ///
    /// [`Error::SizeMismatch`]: enum.Error.html#variant.SizeMismatch
    /// [`MstError::Disconnected`]: enum.MstError.html#variant.Disconnected
    pub fn find_mst_with<U>(
        &mut self,
        graph: &Graph<V, W>,
        union_find: &mut U,
    ) -> Result<SpanningTree<V, W>, MstError<V, W>> where
        U: UnionFind + ?Sized,
    {
        let len = graph.vertex_count();
        if union_find.len() != len {
            return Err(Error::SizeMismatch { expected: len, found: union_find.len() }.into())
        }

        let edges = graph.edges();
        let endpoints = graph.endpoints();

        let mut tree = SpanningTree {
            weight: W::zero(),
            edges: Vec::with_capacity(len.saturating_sub(1)),
        };
        let mut components = union_find.count_sets();
        let mut round = 0;

        // The index of the cheapest edge leaving each component, stored at its representative.
        let mut cheapest: Vec<Option<usize>> = vec![None; len];

        while components > 1 {
            round += 1;

            for slot in cheapest.iter_mut() {
                *slot = None;
            }

            let mut found = false;
            for (index, &(first, second)) in endpoints.iter().enumerate() {
                let i = union_find.find(first)?;
                let j = union_find.find(second)?;

                if i == j {
                    continue
                }

                let weight = edges[index].weight();
                for &root in &[i, j] {
                    let slot = cheapest
                        .get_mut(root)
                        .ok_or(Error::IndexOutOfRange { index: root, len })?;

                    // Only a strictly cheaper edge replaces, so the first of equal edges stays.
                    match *slot {
                        Some(current) if !(weight < edges[current].weight()) => {},
                        _ => {
                            *slot = Some(index);
                            found = true;
                        },
                    }
                }
            }

            if !found {
                log::warn!("no edge joins the {} remaining components after {} rounds", components, round - 1);

                return Err(MstError::Disconnected {
                    error: Error::DisconnectedGraph { components },
                    forest: tree,
                })
            }

            for &index in cheapest.iter().flatten() {
                let (first, second) = endpoints[index];

                // An earlier edge of this round may have joined these components already.
                if union_find.union(first, second)? {
                    let edge = &edges[index];
                    log::trace!("round {}: adding edge {:?}", round, edge);

                    tree.weight = tree.weight + edge.weight();
                    tree.edges.push(edge.clone());
                    components -= 1;
                }
            }

            log::debug!(
                "round {}: {} edges with weight {:?}, {} components left",
                round,
                tree.edges.len(),
                tree.weight,
                components,
            );

            if let Some(observer) = self.observer.as_mut() {
                observer(&Round {
                    number: round,
                    weight: tree.weight,
                    edges: &tree.edges,
                    components,
                });
            }
        }

        Ok(tree)
    }
}

impl<'o, V, W> Default for Boruvka<'o, V, W> where V: Clone + fmt::Debug, W: Weight {
    fn default() -> Self {
        Self::new()
    }
}

impl<'o, V, W> fmt::Debug for Boruvka<'o, V, W> {
    fn fmt(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.debug_struct("Boruvka")
            .field("observer", &self.observer.is_some())
            .finish()
    }
}

/// Computes a minimum spanning tree of `graph` with Boruvka's algorithm.
///
/// Among edges of equal weight the one added to the graph first is preferred,
/// so the result is the same every time for the same graph.
///
/// # Errors
///
/// [`MstError::Disconnected`] if the graph is not connected.
///
/// # Examples
///
/// ```
/// use boruvka::{find_mst, Edge, Graph};
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let mut graph = Graph::new(3);
/// graph.add_edge(0, 1, 1)?;
/// graph.add_edge(1, 2, 2)?;
/// graph.add_edge(0, 2, 3)?;
///
/// let tree = find_mst(&graph)?;
///
/// assert_eq!(tree.weight(), 3);
/// assert!(!tree.edges().contains(&Edge::new(0, 2, 3)));
///
/// let disconnected: Graph<usize, u32> = Graph::new(2);
/// assert!(find_mst(&disconnected).is_err());
/// # Ok(())
/// # }
/// ```
///
/// [`MstError::Disconnected`]: enum.MstError.html#variant.Disconnected
pub fn find_mst<V, W>(graph: &Graph<V, W>) -> Result<SpanningTree<V, W>, MstError<V, W>> where
    V: Clone + fmt::Debug,
    W: Weight,
{
    Boruvka::new().find_mst(graph)
}

/// Computes a minimum spanning tree of `graph` using `union_find` to track the components.
///
/// See [`Boruvka::find_mst_with`] for the requirements on `union_find`.
///
/// [`Boruvka::find_mst_with`]: struct.Boruvka.html#method.find_mst_with
pub fn find_mst_with<V, W, U>(
    graph: &Graph<V, W>,
    union_find: &mut U,
) -> Result<SpanningTree<V, W>, MstError<V, W>> where
    V: Clone + fmt::Debug,
    W: Weight,
    U: UnionFind + ?Sized,
{
    Boruvka::new().find_mst_with(graph, union_find)
}

/// Computes the minimum spanning trees of independent graphs in parallel.
///
/// The results are in the same order as `graphs`.
#[cfg(feature = "rayon")]
pub fn par_find_mst<V, W>(graphs: &[Graph<V, W>]) -> Vec<Result<SpanningTree<V, W>, MstError<V, W>>> where
    V: Clone + fmt::Debug + Send + Sync,
    W: Weight + Send + Sync,
{
    graphs.par_iter().map(|graph| find_mst(graph)).collect()
}

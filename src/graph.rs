//! Undirected graphs with weighted edges.
//!
//! See [`Graph<V, W>`] for more information.
//!
//! [`Graph<V, W>`]: struct.Graph.html

use {
    std::{
        cmp::Ordering,
        collections::HashMap,
        fmt,
        hash::Hash,
    },
    num_traits::Zero,
    crate::error::{Error, Result},
};
#[cfg(feature = "rayon")]
use rayon::prelude::*;
#[cfg(feature = "proptest")]
use proptest::prelude::*;

/// The requirements on the weight of an edge.
///
/// This is implemented for every type that can be copied, compared and added,
/// which covers the integer and floating point primitives.
pub trait Weight: Copy + PartialOrd + Zero + fmt::Debug {}

impl<W> Weight for W where W: Copy + PartialOrd + Zero + fmt::Debug {}

/// An undirected edge between two vertices with a weight.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Edge<V, W> {
    first: V,
    second: V,
    weight: W,
}

impl<V, W> Edge<V, W> {
    /// Creates an edge from `first` to `second`.
    #[inline]
    pub fn new(first: V, second: V, weight: W) -> Self {
        Self { first, second, weight }
    }

    /// The vertex the edge was added from.
    #[inline]
    pub fn first(&self) -> &V {
        &self.first
    }

    /// The vertex the edge was added to.
    #[inline]
    pub fn second(&self) -> &V {
        &self.second
    }

    #[inline]
    pub fn weight(&self) -> W where W: Copy {
        self.weight
    }

    /// Returns `true` if the edge starts and ends in the same vertex.
    #[inline]
    pub fn is_loop(&self) -> bool where V: PartialEq {
        self.first == self.second
    }

    #[inline]
    pub fn into_tuple(self) -> (V, V, W) {
        (self.first, self.second, self.weight)
    }
}

/// Shows the edge as a tuple of its vertices and weight.
impl<V, W> fmt::Display for Edge<V, W> where V: fmt::Debug, W: fmt::Debug {
    fn fmt(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        write!(formatter, "({:?}, {:?}, {:?})", self.first, self.second, self.weight)
    }
}

impl<V, W> From<(V, V, W)> for Edge<V, W> {
    fn from((first, second, weight): (V, V, W)) -> Self {
        Self::new(first, second, weight)
    }
}

impl<V, W> From<Edge<V, W>> for (V, V, W) {
    fn from(edge: Edge<V, W>) -> Self {
        edge.into_tuple()
    }
}

/// An undirected graph with a fixed set of vertices and a list of weighted edges.
///
/// The vertices can be any hashable identifiers.
/// Each vertex is given a dense index in the order the vertices were supplied,
/// which is what the spanning tree algorithm works with.
/// The edges are kept in the order they were added.
///
/// Edges are only accepted between known vertices.
/// Loops and parallel edges are accepted.
///
/// # Examples
///
/// ```
/// use boruvka::{Edge, Graph};
///
/// # fn main() -> Result<(), boruvka::Error> {
/// let mut graph = Graph::new(3);
/// graph.add_edge(0, 1, 4)?;
/// graph.add_edge(1, 2, 7)?;
///
/// assert_eq!(graph.vertices(), &[0, 1, 2]);
/// assert_eq!(graph.edges(), &[Edge::new(0, 1, 4), Edge::new(1, 2, 7)]);
///
/// // Vertex 3 does not exist.
/// assert!(graph.add_edge(2, 3, 1).is_err());
/// assert_eq!(graph.edge_count(), 2);
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Debug)]
pub struct Graph<V, W> {
    vertices: Vec<V>,
    /// Maps each vertex to its position in `vertices`.
    indices: HashMap<V, usize>,
    edges: Vec<Edge<V, W>>,
    /// The indices of the vertices of each edge, this vec will always have the same size as `edges`.
    endpoints: Vec<(usize, usize)>,
}

/// Creates a [`Graph`] with the vertices `0 .. len` and the given edges.
///
/// This expands to a call of [`Graph::from_edges`] so it evaluates to a `Result`.
///
/// ```
/// # #[macro_use]
/// # extern crate boruvka;
/// #
/// # fn main() -> Result<(), boruvka::Error> {
/// let graph = graph![3; (0, 1, 1), (1, 2, 2), (0, 2, 3)]?;
///
/// assert_eq!(graph.vertex_count(), 3);
/// assert_eq!(graph.edge_count(), 3);
///
/// assert!(graph![2; (0, 2, 1)].is_err());
/// # Ok(())
/// # }
/// ```
///
/// [`Graph`]: graph/struct.Graph.html
/// [`Graph::from_edges`]: graph/struct.Graph.html#method.from_edges
#[macro_export]
macro_rules! graph {
    ($len: expr; $(($first: expr, $second: expr, $weight: expr)),* $(,)*) => {
        $crate::Graph::from_edges($len, vec![$(($first, $second, $weight)),*])
    };
}

impl<V, W> Graph<V, W> {
    /// The vertices in the order they were supplied.
    #[inline]
    pub fn vertices(&self) -> &[V] {
        &self.vertices
    }

    /// The edges in the order they were added.
    #[inline]
    pub fn edges(&self) -> &[Edge<V, W>] {
        &self.edges
    }

    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    #[inline]
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// The dense vertex indices of each edge.
    #[inline]
    pub(crate) fn endpoints(&self) -> &[(usize, usize)] {
        &self.endpoints
    }
}

impl<W> Graph<usize, W> {
    /// Constructs a graph with the vertices `0 .. len` and no edges.
    pub fn new(len: usize) -> Self {
        Self {
            vertices: (0 .. len).collect(),
            indices: (0 .. len).map(|vertex| (vertex, vertex)).collect(),
            edges: Vec::new(),
            endpoints: Vec::new(),
        }
    }

    /// Constructs a graph with the vertices `0 .. len` and adds the `edges` in order.
    ///
    /// # Errors
    ///
    /// If an edge has a vertex that is not below `len`.
    pub fn from_edges<I>(len: usize, edges: I) -> Result<Self> where
        I: IntoIterator<Item = (usize, usize, W)>,
    {
        let mut graph = Self::new(len);

        for (first, second, weight) in edges {
            graph.add_edge(first, second, weight)?;
        }

        Ok(graph)
    }
}

impl<V, W> Graph<V, W> where V: Clone + Eq + Hash + fmt::Debug {
    /// Constructs a graph with the given vertices and no edges.
    ///
    /// # Errors
    ///
    /// If a vertex occurs more than once.
    ///
    /// # Examples
    ///
    /// ```
    /// use boruvka::{Error, Graph};
    ///
    /// # fn main() -> Result<(), Error> {
    /// let mut graph = Graph::with_vertices(vec!["a", "b", "c"])?;
    /// graph.add_edge("a", "c", 2.5)?;
    ///
    /// assert_eq!(graph.index_of(&"c"), Some(2));
    /// assert_eq!(graph.add_edge("a", "d", 1.0), Err(Error::InvalidVertex("\"d\"".to_string())));
    ///
    /// assert!(Graph::<_, f64>::with_vertices(vec!["a", "a"]).is_err());
    /// # Ok(())
    /// # }
    /// ```
    pub fn with_vertices<I>(vertices: I) -> Result<Self> where I: IntoIterator<Item = V> {
        let vertices: Vec<V> = vertices.into_iter().collect();
        let mut indices = HashMap::with_capacity(vertices.len());

        for (index, vertex) in vertices.iter().enumerate() {
            if indices.insert(vertex.clone(), index).is_some() {
                return Err(Error::DuplicateVertex(format!("{:?}", vertex)))
            }
        }

        Ok(Self {
            vertices,
            indices,
            edges: Vec::new(),
            endpoints: Vec::new(),
        })
    }

    /// Returns the dense index of `vertex`.
    #[inline]
    pub fn index_of(&self, vertex: &V) -> Option<usize> {
        self.indices.get(vertex).copied()
    }

    #[inline]
    pub fn contains_vertex(&self, vertex: &V) -> bool {
        self.indices.contains_key(vertex)
    }

    /// Adds an edge between `first` and `second` at the end of the edge list.
    ///
    /// # Errors
    ///
    /// If `first` or `second` is not a vertex of the graph.
    /// The graph is not changed in that case.
    pub fn add_edge(&mut self, first: V, second: V, weight: W) -> Result<()> {
        let first_index = self.vertex_index(&first)?;
        let second_index = self.vertex_index(&second)?;

        self.edges.push(Edge::new(first, second, weight));
        self.endpoints.push((first_index, second_index));

        Ok(())
    }

    fn vertex_index(&self, vertex: &V) -> Result<usize> {
        self.index_of(vertex).ok_or_else(|| Error::InvalidVertex(format!("{:?}", vertex)))
    }
}

/// Lists the vertices and then the edges sorted by their vertices.
impl<V, W> fmt::Display for Graph<V, W> where
    V: fmt::Debug + PartialOrd,
    W: fmt::Debug + PartialOrd,
{
    fn fmt(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        writeln!(formatter, "Vertices: {:?}", self.vertices)?;
        writeln!(formatter, "Edges (first, second, weight):")?;

        for edge in sorted(&self.edges) {
            writeln!(formatter, "    {}", edge)?;
        }

        Ok(())
    }
}

/// Returns references to `edges` sorted by vertices and then weight.
pub(crate) fn sorted<V, W>(edges: &[Edge<V, W>]) -> Vec<&Edge<V, W>> where
    V: PartialOrd,
    W: PartialOrd,
{
    let mut sorted: Vec<_> = edges.iter().collect();
    sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(Ordering::Equal));
    sorted
}

#[cfg(feature = "rayon")]
impl<'a, V, W> IntoParallelIterator for &'a Graph<V, W> where V: Sync, W: Sync {
    type Item = &'a Edge<V, W>;
    type Iter = rayon::slice::Iter<'a, Edge<V, W>>;

    fn into_par_iter(self) -> Self::Iter {
        self.edges.par_iter()
    }
}

/// A strategy for connected graphs with the vertices `0 .. n` where `n - 1` is
/// drawn from `size_range`, and weights drawn from `weights`.
///
/// Each vertex after the first gets an edge to a random earlier vertex, which makes
/// the graph connected. Then up to as many random extra edges are added, loops and
/// parallel edges included.
#[cfg(feature = "proptest")]
pub fn connected_graphs<S>(
    size_range: proptest::collection::SizeRange,
    weights: S,
) -> BoxedStrategy<Graph<usize, S::Value>> where
    S: Strategy + Clone + 'static,
    S::Value: Weight + 'static,
{
    use proptest::{collection::vec, sample::Index};

    let tree = vec((any::<Index>(), weights.clone()), size_range.clone());
    let extra = vec((any::<Index>(), any::<Index>(), weights), size_range);

    (tree, extra).prop_map(|(tree, extra)| {
        let len = tree.len() + 1;
        let mut graph = Graph::new(len);

        let tree = tree.into_iter()
            .enumerate()
            .map(|(index, (parent, weight))| (parent.index(index + 1), index + 1, weight));
        let extra = extra.into_iter()
            .map(|(first, second, weight)| (first.index(len), second.index(len), weight));

        for (first, second, weight) in tree.chain(extra) {
            // Both vertices are below `len`.
            let _ = graph.add_edge(first, second, weight);
        }

        graph
    }).boxed()
}

#[cfg(test)]
mod tests {
    use super::*;
    #[cfg(feature = "proptest")]
    use proptest::prelude::*;

    #[test]
    fn new_graph_has_vertices_and_no_edges() {
        let graph: Graph<usize, u32> = Graph::new(5);

        assert_eq!(graph.vertex_count(), 5);
        assert_eq!(graph.vertices(), &[0, 1, 2, 3, 4]);
        assert_eq!(graph.edge_count(), 0);
        assert_eq!(graph.index_of(&4), Some(4));
    }

    #[test]
    fn add_edge_keeps_insertion_order() {
        let mut graph = Graph::new(9);
        graph.add_edge(0, 1, 4).unwrap();
        graph.add_edge(7, 8, 3).unwrap();
        graph.add_edge(2, 2, 1).unwrap();
        graph.add_edge(0, 1, 4).unwrap();

        let edges: Vec<_> = graph.edges().iter().map(|edge| edge.into_tuple()).collect();
        assert_eq!(edges, vec![(0, 1, 4), (7, 8, 3), (2, 2, 1), (0, 1, 4)]);
        assert_eq!(graph.endpoints(), &[(0, 1), (7, 8), (2, 2), (0, 1)]);
        assert!(graph.edges()[2].is_loop());
    }

    #[test]
    fn invalid_vertices_leave_the_graph_unchanged() {
        let mut graph = Graph::new(9);
        graph.add_edge(0, 1, 4).unwrap();

        assert_eq!(graph.add_edge(10, 11, 5), Err(Error::InvalidVertex("10".to_string())));
        assert_eq!(graph.add_edge(3, 9, 5), Err(Error::InvalidVertex("9".to_string())));
        assert_eq!(graph.edge_count(), 1);
        assert_eq!(graph.endpoints().len(), 1);
    }

    #[test]
    fn from_edges_stops_at_the_first_invalid_edge() {
        let result = Graph::from_edges(2, vec![(0, 1, 1), (1, 2, 1)]);

        assert_eq!(result.unwrap_err(), Error::InvalidVertex("2".to_string()));
    }

    #[test]
    fn explicit_vertices_get_dense_indices() {
        let mut graph = Graph::with_vertices(vec!['x', 'y', 'z']).unwrap();
        graph.add_edge('z', 'x', 3).unwrap();

        assert_eq!(graph.index_of(&'y'), Some(1));
        assert!(!graph.contains_vertex(&'w'));
        assert_eq!(graph.endpoints(), &[(2, 0)]);
        assert_eq!(graph.edges()[0].first(), &'z');
        assert_eq!(graph.edges()[0].second(), &'x');
    }

    #[test]
    fn duplicate_vertices_are_rejected() {
        let result = Graph::<_, u8>::with_vertices(vec![1, 2, 1]);

        assert_eq!(result.unwrap_err(), Error::DuplicateVertex("1".to_string()));
    }

    #[test]
    fn display_sorts_the_edges() {
        let graph = graph![3; (1, 2, 2), (0, 2, 3), (0, 1, 1)].unwrap();

        assert_eq!(
            graph.to_string(),
            "Vertices: [0, 1, 2]\n\
             Edges (first, second, weight):\n    \
             (0, 1, 1)\n    \
             (0, 2, 3)\n    \
             (1, 2, 2)\n",
        );
    }

    #[test]
    fn edges_convert_from_and_into_tuples() {
        let edge: Edge<u8, i32> = (1, 2, -3).into();

        assert_eq!(edge.weight(), -3);
        assert_eq!(edge.to_string(), "(1, 2, -3)");
        assert_eq!(<(u8, u8, i32)>::from(edge), (1, 2, -3));
    }

    #[cfg(feature = "rayon")]
    #[test]
    fn parallel_iteration_visits_every_edge() {
        let graph = graph![4; (0, 1, 1), (1, 2, 2), (2, 3, 3)].unwrap();

        let total: i32 = graph.into_par_iter().map(|edge| edge.weight()).sum();
        assert_eq!(total, 6);
    }

    #[cfg(feature = "proptest")]
    proptest! {
        #[test]
        fn generated_graphs_have_a_spanning_edge_per_vertex(
            graph in connected_graphs((0 .. 32).into(), 0u32 .. 10),
        ) {
            prop_assert!(graph.vertex_count() >= 1);
            prop_assert!(graph.edge_count() >= graph.vertex_count() - 1);
            for &(first, second) in graph.endpoints() {
                prop_assert!(first < graph.vertex_count());
                prop_assert!(second < graph.vertex_count());
            }
        }
    }
}

//! [Minimum spanning trees] of weighted undirected graphs with [Boruvka's algorithm],
//! built on a [disjoint-sets/union-find] structure.
//!
//! A [`Graph<V, W>`] holds a fixed set of vertices and a list of weighted edges.
//! [`find_mst`] repeatedly lets every component of the graph pick the cheapest edge
//! that leaves it, and joins the components along those edges until one is left.
//! The components are tracked with a [`DisjointSet`], which can be replaced by any
//! other implementation of [`UnionFind`] through [`find_mst_with`].
//!
//! Among edges of equal weight the edge that was added to the graph first wins,
//! so the same graph always gives the same tree.
//! When a graph has several minimum spanning trees only the total weight is unique.
//!
//! ```
//! # #[macro_use]
//! # extern crate boruvka;
//! #
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let graph = graph![4; (0, 1, 1), (1, 2, 2), (2, 3, 3), (3, 0, 4)]?;
//!
//! let tree = boruvka::find_mst(&graph)?;
//! assert_eq!(tree.weight(), 6);
//! assert_eq!(tree.len(), 3);
//! # Ok(())
//! # }
//! ```
//!
//! A graph that is not connected has no spanning tree and gives an error that
//! still holds the edges selected so far.
//!
//! The computation does not print anything.
//! Progress is reported through the [`log`] crate and through an observer that can
//! be installed with [`Boruvka::with_observer`].
//!
//! The features `rayon` and `proptest` are enabled by default.
//! The first allows solving independent graphs in parallel with `par_find_mst`,
//! the second provides strategies for generating disjoint sets and connected graphs.
//!
//! [Minimum spanning trees]: https://en.wikipedia.org/wiki/Minimum_spanning_tree
//! [Boruvka's algorithm]: https://en.wikipedia.org/wiki/Bor%C5%AFvka%27s_algorithm
//! [disjoint-sets/union-find]: https://en.wikipedia.org/wiki/Disjoint-set_data_structure
//! [`Graph<V, W>`]: graph/struct.Graph.html
//! [`find_mst`]: fn.find_mst.html
//! [`find_mst_with`]: fn.find_mst_with.html
//! [`DisjointSet`]: disjoint_sets/disjoint_set/struct.DisjointSet.html
//! [`UnionFind`]: disjoint_sets/trait.UnionFind.html
//! [`Boruvka::with_observer`]: struct.Boruvka.html#method.with_observer
//! [`log`]: https://docs.rs/log

pub mod error;
pub mod disjoint_sets;
#[macro_use]
pub mod graph;
pub mod boruvka;

pub use {
    boruvka::{find_mst, find_mst_with, Boruvka, MstError, Round, SpanningTree},
    disjoint_sets::{disjoint_set::DisjointSet, UnionFind},
    error::{Error, Result},
    graph::{Edge, Graph, Weight},
};
#[cfg(feature = "rayon")]
pub use boruvka::par_find_mst;

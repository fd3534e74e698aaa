//! A graph over a fixed number of vertices, stored as one sorted list of edge ends per vertex.
//!
//! Whether edges have a direction is chosen by the [`Orientation`] parameter. An unoriented graph
//! stores each edge once, in the row of its smaller endpoint, so adding `(1, 0)` after `(0, 1)`
//! is a duplicate.
//!
//! ```
//! use classic_ds::graph::{AdjacencyList, Oriented};
//!
//! // Graphs are unoriented unless asked otherwise.
//! let mut unoriented: AdjacencyList = AdjacencyList::new(3);
//! assert_eq!(unoriented.add_edge(0, 1), Ok(true));
//! assert_eq!(unoriented.add_edge(1, 0), Ok(false));
//!
//! let mut oriented = AdjacencyList::<Oriented>::new(3);
//! assert_eq!(oriented.add_edge(0, 1), Ok(true));
//! assert_eq!(oriented.add_edge(1, 0), Ok(true));
//! assert_eq!(oriented.edges(), 2);
//! ```

use std::cmp::Ordering;
use std::fmt;
use std::marker::PhantomData;

use log::debug;
use thiserror::Error;

use crate::list::SingleList;

/// Errors reported by [`AdjacencyList`].
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum GraphError {
    /// A vertex index was not below the number of vertices.
    #[error("vertex {vertex} is out of range for a graph with {vertices} vertices")]
    VertexOutOfRange {
        /// The offending index.
        vertex: usize,
        /// The number of vertices in the graph.
        vertices: usize,
    },
}

mod private {
    pub trait Sealed {}
}

/// How an edge's endpoints are stored.
pub trait Orientation: private::Sealed {
    /// The `(row, column)` an edge between `i` and `j` is stored at.
    #[doc(hidden)]
    fn normalize(i: usize, j: usize) -> (usize, usize);
}

/// Edges go from their first endpoint to their second.
#[derive(Clone, Copy, Debug, Default)]
pub struct Oriented;

/// Edges have no direction.
#[derive(Clone, Copy, Debug, Default)]
pub struct Unoriented;

impl private::Sealed for Oriented {}
impl private::Sealed for Unoriented {}

impl Orientation for Oriented {
    fn normalize(i: usize, j: usize) -> (usize, usize) {
        (i, j)
    }
}

impl Orientation for Unoriented {
    fn normalize(i: usize, j: usize) -> (usize, usize) {
        (i.min(j), i.max(j))
    }
}

/// An adjacency-list graph with a fixed vertex count.
pub struct AdjacencyList<O = Unoriented> {
    rows: Vec<SingleList<usize>>,
    edges: usize,
    orientation: PhantomData<O>,
}

impl<O: Orientation> AdjacencyList<O> {
    /// Creates a graph with `vertices` vertices and no edges.
    pub fn new(vertices: usize) -> Self {
        debug!("creating adjacency list with {} vertices", vertices);
        Self {
            rows: (0..vertices).map(|_| SingleList::new()).collect(),
            edges: 0,
            orientation: PhantomData,
        }
    }

    /// The number of vertices.
    pub fn vertices(&self) -> usize {
        self.rows.len()
    }

    /// The number of distinct edges added so far.
    pub fn edges(&self) -> usize {
        self.edges
    }

    /// Adds an edge between `i` and `j`. Self-loops are allowed.
    ///
    /// Returns `Ok(false)` if the edge is already present.
    pub fn add_edge(&mut self, i: usize, j: usize) -> Result<bool, GraphError> {
        self.check(i)?;
        self.check(j)?;
        let (row, column) = O::normalize(i, j);
        let added = insert_sorted(&mut self.rows[row], column);
        if added {
            self.edges += 1;
        }
        Ok(added)
    }

    /// Whether there is an edge between `i` and `j`.
    pub fn has_edge(&self, i: usize, j: usize) -> Result<bool, GraphError> {
        self.check(i)?;
        self.check(j)?;
        let (row, column) = O::normalize(i, j);
        Ok(self.rows[row]
            .iter()
            .take_while(|&&end| end <= column)
            .any(|&end| end == column))
    }

    /// The ends of the edges stored in `i`'s row, in ascending order.
    ///
    /// For an unoriented graph this only includes neighbors not smaller than `i`.
    pub fn neighbors(&self, i: usize) -> Result<impl Iterator<Item = usize> + '_, GraphError> {
        self.check(i)?;
        Ok(self.rows[i].iter().copied())
    }

    fn check(&self, vertex: usize) -> Result<(), GraphError> {
        if vertex < self.vertices() {
            Ok(())
        } else {
            Err(GraphError::VertexOutOfRange {
                vertex,
                vertices: self.vertices(),
            })
        }
    }
}

impl<O> fmt::Debug for AdjacencyList<O> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.rows.iter().enumerate()).finish()
    }
}

/// Inserts `end` into the ascending `row` unless it's already there.
fn insert_sorted(row: &mut SingleList<usize>, end: usize) -> bool {
    let mut cursor = row.cursor_mut();
    while let Some(current) = cursor.current().copied() {
        match current.cmp(&end) {
            Ordering::Less => cursor.move_next(),
            Ordering::Equal => return false,
            Ordering::Greater => break,
        }
    }
    cursor.insert_before(end);
    true
}

use crate::error::{ExploreError, Result};
use crate::geom::Point;
use std::collections::{HashMap, VecDeque};

/// Undirected graph of cells the droid has stood on.
///
/// Vertices and edges are only ever added. Neighbour lists keep insertion
/// order so searches over the same graph always visit cells in the same order.
#[derive(Debug, Clone)]
pub struct ExplorationGraph {
    adjacency: HashMap<Point, Vec<Point>>,
    edge_count: usize,
}

impl ExplorationGraph {
    pub fn new(start: Point) -> Self {
        let mut adjacency = HashMap::new();
        adjacency.insert(start, Vec::new());
        Self {
            adjacency,
            edge_count: 0,
        }
    }

    /// Returns `false` if the vertex was already present.
    pub fn add_vertex(&mut self, p: Point) -> bool {
        if self.adjacency.contains_key(&p) {
            return false;
        }
        self.adjacency.insert(p, Vec::new());
        true
    }

    /// Links two grid-adjacent vertices. Adding an existing edge is a no-op.
    pub fn add_edge(&mut self, a: Point, b: Point) -> Result<()> {
        if !a.is_adjacent(b) {
            return Err(ExploreError::InvalidEdge {
                a,
                b,
                reason: "cells are not adjacent",
            });
        }
        if !self.contains(a) || !self.contains(b) {
            return Err(ExploreError::InvalidEdge {
                a,
                b,
                reason: "endpoint is not a vertex",
            });
        }
        if self.has_edge(a, b) {
            return Ok(());
        }
        if let Some(list) = self.adjacency.get_mut(&a) {
            list.push(b);
        }
        if let Some(list) = self.adjacency.get_mut(&b) {
            list.push(a);
        }
        self.edge_count += 1;
        Ok(())
    }

    pub fn contains(&self, p: Point) -> bool {
        self.adjacency.contains_key(&p)
    }

    pub fn has_edge(&self, a: Point, b: Point) -> bool {
        self.adjacency
            .get(&a)
            .is_some_and(|list| list.contains(&b))
    }

    pub fn neighbours(&self, p: Point) -> &[Point] {
        self.adjacency.get(&p).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn vertices(&self) -> impl Iterator<Item = Point> + '_ {
        self.adjacency.keys().copied()
    }

    pub fn vertex_count(&self) -> usize {
        self.adjacency.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// Breadth-first search from `source` over unit-weight edges.
    pub fn shortest_paths(&self, source: Point) -> Result<ShortestPaths> {
        if !self.contains(source) {
            return Err(ExploreError::UnknownVertex(source));
        }
        let mut distances = HashMap::new();
        let mut parents = HashMap::new();
        let mut queue = VecDeque::new();
        distances.insert(source, 0usize);
        queue.push_back(source);

        while let Some(u) = queue.pop_front() {
            let d = distances[&u];
            for &v in self.neighbours(u) {
                if distances.contains_key(&v) {
                    continue;
                }
                distances.insert(v, d + 1);
                parents.insert(v, u);
                queue.push_back(v);
            }
        }

        Ok(ShortestPaths {
            source,
            distances,
            parents,
        })
    }
}

/// Search tree produced by [`ExplorationGraph::shortest_paths`].
#[derive(Debug, Clone)]
pub struct ShortestPaths {
    source: Point,
    distances: HashMap<Point, usize>,
    parents: HashMap<Point, Point>,
}

impl ShortestPaths {
    pub fn source(&self) -> Point {
        self.source
    }

    pub fn distance_to(&self, target: Point) -> Option<usize> {
        self.distances.get(&target).copied()
    }

    /// Vertex path `source ..= target`, or `None` if `target` was not reached.
    pub fn path_to(&self, target: Point) -> Option<Vec<Point>> {
        if !self.distances.contains_key(&target) {
            return None;
        }
        let mut path = vec![target];
        let mut current = target;
        while current != self.source {
            current = *self.parents.get(&current)?;
            path.push(current);
        }
        path.reverse();
        Some(path)
    }

    /// Longest distance found, 0 if only the source was reached.
    pub fn max_distance(&self) -> usize {
        self.distances.values().copied().max().unwrap_or(0)
    }

    pub fn reached(&self) -> usize {
        self.distances.len()
    }
}

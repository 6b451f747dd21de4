//! Shortest-path queries over a finished [`ExplorationGraph`].

use crate::error::{ExploreError, Result};
use crate::geom::Point;
use crate::graph::ExplorationGraph;
use serde::{Deserialize, Serialize};

/// Number of edges on a shortest path between two vertices.
pub fn distance(graph: &ExplorationGraph, from: Point, to: Point) -> Result<usize> {
    if !graph.contains(to) {
        return Err(ExploreError::UnknownVertex(to));
    }
    graph
        .shortest_paths(from)?
        .distance_to(to)
        .ok_or(ExploreError::Unreachable { from, to })
}

/// Greatest shortest-path distance from `from` to any other vertex.
/// A single-vertex graph has eccentricity 0.
pub fn eccentricity(graph: &ExplorationGraph, from: Point) -> Result<usize> {
    Ok(graph.shortest_paths(from)?.max_distance())
}

/// The two figures reported at the end of a survey.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SurveyReport {
    pub goal: Point,
    pub distance_to_goal: usize,
    pub goal_eccentricity: usize,
    pub cells: usize,
}

use crate::geom::{Direction, Point};

#[derive(Debug, thiserror::Error)]
pub enum ExploreError {
    /// No confirmed cell next to `target` can be reached from the droid.
    #[error("no route from {from} to any known neighbour of {target}")]
    NoRoute { from: Point, target: Point },

    #[error("move {direction} from {from} hit a wall on a confirmed edge")]
    PlanDiverged { from: Point, direction: Direction },

    #[error("droid reports position {actual}, expected {expected}")]
    PositionMismatch { expected: Point, actual: Point },

    #[error("cannot link {a} and {b}: {reason}")]
    InvalidEdge { a: Point, b: Point, reason: &'static str },

    #[error("exploration finished without finding the goal")]
    GoalNotFound,

    #[error("{0} is not a vertex of the exploration graph")]
    UnknownVertex(Point),

    #[error("{to} is not reachable from {from}")]
    Unreachable { from: Point, to: Point },

    #[error("unknown move outcome code {0}")]
    UnknownOutcome(i64),

    #[error("droid already released")]
    Released,

    #[error(transparent)]
    Droid(#[from] anyhow::Error),
}

pub type Result<T, E = ExploreError> = std::result::Result<T, E>;

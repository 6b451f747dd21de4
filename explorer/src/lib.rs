pub mod analyzer;
pub mod droid;
pub mod error;
pub mod explorer;
pub mod geom;
pub mod graph;
pub mod mock_droid;

pub use analyzer::SurveyReport;
pub use droid::{Droid, MoveOutcome};
pub use error::ExploreError;
pub use explorer::{ExplorationStats, Explorer, RunState};
pub use geom::{Direction, Point};
pub use graph::ExplorationGraph;

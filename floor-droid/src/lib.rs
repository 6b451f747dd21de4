//! A droid whose engine runs a floor-plan program on its own tokio task.

mod droid;
mod floor_plan;
mod worker;

pub use droid::{FloorDroid, SpawnError};
pub use floor_plan::{FloorPlan, FloorPlanError};

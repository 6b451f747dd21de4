use crate::analyzer::{self, SurveyReport};
use crate::droid::{Droid, MoveOutcome};
use crate::error::{ExploreError, Result};
use crate::geom::{directions_along, Direction, Point};
use crate::graph::ExplorationGraph;
use std::collections::HashSet;
use tracing::{debug, info, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunState {
    NotStarted,
    Complete,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExplorationStats {
    /// Moves sent to the droid, walls included.
    pub moves: usize,
    pub walls: usize,
    pub cells: usize,
    /// Plans that needed more than one move.
    pub backtracks: usize,
}

/// Maps the region reachable by a droid and answers distance queries on it.
///
/// The droid is owned for a single run and released once the frontier
/// drains (or the run fails). Later calls to [`Explorer::explore`] are no-ops.
pub struct Explorer {
    droid: Option<Box<dyn Droid>>,
    start: Point,
    pub graph: ExplorationGraph,
    pub frontier: Vec<Point>,
    pub visited: HashSet<Point>,
    goal: Option<Point>,
    state: RunState,
    stats: ExplorationStats,
}

impl Explorer {
    pub fn new(droid: Box<dyn Droid>) -> Self {
        let start = droid.position();
        Self {
            droid: Some(droid),
            start,
            graph: ExplorationGraph::new(start),
            frontier: start.neighbours().to_vec(),
            visited: HashSet::new(),
            goal: None,
            state: RunState::NotStarted,
            stats: ExplorationStats {
                cells: 1,
                ..Default::default()
            },
        }
    }

    pub fn start(&self) -> Point {
        self.start
    }

    pub fn goal(&self) -> Option<Point> {
        self.goal
    }

    pub fn state(&self) -> RunState {
        self.state
    }

    pub fn stats(&self) -> ExplorationStats {
        self.stats
    }

    pub async fn explore(&mut self) -> Result<()> {
        if self.state == RunState::Complete {
            return Ok(());
        }

        let outcome = self.drain_frontier().await;
        let released = self.release_droid().await;
        outcome?;
        released?;

        self.state = RunState::Complete;
        info!(
            cells = self.graph.vertex_count(),
            edges = self.graph.edge_count(),
            moves = self.stats.moves,
            walls = self.stats.walls,
            backtracks = self.stats.backtracks,
            goal = ?self.goal,
            "exploration complete"
        );
        Ok(())
    }

    async fn drain_frontier(&mut self) -> Result<()> {
        while let Some(p) = self.frontier.pop() {
            if !self.visited.insert(p) {
                continue;
            }

            let plan = self.plan_moves(p)?;
            if plan.len() > 1 {
                self.stats.backtracks += 1;
                debug!(cell = %p, moves = plan.len(), "backtracking");
            }

            let Some((previous, outcome)) = self.follow(&plan).await? else {
                continue;
            };
            if outcome == MoveOutcome::Wall {
                debug!(cell = %p, "wall");
                continue;
            }

            let here = self.droid()?.position();
            if here != p {
                return Err(ExploreError::PositionMismatch {
                    expected: p,
                    actual: here,
                });
            }

            if self.graph.add_vertex(here) {
                self.stats.cells += 1;
            }
            self.graph.add_edge(previous, here)?;
            // confirmed neighbours other than `previous` were skipped as visited
            for n in here.neighbours() {
                if self.graph.contains(n) {
                    self.graph.add_edge(here, n)?;
                }
            }

            if outcome == MoveOutcome::Goal && self.goal.is_none() {
                info!(goal = %here, "found goal");
                self.goal = Some(here);
            }

            self.frontier.extend(here.neighbours());
        }
        Ok(())
    }

    /// Issues every move of `plan`. Returns the cell occupied before the
    /// final move together with its outcome, or `None` for an empty plan.
    async fn follow(&mut self, plan: &[Direction]) -> Result<Option<(Point, MoveOutcome)>> {
        let mut last = None;
        for (i, &direction) in plan.iter().enumerate() {
            let droid = self.droid_mut()?;
            let from = droid.position();
            let outcome = droid.step(direction).await?;
            self.stats.moves += 1;
            if outcome == MoveOutcome::Wall {
                self.stats.walls += 1;
                if i + 1 < plan.len() {
                    return Err(ExploreError::PlanDiverged { from, direction });
                }
            }
            last = Some((from, outcome));
        }
        Ok(last)
    }

    /// Shortest sequence of moves taking the droid next to `target` and then
    /// into it. Every move but the last follows a confirmed edge.
    pub fn plan_moves(&self, target: Point) -> Result<Vec<Direction>> {
        let from = self.droid()?.position();
        if let Some(direction) = Direction::from_segment(from, target) {
            return Ok(vec![direction]);
        }

        let paths = self.graph.shortest_paths(from)?;
        Direction::ALL
            .into_iter()
            .filter(|direction| self.graph.contains(direction.step(target)))
            .filter_map(|direction| {
                let path = paths.path_to(direction.step(target))?;
                let mut plan = directions_along(&path)?;
                plan.push(direction.opposite());
                Some(plan)
            })
            .min_by_key(Vec::len)
            .ok_or(ExploreError::NoRoute { from, target })
    }

    async fn release_droid(&mut self) -> Result<()> {
        if let Some(mut droid) = self.droid.take() {
            if let Err(e) = droid.release().await {
                warn!("failed to release droid: {:#}", e);
                return Err(e.into());
            }
        }
        Ok(())
    }

    fn droid(&self) -> Result<&dyn Droid> {
        self.droid.as_deref().ok_or(ExploreError::Released)
    }

    fn droid_mut(&mut self) -> Result<&mut (dyn Droid + 'static)> {
        self.droid.as_deref_mut().ok_or(ExploreError::Released)
    }

    /// Explores first if needed; fails if no goal exists in the mapped region.
    async fn require_goal(&mut self) -> Result<Point> {
        if self.state == RunState::NotStarted {
            self.explore().await?;
        }
        self.goal.ok_or(ExploreError::GoalNotFound)
    }

    pub async fn distance_to_goal(&mut self) -> Result<usize> {
        let goal = self.require_goal().await?;
        analyzer::distance(&self.graph, self.start, goal)
    }

    pub async fn goal_eccentricity(&mut self) -> Result<usize> {
        let goal = self.require_goal().await?;
        analyzer::eccentricity(&self.graph, goal)
    }

    pub async fn survey(&mut self) -> Result<SurveyReport> {
        let distance_to_goal = self.distance_to_goal().await?;
        let goal_eccentricity = self.goal_eccentricity().await?;
        let goal = self.require_goal().await?;
        Ok(SurveyReport {
            goal,
            distance_to_goal,
            goal_eccentricity,
            cells: self.graph.vertex_count(),
        })
    }
}

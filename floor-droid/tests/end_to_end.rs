use droid_explorer::{Direction, Droid, ExploreError, Explorer, MoveOutcome, Point, RunState};
use floor_droid::FloorDroid;

const SHIP: &str = include_str!("data/ship.txt");

#[tokio::test]
async fn ship_survey_is_pinned() {
    let droid = FloorDroid::spawn(SHIP).unwrap();
    let mut explorer = Explorer::new(Box::new(droid));

    assert_eq!(explorer.distance_to_goal().await.unwrap(), 26);
    assert_eq!(explorer.goal_eccentricity().await.unwrap(), 70);
    assert_eq!(explorer.graph.vertex_count(), 202);
    assert_eq!(explorer.goal(), Some(Point::new(6, -8)));
    assert_eq!(explorer.state(), RunState::Complete);
}

#[tokio::test]
async fn survey_report_matches_queries() {
    let mut explorer = Explorer::new(Box::new(FloorDroid::spawn(SHIP).unwrap()));
    let report = explorer.survey().await.unwrap();
    assert_eq!(report.distance_to_goal, 26);
    assert_eq!(report.goal_eccentricity, 70);
    assert_eq!(report.cells, 202);

    // exploring again must not touch the released droid
    explorer.explore().await.unwrap();
    assert_eq!(explorer.graph.vertex_count(), 202);
}

#[tokio::test]
async fn each_boundary_wall_costs_one_move() {
    let mut explorer = Explorer::new(Box::new(FloorDroid::spawn(SHIP).unwrap()));
    explorer.explore().await.unwrap();
    let stats = explorer.stats();
    assert_eq!(stats.cells, 202);
    // distinct wall cells bordering the reachable region
    assert_eq!(stats.walls, 227);
    assert_eq!(explorer.graph.edge_count(), 204);
    assert!(stats.moves >= stats.walls + stats.cells - 1);
}

#[tokio::test]
async fn sealed_goal_is_reported() {
    let program = "\
#######
#D..#O#
#######";
    let mut explorer = Explorer::new(Box::new(FloorDroid::spawn(program).unwrap()));
    assert!(matches!(
        explorer.distance_to_goal().await,
        Err(ExploreError::GoalNotFound)
    ));
    assert_eq!(explorer.graph.vertex_count(), 3);
}

#[tokio::test]
async fn worker_answers_match_floor_plan() {
    let mut droid = FloorDroid::spawn(SHIP).unwrap();
    // start sits in a north-south corridor
    assert_eq!(droid.step(Direction::West).await.unwrap(), MoveOutcome::Wall);
    assert_eq!(droid.step(Direction::East).await.unwrap(), MoveOutcome::Wall);
    assert_eq!(droid.position(), Point::ORIGIN);
    assert_eq!(droid.step(Direction::North).await.unwrap(), MoveOutcome::Open);
    assert_eq!(droid.position(), Point::new(0, -1));
    droid.release().await.unwrap();
}

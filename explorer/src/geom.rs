use serde::{Deserialize, Serialize};
use std::fmt;

/// A grid cell. `x` grows eastward, `y` grows southward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const ORIGIN: Point = Point { x: 0, y: 0 };

    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// The four unit neighbours, in `Direction::ALL` order.
    pub fn neighbours(self) -> [Point; 4] {
        Direction::ALL.map(|direction| direction.step(self))
    }

    pub fn is_adjacent(self, other: Point) -> bool {
        Direction::from_segment(self, other).is_some()
    }

    /// Follows `directions` from `self`, ignoring walls.
    pub fn walk(self, directions: &[Direction]) -> Point {
        directions.iter().fold(self, |p, direction| direction.step(p))
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.x, self.y)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    North,
    South,
    West,
    East,
}

impl Direction {
    /// Enumeration order. Move plans break ties in this order.
    pub const ALL: [Direction; 4] = [
        Direction::North,
        Direction::South,
        Direction::West,
        Direction::East,
    ];

    pub fn step(self, p: Point) -> Point {
        match self {
            Direction::North => Point::new(p.x, p.y - 1),
            Direction::South => Point::new(p.x, p.y + 1),
            Direction::West => Point::new(p.x - 1, p.y),
            Direction::East => Point::new(p.x + 1, p.y),
        }
    }

    pub fn opposite(self) -> Direction {
        match self {
            Direction::North => Direction::South,
            Direction::South => Direction::North,
            Direction::West => Direction::East,
            Direction::East => Direction::West,
        }
    }

    /// Direction of the unit step `from -> to`, or `None` if the points are not adjacent.
    pub fn from_segment(from: Point, to: Point) -> Option<Direction> {
        Direction::ALL
            .into_iter()
            .find(|direction| direction.step(from) == to)
    }

    /// Command code understood by droid engines.
    pub fn code(self) -> i64 {
        match self {
            Direction::North => 1,
            Direction::South => 2,
            Direction::West => 3,
            Direction::East => 4,
        }
    }

    pub fn from_code(code: i64) -> Option<Direction> {
        match code {
            1 => Some(Direction::North),
            2 => Some(Direction::South),
            3 => Some(Direction::West),
            4 => Some(Direction::East),
            _ => None,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Direction::North => "north",
            Direction::South => "south",
            Direction::West => "west",
            Direction::East => "east",
        };
        f.write_str(name)
    }
}

/// Converts a vertex path into the directions that walk it.
/// Returns `None` if two consecutive points are not adjacent.
pub fn directions_along(path: &[Point]) -> Option<Vec<Direction>> {
    path.windows(2)
        .map(|segment| Direction::from_segment(segment[0], segment[1]))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opposite_undoes_step() {
        let p = Point::new(3, -2);
        for direction in Direction::ALL {
            assert_eq!(direction.opposite().step(direction.step(p)), p);
            assert_eq!(direction.opposite().opposite(), direction);
        }
    }

    #[test]
    fn from_segment_requires_unit_adjacency() {
        let p = Point::ORIGIN;
        assert_eq!(Direction::from_segment(p, Point::new(1, 0)), Some(Direction::East));
        assert_eq!(Direction::from_segment(p, Point::new(0, -1)), Some(Direction::North));
        assert_eq!(Direction::from_segment(p, Point::new(1, 1)), None);
        assert_eq!(Direction::from_segment(p, Point::new(2, 0)), None);
        assert_eq!(Direction::from_segment(p, p), None);
    }

    #[test]
    fn codes_are_stable() {
        for direction in Direction::ALL {
            assert_eq!(Direction::from_code(direction.code()), Some(direction));
        }
        assert_eq!(Direction::North.code(), 1);
        assert_eq!(Direction::East.code(), 4);
        assert_eq!(Direction::from_code(0), None);
        assert_eq!(Direction::from_code(5), None);
    }

    #[test]
    fn neighbours_follow_enumeration_order() {
        let n = Point::ORIGIN.neighbours();
        assert_eq!(
            n,
            [
                Point::new(0, -1),
                Point::new(0, 1),
                Point::new(-1, 0),
                Point::new(1, 0)
            ]
        );
    }

    #[test]
    fn directions_along_path() {
        let path = [Point::new(0, 0), Point::new(1, 0), Point::new(1, 1)];
        assert_eq!(
            directions_along(&path),
            Some(vec![Direction::East, Direction::South])
        );
        assert_eq!(directions_along(&[Point::ORIGIN]), Some(vec![]));
        assert_eq!(directions_along(&[Point::ORIGIN, Point::new(2, 0)]), None);
    }

    #[test]
    fn walk_ignores_walls() {
        let end = Point::ORIGIN.walk(&[Direction::West, Direction::South, Direction::South]);
        assert_eq!(end, Point::new(-1, 2));
    }
}

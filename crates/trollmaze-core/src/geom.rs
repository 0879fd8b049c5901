//! Geometry primitives: [`Location`] and [`Direction`].
//!
//! The maze uses screen coordinates: X grows right, Y grows down, so
//! [`Direction::North`] decreases `y`.

use std::fmt;

// ---------------------------------------------------------------------------
// Direction
// ---------------------------------------------------------------------------

/// One of the four cardinal directions. There is no diagonal movement.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Direction {
    North,
    South,
    East,
    West,
}

impl Direction {
    /// All four directions, in neighbour enumeration order.
    pub const ALL: [Direction; 4] = [
        Direction::North,
        Direction::East,
        Direction::South,
        Direction::West,
    ];

    /// The unit offset `(dx, dy)` of one step in this direction.
    #[inline]
    pub const fn delta(self) -> (i32, i32) {
        match self {
            Direction::North => (0, -1),
            Direction::South => (0, 1),
            Direction::East => (1, 0),
            Direction::West => (-1, 0),
        }
    }

    /// The direction pointing the other way.
    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            Direction::North => Direction::South,
            Direction::South => Direction::North,
            Direction::East => Direction::West,
            Direction::West => Direction::East,
        }
    }

    /// The direction of the single step leading from `from` to `to`.
    ///
    /// Returns `None` unless the two locations are adjacent.
    pub fn between(from: Location, to: Location) -> Option<Self> {
        match (to.x - from.x, to.y - from.y) {
            (0, -1) => Some(Direction::North),
            (0, 1) => Some(Direction::South),
            (1, 0) => Some(Direction::East),
            (-1, 0) => Some(Direction::West),
            _ => None,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Direction::North => "north",
            Direction::South => "south",
            Direction::East => "east",
            Direction::West => "west",
        };
        f.write_str(s)
    }
}

// ---------------------------------------------------------------------------
// Location
// ---------------------------------------------------------------------------

/// A cell coordinate in the maze.
///
/// Coordinates are signed so that stepping off the edge produces an
/// out-of-bounds location instead of wrapping around.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Location {
    pub x: i32,
    pub y: i32,
}

impl Location {
    /// Create a new location.
    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// The location one step away in `dir`.
    #[inline]
    pub const fn step(self, dir: Direction) -> Self {
        let (dx, dy) = dir.delta();
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    /// The four cardinal neighbours, in [`Direction::ALL`] order.
    #[inline]
    pub fn neighbors(self) -> [Location; 4] {
        Direction::ALL.map(|d| self.step(d))
    }

    /// Whether `other` is exactly one cardinal step away.
    #[inline]
    pub fn is_adjacent(self, other: Location) -> bool {
        Direction::between(self, other).is_some()
    }

    /// Euclidean distance to `other`.
    pub fn distance(self, other: Location) -> f64 {
        let dx = f64::from(other.x - self.x);
        let dy = f64::from(other.y - self.y);
        dx.hypot(dy)
    }
}

impl PartialOrd for Location {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Location {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.y.cmp(&other.y).then(self.x.cmp(&other.x))
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl From<(i32, i32)> for Location {
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(x, y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn step_follows_screen_coordinates() {
        let l = Location::new(3, 3);
        assert_eq!(l.step(Direction::North), Location::new(3, 2));
        assert_eq!(l.step(Direction::South), Location::new(3, 4));
        assert_eq!(l.step(Direction::East), Location::new(4, 3));
        assert_eq!(l.step(Direction::West), Location::new(2, 3));
    }

    #[test]
    fn adjacency_is_four_connected() {
        let l = Location::new(5, 5);
        for n in l.neighbors() {
            assert!(l.is_adjacent(n));
            assert!(n.is_adjacent(l));
        }
        assert!(!l.is_adjacent(l));
        assert!(!l.is_adjacent(Location::new(6, 6)));
        assert!(!l.is_adjacent(Location::new(7, 5)));
    }

    #[test]
    fn between_inverts_step() {
        let l = Location::new(0, 0);
        for d in Direction::ALL {
            assert_eq!(Direction::between(l, l.step(d)), Some(d));
            assert_eq!(Direction::between(l.step(d), l), Some(d.opposite()));
        }
        assert_eq!(Direction::between(l, Location::new(2, 0)), None);
        assert_eq!(Direction::between(l, l), None);
    }

    #[test]
    fn ordering_is_row_major() {
        let mut v = vec![
            Location::new(2, 1),
            Location::new(0, 2),
            Location::new(1, 1),
        ];
        v.sort();
        assert_eq!(
            v,
            vec![
                Location::new(1, 1),
                Location::new(2, 1),
                Location::new(0, 2)
            ]
        );
    }

    #[test]
    fn euclidean_distance() {
        let a = Location::new(0, 0);
        assert_eq!(a.distance(Location::new(3, 4)), 5.0);
        assert_eq!(a.distance(a), 0.0);
    }
}

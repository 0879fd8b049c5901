//! The [`Maze`] grid: a rectangular array of passable and blocked tiles.
//!
//! A `Maze` is loaded once per game session and shared read-only by every
//! path computation. Only the game shell mutates it, through
//! [`set_tile`](Maze::set_tile).

use std::fmt;

use rand::Rng;

use crate::geom::Location;

/// The built-in 37×23 maze. Its exit sits in the bottom-left corner.
pub const DEFAULT_MAZE: &str = include_str!("../data/default-maze.txt");

// ---------------------------------------------------------------------------
// Tile
// ---------------------------------------------------------------------------

/// The content of one maze cell.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Tile {
    #[default]
    Wall,
    Floor,
    Exit,
}

impl Tile {
    /// Whether entities can stand on this tile.
    #[inline]
    pub const fn is_passable(self) -> bool {
        matches!(self, Tile::Floor | Tile::Exit)
    }

    /// The glyph used by the text format and the terminal renderer.
    pub const fn glyph(self) -> char {
        match self {
            Tile::Wall => '#',
            Tile::Floor => ' ',
            Tile::Exit => 'X',
        }
    }

    /// Decode a glyph of the text format.
    pub const fn from_glyph(ch: char) -> Option<Self> {
        match ch {
            '#' => Some(Tile::Wall),
            ' ' | '.' => Some(Tile::Floor),
            'X' => Some(Tile::Exit),
            _ => None,
        }
    }
}

// ---------------------------------------------------------------------------
// MazeError
// ---------------------------------------------------------------------------

/// Errors that can occur when building or parsing a maze.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MazeError {
    /// The text contained no rows, or a dimension was zero.
    Empty,
    /// A row does not have the same width as the first one.
    InconsistentWidth {
        row: usize,
        expected: usize,
        found: usize,
    },
    /// A character outside the tile alphabet was found.
    InvalidGlyph { ch: char, loc: Location },
    /// The tile storage does not match `width * height`.
    SizeMismatch { expected: usize, found: usize },
    /// There is no floor cell to place entities on.
    NoFloor,
}

impl fmt::Display for MazeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => f.write_str("maze: no cells"),
            Self::InconsistentWidth {
                row,
                expected,
                found,
            } => write!(
                f,
                "maze: row {row} is {found} cells wide, expected {expected}"
            ),
            Self::InvalidGlyph { ch, loc } => {
                write!(f, "maze contains invalid glyph \u{201c}{ch}\u{201d} at {loc}")
            }
            Self::SizeMismatch { expected, found } => {
                write!(f, "maze: expected {expected} tiles, found {found}")
            }
            Self::NoFloor => f.write_str("maze: no floor cell to spawn on"),
        }
    }
}

impl std::error::Error for MazeError {}

// ---------------------------------------------------------------------------
// Maze
// ---------------------------------------------------------------------------

/// A rectangular maze stored row-major.
///
/// Invariant: `tiles.len() == width * height`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Maze {
    tiles: Vec<Tile>,
    width: i32,
    height: i32,
}

impl Maze {
    /// Build a maze from row-major tile storage.
    pub fn new(width: i32, height: i32, tiles: Vec<Tile>) -> Result<Self, MazeError> {
        if width <= 0 || height <= 0 {
            return Err(MazeError::Empty);
        }
        let expected = width as usize * height as usize;
        if tiles.len() != expected {
            return Err(MazeError::SizeMismatch {
                expected,
                found: tiles.len(),
            });
        }
        Ok(Self {
            tiles,
            width,
            height,
        })
    }

    /// A maze of the given size where every cell is a wall.
    pub fn filled(width: i32, height: i32) -> Self {
        let w = width.max(0);
        let h = height.max(0);
        Self {
            tiles: vec![Tile::Wall; w as usize * h as usize],
            width: w,
            height: h,
        }
    }

    /// Parse the text format: one line per row, `#` for walls, space or `.`
    /// for floor and `X` for the exit. Every row must have the same width.
    ///
    /// Leading and trailing blank lines are ignored; spaces inside a row are
    /// significant.
    pub fn parse(text: &str) -> Result<Self, MazeError> {
        let text = text.trim_matches(|c| c == '\n' || c == '\r');
        let mut tiles = Vec::with_capacity(text.len());
        let mut width: Option<usize> = None;
        let mut height = 0usize;

        for (y, line) in text.lines().enumerate() {
            let line = line.strip_suffix('\r').unwrap_or(line);
            let mut found = 0usize;
            for (x, ch) in line.chars().enumerate() {
                let tile = Tile::from_glyph(ch).ok_or(MazeError::InvalidGlyph {
                    ch,
                    loc: Location::new(x as i32, y as i32),
                })?;
                tiles.push(tile);
                found += 1;
            }
            match width {
                None => width = Some(found),
                Some(expected) if expected != found => {
                    return Err(MazeError::InconsistentWidth {
                        row: y,
                        expected,
                        found,
                    });
                }
                Some(_) => {}
            }
            height += 1;
        }

        let width = width.unwrap_or(0);
        if width == 0 || height == 0 {
            return Err(MazeError::Empty);
        }
        Self::new(width as i32, height as i32, tiles)
    }

    /// The built-in maze.
    pub fn builtin() -> Self {
        // The embedded text is validated by the test suite.
        Self::parse(DEFAULT_MAZE).unwrap_or_else(|_| Self::filled(1, 1))
    }

    /// Width in cells.
    #[inline]
    pub fn width(&self) -> i32 {
        self.width
    }

    /// Height in cells.
    #[inline]
    pub fn height(&self) -> i32 {
        self.height
    }

    #[inline]
    fn index(&self, loc: Location) -> Option<usize> {
        if self.in_bounds(loc) {
            Some(loc.y as usize * self.width as usize + loc.x as usize)
        } else {
            None
        }
    }

    /// Whether `loc` lies inside the maze.
    #[inline]
    pub fn in_bounds(&self, loc: Location) -> bool {
        loc.x >= 0 && loc.y >= 0 && loc.x < self.width && loc.y < self.height
    }

    /// The tile at `loc`, or `None` outside the maze.
    #[inline]
    pub fn tile(&self, loc: Location) -> Option<Tile> {
        self.index(loc).map(|i| self.tiles[i])
    }

    /// Whether an entity may stand on `loc`. Out-of-bounds cells are blocked.
    #[inline]
    pub fn is_passable(&self, loc: Location) -> bool {
        self.tile(loc).is_some_and(Tile::is_passable)
    }

    /// The in-bounds cardinal neighbours of `loc`. No passability filtering
    /// is applied.
    pub fn neighbors(&self, loc: Location) -> impl Iterator<Item = Location> + '_ {
        loc.neighbors()
            .into_iter()
            .filter(move |&n| self.in_bounds(n))
    }

    /// Replace the tile at `loc`. No-op outside the maze.
    pub fn set_tile(&mut self, loc: Location, tile: Tile) {
        if let Some(i) = self.index(loc) {
            self.tiles[i] = tile;
        }
    }

    /// Location of the first exit tile, in row-major order.
    pub fn exit(&self) -> Option<Location> {
        self.iter()
            .find(|&(_, t)| t == Tile::Exit)
            .map(|(loc, _)| loc)
    }

    /// Number of passable cells.
    pub fn passable_count(&self) -> usize {
        self.tiles.iter().filter(|t| t.is_passable()).count()
    }

    /// A uniformly random floor cell, or `None` if the maze has none.
    ///
    /// Exit tiles are never chosen, so entities do not spawn on the exit.
    pub fn random_passable<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<Location> {
        let floors = self.tiles.iter().filter(|&&t| t == Tile::Floor).count();
        if floors == 0 {
            return None;
        }
        let pick = rng.random_range(0..floors);
        self.iter()
            .filter(|&(_, t)| t == Tile::Floor)
            .nth(pick)
            .map(|(loc, _)| loc)
    }

    /// Row-major iterator over `(Location, Tile)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (Location, Tile)> + '_ {
        let w = self.width as usize;
        self.tiles.iter().enumerate().map(move |(i, &t)| {
            (Location::new((i % w) as i32, (i / w) as i32), t)
        })
    }
}

impl fmt::Display for Maze {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.tiles.chunks(self.width.max(1) as usize) {
            for t in row {
                write!(f, "{}", t.glyph())?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    const ROOM: &str = "\
#####
#   #
# # #
#X###";

    #[test]
    fn parse_and_size() {
        let m = Maze::parse(ROOM).unwrap();
        assert_eq!(m.width(), 5);
        assert_eq!(m.height(), 4);
        assert_eq!(m.tile(Location::new(0, 0)), Some(Tile::Wall));
        assert_eq!(m.tile(Location::new(1, 1)), Some(Tile::Floor));
        assert_eq!(m.tile(Location::new(1, 3)), Some(Tile::Exit));
        assert_eq!(m.exit(), Some(Location::new(1, 3)));
        assert_eq!(m.passable_count(), 6);
    }

    #[test]
    fn builtin_maze_loads() {
        let m = Maze::parse(DEFAULT_MAZE).unwrap();
        assert_eq!(m.width(), 37);
        assert_eq!(m.height(), 23);
        assert_eq!(m.exit(), Some(Location::new(1, 22)));
        assert_eq!(m, Maze::builtin());
        assert!(m.is_passable(Location::new(1, 21)));
        assert!(m.is_passable(Location::new(35, 1)));
    }

    #[test]
    fn passability_and_bounds() {
        let m = Maze::parse(ROOM).unwrap();
        assert!(m.is_passable(Location::new(1, 1)));
        assert!(!m.is_passable(Location::new(0, 0)));
        assert!(!m.is_passable(Location::new(-1, 1)));
        assert!(!m.is_passable(Location::new(5, 1)));
        assert!(m.in_bounds(Location::new(4, 3)));
        assert!(!m.in_bounds(Location::new(4, 4)));
        assert_eq!(m.tile(Location::new(9, 9)), None);
    }

    #[test]
    fn neighbors_filter_bounds_only() {
        let m = Maze::parse(ROOM).unwrap();
        let corner: Vec<_> = m.neighbors(Location::new(0, 0)).collect();
        assert_eq!(corner, vec![Location::new(1, 0), Location::new(0, 1)]);
        // Walls are still reported; callers filter passability themselves.
        let inner: Vec<_> = m.neighbors(Location::new(2, 2)).collect();
        assert_eq!(inner.len(), 4);
        assert!(inner.contains(&Location::new(2, 3)));
    }

    #[test]
    fn set_tile_blocks_cell() {
        let mut m = Maze::parse(ROOM).unwrap();
        let p = Location::new(2, 1);
        assert!(m.is_passable(p));
        m.set_tile(p, Tile::Wall);
        assert!(!m.is_passable(p));
        // out of bounds is ignored
        m.set_tile(Location::new(-3, 0), Tile::Floor);
        assert_eq!(m.passable_count(), 5);
    }

    #[test]
    fn random_passable_picks_floor() {
        let m = Maze::parse(DEFAULT_MAZE).unwrap();
        let mut rng = SmallRng::seed_from_u64(7);
        for _ in 0..200 {
            let p = m.random_passable(&mut rng).unwrap();
            assert_eq!(m.tile(p), Some(Tile::Floor));
        }
        assert_eq!(Maze::filled(3, 3).random_passable(&mut rng), None);
    }

    #[test]
    fn display_round_trips_text() {
        let m = Maze::parse(DEFAULT_MAZE).unwrap();
        assert_eq!(Maze::parse(&m.to_string()).unwrap(), m);
    }

    #[test]
    fn inconsistent_width_error() {
        let err = Maze::parse("###\n#  #").unwrap_err();
        assert_eq!(
            err,
            MazeError::InconsistentWidth {
                row: 1,
                expected: 3,
                found: 4
            }
        );
    }

    #[test]
    fn invalid_glyph_error() {
        let err = Maze::parse("##\n#?").unwrap_err();
        assert_eq!(
            err,
            MazeError::InvalidGlyph {
                ch: '?',
                loc: Location::new(1, 1)
            }
        );
    }

    #[test]
    fn size_mismatch_and_empty() {
        assert_eq!(Maze::parse("\n\n").unwrap_err(), MazeError::Empty);
        assert_eq!(
            Maze::new(2, 2, vec![Tile::Floor; 3]).unwrap_err(),
            MazeError::SizeMismatch {
                expected: 4,
                found: 3
            }
        );
    }
}

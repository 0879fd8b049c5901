use trollmaze_core::{Location, Maze};

/// Grid interface consumed by the search algorithms.
pub trait Pather {
    /// Width of the grid in cells.
    fn width(&self) -> i32;

    /// Height of the grid in cells.
    fn height(&self) -> i32;

    /// Whether `loc` is inside the grid and not blocked.
    fn passable(&self, loc: Location) -> bool;

    /// Append the passable cardinal neighbours of `loc` into `buf`. The
    /// caller clears `buf` before calling.
    fn neighbors(&self, loc: Location, buf: &mut Vec<Location>) {
        for n in loc.neighbors() {
            if self.passable(n) {
                buf.push(n);
            }
        }
    }
}

impl Pather for Maze {
    fn width(&self) -> i32 {
        Maze::width(self)
    }

    fn height(&self) -> i32 {
        Maze::height(self)
    }

    fn passable(&self, loc: Location) -> bool {
        self.is_passable(loc)
    }

    fn neighbors(&self, loc: Location, buf: &mut Vec<Location>) {
        buf.extend(Maze::neighbors(self, loc).filter(|&n| self.is_passable(n)));
    }
}

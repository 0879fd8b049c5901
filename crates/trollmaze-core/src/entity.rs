//! Entities and the movement primitive shared by the player and the trolls.

use crate::geom::{Direction, Location};
use crate::maze::Maze;

/// Something that occupies a maze cell and faces a direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Entity {
    pub loc: Location,
    pub face: Direction,
}

impl Entity {
    pub const fn new(loc: Location, face: Direction) -> Self {
        Self { loc, face }
    }
}

/// Result of a single [`attempt_move`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    /// The entity advanced one cell.
    Moved,
    /// The entity was facing elsewhere; it turned but stayed on its cell.
    Turned,
    /// The target cell is a wall or outside the maze.
    Blocked,
}

/// Try to move `entity` one cell in `dir`.
///
/// An entity must face a direction before it can walk that way: if its
/// facing differs, this call only turns it and reports [`MoveOutcome::Turned`].
pub fn attempt_move(maze: &Maze, entity: &mut Entity, dir: Direction) -> MoveOutcome {
    if entity.face != dir {
        entity.face = dir;
        return MoveOutcome::Turned;
    }
    let target = entity.loc.step(dir);
    if maze.is_passable(target) {
        entity.loc = target;
        MoveOutcome::Moved
    } else {
        MoveOutcome::Blocked
    }
}

/// Number of passable cells between `entity` and the first wall (or the maze
/// edge) in `dir`. Zero when the entity stands right next to a wall.
pub fn look(maze: &Maze, entity: &Entity, dir: Direction) -> u32 {
    let mut n = 0;
    let mut p = entity.loc.step(dir);
    while maze.is_passable(p) {
        n += 1;
        p = p.step(dir);
    }
    n
}

#[cfg(test)]
mod tests {
    use super::*;

    const HALL: &str = "\
#######
#     #
# ### #
#######";

    #[test]
    fn move_when_facing() {
        let maze = Maze::parse(HALL).unwrap();
        let mut e = Entity::new(Location::new(1, 1), Direction::East);
        assert_eq!(attempt_move(&maze, &mut e, Direction::East), MoveOutcome::Moved);
        assert_eq!(e.loc, Location::new(2, 1));
    }

    #[test]
    fn turn_costs_a_move() {
        let maze = Maze::parse(HALL).unwrap();
        let mut e = Entity::new(Location::new(1, 1), Direction::North);
        assert_eq!(attempt_move(&maze, &mut e, Direction::South), MoveOutcome::Turned);
        assert_eq!(e.face, Direction::South);
        assert_eq!(e.loc, Location::new(1, 1));
        assert_eq!(attempt_move(&maze, &mut e, Direction::South), MoveOutcome::Moved);
        assert_eq!(e.loc, Location::new(1, 2));
    }

    #[test]
    fn walls_block() {
        let maze = Maze::parse(HALL).unwrap();
        let mut e = Entity::new(Location::new(1, 1), Direction::North);
        assert_eq!(attempt_move(&maze, &mut e, Direction::North), MoveOutcome::Blocked);
        assert_eq!(e.loc, Location::new(1, 1));
    }

    #[test]
    fn edge_of_maze_blocks() {
        let maze = Maze::parse("   ").unwrap();
        let mut e = Entity::new(Location::new(0, 0), Direction::West);
        assert_eq!(attempt_move(&maze, &mut e, Direction::West), MoveOutcome::Blocked);
        assert_eq!(e.loc, Location::new(0, 0));
    }

    #[test]
    fn look_counts_open_cells() {
        let maze = Maze::parse(HALL).unwrap();
        let e = Entity::new(Location::new(1, 1), Direction::East);
        assert_eq!(look(&maze, &e, Direction::East), 4);
        assert_eq!(look(&maze, &e, Direction::West), 0);
        assert_eq!(look(&maze, &e, Direction::South), 1);
        assert_eq!(look(&maze, &e, Direction::North), 0);
    }
}

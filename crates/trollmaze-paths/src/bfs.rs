use std::collections::VecDeque;

use trollmaze_core::Location;

use crate::traits::Pather;

/// Compute a breadth-first distance map from `source`.
///
/// The result is indexed row-major (`y * width + x`); cells that cannot be
/// reached, and every cell when `source` is blocked, are `None`.
pub fn bfs_map<P: Pather>(pather: &P, source: Location) -> Vec<Option<u32>> {
    let width = pather.width().max(0) as usize;
    let height = pather.height().max(0) as usize;
    let mut map = vec![None; width * height];
    if !pather.passable(source) {
        return map;
    }
    let idx = |p: Location| p.y as usize * width + p.x as usize;

    let mut queue = VecDeque::new();
    map[idx(source)] = Some(0);
    queue.push_back(source);

    let mut nbuf = Vec::with_capacity(4);
    while let Some(cp) = queue.pop_front() {
        let Some(dist) = map[idx(cp)] else {
            continue;
        };
        nbuf.clear();
        pather.neighbors(cp, &mut nbuf);
        for &np in nbuf.iter() {
            let ni = idx(np);
            if map[ni].is_some() {
                continue;
            }
            map[ni] = Some(dist + 1);
            queue.push_back(np);
        }
    }
    map
}

/// Breadth-first graph distance between two cells, or `None` if either is
/// blocked or they are not connected.
pub fn bfs_distance<P: Pather>(pather: &P, source: Location, destination: Location) -> Option<u32> {
    if !pather.passable(destination) {
        return None;
    }
    let width = pather.width() as usize;
    bfs_map(pather, source)[destination.y as usize * width + destination.x as usize]
}

#[cfg(test)]
mod tests {
    use super::*;
    use trollmaze_core::{DEFAULT_MAZE, Maze};

    #[test]
    fn distances_on_builtin_maze() {
        let maze = Maze::parse(DEFAULT_MAZE).unwrap();
        let from = Location::new(1, 21);
        assert_eq!(bfs_distance(&maze, from, from), Some(0));
        assert_eq!(bfs_distance(&maze, from, Location::new(35, 1)), Some(278));
        assert_eq!(bfs_distance(&maze, from, Location::new(1, 22)), Some(1));
        assert_eq!(bfs_distance(&maze, from, Location::new(0, 0)), None);
    }

    #[test]
    fn map_covers_connected_cells() {
        let maze = Maze::parse(DEFAULT_MAZE).unwrap();
        let map = bfs_map(&maze, Location::new(1, 1));
        let reached = map.iter().filter(|d| d.is_some()).count();
        assert_eq!(reached, maze.passable_count());
    }

    #[test]
    fn blocked_source_reaches_nothing() {
        let maze = Maze::parse("# \n  ").unwrap();
        let map = bfs_map(&maze, Location::new(0, 0));
        assert!(map.iter().all(Option::is_none));
    }
}

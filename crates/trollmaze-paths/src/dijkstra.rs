use trollmaze_core::{Direction, Location};

use crate::PathFinder;
use crate::finder::NO_PARENT;
use crate::path::Path;
use crate::traits::Pather;

/// Compute a shortest path with a freshly allocated engine.
///
/// Convenient for one-off queries; game code keeps a [`PathFinder`] around
/// instead so the node arena is reused.
pub fn find_path<P: Pather>(pather: &P, source: Location, destination: Location) -> Option<Path> {
    if !pather.passable(source) || !pather.passable(destination) {
        return None;
    }
    PathFinder::new(pather.width(), pather.height()).find_path(pather, source, destination)
}

impl PathFinder {
    /// Compute the shortest path from `source` to `destination` with
    /// Dijkstra's algorithm over unit-cost cardinal moves.
    ///
    /// Returns `None` when either endpoint is blocked or out of bounds
    /// (checked before any search state is touched) or when `destination`
    /// is unreachable. A path from a cell to itself is empty and already
    /// exhausted.
    ///
    /// Among equally short routes, the one returned is determined by the
    /// heap's extraction order; it is stable for a given grid.
    pub fn find_path<P: Pather>(
        &mut self,
        pather: &P,
        source: Location,
        destination: Location,
    ) -> Option<Path> {
        if !pather.passable(source) || !pather.passable(destination) {
            log::trace!("find_path {source} -> {destination}: endpoint blocked");
            return None;
        }
        if source == destination {
            return Some(Path::empty());
        }

        self.resize(pather.width(), pather.height());
        let si = self.idx(source)?;
        let di = self.idx(destination)?;

        self.begin_search();
        {
            let start = self.touch(si);
            start.distance = 0;
            start.open = true;
        }
        self.open.insert(si, 0);

        let mut nbuf = std::mem::take(&mut self.nbuf);

        let found = 'search: loop {
            let Some((ci, current_dist)) = self.open.extract_min() else {
                break 'search false;
            };
            self.expanded += 1;
            {
                let cur = self.touch(ci);
                cur.open = false;
                cur.visited = true;
            }
            if ci == di {
                break 'search true;
            }

            let cp = self.location(ci);
            nbuf.clear();
            pather.neighbors(cp, &mut nbuf);

            for &np in nbuf.iter() {
                let Some(ni) = self.idx(np) else {
                    continue;
                };
                let tentative = current_dist + 1;
                let n = self.touch(ni);
                if n.visited || tentative >= n.distance {
                    continue;
                }
                n.distance = tentative;
                n.parent = ci;
                if n.open {
                    self.open.decrease_key(ni, tentative);
                } else {
                    n.open = true;
                    self.open.insert(ni, tentative);
                }
            }
        };

        self.nbuf = nbuf;

        log::trace!(
            "find_path {source} -> {destination}: {} after expanding {} nodes",
            if found { "found" } else { "unreachable" },
            self.expanded
        );
        if !found {
            return None;
        }
        self.reconstruct(si, di)
    }

    /// Follow parent links from `di` back to `si` and turn each hop into a
    /// step, producing the steps in source-to-destination order.
    fn reconstruct(&self, si: usize, di: usize) -> Option<Path> {
        let mut steps = Vec::with_capacity(self.nodes[di].distance as usize);
        let mut ci = di;
        while ci != si {
            let parent = self.nodes[ci].parent;
            if parent == NO_PARENT {
                return None;
            }
            steps.push(Direction::between(self.location(parent), self.location(ci))?);
            ci = parent;
        }
        steps.reverse();
        Some(Path::new(steps))
    }
}

use trollmaze_core::Location;

use crate::heap::IndexedMinHeap;

/// Sentinel tentative distance of a node not yet reached by the search.
pub const INFINITY: u32 = u32::MAX;

pub(crate) const NO_PARENT: usize = usize::MAX;

// ---------------------------------------------------------------------------
// Search node arena
// ---------------------------------------------------------------------------

/// Per-cell scratch state of a Dijkstra search.
///
/// Nodes live in a flat arena indexed by grid position; `parent` is an arena
/// index, never a reference.
#[derive(Clone, Debug)]
pub(crate) struct SearchNode {
    pub(crate) distance: u32,
    pub(crate) parent: usize,
    pub(crate) visited: bool,
    pub(crate) open: bool,
    /// Search generation that last initialised this node. A node stamped
    /// with an older generation holds stale data and must be reset before
    /// being read.
    pub(crate) generation: u32,
}

impl Default for SearchNode {
    fn default() -> Self {
        Self {
            distance: INFINITY,
            parent: NO_PARENT,
            visited: false,
            open: false,
            generation: 0,
        }
    }
}

// ---------------------------------------------------------------------------
// PathFinder
// ---------------------------------------------------------------------------

/// Reusable shortest-path engine for one grid shape.
///
/// `PathFinder` owns the search-node arena, the open-set heap and a
/// neighbour scratch buffer. Edge weights never change, so the same arena
/// serves every query on a maze; it is reset at the start of each search.
#[derive(Debug)]
pub struct PathFinder {
    pub(crate) width: usize,
    pub(crate) height: usize,
    pub(crate) nodes: Vec<SearchNode>,
    pub(crate) generation: u32,
    pub(crate) open: IndexedMinHeap,
    pub(crate) nbuf: Vec<Location>,
    pub(crate) expanded: usize,
}

impl Default for PathFinder {
    fn default() -> Self {
        Self::new(0, 0)
    }
}

impl PathFinder {
    /// Create an engine sized for a `width` × `height` grid.
    pub fn new(width: i32, height: i32) -> Self {
        let w = width.max(0) as usize;
        let h = height.max(0) as usize;
        Self {
            width: w,
            height: h,
            nodes: vec![SearchNode::default(); w * h],
            generation: 0,
            open: IndexedMinHeap::with_capacity(w * h),
            nbuf: Vec::with_capacity(4),
            expanded: 0,
        }
    }

    /// Grid size the node arena is currently laid out for.
    pub fn size(&self) -> (i32, i32) {
        (self.width as i32, self.height as i32)
    }

    /// Number of nodes extracted from the open set by the last search.
    pub fn last_expanded(&self) -> usize {
        self.expanded
    }

    /// Re-lay the arena for a grid of a different shape. Nothing happens if
    /// the shape is unchanged.
    pub fn resize(&mut self, width: i32, height: i32) {
        let w = width.max(0) as usize;
        let h = height.max(0) as usize;
        if w == self.width && h == self.height {
            return;
        }
        log::debug!("path finder resized from {}x{} to {w}x{h}", self.width, self.height);
        *self = Self::new(width, height);
    }

    /// Invalidate every node from previous searches and empty the open set.
    ///
    /// Bumping the generation makes every cached node stale at once; when
    /// the counter wraps, stamps could collide with old ones, so the arena
    /// is wiped eagerly instead.
    pub(crate) fn begin_search(&mut self) {
        self.generation = self.generation.wrapping_add(1);
        if self.generation == 0 {
            self.nodes.fill(SearchNode::default());
            self.generation = 1;
        }
        self.open.clear();
        self.expanded = 0;
    }

    /// Fetch node `i` for the current search, resetting it if it still holds
    /// data from an earlier one.
    #[inline]
    pub(crate) fn touch(&mut self, i: usize) -> &mut SearchNode {
        let generation = self.generation;
        let node = &mut self.nodes[i];
        if node.generation != generation {
            *node = SearchNode {
                generation,
                ..SearchNode::default()
            };
        }
        node
    }

    // -----------------------------------------------------------------------
    // Coordinate helpers
    // -----------------------------------------------------------------------

    /// Convert a `Location` to an arena index. Returns `None` if out of range.
    #[inline]
    pub(crate) fn idx(&self, loc: Location) -> Option<usize> {
        if loc.x < 0 || loc.y < 0 {
            return None;
        }
        let (x, y) = (loc.x as usize, loc.y as usize);
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(y * self.width + x)
    }

    /// Convert an arena index back to a `Location`.
    #[inline]
    pub(crate) fn location(&self, idx: usize) -> Location {
        Location::new((idx % self.width) as i32, (idx / self.width) as i32)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_round_trip() {
        let pf = PathFinder::new(7, 5);
        let l = Location::new(6, 4);
        let i = pf.idx(l).unwrap();
        assert_eq!(i, 34);
        assert_eq!(pf.location(i), l);
        assert_eq!(pf.idx(Location::new(7, 0)), None);
        assert_eq!(pf.idx(Location::new(0, -1)), None);
    }

    #[test]
    fn resize_reallocates_only_on_new_shape() {
        let mut pf = PathFinder::new(4, 4);
        pf.generation = 9;
        pf.resize(4, 4);
        assert_eq!(pf.generation, 9);
        pf.resize(8, 2);
        assert_eq!(pf.size(), (8, 2));
        assert_eq!(pf.nodes.len(), 16);
        assert_eq!(pf.generation, 0);
    }

    #[test]
    fn begin_search_invalidates_nodes() {
        let mut pf = PathFinder::new(3, 3);
        pf.begin_search();
        {
            let n = pf.touch(4);
            n.distance = 2;
            n.visited = true;
            n.parent = 1;
        }
        pf.open.insert(4, 2);
        pf.begin_search();
        assert!(pf.open.is_empty());
        let n = pf.touch(4);
        assert_eq!(n.distance, INFINITY);
        assert!(!n.visited);
        assert_eq!(n.parent, NO_PARENT);
    }

    #[test]
    fn generation_wrap_wipes_arena() {
        let mut pf = PathFinder::new(2, 2);
        pf.generation = u32::MAX - 1;
        pf.begin_search();
        pf.touch(0).distance = 5;
        pf.begin_search();
        assert_eq!(pf.generation, 1);
        // A stale node stamped 1 before the wrap would look current; the
        // wipe guarantees none exists.
        assert!(pf.nodes.iter().all(|n| n.generation == 0 && n.distance == INFINITY));
    }
}

use trollmaze_core::Location;

/// Manhattan (L1) distance between two locations.
#[inline]
pub fn manhattan(a: Location, b: Location) -> u32 {
    a.x.abs_diff(b.x) + a.y.abs_diff(b.y)
}

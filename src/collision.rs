//! Bounding-box collision tests.
//!
//! Edges are inclusive on the horizontal axis, so boxes that merely touch
//! side-by-side still count as overlapping.

use crate::entities::Rect;

/// Plain AABB overlap with inclusive edges.
pub fn overlaps(a: &Rect, b: &Rect) -> bool {
    a.x <= b.right() && a.right() >= b.x && a.y <= b.bottom() && a.bottom() >= b.y
}

/// Directional contact: `mover`'s top edge has entered `target` from below.
///
/// The boxes must overlap horizontally, and `mover.y` must lie strictly
/// below `target`'s top edge and at or above its bottom edge. A box whose top
/// is above the target's top does not count, even when the two overlap.
pub fn top_edge_contact(mover: &Rect, target: &Rect) -> bool {
    overlaps(mover, target) && mover.y > target.y
}


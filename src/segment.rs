/// A derived view of one segment of a contour: up to two leading off-curve
/// control points followed by the on-curve anchor that terminates them.
///
/// Indices refer into the owning contour's point list. Segments are
/// recomputed on demand by [`Contour::segments`](crate::Contour::segments)
/// and never stored; any mutation of the contour invalidates them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment {
    /// Control points leading up to the anchor, in contour order.
    pub offcurves: Vec<usize>,
    /// The on-curve point ending the segment.
    pub anchor: usize,
}

impl Segment {
    /// Number of points in the segment, anchor included.
    pub fn point_count(&self) -> usize {
        self.offcurves.len() + 1
    }
}

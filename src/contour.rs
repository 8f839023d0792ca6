use kurbo::{BezPath, CubicBez, ParamCurve, Point as KPoint};

use crate::error::GlyphEditError;
use crate::geometry::fit_cubic;
use crate::point::{Point, PointType};
use crate::segment::Segment;

/// Samples taken per cubic when refitting a merged segment.
const REFIT_SAMPLES: usize = 12;

/// An ordered run of points forming one outline of a glyph.
///
/// Points are stored in UFO order: a closed contour implicitly joins its
/// last on-curve point back to the first segment, an open contour starts
/// with a `Move` point. The `dirty` flag is set by any mutation and is
/// consumed by callers deciding whether to emit change notifications.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Contour {
    pub points: Vec<Point>,
    pub closed: bool,
    pub dirty: bool,
}

impl Contour {
    pub fn new(points: Vec<Point>, closed: bool) -> Self {
        Contour {
            points,
            closed,
            dirty: false,
        }
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Map a possibly-negative or overflowing index onto the point list.
    /// Callers on open contours must guard the boundary themselves.
    pub fn wrap(&self, index: isize) -> usize {
        debug_assert!(!self.points.is_empty());
        index.rem_euclid(self.points.len() as isize) as usize
    }

    /// The point at `index`, wrapping around both ends of the contour.
    pub fn point_at(&self, index: isize) -> &Point {
        &self.points[self.wrap(index)]
    }

    pub fn point_at_mut(&mut self, index: isize) -> &mut Point {
        let i = self.wrap(index);
        &mut self.points[i]
    }

    /// Indices of all selected points, ascending.
    pub fn selection(&self) -> Vec<usize> {
        self.points
            .iter()
            .enumerate()
            .filter(|(_, p)| p.selected)
            .map(|(i, _)| i)
            .collect()
    }

    pub fn select_all(&mut self, selected: bool) {
        for p in self.points.iter_mut() {
            p.selected = selected;
        }
    }

    /// Group the points into segments, each 0–2 leading off-curves plus the
    /// on-curve point that terminates them.
    ///
    /// Ordering matches what interactive editors expect: off-curves trailing
    /// the last on-curve point belong to the first segment, which then moves
    /// to the end of the list; on an open contour the lone `Move` segment is
    /// likewise rotated to the end. A contour of only off-curves yields no
    /// segments.
    pub fn segments(&self) -> Vec<Segment> {
        let mut segments = Vec::new();
        let mut run = Vec::new();
        for (i, point) in self.points.iter().enumerate() {
            if point.is_on_curve() {
                segments.push(Segment {
                    offcurves: std::mem::take(&mut run),
                    anchor: i,
                });
            } else {
                run.push(i);
            }
        }
        if segments.is_empty() {
            return segments;
        }
        if !run.is_empty() {
            let mut first = segments.remove(0);
            run.extend(first.offcurves);
            first.offcurves = run;
            segments.push(first);
        } else if self.points[segments[0].anchor].typ == PointType::Move {
            let first = segments.remove(0);
            segments.push(first);
        }
        segments
    }

    /// Remove and return the point at `index`. Shifts later indices down.
    pub fn remove_point(&mut self, index: usize) -> Result<Point, GlyphEditError> {
        if index >= self.points.len() {
            return Err(GlyphEditError::PointOutOfRange {
                index,
                count: self.points.len(),
            });
        }
        self.dirty = true;
        Ok(self.points.remove(index))
    }

    /// Remove the segment at `index`, merging it into the following segment.
    ///
    /// With `preserve_shape`, and when both the removed and following
    /// segments are cubics, the following segment's handles are refit so the
    /// merged span approximates the two originals. Without it the following
    /// segment keeps its handles and the outline distorts.
    ///
    /// Removing the `Move` segment of an open contour promotes the next
    /// on-curve point to the new start and discards any off-curves that
    /// would be left leading it. Removing the only segment empties the
    /// contour; the caller decides whether the husk should be dropped from
    /// the glyph.
    pub fn remove_segment(
        &mut self,
        index: usize,
        preserve_shape: bool,
    ) -> Result<(), GlyphEditError> {
        let segments = self.segments();
        let count = segments.len();
        if index >= count {
            return Err(GlyphEditError::SegmentOutOfRange { index, count });
        }
        if count == 1 {
            self.points.clear();
            self.dirty = true;
            return Ok(());
        }
        let segment = &segments[index];
        let anchor_typ = self.points[segment.anchor].typ;

        if anchor_typ == PointType::Move {
            let mut doomed = vec![segment.anchor];
            let next = &segments[(index + 1) % count];
            doomed.extend(next.offcurves.iter().copied());
            self.points[next.anchor].typ = PointType::Move;
            self.points[next.anchor].smooth = false;
            remove_indices(&mut self.points, doomed);
            self.dirty = true;
            return Ok(());
        }

        let next = &segments[(index + 1) % count];
        let refit = preserve_shape
            && anchor_typ == PointType::Curve
            && self.points[next.anchor].typ == PointType::Curve
            && segment.offcurves.len() == 2
            && next.offcurves.len() == 2;
        if refit {
            let prev = &segments[(index + count - 1) % count];
            let first = CubicBez::new(
                self.points[prev.anchor].pos(),
                self.points[segment.offcurves[0]].pos(),
                self.points[segment.offcurves[1]].pos(),
                self.points[segment.anchor].pos(),
            );
            let second = CubicBez::new(
                self.points[segment.anchor].pos(),
                self.points[next.offcurves[0]].pos(),
                self.points[next.offcurves[1]].pos(),
                self.points[next.anchor].pos(),
            );
            let mut samples: Vec<KPoint> = Vec::with_capacity(2 * REFIT_SAMPLES + 1);
            for i in 0..=REFIT_SAMPLES {
                samples.push(first.eval(i as f64 / REFIT_SAMPLES as f64));
            }
            for i in 1..=REFIT_SAMPLES {
                samples.push(second.eval(i as f64 / REFIT_SAMPLES as f64));
            }
            let fitted = fit_cubic(&samples, first.p1 - first.p0, second.p2 - second.p3);
            self.points[next.offcurves[0]].set_pos(fitted.p1);
            self.points[next.offcurves[1]].set_pos(fitted.p2);
        }

        let mut doomed = segment.offcurves.clone();
        doomed.push(segment.anchor);
        remove_indices(&mut self.points, doomed);
        self.dirty = true;
        Ok(())
    }

    /// Render the contour as a kurbo path. Quadratic runs expand their
    /// implied on-curve midpoints; off-curves dangling at the end of an
    /// open contour are dropped.
    pub fn to_kurbo(&self) -> Result<BezPath, GlyphEditError> {
        let mut path = BezPath::new();
        if self.points.is_empty() {
            return Ok(path);
        }
        let ordered: Vec<&Point> = if self.closed {
            let start = self
                .points
                .iter()
                .position(|p| p.is_on_curve())
                .ok_or(GlyphEditError::MalformedContour)?;
            self.points[start + 1..]
                .iter()
                .chain(self.points[..=start].iter())
                .collect()
        } else {
            if self.points[0].typ != PointType::Move {
                return Err(GlyphEditError::MalformedContour);
            }
            self.points.iter().collect()
        };
        let (head, body) = if self.closed {
            (ordered[ordered.len() - 1], &ordered[..])
        } else {
            (ordered[0], &ordered[1..])
        };
        path.move_to(head.pos());

        let mut run: Vec<KPoint> = Vec::new();
        for point in body {
            if !point.is_on_curve() {
                run.push(point.pos());
                continue;
            }
            match (point.typ, run.len()) {
                (_, 0) => path.line_to(point.pos()),
                (PointType::Curve, 1) => path.quad_to(run[0], point.pos()),
                (PointType::Curve, 2) => path.curve_to(run[0], run[1], point.pos()),
                (PointType::QCurve, _) => {
                    // implied on-curves at the midpoints of consecutive
                    // control points
                    for pair in run.windows(2) {
                        path.quad_to(pair[0], pair[0].midpoint(pair[1]));
                    }
                    path.quad_to(run[run.len() - 1], point.pos());
                }
                _ => return Err(GlyphEditError::MalformedContour),
            }
            run.clear();
        }
        if self.closed {
            path.close_path();
        }
        Ok(path)
    }
}

/// Remove several indices from a point list in one pass.
fn remove_indices(points: &mut Vec<Point>, mut doomed: Vec<usize>) {
    doomed.sort_unstable();
    doomed.dedup();
    for index in doomed.into_iter().rev() {
        points.remove(index);
    }
}

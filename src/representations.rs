use std::collections::HashMap;

use crate::contour::Contour;
use crate::glyph::Glyph;
use crate::point::{Point, PointType};

/// Name of the built-in representation that keeps only selected content.
pub const FILTER_SELECTION: &str = "glyphedit.filterSelection";

type Factory = fn(&Glyph) -> Glyph;

/// Named derived views of a glyph, cached against its revision counter.
///
/// A representation is recomputed only when the glyph's revision has moved
/// past the cached one, so operations may consult the same view repeatedly
/// between edits for free.
#[derive(Debug, Default)]
pub struct Representations {
    factories: HashMap<String, Factory>,
    cache: HashMap<String, (u64, Glyph)>,
}

impl Representations {
    /// A registry with the built-in selection filter installed.
    pub fn new() -> Self {
        let mut reps = Representations::default();
        reps.register(FILTER_SELECTION, filter_selection);
        reps
    }

    pub fn register(&mut self, name: &str, factory: Factory) {
        self.factories.insert(name.to_string(), factory);
        self.cache.remove(name);
    }

    /// Fetch the representation `name` for `glyph`, computing it if the
    /// cache is missing or stale. Unknown names yield `None`.
    pub fn get(&mut self, glyph: &Glyph, name: &str) -> Option<&Glyph> {
        let factory = *self.factories.get(name)?;
        let entry = self
            .cache
            .entry(name.to_string())
            .and_modify(|(revision, cached)| {
                if *revision != glyph.revision() {
                    *cached = factory(glyph);
                    *revision = glyph.revision();
                }
            })
            .or_insert_with(|| (glyph.revision(), factory(glyph)));
        Some(&entry.1)
    }

    /// Drop all cached views, keeping the registered factories.
    pub fn invalidate(&mut self) {
        self.cache.clear();
    }
}

/// Build a copy of `glyph` holding only its selected content.
///
/// Fully selected contours survive whole. Partially selected contours
/// break into open contours, one per run of consecutively selected points;
/// closed contours are scanned cyclically so a run through the seam stays
/// in one piece. Off-curves at the edges of a run have lost an anchor and
/// are dropped, and an anchor left without its leading off-curves becomes
/// a line point.
pub fn filter_selection(glyph: &Glyph) -> Glyph {
    let mut filtered = Glyph::new(&glyph.name);
    filtered.width = glyph.width;
    for contour in &glyph.contours {
        if contour.points.iter().all(|p| p.selected) {
            filtered.contours.push(contour.clone());
            continue;
        }
        for run in selected_runs(contour) {
            if let Some(piece) = contour_from_run(run) {
                filtered.contours.push(piece);
            }
        }
    }
    filtered
        .anchors
        .extend(glyph.anchors.iter().filter(|a| a.selected).cloned());
    filtered
        .components
        .extend(glyph.components.iter().filter(|c| c.selected).cloned());
    filtered
        .guidelines
        .extend(glyph.guidelines.iter().filter(|g| g.selected).cloned());
    if let Some(image) = glyph.image.as_ref().filter(|i| i.selected) {
        filtered.image = Some(image.clone());
    }
    filtered
}

/// Runs of consecutively selected points. For closed contours the scan
/// starts just past an unselected point so a run across the seam comes out
/// contiguous. Assumes at least one point is unselected.
fn selected_runs(contour: &Contour) -> Vec<Vec<Point>> {
    let n = contour.points.len();
    let start = if contour.closed {
        match contour.points.iter().position(|p| !p.selected) {
            Some(i) => i + 1,
            None => 0,
        }
    } else {
        0
    };
    let mut runs = Vec::new();
    let mut run: Vec<Point> = Vec::new();
    for offset in 0..n {
        let point = &contour.points[(start + offset) % n];
        if point.selected {
            run.push(point.clone());
        } else if !run.is_empty() {
            runs.push(std::mem::take(&mut run));
        }
    }
    if !run.is_empty() {
        runs.push(run);
    }
    runs
}

/// Shape one run of points into a standalone open contour, or `None` when
/// nothing on-curve survives the trim.
fn contour_from_run(mut run: Vec<Point>) -> Option<Contour> {
    while run.first().is_some_and(|p| !p.is_on_curve()) {
        run.remove(0);
    }
    while run.last().is_some_and(|p| !p.is_on_curve()) {
        run.pop();
    }
    if run.is_empty() {
        return None;
    }
    run[0].typ = PointType::Move;
    run[0].smooth = false;
    let mut prev_on_curve = true;
    for point in run.iter_mut().skip(1) {
        if point.is_on_curve() {
            if prev_on_curve && point.typ != PointType::Line {
                point.typ = PointType::Line;
                point.smooth = false;
            }
            prev_on_curve = true;
        } else {
            prev_on_curve = false;
        }
    }
    Some(Contour::new(run, false))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn square(selected: &[bool]) -> Glyph {
        let coords = [(0.0, 0.0), (100.0, 0.0), (100.0, 100.0), (0.0, 100.0)];
        let mut glyph = Glyph::new("box");
        let points = coords
            .iter()
            .zip(selected)
            .map(|(&(x, y), &sel)| {
                let mut p = Point::new(x, y, PointType::Line, false);
                p.selected = sel;
                p
            })
            .collect();
        glyph.contours.push(Contour::new(points, true));
        glyph
    }

    #[test]
    fn fully_selected_contour_survives_whole() {
        let glyph = square(&[true, true, true, true]);
        let filtered = filter_selection(&glyph);
        assert_eq!(filtered.contours, glyph.contours);
    }

    #[test]
    fn run_through_the_seam_stays_contiguous() {
        // points 3 and 0 selected: one run crossing the wrap point
        let glyph = square(&[true, false, false, true]);
        let filtered = filter_selection(&glyph);
        assert_eq!(filtered.contours.len(), 1);
        let piece = &filtered.contours[0];
        assert!(!piece.closed);
        assert_eq!(piece.points[0].typ, PointType::Move);
        assert_eq!(piece.points[0].pos(), kurbo::Point::new(0.0, 100.0));
        assert_eq!(piece.points[1].pos(), kurbo::Point::new(0.0, 0.0));
    }

    #[test]
    fn dangling_offcurves_trimmed_and_anchor_retyped() {
        let mut glyph = Glyph::new("o");
        let mut points = vec![
            Point::new(0.0, 0.0, PointType::Curve, false),
            Point::off_curve(10.0, 40.0),
            Point::off_curve(40.0, 60.0),
            Point::new(80.0, 60.0, PointType::Curve, true),
            Point::new(120.0, 0.0, PointType::Line, false),
        ];
        // select the trailing off-curve and both anchors of the cubic:
        // the off-curve loses its partner and must go
        for i in [2, 3, 4] {
            points[i].selected = true;
        }
        glyph.contours.push(Contour::new(points, true));
        let filtered = filter_selection(&glyph);
        assert_eq!(filtered.contours.len(), 1);
        let piece = &filtered.contours[0];
        assert_eq!(piece.points.len(), 2);
        assert_eq!(piece.points[0].typ, PointType::Move);
        assert!(!piece.points[0].smooth);
        assert_eq!(piece.points[1].typ, PointType::Line);
    }

    #[test]
    fn selected_attachments_are_kept() {
        let mut glyph = Glyph::new("a");
        glyph.anchors.push(crate::Anchor::new(10.0, 10.0, "top"));
        glyph.anchors.push({
            let mut a = crate::Anchor::new(20.0, 20.0, "bottom");
            a.selected = true;
            a
        });
        let filtered = filter_selection(&glyph);
        assert_eq!(filtered.anchors.len(), 1);
        assert_eq!(filtered.anchors[0].name, "bottom");
    }

    #[test]
    fn cache_tracks_glyph_revision() {
        let mut reps = Representations::new();
        let mut glyph = square(&[true, false, false, false]);
        let first = reps.get(&glyph, FILTER_SELECTION).unwrap().clone();
        assert_eq!(first.contours.len(), 1);

        // stale cache would still show one piece after deselecting
        glyph.contours[0].points[0].selected = false;
        glyph.touch();
        let second = reps.get(&glyph, FILTER_SELECTION).unwrap();
        assert!(second.contours.is_empty());
    }

    #[test]
    fn unknown_representation_is_none() {
        let mut reps = Representations::new();
        let glyph = Glyph::new("a");
        assert!(reps.get(&glyph, "nope").is_none());
    }
}

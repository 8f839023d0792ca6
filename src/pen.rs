use kurbo::Affine;

use crate::contour::Contour;
use crate::point::{Point, PointType};

/// Receiver for a point-by-point replay of a glyph's outline, in the
/// spirit of the UFO point pen protocol.
pub trait PointPen {
    fn begin_path(&mut self, closed: bool);
    fn add_point(&mut self, x: f64, y: f64, typ: PointType, smooth: bool);
    fn end_path(&mut self);
    fn add_component(&mut self, base: &str, transform: Affine);
}

/// A pen that rebuilds contours and components, used to pour a filtered
/// outline back into a glyph.
#[derive(Debug, Default)]
pub struct GlyphBuilderPen {
    contours: Vec<Contour>,
    components: Vec<crate::Component>,
    current: Option<Contour>,
}

impl GlyphBuilderPen {
    pub fn new() -> Self {
        GlyphBuilderPen::default()
    }

    pub fn into_parts(self) -> (Vec<Contour>, Vec<crate::Component>) {
        (self.contours, self.components)
    }
}

impl PointPen for GlyphBuilderPen {
    fn begin_path(&mut self, closed: bool) {
        self.current = Some(Contour::new(Vec::new(), closed));
    }

    fn add_point(&mut self, x: f64, y: f64, typ: PointType, smooth: bool) {
        if let Some(contour) = self.current.as_mut() {
            contour.points.push(Point::new(x, y, typ, smooth));
        }
    }

    fn end_path(&mut self) {
        if let Some(contour) = self.current.take() {
            self.contours.push(contour);
        }
    }

    fn add_component(&mut self, base: &str, transform: Affine) {
        self.components
            .push(crate::Component::new(base, transform));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::glyph::Glyph;

    #[test]
    fn round_trips_contours_and_components() {
        let mut glyph = Glyph::new("agrave");
        glyph.contours.push(Contour::new(
            vec![
                Point::new(0.0, 0.0, PointType::Line, false),
                Point::new(100.0, 0.0, PointType::Line, true),
            ],
            true,
        ));
        glyph
            .components
            .push(crate::Component::new("grave", Affine::translate((120.0, 0.0))));

        let mut pen = GlyphBuilderPen::new();
        glyph.draw_points(&mut pen);
        let (contours, components) = pen.into_parts();
        assert_eq!(contours, glyph.contours);
        assert_eq!(components, glyph.components);
    }

    #[test]
    fn replay_drops_selection() {
        let mut glyph = Glyph::new("a");
        let mut point = Point::new(0.0, 0.0, PointType::Move, false);
        point.selected = true;
        glyph.contours.push(Contour::new(vec![point], false));

        let mut pen = GlyphBuilderPen::new();
        glyph.draw_points(&mut pen);
        let (contours, _) = pen.into_parts();
        assert!(!contours[0].points[0].selected);
    }
}

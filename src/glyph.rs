use kurbo::Affine;

use crate::anchor::Anchor;
use crate::component::Component;
use crate::contour::Contour;
use crate::error::GlyphEditError;
use crate::guide::Guideline;
use crate::pen::PointPen;

/// A background image attached to a glyph.
#[derive(Debug, Clone, PartialEq)]
pub struct Image {
    pub file_name: String,
    pub transform: Affine,
    pub selected: bool,
}

impl Image {
    pub fn new(file_name: &str, transform: Affine) -> Self {
        Image {
            file_name: file_name.to_string(),
            transform,
            selected: false,
        }
    }

    pub fn move_by(&mut self, delta: kurbo::Vec2) {
        self.transform = Affine::translate(delta) * self.transform;
    }
}

/// One glyph of a font: outlines plus the attachment data editors care
/// about.
///
/// The revision counter increments on every acknowledged mutation and lets
/// derived data (see [`Representations`](crate::Representations)) detect
/// staleness without hashing the outline.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Glyph {
    pub name: String,
    pub width: f64,
    pub contours: Vec<Contour>,
    pub anchors: Vec<Anchor>,
    pub components: Vec<Component>,
    pub guidelines: Vec<Guideline>,
    pub image: Option<Image>,
    revision: u64,
}

impl Glyph {
    pub fn new(name: &str) -> Self {
        Glyph {
            name: name.to_string(),
            ..Default::default()
        }
    }

    /// Mark the glyph as changed. Editing operations call this once per
    /// batch after mutating outlines in place.
    pub fn touch(&mut self) {
        self.revision += 1;
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Remove and return the contour at `index`.
    pub fn remove_contour(&mut self, index: usize) -> Result<Contour, GlyphEditError> {
        if index >= self.contours.len() {
            return Err(GlyphEditError::ContourOutOfRange {
                index,
                count: self.contours.len(),
            });
        }
        self.touch();
        Ok(self.contours.remove(index))
    }

    /// Drop outlines, components, anchors, guidelines and the image,
    /// keeping name and width.
    pub fn clear(&mut self) {
        self.contours.clear();
        self.components.clear();
        self.anchors.clear();
        self.guidelines.clear();
        self.image = None;
        self.touch();
    }

    /// Replay the glyph's contours and components into a point pen.
    /// Selection state is not part of the pen protocol and is dropped.
    pub fn draw_points<P: PointPen>(&self, pen: &mut P) {
        for contour in &self.contours {
            pen.begin_path(contour.closed);
            for point in &contour.points {
                pen.add_point(point.x, point.y, point.typ, point.smooth);
            }
            pen.end_path();
        }
        for component in &self.components {
            pen.add_component(&component.base, component.transform);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::point::{Point, PointType};

    #[test]
    fn touch_bumps_revision() {
        let mut g = Glyph::new("a");
        assert_eq!(g.revision(), 0);
        g.touch();
        g.touch();
        assert_eq!(g.revision(), 2);
    }

    #[test]
    fn clear_keeps_metrics_and_bumps_revision() {
        let mut g = Glyph::new("a");
        g.width = 500.0;
        g.contours.push(Contour::new(
            vec![Point::new(0.0, 0.0, PointType::Move, false)],
            false,
        ));
        g.anchors.push(Anchor::new(250.0, 700.0, "top"));
        g.guidelines.push(Guideline::new(0.0, 500.0, 0.0));
        let rev = g.revision();
        g.clear();
        assert_eq!(g.name, "a");
        assert_eq!(g.width, 500.0);
        assert!(g.contours.is_empty());
        assert!(g.anchors.is_empty());
        assert!(g.guidelines.is_empty());
        assert!(g.revision() > rev);
    }

    #[test]
    fn remove_contour_checks_bounds() {
        let mut g = Glyph::new("a");
        assert!(g.remove_contour(0).is_err());
        g.contours.push(Contour::default());
        assert!(g.remove_contour(0).is_ok());
        assert!(g.contours.is_empty());
    }
}

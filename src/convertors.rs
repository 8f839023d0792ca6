//! Conversions between the editing model and norad's UFO types.
//!
//! Reading pulls in everything the editor operates on: contours,
//! components, anchors, and guidelines. Writing covers the outline
//! (contours and components); attachment metadata owned by the wider
//! application round-trips outside this crate.

use kurbo::Affine;

use crate::anchor::Anchor;
use crate::component::Component;
use crate::contour::Contour;
use crate::glyph::Glyph;
use crate::guide::Guideline;
use crate::point::{Point, PointType};

impl From<&norad::PointType> for PointType {
    fn from(typ: &norad::PointType) -> Self {
        match typ {
            norad::PointType::Move => PointType::Move,
            norad::PointType::Line => PointType::Line,
            norad::PointType::OffCurve => PointType::OffCurve,
            norad::PointType::Curve => PointType::Curve,
            norad::PointType::QCurve => PointType::QCurve,
        }
    }
}

impl From<PointType> for norad::PointType {
    fn from(typ: PointType) -> Self {
        match typ {
            PointType::Move => norad::PointType::Move,
            PointType::Line => norad::PointType::Line,
            PointType::OffCurve => norad::PointType::OffCurve,
            PointType::Curve => norad::PointType::Curve,
            PointType::QCurve => norad::PointType::QCurve,
        }
    }
}

impl From<&norad::ContourPoint> for Point {
    fn from(p: &norad::ContourPoint) -> Self {
        Point::new(p.x, p.y, (&p.typ).into(), p.smooth)
    }
}

fn affine_from_norad(t: &norad::AffineTransform) -> Affine {
    Affine::new([
        t.x_scale, t.xy_scale, t.yx_scale, t.y_scale, t.x_offset, t.y_offset,
    ])
}

fn affine_to_norad(affine: Affine) -> norad::AffineTransform {
    let [x_scale, xy_scale, yx_scale, y_scale, x_offset, y_offset] = affine.as_coeffs();
    norad::AffineTransform {
        x_scale,
        xy_scale,
        yx_scale,
        y_scale,
        x_offset,
        y_offset,
    }
}

impl From<&norad::Component> for Component {
    fn from(c: &norad::Component) -> Self {
        Component::new(&c.base.to_string(), affine_from_norad(&c.transform))
    }
}

impl From<&norad::Guideline> for Guideline {
    fn from(g: &norad::Guideline) -> Self {
        let mut guide = match g.line {
            norad::Line::Angle { x, y, degrees } => Guideline::new(x, y, degrees),
            norad::Line::Horizontal(y) => Guideline::new(0.0, y, 0.0),
            norad::Line::Vertical(x) => Guideline::new(x, 0.0, 90.0),
        };
        guide.name = g.name.as_ref().map(|n| n.to_string());
        guide
    }
}

/// Import one norad contour. Openness follows the UFO convention: a
/// contour starting with a `Move` point is open.
pub fn contour_from_norad(contour: &norad::Contour) -> Contour {
    let closed = contour
        .points
        .first()
        .map_or(true, |p| p.typ != norad::PointType::Move);
    Contour::new(contour.points.iter().map(Point::from).collect(), closed)
}

pub fn contour_to_norad(contour: &Contour) -> norad::Contour {
    let points = contour
        .points
        .iter()
        .map(|p| norad::ContourPoint::new(p.x, p.y, p.typ.into(), p.smooth, None, None))
        .collect();
    norad::Contour::new(points, None)
}

/// Import a norad glyph into the editing model.
pub fn glyph_from_norad(glyph: &norad::Glyph) -> Glyph {
    let mut out = Glyph::new(&glyph.name().to_string());
    out.width = glyph.width;
    out.contours = glyph.contours.iter().map(contour_from_norad).collect();
    out.components = glyph.components.iter().map(Component::from).collect();
    out.anchors = glyph
        .anchors
        .iter()
        .map(|a| {
            let name = a.name.as_ref().map(|n| n.to_string()).unwrap_or_default();
            Anchor::new(a.x, a.y, &name)
        })
        .collect();
    out.guidelines = glyph.guidelines.iter().map(Guideline::from).collect();
    out
}

/// Export the glyph's outline back to norad. Components whose base name
/// is not a valid UFO glyph name are skipped with a warning.
pub fn glyph_to_norad(glyph: &Glyph) -> norad::Glyph {
    let mut out = norad::Glyph::new(&glyph.name);
    out.width = glyph.width;
    out.contours = glyph.contours.iter().map(contour_to_norad).collect();
    out.components = glyph
        .components
        .iter()
        .filter_map(|c| match c.base.parse::<norad::Name>() {
            Ok(base) => Some(norad::Component::new(
                base,
                affine_to_norad(c.transform),
                None,
            )),
            Err(_) => {
                log::warn!(
                    "skipping component of '{}' with invalid base name '{}'",
                    glyph.name,
                    c.base
                );
                None
            }
        })
        .collect();
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn norad_point(x: f64, y: f64, typ: norad::PointType, smooth: bool) -> norad::ContourPoint {
        norad::ContourPoint::new(x, y, typ, smooth, None, None)
    }

    #[test]
    fn closedness_follows_leading_move() {
        let open = norad::Contour::new(
            vec![
                norad_point(0.0, 0.0, norad::PointType::Move, false),
                norad_point(10.0, 0.0, norad::PointType::Line, false),
            ],
            None,
        );
        assert!(!contour_from_norad(&open).closed);

        let closed = norad::Contour::new(
            vec![
                norad_point(0.0, 0.0, norad::PointType::Line, false),
                norad_point(10.0, 0.0, norad::PointType::Line, false),
            ],
            None,
        );
        assert!(contour_from_norad(&closed).closed);
    }

    #[test]
    fn outline_round_trips() {
        let mut glyph = Glyph::new("o");
        glyph.width = 480.0;
        glyph.contours.push(Contour::new(
            vec![
                Point::new(0.0, 0.0, PointType::Curve, true),
                Point::off_curve(30.0, 30.0),
                Point::off_curve(70.0, 70.0),
                Point::new(100.0, 100.0, PointType::Curve, false),
            ],
            true,
        ));
        glyph
            .components
            .push(Component::new("acutecomb", Affine::translate((50.0, 0.0))));

        let norad_glyph = glyph_to_norad(&glyph);
        let back = glyph_from_norad(&norad_glyph);
        assert_eq!(back.name, "o");
        assert_eq!(back.width, 480.0);
        assert_eq!(back.contours, glyph.contours);
        assert_eq!(back.components, glyph.components);
    }

    #[test]
    fn invalid_component_base_is_dropped() {
        let mut glyph = Glyph::new("bad");
        glyph
            .components
            .push(Component::new("not\na\nname", Affine::IDENTITY));
        let norad_glyph = glyph_to_norad(&glyph);
        assert!(norad_glyph.components.is_empty());
    }
}

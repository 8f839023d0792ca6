use kurbo::Vec2;

/// The role of a point within a contour, following the UFO point taxonomy.
///
/// On-curve points carry the type of the segment they terminate; control
/// points are `OffCurve`.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum PointType {
    /// Starts an open contour. Never appears in a closed contour.
    Move,
    /// A straight line from the previous on-curve point.
    Line,
    /// Ends a cubic segment with up to two preceding off-curves.
    Curve,
    /// Ends a quadratic segment, with TrueType implied on-curve rules.
    QCurve,
    /// A bezier control point.
    OffCurve,
}

impl PointType {
    pub fn is_on_curve(self) -> bool {
        self != PointType::OffCurve
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
    pub typ: PointType,
    /// Only meaningful on on-curve points: incoming and outgoing tangents
    /// must stay collinear through this point.
    pub smooth: bool,
    pub selected: bool,
}

impl Point {
    pub fn new(x: f64, y: f64, typ: PointType, smooth: bool) -> Self {
        Point {
            x,
            y,
            typ,
            smooth,
            selected: false,
        }
    }

    pub fn off_curve(x: f64, y: f64) -> Self {
        Point::new(x, y, PointType::OffCurve, false)
    }

    pub fn is_on_curve(&self) -> bool {
        self.typ.is_on_curve()
    }

    pub fn pos(&self) -> kurbo::Point {
        kurbo::Point::new(self.x, self.y)
    }

    pub fn set_pos(&mut self, p: kurbo::Point) {
        self.x = p.x;
        self.y = p.y;
    }

    pub fn move_by(&mut self, delta: Vec2) {
        self.x += delta.x;
        self.y += delta.y;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn on_curve_classification() {
        assert!(PointType::Move.is_on_curve());
        assert!(PointType::Line.is_on_curve());
        assert!(PointType::Curve.is_on_curve());
        assert!(PointType::QCurve.is_on_curve());
        assert!(!PointType::OffCurve.is_on_curve());
    }

    #[test]
    fn move_by_translates() {
        let mut p = Point::new(10.0, 20.0, PointType::Line, false);
        p.move_by(Vec2::new(-3.0, 4.5));
        assert_eq!(p.pos(), kurbo::Point::new(7.0, 24.5));
    }
}

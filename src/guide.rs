use kurbo::Vec2;

/// A guideline, owned either by a glyph or shared from the parent font.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Guideline {
    pub x: f64,
    pub y: f64,
    pub angle: f64,
    pub name: Option<String>,
    pub selected: bool,
}

impl Guideline {
    pub fn new(x: f64, y: f64, angle: f64) -> Self {
        Guideline {
            x,
            y,
            angle,
            name: None,
            selected: false,
        }
    }

    pub fn move_by(&mut self, delta: Vec2) {
        self.x += delta.x;
        self.y += delta.y;
    }
}

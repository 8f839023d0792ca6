use kurbo::{Affine, Vec2};

/// A reference to another glyph, placed under an affine transform.
#[derive(Debug, Clone, PartialEq)]
pub struct Component {
    pub base: String,
    pub transform: Affine,
    pub selected: bool,
}

impl Component {
    pub fn new(base: &str, transform: Affine) -> Self {
        Component {
            base: base.to_string(),
            transform,
            selected: false,
        }
    }

    pub fn move_by(&mut self, delta: Vec2) {
        self.transform = Affine::translate(delta) * self.transform;
    }
}

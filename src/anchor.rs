use kurbo::Vec2;

#[derive(Debug, Clone, PartialEq)]
pub struct Anchor {
    pub x: f64,
    pub y: f64,
    pub name: String,
    pub selected: bool,
}

impl Anchor {
    pub fn new(x: f64, y: f64, name: &str) -> Self {
        Anchor {
            x,
            y,
            name: name.to_string(),
            selected: false,
        }
    }

    pub fn pos(&self) -> kurbo::Point {
        kurbo::Point::new(self.x, self.y)
    }

    pub fn move_by(&mut self, delta: Vec2) {
        self.x += delta.x;
        self.y += delta.y;
    }
}

use serde::{Deserialize, Serialize};

/// A rectangle in logical pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Split off a strip of `height` at the bottom.
    ///
    /// Returns `(top, bottom)`. The strip is clamped to the rect, so the top
    /// part never gets a negative height.
    pub fn split_bottom(&self, height: f64) -> (Rect, Rect) {
        let strip = height.clamp(0.0, self.height);
        let top = Rect::new(self.x, self.y, self.width, self.height - strip);
        let bottom = Rect::new(self.x, self.y + self.height - strip, self.width, strip);
        (top, bottom)
    }

    pub fn contains(&self, x: f64, y: f64) -> bool {
        x >= self.x && x < self.x + self.width && y >= self.y && y < self.y + self.height
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self { x, y, width, height }
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    /// Multiplies every coordinate by `factor`.
    pub fn scaled(&self, factor: f32) -> Self {
        Self {
            x: self.x * factor,
            y: self.y * factor,
            width: self.width * factor,
            height: self.height * factor,
        }
    }

    /// True if the rectangle overlaps the vertical band `[top, bottom)`.
    pub fn overlaps_band(&self, top: f32, bottom: f32) -> bool {
        self.y < bottom && self.bottom() > top
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    pub fn zero() -> Self {
        Self {
            width: 0.0,
            height: 0.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn band_overlap_is_half_open() {
        let r = Rect::new(0.0, 90.0, 10.0, 20.0);
        assert!(r.overlaps_band(0.0, 100.0));
        assert!(r.overlaps_band(100.0, 200.0));
        assert!(!r.overlaps_band(110.0, 200.0));
        assert!(!Rect::new(0.0, 100.0, 10.0, 5.0).overlaps_band(0.0, 100.0));
    }
}

//=========================================================================
// Math Primitives
//
// Positions and sizes are `glam::Vec2` (world units, parent-relative on
// objects). Pixel-space rectangles (texture source regions, bounds) use
// the small integer `Rect` below.
//
//=========================================================================

//=== External Crates =====================================================

pub use glam::Vec2;

//=== Rect ================================================================

/// Axis-aligned integer rectangle, top-left origin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

impl Rect {
    pub const fn new(x: i32, y: i32, w: i32, h: i32) -> Self {
        Self { x, y, w, h }
    }

    /// Rectangle of `size` centered on `center`.
    pub fn centered(center: Vec2, size: Vec2) -> Self {
        Self {
            x: (center.x - size.x / 2.0) as i32,
            y: (center.y - size.y / 2.0) as i32,
            w: size.x as i32,
            h: size.y as i32,
        }
    }

    /// Rectangle of `size` whose top-left corner is `origin`.
    pub fn from_origin(origin: Vec2, size: Vec2) -> Self {
        Self {
            x: origin.x as i32,
            y: origin.y as i32,
            w: size.x as i32,
            h: size.y as i32,
        }
    }

    pub fn min(&self) -> Vec2 {
        Vec2::new(self.x as f32, self.y as f32)
    }

    pub fn max(&self) -> Vec2 {
        Vec2::new((self.x + self.w) as f32, (self.y + self.h) as f32)
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn centered_rect_straddles_center() {
        let rect = Rect::centered(Vec2::new(10.0, 10.0), Vec2::new(4.0, 6.0));
        assert_eq!(rect, Rect::new(8, 7, 4, 6));
        assert_eq!(rect.max(), Vec2::new(12.0, 13.0));
    }

    #[test]
    fn origin_rect_starts_at_origin() {
        let rect = Rect::from_origin(Vec2::new(3.0, 5.0), Vec2::new(2.0, 2.0));
        assert_eq!(rect.min(), Vec2::new(3.0, 5.0));
        assert_eq!(rect.max(), Vec2::new(5.0, 7.0));
    }
}

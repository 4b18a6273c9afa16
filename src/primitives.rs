//! Value types shared by the geometry engines and the ripple renderer.
//!
//! These mirror the host toolkit's own primitives closely enough that an
//! adapter can convert between them field by field.

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    pub const fn rgba(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    pub const fn from_hex(hex: u32) -> Self {
        Self {
            r: ((hex >> 16) & 0xFF) as f32 / 255.0,
            g: ((hex >> 8) & 0xFF) as f32 / 255.0,
            b: (hex & 0xFF) as f32 / 255.0,
            a: 1.0,
        }
    }

    /// Same RGB channels with the alpha replaced by an 8-bit value.
    pub fn with_alpha_u8(self, alpha: u8) -> Self {
        Self {
            a: f32::from(alpha) / 255.0,
            ..self
        }
    }

    /// Alpha channel quantized to 8 bits.
    pub fn alpha_u8(&self) -> u8 {
        (self.a.clamp(0.0, 1.0) * 255.0).round() as u8
    }

    pub const WHITE: Color = Color::rgb(1.0, 1.0, 1.0);
    pub const BLACK: Color = Color::rgb(0.0, 0.0, 0.0);
    pub const TRANSPARENT: Color = Color::rgba(0.0, 0.0, 0.0, 0.0);
}

impl Default for Color {
    fn default() -> Self {
        Self::TRANSPARENT
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub fn distance_to(&self, other: Point) -> f32 {
        let dx = other.x - self.x;
        let dy = other.y - self.y;
        (dx * dx + dy * dy).sqrt()
    }

    pub fn offset(&self, dx: f32, dy: f32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Length of the shorter side.
    pub fn min_side(&self) -> f32 {
        self.width.min(self.height)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn from_size(size: Size) -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            width: size.width,
            height: size.height,
        }
    }

    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    pub fn center(&self) -> Point {
        Point::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    /// Corners in clockwise order starting at the top-left.
    pub fn corners(&self) -> [Point; 4] {
        let right = self.x + self.width;
        let bottom = self.y + self.height;
        [
            Point::new(self.x, self.y),
            Point::new(right, self.y),
            Point::new(right, bottom),
            Point::new(self.x, bottom),
        ]
    }

    pub fn contains(&self, point: Point) -> bool {
        point.x >= self.x
            && point.x < self.x + self.width
            && point.y >= self.y
            && point.y < self.y + self.height
    }
}

/// Concrete per-corner radii of a rounded rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct CornerRadius {
    pub top_left: f32,
    pub top_right: f32,
    pub bottom_right: f32,
    pub bottom_left: f32,
}

impl CornerRadius {
    pub const fn new(top_left: f32, top_right: f32, bottom_right: f32, bottom_left: f32) -> Self {
        Self {
            top_left,
            top_right,
            bottom_right,
            bottom_left,
        }
    }

    pub const fn uniform(radius: f32) -> Self {
        Self::new(radius, radius, radius, radius)
    }

    /// Radii in `[top_left, top_right, bottom_right, bottom_left]` order.
    pub fn to_array(self) -> [f32; 4] {
        [
            self.top_left,
            self.top_right,
            self.bottom_right,
            self.bottom_left,
        ]
    }
}

impl From<[f32; 4]> for CornerRadius {
    fn from(v: [f32; 4]) -> Self {
        CornerRadius::new(v[0], v[1], v[2], v[3])
    }
}

/// A rectangle with independently rounded corners, used as a clip region.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct RoundedRect {
    pub rect: Rect,
    pub radii: CornerRadius,
}

impl RoundedRect {
    pub fn new(rect: Rect, radii: CornerRadius) -> Self {
        Self { rect, radii }
    }

    /// Check if a point is inside this rect with rounded corners.
    /// Each radius is clamped to half of the smaller dimension.
    pub fn contains(&self, point: Point) -> bool {
        if !self.rect.contains(point) {
            return false;
        }

        let max_radius = (self.rect.width.min(self.rect.height) / 2.0).max(0.0);
        let left = self.rect.x;
        let right = self.rect.x + self.rect.width;
        let top = self.rect.y;
        let bottom = self.rect.y + self.rect.height;

        // (radius, corner-circle center, is the point in this corner's region)
        let corners = [
            (self.radii.top_left, 1.0, 1.0, left, top),
            (self.radii.top_right, -1.0, 1.0, right, top),
            (self.radii.bottom_right, -1.0, -1.0, right, bottom),
            (self.radii.bottom_left, 1.0, -1.0, left, bottom),
        ];

        for (radius, sx, sy, cx, cy) in corners {
            let r = radius.min(max_radius);
            if r <= 0.0 {
                continue;
            }
            let center = Point::new(cx + sx * r, cy + sy * r);
            let in_x = (point.x - center.x) * sx < 0.0;
            let in_y = (point.y - center.y) * sy < 0.0;
            if in_x && in_y {
                return point.distance_to(center) <= r;
            }
        }

        true
    }
}

/// A single drop shadow layer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoxShadow {
    /// Shadow offset in logical pixels (x, y)
    pub offset: (f32, f32),
    /// Blur radius in logical pixels
    pub blur: f32,
    /// Spread amount in logical pixels (negative shrinks the shadow)
    pub spread: f32,
    /// Shadow color
    pub color: Color,
}

impl BoxShadow {
    pub fn new(offset: (f32, f32), blur: f32, spread: f32, color: Color) -> Self {
        Self {
            offset,
            blur,
            spread,
            color,
        }
    }

    /// Create a default shadow (no shadow)
    pub fn none() -> Self {
        Self {
            offset: (0.0, 0.0),
            blur: 0.0,
            spread: 0.0,
            color: Color::TRANSPARENT,
        }
    }
}

/// A composite shadow: one primary layer and any number painted beneath it.
#[derive(Debug, Clone, PartialEq)]
pub struct BoxShadows {
    pub primary: BoxShadow,
    pub rest: Vec<BoxShadow>,
}

impl BoxShadows {
    pub fn new(primary: BoxShadow, rest: Vec<BoxShadow>) -> Self {
        Self { primary, rest }
    }

    pub fn len(&self) -> usize {
        1 + self.rest.len()
    }

    pub fn is_empty(&self) -> bool {
        false
    }

    pub fn iter(&self) -> impl Iterator<Item = &BoxShadow> {
        std::iter::once(&self.primary).chain(self.rest.iter())
    }

    pub fn get(&self, index: usize) -> Option<&BoxShadow> {
        match index {
            0 => Some(&self.primary),
            n => self.rest.get(n - 1),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_from_hex() {
        let color = Color::from_hex(0xFF0000);
        assert_eq!(color.r, 1.0);
        assert_eq!(color.g, 0.0);
        assert_eq!(color.b, 0.0);
        assert_eq!(color.a, 1.0);
    }

    #[test]
    fn test_color_with_alpha_u8() {
        let color = Color::from_hex(0x336699).with_alpha_u8(51);
        assert_eq!(color.alpha_u8(), 51);
        assert_eq!(color.r, Color::from_hex(0x336699).r);
        assert_eq!(Color::default(), Color::TRANSPARENT);
    }

    #[test]
    fn test_rect_center_and_corners() {
        let rect = Rect::new(10.0, 20.0, 100.0, 50.0);
        assert_eq!(rect.center(), Point::new(60.0, 45.0));
        assert_eq!(rect.corners()[2], Point::new(110.0, 70.0));
        assert!(rect.contains(Point::new(10.0, 20.0)));
        assert!(!rect.contains(Point::new(110.0, 70.0)));
    }

    #[test]
    fn test_rounded_rect_contains() {
        let rect = RoundedRect::new(
            Rect::new(0.0, 0.0, 100.0, 40.0),
            CornerRadius::new(20.0, 0.0, 20.0, 0.0),
        );
        // Cut away by the top-left corner
        assert!(!rect.contains(Point::new(1.0, 1.0)));
        // Square top-right corner
        assert!(rect.contains(Point::new(99.0, 1.0)));
        // Cut away by the bottom-right corner
        assert!(!rect.contains(Point::new(99.0, 39.0)));
        // Middle
        assert!(rect.contains(Point::new(50.0, 20.0)));
    }

    #[test]
    fn test_box_shadows_iteration_order() {
        let a = BoxShadow::new((0.0, 1.0), 1.0, 0.0, Color::BLACK);
        let b = BoxShadow::new((0.0, 2.0), 2.0, 0.0, Color::BLACK);
        let shadows = BoxShadows::new(a, vec![b]);
        assert_eq!(shadows.len(), 2);
        assert_eq!(shadows.get(0), Some(&a));
        assert_eq!(shadows.get(1), Some(&b));
        assert_eq!(shadows.get(2), None);
        assert_eq!(shadows.iter().count(), 2);
    }
}

//! Axis-aligned overlap tests
//!
//! Boxes are stored as center + half-extents, which keeps the test symmetric
//! and independent of where the sprite origin sits.

use glam::Vec2;

/// Axis-aligned bounding box
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub center: Vec2,
    pub half_extents: Vec2,
}

impl Aabb {
    pub fn new(center: Vec2, half_extents: Vec2) -> Self {
        Self {
            center,
            half_extents,
        }
    }

    /// Box centered on `center` with full width/height `size`
    pub fn from_size(center: Vec2, size: Vec2) -> Self {
        Self::new(center, size / 2.0)
    }

    pub fn intersects(&self, other: &Aabb) -> bool {
        intersects(self, other)
    }
}

/// Boxes overlap when the center distance on both axes is strictly less than
/// the summed half-extents. Touching edges do not count.
#[inline]
pub fn intersects(a: &Aabb, b: &Aabb) -> bool {
    let offset = (a.center - b.center).abs();
    let reach = a.half_extents + b.half_extents;
    offset.x < reach.x && offset.y < reach.y
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square(x: f32, y: f32, size: f32) -> Aabb {
        Aabb::from_size(Vec2::new(x, y), Vec2::splat(size))
    }

    #[test]
    fn test_overlap() {
        let a = square(0.0, 0.0, 10.0);
        let b = square(9.0, -9.0, 10.0);
        assert!(intersects(&a, &b));
        assert!(a.intersects(&b));
    }

    #[test]
    fn test_touching_edges_miss() {
        let a = square(0.0, 0.0, 10.0);
        let b = square(10.0, 0.0, 10.0);
        assert!(!intersects(&a, &b));
    }

    #[test]
    fn test_separated_on_one_axis_misses() {
        // Overlapping horizontally, far apart vertically
        let a = square(0.0, 0.0, 10.0);
        let b = square(2.0, 50.0, 10.0);
        assert!(!intersects(&a, &b));
    }

    #[test]
    fn test_uneven_extents() {
        // Tall thin box against a wide flat one
        let tall = Aabb::from_size(Vec2::ZERO, Vec2::new(4.0, 100.0));
        let flat = Aabb::from_size(Vec2::new(0.0, 45.0), Vec2::new(100.0, 4.0));
        assert!(intersects(&tall, &flat));
        assert!(intersects(&flat, &tall));
    }

    #[test]
    fn test_contained_box() {
        let outer = square(0.0, 0.0, 100.0);
        let inner = square(5.0, 5.0, 2.0);
        assert!(intersects(&outer, &inner));
    }
}

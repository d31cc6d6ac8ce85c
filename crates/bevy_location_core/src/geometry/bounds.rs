//! Axis-aligned bounds over polygon data.

use bevy::prelude::*;

/// Axis-aligned rectangle as origin + size.
///
/// [`Bounds::EMPTY`] is the "no contribution" sentinel: it sits at `+inf` with zero
/// size and is the identity element of [`Bounds::union`].
#[derive(Debug, Clone, Copy, PartialEq, Reflect)]
pub struct Bounds {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Default for Bounds {
    fn default() -> Self {
        Self::EMPTY
    }
}

impl Bounds {
    pub const EMPTY: Self = Self {
        x: f32::INFINITY,
        y: f32::INFINITY,
        w: 0.0,
        h: 0.0,
    };

    pub const ZERO: Self = Self {
        x: 0.0,
        y: 0.0,
        w: 0.0,
        h: 0.0,
    };

    pub fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }

    /// Rectangle of the given size anchored at the origin.
    pub fn from_size(size: Vec2) -> Self {
        Self::new(0.0, 0.0, size.x, size.y)
    }

    /// Smallest rectangle containing every point, or [`Bounds::EMPTY`] for no points.
    pub fn from_points<'a>(points: impl IntoIterator<Item = &'a Vec2>) -> Self {
        let mut min = Vec2::INFINITY;
        let mut max = Vec2::NEG_INFINITY;
        for point in points {
            min = min.min(*point);
            max = max.max(*point);
        }

        if min.x == f32::INFINITY {
            return Self::EMPTY;
        }

        Self::new(min.x, min.y, max.x - min.x, max.y - min.y)
    }

    pub fn is_empty(&self) -> bool {
        self.x == f32::INFINITY || self.y == f32::INFINITY
    }

    pub fn x_max(&self) -> f32 {
        self.x + self.w
    }

    pub fn y_max(&self) -> f32 {
        self.y + self.h
    }

    pub fn min(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }

    pub fn max(&self) -> Vec2 {
        Vec2::new(self.x_max(), self.y_max())
    }

    pub fn size(&self) -> Vec2 {
        Vec2::new(self.w, self.h)
    }

    /// Smallest rectangle containing both operands.
    pub fn union(self, other: Self) -> Self {
        if self.is_empty() {
            return other;
        }
        if other.is_empty() {
            return self;
        }

        let min = self.min().min(other.min());
        let max = self.max().max(other.max());
        Self::new(min.x, min.y, max.x - min.x, max.y - min.y)
    }
}

impl From<Bounds> for Rect {
    fn from(bounds: Bounds) -> Self {
        Rect::from_corners(bounds.min(), bounds.max())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn points(raw: &[(f32, f32)]) -> Vec<Vec2> {
        raw.iter().map(|&(x, y)| Vec2::new(x, y)).collect()
    }

    #[test]
    fn empty_input_yields_sentinel() {
        let bounds = Bounds::from_points(&[]);
        assert!(bounds.is_empty());
        assert_eq!(bounds.w, 0.0);
        assert_eq!(bounds.h, 0.0);
        assert_eq!(bounds.x, f32::INFINITY);
    }

    #[test]
    fn bounds_cover_points() {
        let bounds = Bounds::from_points(&points(&[(3.0, -2.0), (-1.0, 4.0), (5.0, 1.0)]));
        assert_eq!(bounds, Bounds::new(-1.0, -2.0, 6.0, 6.0));
        assert_eq!(bounds.x_max(), 5.0);
        assert_eq!(bounds.y_max(), 4.0);
    }

    #[test]
    fn duplicate_points_are_harmless() {
        let bounds = Bounds::from_points(&points(&[(2.0, 2.0), (2.0, 2.0)]));
        assert_eq!(bounds, Bounds::new(2.0, 2.0, 0.0, 0.0));
        assert!(!bounds.is_empty());
    }

    #[test]
    fn union_with_empty_is_identity() {
        let rect = Bounds::new(1.0, 2.0, 3.0, 4.0);
        assert_eq!(rect.union(Bounds::EMPTY), rect);
        assert_eq!(Bounds::EMPTY.union(rect), rect);
        assert!(Bounds::EMPTY.union(Bounds::EMPTY).is_empty());
    }

    #[test]
    fn union_is_commutative_and_associative() {
        let a = Bounds::new(0.0, 0.0, 10.0, 5.0);
        let b = Bounds::new(-4.0, 2.0, 3.0, 8.0);
        let c = Bounds::new(6.0, -7.0, 1.0, 1.0);

        assert_eq!(a.union(b), b.union(a));
        assert_eq!(a.union(b).union(c), a.union(b.union(c)));
        assert_eq!(a.union(b), Bounds::new(-4.0, 0.0, 14.0, 10.0));
    }

    #[test]
    fn bounds_of_concatenation_equal_union_of_bounds() {
        let p = points(&[(0.0, 0.0), (4.0, 9.0), (2.0, -3.0)]);
        let q = points(&[(-5.0, 1.0), (7.0, 2.0)]);
        let all: Vec<Vec2> = p.iter().chain(q.iter()).copied().collect();

        assert_eq!(
            Bounds::from_points(&all),
            Bounds::from_points(&p).union(Bounds::from_points(&q))
        );
        assert_eq!(
            Bounds::from_points(&p),
            Bounds::from_points(&p).union(Bounds::from_points(&[]))
        );
    }

    #[test]
    fn converts_to_bevy_rect() {
        let rect: Rect = Bounds::new(1.0, 2.0, 3.0, 4.0).into();
        assert_eq!(rect.min, Vec2::new(1.0, 2.0));
        assert_eq!(rect.max, Vec2::new(4.0, 6.0));
    }
}

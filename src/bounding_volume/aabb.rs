//! Axis Aligned Bounding Box.

use crate::math::{Isometry, Point, Real, Vector, DIM};
use crate::utils::IsometryOps;
use num::Bounded;

/// An axis-aligned box, stored as its two extreme corners.
///
/// Mesh midphases are queried with `Aabb`s expressed in the local frame of the
/// mesh, and height fields clamp them to their grid to find the cells to visit.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, PartialEq, Copy, Clone)]
pub struct Aabb {
    /// The corner with the smallest coordinates.
    pub mins: Point<Real>,
    /// The corner with the largest coordinates.
    pub maxs: Point<Real>,
}

impl Aabb {
    /// The box spanning from `mins` to `maxs`, which must be component-wise smaller.
    #[inline]
    pub fn new(mins: Point<Real>, maxs: Point<Real>) -> Aabb {
        Aabb { mins, maxs }
    }

    /// An inverted box, with `mins` at `+MAX` and `maxs` at `-MAX`.
    ///
    /// It contains nothing, and the first point given to [`Aabb::take_point`] replaces it.
    #[inline]
    pub fn new_invalid() -> Self {
        let big = Vector::repeat(Real::max_value());
        Self::new(big.into(), (-big).into())
    }

    /// The box centered at `center` reaching `half_extents` away on each axis.
    #[inline]
    pub fn from_half_extents(center: Point<Real>, half_extents: Vector<Real>) -> Self {
        Self::new(center - half_extents, center + half_extents)
    }

    /// The smallest box containing all of `pts`.
    ///
    /// An empty iterator yields [`Aabb::new_invalid`].
    pub fn from_points<'a, I>(pts: I) -> Self
    where
        I: IntoIterator<Item = &'a Point<Real>>,
    {
        pts.into_iter().fold(Self::new_invalid(), |mut aabb, pt| {
            aabb.take_point(*pt);
            aabb
        })
    }

    /// The midpoint of the two corners.
    #[inline]
    pub fn center(&self) -> Point<Real> {
        na::center(&self.mins, &self.maxs)
    }

    /// Half of [`Aabb::extents`].
    #[inline]
    pub fn half_extents(&self) -> Vector<Real> {
        self.extents() / 2.0
    }

    /// The size of the box along each axis.
    #[inline]
    pub fn extents(&self) -> Vector<Real> {
        self.maxs - self.mins
    }

    /// Whether `mins <= maxs` holds on every axis.
    #[inline]
    pub fn is_valid(&self) -> bool {
        self.mins.coords.iter().zip(self.maxs.coords.iter()).all(|(lo, hi)| lo <= hi)
    }

    /// Grows this box just enough to contain `pt`.
    pub fn take_point(&mut self, pt: Point<Real>) {
        self.mins = self.mins.inf(&pt);
        self.maxs = self.maxs.sup(&pt);
    }

    /// The world-space box bounding this one once placed at `pos`.
    #[inline]
    pub fn transform_by(&self, pos: &Isometry<Real>) -> Self {
        Self::from_half_extents(
            pos * self.center(),
            pos.absolute_transform_vector(&self.half_extents()),
        )
    }

    /// This box moved by `shift`.
    #[inline]
    #[must_use]
    pub fn translated(&self, shift: &Vector<Real>) -> Self {
        Self::new(self.mins + shift, self.maxs + shift)
    }

    /// The region covered while this box is translated along `motion`.
    #[inline]
    #[must_use]
    pub fn swept(&self, motion: &Vector<Real>) -> Self {
        self.merged(&self.translated(motion))
    }

    /// Whether the two boxes share at least one point. Touching boxes intersect.
    #[inline]
    pub fn intersects(&self, other: &Aabb) -> bool {
        (0..DIM).all(|i| self.mins[i] <= other.maxs[i] && other.mins[i] <= self.maxs[i])
    }

    /// Whether `other` lies entirely inside this box.
    #[inline]
    pub fn contains(&self, other: &Aabb) -> bool {
        self.contains_local_point(&other.mins) && self.contains_local_point(&other.maxs)
    }

    /// Whether `point`, given in the frame of this box, is inside it or on its boundary.
    #[inline]
    pub fn contains_local_point(&self, point: &Point<Real>) -> bool {
        (0..DIM).all(|i| self.mins[i] <= point[i] && point[i] <= self.maxs[i])
    }

    /// The smallest box containing both `self` and `other`.
    #[inline]
    #[must_use]
    pub fn merged(&self, other: &Aabb) -> Aabb {
        Aabb::new(self.mins.inf(&other.mins), self.maxs.sup(&other.maxs))
    }

    /// This box grown by `amount` on every side.
    #[inline]
    #[must_use]
    pub fn loosened(&self, amount: Real) -> Aabb {
        assert!(amount >= 0.0, "The loosening margin must be positive.");
        let margin = Vector::repeat(amount);
        Aabb::new(self.mins - margin, self.maxs + margin)
    }
}

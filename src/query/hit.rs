use crate::math::{Point, Real, Vector};
use smallvec::SmallVec;

#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
/// Flags describing the outputs of a query and controlling its behavior.
pub struct HitFlags(u16);

bitflags::bitflags! {
    impl HitFlags: u16 {
        /// The hit position is requested, or was computed.
        const POSITION = 1 << 0;
        /// The hit normal is requested, or was computed.
        const NORMAL = 1 << 1;
        /// The hit distance is requested, or was computed.
        const DISTANCE = 1 << 2;
        /// Triangles are hit from both sides and reported normals oppose the query direction.
        const DOUBLE_SIDED = 1 << 3;
        /// Back-facing triangles of single-sided meshes are hit too.
        const MESH_BOTH_SIDES = 1 << 4;
        /// Stop at the first hit found instead of the closest one.
        const ANY_HIT = 1 << 5;
        /// Skip the initial overlap test of sweeps.
        const ASSUME_NO_INITIAL_OVERLAP = 1 << 6;
        /// Compute the minimum translation separating initially overlapping swept shapes.
        const MTD = 1 << 7;
    }
}

impl Default for HitFlags {
    fn default() -> Self {
        HitFlags::POSITION | HitFlags::NORMAL | HitFlags::DISTANCE
    }
}

impl HitFlags {
    /// Are back-facing triangles considered by this query?
    #[inline]
    pub fn hits_back_faces(self) -> bool {
        self.intersects(HitFlags::DOUBLE_SIDED | HitFlags::MESH_BOTH_SIDES)
    }
}

/// The result of a raycast or a sweep.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Hit {
    /// The world-space impact point.
    pub position: Point<Real>,
    /// The world-space impact normal.
    ///
    /// It opposes the query direction, except for raycasts on single-sided meshes queried with
    /// [`HitFlags::MESH_BOTH_SIDES`] which report the raw triangle normal. For initially
    /// overlapping sweeps with [`HitFlags::MTD`] it is the separation direction.
    pub normal: Vector<Real>,
    /// The distance traveled along the query direction before the impact.
    ///
    /// Zero for initial overlaps, negative (minus the penetration depth) for initial
    /// overlaps resolved with [`HitFlags::MTD`].
    pub distance: Real,
    /// The index of the hit face, or [`Hit::NO_FACE`].
    pub face_index: u32,
    /// The outputs actually computed.
    pub flags: HitFlags,
}

impl Hit {
    /// The face index of hits on shapes without faces.
    pub const NO_FACE: u32 = u32::MAX;

    /// A hit with all its outputs computed.
    pub fn new(position: Point<Real>, normal: Vector<Real>, distance: Real, face_index: u32) -> Self {
        Self {
            position,
            normal,
            distance,
            face_index,
            flags: HitFlags::default(),
        }
    }

    /// This hit with only the outputs requested by `flags` reported.
    ///
    /// The distance is always reported. An unrequested normal is zeroed.
    #[must_use]
    pub fn masked(mut self, flags: HitFlags) -> Self {
        let requested = flags & (HitFlags::POSITION | HitFlags::NORMAL) | HitFlags::DISTANCE;
        self.flags &= requested;

        if !requested.contains(HitFlags::NORMAL) {
            self.normal = Vector::zeros();
        }

        self
    }

    /// The hit reported by a query starting inside of the shape it is tested against.
    ///
    /// The normal opposes `dir`. `position` is not meaningful and isn't flagged as computed.
    pub fn initial_overlap(position: Point<Real>, dir: &Vector<Real>, face_index: u32) -> Self {
        Self {
            position,
            normal: -dir,
            distance: 0.0,
            face_index,
            flags: HitFlags::DISTANCE | HitFlags::NORMAL,
        }
    }
}

/// The hits gathered by a raycast.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RaycastHits {
    /// The hits, by increasing distance for single hits, in traversal order otherwise.
    pub hits: SmallVec<[Hit; 4]>,
    /// Set if a hit had to be dropped because `max_hits` hits were already stored.
    pub overflow: bool,
}

impl RaycastHits {
    /// No hit.
    pub fn none() -> Self {
        Self::default()
    }

    /// A single hit.
    pub fn single(hit: Hit) -> Self {
        let mut hits = SmallVec::new();
        hits.push(hit);
        Self {
            hits,
            overflow: false,
        }
    }

    /// The closest hit, if any.
    pub fn closest(&self) -> Option<&Hit> {
        self.hits
            .iter()
            .min_by(|a, b| a.distance.total_cmp(&b.distance))
    }

    /// Is there no hit?
    pub fn is_empty(&self) -> bool {
        self.hits.is_empty()
    }
}

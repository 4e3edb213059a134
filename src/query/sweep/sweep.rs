use crate::math::{Isometry, Real, Vector, DEFAULT_EPSILON};
use crate::query::consts::MAX_SWEEP_DISTANCE;
use crate::query::dispatch;
use crate::query::intersection_test::{
    find_overlap_triangles_composite_shape, intersection_test_round_convex_shape,
};
use crate::query::mtd::mtd_round_convex_shape;
use crate::query::{DefaultQueryDispatcher, Hit, HitFlags, QueryDispatcher, Unsupported};
use crate::shape::{RoundConvex, TypedShape};

/// The normalized parameters of a sweep.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SweepParams {
    /// The world-space unit direction of the motion, or zero for overlap-only queries.
    pub dir: Vector<Real>,
    /// The maximum distance traveled along `dir`.
    pub max_dist: Real,
    /// The amount added to the radius of the moving shape.
    pub inflation: Real,
    /// The query flags.
    pub flags: HitFlags,
}

impl SweepParams {
    /// Normalizes `dir` and clamps `max_dist` to `[0, MAX_SWEEP_DISTANCE]`.
    ///
    /// A zero direction turns the sweep into an overlap test.
    pub fn new(dir: &Vector<Real>, max_dist: Real, inflation: Real, flags: HitFlags) -> Self {
        let (dir, max_dist) = match dir.try_normalize(DEFAULT_EPSILON) {
            Some(dir) => (dir, max_dist.max(0.0).min(MAX_SWEEP_DISTANCE)),
            None => (Vector::zeros(), 0.0),
        };

        Self {
            dir,
            max_dist,
            inflation: inflation.max(0.0),
            flags,
        }
    }
}

/// Sweeps the shape `g1` along `dir` and reports its first impact with `g2`.
///
/// `g1` must be a ball, a capsule, a cuboid, or a convex polyhedron, inflated by `inflation`.
/// `dir` doesn't need to be normalized; the motion is `max_dist` long. The hit point and normal
/// are those of the impact between the shapes, the normal opposing the motion.
///
/// If the shapes overlap initially, the hit has a zero distance and a normal equal to `-dir`,
/// unless [`HitFlags::MTD`] is set: the hit then holds the minimum translation separating the
/// shapes, its distance being minus the penetration depth. [`HitFlags::ASSUME_NO_INITIAL_OVERLAP`]
/// skips this initial test: overlaps present at the start of the motion are then ignored.
///
/// Only the outputs requested by `flags` are reported in the hit flags, and the normal is zeroed
/// unless [`HitFlags::NORMAL`] is requested.
///
/// Moving half-spaces, meshes and heightfields are not supported: they trigger a debug
/// assertion and report no hit.
#[allow(clippy::too_many_arguments)]
pub fn sweep(
    pos1: &Isometry<Real>,
    g1: &TypedShape,
    pos2: &Isometry<Real>,
    g2: &TypedShape,
    dir: &Vector<Real>,
    max_dist: Real,
    inflation: Real,
    flags: HitFlags,
) -> Option<Hit> {
    match DefaultQueryDispatcher.sweep(pos1, g1, pos2, g2, dir, max_dist, inflation, flags) {
        Ok(hit) => hit,
        Err(err) => {
            log::warn!(
                "sweep of {:?} against {:?}: {}",
                g1.shape_type(),
                g2.shape_type(),
                err
            );
            debug_assert!(false, "{}", err);
            None
        }
    }
}

/// Sweeps `g1` against `g2` with normalized parameters.
///
/// The initial overlap test runs first, unless disabled by `params.flags`. It considers
/// triangles from both sides.
pub(crate) fn sweep_typed_shapes(
    pos1: &Isometry<Real>,
    g1: &TypedShape,
    pos2: &Isometry<Real>,
    g2: &TypedShape,
    params: &SweepParams,
) -> Result<Option<Hit>, Unsupported> {
    let round1 = RoundConvex::from_typed_shape(g1, params.inflation).ok_or(Unsupported)?;
    let test_overlap = !params.flags.contains(HitFlags::ASSUME_NO_INITIAL_OVERLAP);

    if test_overlap && intersection_test_round_convex_shape(&pos1.inv_mul(pos2), &round1, g2)? {
        let hit = initial_overlap_hit(pos1, &round1, pos2, g2, params);
        return Ok(Some(hit.masked(params.flags)));
    }

    if params.max_dist == 0.0 {
        return Ok(None);
    }

    let mut hit = dispatch::sweep(pos1, g1, pos2, g2, params)?;

    if !test_overlap {
        // Without the initial test, a shape starting in contact moves away freely.
        hit = hit.filter(|hit| hit.distance > 0.0);
    }

    if let Some(hit) = &mut hit {
        if test_overlap && hit.distance == 0.0 {
            // The shapes touch within the kernel tolerances.
            let double_sided = params.flags.hits_back_faces();
            if let Some(mtd) = mtd_round_convex_shape(pos1, &round1, pos2, g2, double_sided) {
                hit.normal = *mtd.normal;
                hit.position = mtd.point;
                hit.flags = HitFlags::default();
            }
        }
    }

    Ok(hit.map(|hit| hit.masked(params.flags)))
}

fn initial_overlap_hit(
    pos1: &Isometry<Real>,
    g1: &RoundConvex,
    pos2: &Isometry<Real>,
    g2: &TypedShape,
    params: &SweepParams,
) -> Hit {
    if params.flags.contains(HitFlags::MTD) {
        let double_sided = params.flags.hits_back_faces();

        match mtd_round_convex_shape(pos1, g1, pos2, g2, double_sided) {
            Some(mtd) => {
                return Hit {
                    position: mtd.point,
                    normal: *mtd.normal,
                    distance: -mtd.depth.max(0.0),
                    face_index: mtd.face_index,
                    flags: HitFlags::DISTANCE | HitFlags::NORMAL | HitFlags::POSITION,
                }
            }
            None => log::warn!(
                "no separation direction found against {:?}, reporting the sweep direction",
                g2.shape_type()
            ),
        }
    }

    let face_index = match g2.as_composite_shape() {
        Some(composite) => {
            let (found, _) =
                find_overlap_triangles_composite_shape(&pos2.inv_mul(pos1), composite, g1, 1, 0);
            found.first().copied().unwrap_or(Hit::NO_FACE)
        }
        None => Hit::NO_FACE,
    };

    Hit::initial_overlap(pos1.translation.vector.into(), &params.dir, face_index)
}

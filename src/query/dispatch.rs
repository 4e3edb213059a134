//! Static dispatch tables mapping pairs of shape types to query kernels.
//!
//! The tables are built at compile time from exhaustive matches on [`ShapeType`] and never
//! mutated. Overlap kernels are only stored for canonical pairs, whose first type doesn't come
//! after the second in the [`ShapeType`] order. Sweep tables are selected by the type of the
//! moving shape and indexed by the type of the target.

use crate::math::{Isometry, Point, Real};
use crate::query::intersection_test::{
    intersection_test_ball_ball, intersection_test_composite_shape_round_convex,
    intersection_test_halfspace_support_map, intersection_test_round_convex_round_convex,
};
use crate::query::ray::{
    local_ray_intersection_with_ball, local_ray_intersection_with_capsule,
    local_ray_intersection_with_convex_polyhedron, local_ray_intersection_with_cuboid,
    local_ray_intersection_with_halfspace, raycast_composite_shape,
};
use crate::query::sweep::{
    sweep_capsule_capsule, sweep_round_convex_composite_shape, sweep_round_convex_round_convex,
    sweep_support_map_halfspace, SweepParams,
};
use crate::query::{Hit, HitFlags, Ray, RayIntersection, RaycastHits, Unsupported};
use crate::shape::{
    Capsule, ConvexCore, ConvexPolyhedron, Cuboid, RoundConvex, ShapeType, TypedShape,
    NUM_SHAPE_TYPES,
};

/// An overlap kernel between two placed shapes.
pub type OverlapFn = fn(&Isometry<Real>, &TypedShape, &Isometry<Real>, &TypedShape) -> bool;

/// A raycast kernel on a placed shape.
pub type RaycastFn =
    fn(&Isometry<Real>, &TypedShape, &Ray, Real, HitFlags, usize) -> RaycastHits;

/// A sweep kernel moving a shape of type `S` against a placed target.
pub type SweepFn<S> =
    fn(&Isometry<Real>, &S, &Isometry<Real>, &TypedShape, &SweepParams) -> Option<Hit>;

/// The overlap kernels, indexed by the types of both shapes in canonical order.
pub static OVERLAP_TABLE: [[Option<OverlapFn>; NUM_SHAPE_TYPES]; NUM_SHAPE_TYPES] =
    overlap_table();

/// The raycast kernels, indexed by shape type.
pub static RAYCAST_TABLE: [RaycastFn; NUM_SHAPE_TYPES] = raycast_table();

/// The sweep kernels of moving balls and capsules, indexed by the type of the target.
pub static CAPSULE_SWEEP_TABLE: [Option<SweepFn<Capsule>>; NUM_SHAPE_TYPES] =
    capsule_sweep_table();

/// The sweep kernels of moving cuboids, indexed by the type of the target.
pub static BOX_SWEEP_TABLE: [Option<SweepFn<Cuboid>>; NUM_SHAPE_TYPES] = box_sweep_table();

/// The sweep kernels of moving convex polyhedra, indexed by the type of the target.
pub static CONVEX_SWEEP_TABLE: [Option<SweepFn<ConvexPolyhedron>>; NUM_SHAPE_TYPES] =
    convex_sweep_table();

static_assertions::const_assert_eq!(ShapeType::HeightField as usize + 1, NUM_SHAPE_TYPES);

/// Tests whether two shapes overlap, swapping them into canonical order if needed.
pub fn overlap(
    pos1: &Isometry<Real>,
    g1: &TypedShape,
    pos2: &Isometry<Real>,
    g2: &TypedShape,
) -> Result<bool, Unsupported> {
    let (t1, t2) = (g1.shape_type() as usize, g2.shape_type() as usize);

    if t1 <= t2 {
        let kernel = OVERLAP_TABLE[t1][t2].ok_or(Unsupported)?;
        Ok(kernel(pos1, g1, pos2, g2))
    } else {
        let kernel = OVERLAP_TABLE[t2][t1].ok_or(Unsupported)?;
        Ok(kernel(pos2, g2, pos1, g1))
    }
}

/// Casts a ray on a shape.
pub fn raycast(
    pos: &Isometry<Real>,
    g: &TypedShape,
    ray: &Ray,
    max_dist: Real,
    flags: HitFlags,
    max_hits: usize,
) -> RaycastHits {
    RAYCAST_TABLE[g.shape_type() as usize](pos, g, ray, max_dist, flags, max_hits)
}

/// Runs the sweep kernel of the moving shape `g1` against `g2`, without initial overlap test.
pub fn sweep(
    pos1: &Isometry<Real>,
    g1: &TypedShape,
    pos2: &Isometry<Real>,
    g2: &TypedShape,
    params: &SweepParams,
) -> Result<Option<Hit>, Unsupported> {
    let target = g2.shape_type() as usize;

    match *g1 {
        TypedShape::Ball(ball) => {
            let capsule = Capsule::degenerate(Point::origin(), ball.radius);
            let kernel = CAPSULE_SWEEP_TABLE[target].ok_or(Unsupported)?;
            Ok(kernel(pos1, &capsule, pos2, g2, params))
        }
        TypedShape::Capsule(capsule) => {
            let kernel = CAPSULE_SWEEP_TABLE[target].ok_or(Unsupported)?;
            Ok(kernel(pos1, capsule, pos2, g2, params))
        }
        TypedShape::Cuboid(cuboid) => {
            let kernel = BOX_SWEEP_TABLE[target].ok_or(Unsupported)?;
            Ok(kernel(pos1, cuboid, pos2, g2, params))
        }
        TypedShape::ConvexPolyhedron(poly) => {
            let kernel = CONVEX_SWEEP_TABLE[target].ok_or(Unsupported)?;
            Ok(kernel(pos1, poly, pos2, g2, params))
        }
        TypedShape::HalfSpace(_) | TypedShape::TriMesh(_) | TypedShape::HeightField(_) => {
            Err(Unsupported)
        }
    }
}

fn mismatched_kernel(query: &str, g1: &TypedShape, g2: &TypedShape) {
    log::error!(
        "{} kernel called on mismatched shapes {:?} and {:?}",
        query,
        g1.shape_type(),
        g2.shape_type()
    );
    debug_assert!(false, "{} kernel called on mismatched shapes", query);
}

/*
 * Overlap kernels.
 */
const fn overlap_table() -> [[Option<OverlapFn>; NUM_SHAPE_TYPES]; NUM_SHAPE_TYPES] {
    let mut table = [[None; NUM_SHAPE_TYPES]; NUM_SHAPE_TYPES];
    let mut i = 0;

    while i < NUM_SHAPE_TYPES {
        let mut j = i;
        while j < NUM_SHAPE_TYPES {
            table[i][j] = overlap_kernel(ShapeType::ALL[i], ShapeType::ALL[j]);
            j += 1;
        }
        i += 1;
    }

    table
}

const fn overlap_kernel(t1: ShapeType, t2: ShapeType) -> Option<OverlapFn> {
    use ShapeType::*;

    match t1 {
        Ball => match t2 {
            Ball => Some(overlap_ball_ball),
            HalfSpace => Some(overlap_round_convex_halfspace),
            Capsule | Cuboid | ConvexPolyhedron => Some(overlap_round_convex_round_convex),
            TriMesh | HeightField => Some(overlap_round_convex_composite_shape),
        },
        HalfSpace => match t2 {
            Ball | Capsule | Cuboid | ConvexPolyhedron => Some(overlap_halfspace_round_convex),
            HalfSpace | TriMesh | HeightField => None,
        },
        Capsule | Cuboid | ConvexPolyhedron => match t2 {
            HalfSpace => Some(overlap_round_convex_halfspace),
            Ball | Capsule | Cuboid | ConvexPolyhedron => Some(overlap_round_convex_round_convex),
            TriMesh | HeightField => Some(overlap_round_convex_composite_shape),
        },
        TriMesh | HeightField => match t2 {
            Ball | Capsule | Cuboid | ConvexPolyhedron => {
                Some(overlap_composite_shape_round_convex)
            }
            HalfSpace | TriMesh | HeightField => None,
        },
    }
}

fn overlap_ball_ball(
    pos1: &Isometry<Real>,
    g1: &TypedShape,
    pos2: &Isometry<Real>,
    g2: &TypedShape,
) -> bool {
    if let (TypedShape::Ball(b1), TypedShape::Ball(b2)) = (g1, g2) {
        let center12 = Point::from(pos1.inv_mul(pos2).translation.vector);
        intersection_test_ball_ball(&center12, b1, b2)
    } else {
        mismatched_kernel("overlap", g1, g2);
        false
    }
}

fn overlap_round_convex_round_convex(
    pos1: &Isometry<Real>,
    g1: &TypedShape,
    pos2: &Isometry<Real>,
    g2: &TypedShape,
) -> bool {
    match (
        RoundConvex::from_typed_shape(g1, 0.0),
        RoundConvex::from_typed_shape(g2, 0.0),
    ) {
        (Some(round1), Some(round2)) => {
            intersection_test_round_convex_round_convex(&pos1.inv_mul(pos2), &round1, &round2)
        }
        _ => {
            mismatched_kernel("overlap", g1, g2);
            false
        }
    }
}

fn overlap_halfspace_round_convex(
    pos1: &Isometry<Real>,
    g1: &TypedShape,
    pos2: &Isometry<Real>,
    g2: &TypedShape,
) -> bool {
    match (g1, RoundConvex::from_typed_shape(g2, 0.0)) {
        (TypedShape::HalfSpace(halfspace), Some(round2)) => {
            intersection_test_halfspace_support_map(&pos1.inv_mul(pos2), halfspace, &round2)
        }
        _ => {
            mismatched_kernel("overlap", g1, g2);
            false
        }
    }
}

fn overlap_round_convex_halfspace(
    pos1: &Isometry<Real>,
    g1: &TypedShape,
    pos2: &Isometry<Real>,
    g2: &TypedShape,
) -> bool {
    overlap_halfspace_round_convex(pos2, g2, pos1, g1)
}

fn overlap_composite_shape_round_convex(
    pos1: &Isometry<Real>,
    g1: &TypedShape,
    pos2: &Isometry<Real>,
    g2: &TypedShape,
) -> bool {
    match (g1.as_composite_shape(), RoundConvex::from_typed_shape(g2, 0.0)) {
        (Some(composite), Some(round2)) => {
            intersection_test_composite_shape_round_convex(&pos1.inv_mul(pos2), composite, &round2)
        }
        _ => {
            mismatched_kernel("overlap", g1, g2);
            false
        }
    }
}

fn overlap_round_convex_composite_shape(
    pos1: &Isometry<Real>,
    g1: &TypedShape,
    pos2: &Isometry<Real>,
    g2: &TypedShape,
) -> bool {
    overlap_composite_shape_round_convex(pos2, g2, pos1, g1)
}

/*
 * Raycast kernels.
 */
const fn raycast_table() -> [RaycastFn; NUM_SHAPE_TYPES] {
    let mut table = [raycast_convex as RaycastFn; NUM_SHAPE_TYPES];
    let mut i = 0;

    while i < NUM_SHAPE_TYPES {
        table[i] = match ShapeType::ALL[i] {
            ShapeType::Ball
            | ShapeType::HalfSpace
            | ShapeType::Capsule
            | ShapeType::Cuboid
            | ShapeType::ConvexPolyhedron => raycast_convex,
            ShapeType::TriMesh | ShapeType::HeightField => raycast_composite,
        };
        i += 1;
    }

    table
}

fn raycast_convex(
    pos: &Isometry<Real>,
    g: &TypedShape,
    ray: &Ray,
    max_dist: Real,
    flags: HitFlags,
    max_hits: usize,
) -> RaycastHits {
    if max_hits == 0 {
        return RaycastHits::none();
    }

    let local_ray = ray.inverse_transform_by(pos);
    let inter: Option<RayIntersection> = match *g {
        TypedShape::Ball(ball) => local_ray_intersection_with_ball(ball, &local_ray, max_dist),
        TypedShape::HalfSpace(halfspace) => {
            local_ray_intersection_with_halfspace(halfspace, &local_ray, max_dist)
        }
        TypedShape::Capsule(capsule) => {
            local_ray_intersection_with_capsule(capsule, &local_ray, max_dist)
        }
        TypedShape::Cuboid(cuboid) => {
            local_ray_intersection_with_cuboid(cuboid, &local_ray, max_dist)
        }
        TypedShape::ConvexPolyhedron(poly) => {
            local_ray_intersection_with_convex_polyhedron(poly, &local_ray, max_dist)
        }
        TypedShape::TriMesh(_) | TypedShape::HeightField(_) => {
            mismatched_kernel("raycast", g, g);
            None
        }
    };

    inter.map_or_else(RaycastHits::none, |inter| {
        RaycastHits::single(inter.to_world_hit(pos, &local_ray, flags))
    })
}

fn raycast_composite(
    pos: &Isometry<Real>,
    g: &TypedShape,
    ray: &Ray,
    max_dist: Real,
    flags: HitFlags,
    max_hits: usize,
) -> RaycastHits {
    match g.as_composite_shape() {
        Some(composite) => raycast_composite_shape(pos, composite, ray, max_dist, flags, max_hits),
        None => {
            mismatched_kernel("raycast", g, g);
            RaycastHits::none()
        }
    }
}

/*
 * Sweep kernels.
 */
fn round_capsule(capsule: &Capsule, inflation: Real) -> RoundConvex<'static> {
    RoundConvex {
        core: ConvexCore::Segment(capsule.segment),
        border_radius: capsule.radius + inflation,
    }
}

const fn capsule_sweep_table() -> [Option<SweepFn<Capsule>>; NUM_SHAPE_TYPES] {
    let mut table = [None; NUM_SHAPE_TYPES];
    let mut i = 0;

    while i < NUM_SHAPE_TYPES {
        table[i] = match ShapeType::ALL[i] {
            ShapeType::Ball | ShapeType::Capsule => Some(sweep_capsule_capsule_kernel as SweepFn<_>),
            ShapeType::HalfSpace => Some(sweep_capsule_halfspace),
            ShapeType::Cuboid | ShapeType::ConvexPolyhedron => Some(sweep_capsule_convex),
            ShapeType::TriMesh | ShapeType::HeightField => Some(sweep_capsule_composite_shape),
        };
        i += 1;
    }

    table
}

fn sweep_capsule_capsule_kernel(
    pos1: &Isometry<Real>,
    g1: &Capsule,
    pos2: &Isometry<Real>,
    g2: &TypedShape,
    params: &SweepParams,
) -> Option<Hit> {
    match *g2 {
        TypedShape::Ball(ball) => {
            let target = Capsule::degenerate(Point::origin(), ball.radius);
            sweep_capsule_capsule(pos1, g1, pos2, &target, params)
        }
        TypedShape::Capsule(target) => sweep_capsule_capsule(pos1, g1, pos2, target, params),
        _ => {
            mismatched_kernel("sweep", &TypedShape::Capsule(g1), g2);
            None
        }
    }
}

fn sweep_capsule_halfspace(
    pos1: &Isometry<Real>,
    g1: &Capsule,
    pos2: &Isometry<Real>,
    g2: &TypedShape,
    params: &SweepParams,
) -> Option<Hit> {
    sweep_round_convex_halfspace(pos1, &round_capsule(g1, params.inflation), pos2, g2, params)
}

fn sweep_capsule_convex(
    pos1: &Isometry<Real>,
    g1: &Capsule,
    pos2: &Isometry<Real>,
    g2: &TypedShape,
    params: &SweepParams,
) -> Option<Hit> {
    sweep_round_convex_convex(pos1, &round_capsule(g1, params.inflation), pos2, g2, params)
}

fn sweep_capsule_composite_shape(
    pos1: &Isometry<Real>,
    g1: &Capsule,
    pos2: &Isometry<Real>,
    g2: &TypedShape,
    params: &SweepParams,
) -> Option<Hit> {
    sweep_round_convex_composite(pos1, &round_capsule(g1, params.inflation), pos2, g2, params)
}

const fn box_sweep_table() -> [Option<SweepFn<Cuboid>>; NUM_SHAPE_TYPES] {
    let mut table = [None; NUM_SHAPE_TYPES];
    let mut i = 0;

    while i < NUM_SHAPE_TYPES {
        table[i] = match ShapeType::ALL[i] {
            ShapeType::Ball | ShapeType::Capsule => Some(sweep_box_capsule as SweepFn<_>),
            ShapeType::HalfSpace => Some(sweep_box_halfspace),
            ShapeType::Cuboid | ShapeType::ConvexPolyhedron => Some(sweep_box_convex),
            ShapeType::TriMesh | ShapeType::HeightField => Some(sweep_box_composite_shape),
        };
        i += 1;
    }

    table
}

fn round_box(cuboid: &Cuboid, inflation: Real) -> RoundConvex<'_> {
    RoundConvex {
        core: ConvexCore::Cuboid(cuboid),
        border_radius: inflation,
    }
}

/// Sweeps the target capsule backward against the moving cuboid.
///
/// The impact of the reversed motion happens on the cuboid: the hit point is moved forward
/// along the actual motion, and the normal flipped to be the one of the capsule.
fn sweep_box_capsule(
    pos1: &Isometry<Real>,
    g1: &Cuboid,
    pos2: &Isometry<Real>,
    g2: &TypedShape,
    params: &SweepParams,
) -> Option<Hit> {
    let Some(target) = RoundConvex::from_typed_shape(g2, 0.0) else {
        mismatched_kernel("sweep", &TypedShape::Cuboid(g1), g2);
        return None;
    };
    let reversed = SweepParams {
        dir: -params.dir,
        ..*params
    };

    let mut hit = sweep_round_convex_round_convex(
        pos2,
        &target,
        pos1,
        &round_box(g1, params.inflation),
        &reversed,
    )?;

    hit.normal = -hit.normal;
    hit.position += params.dir * hit.distance;
    hit.face_index = Hit::NO_FACE;
    Some(hit)
}

fn sweep_box_halfspace(
    pos1: &Isometry<Real>,
    g1: &Cuboid,
    pos2: &Isometry<Real>,
    g2: &TypedShape,
    params: &SweepParams,
) -> Option<Hit> {
    sweep_round_convex_halfspace(pos1, &round_box(g1, params.inflation), pos2, g2, params)
}

fn sweep_box_convex(
    pos1: &Isometry<Real>,
    g1: &Cuboid,
    pos2: &Isometry<Real>,
    g2: &TypedShape,
    params: &SweepParams,
) -> Option<Hit> {
    sweep_round_convex_convex(pos1, &round_box(g1, params.inflation), pos2, g2, params)
}

fn sweep_box_composite_shape(
    pos1: &Isometry<Real>,
    g1: &Cuboid,
    pos2: &Isometry<Real>,
    g2: &TypedShape,
    params: &SweepParams,
) -> Option<Hit> {
    sweep_round_convex_composite(pos1, &round_box(g1, params.inflation), pos2, g2, params)
}

const fn convex_sweep_table() -> [Option<SweepFn<ConvexPolyhedron>>; NUM_SHAPE_TYPES] {
    let mut table = [None; NUM_SHAPE_TYPES];
    let mut i = 0;

    while i < NUM_SHAPE_TYPES {
        table[i] = match ShapeType::ALL[i] {
            ShapeType::Ball | ShapeType::Capsule | ShapeType::Cuboid | ShapeType::ConvexPolyhedron => {
                Some(sweep_polyhedron_convex as SweepFn<_>)
            }
            ShapeType::HalfSpace => Some(sweep_polyhedron_halfspace),
            ShapeType::TriMesh | ShapeType::HeightField => Some(sweep_polyhedron_composite_shape),
        };
        i += 1;
    }

    table
}

fn round_polyhedron(poly: &ConvexPolyhedron, inflation: Real) -> RoundConvex<'_> {
    RoundConvex {
        core: ConvexCore::ConvexPolyhedron(poly),
        border_radius: inflation,
    }
}

fn sweep_polyhedron_convex(
    pos1: &Isometry<Real>,
    g1: &ConvexPolyhedron,
    pos2: &Isometry<Real>,
    g2: &TypedShape,
    params: &SweepParams,
) -> Option<Hit> {
    sweep_round_convex_convex(pos1, &round_polyhedron(g1, params.inflation), pos2, g2, params)
}

fn sweep_polyhedron_halfspace(
    pos1: &Isometry<Real>,
    g1: &ConvexPolyhedron,
    pos2: &Isometry<Real>,
    g2: &TypedShape,
    params: &SweepParams,
) -> Option<Hit> {
    sweep_round_convex_halfspace(pos1, &round_polyhedron(g1, params.inflation), pos2, g2, params)
}

fn sweep_polyhedron_composite_shape(
    pos1: &Isometry<Real>,
    g1: &ConvexPolyhedron,
    pos2: &Isometry<Real>,
    g2: &TypedShape,
    params: &SweepParams,
) -> Option<Hit> {
    sweep_round_convex_composite(pos1, &round_polyhedron(g1, params.inflation), pos2, g2, params)
}

fn sweep_round_convex_convex(
    pos1: &Isometry<Real>,
    g1: &RoundConvex,
    pos2: &Isometry<Real>,
    g2: &TypedShape,
    params: &SweepParams,
) -> Option<Hit> {
    match RoundConvex::from_typed_shape(g2, 0.0) {
        Some(target) => sweep_round_convex_round_convex(pos1, g1, pos2, &target, params),
        None => {
            log::error!("convex sweep kernel called on {:?}", g2.shape_type());
            debug_assert!(false, "convex sweep kernel called on a non-convex target");
            None
        }
    }
}

fn sweep_round_convex_halfspace(
    pos1: &Isometry<Real>,
    g1: &RoundConvex,
    pos2: &Isometry<Real>,
    g2: &TypedShape,
    params: &SweepParams,
) -> Option<Hit> {
    match g2 {
        TypedShape::HalfSpace(halfspace) => {
            sweep_support_map_halfspace(pos1, g1, pos2, halfspace, params)
        }
        _ => {
            log::error!("half-space sweep kernel called on {:?}", g2.shape_type());
            debug_assert!(false, "half-space sweep kernel called on another shape");
            None
        }
    }
}

fn sweep_round_convex_composite(
    pos1: &Isometry<Real>,
    g1: &RoundConvex,
    pos2: &Isometry<Real>,
    g2: &TypedShape,
    params: &SweepParams,
) -> Option<Hit> {
    match g2.as_composite_shape() {
        Some(composite) => sweep_round_convex_composite_shape(pos1, g1, pos2, composite, params),
        None => {
            log::error!("composite sweep kernel called on {:?}", g2.shape_type());
            debug_assert!(false, "composite sweep kernel called on a convex target");
            None
        }
    }
}

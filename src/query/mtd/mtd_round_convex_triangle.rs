use crate::math::{Isometry, Point, Real, DEFAULT_EPSILON};
use crate::query::closest_points::{closest_points_point_triangle, closest_points_segment_triangle};
use crate::query::Hit;
use crate::shape::{ConvexCore, RoundConvex, SupportMap, Triangle};
use na::Unit;

use super::{signed_distance_support_map_support_map, Mtd};

/// The minimum translation separating the rounded convex shape `g` from a triangle.
///
/// `pos12` is the pose of `g` relative to the frame of `tri`, and the result is expressed in
/// that frame. When the core of `g` crosses the triangle plane, or GJK fails, the shape is
/// pushed along the triangle normal until its deepest point reaches the plane.
pub fn mtd_round_convex_triangle(
    pos12: &Isometry<Real>,
    g: &RoundConvex,
    tri: &Triangle,
) -> Option<Mtd> {
    let radius = g.border_radius;

    let (core_point, tri_point) = match &g.core {
        ConvexCore::Point => {
            let center = Point::from(pos12.translation.vector);
            let (proj, _) = closest_points_point_triangle(&center, tri);
            (center, proj)
        }
        ConvexCore::Segment(seg) => {
            let closest = closest_points_segment_triangle(&seg.transformed(pos12), tri);
            (closest.p1, closest.p2)
        }
        ConvexCore::Cuboid(_) | ConvexCore::ConvexPolyhedron(_) => {
            return match signed_distance_support_map_support_map(pos12, tri, g.core_support_map()) {
                Some((p1, _, normal, dist)) => Some(Mtd {
                    normal,
                    depth: radius - dist,
                    point: p1,
                    face_index: Hit::NO_FACE,
                }),
                None => mtd_along_triangle_normal(pos12, g, tri),
            };
        }
    };

    match Unit::try_new_and_get(core_point - tri_point, DEFAULT_EPSILON) {
        Some((normal, dist)) => Some(Mtd {
            normal,
            depth: radius - dist,
            point: tri_point,
            face_index: Hit::NO_FACE,
        }),
        None => mtd_along_triangle_normal(pos12, g, tri),
    }
}

fn mtd_along_triangle_normal(
    pos12: &Isometry<Real>,
    g: &RoundConvex,
    tri: &Triangle,
) -> Option<Mtd> {
    let normal = tri.normal()?;
    let deepest = g.support_point_toward(pos12, &-normal);
    let depth = -normal.dot(&(deepest - tri.a));

    Some(Mtd {
        normal,
        depth,
        point: deepest + *normal * depth,
        face_index: Hit::NO_FACE,
    })
}

#[cfg(test)]
mod test {
    use super::mtd_round_convex_triangle;
    use crate::math::{Isometry, Point, Vector};
    use crate::shape::{Ball, Capsule, Cuboid, RoundConvex, Triangle, TypedShape};

    fn floor() -> Triangle {
        Triangle::new(
            Point::new(-2.0, 0.0, -2.0),
            Point::new(-2.0, 0.0, 4.0),
            Point::new(4.0, 0.0, -2.0),
        )
    }

    #[test]
    fn shapes_resting_into_a_floor_triangle() {
        let tri = floor();

        let ball = Ball::new(0.5);
        let g = RoundConvex::from_typed_shape(&TypedShape::Ball(&ball), 0.0).unwrap();
        let mtd = mtd_round_convex_triangle(&Isometry::translation(0.0, 0.25, 0.0), &g, &tri).unwrap();
        assert_relative_eq!(mtd.normal.into_inner(), Vector::y(), epsilon = 1.0e-5);
        assert_relative_eq!(mtd.depth, 0.25, epsilon = 1.0e-5);

        // A capsule crossing the triangle is pushed up along the triangle normal.
        let capsule = Capsule::new_y(1.0, 0.5);
        let g = RoundConvex::from_typed_shape(&TypedShape::Capsule(&capsule), 0.0).unwrap();
        let mtd = mtd_round_convex_triangle(&Isometry::translation(0.0, 0.5, 0.0), &g, &tri).unwrap();
        assert_relative_eq!(mtd.normal.into_inner(), Vector::y(), epsilon = 1.0e-5);
        assert_relative_eq!(mtd.depth, 1.0, epsilon = 1.0e-5);

        let cuboid = Cuboid::new(Vector::repeat(0.5));
        let g = RoundConvex::from_typed_shape(&TypedShape::Cuboid(&cuboid), 0.0).unwrap();
        let mtd = mtd_round_convex_triangle(&Isometry::translation(0.0, 0.4, 0.0), &g, &tri).unwrap();
        assert_relative_eq!(mtd.normal.into_inner(), Vector::y(), epsilon = 1.0e-4);
        assert_relative_eq!(mtd.depth, 0.1, epsilon = 1.0e-4);
    }
}

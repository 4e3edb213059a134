use geoquery3d::math::{Isometry, Point, Vector};
use geoquery3d::query::{self, HitFlags, Ray};
use geoquery3d::shape::{Ball, ConvexPolyhedron, Cuboid, TypedShape};

// A right prism: the triangle (0, 0), (2, 0), (0, 2) of the xy plane, from z = -1 to z = 1.
fn prism() -> ConvexPolyhedron {
    let vertices = vec![
        Point::new(0.0, 0.0, -1.0),
        Point::new(2.0, 0.0, -1.0),
        Point::new(0.0, 2.0, -1.0),
        Point::new(0.0, 0.0, 1.0),
        Point::new(2.0, 0.0, 1.0),
        Point::new(0.0, 2.0, 1.0),
    ];
    let faces: [&[u32]; 5] = [
        &[0, 2, 1],
        &[3, 4, 5],
        &[0, 1, 4, 3],
        &[0, 3, 5, 2],
        &[1, 2, 5, 4],
    ];
    ConvexPolyhedron::from_convex_hull_faces(vertices, &faces).unwrap()
}

#[test]
fn hull_faces_point_outward() {
    let prism = prism();
    let diagonal = Vector::new(1.0, 1.0, 0.0).normalize();
    let expected = [-Vector::z(), Vector::z(), -Vector::y(), -Vector::x(), diagonal];

    for (face, normal) in prism.faces().iter().zip(expected) {
        assert_relative_eq!(*face.normal, normal, epsilon = 1.0e-6);
    }

    assert!(prism.contains_local_point(&Point::new(0.5, 0.5, 0.0)));
    assert!(!prism.contains_local_point(&Point::new(1.5, 1.5, 0.0)));
}

#[test]
fn clockwise_hulls_are_rejected() {
    let vertices = vec![
        Point::new(0.0, 0.0, 0.0),
        Point::new(1.0, 0.0, 0.0),
        Point::new(0.0, 1.0, 0.0),
        Point::new(0.0, 0.0, 1.0),
    ];
    let clockwise = [[0, 1, 2], [0, 3, 1], [0, 2, 3], [1, 3, 2]];
    assert!(ConvexPolyhedron::from_convex_hull_faces(vertices, &clockwise).is_none());
}

#[test]
fn queries_on_a_hull() {
    let prism = prism().with_adjacency();
    let prism = TypedShape::ConvexPolyhedron(&prism);
    let ball = Ball::new(0.5);
    let ball = TypedShape::Ball(&ball);
    let identity = Isometry::identity();
    let flags = HitFlags::default();

    // The slanted face is 1 / sqrt(2) away from (1.5, 1.5), and 0.4 / sqrt(2) from (1.2, 1.2).
    let overlaps = |x: f32, y: f32| {
        let pos = Isometry::translation(x, y, 0.0);
        query::overlap(&pos, &ball, &identity, &prism, HitFlags::empty())
    };
    assert!(!overlaps(1.5, 1.5));
    assert!(overlaps(1.2, 1.2));
    assert!(overlaps(-0.4, 1.0));
    assert!(!overlaps(-0.6, 1.0));

    let diagonal = Vector::new(1.0, 1.0, 0.0).normalize();
    let ray = Ray::new(Point::new(3.0, 3.0, 0.0), -diagonal);
    let hits = query::raycast(&identity, &prism, &ray, 10.0, flags, 1);
    let hit = hits.closest().unwrap();
    assert_eq!(hit.face_index, 4);
    assert_relative_eq!(hit.distance, 8.0_f32.sqrt(), epsilon = 1.0e-4);
    assert_relative_eq!(hit.normal, diagonal, epsilon = 1.0e-4);
    assert_relative_eq!(hit.position, Point::new(1.0, 1.0, 0.0), epsilon = 1.0e-4);

    let ray = Ray::new(Point::new(0.5, -3.0, 0.2), Vector::y());
    let hit = *query::raycast(&identity, &prism, &ray, 10.0, flags, 1).closest().unwrap();
    assert_eq!(hit.face_index, 2);
    assert_relative_eq!(hit.distance, 3.0, epsilon = 1.0e-4);

    let sweep = |g: &TypedShape, start: Point<f32>, dir: Vector<f32>| {
        let pos = Isometry::translation(start.x, start.y, start.z);
        query::sweep(&pos, g, &identity, &prism, &dir, 10.0, 0.0, flags).unwrap()
    };

    let hit = sweep(&ball, Point::new(0.5, 0.5, 4.0), -Vector::z());
    assert_eq!(hit.face_index, 1);
    assert_relative_eq!(hit.distance, 2.5, epsilon = 1.0e-3);
    assert_relative_eq!(hit.normal, Vector::z(), epsilon = 1.0e-3);

    let hit = sweep(&ball, Point::new(3.0, 3.0, 0.0), -diagonal);
    assert_eq!(hit.face_index, 4);
    assert_relative_eq!(hit.distance, 8.0_f32.sqrt() - 0.5, epsilon = 1.0e-3);
    assert_relative_eq!(hit.normal, diagonal, epsilon = 1.0e-3);

    let cuboid = Cuboid::new(Vector::repeat(0.25));
    let cuboid = TypedShape::Cuboid(&cuboid);
    let hit = sweep(&cuboid, Point::new(0.5, -4.0, 0.0), Vector::y());
    assert_eq!(hit.face_index, 2);
    assert_relative_eq!(hit.distance, 3.75, epsilon = 1.0e-3);
    assert_relative_eq!(hit.normal, -Vector::y(), epsilon = 1.0e-3);
}

use geoquery3d::math::{Isometry, Point, Vector};
use geoquery3d::query::{self, Hit, HitFlags, Ray};
use geoquery3d::shape::{Ball, ConvexPolyhedron, Cuboid, TypedShape};

#[test]
fn sweeps_report_the_polyhedron_face_hit() {
    let poly = ConvexPolyhedron::cuboid(Vector::new(1.0, 2.0, 0.5)).with_adjacency();
    let poly = TypedShape::ConvexPolyhedron(&poly);
    let ball = Ball::new(0.25);
    let ball = TypedShape::Ball(&ball);
    let pos2 = Isometry::translation(0.0, 1.0, 0.0);

    let cases = [
        (Isometry::translation(4.0, 1.3, 0.1), -Vector::x(), 0, 2.75),
        (Isometry::translation(0.2, 6.0, -0.1), -Vector::y(), 2, 2.75),
        (Isometry::translation(-0.3, 0.5, -3.0), Vector::z(), 5, 2.25),
    ];

    for (pos1, dir, face, distance) in cases {
        let hit = query::sweep(&pos1, &ball, &pos2, &poly, &dir, 10.0, 0.0, HitFlags::default())
            .unwrap();
        assert_eq!(hit.face_index, face);
        assert_relative_eq!(hit.distance, distance, epsilon = 1.0e-3);
        assert_relative_eq!(hit.normal, -dir, epsilon = 1.0e-3);
    }

    // Cuboids have no face indices.
    let cuboid = Cuboid::new(Vector::new(1.0, 2.0, 0.5));
    let (pos1, dir, _, _) = cases[0];
    let hit = query::sweep(
        &pos1,
        &ball,
        &pos2,
        &TypedShape::Cuboid(&cuboid),
        &dir,
        10.0,
        0.0,
        HitFlags::default(),
    )
    .unwrap();
    assert_eq!(hit.face_index, Hit::NO_FACE);
}

#[test]
fn raycasts_report_the_entry_face() {
    let poly = ConvexPolyhedron::cuboid(Vector::new(1.0, 2.0, 0.5));
    let poly = TypedShape::ConvexPolyhedron(&poly);
    let pos = Isometry::new(Vector::new(1.0, 0.0, 0.0), Vector::y() * std::f32::consts::FRAC_PI_2);
    let flags = HitFlags::default();

    // Rotated by a quarter turn around y, the local +z face looks toward world +x.
    let ray = Ray::new(Point::new(5.0, 0.3, 0.2), -Vector::x());
    let hits = query::raycast(&pos, &poly, &ray, 10.0, flags, 1);
    let hit = hits.closest().unwrap();
    assert_eq!(hit.face_index, 4);
    assert_relative_eq!(hit.distance, 3.5, epsilon = 1.0e-5);
    assert_relative_eq!(hit.normal, Vector::x(), epsilon = 1.0e-5);
    assert_relative_eq!(hit.position, Point::new(1.5, 0.3, 0.2), epsilon = 1.0e-5);

    let ray = Ray::new(Point::new(1.0, 0.0, 0.0), Vector::x());
    let hits = query::raycast(&pos, &poly, &ray, 10.0, flags, 1);
    let hit = hits.closest().unwrap();
    assert_eq!(hit.distance, 0.0);
    assert_eq!(hit.face_index, Hit::NO_FACE);

    let ray = Ray::new(Point::new(5.0, 3.0, 0.0), -Vector::x());
    assert!(query::raycast(&pos, &poly, &ray, 10.0, flags, 1).is_empty());
}

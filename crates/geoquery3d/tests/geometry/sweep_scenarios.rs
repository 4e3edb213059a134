use geoquery3d::math::{Isometry, Point, Vector};
use geoquery3d::partitioning::BruteForceMidphase;
use geoquery3d::query::{self, HitFlags};
use geoquery3d::shape::{Ball, Capsule, Cuboid, HalfSpace, TriMesh, TypedShape};

fn ground_vertices() -> (Vec<Point<f32>>, Vec<[u32; 3]>) {
    let vertices = vec![
        Point::new(-10.0, 0.0, -10.0),
        Point::new(-10.0, 0.0, 10.0),
        Point::new(10.0, 0.0, -10.0),
        Point::new(10.0, 0.0, 10.0),
    ];
    let indices = vec![[0, 1, 2], [2, 1, 3]];
    (vertices, indices)
}

#[test]
fn balls_meet_after_unit_distance() {
    let ball = Ball::new(1.0);
    let hit = query::sweep(
        &Isometry::identity(),
        &TypedShape::Ball(&ball),
        &Isometry::translation(3.0, 0.0, 0.0),
        &TypedShape::Ball(&ball),
        &Vector::x(),
        3.0,
        0.0,
        HitFlags::default(),
    )
    .unwrap();

    assert_relative_eq!(hit.distance, 1.0, epsilon = 1.0e-5);
    assert_relative_eq!(hit.normal, -Vector::x(), epsilon = 1.0e-5);
    assert_relative_eq!(hit.position, Point::new(2.0, 0.0, 0.0), epsilon = 1.0e-5);
    assert!(hit.flags.contains(HitFlags::DISTANCE | HitFlags::NORMAL));
}

#[test]
fn capsule_falls_on_plane() {
    let capsule = Capsule::new(Point::new(0.0, 5.0, 0.0), Point::new(0.0, 6.0, 0.0), 0.5);
    let ground = HalfSpace::new(Vector::y_axis());

    let hit = query::sweep(
        &Isometry::identity(),
        &TypedShape::Capsule(&capsule),
        &Isometry::identity(),
        &TypedShape::HalfSpace(&ground),
        &-Vector::y(),
        10.0,
        0.0,
        HitFlags::default(),
    )
    .unwrap();

    assert_relative_eq!(hit.distance, 4.5, epsilon = 1.0e-5);
    assert_relative_eq!(hit.normal, Vector::y(), epsilon = 1.0e-5);
    assert_relative_eq!(hit.position, Point::origin(), epsilon = 1.0e-5);

    // Inflation makes the capsule land earlier.
    let hit = query::sweep(
        &Isometry::identity(),
        &TypedShape::Capsule(&capsule),
        &Isometry::identity(),
        &TypedShape::HalfSpace(&ground),
        &-Vector::y(),
        10.0,
        0.25,
        HitFlags::default(),
    )
    .unwrap();
    assert_relative_eq!(hit.distance, 4.25, epsilon = 1.0e-5);
}

#[test]
fn box_falls_on_ground_mesh() {
    let (vertices, indices) = ground_vertices();
    let midphase = BruteForceMidphase::new(&vertices, &indices);
    let ground = TriMesh::try_new(&vertices, &indices, &midphase).unwrap();
    let cuboid = Cuboid::new(Vector::repeat(1.0));

    let hit = query::sweep(
        &Isometry::translation(0.0, 5.0, 0.0),
        &TypedShape::Cuboid(&cuboid),
        &Isometry::identity(),
        &TypedShape::TriMesh(&ground),
        &-Vector::y(),
        10.0,
        0.0,
        HitFlags::default(),
    )
    .unwrap();

    assert_relative_eq!(hit.distance, 4.0, epsilon = 1.0e-3);
    assert_relative_eq!(hit.normal, Vector::y(), epsilon = 1.0e-3);
    assert_relative_eq!(hit.position.y, 0.0, epsilon = 1.0e-3);
    assert!(hit.face_index < 2);

    // The motion stops short of the ground.
    assert!(query::sweep(
        &Isometry::translation(0.0, 5.0, 0.0),
        &TypedShape::Cuboid(&cuboid),
        &Isometry::identity(),
        &TypedShape::TriMesh(&ground),
        &-Vector::y(),
        3.5,
        0.0,
        HitFlags::default(),
    )
    .is_none());
}

#[test]
fn moving_box_hits_ball() {
    let cuboid = Cuboid::new(Vector::repeat(1.0));
    let ball = Ball::new(0.5);

    let hit = query::sweep(
        &Isometry::identity(),
        &TypedShape::Cuboid(&cuboid),
        &Isometry::translation(4.0, 0.0, 0.0),
        &TypedShape::Ball(&ball),
        &Vector::x(),
        10.0,
        0.0,
        HitFlags::default(),
    )
    .unwrap();

    assert_relative_eq!(hit.distance, 2.5, epsilon = 1.0e-3);
    assert_relative_eq!(hit.normal, -Vector::x(), epsilon = 1.0e-3);
    assert_relative_eq!(hit.position, Point::new(3.5, 0.0, 0.0), epsilon = 1.0e-3);
}

use geoquery3d::math::{Isometry, Point, Vector};
use geoquery3d::partitioning::BruteForceMidphase;
use geoquery3d::query::{self, HitFlags};
use geoquery3d::shape::{Ball, Capsule, ConvexPolyhedron, Cuboid, HalfSpace, TriMesh, TypedShape};

#[test]
fn ball_inside_box() {
    let ball = Ball::new(1.0);
    let ball = TypedShape::Ball(&ball);
    let cuboid = Cuboid::new(Vector::repeat(1.0));
    let cuboid = TypedShape::Cuboid(&cuboid);
    let pos1 = Isometry::translation(0.5, 0.0, 0.0);
    let pos2 = Isometry::identity();

    assert!(query::overlap(&pos1, &ball, &pos2, &cuboid, HitFlags::empty()));
    assert!(query::overlap(&pos2, &cuboid, &pos1, &ball, HitFlags::empty()));

    for dir in [Vector::x(), Vector::y(), Vector::new(-1.0, 2.0, 0.5).normalize()] {
        let hit = query::sweep(&pos1, &ball, &pos2, &cuboid, &dir, 5.0, 0.0, HitFlags::default())
            .unwrap();
        assert_eq!(hit.distance, 0.0);
        assert_relative_eq!(hit.normal, -dir, epsilon = 1.0e-6);
        assert!(!hit.flags.contains(HitFlags::POSITION));
    }

    let flags = HitFlags::default() | HitFlags::MTD;
    let hit = query::sweep(&pos1, &ball, &pos2, &cuboid, &Vector::y(), 5.0, 0.0, flags).unwrap();
    assert_relative_eq!(hit.distance, -1.5, epsilon = 1.0e-4);
    assert_relative_eq!(hit.normal, Vector::x(), epsilon = 1.0e-4);
    assert!(hit.flags.contains(HitFlags::POSITION));

    let mtd = query::compute_mtd(&pos1, &ball, &pos2, &cuboid).unwrap();
    assert_relative_eq!(mtd.depth, 1.5, epsilon = 1.0e-4);
    assert_relative_eq!(*mtd.normal, Vector::x(), epsilon = 1.0e-4);
}

#[test]
fn ignoring_the_initial_overlap() {
    let ball = Ball::new(1.0);
    let ball = TypedShape::Ball(&ball);
    let cuboid = Cuboid::new(Vector::repeat(1.0));
    let cuboid = TypedShape::Cuboid(&cuboid);
    let pos1 = Isometry::translation(0.5, 0.0, 0.0);
    let flags = HitFlags::default() | HitFlags::ASSUME_NO_INITIAL_OVERLAP;

    let sweep_right = |flags| {
        query::sweep(&pos1, &ball, &Isometry::identity(), &cuboid, &Vector::x(), 5.0, 0.0, flags)
    };

    assert_eq!(sweep_right(HitFlags::default()).unwrap().distance, 0.0);

    // The ball leaves the box and never hits it again.
    assert!(sweep_right(flags).is_none());
}

#[test]
fn ignoring_the_initial_overlap_with_a_mesh() {
    // Two single-sided floors, at y = 0 and y = -3.
    let vertices = [
        Point::new(-5.0, 0.0, -5.0),
        Point::new(-5.0, 0.0, 5.0),
        Point::new(5.0, 0.0, -5.0),
        Point::new(-5.0, -3.0, -5.0),
        Point::new(-5.0, -3.0, 5.0),
        Point::new(5.0, -3.0, -5.0),
    ];
    let indices = [[0, 1, 2], [3, 4, 5]];
    let midphase = BruteForceMidphase::new(&vertices, &indices);
    let mesh = TriMesh::try_new(&vertices, &indices, &midphase).unwrap();
    let mesh = TypedShape::TriMesh(&mesh);
    let ball = Ball::new(0.5);
    let ball = TypedShape::Ball(&ball);
    let pos1 = Isometry::translation(-1.0, 0.2, -1.0);
    let sweep_down = |flags| {
        query::sweep(&pos1, &ball, &Isometry::identity(), &mesh, &-Vector::y(), 10.0, 0.0, flags)
    };

    let hit = sweep_down(HitFlags::default()).unwrap();
    assert_eq!(hit.distance, 0.0);
    assert_eq!(hit.face_index, 0);

    // The floor touched at the start is ignored: the one below is hit.
    let hit = sweep_down(HitFlags::default() | HitFlags::ASSUME_NO_INITIAL_OVERLAP).unwrap();
    assert_eq!(hit.face_index, 1);
    assert_relative_eq!(hit.distance, 2.7, epsilon = 1.0e-4);
    assert_relative_eq!(hit.normal, Vector::y(), epsilon = 1.0e-4);
}

fn assert_separates(
    pos1: &Isometry<f32>,
    g1: &TypedShape,
    pos2: &Isometry<f32>,
    g2: &TypedShape,
) {
    assert!(query::overlap(pos1, g1, pos2, g2, HitFlags::empty()));
    let mtd = query::compute_mtd(pos1, g1, pos2, g2).unwrap();
    assert!(mtd.depth > 0.0);

    let pushed = Isometry::from_parts(
        (pos1.translation.vector + *mtd.normal * (mtd.depth + 1.0e-3)).into(),
        pos1.rotation,
    );
    assert!(!query::overlap(&pushed, g1, pos2, g2, HitFlags::empty()));
}

#[test]
fn minimum_translations_separate_the_shapes() {
    let cuboid = Cuboid::new(Vector::new(1.0, 0.5, 0.75));
    let poly = ConvexPolyhedron::cuboid(Vector::new(0.5, 1.0, 0.5));
    let capsule = Capsule::new_y(0.5, 0.3);
    let ball = Ball::new(0.6);
    let ground = HalfSpace::with_offset(Vector::y_axis(), 0.5);

    let rotated = Isometry::new(Vector::new(0.4, 0.3, -0.2), Vector::new(0.3, 0.5, 0.1));
    let identity = Isometry::identity();

    assert_separates(&rotated, &TypedShape::Cuboid(&cuboid), &identity, &TypedShape::ConvexPolyhedron(&poly));
    assert_separates(&rotated, &TypedShape::Capsule(&capsule), &identity, &TypedShape::Cuboid(&cuboid));
    assert_separates(&rotated, &TypedShape::Ball(&ball), &identity, &TypedShape::Capsule(&capsule));
    assert_separates(&rotated, &TypedShape::ConvexPolyhedron(&poly), &identity, &TypedShape::HalfSpace(&ground));
}

#[test]
fn mesh_minimum_translation() {
    let vertices = [
        Point::new(-5.0, 0.0, -5.0),
        Point::new(-5.0, 0.0, 5.0),
        Point::new(5.0, 0.0, -5.0),
        Point::new(5.0, 0.0, 5.0),
    ];
    let indices = [[0, 1, 2], [2, 1, 3]];
    let midphase = BruteForceMidphase::new(&vertices, &indices);
    let mesh = TriMesh::try_new(&vertices, &indices, &midphase).unwrap();
    let mesh = TypedShape::TriMesh(&mesh);
    let cuboid = Cuboid::new(Vector::repeat(0.5));
    let cuboid = TypedShape::Cuboid(&cuboid);
    let pos1 = Isometry::translation(-1.0, 0.2, -1.5);

    let mtd = query::compute_mtd(&pos1, &cuboid, &Isometry::identity(), &mesh).unwrap();
    assert_relative_eq!(mtd.depth, 0.3, epsilon = 1.0e-4);
    assert_relative_eq!(*mtd.normal, Vector::y(), epsilon = 1.0e-4);
    assert!(mtd.face_index < 2);

    // Swapped operands move the mesh instead.
    let mtd = query::compute_mtd(&Isometry::identity(), &mesh, &pos1, &cuboid).unwrap();
    assert_relative_eq!(mtd.depth, 0.3, epsilon = 1.0e-4);
    assert_relative_eq!(*mtd.normal, -Vector::y(), epsilon = 1.0e-4);

    let flags = HitFlags::default() | HitFlags::MTD;
    let hit = query::sweep(&pos1, &cuboid, &Isometry::identity(), &mesh, &Vector::x(), 1.0, 0.0, flags)
        .unwrap();
    assert_relative_eq!(hit.distance, -0.3, epsilon = 1.0e-4);
    assert_relative_eq!(hit.normal, Vector::y(), epsilon = 1.0e-4);
    assert!(hit.face_index < 2);
}

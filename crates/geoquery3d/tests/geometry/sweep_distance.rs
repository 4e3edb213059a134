use geoquery3d::math::{Isometry, Vector};
use geoquery3d::query::{self, HitFlags};
use geoquery3d::shape::{Ball, Capsule, Cuboid, HeightField, TypedShape};

#[test]
fn longer_sweeps_find_the_same_hit() {
    let heights = [0.0, 0.2, 0.1, 0.4, 0.0, 0.3, 0.2, 0.1, 0.5];
    let hf = HeightField::try_new(&heights, 3, 3, Vector::repeat(1.0), None).unwrap();
    let hf = TypedShape::HeightField(&hf);
    let capsule = Capsule::new_y(0.3, 0.2);
    let capsule = TypedShape::Capsule(&capsule);
    let pos1 = Isometry::translation(0.7, 3.0, 1.2);
    let dir = Vector::new(0.1, -1.0, 0.05);

    let reference = query::sweep(&pos1, &capsule, &Isometry::identity(), &hf, &dir, 10.0, 0.0, HitFlags::default())
        .unwrap();
    assert!(reference.distance > 0.0);

    for max_dist in [reference.distance + 1.0e-3, 5.0, 100.0] {
        let hit = query::sweep(&pos1, &capsule, &Isometry::identity(), &hf, &dir, max_dist, 0.0, HitFlags::default())
            .unwrap();
        assert_relative_eq!(hit.distance, reference.distance, epsilon = 1.0e-4);
        assert_eq!(hit.face_index, reference.face_index);
    }

    assert!(query::sweep(
        &pos1,
        &capsule,
        &Isometry::identity(),
        &hf,
        &dir,
        reference.distance - 1.0e-2,
        0.0,
        HitFlags::default()
    )
    .is_none());
}

#[test]
fn zero_length_sweeps_only_test_overlap() {
    let ball = Ball::new(0.5);
    let ball = TypedShape::Ball(&ball);
    let cuboid = Cuboid::new(Vector::repeat(1.0));
    let cuboid = TypedShape::Cuboid(&cuboid);
    let target = Isometry::identity();

    let far = Isometry::translation(3.0, 0.0, 0.0);
    assert!(query::sweep(&far, &ball, &target, &cuboid, &-Vector::x(), 0.0, 0.0, HitFlags::default()).is_none());
    assert!(query::sweep(&far, &ball, &target, &cuboid, &Vector::zeros(), 10.0, 0.0, HitFlags::default()).is_none());

    let near = Isometry::translation(1.2, 0.0, 0.0);
    let hit = query::sweep(&near, &ball, &target, &cuboid, &-Vector::x(), 0.0, 0.0, HitFlags::default())
        .unwrap();
    assert_eq!(hit.distance, 0.0);

    let hit = query::sweep(&near, &ball, &target, &cuboid, &Vector::zeros(), 10.0, 0.0, HitFlags::default())
        .unwrap();
    assert_eq!(hit.distance, 0.0);

    // Inflation turns a near miss into an initial overlap.
    let close = Isometry::translation(1.6, 0.0, 0.0);
    assert!(query::sweep(&close, &ball, &target, &cuboid, &Vector::y(), 1.0, 0.0, HitFlags::default()).is_none());
    let hit = query::sweep(&close, &ball, &target, &cuboid, &Vector::y(), 1.0, 0.2, HitFlags::default())
        .unwrap();
    assert_eq!(hit.distance, 0.0);
}

#[test]
fn negative_distances_are_clamped() {
    let ball = Ball::new(0.5);
    let ball = TypedShape::Ball(&ball);
    let far = Isometry::translation(3.0, 0.0, 0.0);

    assert!(query::sweep(&far, &ball, &Isometry::identity(), &ball, &-Vector::x(), -5.0, 0.0, HitFlags::default())
        .is_none());
}

#[test]
fn head_on_ball_sweeps_travel_the_gap() {
    use rand::{Rng, SeedableRng};

    let mut rng = rand::rngs::StdRng::seed_from_u64(0);

    for _ in 0..100 {
        let r1 = rng.gen_range(0.1..1.0);
        let r2 = rng.gen_range(0.1..1.0);
        let c1: Vector<f32> = rng.gen::<Vector<f32>>() * 10.0;
        let c2: Vector<f32> = rng.gen::<Vector<f32>>() * 10.0;
        let gap = (c2 - c1).norm() - r1 - r2;

        if gap <= 1.0e-2 {
            continue;
        }

        let (b1, b2) = (Ball::new(r1), Ball::new(r2));
        let dir = (c2 - c1).normalize();
        let hit = query::sweep(
            &Isometry::translation(c1.x, c1.y, c1.z),
            &TypedShape::Ball(&b1),
            &Isometry::translation(c2.x, c2.y, c2.z),
            &TypedShape::Ball(&b2),
            &dir,
            100.0,
            0.0,
            HitFlags::default(),
        )
        .unwrap();

        assert_relative_eq!(hit.distance, gap, epsilon = 1.0e-3);
        assert_relative_eq!(hit.normal, -dir, epsilon = 1.0e-3);
    }
}

#[test]
fn sweeps_report_the_requested_outputs() {
    let ball = Ball::new(0.5);
    let ball = TypedShape::Ball(&ball);
    let cuboid = Cuboid::new(Vector::repeat(0.5));
    let cuboid = TypedShape::Cuboid(&cuboid);
    let sweep_right = |pos1: &Isometry<f32>, flags| {
        query::sweep(pos1, &ball, &Isometry::identity(), &cuboid, &Vector::x(), 10.0, 0.0, flags)
            .unwrap()
    };
    let apart = Isometry::translation(-3.0, 0.0, 0.0);

    let hit = sweep_right(&apart, HitFlags::default());
    assert_eq!(hit.flags, HitFlags::default());
    assert_relative_eq!(hit.distance, 2.0, epsilon = 1.0e-4);
    assert_relative_eq!(hit.normal, -Vector::x(), epsilon = 1.0e-4);

    let hit = sweep_right(&apart, HitFlags::DISTANCE);
    assert_eq!(hit.flags, HitFlags::DISTANCE);
    assert_relative_eq!(hit.distance, 2.0, epsilon = 1.0e-4);
    assert_eq!(hit.normal, Vector::zeros());

    let hit = sweep_right(&apart, HitFlags::DISTANCE | HitFlags::NORMAL);
    assert_eq!(hit.flags, HitFlags::DISTANCE | HitFlags::NORMAL);
    assert_relative_eq!(hit.normal, -Vector::x(), epsilon = 1.0e-4);

    // Initial overlaps resolved with a minimum translation follow the same rule.
    let touching = Isometry::translation(-0.8, 0.0, 0.0);
    let hit = sweep_right(&touching, HitFlags::DISTANCE | HitFlags::MTD);
    assert_eq!(hit.flags, HitFlags::DISTANCE);
    assert_relative_eq!(hit.distance, -0.2, epsilon = 1.0e-4);
    assert_eq!(hit.normal, Vector::zeros());
}

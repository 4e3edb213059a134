use geoquery3d::math::{Isometry, Point, Vector};
use geoquery3d::query::gjk::{self, CSOPoint, GJKResult, VoronoiSimplex};
use geoquery3d::query::{self, HitFlags};
use geoquery3d::shape::{
    Ball, Capsule, ConvexPolyhedron, Cuboid, HalfSpace, HeightField, RoundConvex, ShapeType,
    TypedShape,
};

fn random_pose(rng: &mut oorandom::Rand32) -> Isometry<f32> {
    let translation = Vector::from_fn(|_, _| rng.rand_float() * 3.0 - 1.5);
    let axisangle = Vector::from_fn(|_, _| rng.rand_float() * 2.0 - 1.0);
    Isometry::new(translation, axisangle)
}

fn is_supported(t1: ShapeType, t2: ShapeType) -> bool {
    let non_convex = |t| matches!(t, ShapeType::HalfSpace | ShapeType::TriMesh | ShapeType::HeightField);
    !(non_convex(t1) && non_convex(t2))
}

#[test]
fn overlap_is_symmetric() {
    let heights = [0.0, 0.3, -0.2, 0.5, 0.1, 0.0, -0.4, 0.2, 0.6];
    let hf = HeightField::try_new(&heights, 3, 3, Vector::new(1.0, 1.0, 1.0), None).unwrap();
    let ball = Ball::new(0.4);
    let capsule = Capsule::new_x(0.5, 0.25);
    let cuboid = Cuboid::new(Vector::new(0.5, 0.3, 0.2));
    let poly = ConvexPolyhedron::cuboid(Vector::new(0.2, 0.6, 0.4));
    let plane = HalfSpace::new(Vector::y_axis());
    let shapes = [
        TypedShape::Ball(&ball),
        TypedShape::Capsule(&capsule),
        TypedShape::Cuboid(&cuboid),
        TypedShape::ConvexPolyhedron(&poly),
        TypedShape::HalfSpace(&plane),
        TypedShape::HeightField(&hf),
    ];

    let mut rng = oorandom::Rand32::new(42);
    let mut num_overlaps = 0;

    for _ in 0..200 {
        let pos1 = random_pose(&mut rng);
        let pos2 = random_pose(&mut rng);

        for g1 in &shapes {
            for g2 in &shapes {
                if !is_supported(g1.shape_type(), g2.shape_type()) {
                    continue;
                }

                let a = query::overlap(&pos1, g1, &pos2, g2, HitFlags::empty());
                let b = query::overlap(&pos2, g2, &pos1, g1, HitFlags::empty());
                assert_eq!(a, b, "{:?} / {:?}", g1.shape_type(), g2.shape_type());

                if a {
                    num_overlaps += 1;
                }
            }
        }
    }

    assert!(num_overlaps > 0);
}

#[test]
fn sweeps_reaching_the_target_overlap_it() {
    let ball = Ball::new(0.4);
    let capsule = Capsule::new_z(0.5, 0.25);
    let cuboid = Cuboid::new(Vector::new(0.5, 0.3, 0.2));
    let poly = ConvexPolyhedron::cuboid(Vector::new(0.2, 0.6, 0.4)).with_adjacency();
    let movers = [
        TypedShape::Ball(&ball),
        TypedShape::Capsule(&capsule),
        TypedShape::Cuboid(&cuboid),
        TypedShape::ConvexPolyhedron(&poly),
    ];

    let mut rng = oorandom::Rand32::new(7);

    for _ in 0..100 {
        let pos1 = random_pose(&mut rng);
        let pos2 = random_pose(&mut rng);
        let dir = Vector::from_fn(|_, _| rng.rand_float() * 2.0 - 1.0);

        for g1 in &movers {
            for g2 in &movers {
                let Some(hit) =
                    query::sweep(&pos1, g1, &pos2, g2, &dir, 5.0, 0.0, HitFlags::default())
                else {
                    continue;
                };

                assert!(hit.distance >= 0.0 && hit.distance <= 5.0);

                // Slightly past a frontal impact, the shapes overlap.
                if hit.distance == 0.0 || hit.normal.dot(&dir.normalize()) > -0.1 {
                    continue;
                }

                let moved = Isometry::from_parts(
                    (pos1.translation.vector + dir.normalize() * (hit.distance + 1.0e-2)).into(),
                    pos1.rotation,
                );
                assert!(
                    query::overlap(&moved, g1, &pos2, g2, HitFlags::empty()),
                    "{:?} / {:?}",
                    g1.shape_type(),
                    g2.shape_type()
                );
            }
        }
    }
}

// The distance between the cores of two rounded convex shapes, and the sum of their radii.
fn core_distance(
    pos1: &Isometry<f32>,
    g1: &TypedShape,
    pos2: &Isometry<f32>,
    g2: &TypedShape,
) -> (f32, f32) {
    let round1 = RoundConvex::from_typed_shape(g1, 0.0).unwrap();
    let round2 = RoundConvex::from_typed_shape(g2, 0.0).unwrap();
    let (core1, core2) = (round1.core_support_map(), round2.core_support_map());
    let pos12 = pos1.inv_mul(pos2);

    let mut simplex = VoronoiSimplex::new();
    simplex.reset(CSOPoint::from_shapes(&pos12, core1, core2, &Vector::x()));
    let distance = match gjk::closest_points(&pos12, core1, core2, f32::MAX, true, &mut simplex) {
        GJKResult::Intersection => 0.0,
        GJKResult::ClosestPoints(p1, p2, _) => (p2 - p1).norm(),
        other => panic!("unexpected GJK result {:?}", other),
    };

    (distance, round1.border_radius + round2.border_radius)
}

#[test]
fn overlap_matches_core_distance() {
    let ball = Ball::new(0.4);
    let capsule = Capsule::new_x(0.5, 0.25);
    let cuboid = Cuboid::new(Vector::new(0.5, 0.3, 0.2));
    let poly = ConvexPolyhedron::cuboid(Vector::new(0.2, 0.6, 0.4));
    let tetra = ConvexPolyhedron::from_convex_hull_faces(
        vec![
            Point::new(0.0, 0.0, 0.0),
            Point::new(0.8, 0.0, 0.0),
            Point::new(0.0, 0.8, 0.0),
            Point::new(0.0, 0.0, 0.8),
        ],
        &[[0, 2, 1], [0, 1, 3], [0, 3, 2], [1, 2, 3]],
    )
    .unwrap();
    let shapes = [
        TypedShape::Ball(&ball),
        TypedShape::Capsule(&capsule),
        TypedShape::Cuboid(&cuboid),
        TypedShape::ConvexPolyhedron(&poly),
        TypedShape::ConvexPolyhedron(&tetra),
    ];

    let mut rng = oorandom::Rand32::new(1234);
    let (mut num_overlaps, mut num_disjoint) = (0, 0);

    for _ in 0..200 {
        let pos1 = random_pose(&mut rng);
        let pos2 = random_pose(&mut rng);

        for g1 in &shapes {
            for g2 in &shapes {
                let (distance, radii) = core_distance(&pos1, g1, &pos2, g2);

                // Too close to the boundary for both tolerances to agree.
                if (distance - radii).abs() < 1.0e-3 {
                    continue;
                }

                let expected = distance <= radii;
                assert_eq!(
                    query::overlap(&pos1, g1, &pos2, g2, HitFlags::empty()),
                    expected,
                    "{:?} / {:?}: core distance {}, radii {}",
                    g1.shape_type(),
                    g2.shape_type(),
                    distance,
                    radii
                );

                if expected {
                    num_overlaps += 1;
                } else {
                    num_disjoint += 1;
                }
            }
        }
    }

    assert!(num_overlaps > 0 && num_disjoint > 0);
}

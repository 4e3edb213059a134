use geoquery3d::bounding_volume::Aabb;
use geoquery3d::math::{Isometry, Point, Vector};
use geoquery3d::partitioning::{BruteForceMidphase, MeshMidphase, VisitStatus};
use geoquery3d::query::{self, Hit, HitFlags, Ray};
use geoquery3d::shape::{Ball, TriMesh, TypedShape};
use std::sync::atomic::{AtomicUsize, Ordering};

// Counts the triangles handed to the query.
struct CountingMidphase {
    inner: BruteForceMidphase,
    visits: AtomicUsize,
}

impl CountingMidphase {
    fn new(inner: BruteForceMidphase) -> Self {
        Self {
            inner,
            visits: AtomicUsize::new(0),
        }
    }

    fn take_visits(&self) -> usize {
        self.visits.swap(0, Ordering::Relaxed)
    }
}

impl MeshMidphase for CountingMidphase {
    fn traverse_aabb(
        &self,
        aabb: &Aabb,
        visit: &mut dyn FnMut(u32) -> VisitStatus,
    ) -> VisitStatus {
        self.inner.traverse_aabb(aabb, &mut |id| {
            let _ = self.visits.fetch_add(1, Ordering::Relaxed);
            visit(id)
        })
    }

    fn traverse_ray(
        &self,
        ray: &Ray,
        max_toi: f32,
        visit: &mut dyn FnMut(u32) -> VisitStatus,
    ) -> VisitStatus {
        self.inner.traverse_ray(ray, max_toi, &mut |id| {
            let _ = self.visits.fetch_add(1, Ordering::Relaxed);
            visit(id)
        })
    }
}

// A wall in the plane x = 0.3 with its top edge at the given height, then a floor at y = 0.
fn wall_and_floor(wall_top: f32) -> (Vec<Point<f32>>, Vec<[u32; 3]>) {
    let vertices = vec![
        Point::new(0.3, wall_top, -1.0),
        Point::new(0.3, -2.0, 0.0),
        Point::new(0.3, wall_top, 1.0),
        Point::new(-5.0, 0.0, -5.0),
        Point::new(-5.0, 0.0, 5.0),
        Point::new(5.0, 0.0, -5.0),
    ];
    let indices = vec![[0, 1, 2], [3, 4, 5]];
    (vertices, indices)
}

fn sweep_ball_down(mesh: &TriMesh, center: Point<f32>, flags: HitFlags) -> Option<Hit> {
    let ball = Ball::new(0.5);
    query::sweep(
        &Isometry::translation(center.x, center.y, center.z),
        &TypedShape::Ball(&ball),
        &Isometry::identity(),
        &TypedShape::TriMesh(mesh),
        &-Vector::y(),
        10.0,
        0.0,
        flags,
    )
}

#[test]
fn simultaneous_hits_prefer_the_floor() {
    let center = Point::new(0.0, 2.0, -0.5);
    let double_sided = HitFlags::default() | HitFlags::DOUBLE_SIDED;

    for wall_top in [0.1, 0.1003] {
        let (vertices, indices) = wall_and_floor(wall_top);
        let midphase = BruteForceMidphase::new(&vertices, &indices);
        let mesh = TriMesh::try_new(&vertices, &indices, &midphase).unwrap();

        let hit = sweep_ball_down(&mesh, center, double_sided).unwrap();
        assert_eq!(hit.face_index, 1);
        assert_relative_eq!(hit.distance, 1.5, epsilon = 1.0e-3);
        assert_relative_eq!(hit.normal, Vector::y(), epsilon = 1.0e-4);
    }

    // Clearly closer, the wall edge wins.
    let (vertices, indices) = wall_and_floor(0.2);
    let midphase = BruteForceMidphase::new(&vertices, &indices);
    let mesh = TriMesh::try_new(&vertices, &indices, &midphase).unwrap();
    let hit = sweep_ball_down(&mesh, center, double_sided).unwrap();
    assert_eq!(hit.face_index, 0);
    assert_relative_eq!(hit.distance, 1.4, epsilon = 1.0e-4);
    assert_relative_eq!(hit.normal, Vector::new(-0.6, 0.8, 0.0), epsilon = 1.0e-4);

    // Single-sided, the wall is parallel to the motion and culled.
    let hit = sweep_ball_down(&mesh, center, HitFlags::default()).unwrap();
    assert_eq!(hit.face_index, 1);
    assert_relative_eq!(hit.distance, 1.5, epsilon = 1.0e-4);
}

#[test]
fn back_faces_are_culled_unless_requested() {
    let vertices = [
        Point::new(-5.0, 0.0, -5.0),
        Point::new(-5.0, 0.0, 5.0),
        Point::new(5.0, 0.0, -5.0),
    ];
    let indices = [[0, 1, 2]];
    let midphase = BruteForceMidphase::new(&vertices, &indices);
    let mesh = TriMesh::try_new(&vertices, &indices, &midphase).unwrap();
    let ball = Ball::new(0.5);
    let sweep_up = |flags| {
        query::sweep(
            &Isometry::translation(-1.0, -2.0, -1.0),
            &TypedShape::Ball(&ball),
            &Isometry::identity(),
            &TypedShape::TriMesh(&mesh),
            &Vector::y(),
            10.0,
            0.0,
            flags,
        )
    };

    assert!(sweep_up(HitFlags::default()).is_none());

    let hit = sweep_up(HitFlags::default() | HitFlags::MESH_BOTH_SIDES).unwrap();
    assert_eq!(hit.face_index, 0);
    assert_relative_eq!(hit.distance, 1.5, epsilon = 1.0e-4);
    assert_relative_eq!(hit.normal, -Vector::y(), epsilon = 1.0e-4);
}

#[test]
fn any_hit_stops_early() {
    // The far floor, at y = 0, is visited before the near one, at y = 1.
    let vertices = [
        Point::new(-5.0, 0.0, -5.0),
        Point::new(-5.0, 0.0, 5.0),
        Point::new(5.0, 0.0, -5.0),
        Point::new(-5.0, 1.0, -5.0),
        Point::new(-5.0, 1.0, 5.0),
        Point::new(5.0, 1.0, -5.0),
    ];
    let indices = [[0, 1, 2], [3, 4, 5]];
    let midphase = CountingMidphase::new(BruteForceMidphase::new(&vertices, &indices));
    let mesh = TriMesh::try_new(&vertices, &indices, &midphase).unwrap();
    let center = Point::new(-1.0, 3.0, -1.0);
    let flags = HitFlags::default() | HitFlags::ASSUME_NO_INITIAL_OVERLAP;

    let closest = sweep_ball_down(&mesh, center, flags).unwrap();
    assert_eq!(midphase.take_visits(), 2);
    assert_eq!(closest.face_index, 1);
    assert_relative_eq!(closest.distance, 1.5, epsilon = 1.0e-4);

    let any = sweep_ball_down(&mesh, center, flags | HitFlags::ANY_HIT).unwrap();
    assert_eq!(midphase.take_visits(), 1);
    assert_eq!(any.face_index, 0);
    assert_relative_eq!(any.distance, 2.5, epsilon = 1.0e-4);
    assert_relative_eq!(any.normal, Vector::y(), epsilon = 1.0e-4);
}

#[test]
fn overlapping_triangles_are_paged() {
    let vertices = [
        Point::new(-5.0, 0.0, -5.0),
        Point::new(-5.0, 0.0, 5.0),
        Point::new(5.0, 0.0, -5.0),
        Point::new(-5.0, 0.5, -5.0),
        Point::new(-5.0, 0.5, 5.0),
        Point::new(5.0, 0.5, -5.0),
        Point::new(-5.0, 3.0, -5.0),
        Point::new(-5.0, 3.0, 5.0),
        Point::new(5.0, 3.0, -5.0),
    ];
    let indices = [[0, 1, 2], [3, 4, 5], [6, 7, 8]];
    let midphase = BruteForceMidphase::new(&vertices, &indices);
    let mesh = TriMesh::try_new(&vertices, &indices, &midphase).unwrap();
    let mesh = TypedShape::TriMesh(&mesh);
    let ball = Ball::new(1.0);
    let ball = TypedShape::Ball(&ball);
    let pos = Isometry::translation(-1.0, 0.2, -1.0);
    let mesh_pos = Isometry::identity();

    let (all, overflow) = query::find_overlap_triangles(&pos, &ball, &mesh_pos, &mesh, 8, 0);
    assert!(!overflow);
    let mut sorted = all.clone();
    sorted.sort_unstable();
    assert_eq!(sorted, vec![0, 1]);

    let (first, overflow) = query::find_overlap_triangles(&pos, &ball, &mesh_pos, &mesh, 1, 0);
    assert_eq!(first, all[..1]);
    assert!(overflow);

    let (second, overflow) = query::find_overlap_triangles(&pos, &ball, &mesh_pos, &mesh, 1, 1);
    assert_eq!(second, all[1..]);
    assert!(!overflow);

    assert!(query::overlap(&pos, &ball, &mesh_pos, &mesh, HitFlags::empty()));
    assert!(!query::overlap(
        &Isometry::translation(-1.0, 1.7, -1.0),
        &ball,
        &mesh_pos,
        &mesh,
        HitFlags::empty()
    ));
}

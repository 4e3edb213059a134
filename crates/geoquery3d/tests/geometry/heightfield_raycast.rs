use geoquery3d::math::{Isometry, Point, Vector};
use geoquery3d::partitioning::BruteForceMidphase;
use geoquery3d::query::{self, HitFlags, Ray};
use geoquery3d::shape::{HeightField, HeightFieldCellStatus, TriMesh, TypedShape};

const HEIGHTS: [f32; 12] = [
    0.0, 0.5, 0.2, 0.1, //
    0.3, 1.0, 0.8, 0.0, //
    0.1, 0.4, 0.6, 0.2,
];

fn rays() -> Vec<Ray> {
    let mut rays = vec![
        Ray::new(Point::new(0.3, 5.0, 0.7), -Vector::y()),
        Ray::new(Point::new(1.6, 5.0, 2.2), -Vector::y()),
        Ray::new(Point::new(0.9, 5.0, 0.15), -Vector::y()),
        Ray::new(Point::new(-2.0, 3.0, 1.3), Vector::new(1.0, -0.9, 0.1).normalize()),
        Ray::new(Point::new(3.0, 2.0, -1.0), Vector::new(-1.0, -0.6, 1.2).normalize()),
    ];
    // A ray grazing the field from below, only hitting back faces.
    rays.push(Ray::new(Point::new(0.4, -2.0, 1.5), Vector::y()));
    rays
}

fn assert_same_hits(hf: &HeightField, flags: HitFlags) {
    let (vertices, indices) = hf.to_trimesh_triangles();
    let midphase = BruteForceMidphase::new(&vertices, &indices);
    let mesh = TriMesh::try_new(&vertices, &indices, &midphase).unwrap();
    let pos = Isometry::translation(0.5, -1.0, 2.0);

    for ray in rays() {
        let ray = ray.transform_by(&pos);
        let hf_hits = query::raycast(&pos, &TypedShape::HeightField(hf), &ray, 20.0, flags, 1);
        let mesh_hits = query::raycast(&pos, &TypedShape::TriMesh(&mesh), &ray, 20.0, flags, 1);

        assert_eq!(hf_hits.hits.len(), mesh_hits.hits.len(), "{:?}", ray);

        for (a, b) in hf_hits.hits.iter().zip(mesh_hits.hits.iter()) {
            assert_eq!(a.face_index, b.face_index);
            assert_relative_eq!(a.distance, b.distance, epsilon = 1.0e-5);
            assert_relative_eq!(a.position, b.position, epsilon = 1.0e-5);
            assert_relative_eq!(a.normal, b.normal, epsilon = 1.0e-5);
        }
    }
}

#[test]
fn heightfield_and_trimesh_raycasts_agree() {
    let hf = HeightField::try_new(&HEIGHTS, 3, 4, Vector::new(1.0, 1.5, 0.8), None).unwrap();
    assert_same_hits(&hf, HitFlags::default());
    assert_same_hits(&hf, HitFlags::default() | HitFlags::DOUBLE_SIDED);
    assert_same_hits(&hf, HitFlags::default() | HitFlags::MESH_BOTH_SIDES);
}

#[test]
fn zigzag_heightfield_and_trimesh_raycasts_agree() {
    let status = [
        HeightFieldCellStatus::ZIGZAG_SUBDIVISION,
        HeightFieldCellStatus::empty(),
        HeightFieldCellStatus::ZIGZAG_SUBDIVISION,
        HeightFieldCellStatus::empty(),
        HeightFieldCellStatus::ZIGZAG_SUBDIVISION,
        HeightFieldCellStatus::empty(),
    ];
    let hf = HeightField::try_new(&HEIGHTS, 3, 4, Vector::new(1.0, 1.5, 0.8), Some(&status))
        .unwrap();
    assert_same_hits(&hf, HitFlags::default());
    assert_same_hits(&hf, HitFlags::default() | HitFlags::DOUBLE_SIDED);
}

#[test]
fn vertical_ray_hits_the_cell_below() {
    let heights = [0.0; 9];
    let hf = HeightField::try_new(&heights, 3, 3, Vector::repeat(1.0), None).unwrap();
    let ray = Ray::new(Point::new(1.25, 3.0, 0.5), -Vector::y());
    let hits = query::raycast(
        &Isometry::identity(),
        &TypedShape::HeightField(&hf),
        &ray,
        10.0,
        HitFlags::default(),
        1,
    );
    let hit = hits.closest().unwrap();

    assert_relative_eq!(hit.distance, 3.0, epsilon = 1.0e-6);
    assert_relative_eq!(hit.normal, Vector::y(), epsilon = 1.0e-6);
    assert_eq!(hf.split_triangle_id(hit.face_index).0, 1);
    assert_eq!(hf.split_triangle_id(hit.face_index).1, 0);
}

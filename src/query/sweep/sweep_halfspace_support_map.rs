use crate::math::{Isometry, Real};
use crate::query::Hit;
use crate::shape::{HalfSpace, SupportMap};

use super::SweepParams;

/// Sweeps the support-mapped shape `g1` against a half-space.
///
/// The support point of `g1` deepest along the half-space normal is cast toward the plane.
/// Motions that don't bring `g1` closer to the plane never hit.
pub fn sweep_support_map_halfspace<G: ?Sized + SupportMap>(
    pos1: &Isometry<Real>,
    g1: &G,
    pos2: &Isometry<Real>,
    halfspace: &HalfSpace,
    params: &SweepParams,
) -> Option<Hit> {
    let pos21 = pos2.inv_mul(pos1);
    let local_dir = pos2.inverse_transform_vector(&params.dir);
    let deepest = g1.support_point_toward(&pos21, &-halfspace.normal);
    let dist = halfspace.signed_distance(&deepest);

    if dist <= 0.0 {
        return Some(Hit::initial_overlap(
            pos2 * halfspace.project_on_plane(&deepest),
            &params.dir,
            Hit::NO_FACE,
        ));
    }

    let dn = halfspace.normal.dot(&local_dir);
    if dn >= 0.0 {
        return None;
    }

    let toi = dist / -dn;
    if toi > params.max_dist {
        return None;
    }

    Some(Hit::new(
        pos2 * (deepest + local_dir * toi),
        pos2 * *halfspace.normal,
        toi,
        Hit::NO_FACE,
    ))
}

#[cfg(test)]
mod test {
    use super::sweep_support_map_halfspace;
    use crate::math::{Isometry, Vector};
    use crate::query::sweep::SweepParams;
    use crate::query::HitFlags;
    use crate::shape::{Cuboid, HalfSpace};

    #[test]
    fn cuboid_falls_on_ground_plane() {
        let ground = HalfSpace::new(Vector::y_axis());
        let cuboid = Cuboid::new(Vector::repeat(0.5));
        let params = SweepParams {
            dir: -Vector::y(),
            max_dist: 10.0,
            inflation: 0.0,
            flags: HitFlags::default(),
        };

        let hit = sweep_support_map_halfspace(
            &Isometry::translation(0.0, 5.0, 0.0),
            &cuboid,
            &Isometry::identity(),
            &ground,
            &params,
        )
        .unwrap();
        assert_relative_eq!(hit.distance, 4.5);
        assert_relative_eq!(hit.normal, Vector::y());
        assert_relative_eq!(hit.position.y, 0.0);

        // Moving away from the plane.
        let params = SweepParams {
            dir: Vector::y(),
            ..params
        };
        assert!(sweep_support_map_halfspace(
            &Isometry::translation(0.0, 5.0, 0.0),
            &cuboid,
            &Isometry::identity(),
            &ground,
            &params,
        )
        .is_none());

        let hit = sweep_support_map_halfspace(
            &Isometry::translation(0.0, 0.25, 0.0),
            &cuboid,
            &Isometry::identity(),
            &ground,
            &params,
        )
        .unwrap();
        assert_eq!(hit.distance, 0.0);
        assert_eq!(hit.position.y, 0.0);
        assert_eq!(hit.normal, -Vector::y());
    }
}

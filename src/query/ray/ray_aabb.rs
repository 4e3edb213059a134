use crate::bounding_volume::Aabb;
use crate::math::{Real, Vector, DIM};
use crate::query::{Hit, Ray, RayIntersection};

impl Aabb {
    /// The parameters `(tmin, tmax)`, with `0 <= tmin <= tmax`, of the part of `ray` inside of
    /// this box.
    pub fn clip_ray_parameters(&self, ray: &Ray) -> Option<(Real, Real)> {
        self.clip_ray_with_entry_axis(ray)
            .map(|(tmin, tmax, _)| (tmin.max(0.0), tmax))
            .filter(|(tmin, tmax)| tmin <= tmax)
    }

    /// Casts a ray on this box, considered solid.
    ///
    /// The hit face is reported as in [`crate::shape::Cuboid::face_normal`].
    pub fn cast_local_ray_and_get_normal(
        &self,
        ray: &Ray,
        max_toi: Real,
    ) -> Option<RayIntersection> {
        let (tmin, tmax, entry) = self.clip_ray_with_entry_axis(ray)?;

        if tmax < 0.0 || tmin > max_toi {
            return None;
        }

        match entry {
            Some((axis, sign)) if tmin > 0.0 => {
                let mut normal = Vector::zeros();
                normal[axis] = sign;
                Some(RayIntersection::new(tmin, normal, Hit::NO_FACE))
            }
            _ => Some(RayIntersection::initial_overlap(ray)),
        }
    }

    // Slab test on the full line. The entry axis is the axis of the last slab entered, with the
    // sign of the outward normal of the entered face.
    fn clip_ray_with_entry_axis(&self, ray: &Ray) -> Option<(Real, Real, Option<(usize, Real)>)> {
        let mut tmin = -Real::MAX;
        let mut tmax = Real::MAX;
        let mut entry = None;

        for i in 0..DIM {
            if ray.dir[i] == 0.0 {
                if ray.origin[i] < self.mins[i] || ray.origin[i] > self.maxs[i] {
                    return None;
                }
                continue;
            }

            let denom = 1.0 / ray.dir[i];
            let mut near = (self.mins[i] - ray.origin[i]) * denom;
            let mut far = (self.maxs[i] - ray.origin[i]) * denom;
            let mut sign = -1.0;

            if near > far {
                core::mem::swap(&mut near, &mut far);
                sign = 1.0;
            }

            if near > tmin {
                tmin = near;
                entry = Some((i, sign));
            }

            tmax = tmax.min(far);

            if tmin > tmax {
                return None;
            }
        }

        Some((tmin, tmax, entry))
    }
}

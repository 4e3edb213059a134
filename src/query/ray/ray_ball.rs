use crate::math::{Point, Real};
use crate::query::{Hit, Ray, RayIntersection};
use crate::shape::Ball;
use num::Zero;

/// Computes the time of impact of a ray on a solid ball.
///
/// Returns `Some(0.0)` if the ray starts inside of the ball.
#[inline]
pub fn ray_toi_with_ball(center: &Point<Real>, radius: Real, ray: &Ray) -> Option<Real> {
    let dcenter = ray.origin - *center;

    let a = ray.dir.norm_squared();
    let b = dcenter.dot(&ray.dir);
    let c = dcenter.norm_squared() - radius * radius;

    if c <= 0.0 {
        return Some(0.0);
    }

    // Moving away from the ball, or a degenerate ray.
    if b >= 0.0 || a.is_zero() {
        return None;
    }

    let delta = b * b - a * c;

    if delta < 0.0 {
        // no solution
        None
    } else {
        Some((-b - delta.sqrt()) / a)
    }
}

/// Casts a ray on a ball centered at the origin of its local frame.
#[inline]
pub fn local_ray_intersection_with_ball(
    ball: &Ball,
    ray: &Ray,
    max_toi: Real,
) -> Option<RayIntersection> {
    let toi = ray_toi_with_ball(&Point::origin(), ball.radius, ray)?;

    if toi > max_toi {
        return None;
    }

    if toi == 0.0 {
        return Some(RayIntersection::initial_overlap(ray));
    }

    let normal = ray.point_at(toi).coords.try_normalize(0.0)?;
    Some(RayIntersection::new(toi, normal, Hit::NO_FACE))
}

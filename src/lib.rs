/*!
geoquery3d
==========

**geoquery3d** is a 3-dimensional narrow-phase geometric query library written
with the rust programming language.

It answers three questions about pairs of placed shapes: do they overlap, where
does a ray first hit a shape, and how far can a shape move along a direction
before touching another one (a sweep). Sweeps that start in an overlapping
configuration can optionally recover a minimum translation (MTD) separating
the shapes.

Triangle meshes and height fields are supported through read-only views on
caller-owned buffers; mesh acceleration structures are consumed through the
[`partitioning::MeshMidphase`] trait.

*/

#![deny(non_camel_case_types)]
#![deny(unused_parens)]
#![deny(non_upper_case_globals)]
#![deny(unused_results)]
#![warn(missing_docs)]
#![warn(unused_imports)]
#![allow(missing_copy_implementations)]
#![allow(clippy::too_many_arguments)]
#![allow(clippy::module_inception)]
#![allow(clippy::type_complexity)]
#![deny(unused_qualifications)]

#[cfg(feature = "serde")]
#[macro_use]
extern crate serde;
#[macro_use]
extern crate approx;
extern crate num_traits as num;

pub extern crate nalgebra as na;
pub extern crate simba;

pub mod bounding_volume;
pub mod partitioning;
pub mod query;
pub mod shape;
pub mod utils;

mod real {
    /// The scalar type used throughout this crate.
    #[cfg(feature = "f64")]
    pub use f64 as Real;

    /// The scalar type used throughout this crate.
    #[cfg(feature = "f32")]
    pub use f32 as Real;
}

/// Aliases for the mathematical types, depending on the scalar feature.
pub mod math {
    pub use super::real::*;

    /// The default tolerance used for geometric operations.
    pub const DEFAULT_EPSILON: Real = Real::EPSILON;

    /// The dimension of the space.
    pub const DIM: usize = 3;

    /// The point type.
    pub use na::Point3 as Point;

    /// The vector type.
    pub use na::Vector3 as Vector;

    /// The rigid transformation type used for shape poses.
    pub use na::Isometry3 as Isometry;
}

//! The GJK algorithm for distance computation.

pub use self::cso_point::CSOPoint;
pub use self::gjk::*;
pub use self::special_support_maps::ConstantOrigin;
pub use self::voronoi_simplex3::VoronoiSimplex;

mod cso_point;
mod gjk;
mod special_support_maps;
mod voronoi_simplex3;

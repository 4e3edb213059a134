//! Various unsorted geometrical and logical operators.

pub use self::isometry_ops::IsometryOps;
pub(crate) use self::wops::{WBasis, WSign};

mod isometry_ops;
mod wops;

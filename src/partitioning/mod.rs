//! Spatial partitioning tools.
//!
//! Mesh acceleration structures are built outside of this crate; queries only
//! traverse them through the [`MeshMidphase`] trait.

pub use self::midphase::{BruteForceMidphase, MeshMidphase};
pub use self::visitor::VisitStatus;

mod midphase;
mod visitor;

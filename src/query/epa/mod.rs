//! The EPA algorithm for penetration depth computation.

pub use self::epa3::EPA;

mod epa3;

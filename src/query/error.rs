/// Error indicating that a geometric query is not supported between certain shape combinations.
///
/// Half-spaces, triangle meshes and heightfields can't be tested against each
/// other, and can't be swept.
#[derive(thiserror::Error, Debug, Copy, Clone, Eq, PartialEq)]
#[error("query not supported between these shapes")]
pub struct Unsupported;

use crate::math::Real;

/// Errors returned when building a shape from caller-provided buffers.
#[derive(thiserror::Error, Copy, Clone, Debug, PartialEq)]
pub enum ShapeError {
    /// A triangle references a vertex index outside of the vertex buffer.
    #[error("triangle {triangle} references the vertex {index} but only {num_vertices} vertices exist")]
    VertexIndexOutOfBounds {
        /// The index of the faulty triangle.
        triangle: u32,
        /// The out-of-bounds vertex index.
        index: u32,
        /// The number of vertices of the mesh.
        num_vertices: u32,
    },
    /// The height samples don't form a `nrows × ncols` grid.
    #[error("expected {expected} height samples, found {found}")]
    HeightSampleCountMismatch {
        /// The expected number of samples, `nrows * ncols`.
        expected: usize,
        /// The actual number of samples.
        found: usize,
    },
    /// The per-cell status buffer doesn't have one entry per cell.
    #[error("expected {expected} cell status entries, found {found}")]
    CellStatusCountMismatch {
        /// The expected number of entries, `(nrows - 1) * (ncols - 1)`.
        expected: usize,
        /// The actual number of entries.
        found: usize,
    },
    /// A height field needs at least two rows and two columns of samples.
    #[error("a height field needs at least 2x2 samples, got {nrows}x{ncols}")]
    HeightFieldTooSmall {
        /// The number of rows of samples.
        nrows: usize,
        /// The number of columns of samples.
        ncols: usize,
    },
    /// A scale factor is zero, negative, or not finite.
    #[error("invalid scale factor {0}")]
    InvalidScale(Real),
}

use core::ops::Range;

use crate::bounding_volume::Aabb;
use crate::math::{Point, Real, Vector};
use crate::partitioning::VisitStatus;
use crate::query::Ray;
use crate::shape::{CompositeShape, ShapeError, Triangle};

#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Copy, Debug, Default, Eq, Hash, Ord, PartialEq, PartialOrd)]
/// The status of the cell of an heightfield.
pub struct HeightFieldCellStatus(u8);

bitflags::bitflags! {
    impl HeightFieldCellStatus: u8 {
        /// If this bit is set, the cell diagonal runs from `(row + 1, col)` to `(row, col + 1)`
        /// instead of from `(row, col)` to `(row + 1, col + 1)`.
        const ZIGZAG_SUBDIVISION = 0b00000001;
        /// If this bit is set, the first triangle (`k = 0`) of the cell is removed.
        const LEFT_TRIANGLE_REMOVED = 0b00000010;
        /// If this bit is set, the second triangle (`k = 1`) of the cell is removed.
        const RIGHT_TRIANGLE_REMOVED = 0b00000100;
        /// If this bit is set, both triangles of the concerned heightfield cell are removed.
        const CELL_REMOVED = Self::LEFT_TRIANGLE_REMOVED.bits() | Self::RIGHT_TRIANGLE_REMOVED.bits();
    }
}

/// A read-only view on a caller-owned 3D heightfield.
///
/// The heights are a row-major grid of `nrows × ncols` samples: the sample
/// `(row, col)` is `heights[row * ncols + col]` and sits at the local position
/// `(row * scale.x, height * scale.y, col * scale.z)`. Each of the
/// `(nrows - 1) × (ncols - 1)` cells is split into two triangles facing `+y`.
/// The face index of the triangle `k ∈ {0, 1}` of the cell `(row, col)` is
/// `2 * (row * (ncols - 1) + col) + k`.
#[derive(Debug, Clone, Copy)]
pub struct HeightField<'a> {
    heights: &'a [Real],
    status: Option<&'a [HeightFieldCellStatus]>,
    nrows: usize,
    ncols: usize,
    scale: Vector<Real>,
    aabb: Aabb,
}

impl<'a> HeightField<'a> {
    /// Creates a heightfield view on `nrows × ncols` row-major height samples.
    ///
    /// The optional `status` buffer holds one entry per cell, in row-major order.
    pub fn try_new(
        heights: &'a [Real],
        nrows: usize,
        ncols: usize,
        scale: Vector<Real>,
        status: Option<&'a [HeightFieldCellStatus]>,
    ) -> Result<Self, ShapeError> {
        if nrows < 2 || ncols < 2 {
            return Err(ShapeError::HeightFieldTooSmall { nrows, ncols });
        }

        if heights.len() != nrows * ncols {
            return Err(ShapeError::HeightSampleCountMismatch {
                expected: nrows * ncols,
                found: heights.len(),
            });
        }

        if let Some(status) = status {
            let expected = (nrows - 1) * (ncols - 1);
            if status.len() != expected {
                return Err(ShapeError::CellStatusCountMismatch {
                    expected,
                    found: status.len(),
                });
            }
        }

        if let Some(bad) = scale.iter().find(|s| !s.is_finite() || **s <= 0.0) {
            return Err(ShapeError::InvalidScale(*bad));
        }

        let (min, max) = heights
            .iter()
            .fold((Real::MAX, -Real::MAX), |(min, max), h| (min.min(*h), max.max(*h)));
        let aabb = Aabb::new(
            Point::new(0.0, min * scale.y, 0.0),
            Point::new(
                (nrows - 1) as Real * scale.x,
                max * scale.y,
                (ncols - 1) as Real * scale.z,
            ),
        );

        Ok(Self {
            heights,
            status,
            nrows,
            ncols,
            scale,
            aabb,
        })
    }

    /// The number of rows of samples.
    #[inline]
    pub fn nrows(&self) -> usize {
        self.nrows
    }

    /// The number of columns of samples.
    #[inline]
    pub fn ncols(&self) -> usize {
        self.ncols
    }

    /// The scale factor applied to this heightfield.
    #[inline]
    pub fn scale(&self) -> &Vector<Real> {
        &self.scale
    }

    /// The raw height samples.
    #[inline]
    pub fn heights(&self) -> &'a [Real] {
        self.heights
    }

    /// The number of triangle slots of this heightfield, including removed triangles.
    #[inline]
    pub fn num_triangles(&self) -> usize {
        (self.nrows - 1) * (self.ncols - 1) * 2
    }

    /// The status of the cell `(row, col)`.
    #[inline]
    pub fn cell_status(&self, row: usize, col: usize) -> HeightFieldCellStatus {
        self.status
            .map(|s| s[row * (self.ncols - 1) + col])
            .unwrap_or_default()
    }

    /// The local position of the sample `(row, col)`.
    #[inline]
    pub fn vertex_at(&self, row: usize, col: usize) -> Point<Real> {
        Point::new(
            row as Real * self.scale.x,
            self.heights[row * self.ncols + col] * self.scale.y,
            col as Real * self.scale.z,
        )
    }

    /// The face index of the triangle `k` of the cell `(row, col)`.
    #[inline]
    pub fn triangle_id(&self, row: usize, col: usize, k: usize) -> u32 {
        (2 * (row * (self.ncols - 1) + col) + k) as u32
    }

    /// The cell `(row, col)` and the triangle index `k` of the given face index.
    #[inline]
    pub fn split_triangle_id(&self, id: u32) -> (usize, usize, usize) {
        let cell = id as usize / 2;
        (cell / (self.ncols - 1), cell % (self.ncols - 1), id as usize % 2)
    }

    fn cell_vertex_ids(&self, row: usize, col: usize) -> [[u32; 3]; 2] {
        let p00 = (row * self.ncols + col) as u32;
        let p10 = p00 + self.ncols as u32;
        let p01 = p00 + 1;
        let p11 = p10 + 1;

        if self
            .cell_status(row, col)
            .contains(HeightFieldCellStatus::ZIGZAG_SUBDIVISION)
        {
            [[p00, p01, p10], [p10, p01, p11]]
        } else {
            [[p00, p01, p11], [p00, p11, p10]]
        }
    }

    /// The (up to) two triangles of the cell `(row, col)`.
    ///
    /// Returns `None` for triangles removed by the cell status, and for cells outside of the grid.
    pub fn triangles_at(&self, row: usize, col: usize) -> (Option<Triangle>, Option<Triangle>) {
        if row + 1 >= self.nrows || col + 1 >= self.ncols {
            return (None, None);
        }

        let status = self.cell_status(row, col);
        let ids = self.cell_vertex_ids(row, col);
        let vertex = |id: u32| {
            let id = id as usize;
            self.vertex_at(id / self.ncols, id % self.ncols)
        };
        let tri = |k: usize| {
            let [a, b, c] = ids[k];
            Triangle::new(vertex(a), vertex(b), vertex(c))
        };

        let left = (!status.contains(HeightFieldCellStatus::LEFT_TRIANGLE_REMOVED)).then(|| tri(0));
        let right =
            (!status.contains(HeightFieldCellStatus::RIGHT_TRIANGLE_REMOVED)).then(|| tri(1));
        (left, right)
    }

    /// The triangle with the given face index, if it exists.
    pub fn triangle_at_id(&self, id: u32) -> Option<Triangle> {
        if id as usize >= self.num_triangles() {
            return None;
        }

        let (row, col, k) = self.split_triangle_id(id);
        let (left, right) = self.triangles_at(row, col);
        if k == 0 {
            left
        } else {
            right
        }
    }

    /// The ranges of cell rows and columns overlapping the local-space `aabb`, clamped to the grid.
    ///
    /// Returns `None` if `aabb` doesn't overlap the bounds of this heightfield.
    pub fn cell_ranges_in_local_aabb(&self, aabb: &Aabb) -> Option<(Range<usize>, Range<usize>)> {
        if !self.aabb.intersects(aabb) {
            return None;
        }

        let max_row = self.nrows - 2;
        let max_col = self.ncols - 2;
        let clamp_cell = |x: Real, max: usize| (x.max(0.0) as usize).min(max);

        let row0 = clamp_cell((aabb.mins.x / self.scale.x).floor(), max_row);
        let row1 = clamp_cell((aabb.maxs.x / self.scale.x).floor(), max_row);
        let col0 = clamp_cell((aabb.mins.z / self.scale.z).floor(), max_col);
        let col1 = clamp_cell((aabb.maxs.z / self.scale.z).floor(), max_col);

        Some((row0..row1 + 1, col0..col1 + 1))
    }

    /// The vertices and triangles of this heightfield as an indexed triangle mesh.
    ///
    /// Vertex `row * ncols + col` is the sample `(row, col)`. Triangles are listed by increasing
    /// face index and removed triangles are skipped, so the `i`-th triangle has the face index
    /// `i` whenever the heightfield has no holes.
    pub fn to_trimesh_triangles(&self) -> (Vec<Point<Real>>, Vec<[u32; 3]>) {
        let vertices = (0..self.nrows)
            .flat_map(|row| (0..self.ncols).map(move |col| (row, col)))
            .map(|(row, col)| self.vertex_at(row, col))
            .collect();
        let mut indices = Vec::with_capacity(self.num_triangles());

        for row in 0..self.nrows - 1 {
            for col in 0..self.ncols - 1 {
                let status = self.cell_status(row, col);
                let [left, right] = self.cell_vertex_ids(row, col);

                if !status.contains(HeightFieldCellStatus::LEFT_TRIANGLE_REMOVED) {
                    indices.push(left);
                }
                if !status.contains(HeightFieldCellStatus::RIGHT_TRIANGLE_REMOVED) {
                    indices.push(right);
                }
            }
        }

        (vertices, indices)
    }

    fn visit_cell(
        &self,
        row: usize,
        col: usize,
        filter: Option<&Aabb>,
        f: &mut dyn FnMut(u32, &Triangle) -> VisitStatus,
    ) -> VisitStatus {
        let (left, right) = self.triangles_at(row, col);

        for (k, tri) in [left, right].iter().enumerate() {
            if let Some(tri) = tri {
                if filter.map(|aabb| tri.local_aabb().intersects(aabb)) != Some(false)
                    && f(self.triangle_id(row, col, k), tri) == VisitStatus::ExitEarly
                {
                    return VisitStatus::ExitEarly;
                }
            }
        }

        VisitStatus::Continue
    }
}

impl CompositeShape for HeightField<'_> {
    fn triangle(&self, face_index: u32) -> Option<Triangle> {
        self.triangle_at_id(face_index)
    }

    fn local_aabb(&self) -> Aabb {
        self.aabb
    }

    fn map_triangles_in_local_aabb(
        &self,
        aabb: &Aabb,
        f: &mut dyn FnMut(u32, &Triangle) -> VisitStatus,
    ) -> VisitStatus {
        let Some((rows, cols)) = self.cell_ranges_in_local_aabb(aabb) else {
            return VisitStatus::Continue;
        };

        for row in rows {
            for col in cols.clone() {
                if self.visit_cell(row, col, Some(aabb), f) == VisitStatus::ExitEarly {
                    return VisitStatus::ExitEarly;
                }
            }
        }

        VisitStatus::Continue
    }

    fn map_triangles_along_ray(
        &self,
        ray: &Ray,
        max_toi: Real,
        f: &mut dyn FnMut(u32, &Triangle) -> VisitStatus,
    ) -> VisitStatus {
        // Walk the cells crossed by the projection of the ray on the xz plane.
        let Some((tmin, tmax)) = self.aabb.loosened(1.0e-4).clip_ray_parameters(ray) else {
            return VisitStatus::Continue;
        };
        let tmax = tmax.min(max_toi);
        if tmin > tmax {
            return VisitStatus::Continue;
        }

        let (cell_w, cell_h) = (self.scale.x, self.scale.z);
        let (max_row, max_col) = ((self.nrows - 2) as isize, (self.ncols - 2) as isize);
        let start = ray.point_at(tmin);
        let mut row = ((start.x / cell_w).floor() as isize).clamp(0, max_row);
        let mut col = ((start.z / cell_h).floor() as isize).clamp(0, max_col);

        let (step_row, mut next_t_row, delta_t_row) =
            dda_axis(ray.origin.x, ray.dir.x, row, cell_w);
        let (step_col, mut next_t_col, delta_t_col) =
            dda_axis(ray.origin.z, ray.dir.z, col, cell_h);

        loop {
            if self.visit_cell(row as usize, col as usize, None, f) == VisitStatus::ExitEarly {
                return VisitStatus::ExitEarly;
            }

            if next_t_row.min(next_t_col) > tmax {
                return VisitStatus::Continue;
            }

            if next_t_row < next_t_col {
                row += step_row;
                next_t_row += delta_t_row;
            } else {
                col += step_col;
                next_t_col += delta_t_col;
            }

            if row < 0 || row > max_row || col < 0 || col > max_col {
                return VisitStatus::Continue;
            }
        }
    }
}

// The step, first boundary crossing time, and crossing period along one grid axis.
fn dda_axis(origin: Real, dir: Real, cell: isize, cell_size: Real) -> (isize, Real, Real) {
    if dir > 0.0 {
        let next = ((cell + 1) as Real * cell_size - origin) / dir;
        (1, next, cell_size / dir)
    } else if dir < 0.0 {
        let next = (cell as Real * cell_size - origin) / dir;
        (-1, next, -cell_size / dir)
    } else {
        (0, Real::MAX, Real::MAX)
    }
}

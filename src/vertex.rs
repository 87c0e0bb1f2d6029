//! Mesh vertices and the duplicated-vertex quad grid generator.

use crate::float::Float;
use alloc::vec::Vec as AllocVec;

/// One mesh vertex: a mutable local position plus fixed texture coordinates.
///
/// The solver rewrites `x` every tick; `u`/`v` are immutable after
/// construction and identify the vertex's place in the texture atlas.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Vertex<F: Float> {
    pub x: F,
    pub y: F,
    u: F,
    v: F,
}

impl<F: Float> Vertex<F> {
    /// Create a new vertex at a rest position with texture coordinates.
    pub fn new(x: F, y: F, u: F, v: F) -> Self {
        Vertex { x, y, u, v }
    }

    /// Horizontal texture coordinate, fixed at construction.
    pub fn u(&self) -> F { self.u }

    /// Vertical texture coordinate, fixed at construction.
    pub fn v(&self) -> F { self.v }
}

/// Generate the flat vertex buffer of a `rows` x `cols` quad grid.
///
/// Each cell is emitted as two triangles (6 vertices) with per-face UVs, so
/// corners shared between cells appear as coincident duplicate vertices —
/// the same buffer shape a per-face-UV mesh generator produces. Local frame:
/// origin at the top-left, y increasing downward, `u`/`v` in `[0, 1]`.
pub fn generate_grid<F: Float>(rows: usize, cols: usize, width: F, height: F) -> AllocVec<Vertex<F>> {
    if rows == 0 || cols == 0 {
        return AllocVec::new();
    }
    let cell_w = width / F::from_f32(cols as f32);
    let cell_h = height / F::from_f32(rows as f32);
    let inv_cols = F::one() / F::from_f32(cols as f32);
    let inv_rows = F::one() / F::from_f32(rows as f32);

    let mut verts = AllocVec::with_capacity(rows * cols * 6);

    for r in 0..rows {
        for c in 0..cols {
            let fc = F::from_f32(c as f32);
            let fc1 = F::from_f32((c + 1) as f32);
            let fr = F::from_f32(r as f32);
            let fr1 = F::from_f32((r + 1) as f32);

            let x0 = fc * cell_w;
            let x1 = fc1 * cell_w;
            let y0 = fr * cell_h;
            let y1 = fr1 * cell_h;
            let u0 = fc * inv_cols;
            let u1 = fc1 * inv_cols;
            let v0 = fr * inv_rows;
            let v1 = fr1 * inv_rows;

            // Triangle 1: top-left, bottom-left, bottom-right
            verts.push(Vertex::new(x0, y0, u0, v0));
            verts.push(Vertex::new(x0, y1, u0, v1));
            verts.push(Vertex::new(x1, y1, u1, v1));
            // Triangle 2: top-left, bottom-right, top-right
            verts.push(Vertex::new(x0, y0, u0, v0));
            verts.push(Vertex::new(x1, y1, u1, v1));
            verts.push(Vertex::new(x1, y0, u1, v0));
        }
    }

    verts
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grid_vertex_count() {
        let verts = generate_grid::<f32>(5, 1, 100.0, 300.0);
        assert_eq!(verts.len(), 5 * 1 * 6);
    }

    #[test]
    fn grid_spans_full_extent() {
        let verts = generate_grid::<f32>(3, 1, 80.0, 240.0);
        let max_x = verts.iter().fold(0.0f32, |m, v| Float::max(m, v.x));
        let max_y = verts.iter().fold(0.0f32, |m, v| Float::max(m, v.y));
        assert!(Float::abs(max_x - 80.0) < 1e-4);
        assert!(Float::abs(max_y - 240.0) < 1e-4);
    }

    #[test]
    fn zero_rows_yields_empty_buffer() {
        assert!(generate_grid::<f32>(0, 1, 100.0, 300.0).is_empty());
    }
}

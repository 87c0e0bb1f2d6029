//! Vertex grouping: merging coincident duplicates into logical seam points.

use crate::error::StripError;
use crate::float::Float;
use crate::vec::Vec2;
use crate::vertex::Vertex;
use alloc::collections::BTreeMap;
use alloc::vec::Vec as AllocVec;
use core::cmp::Ordering;

// Positions are quantized to 4 decimal places for the grouping key.
const KEY_SCALE: f64 = 1e4;

/// A set of vertex-buffer indices that share one rest position.
///
/// Per-face-UV grid generators emit duplicate vertices at shared cell
/// corners. A `VertexGroup` is the logical seam point: every index it holds
/// must be written the identical x each tick, or the mesh tears visibly.
/// The solver only ever addresses vertices through groups, never directly.
#[derive(Clone, Debug)]
pub struct VertexGroup<F: Float> {
    indices: AllocVec<usize>,
    rest: Vec2<F>,
    uv: Vec2<F>,
}

impl<F: Float> VertexGroup<F> {
    /// Buffer indices of every physical vertex aliasing this seam point.
    pub fn indices(&self) -> &[usize] {
        &self.indices
    }

    /// Shared rest position of the group's members.
    pub fn rest(&self) -> Vec2<F> {
        self.rest
    }

    /// Representative texture coordinates (first member's).
    pub fn uv(&self) -> Vec2<F> {
        self.uv
    }

    /// Number of physical vertices aliased to this point.
    pub fn len(&self) -> usize {
        self.indices.len()
    }

    /// True when the group holds no vertices.
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }
}

fn quantize<F: Float>(value: F) -> i64 {
    libm::round(value.to_f64() * KEY_SCALE) as i64
}

/// Group a raw vertex buffer into seam points and sort them row-major.
///
/// Vertices are grouped by rest position rounded to 4 decimal places — not
/// by UV, since duplicates at a seam may carry different UVs. Groups are
/// then sorted by the representative vertex's `(v, u)` ascending, so group 0
/// is the top-left rest position and the index advances along each row
/// before moving down.
///
/// # Errors
///
/// Returns [`StripError::EmptyMesh`] for an empty buffer, and
/// [`StripError::GridMismatch`] when the group count is not exactly
/// `(rows + 1) * (cols + 1)` — the strip layout assumes one seam point per
/// grid corner.
pub fn group_vertices<F: Float>(
    vertices: &[Vertex<F>],
    rows: usize,
    cols: usize,
) -> Result<AllocVec<VertexGroup<F>>, StripError> {
    if vertices.is_empty() {
        return Err(StripError::EmptyMesh);
    }

    let mut by_position: BTreeMap<(i64, i64), VertexGroup<F>> = BTreeMap::new();

    for (idx, vert) in vertices.iter().enumerate() {
        let key = (quantize(vert.x), quantize(vert.y));
        by_position
            .entry(key)
            .or_insert_with(|| VertexGroup {
                indices: AllocVec::new(),
                rest: Vec2::new(vert.x, vert.y),
                uv: Vec2::new(vert.u(), vert.v()),
            })
            .indices
            .push(idx);
    }

    let mut groups: AllocVec<VertexGroup<F>> = by_position.into_values().collect();

    // Row-major: v primary, u secondary.
    groups.sort_by(|a, b| {
        a.uv
            .y
            .partial_cmp(&b.uv.y)
            .unwrap_or(Ordering::Equal)
            .then(a.uv.x.partial_cmp(&b.uv.x).unwrap_or(Ordering::Equal))
    });

    let expected = (rows + 1) * (cols + 1);
    if groups.len() != expected {
        return Err(StripError::GridMismatch { groups: groups.len(), expected });
    }

    Ok(groups)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vertex::generate_grid;

    #[test]
    fn single_column_group_count() {
        let verts = generate_grid::<f32>(5, 1, 100.0, 300.0);
        let groups = group_vertices(&verts, 5, 1).unwrap();
        assert_eq!(groups.len(), 12); // (5+1) * (1+1)
    }

    #[test]
    fn groups_sorted_top_left_first() {
        let verts = generate_grid::<f32>(3, 1, 100.0, 300.0);
        let groups = group_vertices(&verts, 3, 1).unwrap();
        let first = groups[0].rest();
        assert!(first.x < 1e-4 && first.y < 1e-4);
        // Second group is the same row's right column.
        assert!(Float::abs(groups[1].rest().y - first.y) < 1e-4);
        assert!(groups[1].rest().x > first.x);
    }

    #[test]
    fn mismatched_grid_rejected() {
        let verts = generate_grid::<f32>(4, 1, 100.0, 300.0);
        let err = group_vertices(&verts, 5, 1).unwrap_err();
        assert_eq!(err, StripError::GridMismatch { groups: 10, expected: 12 });
    }
}

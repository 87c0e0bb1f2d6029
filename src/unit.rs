//! Row units: per-row control points pairing left and right seam groups.

use crate::float::Float;
use crate::group::VertexGroup;
use crate::vec::Vec2;
use alloc::vec::Vec as AllocVec;

/// One row's control unit: the left/right seam groups plus the rest frame.
///
/// Every per-tick displacement target is expressed against the rest-frame
/// vectors captured here at construction, never against the previous tick's
/// position, so error can never accumulate as drift.
#[derive(Clone, Debug)]
pub struct RowUnit<F: Float> {
    left: VertexGroup<F>,
    right: VertexGroup<F>,
    init_unit_pos: Vec2<F>,
    init_diff_left: Vec2<F>,
    init_diff_right: Vec2<F>,
}

impl<F: Float> RowUnit<F> {
    /// Left seam group of this row.
    pub fn left(&self) -> &VertexGroup<F> {
        &self.left
    }

    /// Right seam group of this row.
    pub fn right(&self) -> &VertexGroup<F> {
        &self.right
    }

    /// Rest-pose logical center: x midway between the columns, y from the
    /// left column (both columns share y at rest).
    pub fn init_unit_pos(&self) -> Vec2<F> {
        self.init_unit_pos
    }

    /// Rest offset from the center to the left column.
    pub fn init_diff_left(&self) -> Vec2<F> {
        self.init_diff_left
    }

    /// Rest offset from the center to the right column.
    pub fn init_diff_right(&self) -> Vec2<F> {
        self.init_diff_right
    }
}

/// Build one [`RowUnit`] per mesh row from the row-major sorted groups.
///
/// Row `r` pairs group `r * (cols + 1)` with its right neighbor. The strip
/// is single-column (`cols == 1`), so each row contributes exactly two
/// groups and the result holds `rows + 1` units. Runs exactly once per
/// strip; callers must have validated the group count already.
pub fn build_row_units<F: Float>(
    groups: &[VertexGroup<F>],
    rows: usize,
    cols: usize,
) -> AllocVec<RowUnit<F>> {
    let mut units = AllocVec::with_capacity(rows + 1);

    for row in 0..=rows {
        let left_index = row * (cols + 1);
        let right_index = left_index + 1;

        let left = &groups[left_index];
        let right = &groups[right_index];

        let unit_pos = Vec2::new(
            (left.rest().x + right.rest().x) / F::two(),
            left.rest().y,
        );

        units.push(RowUnit {
            left: left.clone(),
            right: right.clone(),
            init_unit_pos: unit_pos,
            init_diff_left: left.rest() - unit_pos,
            init_diff_right: right.rest() - unit_pos,
        });
    }

    units
}

//! The hair strip: a single-column mesh swayed by its owner's motion.

use crate::clock::FixedStepClock;
use crate::config::StripConfig;
use crate::error::StripError;
use crate::float::Float;
use crate::group::group_vertices;
use crate::motion::MotionSampler;
use crate::observer::StepObserver;
use crate::unit::{build_row_units, RowUnit};
use crate::vec::Vec2;
use crate::vertex::{generate_grid, Vertex};
use alloc::vec::Vec as AllocVec;

// One logical column: two vertex columns merged pairwise into row units.
const COLS: usize = 1;

/// A single-column hair/cloth strip deformed by world-space motion.
///
/// The strip owns its vertex buffer. Each frame the host calls
/// [`update`](HairStrip::update) with the strip's current world position and
/// the elapsed milliseconds; due fixed steps then pull every row's vertices
/// toward a falloff-weighted sway target derived from the smoothed
/// horizontal velocity. The host reads the buffer back each frame via
/// [`vertices`](HairStrip::vertices) or [`positions`](HairStrip::positions)
/// and should treat it as dirty every tick.
///
/// The strip starts disabled. While disabled, updates advance the clock but
/// leave vertices frozen at their last written position; enabling re-anchors
/// motion sampling so the first live tick measures a zero delta.
#[derive(Debug)]
pub struct HairStrip<F: Float> {
    vertices: AllocVec<Vertex<F>>,
    units: AllocVec<RowUnit<F>>,
    config: StripConfig<F>,
    sampler: MotionSampler<F>,
    clock: FixedStepClock<F>,
    rows: usize,
    enabled: bool,
    pending_anchor: bool,
}

impl<F: Float> HairStrip<F> {
    /// Build a strip from an existing duplicated-vertex buffer.
    ///
    /// Groups coincident vertices into seam points, sorts them row-major and
    /// derives one rest-frame row unit per row. Runs once; a strip is never
    /// regrouped mid-life.
    ///
    /// # Errors
    ///
    /// [`StripError::InvalidLerpCoef`] when `config.lerp_coef` is outside
    /// [0, 1]; [`StripError::EmptyMesh`] / [`StripError::GridMismatch`] when
    /// the buffer does not resolve into a `(rows + 1) x 2` corner grid.
    pub fn new(
        vertices: AllocVec<Vertex<F>>,
        rows: usize,
        config: StripConfig<F>,
    ) -> Result<Self, StripError> {
        if config.lerp_coef < F::zero() || config.lerp_coef > F::one() {
            return Err(StripError::InvalidLerpCoef);
        }

        let groups = group_vertices(&vertices, rows, COLS)?;
        let units = build_row_units(&groups, rows, COLS);

        Ok(HairStrip {
            vertices,
            units,
            config,
            sampler: MotionSampler::new(Vec2::zero()),
            clock: FixedStepClock::new(),
            rows,
            enabled: false,
            pending_anchor: false,
        })
    }

    /// Build a strip over a freshly generated `rows` x 1 quad grid of the
    /// given rest-pose pixel size.
    pub fn grid(
        rows: usize,
        width: F,
        height: F,
        config: StripConfig<F>,
    ) -> Result<Self, StripError> {
        Self::new(generate_grid(rows, COLS, width, height), rows, config)
    }

    /// Enable or disable the sway simulation.
    ///
    /// Disabling freezes vertices where they are — no rest-pose reset.
    /// Enabling schedules a motion re-anchor to the world position seen by
    /// the next update, so re-enabling after the owner moved does not
    /// produce a one-frame jump.
    pub fn set_enable(&mut self, enable: bool) {
        if enable && !self.enabled {
            self.pending_anchor = true;
        }
        self.enabled = enable;
    }

    /// Per-frame tick: bank `delta_ms` and run any due fixed steps.
    ///
    /// `world_pos` is this tick's world position in the coordinate space the
    /// rest pose was authored in. The clock always advances; the deformation
    /// pass only runs while enabled. Each due fixed step receives exactly
    /// the fixed step duration, never the raw frame delta.
    pub fn update<O: StepObserver>(
        &mut self,
        world_pos: Vec2<F>,
        delta_ms: F,
        observer: &mut O,
    ) {
        let steps = self.clock.advance(delta_ms);

        for _ in 0..steps {
            if self.enabled {
                if self.pending_anchor {
                    self.sampler.anchor(world_pos);
                    self.pending_anchor = false;
                }
                let smoothed = self.sampler.sample(world_pos);
                self.fixed_step(smoothed);
            }
            observer.on_fixed_step();
        }

        observer.on_frame_complete(steps);
    }

    /// One fixed step of the deformation solver.
    ///
    /// Rows below `move_begin_index` are rigid. For the rest, the falloff
    /// weight `(i - begin) / unit_count` ramps from the root toward the tip;
    /// the last row's weight is `rows / (rows + 1)`, deliberately short of
    /// 1.0. Targets are absolute against the rest frame, and every aliased
    /// vertex of a seam group gets the identical write. `y` is never
    /// touched.
    fn fixed_step(&mut self, smoothed: F) {
        let unit_count = self.units.len();
        if unit_count == 0 {
            return;
        }

        // Unity with the default 60 Hz step; retuning the clock scales the
        // coefficients proportionally.
        let step_scale = self.clock.step_ms() / (F::from_f32(1000.0) / F::from_f32(60.0));
        let begin = self.config.move_begin_index;
        let blend = self.config.lerp_coef * step_scale;
        let inv_count = F::one() / F::from_f32(unit_count as f32);

        let units = &self.units;
        let vertices = &mut self.vertices;

        for (i, unit) in units.iter().enumerate().skip(begin) {
            let falloff = F::from_f32((i - begin) as f32) * inv_count;
            let offset_x = -smoothed * falloff * self.config.move_diff_coef * step_scale;

            let left_x = unit.init_unit_pos().x + unit.init_diff_left().x + offset_x;
            for &idx in unit.left().indices() {
                let v = &mut vertices[idx];
                v.x = v.x.lerp(left_x, blend);
            }

            let right_x = unit.init_unit_pos().x + unit.init_diff_right().x + offset_x;
            for &idx in unit.right().indices() {
                let v = &mut vertices[idx];
                v.x = v.x.lerp(right_x, blend);
            }
        }
    }

    /// The shared vertex buffer, in generator emission order.
    pub fn vertices(&self) -> &[Vertex<F>] {
        &self.vertices
    }

    /// Snapshot of every vertex position, in buffer order.
    pub fn positions(&self) -> AllocVec<Vec2<F>> {
        self.vertices.iter().map(|v| Vec2::new(v.x, v.y)).collect()
    }

    /// Snapshot of every vertex UV, in buffer order.
    pub fn uvs(&self) -> AllocVec<Vec2<F>> {
        self.vertices.iter().map(|v| Vec2::new(v.u(), v.v())).collect()
    }

    /// Row units in root-to-tip order.
    pub fn units(&self) -> &[RowUnit<F>] {
        &self.units
    }

    pub fn rows(&self) -> usize { self.rows }
    pub fn vertex_count(&self) -> usize { self.vertices.len() }
    pub fn unit_count(&self) -> usize { self.units.len() }
    pub fn is_enabled(&self) -> bool { self.enabled }
    pub fn config(&self) -> &StripConfig<F> { &self.config }
}

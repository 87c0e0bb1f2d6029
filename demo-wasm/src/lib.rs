use swishy::{HairStrip, NoOpStepObserver, StripConfig, Vec2};
use wasm_bindgen::prelude::*;

// ---- Mascot Hair Demo ----

/// A mascot head anchor with attached hair strips, driven by the pointer.
///
/// The anchor eases toward the pointer each frame; the strips sway in
/// response to the anchor's motion. JS reads flat position/UV arrays and
/// draws the triangles on a canvas.
#[wasm_bindgen]
pub struct MascotHairDemo {
    side_strip: HairStrip<f32>,
    back_strip: HairStrip<f32>,
    anchor: Vec2<f32>,
    pointer: Vec2<f32>,
}

#[wasm_bindgen]
impl MascotHairDemo {
    #[wasm_bindgen(constructor)]
    pub fn new() -> Result<MascotHairDemo, JsError> {
        // Side-hair and back-hair tunings from a real mascot rig.
        let side_strip = HairStrip::grid(
            5,
            60.0,
            220.0,
            StripConfig::new()
                .with_move_diff_coef(0.02)
                .with_lerp_coef(0.2)
                .with_move_begin_index(0),
        )
        .map_err(|e| JsError::new(&e.to_string()))?;

        let back_strip = HairStrip::grid(
            5,
            120.0,
            260.0,
            StripConfig::new()
                .with_move_diff_coef(0.08)
                .with_lerp_coef(0.05)
                .with_move_begin_index(3),
        )
        .map_err(|e| JsError::new(&e.to_string()))?;

        let start = Vec2::new(300.0f32, 200.0);
        let mut demo = MascotHairDemo {
            side_strip,
            back_strip,
            anchor: start,
            pointer: start,
        };
        demo.side_strip.set_enable(true);
        demo.back_strip.set_enable(true);
        Ok(demo)
    }

    pub fn set_pointer(&mut self, x: f32, y: f32) {
        self.pointer = Vec2::new(x, y);
    }

    pub fn set_enabled(&mut self, enabled: bool) {
        self.side_strip.set_enable(enabled);
        self.back_strip.set_enable(enabled);
    }

    pub fn update(&mut self, delta_ms: f32) {
        // Ease the head anchor toward the pointer; the strips only see the
        // resulting world motion.
        self.anchor = self.anchor.lerp(self.pointer, 0.1);
        self.side_strip.update(self.anchor, delta_ms, &mut NoOpStepObserver);
        self.back_strip.update(self.anchor, delta_ms, &mut NoOpStepObserver);
    }

    /// Anchor position as [x, y].
    pub fn anchor(&self) -> Vec<f32> {
        vec![self.anchor.x, self.anchor.y]
    }

    /// Side-strip vertex positions as flat [x0, y0, x1, y1, ...], in
    /// triangle-list order, local to the strip.
    pub fn side_positions(&self) -> Vec<f32> {
        flatten(self.side_strip.positions())
    }

    /// Side-strip UVs as flat [u0, v0, u1, v1, ...].
    pub fn side_uvs(&self) -> Vec<f32> {
        flatten(self.side_strip.uvs())
    }

    pub fn back_positions(&self) -> Vec<f32> {
        flatten(self.back_strip.positions())
    }

    pub fn back_uvs(&self) -> Vec<f32> {
        flatten(self.back_strip.uvs())
    }

    pub fn side_vertex_count(&self) -> usize {
        self.side_strip.vertex_count()
    }

    pub fn back_vertex_count(&self) -> usize {
        self.back_strip.vertex_count()
    }
}

fn flatten(points: Vec<Vec2<f32>>) -> Vec<f32> {
    let mut out = Vec::with_capacity(points.len() * 2);
    for p in &points {
        out.push(p.x);
        out.push(p.y);
    }
    out
}

//! The beam position function: (time, state) → normalized (x, y).

use std::collections::HashMap;
use std::f64::consts::TAU;

use once_cell::sync::Lazy;

use crate::data::state::SimulationState;

// ─────────────────────────────────────────────────────────────────────────────
// Ratio correction table
// ─────────────────────────────────────────────────────────────────────────────

/// Per-ratio sign flips applied to the raw Lissajous parametrization.
///
/// For some frequency ratios the raw sine pair traces a mirror image of the
/// figure as conventionally shown on a lab oscilloscope. These are fixed
/// empirical constants, keyed by the truncated integer ratio; ratios absent
/// from the table get no flip.
static FLIP_BY_RATIO: Lazy<HashMap<(u32, u32), (f32, f32)>> = Lazy::new(|| {
    HashMap::from([
        ((1, 1), (1.0, 1.0)),
        ((1, 2), (1.0, -1.0)),
        ((1, 3), (1.0, 1.0)),
        ((2, 3), (-1.0, 1.0)),
    ])
});

/// Sign flips for the given frequency pair.
///
/// Frequencies are truncated to integers for the lookup only; fractional
/// parts still participate in the sine computation itself.
pub fn flip_for(freq_x: f32, freq_y: f32) -> (f32, f32) {
    FLIP_BY_RATIO
        .get(&(freq_x.trunc() as u32, freq_y.trunc() as u32))
        .copied()
        .unwrap_or((1.0, 1.0))
}

// ─────────────────────────────────────────────────────────────────────────────
// Position function
// ─────────────────────────────────────────────────────────────────────────────

/// Normalized beam position in [-1, 1]² at simulated time `t`.
///
/// Manual mode maps the deflection voltages directly (time-invariant);
/// sinusoidal mode evaluates the two generators and applies the ratio flip.
pub fn beam_position(t: f64, state: &SimulationState) -> (f32, f32) {
    if state.sinusoidal_mode {
        let x = (TAU * state.freq_x() as f64 * t + state.phase_x() as f64).sin() as f32;
        let y = (TAU * state.freq_y() as f64 * t + state.phase_y() as f64).sin() as f32;
        let (fx, fy) = flip_for(state.freq_x(), state.freq_y());
        (x * fx, y * fy)
    } else {
        let x = (state.horizontal_voltage() / 100.0).clamp(-1.0, 1.0);
        let y = (state.vertical_voltage() / 100.0).clamp(-1.0, 1.0);
        (x, y)
    }
}

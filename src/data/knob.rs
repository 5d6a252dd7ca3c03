//! Rotary control state machine: angular drag, fine linear drag, and wheel
//! increments, with snap-to-step quantization.
//!
//! The knob here is pure state plus event interpretation; drawing lives in
//! `panels::knob_widget`. Each frame the UI feeds the full event list to
//! every knob along with that knob's current on-screen geometry, and the
//! knob decides ownership by hit-testing.

use egui::{Pos2, Rect, Vec2};

use crate::data::input::{InputEvent, PointerButton};

/// Lower end of the display arc, degrees. The dial sweeps a 280° arc,
/// leaving an 80° dead arc at the bottom.
pub const ANGLE_MIN_DEG: f32 = -140.0;
/// Upper end of the display arc, degrees.
pub const ANGLE_MAX_DEG: f32 = 140.0;
/// Pointer distance from the knob center below which angular moves are
/// ignored, to avoid the angle discontinuity at the origin.
pub const DEAD_ZONE: f32 = 6.0;
/// Value change per pixel of linear drag, in steps.
pub const LINEAR_DRAG_SENSITIVITY: f32 = 0.08;
/// Value change per wheel notch, in steps.
pub const WHEEL_SENSITIVITY: f32 = 0.5;
/// Value change per wheel notch with the fine modifier held, in steps.
pub const WHEEL_FINE_SENSITIVITY: f32 = 0.1;

/// On-screen placement of a knob for one frame.
#[derive(Debug, Clone, Copy)]
pub struct KnobGeometry {
    pub center: Pos2,
    pub radius: f32,
}

impl KnobGeometry {
    /// Hit area: the square bounding rect of the knob circle.
    pub fn hit_rect(&self) -> Rect {
        Rect::from_center_size(self.center, Vec2::splat(2.0 * self.radius))
    }

    pub fn contains(&self, pos: Pos2) -> bool {
        self.hit_rect().contains(pos)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum DragMode {
    Idle,
    Angular,
    /// Relative drag; `last_y` is updated continuously so the drag tracks
    /// movement, not absolute position.
    Linear {
        last_y: f32,
    },
}

/// A bounded, quantized, multi-mode rotary control.
#[derive(Debug, Clone)]
pub struct Knob {
    label: String,
    min: f32,
    max: f32,
    step: f32,
    default: f32,
    value: f32,
    drag: DragMode,
}

impl Knob {
    pub fn new(label: impl Into<String>, min: f32, max: f32, initial: f32, step: f32) -> Self {
        Self {
            label: label.into(),
            min,
            max,
            step,
            default: initial,
            value: initial.clamp(min, max),
            drag: DragMode::Idle,
        }
    }

    /// Override the right-click reset target (defaults to the initial value).
    pub fn with_default(mut self, default: f32) -> Self {
        self.default = default;
        self
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn min(&self) -> f32 {
        self.min
    }

    pub fn max(&self) -> f32 {
        self.max
    }

    pub fn step(&self) -> f32 {
        self.step
    }

    pub fn default_value(&self) -> f32 {
        self.default
    }

    pub fn value(&self) -> f32 {
        self.value
    }

    pub fn is_dragging(&self) -> bool {
        self.drag != DragMode::Idle
    }

    /// Snap to the nearest multiple of `step`, then clamp. Ties round away
    /// from zero (`f32::round`).
    pub fn quantize(&self, v: f32) -> f32 {
        ((v / self.step).round() * self.step).clamp(self.min, self.max)
    }

    /// Programmatic write (presets, default reset): clamp and snap to the
    /// step grid, cancelling any active drag.
    pub fn set_value(&mut self, v: f32) {
        self.value = self.quantize(v.clamp(self.min, self.max));
        self.drag = DragMode::Idle;
    }

    /// Fine write (wheel, linear drag): clamp only, keeping sub-step
    /// resolution.
    fn set_value_fine(&mut self, v: f32) {
        self.value = v.clamp(self.min, self.max);
    }

    /// Dial angle (radians) for the current value, measured clockwise from
    /// straight up. Degenerate ranges (`max == min`) read as the arc start.
    pub fn value_to_angle(&self) -> f32 {
        let frac = if self.max == self.min {
            0.0
        } else {
            (self.value - self.min) / (self.max - self.min)
        };
        (ANGLE_MIN_DEG + frac * (ANGLE_MAX_DEG - ANGLE_MIN_DEG)).to_radians()
    }

    /// Map a pointer angle (radians, clockwise from straight up) onto the
    /// value range.
    ///
    /// The angle is normalized into (-180°, 180°], clamped to the display
    /// arc, linearly mapped to [min, max] and snapped to the step grid; an
    /// angle in the bottom dead arc past +140° therefore reads as `max`,
    /// past -140° as `min`.
    pub fn angle_to_value(&self, angle: f32) -> f32 {
        let mut deg = angle.to_degrees();
        while deg <= -180.0 {
            deg += 360.0;
        }
        while deg > 180.0 {
            deg -= 360.0;
        }
        let deg = deg.clamp(ANGLE_MIN_DEG, ANGLE_MAX_DEG);
        let frac = (deg - ANGLE_MIN_DEG) / (ANGLE_MAX_DEG - ANGLE_MIN_DEG);
        self.quantize(self.min + frac * (self.max - self.min))
    }

    /// Interpret one input event against this knob's current geometry.
    pub fn handle_event(&mut self, event: &InputEvent, geom: KnobGeometry) {
        match *event {
            InputEvent::PointerDown {
                button: PointerButton::Primary,
                pos,
                modifiers,
            } if geom.contains(pos) => {
                self.drag = if modifiers.fine {
                    DragMode::Linear { last_y: pos.y }
                } else {
                    DragMode::Angular
                };
            }
            InputEvent::PointerDown {
                button: PointerButton::Secondary,
                pos,
                ..
            } if geom.contains(pos) => {
                self.set_value(self.default);
            }
            InputEvent::PointerUp {
                button: PointerButton::Primary,
            } => {
                self.drag = DragMode::Idle;
            }
            InputEvent::PointerMoved { pos } => match self.drag {
                DragMode::Angular => {
                    let offset = pos - geom.center;
                    if offset.length_sq() < DEAD_ZONE * DEAD_ZONE {
                        return;
                    }
                    // Clockwise from straight up, matching the needle.
                    let angle = offset.x.atan2(-offset.y);
                    self.value = self.angle_to_value(angle);
                }
                DragMode::Linear { last_y } => {
                    let dy = pos.y - last_y;
                    if dy != 0.0 {
                        // Inverted Y: dragging up increases the value.
                        self.set_value_fine(self.value - dy * self.step * LINEAR_DRAG_SENSITIVITY);
                        self.drag = DragMode::Linear { last_y: pos.y };
                    }
                }
                DragMode::Idle => {}
            },
            InputEvent::Wheel {
                notches,
                pos,
                modifiers,
            } if geom.contains(pos) => {
                let sensitivity = if modifiers.fine {
                    WHEEL_FINE_SENSITIVITY
                } else {
                    WHEEL_SENSITIVITY
                };
                self.set_value_fine(self.value + notches * self.step * sensitivity);
            }
            _ => {}
        }
    }

    /// Display string for the current value; decimal places scale with the
    /// control's range.
    pub fn value_label(&self) -> String {
        let range = self.max - self.min;
        if range <= 10.0 {
            format!("{:.2}", self.value)
        } else if range <= 100.0 {
            format!("{:.1}", self.value)
        } else {
            format!("{}", self.value.round() as i64)
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// KnobBank
// ─────────────────────────────────────────────────────────────────────────────

/// The eight knobs of the control surface. This is the single source of
/// truth the simulation state is rebuilt from each frame.
#[derive(Debug, Clone)]
pub struct KnobBank {
    pub acceleration: Knob,
    pub persistence: Knob,
    pub volt_x: Knob,
    pub volt_y: Knob,
    pub freq_x: Knob,
    pub phase_x: Knob,
    pub freq_y: Knob,
    pub phase_y: Knob,
}

impl Default for KnobBank {
    fn default() -> Self {
        Self {
            acceleration: Knob::new("Accel", 100.0, 1000.0, 500.0, 5.0),
            persistence: Knob::new("Persist", 10.0, 300.0, 150.0, 1.0),
            volt_x: Knob::new("Volt X", -100.0, 100.0, 0.0, 1.0).with_default(0.0),
            volt_y: Knob::new("Volt Y", -100.0, 100.0, 0.0, 1.0).with_default(0.0),
            freq_x: Knob::new("fX Hz", 1.0, 5.0, 1.0, 1.0),
            phase_x: Knob::new("phase X", 0.0, 360.0, 0.0, 5.0),
            freq_y: Knob::new("fY Hz", 1.0, 5.0, 1.0, 1.0),
            phase_y: Knob::new("phase Y", 0.0, 360.0, 0.0, 5.0),
        }
    }
}

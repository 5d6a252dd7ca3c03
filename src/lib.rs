//! CrtScope crate root: re-exports and module wiring.
//!
//! This crate simulates the face of a cathode-ray-tube oscilloscope using
//! egui/eframe:
//! - `data`: the GUI-free simulation model (state, beam position generator,
//!   phosphor trace buffer, knob state machines, preset catalog)
//! - `panels`: egui widgets and painting (CRT screen, knobs, control panel,
//!   decorative tube diagram)
//! - `app`: the per-frame orchestration and the native-window entry point
//!
//! The beam is driven either by two manually set deflection voltages or by
//! two independent sinusoidal generators, which trace Lissajous figures on
//! the phosphor.

pub mod app;
pub mod config;
pub mod data;
pub mod panels;
pub mod theme;

// Public re-exports for a compact external API
pub use app::{run_crtscope, CrtScopeApp};
pub use config::CrtScopeConfig;
pub use data::generator::beam_position;
pub use data::input::{InputEvent, Modifiers, PointerButton};
pub use data::knob::{Knob, KnobBank, KnobGeometry};
pub use data::presets::{preset_catalog, Preset, Ratio};
pub use data::state::SimulationState;
pub use data::trace::TraceBuffer;
pub use theme::CrtTheme;

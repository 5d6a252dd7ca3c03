pub mod generator;
pub mod input;
pub mod knob;
pub mod presets;
pub mod state;
pub mod trace;

//! The process-wide simulation state, rebuilt from the knob bank once per
//! frame.
//!
//! Every numeric field is private and clamped to its declared range by its
//! setter; there is no mutation path that bypasses the clamp.

use std::ops::RangeInclusive;

use crate::data::knob::KnobBank;

/// Accelerating-anode voltage range (controls trace brightness).
pub const ACCELERATION_RANGE: RangeInclusive<f32> = 100.0..=1000.0;
/// Deflection-plate voltage range for manual mode.
pub const DEFLECTION_RANGE: RangeInclusive<f32> = -100.0..=100.0;
/// Generator frequency range (Hz-equivalent).
pub const FREQUENCY_RANGE: RangeInclusive<f32> = 1.0..=5.0;
/// Trail length range in retained points.
pub const PERSISTENCE_RANGE: RangeInclusive<usize> = 10..=300;

/// All simulation parameters plus the simulated clock.
///
/// Phases are stored in radians; the phase knobs hold degrees. Frequencies
/// are stored as floats and truncated to integers only for the ratio-table
/// lookup in the generator.
#[derive(Debug, Clone)]
pub struct SimulationState {
    acceleration_voltage: f32,
    vertical_voltage: f32,
    horizontal_voltage: f32,
    pub sinusoidal_mode: bool,
    freq_x: f32,
    freq_y: f32,
    phase_x: f32,
    phase_y: f32,
    persistence: usize,
    time: f64,
}

impl Default for SimulationState {
    fn default() -> Self {
        Self {
            acceleration_voltage: 500.0,
            vertical_voltage: 0.0,
            horizontal_voltage: 0.0,
            sinusoidal_mode: false,
            freq_x: 1.0,
            freq_y: 1.0,
            phase_x: 0.0,
            phase_y: 0.0,
            persistence: 150,
            time: 0.0,
        }
    }
}

impl SimulationState {
    pub fn acceleration_voltage(&self) -> f32 {
        self.acceleration_voltage
    }

    pub fn vertical_voltage(&self) -> f32 {
        self.vertical_voltage
    }

    pub fn horizontal_voltage(&self) -> f32 {
        self.horizontal_voltage
    }

    pub fn freq_x(&self) -> f32 {
        self.freq_x
    }

    pub fn freq_y(&self) -> f32 {
        self.freq_y
    }

    /// Generator phase for the X axis, radians.
    pub fn phase_x(&self) -> f32 {
        self.phase_x
    }

    /// Generator phase for the Y axis, radians.
    pub fn phase_y(&self) -> f32 {
        self.phase_y
    }

    pub fn persistence(&self) -> usize {
        self.persistence
    }

    pub fn time(&self) -> f64 {
        self.time
    }

    pub fn set_acceleration_voltage(&mut self, v: f32) {
        self.acceleration_voltage = v.clamp(*ACCELERATION_RANGE.start(), *ACCELERATION_RANGE.end());
    }

    pub fn set_vertical_voltage(&mut self, v: f32) {
        self.vertical_voltage = v.clamp(*DEFLECTION_RANGE.start(), *DEFLECTION_RANGE.end());
    }

    pub fn set_horizontal_voltage(&mut self, v: f32) {
        self.horizontal_voltage = v.clamp(*DEFLECTION_RANGE.start(), *DEFLECTION_RANGE.end());
    }

    pub fn set_freq_x(&mut self, v: f32) {
        self.freq_x = v.clamp(*FREQUENCY_RANGE.start(), *FREQUENCY_RANGE.end());
    }

    pub fn set_freq_y(&mut self, v: f32) {
        self.freq_y = v.clamp(*FREQUENCY_RANGE.start(), *FREQUENCY_RANGE.end());
    }

    pub fn set_phase_x(&mut self, radians: f32) {
        self.phase_x = radians;
    }

    pub fn set_phase_y(&mut self, radians: f32) {
        self.phase_y = radians;
    }

    pub fn set_persistence(&mut self, points: usize) {
        self.persistence = points.clamp(*PERSISTENCE_RANGE.start(), *PERSISTENCE_RANGE.end());
    }

    /// Advance the simulated clock by one fixed timestep.
    pub fn advance(&mut self, dt: f64) {
        self.time += dt;
    }

    /// Rebuild all knob-driven parameters from the bank.
    ///
    /// This is the single commit point between the control surface and the
    /// simulation: values flow knob → state, never the other way, and every
    /// write goes through the clamping setters.
    pub fn commit_knobs(&mut self, knobs: &KnobBank) {
        self.set_acceleration_voltage(knobs.acceleration.value());
        self.set_persistence(knobs.persistence.value().round() as usize);
        self.set_horizontal_voltage(knobs.volt_x.value());
        self.set_vertical_voltage(knobs.volt_y.value());
        self.set_freq_x(knobs.freq_x.value());
        self.set_phase_x(knobs.phase_x.value().to_radians());
        self.set_freq_y(knobs.freq_y.value());
        self.set_phase_y(knobs.phase_y.value().to_radians());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn setters_clamp_to_declared_ranges() {
        let mut state = SimulationState::default();

        state.set_acceleration_voltage(5000.0);
        assert_eq!(state.acceleration_voltage(), 1000.0);
        state.set_acceleration_voltage(-3.0);
        assert_eq!(state.acceleration_voltage(), 100.0);

        state.set_horizontal_voltage(250.0);
        assert_eq!(state.horizontal_voltage(), 100.0);
        state.set_vertical_voltage(-250.0);
        assert_eq!(state.vertical_voltage(), -100.0);

        state.set_freq_x(0.0);
        assert_eq!(state.freq_x(), 1.0);
        state.set_freq_y(9.0);
        assert_eq!(state.freq_y(), 5.0);

        state.set_persistence(2);
        assert_eq!(state.persistence(), 10);
        state.set_persistence(100_000);
        assert_eq!(state.persistence(), 300);
    }

    #[test]
    fn advance_accumulates_fixed_steps() {
        let mut state = SimulationState::default();
        for _ in 0..60 {
            state.advance(1.0 / 60.0);
        }
        assert!((state.time() - 1.0).abs() < 1e-9);
    }
}

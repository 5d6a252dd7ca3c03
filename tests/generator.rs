use approx::assert_abs_diff_eq;
use crtscope::{beam_position, SimulationState};
use crtscope::data::generator::flip_for;

#[test]
fn manual_position_is_time_invariant() {
    let mut state = SimulationState::default();
    state.sinusoidal_mode = false;
    state.set_horizontal_voltage(40.0);
    state.set_vertical_voltage(-70.0);

    let reference = beam_position(0.0, &state);
    for t in [0.1, 1.0, 17.3, 1000.0] {
        assert_eq!(
            beam_position(t, &state),
            reference,
            "manual position must not depend on time"
        );
    }
    assert_abs_diff_eq!(reference.0, 0.4, epsilon = 1e-6);
    assert_abs_diff_eq!(reference.1, -0.7, epsilon = 1e-6);
}

#[test]
fn manual_position_clamps_to_unit_square() {
    let mut state = SimulationState::default();
    state.sinusoidal_mode = false;
    state.set_horizontal_voltage(100.0);
    state.set_vertical_voltage(-100.0);

    let (x, y) = beam_position(3.0, &state);
    assert_eq!((x, y), (1.0, -1.0));
}

#[test]
fn one_to_one_zero_phase_traces_the_diagonal() {
    let mut state = SimulationState::default();
    state.sinusoidal_mode = true;
    state.set_freq_x(1.0);
    state.set_freq_y(1.0);
    state.set_phase_x(0.0);
    state.set_phase_y(0.0);

    for i in 0..200 {
        let t = i as f64 * 0.013;
        let (x, y) = beam_position(t, &state);
        assert_abs_diff_eq!(x, y, epsilon = 1e-6);
        assert!((-1.0..=1.0).contains(&x), "position must stay normalized");
    }
}

#[test]
fn ratio_one_two_flips_the_y_axis() {
    let mut state = SimulationState::default();
    state.sinusoidal_mode = true;
    state.set_freq_x(1.0);
    state.set_freq_y(2.0);
    state.set_phase_x(0.0);
    state.set_phase_y(0.0);

    let t = 0.1;
    let (_, y) = beam_position(t, &state);
    let raw_y = (std::f64::consts::TAU * 2.0 * t).sin() as f32;
    assert_abs_diff_eq!(y, -raw_y, epsilon = 1e-6);
}

#[test]
fn unknown_ratios_get_no_flip() {
    assert_eq!(flip_for(4.0, 5.0), (1.0, 1.0));
    assert_eq!(flip_for(2.0, 3.0), (-1.0, 1.0));
}

#[test]
fn ratio_lookup_truncates_fractional_frequencies() {
    // 2.9:3.2 collapses to the 2:3 table entry for lookup purposes only.
    assert_eq!(flip_for(2.9, 3.2), (-1.0, 1.0));
}

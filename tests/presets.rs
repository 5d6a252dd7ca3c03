use crtscope::data::knob::KnobBank;
use crtscope::{preset_catalog, Preset, Ratio, SimulationState};

#[test]
fn catalog_holds_all_twenty_combinations() {
    let catalog = preset_catalog();
    assert_eq!(catalog.len(), 20, "4 ratios x 5 deltas");
    for ratio in Ratio::ALL {
        for delta in [0.0, 45.0, 90.0, 135.0, 180.0] {
            assert!(
                catalog.iter().any(|p| p.ratio == ratio && p.delta_deg == delta),
                "missing preset {} δ={delta}",
                ratio.label()
            );
        }
    }
}

#[test]
fn preset_round_trip_one_two_ninety() {
    let mut knobs = KnobBank::default();
    Preset {
        ratio: Ratio::OneToTwo,
        delta_deg: 90.0,
    }
    .apply(&mut knobs);

    assert_eq!(knobs.freq_x.value(), 1.0);
    assert_eq!(knobs.freq_y.value(), 2.0);
    assert_eq!(knobs.phase_x.value(), 0.0);
    // base offset 90 for 1:2 plus the 90 delta.
    assert_eq!(knobs.phase_y.value(), 180.0);
}

#[test]
fn preset_phases_wrap_mod_360() {
    let mut knobs = KnobBank::default();
    Preset {
        ratio: Ratio::OneToTwo,
        delta_deg: 180.0,
    }
    .apply(&mut knobs);
    // 90 + 180 = 270, no wrap needed.
    assert_eq!(knobs.phase_y.value(), 270.0);

    Preset {
        ratio: Ratio::OneToThree,
        delta_deg: 180.0,
    }
    .apply(&mut knobs);
    assert_eq!(knobs.phase_x.value(), 180.0);
    assert_eq!(knobs.phase_y.value(), 180.0);
}

#[test]
fn applied_preset_reaches_the_state_through_commit() {
    let mut knobs = KnobBank::default();
    Preset {
        ratio: Ratio::TwoToThree,
        delta_deg: 45.0,
    }
    .apply(&mut knobs);

    let mut state = SimulationState::default();
    state.commit_knobs(&knobs);

    assert_eq!(state.freq_x(), 2.0);
    assert_eq!(state.freq_y(), 3.0);
    assert!((state.phase_x() - 90f32.to_radians()).abs() < 1e-6);
    assert!((state.phase_y() - 45f32.to_radians()).abs() < 1e-6);
}

#[test]
fn labels_match_the_panel_captions() {
    let preset = Preset {
        ratio: Ratio::OneToTwo,
        delta_deg: 90.0,
    };
    assert_eq!(preset.label(), "1:2 δ=90°");
}

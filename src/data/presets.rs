//! The fixed Lissajous preset catalog and its application to the knobs.

use once_cell::sync::Lazy;

use crate::data::knob::KnobBank;

// ─────────────────────────────────────────────────────────────────────────────
// Ratio
// ─────────────────────────────────────────────────────────────────────────────

/// Supported frequency ratios, as an enumerated tag rather than a parsed
/// string so the lookup cannot drift from its key representation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Ratio {
    OneToOne,
    OneToTwo,
    OneToThree,
    TwoToThree,
}

impl Ratio {
    pub const ALL: [Ratio; 4] = [
        Ratio::OneToOne,
        Ratio::OneToTwo,
        Ratio::OneToThree,
        Ratio::TwoToThree,
    ];

    /// The (fx, fy) frequency pair.
    pub fn freqs(self) -> (u32, u32) {
        match self {
            Ratio::OneToOne => (1, 1),
            Ratio::OneToTwo => (1, 2),
            Ratio::OneToThree => (1, 3),
            Ratio::TwoToThree => (2, 3),
        }
    }

    /// Base phase offsets (degrees) that orient the figure the way it is
    /// conventionally shown on a lab scope. Fixed empirical data.
    pub fn phase_offsets(self) -> (f32, f32) {
        match self {
            Ratio::OneToOne => (0.0, 0.0),
            Ratio::OneToTwo => (0.0, 90.0),
            Ratio::OneToThree => (180.0, 0.0),
            Ratio::TwoToThree => (90.0, 0.0),
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Ratio::OneToOne => "1:1",
            Ratio::OneToTwo => "1:2",
            Ratio::OneToThree => "1:3",
            Ratio::TwoToThree => "2:3",
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Preset
// ─────────────────────────────────────────────────────────────────────────────

/// Phase deltas offered per ratio, degrees.
pub const PHASE_DELTAS: [f32; 5] = [0.0, 45.0, 90.0, 135.0, 180.0];

/// One preset: a frequency ratio plus an extra Y-phase delta.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Preset {
    pub ratio: Ratio,
    pub delta_deg: f32,
}

impl Preset {
    /// Button caption, e.g. `1:2 δ=90°`.
    pub fn label(&self) -> String {
        format!("{} δ={}°", self.ratio.label(), self.delta_deg as i32)
    }

    /// Write the preset into the four generator knobs through their
    /// standard clamped setters. Flips are not written anywhere: the
    /// generator re-derives them from the resulting frequency pair.
    pub fn apply(&self, knobs: &mut KnobBank) {
        let (fx, fy) = self.ratio.freqs();
        let (base_x, base_y) = self.ratio.phase_offsets();
        knobs.freq_x.set_value(fx as f32);
        knobs.freq_y.set_value(fy as f32);
        knobs.phase_x.set_value(base_x.rem_euclid(360.0));
        knobs.phase_y.set_value((base_y + self.delta_deg).rem_euclid(360.0));
        log::debug!("applied preset {}", self.label());
    }
}

/// The complete preset surface: 4 ratios × 5 phase deltas, in catalog order
/// (all deltas of one ratio before the next ratio).
pub fn preset_catalog() -> &'static [Preset] {
    static CATALOG: Lazy<Vec<Preset>> = Lazy::new(|| {
        let mut presets = Vec::with_capacity(Ratio::ALL.len() * PHASE_DELTAS.len());
        for ratio in Ratio::ALL {
            for delta_deg in PHASE_DELTAS {
                presets.push(Preset { ratio, delta_deg });
            }
        }
        presets
    });
    &CATALOG
}

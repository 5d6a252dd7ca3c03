//! The bottom control surface: knob bank, mode/power buttons and the
//! preset grid.

use egui::{Button, RichText, Ui, Vec2};

use crate::data::input::InputEvent;
use crate::data::knob::KnobBank;
use crate::data::presets::preset_catalog;
use crate::panels::knob_widget;
use crate::theme::CrtTheme;

/// What the panel asked the frame loop to do this frame. Knob changes and
/// presets are not reported here: they land in the knob bank and reach the
/// simulation through the per-frame commit.
#[derive(Debug, Clone, Copy, Default)]
pub struct PanelResponse {
    pub toggle_mode: bool,
    pub power_off: bool,
}

/// Lay out the three panel zones. `events` is this frame's translated
/// input stream, dispatched to every knob.
pub fn draw_control_panel(
    ui: &mut Ui,
    knobs: &mut KnobBank,
    events: &[InputEvent],
    theme: &CrtTheme,
) -> PanelResponse {
    let mut response = PanelResponse::default();

    ui.horizontal_top(|ui| {
        draw_knob_zone(ui, knobs, events, theme);
        ui.separator();
        draw_control_zone(ui, &mut response);
        ui.separator();
        draw_preset_zone(ui, knobs);
    });

    response
}

fn draw_knob_zone(ui: &mut Ui, knobs: &mut KnobBank, events: &[InputEvent], theme: &CrtTheme) {
    ui.vertical(|ui| {
        ui.strong("KNOBS");
        ui.label(RichText::new("GENERAL  /  MANUAL (X/Y)").size(11.0));
        ui.horizontal(|ui| {
            knob_widget::knob(ui, &mut knobs.acceleration, events, theme);
            knob_widget::knob(ui, &mut knobs.persistence, events, theme);
            knob_widget::knob(ui, &mut knobs.volt_x, events, theme);
            knob_widget::knob(ui, &mut knobs.volt_y, events, theme);
        });
        ui.label(RichText::new("SINUSOIDAL").size(11.0));
        ui.horizontal(|ui| {
            knob_widget::knob(ui, &mut knobs.freq_x, events, theme);
            knob_widget::knob(ui, &mut knobs.phase_x, events, theme);
            knob_widget::knob(ui, &mut knobs.freq_y, events, theme);
            knob_widget::knob(ui, &mut knobs.phase_y, events, theme);
        });
    });
}

fn draw_control_zone(ui: &mut Ui, response: &mut PanelResponse) {
    ui.vertical(|ui| {
        ui.strong("CONTROLS");
        ui.add_space(8.0);
        let mode_label = format!("{} Mode", egui_phosphor::regular::WAVE_SINE);
        if ui
            .add_sized(Vec2::new(96.0, 34.0), Button::new(mode_label))
            .on_hover_text("Toggle between manual deflection and the sinusoidal generators")
            .clicked()
        {
            response.toggle_mode = true;
        }
        ui.add_space(8.0);
        let power_label = format!("{} Power", egui_phosphor::regular::POWER);
        if ui
            .add_sized(Vec2::new(96.0, 38.0), Button::new(power_label))
            .on_hover_text("Shut the instrument down")
            .clicked()
        {
            response.power_off = true;
        }
    });
}

fn draw_preset_zone(ui: &mut Ui, knobs: &mut KnobBank) {
    const COLUMNS: usize = 5;

    ui.vertical(|ui| {
        ui.strong("PRESETS");
        for row in preset_catalog().chunks(COLUMNS) {
            ui.horizontal(|ui| {
                for preset in row {
                    let label = RichText::new(preset.label()).size(10.0);
                    if ui
                        .add_sized(Vec2::new(74.0, 26.0), Button::new(label))
                        .clicked()
                    {
                        preset.apply(knobs);
                    }
                }
            });
        }
    });
}

//! The eframe application: one `update` call is one frame.

use std::time::Duration;

use eframe::egui;
use egui::{Margin, Pos2, Rect, Vec2};

use crate::config::CrtScopeConfig;
use crate::data::generator::beam_position;
use crate::data::input::collect_events;
use crate::data::knob::KnobBank;
use crate::data::state::SimulationState;
use crate::data::trace::TraceBuffer;
use crate::panels::control_panel::{draw_control_panel, PanelResponse};
use crate::panels::diagram::draw_tube_diagram;
use crate::panels::screen::{draw_screen, to_screen};

/// Height of the bottom control surface.
const PANEL_HEIGHT: f32 = 230.0;
/// Width reserved for the tube schematic left of the screen.
const DIAGRAM_WIDTH: f32 = 360.0;
const DIAGRAM_HEIGHT: f32 = 250.0;

/// Owns the knob bank, the simulation state and the phosphor trail.
///
/// Per frame, strictly in order: translate input events, let every control
/// process them, rebuild the state from the knobs, advance the simulated
/// clock by one fixed timestep, append one beam position to the trail, and
/// render back to front.
pub struct CrtScopeApp {
    config: CrtScopeConfig,
    knobs: KnobBank,
    state: SimulationState,
    trace: TraceBuffer,
}

impl CrtScopeApp {
    pub fn new(config: CrtScopeConfig) -> Self {
        let state = SimulationState::default();
        let trace = TraceBuffer::new(state.persistence());
        Self {
            config,
            knobs: KnobBank::default(),
            state,
            trace,
        }
    }

    pub fn state(&self) -> &SimulationState {
        &self.state
    }

    pub fn trace(&self) -> &TraceBuffer {
        &self.trace
    }
}

impl eframe::App for CrtScopeApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let events = collect_events(ctx);

        // Control surface: knobs and buttons consume this frame's events.
        let mut panel = PanelResponse::default();
        egui::TopBottomPanel::bottom("control_panel")
            .exact_height(PANEL_HEIGHT)
            .frame(
                egui::Frame::new()
                    .fill(self.config.theme.metal_panel)
                    .inner_margin(Margin::same(10)),
            )
            .show(ctx, |ui| {
                panel = draw_control_panel(ui, &mut self.knobs, &events, &self.config.theme);
            });

        if panel.toggle_mode {
            self.state.sinusoidal_mode = !self.state.sinusoidal_mode;
            log::debug!("sinusoidal mode: {}", self.state.sinusoidal_mode);
        }
        if panel.power_off {
            log::info!("power off requested");
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
        }

        // Commit: the state is rebuilt from the knobs, then the clock moves
        // one fixed step.
        self.state.commit_knobs(&self.knobs);
        self.state.advance(self.config.dt());
        self.trace.set_capacity(self.state.persistence());

        let (x, y) = beam_position(self.state.time(), &self.state);

        egui::CentralPanel::default()
            .frame(
                egui::Frame::new()
                    .fill(self.config.theme.backdrop)
                    .inner_margin(Margin::same(10)),
            )
            .show(ctx, |ui| {
                let avail = ui.max_rect();
                let screen_rect = Rect::from_min_max(
                    Pos2::new(avail.left() + DIAGRAM_WIDTH + 20.0, avail.top()),
                    avail.right_bottom(),
                );
                let diagram_rect = Rect::from_center_size(
                    Pos2::new(
                        avail.left() + DIAGRAM_WIDTH / 2.0,
                        screen_rect.center().y,
                    ),
                    Vec2::new(DIAGRAM_WIDTH, DIAGRAM_HEIGHT),
                );

                self.trace
                    .push(to_screen(x, y, screen_rect, self.config.screen_margin));

                let painter = ui.painter();
                draw_screen(
                    painter,
                    screen_rect,
                    &self.trace,
                    &self.state,
                    &self.config.theme,
                );
                draw_tube_diagram(painter, diagram_rect, y, &self.config.theme);
            });

        ctx.request_repaint_after(Duration::from_secs_f64(self.config.dt()));
    }
}

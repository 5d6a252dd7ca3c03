//! The CRT face: bezel, graticule, phosphor trail and beam hot-spot.

use egui::{Align2, Color32, CornerRadius, FontId, Painter, Pos2, Rect, Stroke, StrokeKind, Vec2};

use crate::data::state::SimulationState;
use crate::data::trace::{base_brightness, TraceBuffer};
use crate::theme::CrtTheme;

/// Halo radii and alphas for the instantaneous beam spot, outermost first.
const HOT_SPOT_HALO: [(f32, u8); 3] = [(8.0, 40), (5.0, 90), (3.0, 160)];
/// Graticule pitch in pixels.
const GRID_PITCH: f32 = 24.0;

// ─────────────────────────────────────────────────────────────────────────────
// Coordinate mapping
// ─────────────────────────────────────────────────────────────────────────────

/// Map a normalized beam position onto the screen rect.
///
/// Affine and Y-inverted (positive normalized y points up), with `margin`
/// pixels kept free inside the rect. No clamping happens here: inputs are
/// already normalized to [-1, 1] by the generator. The result is rounded
/// to whole pixels.
pub fn to_screen(x: f32, y: f32, rect: Rect, margin: f32) -> Pos2 {
    let half_w = rect.width() / 2.0 - margin;
    let half_h = rect.height() / 2.0 - margin;
    Pos2::new(
        (rect.center().x + x * half_w).round(),
        (rect.center().y - y * half_h).round(),
    )
}

// ─────────────────────────────────────────────────────────────────────────────
// Painting
// ─────────────────────────────────────────────────────────────────────────────

/// Phosphor color for one trail point given base brightness and recency.
fn trail_color(theme: &CrtTheme, base: f32, frac: f32) -> Color32 {
    let trace = theme.phosphor_trace;
    Color32::from_rgba_unmultiplied(
        (trace.r() as f32 * frac) as u8,
        (base * frac).clamp(0.0, 255.0) as u8,
        (trace.b() as f32 * frac) as u8,
        (200.0 * frac) as u8,
    )
}

/// Draw the complete CRT face into `rect`: glass, phosphor, graticule,
/// info text, trail (oldest to newest) and the beam hot-spot.
pub fn draw_screen(
    painter: &Painter,
    rect: Rect,
    trace: &TraceBuffer,
    state: &SimulationState,
    theme: &CrtTheme,
) {
    painter.rect_filled(rect, CornerRadius::same(8), theme.glass);
    let inner = rect.shrink(7.0);
    painter.rect_filled(inner, CornerRadius::same(8), theme.phosphor_bg);

    // Graticule
    let grid = inner.shrink(10.0);
    let grid_stroke = Stroke::new(1.0, theme.phosphor_grid);
    let mut x = grid.left();
    while x < grid.right() {
        painter.line_segment([Pos2::new(x, grid.top()), Pos2::new(x, grid.bottom())], grid_stroke);
        x += GRID_PITCH;
    }
    let mut y = grid.top();
    while y < grid.bottom() {
        painter.line_segment([Pos2::new(grid.left(), y), Pos2::new(grid.right(), y)], grid_stroke);
        y += GRID_PITCH;
    }

    // Mode banner and generator readout
    let mode_text = if state.sinusoidal_mode {
        "MODE: SINUSOIDAL"
    } else {
        "MODE: MANUAL"
    };
    painter.text(
        inner.left_top() + Vec2::new(16.0, 12.0),
        Align2::LEFT_TOP,
        mode_text,
        FontId::monospace(18.0),
        theme.highlight,
    );
    let params = format!(
        "fx={}Hz  fy={}Hz  phix={}°  phiy={}°",
        state.freq_x().trunc() as u32,
        state.freq_y().trunc() as u32,
        state.phase_x().to_degrees().round() as i32,
        state.phase_y().to_degrees().round() as i32,
    );
    painter.text(
        inner.left_top() + Vec2::new(16.0, 36.0),
        Align2::LEFT_TOP,
        params,
        FontId::monospace(14.0),
        theme.highlight,
    );

    // Phosphor trail
    let base = base_brightness(state.acceleration_voltage());
    for (i, point) in trace.iter().enumerate() {
        let frac = trace.brightness_fraction(i);
        painter.rect_filled(
            Rect::from_center_size(*point, Vec2::splat(3.0)),
            CornerRadius::ZERO,
            trail_color(theme, base, frac),
        );
    }

    if let Some(spot) = trace.newest() {
        draw_beam_spot(painter, spot, theme);
    }

    painter.rect_stroke(
        rect,
        CornerRadius::same(8),
        Stroke::new(2.0, theme.grey),
        StrokeKind::Inside,
    );
}

/// The instantaneous beam position: a bright dot inside a translucent
/// multi-radius halo, distinct from the decaying trail behind it.
fn draw_beam_spot(painter: &Painter, pos: Pos2, theme: &CrtTheme) {
    let trace = theme.phosphor_trace;
    for (radius, alpha) in HOT_SPOT_HALO {
        painter.circle_filled(
            pos,
            radius,
            Color32::from_rgba_unmultiplied(trace.r(), trace.g(), trace.b(), alpha),
        );
    }
    painter.circle_filled(pos, 1.0, trace);
}

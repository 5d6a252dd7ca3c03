//! egui widget wrapping the knob state machine: allocates the hit area,
//! feeds it this frame's events and paints the dial.

use egui::{Align2, FontId, Pos2, Response, Sense, Stroke, Ui, Vec2};

use crate::data::input::InputEvent;
use crate::data::knob::{Knob, KnobGeometry, ANGLE_MAX_DEG, ANGLE_MIN_DEG};
use crate::theme::CrtTheme;

/// Dial radius in pixels.
pub const KNOB_RADIUS: f32 = 18.0;
/// Widget width; leaves room for the two text lines under the dial.
const WIDGET_SIZE: Vec2 = Vec2::new(86.0, 2.0 * KNOB_RADIUS + 34.0);
/// Angular pitch of the dial tick marks, degrees.
const TICK_PITCH_DEG: f32 = 20.0;

/// Show one knob. All pointer/wheel interpretation goes through the knob's
/// own event handling so that drag state survives the pointer leaving the
/// widget rect.
pub fn knob(ui: &mut Ui, knob: &mut Knob, events: &[InputEvent], theme: &CrtTheme) -> Response {
    let (rect, response) = ui.allocate_exact_size(WIDGET_SIZE, Sense::hover());
    let geom = KnobGeometry {
        center: Pos2::new(rect.center().x, rect.top() + KNOB_RADIUS),
        radius: KNOB_RADIUS,
    };

    for event in events {
        knob.handle_event(event, geom);
    }

    if !ui.is_rect_visible(rect) {
        return response;
    }
    let painter = ui.painter();
    let hovered = ui
        .ctx()
        .pointer_latest_pos()
        .is_some_and(|pos| geom.contains(pos));

    // Dial body
    painter.circle_filled(geom.center, geom.radius, theme.metal);
    painter.circle_stroke(geom.center, geom.radius, Stroke::new(2.0, theme.metal_dark));
    if hovered {
        painter.circle_stroke(geom.center, geom.radius, Stroke::new(1.0, theme.highlight));
    }

    // Tick marks across the display arc
    let mut deg = ANGLE_MIN_DEG;
    while deg <= ANGLE_MAX_DEG {
        let ang = deg.to_radians();
        let outer = geom.radius - 2.0;
        let inner = geom.radius - 7.0;
        let dir = Vec2::new(ang.sin(), -ang.cos());
        painter.line_segment(
            [geom.center + dir * outer, geom.center + dir * inner],
            Stroke::new(2.0, theme.grey),
        );
        deg += TICK_PITCH_DEG;
    }

    // Needle and center cap
    let ang = knob.value_to_angle();
    let dir = Vec2::new(ang.sin(), -ang.cos());
    painter.line_segment(
        [geom.center, geom.center + dir * (geom.radius - 9.0)],
        Stroke::new(4.0, theme.glass),
    );
    painter.circle_filled(geom.center, 3.0, theme.white);

    // Label and value readout
    painter.text(
        Pos2::new(geom.center.x, geom.center.y + geom.radius + 4.0),
        Align2::CENTER_TOP,
        knob.label(),
        FontId::monospace(12.0),
        theme.text,
    );
    painter.text(
        Pos2::new(geom.center.x, geom.center.y + geom.radius + 18.0),
        Align2::CENTER_TOP,
        knob.value_label(),
        FontId::monospace(11.0),
        theme.text,
    );

    response
}

//! Decorative side-view schematic of the tube: gun, anodes, deflection
//! plates, cone and face, with the beam deflected by the current
//! normalized Y position. Stateless drawing only.

use egui::{
    Align2, Color32, CornerRadius, FontId, Painter, Pos2, Rect, Shape, Stroke, StrokeKind, Vec2,
};

use crate::theme::CrtTheme;

/// Draw the schematic into `rect`. `y_norm` is the beam's normalized
/// vertical deflection in [-1, 1].
pub fn draw_tube_diagram(painter: &Painter, rect: Rect, y_norm: f32, theme: &CrtTheme) {
    let frame = rect.shrink(5.0);
    painter.rect_filled(frame, CornerRadius::same(8), Color32::from_rgb(20, 20, 25));
    painter.rect_stroke(
        frame,
        CornerRadius::same(8),
        Stroke::new(2.0, theme.grey),
        StrokeKind::Inside,
    );

    let area = rect.shrink(15.0);
    let mid_y = area.center().y;
    let left = area.left() + 30.0;
    let right = area.right() - 30.0;
    let outline = Stroke::new(2.0, theme.white);

    // Electron gun
    painter.rect_stroke(
        Rect::from_min_size(Pos2::new(left - 15.0, mid_y - 12.0), Vec2::new(70.0, 24.0)),
        CornerRadius::ZERO,
        outline,
        StrokeKind::Inside,
    );

    // Focusing anodes
    for i in 0..3 {
        painter.rect_stroke(
            Rect::from_min_size(
                Pos2::new(left + i as f32 * 18.0, mid_y - 6.0),
                Vec2::new(10.0, 12.0),
            ),
            CornerRadius::ZERO,
            outline,
            StrokeKind::Inside,
        );
    }

    // Vertical deflection plates
    let plates_x = left + 88.0;
    for top in [mid_y - 28.0, mid_y + 18.0] {
        painter.rect_stroke(
            Rect::from_min_size(Pos2::new(plates_x, top), Vec2::new(30.0, 10.0)),
            CornerRadius::ZERO,
            outline,
            StrokeKind::Inside,
        );
    }
    painter.text(
        Pos2::new(plates_x - 6.0, mid_y - 46.0),
        Align2::LEFT_TOP,
        "Vert. defl. plates",
        FontId::monospace(12.0),
        theme.text,
    );

    // Cone and face
    let neck_x = plates_x + 48.0;
    painter.add(Shape::closed_line(
        vec![
            Pos2::new(neck_x, mid_y - 20.0),
            Pos2::new(neck_x, mid_y + 20.0),
            Pos2::new(right - 25.0, mid_y),
        ],
        outline,
    ));
    let face_radius = (area.height() / 5.0).clamp(18.0, 32.0);
    let face_center = Pos2::new(right, mid_y);
    painter.circle_stroke(face_center, face_radius, outline);
    painter.rect_stroke(
        Rect::from_min_size(
            Pos2::new(face_center.x - face_radius - 5.0, face_center.y - face_radius),
            Vec2::new(5.0, 2.0 * face_radius),
        ),
        CornerRadius::ZERO,
        Stroke::new(1.0, theme.grey),
        StrokeKind::Inside,
    );

    // Beam path: straight through the gun, then deflected toward the face
    let target = Pos2::new(
        face_center.x - face_radius,
        face_center.y - y_norm * face_radius,
    );
    painter.line_segment(
        [Pos2::new(left - 15.0, mid_y), Pos2::new(neck_x, mid_y)],
        outline,
    );
    painter.line_segment([Pos2::new(neck_x, mid_y), target], outline);
}

use crtscope::panels::screen::to_screen;
use egui::{Pos2, Rect};

fn screen_rect() -> Rect {
    Rect::from_min_max(Pos2::new(420.0, 40.0), Pos2::new(1120.0, 450.0))
}

#[test]
fn origin_maps_to_the_rect_center() {
    let rect = screen_rect();
    assert_eq!(to_screen(0.0, 0.0, rect, 28.0), rect.center().round());
}

#[test]
fn mapping_is_affine_with_margin() {
    let rect = screen_rect();
    let margin = 28.0;
    let p = to_screen(1.0, 0.0, rect, margin);
    assert_eq!(p.x, (rect.center().x + rect.width() / 2.0 - margin).round());
    assert_eq!(p.y, rect.center().y.round());
}

#[test]
fn positive_y_points_up_on_screen() {
    let rect = screen_rect();
    let up = to_screen(0.0, 1.0, rect, 28.0);
    let down = to_screen(0.0, -1.0, rect, 28.0);
    assert!(
        up.y < down.y,
        "positive normalized y must map to a smaller screen y"
    );
    // Symmetric about the center.
    assert_eq!(
        (rect.center().y - up.y).round(),
        (down.y - rect.center().y).round()
    );
}

#[test]
fn results_land_on_whole_pixels() {
    let p = to_screen(0.37, -0.53, screen_rect(), 28.0);
    assert_eq!(p.x, p.x.round());
    assert_eq!(p.y, p.y.round());
}

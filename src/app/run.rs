//! Top-level entry point for running the simulator as a native window.
//!
//! [`run_crtscope`] builds the [`CrtScopeApp`] from a configuration,
//! prepares the native window (icon, icon font, fixed-size viewport) and
//! enters the eframe event loop. The call blocks until the window closes.

use eframe::egui;

use crate::config::CrtScopeConfig;

use super::crtscope_app::CrtScopeApp;

/// Launch the simulator in a native window.
pub fn run_crtscope(mut cfg: CrtScopeConfig) -> eframe::Result<()> {
    let title = cfg.title.clone();
    let mut opts = cfg
        .native_options
        .take()
        .unwrap_or_else(eframe::NativeOptions::default);

    // The trail stores screen-space points, so the default window is fixed
    // size like the instrument it imitates.
    if opts.viewport.inner_size.is_none() {
        opts.viewport = opts
            .viewport
            .clone()
            .with_inner_size(egui::vec2(1180.0, 700.0))
            .with_resizable(false);
    }

    // Try to set the application icon from icon.svg if available.
    if opts.viewport.icon.is_none() {
        if let Some(icon) = load_app_icon_svg() {
            opts.viewport = opts.viewport.clone().with_icon(icon);
        }
    }

    log::info!("starting {} at {} fps", title, cfg.frame_rate);
    let app = CrtScopeApp::new(cfg);

    eframe::run_native(
        &title,
        opts,
        Box::new(|cc| {
            // Install the Phosphor icon font before creating the app.
            let mut fonts = egui::FontDefinitions::default();
            egui_phosphor::add_to_fonts(&mut fonts, egui_phosphor::Variant::Regular);
            cc.egui_ctx.set_fonts(fonts);
            Ok(Box::new(app))
        }),
    )
}

/// Attempt to load the project's `icon.svg` as an [`egui::IconData`].
///
/// Returns `None` if the file does not exist or cannot be parsed/rendered.
fn load_app_icon_svg() -> Option<egui::IconData> {
    let svg_path = concat!(env!("CARGO_MANIFEST_DIR"), "/icon.svg");
    let data = std::fs::read(svg_path).ok()?;

    let opt = usvg::Options::default();
    let tree = usvg::Tree::from_data(&data, &opt).ok()?;
    let size = tree.size().to_int_size();
    if size.width() == 0 || size.height() == 0 {
        return None;
    }
    let mut pixmap = tiny_skia::Pixmap::new(size.width(), size.height())?;
    let mut canvas = pixmap.as_mut();
    resvg::render(&tree, tiny_skia::Transform::default(), &mut canvas);
    let rgba = pixmap.take();
    Some(egui::IconData {
        rgba,
        width: size.width(),
        height: size.height(),
    })
}

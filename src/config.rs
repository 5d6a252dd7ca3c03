//! Configuration for the CRT simulator window and frame loop.
//!
//! Everything here is fixed at construction; there is no re-loading path.

use crate::theme::CrtTheme;

// ─────────────────────────────────────────────────────────────────────────────
// CrtScopeConfig
// ─────────────────────────────────────────────────────────────────────────────

/// Top-level configuration for the simulator.
pub struct CrtScopeConfig {
    /// Native window title.
    pub title: String,
    /// Target frame rate. The simulation advances by a fixed `1/frame_rate`
    /// per frame, independent of wall-clock jitter.
    pub frame_rate: f64,
    /// Inner margin (px) between the phosphor edge and the beam's reachable
    /// area on the CRT screen.
    pub screen_margin: f32,
    /// Visual theme (phosphor and chassis colors).
    pub theme: CrtTheme,
    /// Optional eframe native-window options. When `None`, a fixed
    /// 1180×700 non-resizable window is used.
    pub native_options: Option<eframe::NativeOptions>,
}

impl CrtScopeConfig {
    /// Fixed timestep derived from the target frame rate.
    pub fn dt(&self) -> f64 {
        1.0 / self.frame_rate
    }
}

impl Default for CrtScopeConfig {
    fn default() -> Self {
        Self {
            title: "CrtScope".to_string(),
            frame_rate: 60.0,
            screen_margin: 28.0,
            theme: CrtTheme::default(),
            native_options: None,
        }
    }
}

//! Visual theme for the CRT simulator.
//!
//! The palette mimics a green-phosphor tube in a brushed-metal chassis.

use egui::Color32;

/// Colors for the phosphor screen and the chassis chrome.
#[derive(Clone, Debug, PartialEq)]
pub struct CrtTheme {
    /// Window background behind the chassis.
    pub backdrop: Color32,
    /// Screen glass behind the phosphor coating.
    pub glass: Color32,
    /// Phosphor coating at rest.
    pub phosphor_bg: Color32,
    /// Graticule grid lines.
    pub phosphor_grid: Color32,
    /// Fully excited phosphor (the trace at maximum brightness).
    pub phosphor_trace: Color32,
    /// Chassis metal.
    pub metal: Color32,
    /// Darker metal for outlines and pressed controls.
    pub metal_dark: Color32,
    /// Panel face metal.
    pub metal_panel: Color32,
    /// Generic bright foreground.
    pub white: Color32,
    /// Label text.
    pub text: Color32,
    /// Neutral dark grey for borders and dial marks.
    pub grey: Color32,
    /// Hover / emphasis highlight.
    pub highlight: Color32,
}

impl Default for CrtTheme {
    fn default() -> Self {
        Self {
            backdrop: Color32::from_rgb(30, 30, 34),
            glass: Color32::from_rgb(5, 8, 7),
            phosphor_bg: Color32::from_rgb(8, 40, 18),
            phosphor_grid: Color32::from_rgb(20, 80, 40),
            phosphor_trace: Color32::from_rgb(10, 255, 90),
            metal: Color32::from_rgb(185, 190, 195),
            metal_dark: Color32::from_rgb(120, 125, 130),
            metal_panel: Color32::from_rgb(160, 165, 170),
            white: Color32::from_rgb(235, 235, 235),
            text: Color32::from_rgb(220, 230, 230),
            grey: Color32::from_rgb(60, 65, 70),
            highlight: Color32::from_rgb(250, 255, 255),
        }
    }
}

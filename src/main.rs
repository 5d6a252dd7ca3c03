//! crtscope - interactive CRT oscilloscope simulator.
//!
//! Opens a native window showing a green-phosphor tube face, a side-view
//! tube schematic and a metal control panel. The beam is steered either by
//! the manual deflection knobs or by two sinusoidal generators producing
//! Lissajous figures; twenty presets cover the classic ratio/phase
//! combinations.

use crtscope::{run_crtscope, CrtScopeConfig};

fn main() -> eframe::Result<()> {
    env_logger::init();
    log::info!("Starting crtscope");

    run_crtscope(CrtScopeConfig::default())
}

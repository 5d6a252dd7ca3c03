//! Frame-loop orchestration and the native-window entry point.

mod crtscope_app;
mod run;

pub use crtscope_app::CrtScopeApp;
pub use run::run_crtscope;

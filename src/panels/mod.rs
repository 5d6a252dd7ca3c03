pub mod control_panel;
pub mod diagram;
pub mod knob_widget;
pub mod screen;

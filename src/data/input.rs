//! Discrete input events consumed by the interactive controls.
//!
//! egui delivers raw events once per frame; [`collect_events`] translates
//! the ones the simulator cares about into [`InputEvent`]s. Every control
//! receives the full list each frame and decides ownership by hit-testing
//! against its own geometry, so input dispatch is independent of the
//! simulation state.

use egui::{Context, Event, MouseWheelUnit, Pos2};

/// Pointer buttons the controls distinguish.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerButton {
    /// Left button: starts angular or fine-linear drags.
    Primary,
    /// Right button: resets a knob to its default.
    Secondary,
}

/// Modifier-key state captured at the moment of the event.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Modifiers {
    /// The fine-adjust modifier (Shift).
    pub fine: bool,
}

/// One discrete input event in screen coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    PointerDown {
        button: PointerButton,
        pos: Pos2,
        modifiers: Modifiers,
    },
    PointerUp {
        button: PointerButton,
    },
    PointerMoved {
        pos: Pos2,
    },
    Wheel {
        /// Scroll amount in wheel notches; positive scrolls up.
        notches: f32,
        /// Pointer position when the wheel turned.
        pos: Pos2,
        modifiers: Modifiers,
    },
}

/// Translate this frame's raw egui events into [`InputEvent`]s.
pub fn collect_events(ctx: &Context) -> Vec<InputEvent> {
    ctx.input(|i| {
        let pointer_pos = i.pointer.latest_pos();
        let mut out = Vec::new();
        for event in &i.events {
            match *event {
                Event::PointerButton {
                    pos,
                    button,
                    pressed,
                    modifiers,
                } => {
                    let button = match button {
                        egui::PointerButton::Primary => PointerButton::Primary,
                        egui::PointerButton::Secondary => PointerButton::Secondary,
                        _ => continue,
                    };
                    if pressed {
                        out.push(InputEvent::PointerDown {
                            button,
                            pos,
                            modifiers: Modifiers {
                                fine: modifiers.shift,
                            },
                        });
                    } else {
                        out.push(InputEvent::PointerUp { button });
                    }
                }
                Event::PointerMoved(pos) => out.push(InputEvent::PointerMoved { pos }),
                Event::MouseWheel {
                    unit,
                    delta,
                    modifiers,
                } => {
                    let Some(pos) = pointer_pos else { continue };
                    let notches = match unit {
                        MouseWheelUnit::Line => delta.y,
                        // One text line is roughly 24 logical points.
                        MouseWheelUnit::Point => delta.y / 24.0,
                        MouseWheelUnit::Page => delta.y * 10.0,
                    };
                    if notches != 0.0 {
                        out.push(InputEvent::Wheel {
                            notches,
                            pos,
                            modifiers: Modifiers {
                                fine: modifiers.shift,
                            },
                        });
                    }
                }
                _ => {}
            }
        }
        out
    })
}

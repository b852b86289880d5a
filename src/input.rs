/// Logical controls and the key-event → boolean-state plumbing.
///
/// The simulation only ever sees an `InputState`. Physical keys are mapped
/// to logical controls here; anything unrecognised is dropped.

use std::collections::HashMap;

use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, MouseButton, MouseEvent, MouseEventKind,
};

use crate::entities::GameEvent;

/// A key is considered "held" if its last press/repeat event arrived within
/// this many frames. Covers terminals that never emit key-release events:
/// OS key-repeat runs at ≥ 15 Hz, so 8 frames at 60 FPS (≈133 ms) is always
/// refreshed before it expires.
pub const HOLD_WINDOW: u64 = 8;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Control {
    Up,
    Right,
    Down,
    Left,
    Fire,
}

/// Current boolean state of every logical control.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct InputState {
    pub up: bool,
    pub right: bool,
    pub down: bool,
    pub left: bool,
    pub fire: bool,
}

impl InputState {
    pub fn set(&mut self, control: Control, pressed: bool) {
        match control {
            Control::Up => self.up = pressed,
            Control::Right => self.right = pressed,
            Control::Down => self.down = pressed,
            Control::Left => self.left = pressed,
            Control::Fire => self.fire = pressed,
        }
    }
}

/// Map a physical key to a logical control. Arrows and WASD move, Space fires.
pub fn control_for(code: &KeyCode) -> Option<Control> {
    match code {
        KeyCode::Up | KeyCode::Char('w') | KeyCode::Char('W') => Some(Control::Up),
        KeyCode::Right | KeyCode::Char('d') | KeyCode::Char('D') => Some(Control::Right),
        KeyCode::Down | KeyCode::Char('s') | KeyCode::Char('S') => Some(Control::Down),
        KeyCode::Left | KeyCode::Char('a') | KeyCode::Char('A') => Some(Control::Left),
        KeyCode::Char(' ') => Some(Control::Fire),
        _ => None,
    }
}

/// The start/restart trigger: a left click or Enter.
pub fn is_start_trigger(event: &Event) -> bool {
    match event {
        Event::Mouse(MouseEvent { kind: MouseEventKind::Down(MouseButton::Left), .. }) => true,
        Event::Key(KeyEvent { code: KeyCode::Enter, kind: KeyEventKind::Press, .. }) => true,
        _ => false,
    }
}

/// Turns press/repeat/release key events into a per-frame `InputState`.
///
/// Records the frame of the last press/repeat event for every control.
/// * **Keyboard-enhancement capable** terminals send proper releases, so
///   controls clear immediately.
/// * **Classic terminals** only send presses (OS key-repeat shows as repeated
///   presses). Controls expire after `HOLD_WINDOW` frames of silence.
#[derive(Debug, Default)]
pub struct HeldKeys {
    last_seen: HashMap<Control, u64>,
}

impl HeldKeys {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed one key event. Unmapped keys are ignored.
    pub fn handle(&mut self, event: &KeyEvent, frame: u64) {
        let Some(control) = control_for(&event.code) else {
            return;
        };
        match event.kind {
            KeyEventKind::Press | KeyEventKind::Repeat => {
                self.last_seen.insert(control, frame);
            }
            KeyEventKind::Release => {
                self.last_seen.remove(&control);
            }
        }
    }

    /// React to a frame's events. A ship hit drops the fire control, so a held
    /// key has to be pressed again before the next shot.
    pub fn apply(&mut self, events: &[GameEvent]) {
        if events.iter().any(|e| matches!(e, GameEvent::ShipHit { .. })) {
            self.release(Control::Fire);
        }
    }

    /// Forget a control until its key is pressed again.
    pub fn release(&mut self, control: Control) {
        self.last_seen.remove(&control);
    }

    pub fn state(&self, frame: u64) -> InputState {
        let mut input = InputState::default();
        for (&control, &last) in &self.last_seen {
            input.set(control, frame.saturating_sub(last) <= HOLD_WINDOW);
        }
        input
    }
}

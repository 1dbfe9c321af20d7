//! Held-control state
//!
//! Key events only flip flags; the loop reads the latest snapshot each tick.

/// Logical controls
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Control {
    Left,
    Right,
    Jump,
}

impl Control {
    /// Map a `KeyboardEvent.code` to a control
    pub fn from_key_code(code: &str) -> Option<Self> {
        match code {
            "ArrowLeft" | "KeyA" => Some(Control::Left),
            "ArrowRight" | "KeyD" => Some(Control::Right),
            "Space" => Some(Control::Jump),
            _ => None,
        }
    }
}

/// Pressed/released status of every control
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InputState {
    pub move_left: bool,
    pub move_right: bool,
    pub jump: bool,
}

impl InputState {
    pub fn set(&mut self, control: Control, pressed: bool) {
        match control {
            Control::Left => self.move_left = pressed,
            Control::Right => self.move_right = pressed,
            Control::Jump => self.jump = pressed,
        }
    }

    pub fn press(&mut self, control: Control) {
        self.set(control, true);
    }

    pub fn release(&mut self, control: Control) {
        self.set(control, false);
    }

    /// Apply a raw key event. Returns the control if the key is bound.
    pub fn handle_key(&mut self, code: &str, pressed: bool) -> Option<Control> {
        let control = Control::from_key_code(code)?;
        self.set(control, pressed);
        Some(control)
    }

    /// Release everything (restart)
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Signed horizontal direction; left wins when both are held
    pub fn horizontal(&self) -> f32 {
        if self.move_left {
            -1.0
        } else if self.move_right {
            1.0
        } else {
            0.0
        }
    }
}

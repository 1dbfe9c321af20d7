//! Per-frame orchestration
//!
//! Owns the simulation state and the two output collaborators. The host
//! calls [`GameLoop::frame`] once per display refresh and forwards key
//! events in between; [`GameLoop::stop`] ends the loop.

use crate::renderer::{Surface, draw_scene};
use crate::sim::{Control, GameEvent, GameState, InputState, tick};
use crate::tuning::Tuning;
use crate::ui::Hud;

pub struct GameLoop<S, H> {
    state: GameState,
    input: InputState,
    surface: S,
    hud: H,
    running: bool,
    frames: u64,
}

impl<S: Surface, H: Hud> GameLoop<S, H> {
    pub fn new(seed: u64, tuning: Tuning, surface: S, hud: H) -> Self {
        log::info!("Game initialized with seed: {}", seed);
        Self {
            state: GameState::new(seed, tuning),
            input: InputState::default(),
            surface,
            hud,
            running: true,
            frames: 0,
        }
    }

    /// Draw the current state, then advance it by one tick
    pub fn frame(&mut self) -> Vec<GameEvent> {
        if !self.running {
            return Vec::new();
        }

        draw_scene(&self.state, &mut self.surface);
        self.hud.show_score(self.state.displayed_score());

        let events = tick(&mut self.state, &self.input);
        for event in &events {
            if let GameEvent::GameOver { final_score } = *event {
                self.hud.show_game_over(final_score);
            }
        }

        self.frames += 1;
        events
    }

    /// Key-down from the host. While frozen only jump is accepted, and it
    /// restarts instead of latching. Returns true if the key is bound.
    pub fn key_down(&mut self, code: &str) -> bool {
        let Some(control) = Control::from_key_code(code) else {
            return false;
        };
        if self.state.is_frozen() {
            if control == Control::Jump {
                self.restart();
            }
        } else {
            self.input.press(control);
        }
        true
    }

    /// Key-up from the host. Returns true if the key is bound.
    pub fn key_up(&mut self, code: &str) -> bool {
        self.input.handle_key(code, false).is_some()
    }

    /// Full reset: initial layout, zero score, released controls, no overlay
    pub fn restart(&mut self) {
        self.state.reset();
        self.input.clear();
        self.hud.hide_game_over();
        log::info!("Game restarted");
    }

    /// Stop scheduling frames. Further calls to `frame` do nothing.
    pub fn stop(&mut self) {
        if self.running {
            self.running = false;
            log::info!("Game loop stopped after {} frames", self.frames);
        }
    }

    #[inline]
    pub fn is_running(&self) -> bool {
        self.running
    }

    #[inline]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    #[inline]
    pub fn input(&self) -> &InputState {
        &self.input
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    pub fn hud(&self) -> &H {
        &self.hud
    }

    #[inline]
    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Tear down, handing the collaborators back
    pub fn into_parts(mut self) -> (S, H) {
        self.stop();
        (self.surface, self.hud)
    }
}

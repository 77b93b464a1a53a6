mod game;
mod menu;

pub use game::Game;
pub use menu::Menu;

use crate::error::ViewerError;
use crate::input::InputEvent;
use crate::ui::context::{DrawCmd, UiContext};
use macroquad::prelude::Color;

/// All top-level screens
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScreenId {
    Menu,
    Game,
}

/// Outcome of one loop iteration of the active screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Continue,
    TransitionTo(ScreenId),
    Quit,
}

/// Window properties every screen carries.
#[derive(Debug, Clone)]
pub struct WindowSettings {
    pub size: f32,
    /// Read again every frame; screens may change it while running.
    pub frame_rate: u32,
    pub background: Color,
}

pub trait Screen {
    fn settings(&self) -> &WindowSettings;

    /// Checked before anything else on every step.
    fn ready(&self) -> Result<(), ViewerError> {
        Ok(())
    }

    /// Apply one pointer or key event.
    fn handle_event(&mut self, event: &InputEvent) -> Step;

    /// Record this frame after the background has been cleared.
    fn draw(&mut self, ctx: &mut UiContext) -> Result<(), ViewerError>;

    /// Runs once the frame is on screen, before throttling.
    fn after_present(&mut self) {}

    /// Drains `events`, then draws the frame unless the screen is left.
    fn step(&mut self, ctx: &mut UiContext, events: &[InputEvent]) -> Result<Step, ViewerError> {
        self.ready()?;
        for event in events {
            let step = match event {
                InputEvent::Close => Step::Quit,
                other => self.handle_event(other),
            };
            if step != Step::Continue {
                return Ok(step);
            }
        }

        ctx.push_cmd(DrawCmd::Clear {
            color: self.settings().background,
        });
        self.draw(ctx)?;
        Ok(Step::Continue)
    }
}

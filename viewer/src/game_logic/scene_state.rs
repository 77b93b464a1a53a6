//! Scene state machine: decides which screen runs and hands a fresh
//! simulation to the game screen whenever it is entered.

use crate::error::ViewerError;
use crate::input::InputEvent;
use crate::simulation::Launcher;
use crate::ui::UiContext;
use crate::ui::screens::{Game, Menu, Screen, ScreenId, Step};

pub struct SceneState<L: Launcher> {
    current: ScreenId,
    menu: Menu,
    game: Game<L::Simulation>,
    launcher: L,
}

impl<L: Launcher> SceneState<L> {
    /// Both screens live for the whole run; the menu is shown first.
    pub fn new(menu: Menu, game: Game<L::Simulation>, launcher: L) -> Self {
        SceneState {
            current: ScreenId::Menu,
            menu,
            game,
            launcher,
        }
    }

    #[cfg(test)]
    pub fn current_screen(&self) -> ScreenId {
        self.current
    }

    #[cfg(test)]
    pub fn menu(&self) -> &Menu {
        &self.menu
    }

    #[cfg(test)]
    pub fn game(&self) -> &Game<L::Simulation> {
        &self.game
    }

    fn active(&mut self) -> &mut dyn Screen {
        match self.current {
            ScreenId::Menu => &mut self.menu,
            ScreenId::Game => &mut self.game,
        }
    }

    /// Frame rate of the active screen, read fresh every frame.
    pub fn frame_rate(&self) -> u32 {
        match self.current {
            ScreenId::Menu => self.menu.settings().frame_rate,
            ScreenId::Game => self.game.settings().frame_rate,
        }
    }

    /// Runs one iteration of the active screen and follows any transition it asks for.
    pub fn step(&mut self, ctx: &mut UiContext, events: &[InputEvent]) -> Result<Step, ViewerError> {
        let step = self.active().step(ctx, events)?;
        match step {
            Step::TransitionTo(target) => self.enter(target),
            Step::Quit => tracing::info!(from = ?self.current, "quit requested"),
            Step::Continue => {}
        }
        Ok(step)
    }

    /// Entering the game always launches a new simulation from the menu inputs
    /// before the game screen gets to run.
    pub fn enter(&mut self, target: ScreenId) {
        if target == ScreenId::Game {
            let request = self.menu.launch_request();
            let simulation = self.launcher.launch(&request);
            self.game.attach(simulation, &request);
        }
        tracing::info!(from = ?self.current, to = ?target, "switching screen");
        self.current = target;
    }

    pub fn after_present(&mut self) {
        self.active().after_present();
    }
}

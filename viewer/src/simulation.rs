use ltl_engine::{Board, Engine, Flag, Rules};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::path::Path;

/// What the viewer needs from a running automaton.
pub trait Simulation {
    /// Current generation.
    fn board(&self) -> &Board;

    /// Advance exactly one generation.
    fn update(&mut self);

    fn rules(&self) -> &Rules;

    fn flag(&self, flag: Flag) -> bool;
}

impl Simulation for Engine {
    fn board(&self) -> &Board {
        Engine::board(self)
    }

    fn update(&mut self) {
        Engine::update(self)
    }

    fn rules(&self) -> &Rules {
        Engine::rules(self)
    }

    fn flag(&self, flag: Flag) -> bool {
        Engine::flag(self, flag)
    }
}

/// The menu inputs a simulation is started from.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LaunchRequest {
    pub rules_text: String,
    pub rules_path: String,
    pub board_path: String,
}

/// Where the rules of a launch come from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RulesSource {
    File,
    Text,
}

impl LaunchRequest {
    /// A rules file wins over the typed rule string.
    pub fn rules_source(&self) -> RulesSource {
        if self.rules_path.is_empty() {
            RulesSource::Text
        } else {
            RulesSource::File
        }
    }

    pub fn rules(&self) -> Rules {
        match self.rules_source() {
            RulesSource::File => Rules::from_file(&self.rules_path),
            RulesSource::Text => Rules::parse(&self.rules_text),
        }
    }

    pub fn board_path(&self) -> Option<&Path> {
        (!self.board_path.is_empty()).then(|| Path::new(&self.board_path))
    }
}

/// Builds a fresh simulation whenever the game screen is entered.
pub trait Launcher {
    type Simulation: Simulation;

    fn launch(&mut self, request: &LaunchRequest) -> Self::Simulation;
}

pub struct EngineLauncher {
    board_size: usize,
    rng: StdRng,
}

impl EngineLauncher {
    /// `board_size` is the side of randomly generated boards.
    pub fn new(board_size: usize) -> Self {
        Self {
            board_size,
            rng: StdRng::from_entropy(),
        }
    }
}

impl Launcher for EngineLauncher {
    type Simulation = Engine;

    fn launch(&mut self, request: &LaunchRequest) -> Engine {
        let rules = request.rules();
        tracing::info!(
            source = ?request.rules_source(),
            board = %request.board_path,
            "launching simulation"
        );
        Engine::new(
            rules,
            self.board_size,
            request.board_path(),
            &mut self.rng,
        )
    }
}

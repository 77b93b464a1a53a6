mod update;

use crate::board::Board;
use crate::flag::Flag;
use crate::rules::Rules;
use rand::Rng;
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct EngineFlags {
    pub board_load_incorrect: bool,
}

/// A running Larger than Life simulation.
#[derive(Debug, Clone)]
pub struct Engine {
    rules: Rules,
    board: Board,
    flags: EngineFlags,
}

impl Engine {
    /// Loads the board from `board_path` when given. A missing or unreadable
    /// file falls back to a random `size`×`size` board and raises
    /// [`Flag::BoardFileLoadIncorrect`].
    pub fn new(
        rules: Rules,
        size: usize,
        board_path: Option<&Path>,
        rng: &mut impl Rng,
    ) -> Engine {
        let mut flags = EngineFlags::default();
        let loaded = board_path.and_then(|path| match Board::load(path) {
            Ok(board) => Some(board),
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "falling back to a random board");
                flags.board_load_incorrect = true;
                None
            }
        });
        let board = loaded.unwrap_or_else(|| Board::random(size, rules.cell, rng));

        Engine {
            rules,
            board,
            flags,
        }
    }

    pub fn with_board(rules: Rules, board: Board) -> Engine {
        Engine {
            rules,
            board,
            flags: EngineFlags::default(),
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn rules(&self) -> &Rules {
        &self.rules
    }

    /// Answers both engine and rules flags.
    pub fn flag(&self, flag: Flag) -> bool {
        match flag {
            Flag::BoardFileLoadIncorrect => self.flags.board_load_incorrect,
            other => self.rules.flag(other),
        }
    }
}

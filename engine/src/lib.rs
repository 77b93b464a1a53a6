//! Larger than Life cellular automaton: rules, boards and generation updates.

mod board;
mod flag;
mod life;
mod rules;

pub use board::{Board, BoardError};
pub use flag::Flag;
pub use life::Engine;
pub use rules::{Neighbourhood, Range, RuleFlags, Rules, RulesError};

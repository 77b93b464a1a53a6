/// Metadata raised when the engine had to fall back on a default value or
/// could not load one of the user-supplied files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Flag {
    DefaultCell,
    DefaultRange,
    DefaultSurvival,
    DefaultBirth,
    DefaultNeighbourhood,
    RulesFileLoadIncorrect,
    BoardFileLoadIncorrect,
}

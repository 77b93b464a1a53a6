#[derive(Debug, thiserror::Error)]
pub enum ViewerError {
    #[error("game screen stepped before a simulation was attached")]
    MissingSimulation,
    #[error("board of side {0} cannot be drawn as a single texture")]
    BoardTooLarge(usize),
}

pub mod scene_state;

// re-export at `crate::game_logic::…`
pub use scene_state::SceneState;

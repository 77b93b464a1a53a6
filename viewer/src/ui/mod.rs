pub mod context;
pub mod counter;
pub mod label;
pub mod layout;
pub mod screens;
pub mod style;
pub mod widget;

// Re-export the pieces the driver loop needs:
pub use context::UiContext;
pub use screens::{Game, Menu, Step, WindowSettings};

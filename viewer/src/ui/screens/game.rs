use super::{Screen, ScreenId, Step, WindowSettings};
use crate::error::ViewerError;
use crate::input::InputEvent;
use crate::simulation::{LaunchRequest, Simulation};
use crate::ui::context::{DrawCmd, UiContext};
use crate::ui::counter::Counter;
use crate::ui::label::TextLabel;
use crate::ui::layout::VBox;
use crate::ui::style::Theme;
use crate::ui::widget::{Button, Widget};
use ltl_engine::{Board, Flag};
use macroquad::math::{Rect, vec2};

pub const MIN_FPS: u32 = 1;
pub const MAX_FPS: u32 = 60;

// Board placement relative to the window
const BOARD_LEFT: f32 = 150.0;
const BOARD_TOP: f32 = 70.0;

const DESCRIPTION_LINES: usize = 9;

/// Live view of a running simulation.
pub struct Game<S> {
    settings: WindowSettings,
    theme: Theme,
    return_button: Button,
    counter: Counter,
    preferences: Vec<TextLabel>,
    simulation: Option<S>,
}

impl<S: Simulation> Game<S> {
    pub fn new(settings: WindowSettings, ctx: &UiContext) -> Self {
        let size = settings.size;
        let palette = ctx.theme.palette();
        Game {
            return_button: Button::new(
                "Return",
                vec2(Counter::MARGIN, size - 120.0),
                palette,
                Some(ScreenId::Menu),
                ctx,
            ),
            counter: Counter::new(
                settings.frame_rate,
                "FPS",
                vec2(size - 150.0, Counter::MARGIN),
                palette,
                MIN_FPS,
                MAX_FPS,
                ctx,
            ),
            theme: ctx.theme.clone(),
            preferences: (0..DESCRIPTION_LINES)
                .map(|_| TextLabel::with_metrics("", ctx.metrics, ctx.theme.text_color))
                .collect(),
            simulation: None,
            settings: WindowSettings {
                frame_rate: settings.frame_rate.clamp(MIN_FPS, MAX_FPS),
                ..settings
            },
        }
    }

    /// Replaces the running simulation and rewrites the description labels.
    pub fn attach(&mut self, simulation: S, request: &LaunchRequest) {
        let lines = describe(&simulation, request);
        for (label, (text, flagged)) in self.preferences.iter_mut().zip(lines) {
            label.update_text(text);
            label.update_color(if flagged {
                self.theme.highlight_color
            } else {
                self.theme.text_color
            });
        }
        self.simulation = Some(simulation);
    }

    #[cfg(test)]
    pub fn simulation(&self) -> Option<&S> {
        self.simulation.as_ref()
    }

    #[cfg(test)]
    pub fn preferences(&self) -> &[TextLabel] {
        &self.preferences
    }

    fn draw_preferences(&self, ctx: &mut UiContext) {
        let size = self.settings.size;
        let mut column = VBox::new(TextLabel::MARGIN, TextLabel::PADDING);
        column.begin(Rect::new(0.0, 0.0, size, size));
        for preference in &self.preferences {
            let slot = column.item(vec2(preference.width(), preference.height()));
            preference.draw_at(ctx, slot.point());
        }
        column.end();
    }

    fn board_area(&self) -> Rect {
        let side = self.settings.size - BOARD_LEFT;
        Rect::new(BOARD_LEFT, BOARD_TOP, side, side)
    }
}

/// A failed load shows only the prefix, highlighted.
fn file_line(kind: &str, path: &str, failed: bool) -> (String, bool) {
    if failed {
        (format!("{kind} file: "), true)
    } else {
        (format!("{kind} file: {path}"), false)
    }
}

/// Description lines with whether each one is flagged.
fn describe<S: Simulation>(
    simulation: &S,
    request: &LaunchRequest,
) -> [(String, bool); DESCRIPTION_LINES] {
    let rules = simulation.rules();
    [
        file_line(
            "Rules",
            &request.rules_path,
            simulation.flag(Flag::RulesFileLoadIncorrect),
        ),
        file_line(
            "Board",
            &request.board_path,
            simulation.flag(Flag::BoardFileLoadIncorrect),
        ),
        (String::new(), false),
        ("Rules".to_string(), false),
        (format!("C: {}", rules.cell), simulation.flag(Flag::DefaultCell)),
        (format!("R: {}", rules.range), simulation.flag(Flag::DefaultRange)),
        (
            format!("S: {}", rules.survival),
            simulation.flag(Flag::DefaultSurvival),
        ),
        (format!("B: {}", rules.birth), simulation.flag(Flag::DefaultBirth)),
        (
            format!("N: {}", rules.neighbourhood),
            simulation.flag(Flag::DefaultNeighbourhood),
        ),
    ]
}

/// Grayscale pixels, brightest for the highest state on the board.
pub fn board_pixels(board: &Board) -> Vec<u8> {
    let size = board.size();
    let max = board.max_state() as u32;
    let mut pixels = vec![0u8; size * size];
    if max == 0 {
        return pixels;
    }
    for (x, column) in board.rows().iter().enumerate() {
        for (y, &state) in column.iter().enumerate() {
            pixels[y * size + x] = (255 * state as u32 / max) as u8;
        }
    }
    pixels
}

impl<S: Simulation> Screen for Game<S> {
    fn settings(&self) -> &WindowSettings {
        &self.settings
    }

    fn ready(&self) -> Result<(), ViewerError> {
        match self.simulation {
            Some(_) => Ok(()),
            None => Err(ViewerError::MissingSimulation),
        }
    }

    fn handle_event(&mut self, event: &InputEvent) -> Step {
        match *event {
            InputEvent::PointerPress(point) => {
                let next = self.return_button.click(point);
                self.settings.frame_rate = self.counter.set_status(point);
                match next {
                    Some(target) => Step::TransitionTo(target),
                    None => Step::Continue,
                }
            }
            InputEvent::Key(_) => Step::Continue,
            InputEvent::Close => Step::Quit,
        }
    }

    fn draw(&mut self, ctx: &mut UiContext) -> Result<(), ViewerError> {
        let simulation = self
            .simulation
            .as_ref()
            .ok_or(ViewerError::MissingSimulation)?;
        let board = simulation.board();
        let side =
            u16::try_from(board.size()).map_err(|_| ViewerError::BoardTooLarge(board.size()))?;
        let pixels = board_pixels(board);

        self.draw_preferences(ctx);
        self.return_button.draw(ctx);
        self.counter.draw(ctx);
        ctx.push_cmd(DrawCmd::Bitmap {
            pixels,
            width: side,
            height: side,
            dest: self.board_area(),
        });
        Ok(())
    }

    fn after_present(&mut self) {
        if let Some(simulation) = self.simulation.as_mut() {
            simulation.update();
        }
    }
}

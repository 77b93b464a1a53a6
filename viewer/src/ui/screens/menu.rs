use super::{Screen, ScreenId, Step, WindowSettings};
use crate::error::ViewerError;
use crate::input::InputEvent;
use crate::simulation::LaunchRequest;
use crate::ui::context::UiContext;
use crate::ui::label::TextLabel;
use crate::ui::widget::{Button, InputTextBox, Widget, focus_exclusive};
use macroquad::math::{Vec2, vec2};

const RULES: usize = 0;
const RULES_PATH: usize = 1;
const BOARD_PATH: usize = 2;

const TITLE_FONT_SIZE: u16 = 48;

/// Configuration screen: rule string, rules file and board file.
pub struct Menu {
    settings: WindowSettings,
    title: TextLabel,
    text_boxes: [InputTextBox; 3],
    start_button: Button,
}

impl Menu {
    pub fn new(settings: WindowSettings, ctx: &UiContext) -> Self {
        let size = settings.size;
        let palette = ctx.theme.palette();
        let text_box = |description: &str, twelfths: f32| {
            InputTextBox::new(description, vec2(size / 2.0, size * twelfths / 12.0), palette, ctx)
                .with_min_width(size / 3.0)
        };

        Menu {
            title: TextLabel::new("Larger than Life", ctx)
                .colored(ctx.theme.active)
                .font_size(TITLE_FONT_SIZE)
                .at(vec2(size / 4.0, size * 2.0 / 12.0)),
            text_boxes: [
                text_box("Enter rules  ", 5.0),
                text_box("Enter rules file path (JSON)  ", 6.0),
                text_box("Enter board file path (CSV)  ", 7.0),
            ],
            start_button: Button::new(
                "Start game",
                vec2(size / 2.0 - 50.0, size * 3.0 / 4.0 - 25.0),
                palette,
                Some(ScreenId::Game),
                ctx,
            ),
            settings,
        }
    }

    pub fn rules_text(&self) -> &str {
        self.text_boxes[RULES].text()
    }

    pub fn rules_path(&self) -> &str {
        self.text_boxes[RULES_PATH].text()
    }

    pub fn board_path(&self) -> &str {
        self.text_boxes[BOARD_PATH].text()
    }

    pub fn launch_request(&self) -> LaunchRequest {
        LaunchRequest {
            rules_text: self.rules_text().to_string(),
            rules_path: self.rules_path().to_string(),
            board_path: self.board_path().to_string(),
        }
    }

    fn press(&mut self, point: Vec2) -> Step {
        focus_exclusive(&mut self.text_boxes, point);
        match self.start_button.click(point) {
            Some(target) => {
                // leave the button passive for when the menu is shown again
                self.start_button.set_active(false);
                Step::TransitionTo(target)
            }
            None => Step::Continue,
        }
    }
}

impl Screen for Menu {
    fn settings(&self) -> &WindowSettings {
        &self.settings
    }

    fn handle_event(&mut self, event: &InputEvent) -> Step {
        match *event {
            InputEvent::PointerPress(point) => self.press(point),
            InputEvent::Key(key) => {
                if let Some(text_box) = self.text_boxes.iter_mut().find(|b| b.is_active()) {
                    tracing::debug!(?key, field = text_box.description().trim(), "key routed");
                    text_box.consume_key(key);
                }
                Step::Continue
            }
            InputEvent::Close => Step::Quit,
        }
    }

    fn draw(&mut self, ctx: &mut UiContext) -> Result<(), ViewerError> {
        self.title.draw(ctx);
        for text_box in &mut self.text_boxes {
            text_box.draw(ctx);
        }
        self.start_button.draw(ctx);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::tests::typed as record_typed;
    use crate::input::{EventLog, KeyInput};
    use crate::ui::context::{DrawCmd, TextMetrics};
    use macroquad::miniquad::{EventHandler, MouseButton};
    use macroquad::prelude::BLACK;

    fn menu() -> (Menu, UiContext) {
        let ctx = UiContext::with_metrics(TextMetrics::FixedAdvance);
        let settings = WindowSettings {
            size: 600.0,
            frame_rate: 30,
            background: BLACK,
        };
        (Menu::new(settings, &ctx), ctx)
    }

    fn typed(text: &str) -> Vec<InputEvent> {
        text.chars()
            .map(|c| InputEvent::Key(KeyInput::Char(c)))
            .collect()
    }

    // anchors at y = 250, 300, 350; the start button is anchored at (250, 425)
    const RULES_BOX: Vec2 = Vec2::new(310.0, 255.0);
    const RULES_PATH_BOX: Vec2 = Vec2::new(310.0, 305.0);
    const START: Vec2 = Vec2::new(260.0, 430.0);

    #[test]
    fn test_keys_go_to_focused_box_only() {
        let (mut menu, mut ctx) = menu();
        let mut events = vec![InputEvent::PointerPress(RULES_BOX)];
        events.extend(typed("C:2"));
        events.push(InputEvent::PointerPress(RULES_PATH_BOX));
        events.extend(typed("life.json"));
        events.push(InputEvent::Key(KeyInput::Erase));

        assert_eq!(menu.step(&mut ctx, &events).unwrap(), Step::Continue);
        assert_eq!(menu.rules_text(), "C:2");
        assert_eq!(menu.rules_path(), "life.jso");
        assert_eq!(menu.board_path(), "");
        assert_eq!(
            menu.text_boxes.iter().filter(|b| b.is_active()).count(),
            1
        );
    }

    #[test]
    fn test_one_frame_of_recorded_input_applies_in_order() {
        let (mut menu, mut ctx) = menu();
        let mut log = EventLog::default();
        log.mouse_button_down_event(MouseButton::Left, RULES_BOX.x, RULES_BOX.y);
        record_typed(&mut log, "abc\u{8}\u{8}");
        log.mouse_button_down_event(MouseButton::Left, RULES_PATH_BOX.x, RULES_PATH_BOX.y);
        record_typed(&mut log, "x");

        menu.step(&mut ctx, &log.into_events()).unwrap();
        assert_eq!(menu.rules_text(), "a");
        assert_eq!(menu.rules_path(), "x");
        assert!(menu.text_boxes[RULES_PATH].is_active());
    }

    #[test]
    fn test_text_box_floor_scales_with_window() {
        let ctx = UiContext::with_metrics(TextMetrics::FixedAdvance);
        let settings = WindowSettings {
            size: 900.0,
            frame_rate: 30,
            background: BLACK,
        };
        let menu = Menu::new(settings, &ctx);
        assert!(menu.text_boxes.iter().all(|b| b.rect().w == 300.0));
    }

    #[test]
    fn test_keys_without_focus_are_dropped() {
        let (mut menu, mut ctx) = menu();
        menu.step(&mut ctx, &typed("lost")).unwrap();
        assert_eq!(menu.launch_request(), LaunchRequest::default());
    }

    #[test]
    fn test_press_outside_deactivates_everything() {
        let (mut menu, mut ctx) = menu();
        menu.step(&mut ctx, &[InputEvent::PointerPress(RULES_BOX)]).unwrap();
        assert!(menu.text_boxes[RULES].is_active());

        let step = menu
            .step(&mut ctx, &[InputEvent::PointerPress(vec2(5.0, 590.0))])
            .unwrap();
        assert_eq!(step, Step::Continue);
        assert!(menu.text_boxes.iter().all(|b| !b.is_active()));
        assert!(!menu.start_button.is_active());
    }

    #[test]
    fn test_start_button_transitions_without_drawing() {
        let (mut menu, mut ctx) = menu();
        let events = [
            InputEvent::PointerPress(START),
            InputEvent::PointerPress(RULES_BOX),
        ];
        assert_eq!(
            menu.step(&mut ctx, &events).unwrap(),
            Step::TransitionTo(ScreenId::Game)
        );
        assert!(ctx.commands().is_empty());
        assert!(!menu.start_button.is_active());
        assert!(!menu.text_boxes[RULES].is_active(), "later events are not applied");
    }

    #[test]
    fn test_close_quits() {
        let (mut menu, mut ctx) = menu();
        let events = [InputEvent::Close, InputEvent::PointerPress(START)];
        assert_eq!(menu.step(&mut ctx, &events).unwrap(), Step::Quit);
    }

    #[test]
    fn test_draw_order_background_labels_widgets() {
        let (mut menu, mut ctx) = menu();
        menu.step(&mut ctx, &[]).unwrap();

        let commands = ctx.commands();
        assert!(matches!(commands[0], DrawCmd::Clear { .. }));
        assert!(matches!(&commands[1], DrawCmd::Text { text, font_size: 48, .. } if text == "Larger than Life"));
        assert!(matches!(commands.last(), Some(DrawCmd::Text { text, .. }) if text == "Start game"));
        assert!(matches!(commands[commands.len() - 2], DrawCmd::RoundedRect { .. }));
    }
}

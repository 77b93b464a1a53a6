use crate::ui::context::UiContext;
use crate::ui::label::TextLabel;
use crate::ui::style::Palette;
use crate::ui::widget::{Button, PADDING, Widget};
use macroquad::math::{Vec2, vec2};

const VALUE_OFFSET: f32 = 25.0;
const PLUS_OFFSET: f32 = 100.0;

/// A bounded integer with "-" and "+" buttons around its value label.
#[derive(Debug, Clone)]
pub struct Counter {
    value: u32,
    minimum: u32,
    maximum: u32,
    unit: String,
    minus_button: Button,
    plus_button: Button,
    value_label: TextLabel,
}

impl Counter {
    pub const MARGIN: f32 = 15.0;

    /// `value` is clamped into `minimum..=maximum`.
    pub fn new<T: Into<String>>(
        value: u32,
        unit: T,
        anchor: Vec2,
        palette: Palette,
        minimum: u32,
        maximum: u32,
        ctx: &UiContext,
    ) -> Self {
        let value = value.clamp(minimum, maximum);
        let unit = unit.into();
        let value_label = TextLabel::new(format!("{} {}", value, unit), ctx)
            .at(vec2(anchor.x + VALUE_OFFSET, anchor.y));

        let minus_button = Button::new("-", anchor, palette, None, ctx);
        let plus_button = Button::new("+", vec2(anchor.x + PLUS_OFFSET, anchor.y), palette, None, ctx);
        // both buttons take the size of the wider glyph
        let width = minus_button.rect().w.max(plus_button.rect().w) - 2.0 * PADDING;

        Counter {
            value,
            minimum,
            maximum,
            unit,
            minus_button: minus_button.with_width(width),
            plus_button: plus_button.with_width(width),
            value_label,
        }
    }

    /// Applies a pointer press and returns the resulting value.
    pub fn set_status(&mut self, point: Vec2) -> u32 {
        if self.minus_button.hit_test(point) {
            self.decrement();
        } else if self.plus_button.hit_test(point) {
            self.increment();
        }
        self.value
    }

    /// Returns whether the value changed; a no-op at the maximum.
    pub fn increment(&mut self) -> bool {
        if self.value >= self.maximum {
            return false;
        }
        self.value += 1;
        self.relabel();
        true
    }

    /// Returns whether the value changed; a no-op at the minimum.
    pub fn decrement(&mut self) -> bool {
        if self.value <= self.minimum {
            return false;
        }
        self.value -= 1;
        self.relabel();
        true
    }

    #[cfg(test)]
    pub fn value(&self) -> u32 {
        self.value
    }

    #[cfg(test)]
    pub fn label_text(&self) -> &str {
        self.value_label.text()
    }

    pub fn draw(&mut self, ctx: &mut UiContext) {
        self.minus_button.draw(ctx);
        self.value_label.draw(ctx);
        self.plus_button.draw(ctx);
    }

    fn relabel(&mut self) {
        tracing::debug!(value = self.value, unit = %self.unit, "counter changed");
        self.value_label
            .update_text(format!("{} {}", self.value, self.unit));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::context::{DrawCmd, TextMetrics};
    use macroquad::math::Rect;

    fn fps_counter(value: u32) -> Counter {
        let ctx = UiContext::with_metrics(TextMetrics::FixedAdvance);
        Counter::new(value, "FPS", vec2(450.0, 15.0), ctx.theme.palette(), 1, 60, &ctx)
    }

    // "-" spans x 445..470, "+" spans x 545..570, both y 10..50
    const MINUS: Vec2 = Vec2::new(450.0, 20.0);
    const PLUS: Vec2 = Vec2::new(550.0, 20.0);

    #[test]
    fn test_minus_at_minimum_is_noop() {
        let mut counter = fps_counter(1);
        assert_eq!(counter.set_status(MINUS), 1);
        assert_eq!(counter.label_text(), "1 FPS");

        assert_eq!(counter.set_status(PLUS), 2);
        assert_eq!(counter.label_text(), "2 FPS");
    }

    #[test]
    fn test_plus_at_maximum_is_noop() {
        let mut counter = fps_counter(60);
        assert!(!counter.increment());
        assert_eq!(counter.set_status(PLUS), 60);
        assert_eq!(counter.label_text(), "60 FPS");

        assert!(counter.decrement());
        assert_eq!(counter.label_text(), "59 FPS");
    }

    #[test]
    fn test_press_elsewhere_keeps_value() {
        let mut counter = fps_counter(30);
        assert_eq!(counter.set_status(vec2(500.0, 20.0)), 30);
        assert_eq!(counter.set_status(vec2(0.0, 0.0)), 30);
        assert_eq!(counter.label_text(), "30 FPS");
    }

    #[test]
    fn test_initial_value_is_clamped() {
        assert_eq!(fps_counter(0).value(), 1);
        assert_eq!(fps_counter(99).label_text(), "60 FPS");
    }

    #[test]
    fn test_buttons_share_a_size() {
        let counter = fps_counter(1);
        assert_eq!(counter.minus_button.rect().size(), counter.plus_button.rect().size());
        assert_eq!(counter.minus_button.rect(), Rect::new(445.0, 10.0, 25.0, 40.0));
    }

    #[test]
    fn test_draw_order() {
        let mut ctx = UiContext::with_metrics(TextMetrics::FixedAdvance);
        let mut counter = fps_counter(5);
        counter.draw(&mut ctx);

        let commands = ctx.commands();
        assert_eq!(commands.len(), 5);
        assert!(matches!(&commands[1], DrawCmd::Text { text, .. } if text == "-"));
        assert!(matches!(&commands[2], DrawCmd::Text { text, .. } if text == "5 FPS"));
        assert!(matches!(&commands[4], DrawCmd::Text { text, .. } if text == "+"));
    }
}

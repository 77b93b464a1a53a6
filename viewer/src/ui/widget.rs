use crate::input::KeyInput;
use crate::ui::context::{DrawCmd, UiContext};
use crate::ui::label::TextLabel;
use crate::ui::screens::ScreenId;
use crate::ui::style::Palette;
use macroquad::math::{Rect, Vec2, vec2};
use macroquad::prelude::Color;

pub const PADDING: f32 = 5.0;
pub const BORDER_RADIUS: f32 = 5.0;
pub const BORDER_WIDTH: f32 = 5.0;

/// Trait every clickable UI widget implements.
pub trait Widget {
    /// Whether `point` falls inside the widget's current bounds.
    fn hit_test(&self, point: Vec2) -> bool;

    fn set_active(&mut self, active: bool);

    fn is_active(&self) -> bool;

    /// Record the widget's draw commands for this frame.
    fn draw(&mut self, ctx: &mut UiContext);

    /// Pointer press: the widget becomes active exactly when hit.
    fn press(&mut self, point: Vec2) -> bool {
        let hit = self.hit_test(point);
        self.set_active(hit);
        hit
    }
}

/// State shared by every widget: the label, its anchor and the color state.
#[derive(Debug, Clone)]
pub struct WidgetBase {
    label: TextLabel,
    anchor: Vec2,
    palette: Palette,
    rect: Rect,
    active: bool,
}

/// Bounds around a label anchored at `anchor`. Height always follows the text.
pub fn widget_rect(anchor: Vec2, content_width: f32, text_height: f32) -> Rect {
    Rect::new(
        anchor.x - PADDING,
        anchor.y - PADDING,
        content_width + PADDING * 2.0,
        text_height + PADDING * 2.0,
    )
}

impl WidgetBase {
    /// Without `width` the box hugs the label text.
    pub fn new(label: TextLabel, anchor: Vec2, palette: Palette, width: Option<f32>) -> Self {
        let rect = widget_rect(
            anchor,
            width.unwrap_or_else(|| label.width()),
            label.height(),
        );
        WidgetBase {
            label,
            anchor,
            palette,
            rect,
            active: false,
        }
    }

    pub fn current_color(&self) -> Color {
        if self.active {
            self.palette.active
        } else {
            self.palette.passive
        }
    }

    pub fn rect(&self) -> Rect {
        self.rect
    }

    fn contains(&self, point: Vec2) -> bool {
        self.rect.contains(point)
    }
}

/// A clickable button that names the screen it leads to.
#[derive(Debug, Clone)]
pub struct Button {
    base: WidgetBase,
    target: Option<ScreenId>,
}

impl Button {
    pub fn new<T: Into<String>>(
        text: T,
        anchor: Vec2,
        palette: Palette,
        target: Option<ScreenId>,
        ctx: &UiContext,
    ) -> Self {
        let base = WidgetBase::new(TextLabel::new(text, ctx), anchor, palette, None);
        Button { base, target }
    }

    /// Widen the button to `width` (plus padding) regardless of its text.
    pub fn with_width(mut self, width: f32) -> Self {
        self.base.rect = widget_rect(self.base.anchor, width, self.base.label.height());
        self
    }

    /// Returns the target screen exactly when `point` hits the button.
    pub fn click(&mut self, point: Vec2) -> Option<ScreenId> {
        if self.press(point) { self.target } else { None }
    }

    pub fn rect(&self) -> Rect {
        self.base.rect()
    }

    #[cfg(test)]
    pub fn color(&self) -> Color {
        self.base.current_color()
    }
}

impl Widget for Button {
    fn hit_test(&self, point: Vec2) -> bool {
        self.base.contains(point)
    }

    fn set_active(&mut self, active: bool) {
        self.base.active = active;
    }

    fn is_active(&self) -> bool {
        self.base.active
    }

    fn draw(&mut self, ctx: &mut UiContext) {
        ctx.push_cmd(DrawCmd::RoundedRect {
            rect: self.base.rect,
            radius: BORDER_RADIUS,
            color: self.base.current_color(),
        });
        self.base.label.draw_at(ctx, self.base.anchor);
    }
}

/// Single line text entry with a prompt drawn to its left.
#[derive(Debug, Clone)]
pub struct InputTextBox {
    base: WidgetBase,
    buffer: String,
    description: TextLabel,
    min_width: f32,
}

impl InputTextBox {
    pub const DEFAULT_MIN_WIDTH: f32 = 200.0;

    pub fn new<T: Into<String>>(
        description: T,
        anchor: Vec2,
        palette: Palette,
        ctx: &UiContext,
    ) -> Self {
        let base = WidgetBase::new(
            TextLabel::new("", ctx),
            anchor,
            palette,
            Some(Self::DEFAULT_MIN_WIDTH),
        );
        let mut text_box = InputTextBox {
            base,
            buffer: String::new(),
            description: TextLabel::new(description, ctx),
            min_width: Self::DEFAULT_MIN_WIDTH,
        };
        text_box.fit_text();
        text_box
    }

    pub fn with_min_width(mut self, min_width: f32) -> Self {
        self.min_width = min_width;
        self.fit_text();
        self
    }

    pub fn text(&self) -> &str {
        &self.buffer
    }

    pub fn description(&self) -> &str {
        self.description.text()
    }

    pub fn consume_key(&mut self, key: KeyInput) {
        match key {
            KeyInput::Erase => {
                self.buffer.pop();
            }
            KeyInput::Char(c) => self.buffer.push(c),
        }
    }

    #[cfg(test)]
    pub fn rect(&self) -> Rect {
        self.base.rect()
    }

    #[cfg(test)]
    pub fn color(&self) -> Color {
        self.base.current_color()
    }

    /// Re-measure the buffer and widen the box so it never clips the text.
    fn fit_text(&mut self) {
        self.base.label.update_text(self.buffer.as_str());
        self.base.rect.w = (self.base.label.width() + PADDING).max(self.min_width);
    }
}

impl Widget for InputTextBox {
    fn hit_test(&self, point: Vec2) -> bool {
        self.base.contains(point)
    }

    fn set_active(&mut self, active: bool) {
        self.base.active = active;
    }

    fn is_active(&self) -> bool {
        self.base.active
    }

    fn draw(&mut self, ctx: &mut UiContext) {
        let anchor = self.base.anchor;
        self.description
            .draw_at(ctx, vec2(anchor.x - self.description.width(), anchor.y));

        self.fit_text();
        let rect = self.base.rect;
        ctx.push_cmd(DrawCmd::RectLines {
            rect,
            thickness: BORDER_WIDTH,
            color: self.base.current_color(),
        });
        self.base
            .label
            .draw_at(ctx, vec2(rect.x + PADDING, rect.y + PADDING));
    }
}

/// Routes a pointer press to `widgets` so that at most one ends up active:
/// the first one hit, in order. Returns its index.
pub fn focus_exclusive<W: Widget>(widgets: &mut [W], point: Vec2) -> Option<usize> {
    let mut focused = None;
    for (index, widget) in widgets.iter_mut().enumerate() {
        let hit = focused.is_none() && widget.hit_test(point);
        widget.set_active(hit);
        if hit {
            focused = Some(index);
        }
    }
    focused
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::context::TextMetrics;

    fn ctx() -> UiContext {
        UiContext::with_metrics(TextMetrics::FixedAdvance)
    }

    fn type_text(text_box: &mut InputTextBox, text: &str) {
        for c in text.chars() {
            text_box.consume_key(KeyInput::Char(c));
        }
    }

    #[test]
    fn test_widget_rect_pads_both_sides() {
        let ctx = ctx();
        // "Start game" is 10 glyphs of 15px
        let button = Button::new("Start game", vec2(100.0, 200.0), ctx.theme.palette(), None, &ctx);
        assert_eq!(button.rect(), Rect::new(95.0, 195.0, 160.0, 40.0));

        let wide = button.with_width(300.0);
        assert_eq!(wide.rect(), Rect::new(95.0, 195.0, 310.0, 40.0));
    }

    #[test]
    fn test_button_click_returns_target_only_inside() {
        let ctx = ctx();
        let mut button = Button::new(
            "Return",
            vec2(15.0, 480.0),
            ctx.theme.palette(),
            Some(ScreenId::Menu),
            &ctx,
        );
        let rect = button.rect();

        let inside = [
            rect.point(),
            vec2(rect.x + rect.w / 2.0, rect.y + rect.h / 2.0),
            vec2(rect.right() - 0.5, rect.bottom() - 0.5),
        ];
        for point in inside {
            assert_eq!(button.click(point), Some(ScreenId::Menu), "{point}");
            assert!(button.is_active());
        }

        let outside = [
            vec2(rect.x - 1.0, rect.y),
            vec2(rect.right() + 1.0, rect.y + 1.0),
            vec2(rect.x + 1.0, rect.bottom() + 1.0),
            vec2(-1.0, -1.0),
        ];
        for point in outside {
            assert_eq!(button.click(point), None, "{point}");
            assert!(!button.is_active());
        }
    }

    #[test]
    fn test_button_without_target_still_flashes() {
        let ctx = ctx();
        let palette = ctx.theme.palette();
        let mut button = Button::new("-", vec2(0.0, 0.0), palette, None, &ctx);
        assert_eq!(button.click(vec2(1.0, 1.0)), None);
        assert!(button.is_active());
        assert_eq!(button.color(), palette.active);
    }

    #[test]
    fn test_erase_on_empty_buffer() {
        let ctx = ctx();
        let mut text_box = InputTextBox::new("Enter rules  ", vec2(300.0, 250.0), ctx.theme.palette(), &ctx);
        text_box.consume_key(KeyInput::Erase);
        assert_eq!(text_box.text(), "");

        type_text(&mut text_box, "C:2");
        text_box.consume_key(KeyInput::Erase);
        assert_eq!(text_box.text(), "C:");
    }

    #[test]
    fn test_text_box_grows_past_min_width() {
        let mut ctx = ctx();
        let mut text_box = InputTextBox::new("Enter rules  ", vec2(300.0, 250.0), ctx.theme.palette(), &ctx)
            .with_min_width(100.0);

        type_text(&mut text_box, "hi");
        text_box.draw(&mut ctx);
        assert_eq!(text_box.rect().w, 100.0);

        // 10 glyphs are 150px wide, past the 100px floor
        type_text(&mut text_box, "abcdefgh");
        text_box.draw(&mut ctx);
        assert_eq!(text_box.rect().w, 150.0 + PADDING);

        for _ in 0..10 {
            text_box.consume_key(KeyInput::Erase);
        }
        text_box.draw(&mut ctx);
        assert_eq!(text_box.rect().w, 100.0);
    }

    #[test]
    fn test_draw_is_idempotent() {
        let mut ctx = ctx();
        let mut text_box = InputTextBox::new("Enter rules  ", vec2(300.0, 250.0), ctx.theme.palette(), &ctx);
        type_text(&mut text_box, "C:3;R:2");
        text_box.press(vec2(305.0, 255.0));

        text_box.draw(&mut ctx);
        let (rect, color) = (text_box.rect(), text_box.color());
        let first = ctx.commands().to_vec();

        ctx.begin_frame();
        text_box.draw(&mut ctx);
        assert_eq!(text_box.rect(), rect);
        assert_eq!(text_box.color(), color);
        assert_eq!(ctx.commands(), first.as_slice());
    }

    #[test]
    fn test_text_box_draw_order_and_focus_color() {
        let mut ctx = ctx();
        let palette = ctx.theme.palette();
        let mut text_box = InputTextBox::new("Rules ", vec2(300.0, 250.0), palette, &ctx);
        text_box.press(vec2(301.0, 251.0));
        text_box.draw(&mut ctx);

        let commands = ctx.commands();
        assert_eq!(commands.len(), 3);
        match &commands[0] {
            DrawCmd::Text { text, pos, .. } => {
                assert_eq!(text, "Rules ");
                // right-aligned against the box anchor
                assert_eq!(pos.x, 300.0 - 90.0);
            }
            other => panic!("expected description, got {:?}", other),
        }
        assert!(matches!(commands[1], DrawCmd::RectLines { color, .. } if color == palette.active));
        assert!(matches!(&commands[2], DrawCmd::Text { text, .. } if text.is_empty()));
    }

    #[test]
    fn test_focus_exclusive_overlapping_boxes() {
        let ctx = ctx();
        let palette = ctx.theme.palette();
        let mut boxes = [
            InputTextBox::new("a", vec2(100.0, 100.0), palette, &ctx),
            InputTextBox::new("b", vec2(120.0, 110.0), palette, &ctx),
            InputTextBox::new("c", vec2(100.0, 300.0), palette, &ctx),
        ];

        // inside both of the first two
        assert_eq!(focus_exclusive(&mut boxes, vec2(130.0, 115.0)), Some(0));
        assert_eq!(boxes.iter().filter(|b| b.is_active()).count(), 1);

        assert_eq!(focus_exclusive(&mut boxes, vec2(110.0, 305.0)), Some(2));
        assert!(!boxes[0].is_active());
        assert!(boxes[2].is_active());

        assert_eq!(focus_exclusive(&mut boxes, vec2(599.0, 599.0)), None);
        assert!(boxes.iter().all(|b| !b.is_active()));
    }
}

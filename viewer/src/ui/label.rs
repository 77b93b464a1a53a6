use crate::ui::context::{DrawCmd, TextMetrics, TextSize, UiContext};
use macroquad::math::{Vec2, vec2};
use macroquad::prelude::Color;

/// A line of text with a cached measured size.
#[derive(Debug, Clone)]
pub struct TextLabel {
    text: String,
    color: Color,
    font_size: u16,
    position: Option<Vec2>,
    metrics: TextMetrics,
    size: TextSize,
}

impl TextLabel {
    pub const FONT_SIZE: u16 = 30;
    pub const MARGIN: f32 = 15.0;
    pub const PADDING: f32 = 5.0;

    pub fn new<T: Into<String>>(text: T, ctx: &UiContext) -> Self {
        Self::with_metrics(text, ctx.metrics, ctx.theme.text_color)
    }

    pub fn with_metrics<T: Into<String>>(text: T, metrics: TextMetrics, color: Color) -> Self {
        let text = text.into();
        let size = metrics.measure(&text, Self::FONT_SIZE);
        TextLabel {
            text,
            color,
            font_size: Self::FONT_SIZE,
            position: None,
            metrics,
            size,
        }
    }

    pub fn at(mut self, position: Vec2) -> Self {
        self.position = Some(position);
        self
    }

    pub fn font_size(mut self, font_size: u16) -> Self {
        self.font_size = font_size;
        self.size = self.metrics.measure(&self.text, font_size);
        self
    }

    pub fn colored(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    /// Draws at the position given to [`TextLabel::at`].
    ///
    /// Panics when the label was built without one.
    pub fn draw(&self, ctx: &mut UiContext) {
        let position = self
            .position
            .expect("TextLabel::draw needs a default position, use draw_at instead");
        self.draw_at(ctx, position);
    }

    /// Draws with the top-left corner of the line at `position`.
    pub fn draw_at(&self, ctx: &mut UiContext, position: Vec2) {
        ctx.push_cmd(DrawCmd::Text {
            text: self.text.clone(),
            pos: vec2(position.x, position.y + self.size.baseline),
            font_size: self.font_size,
            color: self.color,
        });
    }

    pub fn update_text<T: Into<String>>(&mut self, text: T) {
        self.text = text.into();
        self.size = self.metrics.measure(&self.text, self.font_size);
    }

    pub fn update_color(&mut self, color: Color) {
        self.color = color;
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    #[cfg(test)]
    pub fn color(&self) -> Color {
        self.color
    }

    pub fn width(&self) -> f32 {
        self.size.width
    }

    pub fn height(&self) -> f32 {
        self.size.height
    }
}

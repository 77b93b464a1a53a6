use crate::ui::style::Theme;
use macroquad::prelude::*;

/// A drawing command recorded by the UI.  When executed, issues the actual draw calls.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCmd {
    Clear {
        color: Color,
    },
    RoundedRect {
        rect: Rect,
        radius: f32,
        color: Color,
    },
    RectLines {
        rect: Rect,
        thickness: f32,
        color: Color,
    },
    Text {
        text: String,
        /// Baseline origin, as macroquad expects it.
        pos: Vec2,
        font_size: u16,
        color: Color,
    },
    /// Grayscale pixels, row-major, scaled to `dest`.
    Bitmap {
        pixels: Vec<u8>,
        width: u16,
        height: u16,
        dest: Rect,
    },
}

impl DrawCmd {
    /// Execute this draw command immediately using macroquad
    pub fn execute(&self) {
        match self {
            DrawCmd::Clear { color } => clear_background(*color),
            DrawCmd::RoundedRect {
                rect,
                radius,
                color,
            } => {
                let r = radius.min(rect.w / 2.0).min(rect.h / 2.0);
                draw_rectangle(rect.x + r, rect.y, rect.w - 2.0 * r, rect.h, *color);
                draw_rectangle(rect.x, rect.y + r, rect.w, rect.h - 2.0 * r, *color);
                for (cx, cy) in [
                    (rect.x + r, rect.y + r),
                    (rect.right() - r, rect.y + r),
                    (rect.x + r, rect.bottom() - r),
                    (rect.right() - r, rect.bottom() - r),
                ] {
                    draw_circle(cx, cy, r, *color);
                }
            }
            DrawCmd::RectLines {
                rect,
                thickness,
                color,
            } => {
                draw_rectangle_lines(rect.x, rect.y, rect.w, rect.h, *thickness, *color);
            }
            DrawCmd::Text {
                text,
                pos,
                font_size,
                color,
            } => {
                draw_text(text, pos.x, pos.y, *font_size as f32, *color);
            }
            DrawCmd::Bitmap {
                pixels,
                width,
                height,
                dest,
            } => {
                let image = Image {
                    bytes: pixels.iter().flat_map(|&v| [v, v, v, 255]).collect(),
                    width: *width,
                    height: *height,
                };
                let texture = Texture2D::from_image(&image);
                texture.set_filter(FilterMode::Nearest);
                draw_texture_ex(
                    &texture,
                    dest.x,
                    dest.y,
                    WHITE,
                    DrawTextureParams {
                        dest_size: Some(vec2(dest.w, dest.h)),
                        ..Default::default()
                    },
                );
            }
        }
    }
}

/// Measured extent of a line of text.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextSize {
    pub width: f32,
    /// Line height; the same for every string at a given font size.
    pub height: f32,
    /// Distance from the top of the line to the baseline.
    pub baseline: f32,
}

/// How text is measured for layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextMetrics {
    /// macroquad's built-in font. Needs a live window.
    Builtin,
    /// Every glyph advances half the font size. Works without a window.
    FixedAdvance,
}

impl TextMetrics {
    pub fn measure(self, text: &str, font_size: u16) -> TextSize {
        let size = font_size as f32;
        let width = match self {
            TextMetrics::Builtin => measure_text(text, None, font_size, 1.0).width,
            TextMetrics::FixedAdvance => text.chars().count() as f32 * size * 0.5,
        };
        TextSize {
            width,
            height: size,
            baseline: size * 0.75,
        }
    }
}

/// The UI context collects the frame's draw commands and carries the theme
/// and text metrics every widget is built with.
pub struct UiContext {
    pub theme: Theme,
    pub metrics: TextMetrics,
    draw_commands: Vec<DrawCmd>,
}

impl UiContext {
    /// Context backed by macroquad's font; create once the window exists.
    pub fn new() -> Self {
        Self::with_metrics(TextMetrics::Builtin)
    }

    pub fn with_metrics(metrics: TextMetrics) -> Self {
        Self {
            theme: Theme::default(),
            metrics,
            draw_commands: Vec::new(),
        }
    }

    /// Begin a new frame: clear pending draw commands
    pub fn begin_frame(&mut self) {
        self.draw_commands.clear();
    }

    /// Record a drawing command (rectangle, text, etc.)
    pub fn push_cmd(&mut self, cmd: DrawCmd) {
        self.draw_commands.push(cmd);
    }

    pub fn commands(&self) -> &[DrawCmd] {
        &self.draw_commands
    }

    /// Flush all recorded draw commands to the screen
    pub fn end_frame(&mut self) {
        for cmd in &self.draw_commands {
            cmd.execute();
        }
    }
}

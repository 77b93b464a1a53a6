use macroquad::math::{Rect, Vec2};

/// Stacks fixed-height rows down a column, each row `spacing` below the last.
pub struct VBox {
    pub padding: f32,
    pub spacing: f32,
    state: Option<Column>,
}

struct Column {
    area: Rect,
    next: Vec2,
}

impl VBox {
    pub fn new(padding: f32, spacing: f32) -> Self {
        Self {
            padding,
            spacing,
            state: None,
        }
    }

    /// Starts a column in the top-left corner of `area`, inset by the padding.
    pub fn begin(&mut self, area: Rect) {
        let next = Vec2::new(area.x + self.padding, area.y + self.padding);
        self.state = Some(Column { area, next });
    }

    /// Places the next row. Rows wider than the padded area are cut to fit.
    pub fn item(&mut self, desired: Vec2) -> Rect {
        let column = self
            .state
            .as_mut()
            .expect("VBox::begin must be called before item");
        let room = (column.area.w - 2.0 * self.padding).max(0.0);
        let row = Rect::new(column.next.x, column.next.y, desired.x.min(room), desired.y);
        column.next.y += row.h + self.spacing;
        row
    }

    pub fn end(&mut self) {
        self.state = None;
    }
}

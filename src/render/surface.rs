use ratatui::{buffer::Buffer, layout::Rect, style::Color};

/// Drawing primitive the renderer needs from the host: filled rectangles in
/// field units.
pub trait Surface {
    fn fill_rect(&mut self, x: i32, y: i32, width: i32, height: i32, color: Color);
}

/// A `Surface` over a region of a ratatui buffer.
///
/// Field units are mapped onto terminal cells at a fixed ratio. A terminal
/// cell is painted when its centre falls inside the rectangle, and nothing is
/// drawn outside `area`.
pub struct BufferSurface<'a> {
    buf: &'a mut Buffer,
    area: Rect,
    units_per_column: i32,
    units_per_row: i32,
}

impl<'a> BufferSurface<'a> {
    pub fn new(
        buf: &'a mut Buffer,
        area: Rect,
        units_per_column: i32,
        units_per_row: i32,
    ) -> Self {
        Self {
            buf,
            area,
            units_per_column: units_per_column.max(1),
            units_per_row: units_per_row.max(1),
        }
    }

    /// First and one-past-last terminal index whose centre lies in [start, start + len)
    fn span(start: i32, len: i32, step: i32) -> (i64, i64) {
        // centre of index i is i * step + step / 2; widened so far-off
        // rectangles cannot overflow
        let (start, len, step) = (i64::from(start), i64::from(len), i64::from(step));
        let first = div_ceil(2 * start - step, 2 * step);
        let end = div_ceil(2 * (start + len) - step, 2 * step);
        (first, end)
    }
}

fn div_ceil(a: i64, b: i64) -> i64 {
    a.div_euclid(b) + i64::from(a.rem_euclid(b) != 0)
}

impl Surface for BufferSurface<'_> {
    fn fill_rect(&mut self, x: i32, y: i32, width: i32, height: i32, color: Color) {
        let (first_col, end_col) = Self::span(x, width, self.units_per_column);
        let (first_row, end_row) = Self::span(y, height, self.units_per_row);

        let first_col = first_col.max(0);
        let first_row = first_row.max(0);
        let end_col = end_col.min(i64::from(self.area.width));
        let end_row = end_row.min(i64::from(self.area.height));

        for row in first_row..end_row {
            for col in first_col..end_col {
                // both bounded by the u16 area size above
                let position = (self.area.x + col as u16, self.area.y + row as u16);
                if let Some(cell) = self.buf.cell_mut(position) {
                    cell.set_symbol(" ").set_bg(color);
                }
            }
        }
    }
}
